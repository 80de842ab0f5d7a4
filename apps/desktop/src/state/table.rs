//! # Results Table State
//!
//! Rows currently displayed and the selected one.
//!
//! Selection is transient: every reload or search replaces the rows and
//! clears it, so an update or delete always acts on a row the user picked
//! from what is on screen.

use tempo_core::Product;

#[derive(Debug, Clone, Default)]
pub struct ResultsTable {
    rows: Vec<Product>,
    selected: Option<usize>,
}

impl ResultsTable {
    pub fn new() -> Self {
        ResultsTable::default()
    }

    /// Replaces all rows and clears the selection.
    pub fn replace(&mut self, rows: Vec<Product>) {
        self.rows = rows;
        self.selected = None;
    }

    pub fn rows(&self) -> &[Product] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of the selected row.
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// The selected row, if any.
    pub fn selected(&self) -> Option<&Product> {
        self.selected.and_then(|i| self.rows.get(i))
    }

    /// Selects a row by index; out-of-range clears the selection.
    pub fn select(&mut self, index: Option<usize>) {
        self.selected = index.filter(|i| *i < self.rows.len());
    }

    /// Moves the selection down one row. Selects the first row if none.
    pub fn select_next(&mut self) {
        if self.rows.is_empty() {
            return;
        }
        self.selected = Some(match self.selected {
            Some(i) if i + 1 < self.rows.len() => i + 1,
            Some(i) => i,
            None => 0,
        });
    }

    /// Moves the selection up one row. Selects the first row if none.
    pub fn select_prev(&mut self) {
        if self.rows.is_empty() {
            return;
        }
        self.selected = Some(self.selected.map_or(0, |i| i.saturating_sub(1)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(n: i64) -> Vec<Product> {
        (1..=n)
            .map(|id| Product {
                id,
                name: format!("Item {}", id),
                category: "Keys".to_string(),
                price: 10.0,
                description: String::new(),
            })
            .collect()
    }

    #[test]
    fn test_selection_moves_within_bounds() {
        let mut table = ResultsTable::new();
        table.select_next();
        assert_eq!(table.selected_index(), None);

        table.replace(rows(3));
        table.select_prev();
        assert_eq!(table.selected_index(), Some(0));
        table.select_next();
        table.select_next();
        table.select_next();
        assert_eq!(table.selected().map(|p| p.id), Some(3));
        table.select_prev();
        assert_eq!(table.selected().map(|p| p.id), Some(2));
    }

    #[test]
    fn test_replace_clears_selection() {
        let mut table = ResultsTable::new();
        table.replace(rows(3));
        table.select(Some(1));
        assert!(table.selected().is_some());

        table.replace(rows(2));
        assert_eq!(table.selected(), None);
        assert_eq!(table.len(), 2);

        table.select(Some(5));
        assert_eq!(table.selected_index(), None);
    }
}
