//! # Form State
//!
//! The five entry fields and which of them has focus.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │ Product ID    [          ]  ← ignored by Add │
//! │ Product Name  [Guitar    ]                   │
//! │ Category      [Strings   ]                   │
//! │ Price         [299.99    ]                   │
//! │ Description   [6-string  ]                   │
//! └──────────────────────────────────────────────┘
//! ```

use tempo_core::Product;

/// One of the five entry fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Id,
    Name,
    Category,
    Price,
    Description,
}

impl Field {
    /// All fields in display order.
    pub const ALL: [Field; 5] = [
        Field::Id,
        Field::Name,
        Field::Category,
        Field::Price,
        Field::Description,
    ];

    /// Label shown left of the entry.
    pub fn label(self) -> &'static str {
        match self {
            Field::Id => "Product ID",
            Field::Name => "Product Name",
            Field::Category => "Category",
            Field::Price => "Price",
            Field::Description => "Description",
        }
    }

    fn index(self) -> usize {
        match self {
            Field::Id => 0,
            Field::Name => 1,
            Field::Category => 2,
            Field::Price => 3,
            Field::Description => 4,
        }
    }
}

/// Where keyboard input goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(Field),
    Table,
}

impl Focus {
    /// Focus order: the five fields top to bottom, then the table.
    fn order() -> [Focus; 6] {
        [
            Focus::Field(Field::Id),
            Focus::Field(Field::Name),
            Focus::Field(Field::Category),
            Focus::Field(Field::Price),
            Focus::Field(Field::Description),
            Focus::Table,
        ]
    }

    fn position(self) -> usize {
        Focus::order()
            .iter()
            .position(|f| *f == self)
            .unwrap_or(0)
    }

    /// Next focus target, wrapping around.
    pub fn next(self) -> Focus {
        let order = Focus::order();
        order[(self.position() + 1) % order.len()]
    }

    /// Previous focus target, wrapping around.
    pub fn prev(self) -> Focus {
        let order = Focus::order();
        order[(self.position() + order.len() - 1) % order.len()]
    }
}

/// Text of the five entry fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    values: [String; 5],
}

impl FormState {
    pub fn new() -> Self {
        FormState::default()
    }

    /// Current text of a field.
    pub fn get(&self, field: Field) -> &str {
        &self.values[field.index()]
    }

    /// Replaces the text of a field.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.values[field.index()] = value.into();
    }

    /// Appends a typed character.
    pub fn push_char(&mut self, field: Field, c: char) {
        self.values[field.index()].push(c);
    }

    /// Removes the last character.
    pub fn backspace(&mut self, field: Field) {
        self.values[field.index()].pop();
    }

    /// Empties one field.
    pub fn clear_field(&mut self, field: Field) {
        self.values[field.index()].clear();
    }

    /// Empties all five fields.
    pub fn clear(&mut self) {
        for value in &mut self.values {
            value.clear();
        }
    }

    /// Whether every field is empty.
    pub fn is_empty(&self) -> bool {
        self.values.iter().all(String::is_empty)
    }

    /// Copies a row into the form, id included.
    pub fn fill_from(&mut self, product: &Product) {
        self.set(Field::Id, product.id.to_string());
        self.set(Field::Name, product.name.as_str());
        self.set(Field::Category, product.category.as_str());
        self.set(Field::Price, product.price.to_string());
        self.set(Field::Description, product.description.as_str());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_editing() {
        let mut form = FormState::new();
        for c in "Gitar".chars() {
            form.push_char(Field::Name, c);
        }
        form.backspace(Field::Name);
        form.backspace(Field::Name);
        form.push_char(Field::Name, 'a');
        form.push_char(Field::Name, 'r');
        assert_eq!(form.get(Field::Name), "Gitar");

        form.clear_field(Field::Name);
        assert!(form.is_empty());
    }

    #[test]
    fn test_fill_and_clear() {
        let mut form = FormState::new();
        form.fill_from(&Product {
            id: 3,
            name: "Cajon".to_string(),
            category: "Percussion".to_string(),
            price: 89.5,
            description: "Birch".to_string(),
        });

        assert_eq!(form.get(Field::Id), "3");
        assert_eq!(form.get(Field::Price), "89.5");
        assert_eq!(form.get(Field::Description), "Birch");

        form.clear();
        assert!(Field::ALL.iter().all(|f| form.get(*f).is_empty()));
    }

    #[test]
    fn test_focus_cycles() {
        let start = Focus::Field(Field::Id);
        let mut focus = start;
        for _ in 0..6 {
            focus = focus.next();
        }
        assert_eq!(focus, start);
        assert_eq!(start.prev(), Focus::Table);
        assert_eq!(Focus::Table.next(), start);
        assert_eq!(
            Focus::Field(Field::Description).next(),
            Focus::Table
        );
    }
}
