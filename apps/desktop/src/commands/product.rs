//! # Product Commands
//!
//! The four form actions plus the table reload.
//!
//! ## Command Contracts
//! ```text
//! ┌──────────┬──────────────────────┬─────────────────────┬───────────────┐
//! │ Command  │ Precondition         │ On success          │ On failure    │
//! ├──────────┼──────────────────────┼─────────────────────┼───────────────┤
//! │ Add      │ price parses         │ clear form, reload  │ nothing moves │
//! │ Update   │ row selected, price  │ clear form, reload  │ nothing moves │
//! │ Delete   │ row selected         │ reload              │ nothing moves │
//! │ Search   │ name or category set │ table = results     │ nothing moves │
//! └──────────┴──────────────────────┴─────────────────────┴───────────────┘
//! ```

use tempo_core::{MutationOutcome, NewProduct, SearchFilter};
use tempo_db::ProductStore;
use tracing::{info, warn};

use crate::error::ApiError;
use crate::shell::Shell;
use crate::state::{Field, Notice, NoticeLevel};

impl<S: ProductStore> Shell<S> {
    /// Reloads the unfiltered first page and clears the selection.
    pub async fn load_products(&mut self) -> Result<(), ApiError> {
        let rows = self.store.list(self.row_limit).await?;
        info!(count = rows.len(), limit = self.row_limit, "Products loaded");
        self.table.replace(rows);
        Ok(())
    }

    /// Adds a product from the form. The id field is ignored.
    pub async fn add_product(&mut self) -> Result<Notice, ApiError> {
        let product = self.product_from_form()?;

        let id = self.store.add(&product).await?;
        info!(id, name = %product.name, "Product added");

        self.clear_fields();
        Ok(self.reload_after("Product added successfully").await)
    }

    /// Overwrites the selected row with the form values.
    pub async fn update_product(&mut self) -> Result<Notice, ApiError> {
        let id = self.selected_id("Select a product to update")?;
        let product = self.product_from_form()?;

        match self.store.update(id, &product).await? {
            MutationOutcome::Applied => {
                info!(id, "Product updated");
                self.clear_fields();
                Ok(self.reload_after("Product updated successfully").await)
            }
            MutationOutcome::NotFound => Err(ApiError::not_found("Product", id)),
        }
    }

    /// Deletes the selected row.
    pub async fn delete_product(&mut self) -> Result<Notice, ApiError> {
        let id = self.selected_id("Select a product to delete")?;

        match self.store.delete(id).await? {
            MutationOutcome::Applied => {
                info!(id, "Product deleted");
                Ok(self.reload_after("Product deleted successfully").await)
            }
            MutationOutcome::NotFound => Err(ApiError::not_found("Product", id)),
        }
    }

    /// Replaces the table with rows matching the name/category fields.
    ///
    /// Both fields blank is rejected before the store is called.
    pub async fn search_products(&mut self) -> Result<Notice, ApiError> {
        let filter = SearchFilter::new(self.form.get(Field::Name), self.form.get(Field::Category))?;

        let rows = self.store.search(&filter).await?;
        let count = rows.len();
        info!(count, name = ?filter.name(), category = ?filter.category(), "Search complete");
        self.table.replace(rows);

        if count == 0 {
            Ok(Notice::info(
                "No Results",
                "No products found for the given criteria.",
            ))
        } else {
            Ok(Notice::info(
                "Search Result",
                format!("Found {} matching product(s).", count),
            ))
        }
    }

    /// Reloads the table after a committed change.
    ///
    /// The change is already saved, so a failed reload is reported as a
    /// warning on top of the success message, not as a failed command.
    async fn reload_after(&mut self, message: &str) -> Notice {
        match self.load_products().await {
            Ok(()) => Notice::info("Success", message),
            Err(err) => {
                warn!(code = ?err.code, message = %err.message, "Reload after change failed");
                Notice::new(
                    NoticeLevel::Warning,
                    "Reload Failed",
                    format!("{}. The table could not be reloaded: {}", message, err.message),
                )
            }
        }
    }

    fn product_from_form(&self) -> Result<NewProduct, ApiError> {
        let product = NewProduct::from_fields(
            self.form.get(Field::Name),
            self.form.get(Field::Category),
            self.form.get(Field::Price),
            self.form.get(Field::Description),
        )?;
        Ok(product)
    }

    fn selected_id(&self, message: &str) -> Result<i64, ApiError> {
        self.table
            .selected()
            .map(|p| p.id)
            .ok_or_else(|| ApiError::selection(message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use tempo_core::Product;
    use tempo_db::{Database, DbConfig, DbError, DbResult, ProductRepository};

    use crate::error::ErrorCode;
    use crate::shell::Action;

    /// Counts every call that reaches the database.
    #[derive(Debug)]
    struct CountingStore {
        inner: ProductRepository,
        calls: AtomicUsize,
        fail_list: AtomicBool,
    }

    impl CountingStore {
        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        fn hit(&self) {
            self.calls.fetch_add(1, Ordering::SeqCst);
        }
    }

    impl ProductStore for CountingStore {
        async fn list(&self, limit: u32) -> DbResult<Vec<Product>> {
            self.hit();
            if self.fail_list.load(Ordering::SeqCst) {
                return Err(DbError::PoolExhausted);
            }
            self.inner.list(limit).await
        }

        async fn add(&self, product: &NewProduct) -> DbResult<i64> {
            self.hit();
            self.inner.add(product).await
        }

        async fn update(&self, id: i64, product: &NewProduct) -> DbResult<MutationOutcome> {
            self.hit();
            self.inner.update(id, product).await
        }

        async fn delete(&self, id: i64) -> DbResult<MutationOutcome> {
            self.hit();
            self.inner.delete(id).await
        }

        async fn search(&self, filter: &SearchFilter) -> DbResult<Vec<Product>> {
            self.hit();
            self.inner.search(filter).await
        }
    }

    async fn shell() -> (Shell<CountingStore>, Database) {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let store = CountingStore {
            inner: db.products(),
            calls: AtomicUsize::new(0),
            fail_list: AtomicBool::new(false),
        };
        (Shell::new(store, 50), db)
    }

    fn fill(shell: &mut Shell<CountingStore>, name: &str, category: &str, price: &str, desc: &str) {
        shell.form.set(Field::Name, name);
        shell.form.set(Field::Category, category);
        shell.form.set(Field::Price, price);
        shell.form.set(Field::Description, desc);
    }

    async fn add(shell: &mut Shell<CountingStore>, name: &str, category: &str, price: &str) {
        fill(shell, name, category, price, "");
        shell.add_product().await.unwrap();
    }

    fn select_named(shell: &mut Shell<CountingStore>, name: &str) {
        let index = shell.table.rows().iter().position(|p| p.name == name);
        shell.table.select(index);
    }

    #[tokio::test]
    async fn test_add_clears_form_and_shows_row() {
        let (mut shell, _db) = shell().await;
        fill(&mut shell, "Guitar", "Strings", "299.99", "6-string acoustic");

        let notice = shell.add_product().await.unwrap();

        assert_eq!(notice.title, "Success");
        assert!(shell.form.is_empty());
        assert_eq!(shell.table.len(), 1);
        let row = &shell.table.rows()[0];
        assert!(row.id > 0);
        assert_eq!(row.name, "Guitar");
        assert_eq!(row.category, "Strings");
        assert_eq!(row.price, 299.99);
        assert_eq!(row.description, "6-string acoustic");
    }

    #[tokio::test]
    async fn test_add_ignores_id_field() {
        let (mut shell, _db) = shell().await;
        fill(&mut shell, "Guitar", "Strings", "299.99", "");
        shell.form.set(Field::Id, "42");

        shell.add_product().await.unwrap();

        assert_ne!(shell.table.rows()[0].id, 42);
    }

    #[tokio::test]
    async fn test_add_bad_price_keeps_fields() {
        let (mut shell, db) = shell().await;
        fill(&mut shell, "Guitar", "Strings", "abc", "6-string acoustic");
        let before = shell.form.clone();

        shell.perform(Action::Add).await;

        let notice = shell.notice().unwrap();
        assert_eq!(notice.level, NoticeLevel::Warning);
        assert_eq!(notice.title, "Invalid Input");
        assert_eq!(shell.form, before);
        assert_eq!(db.products().count().await.unwrap(), 0);
        assert_eq!(shell.store().calls(), 0);
    }

    #[tokio::test]
    async fn test_update_changes_selected_row_only() {
        let (mut shell, _db) = shell().await;
        add(&mut shell, "Guitar", "Strings", "299.99").await;
        add(&mut shell, "Violin", "Strings", "550").await;
        let violin_before = shell.table.rows()[1].clone();

        select_named(&mut shell, "Guitar");
        shell.load_selection().unwrap();
        shell.form.set(Field::Category, "Percussion");
        shell.update_product().await.unwrap();

        assert!(shell.form.is_empty());
        assert_eq!(shell.table.selected(), None);
        let rows = shell.table.rows();
        assert_eq!(rows[0].name, "Guitar");
        assert_eq!(rows[0].category, "Percussion");
        assert_eq!(rows[0].price, 299.99);
        assert_eq!(rows[1], violin_before);
    }

    #[tokio::test]
    async fn test_update_without_selection() {
        let (mut shell, _db) = shell().await;
        add(&mut shell, "Guitar", "Strings", "299.99").await;
        fill(&mut shell, "Changed", "Strings", "1", "");
        let calls = shell.store().calls();

        let err = shell.update_product().await.unwrap_err();

        assert_eq!(err.code, ErrorCode::SelectionError);
        assert_eq!(shell.store().calls(), calls);
        assert_eq!(shell.table.rows()[0].name, "Guitar");
        assert_eq!(shell.form.get(Field::Name), "Changed");
    }

    #[tokio::test]
    async fn test_update_validates_price_like_add() {
        let (mut shell, _db) = shell().await;
        add(&mut shell, "Guitar", "Strings", "299.99").await;
        select_named(&mut shell, "Guitar");
        fill(&mut shell, "Guitar", "Strings", "cheap", "");
        let calls = shell.store().calls();

        let err = shell.update_product().await.unwrap_err();

        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(shell.store().calls(), calls);
        assert_eq!(shell.table.rows()[0].price, 299.99);
        assert_eq!(shell.form.get(Field::Price), "cheap");
    }

    #[tokio::test]
    async fn test_update_of_vanished_row_is_not_found() {
        let (mut shell, db) = shell().await;
        add(&mut shell, "Guitar", "Strings", "299.99").await;
        select_named(&mut shell, "Guitar");
        let id = shell.table.selected().unwrap().id;
        db.products().delete(id).await.unwrap();

        fill(&mut shell, "Guitar", "Strings", "10", "");
        let err = shell.update_product().await.unwrap_err();

        assert_eq!(err.code, ErrorCode::NotFound);
        // Stale table and form are left for the user to see
        assert_eq!(shell.table.len(), 1);
        assert_eq!(shell.form.get(Field::Price), "10");
    }

    #[tokio::test]
    async fn test_delete_removes_selected_row() {
        let (mut shell, _db) = shell().await;
        add(&mut shell, "Guitar", "Strings", "299.99").await;
        add(&mut shell, "Snare Drum", "Percussion", "120").await;

        select_named(&mut shell, "Guitar");
        let notice = shell.delete_product().await.unwrap();

        assert_eq!(notice.message, "Product deleted successfully");
        let names: Vec<&str> = shell.table.rows().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Snare Drum"]);
    }

    #[tokio::test]
    async fn test_second_delete_reports_not_found() {
        let (mut shell, _db) = shell().await;
        add(&mut shell, "Guitar", "Strings", "299.99").await;
        select_named(&mut shell, "Guitar");
        let stale = shell.table.rows().to_vec();

        shell.delete_product().await.unwrap();

        // Put the stale row back on screen and try again
        shell.table.replace(stale);
        shell.table.select(Some(0));
        let err = shell.delete_product().await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[tokio::test]
    async fn test_delete_without_selection() {
        let (mut shell, _db) = shell().await;
        add(&mut shell, "Guitar", "Strings", "299.99").await;

        shell.perform(Action::Delete).await;

        let notice = shell.notice().unwrap();
        assert_eq!(notice.title, "Selection Error");
        assert_eq!(notice.message, "Select a product to delete");
        assert_eq!(shell.table.len(), 1);
    }

    #[tokio::test]
    async fn test_search_by_name_substring() {
        let (mut shell, _db) = shell().await;
        add(&mut shell, "Guitar", "Strings", "299.99").await;
        add(&mut shell, "Bass Guitar", "Strings", "449").await;
        add(&mut shell, "Snare Drum", "Percussion", "120").await;

        shell.form.set(Field::Name, "gui");
        let notice = shell.search_products().await.unwrap();

        assert_eq!(notice.title, "Search Result");
        assert_eq!(notice.message, "Found 2 matching product(s).");
        assert_eq!(shell.table.len(), 2);
        // Search does not clear the form
        assert_eq!(shell.form.get(Field::Name), "gui");
    }

    #[tokio::test]
    async fn test_search_with_no_matches() {
        let (mut shell, _db) = shell().await;
        add(&mut shell, "Guitar", "Strings", "299.99").await;

        shell.form.set(Field::Category, "Brass");
        let notice = shell.search_products().await.unwrap();

        assert_eq!(notice.title, "No Results");
        assert!(shell.table.is_empty());
    }

    #[tokio::test]
    async fn test_empty_search_never_reaches_store() {
        let (mut shell, _db) = shell().await;
        add(&mut shell, "Guitar", "Strings", "299.99").await;
        let calls = shell.store().calls();
        assert!(shell.form.is_empty());

        shell.perform(Action::Search).await;

        assert_eq!(shell.store().calls(), calls);
        let notice = shell.notice().unwrap();
        assert_eq!(notice.title, "Search Error");
        assert_eq!(shell.table.len(), 1);
    }

    #[tokio::test]
    async fn test_space_is_searched_as_typed() {
        let (mut shell, _db) = shell().await;
        add(&mut shell, "Guitar", "Strings", "299.99").await;
        add(&mut shell, "Bass Guitar", "Strings", "449").await;
        let calls = shell.store().calls();
        shell.form.set(Field::Name, " ");

        let notice = shell.search_products().await.unwrap();

        assert_eq!(shell.store().calls(), calls + 1);
        assert_eq!(notice.message, "Found 1 matching product(s).");
        assert_eq!(shell.table.rows()[0].name, "Bass Guitar");
    }

    #[tokio::test]
    async fn test_reload_is_idempotent() {
        let (mut shell, _db) = shell().await;
        add(&mut shell, "Guitar", "Strings", "299.99").await;
        add(&mut shell, "Cajon", "Percussion", "89").await;

        shell.load_products().await.unwrap();
        let first = shell.table.rows().to_vec();
        shell.perform(Action::Reload).await;

        assert_eq!(shell.table.rows(), first.as_slice());
        assert!(shell.notice().is_none());
    }

    #[tokio::test]
    async fn test_row_limit_caps_listing() {
        let (mut shell, _db) = shell().await;
        shell.row_limit = 2;
        for name in ["A", "B", "C"] {
            add(&mut shell, name, "Keys", "1").await;
        }

        assert_eq!(shell.table.len(), 2);
    }

    #[tokio::test]
    async fn test_storage_failure_is_error_notice() {
        let (mut shell, db) = shell().await;
        fill(&mut shell, "Guitar", "Strings", "299.99", "");
        db.close().await;

        shell.perform(Action::Add).await;

        let notice = shell.notice().unwrap();
        assert_eq!(notice.level, NoticeLevel::Error);
        assert_eq!(shell.form.get(Field::Name), "Guitar");
    }

    #[tokio::test]
    async fn test_add_reports_saved_row_when_reload_fails() {
        let (mut shell, db) = shell().await;
        fill(&mut shell, "Guitar", "Strings", "299.99", "");
        shell.store().fail_list.store(true, Ordering::SeqCst);

        shell.perform(Action::Add).await;

        let notice = shell.notice().unwrap();
        assert_eq!(notice.level, NoticeLevel::Warning);
        assert_eq!(notice.title, "Reload Failed");
        assert!(notice.message.starts_with("Product added successfully."));
        // The row is saved, so the form is cleared to avoid a duplicate add
        assert!(shell.form.is_empty());
        assert_eq!(db.products().count().await.unwrap(), 1);
    }
}
