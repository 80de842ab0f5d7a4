//! # Shell
//!
//! The presentation state machine: form, results table and notice, bound
//! to a [`ProductStore`].
//!
//! ## Request / Response
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  key press ─► Action ─► Shell::perform                                 │
//! │                              │                                          │
//! │                              ▼                                          │
//! │                 validate form ─► store call ─► refresh table            │
//! │                              │                                          │
//! │                              ▼                                          │
//! │                 Notice (info / warning / error)                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The store is handed in at construction, so tests run the same shell
//! against their own in-memory database.

use tempo_db::ProductStore;
use tracing::{debug, warn};

use crate::error::ApiError;
use crate::state::{FormState, Notice, ResultsTable};

/// A user-triggered operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Add,
    Update,
    Delete,
    Search,
    /// Reload the unfiltered first page.
    Reload,
    ClearFields,
    /// Copy the selected row into the form.
    LoadSelection,
}

/// Form, table and notice state bound to a product store.
#[derive(Debug)]
pub struct Shell<S> {
    pub(crate) store: S,
    pub(crate) row_limit: u32,
    pub form: FormState,
    pub table: ResultsTable,
    notice: Option<Notice>,
}

impl<S: ProductStore> Shell<S> {
    /// Creates a shell with an empty form and table.
    ///
    /// Call [`Shell::perform`] with [`Action::Reload`] (or
    /// `load_products`) to fill the table.
    pub fn new(store: S, row_limit: u32) -> Self {
        Shell {
            store,
            row_limit,
            form: FormState::new(),
            table: ResultsTable::new(),
            notice: None,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// The notice currently shown, if any.
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Runs one action and records the resulting notice.
    ///
    /// Reload, clear and load-selection only raise a notice on failure.
    pub async fn perform(&mut self, action: Action) {
        debug!(?action, "Performing action");

        let result = match action {
            Action::Add => self.add_product().await.map(Some),
            Action::Update => self.update_product().await.map(Some),
            Action::Delete => self.delete_product().await.map(Some),
            Action::Search => self.search_products().await.map(Some),
            Action::Reload => self.load_products().await.map(|_| None),
            Action::ClearFields => {
                self.clear_fields();
                Ok(None)
            }
            Action::LoadSelection => self.load_selection().map(|_| None),
        };

        match result {
            Ok(Some(notice)) => self.notice = Some(notice),
            Ok(None) => {}
            Err(err) => {
                warn!(?action, code = ?err.code, message = %err.message, "Action rejected");
                self.notice = Some(err.into_notice());
            }
        }
    }

    /// Copies the selected row into the form for editing.
    pub fn load_selection(&mut self) -> Result<(), ApiError> {
        let product = self
            .table
            .selected()
            .cloned()
            .ok_or_else(|| ApiError::selection("Select a product to edit"))?;

        self.form.fill_from(&product);
        Ok(())
    }

    /// Empties all five fields.
    pub fn clear_fields(&mut self) {
        self.form.clear();
    }
}
