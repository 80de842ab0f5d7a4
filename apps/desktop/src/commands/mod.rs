//! # Commands Module
//!
//! Handlers behind the four form buttons and the table reload.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here
//! └── product.rs  ◄─── add / update / delete / search / reload
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  F3 pressed                                                            │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Shell::perform(Action::Update)                                        │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  impl<S: ProductStore> Shell<S> {                                      │
//! │      async fn update_product(&mut self) -> Result<Notice, ApiError>    │
//! │  }                                                                      │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Ok(notice)  ──► popup, form cleared, table reloaded                   │
//! │  Err(error)  ──► popup, nothing else touched                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each handler is an inherent method on [`Shell`](crate::shell::Shell),
//! so it sees the form, the table and the store together.

pub mod product;
