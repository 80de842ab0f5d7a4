//! # State Module
//!
//! Plain state types owned by the [`Shell`](crate::shell::Shell).
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────┐  ┌────────────┐  │
//! │  │ ConfigState  │  │  FormState   │  │ ResultsTable │  │   Notice   │  │
//! │  │              │  │              │  │              │  │            │  │
//! │  │ db path      │  │ 5 fields     │  │ rows         │  │ level      │  │
//! │  │ startup mode │  │ (text)       │  │ selection    │  │ title      │  │
//! │  │ row limit    │  │              │  │              │  │ message    │  │
//! │  └──────────────┘  └──────────────┘  └──────────────┘  └────────────┘  │
//! │   read-only         transient         transient          transient     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing here is persisted; only the database outlives the process.

mod config;
mod form;
mod notice;
mod table;

pub use config::{ConfigError, ConfigState, CONFIG_PATH_VAR};
pub use form::{Field, Focus, FormState};
pub use notice::{Notice, NoticeLevel};
pub use table::ResultsTable;
