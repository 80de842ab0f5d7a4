//! # Tempo Desktop Library
//!
//! Core library for the Tempo music store window.
//! This is the main entry point that configures and runs the terminal app.
//!
//! ## Module Organization
//! ```text
//! tempo_desktop_lib/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── shell.rs        ◄─── Shell: form + table + notice over a ProductStore
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── config.rs   ◄─── Configuration (defaults, file, env)
//! │   ├── form.rs     ◄─── The five entry fields and focus
//! │   ├── table.rs    ◄─── Result rows and selection
//! │   └── notice.rs   ◄─── Message-box popup
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   └── product.rs  ◄─── Add / update / delete / search / reload
//! ├── ui/
//! │   ├── mod.rs      ◄─── Event loop and terminal setup
//! │   ├── keys.rs     ◄─── Key map
//! │   └── view.rs     ◄─── Rendering
//! └── error.rs        ◄─── API error type for commands
//! ```

pub mod commands;
pub mod error;
pub mod shell;
pub mod state;
pub mod ui;

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use shell::{Action, Shell};
use state::ConfigState;
use tempo_db::Database;
use ui::App;

/// Runs the application until the user quits.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Load Configuration ───────────────────────────────────────────────► │
/// │     • defaults, then $TEMPO_CONFIG file, then TEMPO_* env vars          │
/// │                                                                         │
/// │  2. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, written to the log file       │
/// │     • Default: info, tempo=debug, sqlx=warn; RUST_LOG wins              │
/// │                                                                         │
/// │  3. Open Database ────────────────────────────────────────────────────► │
/// │     • fresh mode discards the existing file first                       │
/// │     • SQLite with WAL mode, run pending migrations                      │
/// │                                                                         │
/// │  4. Build Shell ──────────────────────────────────────────────────────► │
/// │     • product repository injected, first page loaded                    │
/// │                                                                         │
/// │  5. Run Window ───────────────────────────────────────────────────────► │
/// │     • blocks until Ctrl-Q, then closes the pool                         │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let (config, warnings) = ConfigState::load()?;

    init_tracing(&config.log_file)?;
    info!("Starting Tempo Music Store");
    for warning in &warnings {
        warn!("{}", warning);
    }

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let db = rt.block_on(Database::new(config.db_config()))?;

    let objects = rt.block_on(db.schema_objects())?;
    for object in &objects {
        info!(kind = %object.kind, name = %object.name, "Schema object");
    }

    let mut shell = Shell::new(db.products(), config.row_limit);
    rt.block_on(shell.perform(Action::Reload));

    let app = App::new(shell, config.window_title.as_str());
    let result = app.run(&rt);

    rt.block_on(db.close());
    info!("Tempo Music Store stopped");

    result.map(|_| ()).map_err(Into::into)
}

/// Initializes the tracing subscriber for structured logging.
///
/// Output goes to `log_file` (appended) because the terminal belongs to
/// the window.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=tempo=trace` - Show trace for tempo crates only
/// - Default: `info,tempo=debug,sqlx=warn`
fn init_tracing(log_file: &Path) -> std::io::Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(log_file)?;

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref()))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}

/// Default directives when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "info,tempo=debug,sqlx=warn";

/// Builds the log filter from `RUST_LOG`, falling back to the defaults when
/// it is unset or unparsable.
fn log_filter(rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}
