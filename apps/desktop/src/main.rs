//! # Tempo Entry Point
//!
//! Starts the music store window. All setup lives in `lib.rs` so it can be
//! tested without a terminal.
//!
//! ## Startup Sequence
//! 1. Load configuration
//! 2. Initialize tracing (log file)
//! 3. Open the database (fresh or persistent) & run migrations
//! 4. Build the shell and load the first page
//! 5. Run the window until Ctrl-Q

fn main() {
    if let Err(e) = tempo_desktop_lib::run() {
        eprintln!("tempo: {}", e);
        std::process::exit(1);
    }
}
