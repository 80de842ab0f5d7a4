//! # Terminal Window
//!
//! Runs the form/table window in the terminal until the user quits.
//!
//! ```text
//! ┌─ Music Store Management System ─────────────────────────────────────────┐
//! │ ┌ Product Details ────────────────────────────────────────────────────┐ │
//! │ │ Product ID    [                ]                                     │ │
//! │ │ Product Name  [Guitar          ]                                     │ │
//! │ │ ...                                                                  │ │
//! │ └──────────────────────────────────────────────────────────────────────┘ │
//! │  [ F2 Add ]  [ F3 Update ]  [ F4 Delete ]  [ F5 Search ]                 │
//! │ ┌ Products ───────────────────────────────────────────────────────────┐ │
//! │ │ Product ID  Product name  Category  Price   Description              │ │
//! │ │ 1           Guitar        Strings   299.99  6-string acoustic        │ │
//! │ └──────────────────────────────────────────────────────────────────────┘ │
//! │ Tab focus  F6 reload  F7 clear  Ctrl-Q quit                              │
//! └──────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The loop is synchronous: each key press that triggers a store call
//! blocks on the runtime until the call returns, then redraws.

mod keys;
mod view;

pub use keys::{map_key, Command};

use std::io::{self, stdout};

use crossterm::{
    event::{self, Event, KeyEvent, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tempo_db::ProductStore;
use tokio::runtime::Runtime;
use tracing::{debug, info};

use crate::shell::{Action, Shell};
use crate::state::{Field, Focus};

/// The window: a shell plus focus and title.
#[derive(Debug)]
pub struct App<S> {
    pub shell: Shell<S>,
    pub focus: Focus,
    title: String,
    quit: bool,
}

impl<S: ProductStore> App<S> {
    pub fn new(shell: Shell<S>, title: impl Into<String>) -> Self {
        App {
            shell,
            focus: Focus::Field(Field::Name),
            title: title.into(),
            quit: false,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Applies a key press to local state.
    ///
    /// Returns the action to run against the store, if the key asked for
    /// one. While a notice is shown, any key only dismisses it.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Action> {
        if self.shell.notice().is_some() {
            self.shell.dismiss_notice();
            return None;
        }

        let command = map_key(key, self.focus)?;
        debug!(?command, "Key mapped");

        match command {
            Command::Quit => self.quit = true,
            Command::Dismiss => {}
            Command::FocusNext => self.focus = self.focus.next(),
            Command::FocusPrev => self.focus = self.focus.prev(),
            Command::Type(c) => {
                if let Focus::Field(field) = self.focus {
                    self.shell.form.push_char(field, c);
                }
            }
            Command::Backspace => {
                if let Focus::Field(field) = self.focus {
                    self.shell.form.backspace(field);
                }
            }
            Command::ClearField => {
                if let Focus::Field(field) = self.focus {
                    self.shell.form.clear_field(field);
                }
            }
            Command::SelectNext => self.shell.table.select_next(),
            Command::SelectPrev => self.shell.table.select_prev(),
            Command::Perform(action) => return Some(action),
        }
        None
    }

    /// Takes over the terminal and runs until quit.
    ///
    /// The terminal is restored even when drawing fails.
    pub fn run(mut self, rt: &Runtime) -> io::Result<Shell<S>> {
        enable_raw_mode()?;
        let guard = TerminalGuard;
        stdout().execute(EnterAlternateScreen)?;
        let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

        info!("Window opened");
        let result = self.main_loop(&mut terminal, rt);
        drop(guard);
        info!("Window closed");

        result.map(|_| self.shell)
    }

    fn main_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        rt: &Runtime,
    ) -> io::Result<()> {
        while !self.quit {
            terminal.draw(|frame| view::draw(frame, self))?;

            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if let Some(action) = self.handle_key(key) {
                    rt.block_on(self.shell.perform(action));
                }
            }
        }
        Ok(())
    }
}

/// Leaves raw mode and the alternate screen on drop.
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = stdout().execute(LeaveAlternateScreen);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};
    use tempo_db::{Database, DbConfig, ProductRepository};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    async fn app() -> (App<ProductRepository>, Database) {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let shell = Shell::new(db.products(), 50);
        (App::new(shell, "Music Store Management System"), db)
    }

    #[tokio::test]
    async fn test_typing_fills_focused_field() {
        let (mut app, _db) = app().await;

        for c in "Gu".chars() {
            assert_eq!(app.handle_key(press(KeyCode::Char(c))), None);
        }
        app.handle_key(press(KeyCode::Tab));
        app.handle_key(press(KeyCode::Char('S')));
        app.handle_key(press(KeyCode::Backspace));
        app.handle_key(press(KeyCode::Char('K')));

        assert_eq!(app.shell.form.get(Field::Name), "Gu");
        assert_eq!(app.shell.form.get(Field::Category), "K");
        assert_eq!(app.focus, Focus::Field(Field::Category));
    }

    #[tokio::test]
    async fn test_notice_swallows_next_key() {
        let (mut app, _db) = app().await;
        app.shell.perform(Action::Search).await;
        assert!(app.shell.notice().is_some());

        assert_eq!(app.handle_key(press(KeyCode::F(2))), None);
        assert!(app.shell.notice().is_none());
        assert_eq!(app.handle_key(press(KeyCode::F(2))), Some(Action::Add));
    }

    #[tokio::test]
    async fn test_quit() {
        let (mut app, _db) = app().await;
        app.handle_key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL));
        assert!(app.should_quit());
    }
}
