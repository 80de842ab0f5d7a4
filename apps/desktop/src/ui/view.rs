//! # Rendering
//!
//! Draws one frame from the current [`App`] state. Nothing here mutates
//! the shell.

use ratatui::{
    layout::Flex,
    prelude::*,
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, TableState, Wrap},
};
use tempo_db::ProductStore;

use super::App;
use crate::state::{Field, Focus, Notice, NoticeLevel};

const ADD_GREEN: Color = Color::Rgb(0x4C, 0xAF, 0x50);
const UPDATE_ORANGE: Color = Color::Rgb(0xFF, 0x98, 0x00);
const DELETE_RED: Color = Color::Rgb(0xF4, 0x43, 0x36);
const SEARCH_BLUE: Color = Color::Rgb(0x21, 0x96, 0xF3);

const LABEL_WIDTH: u16 = 14;

/// Draws the whole window.
pub fn draw<S: ProductStore>(frame: &mut Frame, app: &App<S>) {
    let window = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", app.title()))
        .title_style(Style::default().fg(Color::Cyan).bold())
        .style(Style::default().bg(Color::Black).fg(Color::White));
    let inner = window.inner(frame.area());
    frame.render_widget(window, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(Field::ALL.len() as u16 + 2), // Form
            Constraint::Length(3),                           // Buttons
            Constraint::Min(3),                              // Table
            Constraint::Length(1),                           // Status bar
        ])
        .split(inner);

    render_form(frame, app, chunks[0]);
    render_buttons(frame, chunks[1]);
    render_table(frame, app, chunks[2]);
    frame.render_widget(status_bar(), chunks[3]);

    if let Some(notice) = app.shell.notice() {
        render_notice(frame, notice, frame.area());
    }
}

fn render_form<S: ProductStore>(frame: &mut Frame, app: &App<S>, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Product Details ")
        .border_style(focus_border(matches!(app.focus, Focus::Field(_))));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines: Vec<Line> = Field::ALL
        .iter()
        .map(|&field| {
            let focused = app.focus == Focus::Field(field);
            let value_style = if focused {
                Style::default().fg(Color::Black).bg(Color::White)
            } else {
                Style::default().fg(Color::White).bg(Color::DarkGray)
            };
            Line::from(vec![
                Span::styled(
                    format!("{:<width$}", field.label(), width = LABEL_WIDTH as usize),
                    Style::default().fg(Color::Yellow),
                ),
                Span::styled(format!(" {:<30}", app.shell.form.get(field)), value_style),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), inner);

    if let Focus::Field(field) = app.focus {
        let row = Field::ALL.iter().position(|f| *f == field).unwrap_or(0) as u16;
        let typed = app.shell.form.get(field).chars().count() as u16;
        let x = inner.x + LABEL_WIDTH + 1 + typed;
        if row < inner.height && x < inner.right() {
            frame.set_cursor_position(Position::new(x, inner.y + row));
        }
    }
}

fn render_buttons(frame: &mut Frame, area: Rect) {
    let buttons = [
        ("F2 Add", ADD_GREEN),
        ("F3 Update", UPDATE_ORANGE),
        ("F4 Delete", DELETE_RED),
        ("F5 Search", SEARCH_BLUE),
    ];

    let slots = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(16); 4])
        .spacing(2)
        .split(area);

    for ((label, color), slot) in buttons.iter().zip(slots.iter()) {
        let button = Paragraph::new(*label)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::White).bg(*color).bold())
            .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(*color)));
        frame.render_widget(button, *slot);
    }
}

fn render_table<S: ProductStore>(frame: &mut Frame, app: &App<S>, area: Rect) {
    let header = Row::new(["Product ID", "Product name", "Category", "Price", "Description"])
        .style(Style::default().fg(Color::Cyan).bold());

    let rows: Vec<Row> = app
        .shell
        .table
        .rows()
        .iter()
        .map(|p| {
            Row::new(vec![
                Cell::from(p.id.to_string()),
                Cell::from(p.name.clone()),
                Cell::from(p.category.clone()),
                Cell::from(p.display_price()),
                Cell::from(p.description.clone()),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(10),
        Constraint::Percentage(25),
        Constraint::Percentage(15),
        Constraint::Length(10),
        Constraint::Min(10),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" Products ({}) ", app.shell.table.len()))
                .border_style(focus_border(app.focus == Focus::Table)),
        )
        .row_highlight_style(Style::default().bg(Color::DarkGray).fg(Color::White).bold())
        .highlight_symbol("› ");

    let mut state = TableState::default().with_selected(app.shell.table.selected_index());
    frame.render_stateful_widget(table, area, &mut state);
}

fn status_bar() -> Paragraph<'static> {
    let key = Style::default().fg(Color::Yellow);
    let spans = vec![
        Span::styled(" Tab ", key),
        Span::raw("focus  "),
        Span::styled("j/k ", key),
        Span::raw("select  "),
        Span::styled("Enter ", key),
        Span::raw("edit row  "),
        Span::styled("F6 ", key),
        Span::raw("reload  "),
        Span::styled("F7 ", key),
        Span::raw("clear  "),
        Span::styled("Ctrl-Q ", key),
        Span::raw("quit"),
    ];
    Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray))
}

fn render_notice(frame: &mut Frame, notice: &Notice, area: Rect) {
    let color = match notice.level {
        NoticeLevel::Info => Color::Green,
        NoticeLevel::Warning => Color::Yellow,
        NoticeLevel::Error => Color::Red,
    };

    let [popup] = Layout::vertical([Constraint::Length(7)])
        .flex(Flex::Center)
        .areas(area);
    let [popup] = Layout::horizontal([Constraint::Percentage(50)])
        .flex(Flex::Center)
        .areas(popup);

    let body = vec![
        Line::from(notice.message.as_str()),
        Line::from(""),
        Line::from(Span::styled(
            format!("{}  ·  press any key", notice.timestamp()),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(body)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", notice.title))
                .title_style(Style::default().fg(color).bold())
                .border_style(Style::default().fg(color))
                .style(Style::default().bg(Color::Black)),
        );

    frame.render_widget(Clear, popup);
    frame.render_widget(paragraph, popup);
}

fn focus_border(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Gray)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use tempo_db::{Database, DbConfig, ProductRepository};

    use crate::shell::{Action, Shell};

    fn screen(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    async fn app() -> (App<ProductRepository>, Database) {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let shell = Shell::new(db.products(), 50);
        (App::new(shell, "Music Store Management System"), db)
    }

    #[tokio::test]
    async fn test_renders_window_and_rows() {
        let (mut app, _db) = app().await;
        app.shell.form.set(Field::Name, "Guitar");
        app.shell.form.set(Field::Category, "Strings");
        app.shell.form.set(Field::Price, "299.99");
        app.shell.perform(Action::Add).await;
        app.shell.dismiss_notice();

        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        terminal.draw(|frame| draw(frame, &app)).unwrap();
        let text = screen(&terminal);

        assert!(text.contains("Music Store Management System"));
        assert!(text.contains("Product name"));
        assert!(text.contains("F4 Delete"));
        assert!(text.contains("299.99"));
    }

    #[tokio::test]
    async fn test_renders_notice_popup() {
        let (mut app, _db) = app().await;
        app.shell.perform(Action::Search).await;

        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        terminal.draw(|frame| draw(frame, &app)).unwrap();

        assert!(screen(&terminal).contains("Search Error"));
    }
}
