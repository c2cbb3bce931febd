//! TUI rendering with ratatui
//!
//! The board, keyboard hints and message panel are pure projections of the
//! game state.

use super::app::{App, MessageStyle};
use crate::core::{GAME_TITLE, MAX_TURNS, Tile, WORD_LENGTH};
use crate::game::{Row, RowKind, Status};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};
use rustc_hash::FxHashMap;

const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Main UI rendering function
pub fn ui<R>(f: &mut Frame, app: &App<R>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(16),   // Board and side panel
            Constraint::Length(3), // Help
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);
    render_help(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new(GAME_TITLE.to_uppercase())
        .style(
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Red)),
        );
    f.render_widget(header, area);
}

/// Style of a tile on the board or keyboard
fn tile_style(tile: Option<Tile>) -> Style {
    let base = Style::default().add_modifier(Modifier::BOLD);
    match tile {
        Some(Tile::Correct) => base.fg(Color::Black).bg(Color::Green),
        Some(Tile::Present) => base.fg(Color::Black).bg(Color::Yellow),
        Some(Tile::Absent) => base.fg(Color::White).bg(Color::DarkGray),
        None => base.fg(Color::White),
    }
}

fn row_line(row: &Row) -> Line<'static> {
    let letters: Vec<char> = row.letters.chars().collect();
    let mut spans = Vec::with_capacity(WORD_LENGTH * 2);

    for i in 0..WORD_LENGTH {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        let span = match letters.get(i) {
            Some(&c) => {
                let tile = row.feedback.map(|feedback| feedback.tiles()[i]);
                Span::styled(format!(" {} ", c.to_ascii_uppercase()), tile_style(tile))
            }
            None if row.kind == RowKind::Current => {
                Span::styled(" _ ", Style::default().fg(Color::White))
            }
            None => Span::styled(" · ", Style::default().fg(Color::DarkGray)),
        };
        spans.push(span);
    }

    Line::from(spans)
}

fn render_board<R>(f: &mut Frame, app: &App<R>, area: Rect) {
    let state = app.game.state();
    let mut lines = Vec::new();

    for row in state.rows() {
        lines.push(row_line(&row));
        lines.push(Line::from(""));
    }

    let border_color = match state.status() {
        Status::Over => Color::Green,
        Status::InProgress => Color::White,
    };

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(border_color)),
    );
    f.render_widget(board, area);
}

fn keyboard_lines(hints: &FxHashMap<char, Tile>) -> Vec<Line<'static>> {
    KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .map(|c| {
                    Span::styled(
                        format!(" {} ", c.to_ascii_uppercase()),
                        tile_style(hints.get(&c).copied()),
                    )
                })
                .collect();
            Line::from(spans)
        })
        .collect()
}

fn render_side_panel<R>(f: &mut Frame, app: &App<R>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(3)])
        .split(area);

    let keyboard = Paragraph::new(keyboard_lines(&app.game.state().letter_hints()))
        .alignment(Alignment::Center)
        .block(Block::default().title(" Letters ").borders(Borders::ALL));
    f.render_widget(keyboard, chunks[0]);

    render_messages(f, app, chunks[1]);
}

fn render_messages<R>(f: &mut Frame, app: &App<R>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_help<R>(f: &mut Frame, app: &App<R>, area: Rect) {
    let (text, color) = match app.game.state().status() {
        Status::InProgress => (
            "Type letters | Backspace: delete | Enter: submit | Ctrl+N: new game | Esc: quit",
            Color::Yellow,
        ),
        Status::Over => ("n: new game | s: share result | q: quit", Color::Green),
    };

    let help = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(color))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );
    f.render_widget(help, area);
}

fn render_status<R>(f: &mut Frame, app: &App<R>, area: Rect) {
    let stats = app.game.stats();
    let state = app.game.state();

    // Once over, the last filled slot is the turn the game ended on
    let turn = match state.status() {
        Status::Over => state.turns_used(),
        Status::InProgress => (state.turns_used() + 1).min(MAX_TURNS),
    };

    let text = format!(
        "Turn {}/{} | Games: {} | Win Rate: {:.0}%",
        turn,
        MAX_TURNS,
        stats.games_played,
        stats.win_rate()
    );

    let status = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(status, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Event, Game};
    use crate::share::FileExporter;
    use crate::wordlists::WordList;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(app: &App<StdRng>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    fn app() -> App<StdRng> {
        let words = WordList::from_strs(&["ghost"]).unwrap();
        let game = Game::new(words, StdRng::seed_from_u64(4));
        App::new(game, FileExporter::new("unused.txt"))
    }

    #[test]
    fn renders_title_and_panels() {
        let screen = render(&app());
        assert!(screen.contains("VALORDLE"));
        assert!(screen.contains("Board"));
        assert!(screen.contains("Messages"));
        assert!(screen.contains("Ctrl+N"));
    }

    #[test]
    fn renders_game_over_help() {
        let mut app = app();
        app.game.handle_all(Event::word("ghost"));
        let screen = render(&app);
        assert!(screen.contains("s: share result"));
    }

    #[test]
    fn status_bar_counts_turns() {
        let mut app = app();
        assert!(render(&app).contains("Turn 1/6"));

        app.game.handle_all(Event::word("smoke"));
        app.game.handle_all(Event::word("viper"));
        assert!(render(&app).contains("Turn 3/6"));

        app.game.handle_all(Event::word("ghost"));
        let screen = render(&app);
        assert!(screen.contains("Turn 3/6"));
        assert!(!screen.contains("Turn 4/6"));
    }

    #[test]
    fn row_line_has_one_span_per_tile_plus_gaps() {
        let row = Row {
            kind: RowKind::Submitted,
            letters: "ghost".to_string(),
            feedback: Some("GGGGG".parse().unwrap()),
        };
        let line = row_line(&row);
        assert_eq!(line.spans.len(), WORD_LENGTH * 2 - 1);
        assert_eq!(line.spans[0].content, " G ");
        assert_eq!(line.spans[0].style.bg, Some(Color::Green));
    }

    #[test]
    fn keyboard_colours_follow_hints() {
        let mut hints = FxHashMap::default();
        hints.insert('q', Tile::Absent);
        let lines = keyboard_lines(&hints);

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].spans[0].style.bg, Some(Color::DarkGray));
        assert_eq!(lines[0].spans[1].style.bg, None);
    }
}
