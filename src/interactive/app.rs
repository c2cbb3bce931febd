//! TUI application state and logic

use crate::core::MAX_TURNS;
use crate::game::{Event, Game, Status, Transition};
use crate::output::formatters::win_message;
use crate::share::{FileExporter, export_results};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event as TermEvent, KeyCode, KeyEvent,
        KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::Rng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<R> {
    pub game: Game<R>,
    pub exporter: FileExporter,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

/// What a key press asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Game(Event),
    Share,
    Quit,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Map a key press to an action for the current game status
///
/// Letters go straight to the game while it is in progress, so the
/// restart and quit shortcuts there use Ctrl or non-letter keys.
#[must_use]
pub fn key_action(status: Status, key: KeyEvent) -> Option<Action> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match (status, key.code) {
        (_, KeyCode::Char('c')) if ctrl => Some(Action::Quit),
        (_, KeyCode::Char('n')) if ctrl => Some(Action::Game(Event::Restart)),
        (_, KeyCode::Esc) => Some(Action::Quit),
        (Status::InProgress, KeyCode::Char(c)) if !ctrl => Some(Action::Game(Event::TypeLetter(c))),
        (Status::InProgress, KeyCode::Backspace) => Some(Action::Game(Event::Backspace)),
        (Status::InProgress, KeyCode::Enter) => Some(Action::Game(Event::Submit)),
        (Status::Over, KeyCode::Char('n') | KeyCode::Enter) => {
            Some(Action::Game(Event::Restart))
        }
        (Status::Over, KeyCode::Char('s')) => Some(Action::Share),
        (Status::Over, KeyCode::Char('q')) => Some(Action::Quit),
        _ => None,
    }
}

impl<R: Rng> App<R> {
    #[must_use]
    pub fn new(game: Game<R>, exporter: FileExporter) -> Self {
        Self {
            game,
            exporter,
            messages: vec![
                Message {
                    text: format!("Welcome! Guess the five-letter word in {MAX_TURNS} tries."),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Type letters, Enter to submit, Ctrl+N for a new game.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            should_quit: false,
        }
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        let Some(action) = key_action(self.game.state().status(), key) else {
            return;
        };

        match action {
            Action::Quit => self.should_quit = true,
            Action::Share => match export_results(self.game.state(), &mut self.exporter) {
                Ok(message) => self.add_message(&message, MessageStyle::Success),
                Err(message) => self.add_message(&message, MessageStyle::Error),
            },
            Action::Game(event) => self.handle_event(event),
        }
    }

    fn handle_event(&mut self, event: Event) {
        let transition = self.game.handle(event);

        match transition {
            Transition::Won { turns } => {
                self.add_message("🎉 Game Over! You guessed the word!", MessageStyle::Success);
                self.add_message(win_message(turns), MessageStyle::Success);
                self.add_message(
                    "Press 'n' for new game, 's' to share or 'q' to quit.",
                    MessageStyle::Info,
                );
            }
            Transition::Submitted { turn, .. } if turn == MAX_TURNS => {
                self.add_message(
                    "No guesses left! Press Ctrl+N for a new game.",
                    MessageStyle::Error,
                );
            }
            Transition::Restarted => {
                self.messages.clear();
                self.add_message("New game started!", MessageStyle::Info);
            }
            Transition::Ignored if event == Event::Submit => {
                let state = self.game.state();
                if state.next_slot().is_none() {
                    self.add_message(
                        "No guesses left! Press Ctrl+N for a new game.",
                        MessageStyle::Error,
                    );
                } else {
                    self.add_message("Not enough letters", MessageStyle::Error);
                }
            }
            _ => {}
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<R: Rng>(app: App<R>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        log::error!("TUI loop failed: {err}");
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend, R: Rng>(
    terminal: &mut Terminal<B>,
    mut app: App<R>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let TermEvent::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::WordList;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn app() -> App<StdRng> {
        let words = WordList::from_strs(&["ghost"]).unwrap();
        let game = Game::new(words, StdRng::seed_from_u64(2));
        let path = std::env::temp_dir().join(format!("valordle-tui-{}.txt", std::process::id()));
        App::new(game, FileExporter::new(path))
    }

    fn type_word(app: &mut App<StdRng>, word: &str) {
        for c in word.chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        app.handle_key(key(KeyCode::Enter));
    }

    #[test]
    fn letters_typed_while_in_progress() {
        assert_eq!(
            key_action(Status::InProgress, key(KeyCode::Char('q'))),
            Some(Action::Game(Event::TypeLetter('q')))
        );
        assert_eq!(
            key_action(Status::InProgress, key(KeyCode::Enter)),
            Some(Action::Game(Event::Submit))
        );
        assert_eq!(
            key_action(Status::InProgress, key(KeyCode::Backspace)),
            Some(Action::Game(Event::Backspace))
        );
    }

    #[test]
    fn shortcuts_when_over() {
        assert_eq!(key_action(Status::Over, key(KeyCode::Char('q'))), Some(Action::Quit));
        assert_eq!(key_action(Status::Over, key(KeyCode::Char('s'))), Some(Action::Share));
        assert_eq!(
            key_action(Status::Over, key(KeyCode::Char('n'))),
            Some(Action::Game(Event::Restart))
        );
        assert_eq!(key_action(Status::Over, key(KeyCode::Char('x'))), None);
        assert_eq!(key_action(Status::Over, key(KeyCode::Backspace)), None);
    }

    #[test]
    fn control_shortcuts_always_available() {
        for status in [Status::InProgress, Status::Over] {
            assert_eq!(key_action(status, ctrl('c')), Some(Action::Quit));
            assert_eq!(key_action(status, ctrl('n')), Some(Action::Game(Event::Restart)));
            assert_eq!(key_action(status, key(KeyCode::Esc)), Some(Action::Quit));
        }
    }

    #[test]
    fn typing_and_winning() {
        let mut app = app();
        type_word(&mut app, "ghost");

        assert!(app.game.state().is_over());
        assert!(
            app.messages
                .iter()
                .any(|m| m.style == MessageStyle::Success)
        );
    }

    #[test]
    fn short_submit_reports_error() {
        let mut app = app();
        type_word(&mut app, "gho");

        assert_eq!(app.game.state().current_guess(), "gho");
        let last = app.messages.last().unwrap();
        assert_eq!(last.style, MessageStyle::Error);
    }

    #[test]
    fn quit_keys() {
        let mut app = app();
        app.handle_key(key(KeyCode::Esc));
        assert!(app.should_quit);
    }

    #[test]
    fn restart_after_win_clears_board() {
        let mut app = app();
        type_word(&mut app, "ghost");
        app.handle_key(key(KeyCode::Char('n')));

        assert!(!app.game.state().is_over());
        assert_eq!(app.game.state().turns_used(), 0);
        assert_eq!(app.messages.len(), 1);
    }

    #[test]
    fn messages_capped() {
        let mut app = app();
        for i in 0..10 {
            app.add_message(&format!("msg {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages[4].text, "msg 9");
    }

    #[test]
    fn share_after_win() {
        let mut app = app();
        type_word(&mut app, "ghost");
        app.handle_key(key(KeyCode::Char('s')));

        let path = app.exporter.path().to_path_buf();
        let contents = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(contents, "Valordle\n🟩🟩🟩🟩🟩");
    }
}
