//! Interactive TUI interface

mod app;
mod rendering;

pub use app::{Action, App, Message, MessageStyle, key_action, run_tui};
pub use rendering::ui;
