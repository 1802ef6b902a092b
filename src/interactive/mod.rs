//! Interactive TUI front end

mod app;
mod rendering;

pub use app::{App, Message, MessageStyle, SHAKE_DURATION, Statistics, run_tui};
