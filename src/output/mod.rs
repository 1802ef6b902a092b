//! Terminal output formatting
//!
//! Display utilities for line-mode play and CLI results.

pub mod display;
pub mod formatters;

pub use display::{
    colored_row, print_board, print_challenge_created, print_decoded, print_keyboard,
    print_search_results,
};
pub use formatters::{KEYBOARD_ROWS, score_line, share_grid};
