//! Terminal output formatting
//!
//! Renders boards, hints and session results for the command-line chat loop.

pub mod display;
pub mod formatters;

pub use display::{
    print_board, print_guess_outcome, print_hint_outcome, print_start_info, print_summary,
};
