//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{Action, Cli};
pub use output::{format_listing, format_page_view, format_todo_view};
