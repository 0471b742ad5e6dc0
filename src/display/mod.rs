//! Terminal display module
//!
//! Prints search results, styling Markdown when the terminal allows it.

mod formatter;
mod terminal;

pub use formatter::print_markdown;
