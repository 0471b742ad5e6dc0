//! Command-line interface module
//!
//! Implements the actions behind the clap surface:
//! - search (-s -t): rank stored commands by tag overlap
//! - store (-c -t [-i]): insert or replace a command
//! - config init: write a default configuration file
pub mod config;
pub mod request;
pub mod search;
pub mod store;

pub use request::Request;
