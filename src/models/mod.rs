//! Data models module
//!
//! Defines the stored entry and the persisted document that holds them.

pub mod entry;

pub use entry::{split_tags, Document, Entry, UpsertOutcome};
