use serde::{Deserialize, Serialize};

/// A stored command with its tags, keyed by the exact command text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Command text, the unique key of the entry
    pub command: String,
    /// Freeform labels, matched case-insensitively
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Free-text annotation, never used for matching
    #[serde(default, skip_serializing_if = "is_blank")]
    pub info: Option<String>,
}

fn is_blank(info: &Option<String>) -> bool {
    info.as_deref().is_none_or(str::is_empty)
}

impl Entry {
    pub fn new(command: impl Into<String>, tags: Vec<String>, info: Option<String>) -> Self {
        Self {
            command: command.into(),
            tags,
            info: info.filter(|i| !i.is_empty()),
        }
    }
}

/// The persisted aggregate: every entry, at most one per command
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub commands: Vec<Entry>,
}

/// What an upsert did to the document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Inserted,
    Replaced,
}

impl Document {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Insert `entry`, or replace the entry carrying the same command text.
    ///
    /// The whole sequence is scanned before deciding to append, so a match
    /// anywhere replaces in place and keeps its position.
    pub fn upsert(&mut self, entry: Entry) -> UpsertOutcome {
        match self
            .commands
            .iter_mut()
            .find(|existing| existing.command == entry.command)
        {
            Some(existing) => {
                *existing = entry;
                UpsertOutcome::Replaced
            }
            None => {
                self.commands.push(entry);
                UpsertOutcome::Inserted
            }
        }
    }

    #[cfg(test)]
    pub fn get(&self, command: &str) -> Option<&Entry> {
        self.commands.iter().find(|e| e.command == command)
    }
}

/// Split a comma separated tag list. Tokens are kept verbatim, whitespace included.
pub fn split_tags(tags: &str) -> Vec<String> {
    tags.split(',').map(str::to_string).collect()
}
