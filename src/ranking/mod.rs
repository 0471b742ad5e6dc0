//! Tag-overlap ranking
//!
//! Scores every entry by how many (entry tag, query tag) pairs match
//! case-insensitively and groups the matching entries by score.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::{split_tags, Document, Entry};

/// Matching entries grouped by score, ascending
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ScoreGroups {
    groups: BTreeMap<usize, Vec<Entry>>,
}

impl ScoreGroups {
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of distinct scores
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    #[cfg(test)]
    pub fn get(&self, score: usize) -> Option<&[Entry]> {
        self.groups.get(&score).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (usize, &[Entry])> {
        self.groups
            .iter()
            .map(|(score, entries)| (*score, entries.as_slice()))
    }

    fn push(&mut self, score: usize, entry: Entry) {
        self.groups.entry(score).or_default().push(entry);
    }
}

/// Rank every entry of `document` against the comma separated `query`.
///
/// Entries scoring zero are left out. Inside a group entries keep document
/// order. Output entries have their tags cleared.
pub fn search(document: &Document, query: &str) -> ScoreGroups {
    let query_tags: Vec<String> = split_tags(query)
        .iter()
        .map(|t| t.to_lowercase())
        .collect();

    let mut groups = ScoreGroups::default();
    for entry in &document.commands {
        let score = score(entry, &query_tags);
        tracing::trace!(command = %entry.command, score, "scored entry");
        if score == 0 {
            continue;
        }
        groups.push(
            score,
            Entry {
                tags: Vec::new(),
                ..entry.clone()
            },
        );
    }

    tracing::debug!(
        query,
        entries = document.len(),
        tiers = groups.len(),
        "ranked command store"
    );
    groups
}

/// Count matching (tag, query tag) pairs. `query_tags` must already be lowercase.
///
/// Duplicates on either side count again, so `["go", "go"]` against `go` is 2.
pub fn score(entry: &Entry, query_tags: &[String]) -> usize {
    entry
        .tags
        .iter()
        .map(|tag| {
            let tag = tag.to_lowercase();
            query_tags.iter().filter(|q| **q == tag).count()
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(command: &str, tags: &[&str]) -> Entry {
        Entry::new(command, tags.iter().map(|t| t.to_string()).collect(), None)
    }

    fn document(entries: Vec<Entry>) -> Document {
        Document { commands: entries }
    }

    fn commands(group: Option<&[Entry]>) -> Vec<&str> {
        group
            .unwrap_or_default()
            .iter()
            .map(|e| e.command.as_str())
            .collect()
    }

    fn scenario() -> Document {
        document(vec![
            entry("ls -la", &["fs", "list"]),
            entry("grep -r", &["fs", "search"]),
        ])
    }

    #[test]
    fn test_single_tag_groups_ties_together() {
        let groups = search(&scenario(), "fs");
        assert_eq!(groups.len(), 1);
        assert_eq!(commands(groups.get(1)), vec!["ls -la", "grep -r"]);
    }

    #[test]
    fn test_two_tags_split_into_tiers() {
        let groups = search(&scenario(), "fs,search");
        assert_eq!(groups.len(), 2);
        assert_eq!(commands(groups.get(1)), vec!["ls -la"]);
        assert_eq!(commands(groups.get(2)), vec!["grep -r"]);

        let scores: Vec<usize> = groups.iter().map(|(s, _)| s).collect();
        assert_eq!(scores, vec![1, 2]);
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let doc = document(vec![entry("go build", &["Go"])]);
        let groups = search(&doc, "go");
        assert_eq!(commands(groups.get(1)), vec!["go build"]);

        let groups = search(&doc, "GO");
        assert_eq!(commands(groups.get(1)), vec!["go build"]);
    }

    #[test]
    fn test_duplicate_tags_multiply_score() {
        let doc = document(vec![entry("go test", &["go", "go"])]);
        assert_eq!(commands(search(&doc, "go").get(2)), vec!["go test"]);
        assert_eq!(commands(search(&doc, "go,go").get(4)), vec!["go test"]);
    }

    #[test]
    fn test_zero_score_entries_are_excluded() {
        let doc = document(vec![
            entry("ls -la", &["fs"]),
            entry("cargo build", &["rust"]),
        ]);
        let groups = search(&doc, "rust");
        let all: Vec<&str> = groups
            .iter()
            .flat_map(|(_, entries)| entries.iter().map(|e| e.command.as_str()))
            .collect();
        assert_eq!(all, vec!["cargo build"]);
    }

    #[test]
    fn test_empty_document_yields_nothing() {
        assert!(search(&Document::empty(), "fs").is_empty());
    }

    #[test]
    fn test_empty_query_matches_nothing() {
        assert!(search(&scenario(), "").is_empty());
    }

    #[test]
    fn test_empty_query_matches_empty_stored_tag() {
        let doc = document(vec![entry("odd", &[""])]);
        assert_eq!(commands(search(&doc, "").get(1)), vec!["odd"]);
    }

    #[test]
    fn test_query_tokens_are_not_trimmed() {
        assert!(search(&scenario(), " fs").is_empty());
    }

    #[test]
    fn test_output_clears_tags_and_keeps_info() {
        let doc = document(vec![Entry::new(
            "ls -la",
            vec!["fs".to_string()],
            Some("long listing".to_string()),
        )]);
        let groups = search(&doc, "fs");
        let hit = &groups.get(1).unwrap()[0];
        assert!(hit.tags.is_empty());
        assert_eq!(hit.info.as_deref(), Some("long listing"));
        assert_eq!(doc.commands[0].tags, vec!["fs".to_string()]);
    }

    #[test]
    fn test_score_counts_pairs() {
        let e = entry("x", &["a", "B", "a"]);
        let query = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        assert_eq!(score(&e, &query), 3);
    }

    #[test]
    fn test_groups_serialize_as_score_keyed_map() {
        let json = serde_json::to_value(search(&scenario(), "fs,search")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "1": [{ "command": "ls -la" }],
                "2": [{ "command": "grep -r" }],
            })
        );
    }
}
