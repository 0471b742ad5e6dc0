//! Search result renderer module
//!
//! Turns ranked score groups into the JSON printed on stdout, or into
//! Markdown for reading in a terminal.

use serde::Serialize;

use crate::error::Result;
use crate::ranking::ScoreGroups;

#[derive(Serialize)]
struct SearchOutput<'a> {
    #[serde(rename = "Matches")]
    matches: &'a ScoreGroups,
}

/// Render as `{"Matches": {"<score>": [entry, ...]}}`, indented
pub fn render_json(groups: &ScoreGroups) -> Result<String> {
    let json = serde_json::to_string_pretty(&SearchOutput { matches: groups })?;
    Ok(json)
}

/// Render one section per score, lowest score first
pub fn render_markdown(groups: &ScoreGroups) -> String {
    if groups.is_empty() {
        return "No matches.".to_string();
    }

    let mut output = String::new();
    for (score, entries) in groups.iter() {
        let label = if score == 1 { "match" } else { "matches" };
        output.push_str(&format!("## {} {}\n\n", score, label));

        for entry in entries {
            output.push_str(&format!("- {}", code_span(&entry.command)));
            let info = entry
                .info
                .as_deref()
                .map(|i| i.split_whitespace().collect::<Vec<_>>().join(" "))
                .filter(|i| !i.is_empty());
            if let Some(info) = info {
                output.push_str(&format!(" {}", code_span(&info)));
            }
            output.push('\n');
        }
        output.push('\n');
    }

    output.trim_end().to_string()
}

/// Wrap in backticks, widening the fence when the text has its own
fn code_span(text: &str) -> String {
    if text.contains('`') {
        format!("`` {} ``", text)
    } else {
        format!("`{}`", text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Document, Entry};
    use crate::ranking::search;

    fn scenario() -> Document {
        Document {
            commands: vec![
                Entry::new("ls -la", vec!["fs".into(), "list".into()], None),
                Entry::new(
                    "grep -r",
                    vec!["fs".into(), "search".into()],
                    Some("recursive search".into()),
                ),
            ],
        }
    }

    #[test]
    fn test_render_json_shape() {
        let json = render_json(&search(&scenario(), "fs,search")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "Matches": {
                    "1": [{ "command": "ls -la" }],
                    "2": [{ "command": "grep -r", "info": "recursive search" }],
                }
            })
        );
    }

    #[test]
    fn test_render_json_is_indented() {
        let json = render_json(&search(&scenario(), "fs")).unwrap();
        assert!(json.contains('\n'));
        assert!(json.starts_with("{\n  \"Matches\""));
    }

    #[test]
    fn test_render_json_empty() {
        let json = render_json(&ScoreGroups::default()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value, serde_json::json!({ "Matches": {} }));
    }

    #[test]
    fn test_render_markdown_sections() {
        let markdown = render_markdown(&search(&scenario(), "fs,search"));
        assert_eq!(
            markdown,
            "## 1 match\n\n- `ls -la`\n\n## 2 matches\n\n- `grep -r` `recursive search`"
        );
    }

    #[test]
    fn test_render_markdown_info_cannot_break_layout() {
        let doc = Document {
            commands: vec![Entry::new(
                "make",
                vec!["build".into()],
                Some("*all*\n## targets".into()),
            )],
        };
        let markdown = render_markdown(&search(&doc, "build"));
        assert_eq!(markdown, "## 1 match\n\n- `make` `*all* ## targets`");
    }

    #[test]
    fn test_render_markdown_empty() {
        assert_eq!(render_markdown(&ScoreGroups::default()), "No matches.");
    }

    #[test]
    fn test_code_span_with_backtick() {
        assert_eq!(code_span("echo `date`"), "`` echo `date` ``");
        assert_eq!(code_span("date"), "`date`");
    }
}
