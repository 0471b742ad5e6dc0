use crate::error::{Result, TagcError};

/// What one invocation asks for, validated from the raw flags
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// Rank stored commands against comma separated tags
    Search { query: String },
    /// Insert or replace a command with its tags
    Store {
        command: String,
        tags: String,
        info: Option<String>,
    },
}

impl Request {
    pub fn from_flags(
        search: bool,
        command: Option<String>,
        tags: Option<String>,
        info: Option<String>,
    ) -> Result<Self> {
        let tags = tags.unwrap_or_default();
        if tags.is_empty() {
            return Err(TagcError::Validation("tags cannot be empty".to_string()));
        }

        if search {
            return Ok(Request::Search { query: tags });
        }

        let command = command.unwrap_or_default();
        if command.is_empty() {
            return Err(TagcError::Validation(
                "command cannot be empty".to_string(),
            ));
        }

        Ok(Request::Store {
            command,
            tags,
            info: info.filter(|i| !i.is_empty()),
        })
    }
}
