use crate::config::Settings;
use crate::error::Result;
use crate::models::{split_tags, Entry, UpsertOutcome};
use crate::store::Store;

/// Insert or replace one command and persist the whole store
pub fn run(settings: &Settings, command: String, tags: &str, info: Option<String>) -> Result<()> {
    let mut store = Store::open(&settings.store_file)?;
    let mut document = store.load()?;

    let entry = Entry::new(command, split_tags(tags), info);
    let command = entry.command.clone();
    let outcome = document.upsert(entry);

    store.save(&document)?;

    let verb = match outcome {
        UpsertOutcome::Inserted => "Stored",
        UpsertOutcome::Replaced => "Updated",
    };
    tracing::info!(%command, ?outcome, path = %store.path().display(), "store updated");
    println!("{}: {}", verb, command);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ColorChoice, OutputFormat};
    use tempfile::TempDir;

    fn settings(temp: &TempDir) -> Settings {
        Settings {
            store_file: temp.path().join("store.json"),
            format: OutputFormat::Json,
            color: ColorChoice::Never,
        }
    }

    #[test]
    fn test_store_then_replace() {
        let temp = TempDir::new().unwrap();
        let settings = settings(&temp);

        run(&settings, "ls -la".to_string(), "fs,list", None).unwrap();
        run(&settings, "grep -r".to_string(), "fs", None).unwrap();
        run(
            &settings,
            "ls -la".to_string(),
            "Files",
            Some("long listing".to_string()),
        )
        .unwrap();

        let document = Store::open(&settings.store_file).unwrap().load().unwrap();
        assert_eq!(document.len(), 2);
        let entry = document.get("ls -la").unwrap();
        assert_eq!(entry.tags, vec!["Files".to_string()]);
        assert_eq!(entry.info.as_deref(), Some("long listing"));
    }
}
