use crate::config::{OutputFormat, Settings};
use crate::display;
use crate::error::Result;
use crate::ranking;
use crate::renderer;
use crate::store::Store;

/// Rank stored commands against `query` and print the score groups
pub fn run(settings: &Settings, query: &str) -> Result<()> {
    let mut store = Store::open_read_only(&settings.store_file)?;
    let document = store.load()?;
    if document.is_empty() {
        tracing::info!(path = %store.path().display(), "command store is empty");
    }

    let groups = ranking::search(&document, query);

    match settings.format {
        OutputFormat::Json => println!("{}", renderer::render_json(&groups)?),
        OutputFormat::Markdown => {
            display::print_markdown(&renderer::render_markdown(&groups), settings.color)
        }
    }

    Ok(())
}
