//! Store persistence module
//!
//! Owns the single JSON file holding every bookmarked command.
//! The whole document is read at start and rewritten in full on change.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{Result, StoragePhase, TagcError};
use crate::models::Document;

/// Open handle on the backing file, released on drop
#[derive(Debug)]
pub struct Store {
    path: PathBuf,
    file: File,
}

impl Store {
    /// Open the store, creating it with an empty document when missing
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .map_err(|e| TagcError::storage(StoragePhase::Creating, parent, e))?;
        }

        let mut store = match open_options().create_new(true).open(path) {
            Ok(file) => {
                tracing::info!(path = %path.display(), "created new command store");
                let mut store = Self {
                    path: path.to_path_buf(),
                    file,
                };
                store.bootstrap()?;
                store
            }
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                let file = open_options()
                    .open(path)
                    .map_err(|e| TagcError::storage(StoragePhase::Opening, path, e))?;
                Self {
                    path: path.to_path_buf(),
                    file,
                }
            }
            Err(e) => return Err(TagcError::storage(StoragePhase::Creating, path, e)),
        };

        store.rewind()?;
        Ok(store)
    }

    /// Open for reading only. A missing store is still bootstrapped first.
    pub fn open_read_only(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Self::open(path);
        }

        let file = File::open(path)
            .map_err(|e| TagcError::storage(StoragePhase::Opening, path, e))?;
        Ok(Self {
            path: path.to_path_buf(),
            file,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the full document
    pub fn load(&mut self) -> Result<Document> {
        self.rewind()?;

        let mut content = Vec::new();
        self.file
            .read_to_end(&mut content)
            .map_err(|e| self.storage_error(StoragePhase::Reading, e))?;

        let document: Document =
            serde_json::from_slice(&content).map_err(|source| TagcError::Format {
                path: self.path.clone(),
                source,
            })?;

        tracing::debug!(
            path = %self.path.display(),
            entries = document.len(),
            "loaded command store"
        );
        Ok(document)
    }

    /// Replace the file content with `document`.
    ///
    /// Truncate, rewind and write are not atomic as a whole: a failure part way
    /// through can leave the file empty. The document stays with the caller.
    pub fn save(&mut self, document: &Document) -> Result<()> {
        let content = serialize(document)?;

        self.file
            .set_len(0)
            .map_err(|e| self.storage_error(StoragePhase::Truncating, e))?;
        self.rewind()?;
        self.file
            .write_all(&content)
            .map_err(|e| self.storage_error(StoragePhase::Writing, e))?;
        self.file
            .flush()
            .map_err(|e| self.storage_error(StoragePhase::Flushing, e))?;

        tracing::debug!(
            path = %self.path.display(),
            entries = document.len(),
            bytes = content.len(),
            "saved command store"
        );
        Ok(())
    }

    fn bootstrap(&mut self) -> Result<()> {
        let content = serialize(&Document::empty())?;
        self.file
            .write_all(&content)
            .map_err(|e| self.storage_error(StoragePhase::Initializing, e))
    }

    fn rewind(&mut self) -> Result<()> {
        self.file
            .seek(SeekFrom::Start(0))
            .map(|_| ())
            .map_err(|e| self.storage_error(StoragePhase::Seeking, e))
    }

    fn storage_error(&self, phase: StoragePhase, source: io::Error) -> TagcError {
        TagcError::storage(phase, &self.path, source)
    }
}

fn open_options() -> OpenOptions {
    let mut options = OpenOptions::new();
    options.read(true).write(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }
    options
}

/// Tab-indented JSON, fields in declaration order
fn serialize(document: &Document) -> Result<Vec<u8>> {
    let mut content = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"\t");
    let mut serializer = serde_json::Serializer::with_formatter(&mut content, formatter);
    document.serialize(&mut serializer)?;
    Ok(content)
}
