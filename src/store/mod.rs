mod path;

use crate::model::QuoteBook;
use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

pub use path::resolve_store_path;

// Whole-file load/save, no locking and no atomic replace: concurrent
// invocations against the same file race and the last save wins.
pub struct QuoteStore {
    path: PathBuf,
}

impl QuoteStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn load(&self) -> Result<QuoteBook> {
        if !self.path.exists() {
            log::debug!("store {} does not exist, starting empty", self.path.display());
            return Ok(QuoteBook::default());
        }
        let data = fs::read_to_string(&self.path)
            .with_context(|| format!("unable to read store {}", self.path.display()))?;
        if data.trim().is_empty() {
            return Ok(QuoteBook::default());
        }
        let book: QuoteBook = serde_json::from_str(&data)
            .with_context(|| format!("unable to parse store {}", self.path.display()))?;
        log::debug!(
            "loaded {} user(s) from store {}",
            book.user_count(),
            self.path.display()
        );
        Ok(book)
    }

    pub fn save(&self, book: &QuoteBook) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("unable to create store directory {}", parent.display())
            })?;
        }
        let data = serde_json::to_string_pretty(book).context("unable to serialize quotes")?;
        fs::write(&self.path, data)
            .with_context(|| format!("unable to write store {}", self.path.display()))?;
        log::debug!("saved store {}", self.path.display());
        Ok(())
    }
}
