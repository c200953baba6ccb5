//! Persistence for description text.
//!
//! A store holds exactly one description as flat text. [`FileStore`] keeps it
//! in a single YAML file; [`MemoryStore`] keeps it in memory for tests and
//! embedding. The [`api`] module maps store calls onto the JSON request and
//! response bodies used by the persistence endpoint.

pub mod api;

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use log::{debug, info};
use thiserror::Error;

/// File name used when a store directory is given instead of a file.
pub const DEFAULT_FILE_NAME: &str = "myfabric-1.yaml";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access `{}`: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },

    #[error("no description stored")]
    Missing,
}

/// Load/save of a single description.
pub trait DescriptionStore {
    /// Returns the stored description text.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Missing`] if nothing has been stored yet, or
    /// [`StoreError::Io`] if the backing medium fails.
    fn load(&self) -> Result<String, StoreError>;

    /// Replaces the stored description text.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the backing medium fails.
    fn save(&mut self, text: &str) -> Result<(), StoreError>;
}

/// Description kept in one file on disk.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store backed by [`DEFAULT_FILE_NAME`] inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(DEFAULT_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl DescriptionStore for FileStore {
    fn load(&self) -> Result<String, StoreError> {
        debug!(path:? = self.path; "Reading description");
        match fs::read_to_string(&self.path) {
            Ok(text) => Ok(text),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Err(StoreError::Missing),
            Err(err) => Err(self.io_error(err)),
        }
    }

    fn save(&mut self, text: &str) -> Result<(), StoreError> {
        fs::write(&self.path, text).map_err(|err| self.io_error(err))?;
        info!(path:? = self.path, bytes = text.len(); "Description saved");
        Ok(())
    }
}

/// Description kept in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    text: Option<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store that already holds `text`.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

impl DescriptionStore for MemoryStore {
    fn load(&self) -> Result<String, StoreError> {
        self.text.clone().ok_or(StoreError::Missing)
    }

    fn save(&mut self, text: &str) -> Result<(), StoreError> {
        self.text = Some(text.to_string());
        Ok(())
    }
}
