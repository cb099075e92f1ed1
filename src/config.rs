//! Runtime configuration

use std::path::{Path, PathBuf};

use crate::list::{Result, TodoError};

/// Name of the store file in the home directory
pub const STORE_FILE_NAME: &str = ".todo";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub store_path: PathBuf,
}

impl Config {
    /// Resolve the store location once: an explicit path wins, otherwise
    /// `~/.todo`.
    pub fn resolve(file_override: Option<&Path>) -> Result<Self> {
        let store_path = match file_override {
            Some(path) => path.to_path_buf(),
            None => default_store_path()?,
        };
        Ok(Self { store_path })
    }
}

pub fn default_store_path() -> Result<PathBuf> {
    dirs::home_dir()
        .map(|home| home.join(STORE_FILE_NAME))
        .ok_or(TodoError::NoHomeDir)
}
