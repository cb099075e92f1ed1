//! Plain-text store file persistence
//!
//! One todo per line, a 4-character completion prefix followed by the
//! description:
//!
//! ```text
//! [ ] buy milk
//! [x] pay rent
//! ```

use std::fs::{self, OpenOptions};
use std::io::Read;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::error::{Result, TodoError};
use super::model::{Todo, TodoList};

impl TodoList {
    /// Parse store file contents, one todo per line. A blank line is an
    /// incomplete todo with an empty description.
    pub fn parse(content: &str) -> Self {
        content.lines().map(Todo::from_line).collect()
    }

    /// Render the list in store file format
    pub fn to_file_contents(&self) -> String {
        let mut output = String::new();
        for todo in self.iter() {
            output.push_str(&todo.to_string());
            output.push('\n');
        }
        output
    }
}

pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the list, creating an empty store file when there is none.
    pub fn load(&self) -> Result<TodoList> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| self.io_error("create", source))?;
        }

        let mut file = OpenOptions::new()
            .read(true)
            .append(true)
            .create(true)
            .open(&self.path)
            .map_err(|source| self.io_error("open", source))?;

        let mut content = String::new();
        file.read_to_string(&mut content)
            .map_err(|source| self.io_error("read", source))?;

        let list = TodoList::parse(&content);
        debug!("loaded {} todos from {}", list.len(), self.path.display());
        Ok(list)
    }

    /// Overwrite the store file with the list
    pub fn save(&self, list: &TodoList) -> Result<()> {
        fs::write(&self.path, list.to_file_contents())
            .map_err(|source| self.io_error("write", source))?;
        debug!("saved {} todos to {}", list.len(), self.path.display());
        Ok(())
    }

    fn io_error(&self, action: &'static str, source: std::io::Error) -> TodoError {
        TodoError::Io {
            action,
            path: self.path.clone(),
            source,
        }
    }
}
