//! Todo list module
//!
//! - In-memory ordered list with positional ids
//! - Line-based store file format
//! - Domain errors

pub mod error;
pub mod model;
pub mod storage;

pub use error::{Result, TodoError};
pub use model::{Todo, TodoList, COMPLETE_PREFIX, INCOMPLETE_PREFIX};
pub use storage::Store;
