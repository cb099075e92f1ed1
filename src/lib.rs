//! todo library - a personal todo list kept in a plain-text file

pub mod cli;
pub mod config;
pub mod confirm;
pub mod list;
