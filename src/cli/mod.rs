//! Command-line dispatch
//!
//! Each invocation performs exactly one [`Action`]. When several action
//! flags are given, the first of complete, incomplete, edit, swap, remove
//! wins.

pub mod definition;

pub use definition::Cli;

use std::io::{self, Write};
use std::sync::LazyLock;

use anyhow::{Context, Result};
use regex::Regex;
use tracing::debug;

use crate::config::Config;
use crate::confirm::{AssumeYes, Confirm, Prompt};
use crate::list::{Store, TodoError, TodoList};

/// `/from/to/` edit syntax
static SUBSTITUTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^/([^/]*)/([^/]*)/$").expect("valid substitution regex"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    ListIncomplete,
    ListAll,
    Complete(Vec<usize>),
    Incomplete(Vec<usize>),
    Edit { id: usize, description: String },
    Replace { id: usize, from: String, to: String },
    Swap(usize, usize),
    RemoveComplete,
    Remove(Vec<usize>),
    Add(String),
}

impl Action {
    /// Work out the action for a command line. Ids are checked against
    /// `list` here, so a bad id fails before anything is changed.
    pub fn from_cli(cli: &Cli, list: &TodoList) -> std::result::Result<Self, TodoError> {
        let args = cli.args.as_slice();

        if cli.complete {
            if args.is_empty() {
                return Ok(Self::ListAll);
            }
            return Ok(Self::Complete(list.parse_ids(args)?));
        }

        if cli.incomplete {
            if args.is_empty() {
                return Err(TodoError::MissingId);
            }
            return Ok(Self::Incomplete(list.parse_ids(args)?));
        }

        if cli.edit {
            let (id, words) = args.split_first().ok_or(TodoError::MissingId)?;
            let id = list.parse_id(id)?;
            let description = words.join(" ");
            if description.trim().is_empty() {
                return Err(TodoError::MissingDescription);
            }
            if let Some(caps) = SUBSTITUTION_RE.captures(&description) {
                return Ok(Self::Replace {
                    id,
                    from: caps[1].to_string(),
                    to: caps[2].to_string(),
                });
            }
            return Ok(Self::Edit { id, description });
        }

        if cli.swap {
            if args.len() != 2 {
                return Err(TodoError::WrongIdCount {
                    expected: 2,
                    got: args.len(),
                });
            }
            let ids = list.parse_ids(args)?;
            return Ok(Self::Swap(ids[0], ids[1]));
        }

        if cli.remove {
            if args.is_empty() {
                return Ok(Self::RemoveComplete);
            }
            return Ok(Self::Remove(list.parse_ids(args)?));
        }

        if args.is_empty() {
            return Ok(Self::ListIncomplete);
        }

        Ok(Self::Add(args.join(" ")))
    }

    /// Listing actions print and leave the store file alone
    pub fn is_read_only(&self) -> bool {
        matches!(self, Self::ListIncomplete | Self::ListAll)
    }

    pub fn apply(
        self,
        list: &mut TodoList,
        confirm: &mut dyn Confirm,
    ) -> std::result::Result<(), TodoError> {
        match self {
            Self::ListIncomplete | Self::ListAll => {}
            Self::Complete(ids) => list.mark_complete(&ids)?,
            Self::Incomplete(ids) => list.mark_incomplete(&ids)?,
            Self::Edit { id, description } => list.edit(id, description)?,
            Self::Replace { id, from, to } => list.replace(id, &from, &to)?,
            Self::Swap(a, b) => list.swap(a, b)?,
            Self::RemoveComplete => {
                list.remove_complete(confirm);
            }
            Self::Remove(ids) => {
                list.remove(&ids, confirm)?;
            }
            Self::Add(description) => {
                list.add(description)?;
            }
        }
        Ok(())
    }
}

/// Run one invocation against the store, printing to `out`.
pub fn execute(
    cli: &Cli,
    store: &Store,
    confirm: &mut dyn Confirm,
    out: &mut dyn Write,
) -> Result<()> {
    let mut list = store.load()?;
    let action = Action::from_cli(cli, &list)?;
    debug!("dispatching {:?}", action);

    if action == Action::ListAll {
        list.print_all(out)?;
    } else if action.is_read_only() {
        list.print_incomplete(out)?;
    } else {
        action.apply(&mut list, confirm)?;
        list.print_incomplete(out)?;
        store.save(&list).context("Changes were not saved")?;
    }

    out.flush()?;
    Ok(())
}

pub fn run(cli: Cli) -> Result<()> {
    let config = Config::resolve(cli.file.as_deref())?;
    debug!("using store {}", config.store_path.display());
    let store = Store::new(config.store_path);

    let mut stdout = io::stdout();
    if cli.yes {
        execute(&cli, &store, &mut AssumeYes, &mut stdout)
    } else {
        execute(&cli, &store, &mut Prompt::stdio(), &mut stdout)
    }
}
