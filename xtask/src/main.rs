//! Release helpers: the markdown usage page and shell completion scripts
//! shipped next to the `todo` binary.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::fs;
use std::path::{Path, PathBuf};
use todo::cli::Cli;

#[derive(Parser)]
#[command(name = "xtask", about = "Release helpers for todo")]
struct Xtask {
    #[command(subcommand)]
    command: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Write the CLI usage page as markdown
    Usage {
        #[arg(long, default_value = "docs/usage.md")]
        out: PathBuf,
    },

    /// Write a completion script for every supported shell
    Completions {
        #[arg(long, default_value = "target/completions")]
        out_dir: PathBuf,
    },
}

fn main() -> Result<()> {
    match Xtask::parse().command {
        Task::Usage { out } => {
            write_usage(&out)?;
            println!("usage page: {}", out.display());
        }
        Task::Completions { out_dir } => {
            for script in write_completions(&out_dir)? {
                println!("completion: {}", script.display());
            }
        }
    }
    Ok(())
}

fn write_usage(out: &Path) -> Result<()> {
    if let Some(dir) = out.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    }
    fs::write(out, clap_markdown::help_markdown::<Cli>())
        .with_context(|| format!("writing {}", out.display()))
}

/// Generates one script per shell, returning the written paths.
fn write_completions(out_dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(out_dir).with_context(|| format!("creating {}", out_dir.display()))?;

    let mut cmd = Cli::command();
    Shell::value_variants()
        .iter()
        .map(|&shell| {
            clap_complete::generate_to(shell, &mut cmd, "todo", out_dir)
                .with_context(|| format!("generating {} completions", shell))
        })
        .collect()
}
