//! todo - personal command-line todo list

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use todo::cli::{self, Cli};

fn main() -> Result<()> {
    if std::env::var("TODO_DEBUG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter("todo=debug")
            .with_writer(std::io::stderr)
            .init();
    }

    // Usage errors exit with 1 like every other failure; help and version
    // still exit cleanly.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if err.use_stderr() => {
            let _ = err.print();
            std::process::exit(1);
        }
        Err(err) => err.exit(),
    };

    if let Some(shell) = cli.completions {
        generate(shell, &mut Cli::command(), "todo", &mut std::io::stdout());
        return Ok(());
    }

    cli::run(cli)
}
