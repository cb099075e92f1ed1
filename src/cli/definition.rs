use clap::Parser;
use clap_complete::Shell;
use std::path::PathBuf;

const AFTER_HELP: &str = "\
Examples:
  todo                      list open todos
  todo buy milk             add \"buy milk\"
  todo -c                   list every todo, complete or not
  todo -c 0 2               mark todos 0 and 2 complete
  todo -i 2                 mark todo 2 incomplete
  todo -e 1 call the bank   replace the description of todo 1
  todo -e 1 /bank/office/   replace \"bank\" with \"office\" in todo 1
  todo -s 0 3               swap todos 0 and 3
  todo -r 4                 remove todo 4 (asks first if it is not complete)
  todo -r                   remove every complete todo (asks first)

Ids are positions in the list and only hold for the current listing:
removing or swapping todos renumbers the ones after them.";

#[derive(Debug, Parser)]
#[command(name = "todo")]
#[command(about = "Keep a todo list in ~/.todo")]
#[command(version, after_help = AFTER_HELP)]
pub struct Cli {
    /// Mark the given ids complete; with no ids, list every todo
    #[arg(short = 'c')]
    pub complete: bool,

    /// Mark the given ids incomplete
    #[arg(short = 'i')]
    pub incomplete: bool,

    /// Edit a todo: `-e ID TEXT...` or `-e ID /FROM/TO/`
    #[arg(short = 'e')]
    pub edit: bool,

    /// Swap the positions of two todos
    #[arg(short = 's')]
    pub swap: bool,

    /// Remove the given ids; with no ids, remove every complete todo
    #[arg(short = 'r')]
    pub remove: bool,

    /// Answer yes to every removal prompt
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Store file to use instead of ~/.todo
    #[arg(short = 'f', long, env = "TODO_FILE", value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Print a shell completion script and exit
    #[arg(long, value_name = "SHELL")]
    pub completions: Option<Shell>,

    /// Todo ids, or the words of a new todo
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "ARGS")]
    pub args: Vec<String>,
}

impl Cli {
    /// True when one of the action flags is set
    pub fn has_action_flag(&self) -> bool {
        self.complete || self.incomplete || self.edit || self.swap || self.remove
    }
}
