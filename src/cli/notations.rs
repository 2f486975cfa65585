//! Notation listing command.

use crate::cli::common::{print_json, CliResult};
use crate::notation::Notation;
use clap::Args;

/// List the recognized notation tags
#[derive(Debug, Clone, Args)]
pub struct NotationsArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl NotationsArgs {
    /// Execute the notations command
    pub fn execute(&self) -> CliResult<()> {
        let tags: Vec<&str> = Notation::ALL.iter().map(|n| n.as_str()).collect();

        if self.json {
            return print_json(&tags);
        }

        for tag in tags {
            println!("{tag}");
        }
        Ok(())
    }
}
