mod check;
mod classes;
mod completions;
mod generate;
mod inspect;

use check::CheckCommand;
use clap::{Parser, Subcommand};
use classes::ClassesCommand;
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;
use inspect::InspectCommand;

/// Extension trait for exiting on markup errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for nkgen_markup::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "nkgen")]
#[command(version)]
#[command(about = "Generate NanoKit UI modules from XML markup")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Inspect(cmd) => cmd.run(),
            Commands::Classes(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the module header and source from a markup file
    Generate(GenerateCommand),

    /// Validate a markup file without generating code
    Check(CheckCommand),

    /// Print the parsed markup tree
    Inspect(InspectCommand),

    /// List the registered widget classes
    Classes(ClassesCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
