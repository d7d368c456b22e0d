use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use nkgen_markup::MarkupFile;
use nkgen_schema::SchemaRegistry;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct CheckCommand {
    /// Input markup file
    pub input: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let registry = SchemaRegistry::nanokit()?;
        let file = MarkupFile::open(&self.input).unwrap_or_exit();

        let errors = nkgen_schema::validate(&registry, file.tree(), file.source());
        if !errors.is_empty() {
            let count = errors.len();
            for error in errors {
                eprintln!("{:?}", miette::Report::new(error));
            }
            eprintln!("{} error{} found", count, if count == 1 { "" } else { "s" });
            std::process::exit(1);
        }

        let nodes = 1 + file.tree().descendant_count();
        println!("✓ {} is valid", self.input.display());
        println!(
            "  root {}, {} node{}",
            file.tree().label(),
            nodes,
            if nodes == 1 { "" } else { "s" }
        );

        Ok(())
    }
}
