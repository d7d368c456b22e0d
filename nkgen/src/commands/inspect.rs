use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use nkgen_markup::{MarkupFile, Node};

use super::UnwrapOrExit;

#[derive(Args)]
pub struct InspectCommand {
    /// Input markup file
    pub input: PathBuf,

    /// Print the tree as JSON
    #[arg(long)]
    pub json: bool,
}

impl InspectCommand {
    /// Run the inspect command
    pub fn run(&self) -> Result<()> {
        let file = MarkupFile::open(&self.input).unwrap_or_exit();

        if self.json {
            println!("{}", serde_json::to_string_pretty(file.tree())?);
        } else {
            print_node(file.tree(), 0);
        }

        Ok(())
    }
}

fn print_node(node: &Node, depth: usize) {
    let indent = "  ".repeat(depth);
    println!("{}{}", indent, node.label());

    for prop in &node.properties {
        println!("{}  {} = \"{}\"", indent, prop.key, prop.value);
    }

    for child in &node.children {
        print_node(child, depth + 1);
    }
}
