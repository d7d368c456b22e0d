use clap::Args;
use eyre::Result;
use nkgen_schema::SchemaRegistry;

#[derive(Args)]
pub struct ClassesCommand {}

impl ClassesCommand {
    /// Run the classes command
    pub fn run(&self) -> Result<()> {
        let registry = SchemaRegistry::nanokit()?;

        for class in registry.classes() {
            match &class.superclass {
                Some(super_name) => {
                    println!("{} ({}) : {}", class.markup_name, class.code_type_name, super_name)
                }
                None => println!("{} ({})", class.markup_name, class.code_type_name),
            }

            for prop in &class.properties {
                println!(
                    "  {} -> {} ({})",
                    prop.markup_name, prop.code_field_name, prop.value_type
                );
            }
            println!();
        }

        Ok(())
    }
}
