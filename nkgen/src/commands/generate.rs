use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use nkgen_codegen::{Generator, ModuleName, ValueEncodingWarning};
use nkgen_markup::MarkupFile;
use nkgen_schema::SchemaRegistry;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct GenerateCommand {
    /// Name of the generated module (a valid C identifier)
    pub module_name: String,

    /// Input markup file
    pub input: PathBuf,

    /// Output header path
    pub output_header: PathBuf,

    /// Output source path
    pub output_source: PathBuf,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let module = ModuleName::new(&self.module_name)?;
        let registry = SchemaRegistry::nanokit()?;
        let file = MarkupFile::open(&self.input).unwrap_or_exit();

        // The validator gates the pipeline: nothing is emitted while
        // any defect exists, and every defect is reported at once.
        let errors = nkgen_schema::validate(&registry, file.tree(), file.source());
        if !errors.is_empty() {
            for error in errors {
                eprintln!("{:?}", miette::Report::new(error));
            }
            std::process::exit(1);
        }

        let generator = Generator::new(&registry, module);

        if self.dry_run {
            return self.run_preview(&generator, &file);
        }
        self.run_generation(&generator, &file)
    }

    fn run_generation(&self, generator: &Generator, file: &MarkupFile) -> Result<()> {
        let result = generator.generate(file.tree(), &self.output_header, &self.output_source)?;

        let nodes = 1 + file.tree().descendant_count();
        println!(
            "{} ({} node{})",
            self.module_name,
            nodes,
            if nodes == 1 { "" } else { "s" }
        );
        for path in &result.written {
            println!("  + {}", path.display());
        }

        report_warnings(&result.warnings);

        Ok(())
    }

    fn run_preview(&self, generator: &Generator, file: &MarkupFile) -> Result<()> {
        let rendered = generator.render(file.tree())?;

        println!("── {} ──", self.output_header.display());
        println!("{}", rendered.header);
        println!("── {} ──", self.output_source.display());
        println!("{}", rendered.source);

        report_warnings(&rendered.warnings);

        Ok(())
    }
}

fn report_warnings(warnings: &[ValueEncodingWarning]) {
    for warning in warnings {
        eprintln!("warning: {}", warning);
    }
}
