mod header_file;
mod source_file;

pub use header_file::HeaderFile;
pub use source_file::SourceFile;

use crate::{CodeBuilder, ModuleName};

/// The banner every generated artifact starts with.
pub(crate) fn banner(b: CodeBuilder, kind: &str, module: &ModuleName) -> CodeBuilder {
    b.line("/***************************************************************")
        .line("**")
        .line(&format!("** NanoKit Generated {} File", kind))
        .line("**")
        .line(&format!("** Module       :  {}", module))
        .line("**")
        .line("***************************************************************/")
}
