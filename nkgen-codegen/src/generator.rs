use std::path::{Path, PathBuf};

use nkgen_core::ArtifactSet;
use nkgen_markup::Node;
use nkgen_schema::SchemaRegistry;

use crate::{
    GenContext, HeaderFile, ModuleName, SourceFile, Translator, ValueEncodingWarning,
};

/// Both artifacts rendered in memory, plus the warnings gathered while
/// encoding values.
pub struct Rendered {
    pub header: String,
    pub source: String,
    pub warnings: Vec<ValueEncodingWarning>,
}

/// Result of a generation run that wrote to disk.
pub struct GenerateResult {
    pub written: Vec<PathBuf>,
    pub warnings: Vec<ValueEncodingWarning>,
}

/// Facade driving both emitters over one validated tree.
///
/// Each call owns its generation context, so a generator can serve any
/// number of invocations without state leaking between them.
pub struct Generator<'a> {
    translator: Translator<'a>,
    module: ModuleName,
}

impl<'a> Generator<'a> {
    pub fn new(registry: &'a SchemaRegistry, module: ModuleName) -> Self {
        Self {
            translator: Translator::new(registry),
            module,
        }
    }

    /// Render both artifacts without touching the filesystem.
    pub fn render(&self, tree: &Node) -> crate::Result<Rendered> {
        let mut ctx = GenContext::new(self.module.clone());
        let header = HeaderFile::new(tree, &self.translator).render(&ctx)?;
        let source = SourceFile::new(tree, &self.translator).render(&mut ctx)?;
        Ok(Rendered {
            header,
            source,
            warnings: ctx.into_warnings(),
        })
    }

    /// Render and write both artifacts. Nothing is written unless both
    /// render cleanly, and a failed write removes whatever was already
    /// on disk, so no partial artifact set survives a failure.
    pub fn generate(
        &self,
        tree: &Node,
        header_path: &Path,
        source_path: &Path,
    ) -> eyre::Result<GenerateResult> {
        let rendered = self.render(tree)?;

        let mut artifacts = ArtifactSet::new();
        artifacts.push(header_path, rendered.header);
        artifacts.push(source_path, rendered.source);
        let written = artifacts.commit()?;

        Ok(GenerateResult {
            written,
            warnings: rendered.warnings,
        })
    }
}

#[cfg(test)]
mod tests {
    use nkgen_markup::MarkupFile;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_generate_writes_both_artifacts() {
        let temp = TempDir::new().unwrap();
        let header_path = temp.path().join("Test.xml.h");
        let source_path = temp.path().join("Test.xml.c");

        let registry = SchemaRegistry::nanokit().unwrap();
        let file = MarkupFile::parse("<Window Title=\"Hi\"><Button Text=\"OK\"/></Window>")
            .unwrap();
        let generator = Generator::new(&registry, ModuleName::new("Test").unwrap());

        let result = generator
            .generate(file.tree(), &header_path, &source_path)
            .unwrap();

        assert_eq!(result.written.len(), 2);
        assert!(result.warnings.is_empty());
        assert!(
            std::fs::read_to_string(&header_path)
                .unwrap()
                .contains("#ifndef TEST_XML_H")
        );
        assert!(
            std::fs::read_to_string(&source_path)
                .unwrap()
                .contains("bool Test_Create(Test_t *instance)")
        );
    }

    #[test]
    fn test_render_does_not_touch_disk() {
        let registry = SchemaRegistry::nanokit().unwrap();
        let file = MarkupFile::parse("<View/>").unwrap();
        let generator = Generator::new(&registry, ModuleName::new("Panel").unwrap());

        let rendered = generator.render(file.tree()).unwrap();

        assert!(rendered.header.contains("} Panel_t;"));
        assert!(rendered.source.contains("void Panel_Destroy(Panel_t *instance)"));
    }

    #[test]
    fn test_repeated_invocations_are_independent() {
        let registry = SchemaRegistry::nanokit().unwrap();
        let file = MarkupFile::parse(
            "<Window><Button Background=\"Purple\"/></Window>",
        )
        .unwrap();
        let generator = Generator::new(&registry, ModuleName::new("Test").unwrap());

        let first = generator.render(file.tree()).unwrap();
        let second = generator.render(file.tree()).unwrap();

        assert_eq!(first.header, second.header);
        assert_eq!(first.source, second.source);
        // Warnings do not accumulate across invocations.
        assert_eq!(first.warnings.len(), 1);
        assert_eq!(second.warnings.len(), 1);
    }
}
