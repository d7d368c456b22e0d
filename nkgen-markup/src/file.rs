use std::path::{Path, PathBuf};

use crate::{Error, Node, Result, SourceContext, TreeBuilder};

/// A markup document with its raw content and the built domain tree.
///
/// The DOM is transient: it borrows the content during parsing and is
/// dropped once the owned tree exists.
#[derive(Debug)]
pub struct MarkupFile {
    path: PathBuf,
    source: SourceContext,
    tree: Node,
}

impl MarkupFile {
    /// Open and parse a markup file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        Self::from_source(SourceContext::new(content, filename), path)
    }

    /// Parse markup from a string (uses "document.xml" as the filename).
    pub fn parse(content: &str) -> Result<Self> {
        Self::from_source(
            SourceContext::new(content, "document.xml"),
            PathBuf::from("document.xml"),
        )
    }

    fn from_source(source: SourceContext, path: PathBuf) -> Result<Self> {
        let doc = roxmltree::Document::parse(source.src())
            .map_err(|e| source.malformed_error(e))?;
        let tree = TreeBuilder::new().build(&doc, &source)?;
        Ok(Self { path, source, tree })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the source context for diagnostics.
    pub fn source(&self) -> &SourceContext {
        &self.source
    }

    /// Get the built domain tree.
    pub fn tree(&self) -> &Node {
        &self.tree
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_document() {
        let file = MarkupFile::parse("<Window Title=\"Hi\"><Button Name=\"Btn1\"/></Window>")
            .unwrap();
        assert_eq!(file.tree().class_name, "Window");
        assert_eq!(file.tree().children.len(), 1);
    }

    #[test]
    fn test_parse_malformed_document() {
        let err = MarkupFile::parse("<Window><Button></Window>").unwrap_err();
        assert!(matches!(*err, Error::MalformedDocument { .. }));
    }

    #[test]
    fn test_open_missing_file() {
        let err = MarkupFile::open("/nonexistent/layout.xml").unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }

    #[test]
    fn test_tree_serializes_to_json() {
        let file = MarkupFile::parse("<Window><Button Text=\"OK\"/></Window>").unwrap();
        let json = serde_json::to_value(file.tree()).unwrap();
        assert_eq!(json["class_name"], "Window");
        assert_eq!(json["children"][0]["properties"][0]["key"], "Text");
    }
}
