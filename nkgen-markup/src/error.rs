use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for markup operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Encapsulates the markup content and filename, reducing parameter
/// passing in error factory functions.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        &self.src
    }

    /// Get the filename.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a malformed-document error from a roxmltree error.
    pub fn malformed_error(&self, source: roxmltree::Error) -> Box<Error> {
        let span = Some(SourceSpan::from(self.offset_of(source.pos())));
        Box::new(Error::MalformedDocument {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a multiple-roots error pointing at the extra element.
    pub fn multiple_roots_error(&self, span: impl Into<SourceSpan>) -> Box<Error> {
        Box::new(Error::MultipleRoots {
            src: self.named_source(),
            span: span.into(),
        })
    }

    /// Convert a row/column position into a byte offset into the source.
    fn offset_of(&self, pos: roxmltree::TextPos) -> usize {
        let mut row = 1u32;
        let mut offset = 0usize;
        for line in self.src.split_inclusive('\n') {
            if row == pos.row {
                let col = (pos.col as usize).saturating_sub(1);
                return offset + col.min(line.len());
            }
            offset += line.len();
            row += 1;
        }
        self.src.len()
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse markup document")]
    #[diagnostic(code(nkgen::malformed_document))]
    MalformedDocument {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: roxmltree::Error,
    },

    #[error("markup documents must have exactly one top-level element")]
    #[diagnostic(
        code(nkgen::multiple_roots),
        help("wrap the extra elements in a single root element such as <Window>")
    )]
    MultipleRoots {
        #[source_code]
        src: NamedSource<String>,
        #[label("extra top-level element here")]
        span: SourceSpan,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_of_first_line() {
        let ctx = SourceContext::new("<Window>\n</Window>\n", "test.xml");
        let pos = roxmltree::TextPos { row: 1, col: 2 };
        assert_eq!(ctx.offset_of(pos), 1);
    }

    #[test]
    fn test_offset_of_second_line() {
        let ctx = SourceContext::new("<Window>\n</Window>\n", "test.xml");
        let pos = roxmltree::TextPos { row: 2, col: 1 };
        assert_eq!(ctx.offset_of(pos), 9);
    }

    #[test]
    fn test_offset_past_end_clamps() {
        let ctx = SourceContext::new("<a/>", "test.xml");
        let pos = roxmltree::TextPos { row: 9, col: 9 };
        assert_eq!(ctx.offset_of(pos), 4);
    }
}
