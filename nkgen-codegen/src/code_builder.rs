//! Code builder utility for generating properly indented C code.

const INDENT: &str = "    ";

/// Fluent API for building C code with proper indentation.
///
/// # Example
///
/// ```
/// use nkgen_codegen::CodeBuilder;
///
/// let code = CodeBuilder::new()
///     .line("void Test_Destroy(Test_t *instance)")
///     .line("{")
///     .indent()
///     .line("(void)instance;")
///     .dedent()
///     .line("}")
///     .build();
///
/// assert_eq!(
///     code,
///     "void Test_Destroy(Test_t *instance)\n{\n    (void)instance;\n}\n"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct CodeBuilder {
    indent_level: usize,
    buffer: String,
}

impl CodeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a line of code with current indentation.
    pub fn line(mut self, s: &str) -> Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line (no indentation).
    pub fn blank(mut self) -> Self {
        self.buffer.push('\n');
        self
    }

    /// Increase indentation level.
    pub fn indent(mut self) -> Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn dedent(mut self) -> Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Conditionally add content.
    pub fn when<F>(self, condition: bool, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        if condition { f(self) } else { self }
    }

    /// Iterate and add content for each item.
    pub fn each<T, I, F>(mut self, items: I, f: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: Fn(Self, T) -> Self,
    {
        for item in items {
            self = f(self, item);
        }
        self
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    /// Get a reference to the current buffer content.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(INDENT);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_line() {
        let code = CodeBuilder::new().line("int x = 1;").build();
        assert_eq!(code, "int x = 1;\n");
    }

    #[test]
    fn test_indentation() {
        let code = CodeBuilder::new()
            .line("{")
            .indent()
            .line("return true;")
            .dedent()
            .line("}")
            .build();

        assert_eq!(code, "{\n    return true;\n}\n");
    }

    #[test]
    fn test_blank_line() {
        let code = CodeBuilder::new()
            .line("#include <nanowin.h>")
            .blank()
            .line("typedef struct")
            .build();

        assert_eq!(code, "#include <nanowin.h>\n\ntypedef struct\n");
    }

    #[test]
    fn test_dedent_saturates_at_zero() {
        let code = CodeBuilder::new().dedent().line("top;").build();
        assert_eq!(code, "top;\n");
    }

    #[test]
    fn test_conditional() {
        let with_guard = CodeBuilder::new()
            .when(true, |b| b.line("#ifndef TEST_XML_H"))
            .line("#define TEST_XML_H")
            .build();

        let without_guard = CodeBuilder::new()
            .when(false, |b| b.line("#ifndef TEST_XML_H"))
            .line("#define TEST_XML_H")
            .build();

        assert_eq!(with_guard, "#ifndef TEST_XML_H\n#define TEST_XML_H\n");
        assert_eq!(without_guard, "#define TEST_XML_H\n");
    }

    #[test]
    fn test_each() {
        let code = CodeBuilder::new()
            .line("typedef struct")
            .line("{")
            .indent()
            .each(["nkWindow_t super;", "nkButton_t Btn1;"], |b, field| {
                b.line(field)
            })
            .dedent()
            .line("} Test_t;")
            .build();

        assert_eq!(
            code,
            "typedef struct\n{\n    nkWindow_t super;\n    nkButton_t Btn1;\n} Test_t;\n"
        );
    }
}
