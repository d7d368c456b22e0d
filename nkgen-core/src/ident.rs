//! C identifier helpers.
//!
//! Module names flow into generated type names, function names, and
//! include guards, so they have to be valid C identifiers.

/// C keywords (C11, including the underscore-prefixed type keywords).
const C_KEYWORDS: &[&str] = &[
    "auto", "break", "case", "char", "const", "continue", "default", "do", "double", "else",
    "enum", "extern", "float", "for", "goto", "if", "inline", "int", "long", "register",
    "restrict", "return", "short", "signed", "sizeof", "static", "struct", "switch", "typedef",
    "union", "unsigned", "void", "volatile", "while", "_Alignas", "_Alignof", "_Atomic", "_Bool",
    "_Complex", "_Generic", "_Imaginary", "_Noreturn", "_Static_assert", "_Thread_local",
];

/// Check whether `name` is a C keyword.
pub fn is_c_keyword(name: &str) -> bool {
    C_KEYWORDS.contains(&name)
}

/// Check whether `name` is a valid, non-keyword C identifier.
pub fn is_c_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let valid_start = matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_');
    valid_start
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        && !is_c_keyword(name)
}

/// Convert a module name to its include-guard form (e.g. "MainWindow"
/// -> "MAINWINDOW"). Non-alphanumeric characters become underscores.
pub fn to_macro_case(s: &str) -> String {
    s.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect()
}
