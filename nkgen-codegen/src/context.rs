use std::fmt;

use nkgen_core::{is_c_identifier, to_macro_case};

use crate::{Error, Result};

/// A validated module name with its derived casings.
///
/// The name flows into the generated type (`{Module}_t`), the
/// create/destroy functions, and the include guard, so it must be a
/// valid C identifier.
#[derive(Debug, Clone)]
pub struct ModuleName {
    name: String,
    upper: String,
}

impl ModuleName {
    pub fn new(name: &str) -> Result<Self> {
        if !is_c_identifier(name) {
            return Err(Error::InvalidModuleName(name.to_string()));
        }
        Ok(Self {
            upper: to_macro_case(name),
            name: name.to_string(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.name
    }

    pub fn type_name(&self) -> String {
        format!("{}_t", self.name)
    }

    pub fn create_fn(&self) -> String {
        format!("{}_Create", self.name)
    }

    pub fn destroy_fn(&self) -> String {
        format!("{}_Destroy", self.name)
    }

    pub fn header_basename(&self) -> String {
        format!("{}.xml.h", self.name)
    }

    pub fn include_guard(&self) -> String {
        format!("{}_XML_H", self.upper)
    }
}

impl fmt::Display for ModuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// A non-fatal value-encoding fallback, surfaced to the caller.
#[derive(Debug, Clone)]
pub struct ValueEncodingWarning {
    /// The property the value was written for, e.g. `Button[Btn1].Background`.
    pub target: String,
    pub message: String,
}

impl fmt::Display for ValueEncodingWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.target, self.message)
    }
}

/// Mutable state owned by one generation invocation.
///
/// Module-name casings and the warning sink are scoped to the
/// invocation, never process-wide, so batch runs cannot interfere
/// with each other.
pub struct GenContext {
    module: ModuleName,
    warnings: Vec<ValueEncodingWarning>,
}

impl GenContext {
    pub fn new(module: ModuleName) -> Self {
        Self {
            module,
            warnings: Vec::new(),
        }
    }

    pub fn module(&self) -> &ModuleName {
        &self.module
    }

    /// Record a non-fatal encoding fallback.
    pub fn warn(&mut self, warning: ValueEncodingWarning) {
        self.warnings.push(warning);
    }

    pub fn warnings(&self) -> &[ValueEncodingWarning] {
        &self.warnings
    }

    pub fn into_warnings(self) -> Vec<ValueEncodingWarning> {
        self.warnings
    }
}
