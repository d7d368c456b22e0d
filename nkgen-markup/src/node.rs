use std::ops::Range;

use serde::Serialize;

/// The reserved attribute that names a node instead of becoming a property.
pub const NAME_ATTR: &str = "Name";

/// The synthetic property key for an element's direct text content.
pub const CONTENT_KEY: &str = "Content";

/// The instance name of the root node; it becomes the embedded
/// superclass field of the generated module struct.
pub const ROOT_INSTANCE_NAME: &str = "super";

/// A raw property captured from a markup attribute (or text content).
///
/// The value is kept verbatim; typing happens later against the schema.
#[derive(Debug, Clone, Serialize)]
pub struct Property {
    pub key: String,
    pub value: String,
}

/// One node of the domain tree, mirroring one markup element.
#[derive(Debug, Clone, Serialize)]
pub struct Node {
    /// The markup tag; checked against the schema registry.
    pub class_name: String,
    /// Explicit `Name` attribute, or a synthesized default.
    pub instance_name: String,
    /// Properties in document order, text content appended last.
    pub properties: Vec<Property>,
    /// Child nodes in document order.
    pub children: Vec<Node>,
    /// Byte range of the element in the source document.
    #[serde(skip)]
    pub span: Range<usize>,
}

impl Node {
    /// Diagnostic label, e.g. `Button[Btn1]`.
    pub fn label(&self) -> String {
        format!("{}[{}]", self.class_name, self.instance_name)
    }

    /// Look up the first property with the given key.
    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties
            .iter()
            .find(|p| p.key == key)
            .map(|p| p.value.as_str())
    }

    /// Pre-order iterator over this node and all descendants.
    pub fn iter(&self) -> PreOrder<'_> {
        PreOrder { stack: vec![self] }
    }

    /// Number of descendants (every node except this one).
    pub fn descendant_count(&self) -> usize {
        self.iter().count() - 1
    }
}

/// Explicit-stack pre-order traversal; documents can nest arbitrarily
/// deep without growing the call stack.
pub struct PreOrder<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        for child in node.children.iter().rev() {
            self.stack.push(child);
        }
        Some(node)
    }
}
