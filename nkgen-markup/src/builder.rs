use crate::{
    CONTENT_KEY, NAME_ATTR, Node, Property, ROOT_INSTANCE_NAME, Result, SourceContext,
};

/// Builds the domain tree from a parsed markup document.
///
/// The default-name counter is owned by the builder, so every
/// invocation starts from a clean slate; nothing is shared between
/// generation runs.
#[derive(Default)]
pub struct TreeBuilder {
    counter: usize,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the domain tree from the document's root element.
    ///
    /// Fails with `MultipleRoots` when more than one top-level element
    /// exists; documents have exactly one root.
    pub fn build(mut self, doc: &roxmltree::Document, source: &SourceContext) -> Result<Node> {
        let mut top_level = doc.root().children().filter(|c| c.is_element());
        let root = top_level
            .next()
            .expect("a parsed document always has a root element");
        if let Some(extra) = top_level.next() {
            return Err(source.multiple_roots_error(extra.range()));
        }
        Ok(self.build_node(root, true))
    }

    fn build_node(&mut self, element: roxmltree::Node, is_root: bool) -> Node {
        let class_name = element.tag_name().name().to_string();

        let mut explicit_name = None;
        let mut properties = Vec::new();
        for attr in element.attributes() {
            if attr.name() == NAME_ATTR {
                explicit_name = Some(attr.value().to_string());
            } else {
                properties.push(Property {
                    key: attr.name().to_string(),
                    value: attr.value().to_string(),
                });
            }
        }

        // Direct text content becomes a synthetic property, appended
        // after the attributes.
        if let Some(text) = element.text().map(str::trim).filter(|t| !t.is_empty()) {
            properties.push(Property {
                key: CONTENT_KEY.to_string(),
                value: text.to_string(),
            });
        }

        // The root is always `super`, even when a `Name` attribute is
        // present; named nodes never consume a counter value.
        let instance_name = if is_root {
            ROOT_INSTANCE_NAME.to_string()
        } else if let Some(name) = explicit_name {
            name
        } else {
            self.counter += 1;
            format!("child{}", self.counter)
        };

        let children = element
            .children()
            .filter(|c| c.is_element())
            .map(|c| self.build_node(c, false))
            .collect();

        Node {
            class_name,
            instance_name,
            properties,
            children,
            span: element.range(),
        }
    }
}
