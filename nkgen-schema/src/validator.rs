use miette::SourceSpan;
use nkgen_markup::{Node, SourceContext};

use crate::{SchemaRegistry, ValidationError};

/// Validate a domain tree against the registry.
///
/// Walks the whole tree with an explicit work list (documents can nest
/// arbitrarily deep) and never stops early, so one invocation surfaces
/// every defect. An empty result means the tree is valid.
pub fn validate(
    registry: &SchemaRegistry,
    root: &Node,
    source: &SourceContext,
) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut work: Vec<(&Node, String)> = vec![(root, root.label())];

    while let Some((node, path)) = work.pop() {
        match registry.get(&node.class_name) {
            None => {
                errors.push(ValidationError::UnknownClass {
                    class_name: node.class_name.clone(),
                    path: path.clone(),
                    src: source.named_source(),
                    span: SourceSpan::from(node.span.clone()),
                });
                // Property checks are meaningless without a class, but
                // the children still get validated.
            }
            Some(class) => {
                for prop in &node.properties {
                    if class.resolve(&prop.key).is_none() {
                        errors.push(ValidationError::UnknownProperty {
                            class_name: node.class_name.clone(),
                            property: prop.key.clone(),
                            path: path.clone(),
                            src: source.named_source(),
                            span: SourceSpan::from(node.span.clone()),
                        });
                    }
                }
            }
        }

        for child in node.children.iter().rev() {
            work.push((child, format!("{}/{}", path, child.label())));
        }
    }

    errors
}
