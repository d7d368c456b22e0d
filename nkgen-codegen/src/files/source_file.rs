use nkgen_markup::Node;
use nkgen_schema::{ClassEntry, ValueType};

use crate::{
    CodeBuilder, GenContext, Result, Translator, ValueEncodingWarning, encode_value,
    files::banner,
};

/// Renders the generated source: the `{Module}_Create` body (depth-first
/// construction, property assignment, parent-child linkage) and the
/// placeholder `{Module}_Destroy` body.
pub struct SourceFile<'a> {
    tree: &'a Node,
    translator: &'a Translator<'a>,
}

impl<'a> SourceFile<'a> {
    pub fn new(tree: &'a Node, translator: &'a Translator<'a>) -> Self {
        Self { tree, translator }
    }

    pub fn render(&self, ctx: &mut GenContext) -> Result<String> {
        let module = ctx.module().clone();

        let mut b = banner(CodeBuilder::new(), "Source", &module)
            .blank()
            .line(&format!("#include \"{}\"", module.header_basename()))
            .blank()
            .line(&format!(
                "bool {}({} *instance)",
                module.create_fn(),
                module.type_name()
            ))
            .line("{")
            .indent();

        b = self.emit_node(b, ctx, self.tree, true)?;

        let b = b
            .line("return true;")
            .dedent()
            .line("}")
            .blank()
            .line(&format!(
                "void {}({} *instance)",
                module.destroy_fn(),
                module.type_name()
            ))
            .line("{")
            .indent()
            .line("(void)instance;")
            .dedent()
            .line("}");

        Ok(b.build())
    }

    /// Emit construction, assignments, children (depth-first), then
    /// linkage for one node. Linkage comes after the children are fully
    /// initialized.
    fn emit_node(
        &self,
        mut b: CodeBuilder,
        ctx: &mut GenContext,
        node: &Node,
        is_root: bool,
    ) -> Result<CodeBuilder> {
        let class = self.translator.resolve_class(&node.class_name)?;

        if is_root {
            // The root uses its own constructor; its primitive
            // properties are passed positionally.
            let mut args = vec![format!("&instance->{}", node.instance_name)];
            for param in &class.constructor_params {
                args.push(self.constructor_arg(ctx, node, class, param)?);
            }
            b = b
                .line(&format!("if (!{}({}))", class.constructor_name, args.join(", ")))
                .line("{")
                .indent()
                .line("return false;")
                .dedent()
                .line("}");
        } else {
            // Every other node gets the generic superclass constructor
            // against its own storage.
            let constructor = match &class.superclass {
                Some(super_name) => &self.translator.resolve_class(super_name)?.constructor_name,
                None => &class.constructor_name,
            };
            b = b.line(&format!(
                "{}({});",
                constructor,
                self.translator.view_storage(&node.instance_name, class)
            ));
        }

        for prop in &node.properties {
            // Root constructor params were consumed positionally.
            if is_root && class.constructor_params.contains(&prop.key) {
                continue;
            }
            let resolved = self.translator.resolve_property(class, &prop.key)?;
            let encoded = encode_value(resolved.value_type, &prop.value);
            if let Some(message) = encoded.fallback {
                ctx.warn(ValueEncodingWarning {
                    target: format!("{}.{}", node.label(), prop.key),
                    message,
                });
            }
            b = b.line(&format!(
                "instance->{}.{} = {};",
                node.instance_name,
                self.translator.field_path(resolved),
                encoded.literal
            ));
        }
        b = b.blank();

        for child in &node.children {
            b = self.emit_node(b, ctx, child, false)?;
        }

        if let Some(first) = node.children.first() {
            if is_root {
                // The root tracks a single content child.
                let first_class = self.translator.resolve_class(&first.class_name)?;
                b = b
                    .line(&format!(
                        "{}_SetContent(&instance->{}, {});",
                        class.toolkit_prefix(),
                        node.instance_name,
                        self.translator
                            .view_storage(&first.instance_name, first_class)
                    ))
                    .blank();
            } else {
                for child in &node.children {
                    let child_class = self.translator.resolve_class(&child.class_name)?;
                    b = b.line(&format!(
                        "nkView_AddChild({}, {});",
                        self.translator.view_storage(&node.instance_name, class),
                        self.translator
                            .view_storage(&child.instance_name, child_class)
                    ));
                }
                b = b.blank();
            }
        }

        Ok(b)
    }

    /// Encode one positional constructor argument, falling back to a
    /// type-appropriate default when the document omits the property.
    fn constructor_arg(
        &self,
        ctx: &mut GenContext,
        node: &Node,
        class: &'a ClassEntry,
        param: &str,
    ) -> Result<String> {
        let resolved = self.translator.resolve_property(class, param)?;
        match node.property(param) {
            Some(raw) => {
                let encoded = encode_value(resolved.value_type, raw);
                if let Some(message) = encoded.fallback {
                    ctx.warn(ValueEncodingWarning {
                        target: format!("{}.{}", node.label(), param),
                        message,
                    });
                }
                Ok(encoded.literal)
            }
            None => Ok(match resolved.value_type {
                ValueType::String => "\"\"".to_string(),
                ValueType::Float => "0.0f".to_string(),
                other => encode_value(other, "").literal,
            }),
        }
    }
}
