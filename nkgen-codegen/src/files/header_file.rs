use nkgen_markup::Node;
use nkgen_schema::ValueType;

use crate::{CodeBuilder, GenContext, Result, Translator, files::banner};

/// Renders the generated header: the module struct (one field per tree
/// node), the create/destroy declarations, and one forward declaration
/// per referenced callback.
pub struct HeaderFile<'a> {
    tree: &'a Node,
    translator: &'a Translator<'a>,
}

impl<'a> HeaderFile<'a> {
    pub fn new(tree: &'a Node, translator: &'a Translator<'a>) -> Self {
        Self { tree, translator }
    }

    pub fn render(&self, ctx: &GenContext) -> Result<String> {
        let module = ctx.module();
        let root_class = self.translator.resolve_class(&self.tree.class_name)?;

        let mut fields = vec![format!("{} super;", root_class.code_type_name)];
        for node in self.tree.iter().skip(1) {
            let class = self.translator.resolve_class(&node.class_name)?;
            fields.push(format!("{} {};", class.code_type_name, node.instance_name));
        }

        let callbacks = self.callback_declarations()?;

        let b = banner(CodeBuilder::new(), "Header", module)
            .blank()
            .line(&format!("#ifndef {}", module.include_guard()))
            .line(&format!("#define {}", module.include_guard()))
            .blank()
            .line("#include <nanowin.h>")
            .blank()
            .line("typedef struct")
            .line("{")
            .indent()
            .each(&fields, |b, field| b.line(field))
            .dedent()
            .line(&format!("}} {};", module.type_name()))
            .blank()
            .line("/* Module Functions - Implementations Generated from XML */")
            .line(&format!(
                "bool {}({} *instance);",
                module.create_fn(),
                module.type_name()
            ))
            .line(&format!(
                "void {}({} *instance);",
                module.destroy_fn(),
                module.type_name()
            ))
            .blank()
            .when(!callbacks.is_empty(), |b| {
                b.line("/* Callback Functions - Implemented in User Code */")
                    .each(&callbacks, |b, decl| b.line(decl))
                    .blank()
            })
            .line(&format!("#endif /* {} */", module.include_guard()));

        Ok(b.build())
    }

    /// Forward declarations for every callback-typed property, in
    /// pre-order tree walk and per-node attribute order. A button
    /// callback takes a handle to the declaring widget type; a generic
    /// callback takes none.
    fn callback_declarations(&self) -> Result<Vec<String>> {
        let mut decls = Vec::new();
        for node in self.tree.iter() {
            let class = self.translator.resolve_class(&node.class_name)?;
            for prop in &node.properties {
                let resolved = self.translator.resolve_property(class, &prop.key)?;
                match resolved.value_type {
                    ValueType::ButtonCallback => {
                        let owner = self.translator.resolve_class(&resolved.owner)?;
                        decls.push(format!(
                            "void {}({} *button);",
                            prop.value, owner.code_type_name
                        ));
                    }
                    ValueType::GenericCallback => {
                        decls.push(format!("void {}(void);", prop.value));
                    }
                    _ => {}
                }
            }
        }
        Ok(decls)
    }
}
