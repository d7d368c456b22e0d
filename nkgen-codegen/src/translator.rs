use nkgen_schema::{ClassEntry, FlatProperty, SchemaRegistry};

use crate::{Error, Result};

/// Stateless name-resolution service over the schema registry.
///
/// Validation has already gated the tree, so a miss here is an internal
/// invariant violation, not a user error.
pub struct Translator<'a> {
    registry: &'a SchemaRegistry,
}

impl<'a> Translator<'a> {
    pub fn new(registry: &'a SchemaRegistry) -> Self {
        Self { registry }
    }

    /// Resolve a markup class to its registry entry.
    pub fn resolve_class(&self, name: &str) -> Result<&'a ClassEntry> {
        self.registry
            .get(name)
            .ok_or_else(|| Error::UnknownClass(name.to_string()))
    }

    /// Resolve a property through the class's flattened table.
    pub fn resolve_property(
        &self,
        class: &'a ClassEntry,
        property: &str,
    ) -> Result<&'a FlatProperty> {
        class.resolve(property).ok_or_else(|| Error::UnknownProperty {
            class: class.markup_name.clone(),
            property: property.to_string(),
        })
    }

    /// Assignment path for a resolved property, qualified through the
    /// embedded superclass field when the property is inherited.
    pub fn field_path(&self, property: &FlatProperty) -> String {
        if property.inherited {
            format!(
                "{}.{}",
                embedded_field(&property.owner),
                property.code_field_name
            )
        } else {
            property.code_field_name.clone()
        }
    }

    /// Path to a node's view storage, used for constructor and linkage
    /// calls: the embedded superclass field for derived classes, the
    /// node's own storage otherwise.
    pub fn view_storage(&self, instance_name: &str, class: &ClassEntry) -> String {
        match &class.superclass {
            Some(super_name) => {
                format!("&instance->{}.{}", instance_name, embedded_field(super_name))
            }
            None => format!("&instance->{}", instance_name),
        }
    }
}

/// Name of the embedded superclass field in the generated toolkit
/// structs (`nkButton_t` embeds its `nkView_t` as `view`).
fn embedded_field(class_markup_name: &str) -> String {
    class_markup_name.to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use nkgen_schema::ValueType;

    use super::*;

    #[test]
    fn test_resolve_class() {
        let registry = SchemaRegistry::nanokit().unwrap();
        let translator = Translator::new(&registry);

        let window = translator.resolve_class("Window").unwrap();
        assert_eq!(window.code_type_name, "nkWindow_t");
        assert_eq!(window.constructor_name, "nkWindow_Create");

        assert!(matches!(
            translator.resolve_class("Frobnicator"),
            Err(Error::UnknownClass(_))
        ));
    }

    #[test]
    fn test_resolve_property_reports_inheritance() {
        let registry = SchemaRegistry::nanokit().unwrap();
        let translator = Translator::new(&registry);
        let button = translator.resolve_class("Button").unwrap();

        let text = translator.resolve_property(button, "Text").unwrap();
        assert!(!text.inherited);
        assert_eq!(text.value_type, ValueType::String);

        let margin = translator.resolve_property(button, "Margin").unwrap();
        assert!(margin.inherited);

        assert!(matches!(
            translator.resolve_property(button, "Volume"),
            Err(Error::UnknownProperty { .. })
        ));
    }

    #[test]
    fn test_field_path_qualifies_inherited_properties() {
        let registry = SchemaRegistry::nanokit().unwrap();
        let translator = Translator::new(&registry);
        let button = translator.resolve_class("Button").unwrap();

        let text = translator.resolve_property(button, "Text").unwrap();
        assert_eq!(translator.field_path(text), "text");

        let dock = translator.resolve_property(button, "DockPanel.Dock").unwrap();
        assert_eq!(translator.field_path(dock), "view.dockPosition");
    }

    #[test]
    fn test_view_storage() {
        let registry = SchemaRegistry::nanokit().unwrap();
        let translator = Translator::new(&registry);

        let button = translator.resolve_class("Button").unwrap();
        assert_eq!(
            translator.view_storage("Btn1", button),
            "&instance->Btn1.view"
        );

        let view = translator.resolve_class("View").unwrap();
        assert_eq!(translator.view_storage("child1", view), "&instance->child1");
    }
}
