use std::fmt;

use indexmap::IndexMap;

use crate::SchemaError;

/// The taxonomy governing how a raw attribute string is encoded into a
/// C literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    String,
    Float,
    Thickness,
    Color,
    Boolean,
    DockPosition,
    StackOrientation,
    GenericCallback,
    ButtonCallback,
}

impl ValueType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "String",
            Self::Float => "Float",
            Self::Thickness => "Thickness",
            Self::Color => "Color",
            Self::Boolean => "Boolean",
            Self::DockPosition => "DockPosition",
            Self::StackOrientation => "StackOrientation",
            Self::GenericCallback => "GenericCallback",
            Self::ButtonCallback => "ButtonCallback",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One typed property as declared on a class.
#[derive(Debug, Clone)]
pub struct PropertyEntry {
    pub markup_name: String,
    pub code_field_name: String,
    pub value_type: ValueType,
}

/// A flattened property lookup entry. Own-class entries shadow
/// superclass entries of the same markup name.
#[derive(Debug, Clone)]
pub struct FlatProperty {
    pub code_field_name: String,
    pub value_type: ValueType,
    /// True when the property comes from the direct superclass.
    pub inherited: bool,
    /// Markup name of the class that declares the property.
    pub owner: String,
}

/// A registered widget class.
#[derive(Debug, Clone)]
pub struct ClassEntry {
    pub markup_name: String,
    pub code_type_name: String,
    pub constructor_name: String,
    /// Markup property names passed positionally to the constructor
    /// when this class is the document root.
    pub constructor_params: Vec<String>,
    pub properties: Vec<PropertyEntry>,
    pub superclass: Option<String>,
    flat: IndexMap<String, FlatProperty>,
}

impl ClassEntry {
    /// Resolve a property through the flattened table: own-class
    /// entries first, then the direct superclass.
    pub fn resolve(&self, property: &str) -> Option<&FlatProperty> {
        self.flat.get(property)
    }

    /// The toolkit function prefix, e.g. "nkWindow" for "nkWindow_Create".
    pub fn toolkit_prefix(&self) -> &str {
        self.constructor_name
            .strip_suffix("_Create")
            .unwrap_or(&self.constructor_name)
    }
}

/// Builder for a class definition; the registry flattens and checks
/// definitions when it is built.
#[derive(Debug, Clone)]
pub struct ClassDef {
    markup_name: String,
    code_type_name: String,
    constructor_name: String,
    constructor_params: Vec<String>,
    properties: Vec<PropertyEntry>,
    superclass: Option<String>,
}

impl ClassDef {
    pub fn new(
        markup_name: impl Into<String>,
        code_type_name: impl Into<String>,
        constructor_name: impl Into<String>,
    ) -> Self {
        Self {
            markup_name: markup_name.into(),
            code_type_name: code_type_name.into(),
            constructor_name: constructor_name.into(),
            constructor_params: Vec::new(),
            properties: Vec::new(),
            superclass: None,
        }
    }

    /// Declare the direct superclass (single level; chains are not walked).
    pub fn super_class(mut self, name: impl Into<String>) -> Self {
        self.superclass = Some(name.into());
        self
    }

    /// Declare the properties passed positionally to the root constructor.
    pub fn constructor_params<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.constructor_params = names.into_iter().map(Into::into).collect();
        self
    }

    /// Declare a typed property.
    pub fn property(
        mut self,
        markup_name: impl Into<String>,
        code_field_name: impl Into<String>,
        value_type: ValueType,
    ) -> Self {
        self.properties.push(PropertyEntry {
            markup_name: markup_name.into(),
            code_field_name: code_field_name.into(),
            value_type,
        });
        self
    }
}

/// The closed catalogue of registered classes.
///
/// Built once, immutable afterwards. Construction rejects duplicate
/// classes, duplicate property names within a class, unknown
/// superclasses, and constructor parameters that name no property.
#[derive(Debug, Clone)]
pub struct SchemaRegistry {
    classes: IndexMap<String, ClassEntry>,
}

impl SchemaRegistry {
    pub fn build(defs: Vec<ClassDef>) -> Result<Self, SchemaError> {
        let mut classes: IndexMap<String, ClassEntry> = IndexMap::with_capacity(defs.len());

        for def in &defs {
            if classes.contains_key(&def.markup_name) {
                return Err(SchemaError::DuplicateClass(def.markup_name.clone()));
            }

            let mut flat: IndexMap<String, FlatProperty> = IndexMap::new();
            for prop in &def.properties {
                let entry = FlatProperty {
                    code_field_name: prop.code_field_name.clone(),
                    value_type: prop.value_type,
                    inherited: false,
                    owner: def.markup_name.clone(),
                };
                if flat.insert(prop.markup_name.clone(), entry).is_some() {
                    return Err(SchemaError::DuplicateProperty {
                        class: def.markup_name.clone(),
                        property: prop.markup_name.clone(),
                    });
                }
            }

            for param in &def.constructor_params {
                if !flat.contains_key(param) {
                    return Err(SchemaError::UnknownConstructorParam {
                        class: def.markup_name.clone(),
                        property: param.clone(),
                    });
                }
            }

            classes.insert(
                def.markup_name.clone(),
                ClassEntry {
                    markup_name: def.markup_name.clone(),
                    code_type_name: def.code_type_name.clone(),
                    constructor_name: def.constructor_name.clone(),
                    constructor_params: def.constructor_params.clone(),
                    properties: def.properties.clone(),
                    superclass: def.superclass.clone(),
                    flat,
                },
            );
        }

        // Merge the direct superclass into each flattened table. One
        // hop only; deeper ancestors are not walked.
        for def in &defs {
            let Some(super_name) = &def.superclass else {
                continue;
            };
            let super_props: Vec<(String, FlatProperty)> = match classes.get(super_name.as_str()) {
                Some(super_entry) => super_entry
                    .properties
                    .iter()
                    .map(|p| {
                        (
                            p.markup_name.clone(),
                            FlatProperty {
                                code_field_name: p.code_field_name.clone(),
                                value_type: p.value_type,
                                inherited: true,
                                owner: super_name.clone(),
                            },
                        )
                    })
                    .collect(),
                None => {
                    return Err(SchemaError::UnknownSuperclass {
                        class: def.markup_name.clone(),
                        superclass: super_name.clone(),
                    });
                }
            };

            let entry = classes
                .get_mut(&def.markup_name)
                .expect("class was inserted in the first pass");
            for (name, prop) in super_props {
                entry.flat.entry(name).or_insert(prop);
            }
        }

        Ok(Self { classes })
    }

    /// Look up a class by exact markup name.
    pub fn get(&self, name: &str) -> Option<&ClassEntry> {
        self.classes.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.classes.contains_key(name)
    }

    /// Iterate over the registered classes in registration order.
    pub fn classes(&self) -> impl Iterator<Item = &ClassEntry> {
        self.classes.values()
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_registry() -> SchemaRegistry {
        SchemaRegistry::build(vec![
            ClassDef::new("View", "nkView_t", "nkView_Create")
                .property("Margin", "margin", ValueType::Thickness)
                .property("Click", "onClick", ValueType::GenericCallback),
            ClassDef::new("Button", "nkButton_t", "nkButton_Create")
                .super_class("View")
                .property("Text", "text", ValueType::String)
                .property("Click", "onClick", ValueType::ButtonCallback),
        ])
        .unwrap()
    }

    #[test]
    fn test_own_property_resolves_first() {
        let registry = small_registry();
        let button = registry.get("Button").unwrap();

        let click = button.resolve("Click").unwrap();
        assert_eq!(click.value_type, ValueType::ButtonCallback);
        assert!(!click.inherited);
        assert_eq!(click.owner, "Button");
    }

    #[test]
    fn test_inherited_property_resolves_through_superclass() {
        let registry = small_registry();
        let button = registry.get("Button").unwrap();

        let margin = button.resolve("Margin").unwrap();
        assert!(margin.inherited);
        assert_eq!(margin.owner, "View");
        assert_eq!(margin.value_type, ValueType::Thickness);
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let registry = small_registry();
        let button = registry.get("Button").unwrap();

        let first = button.resolve("Margin").unwrap().code_field_name.clone();
        let second = button.resolve("Margin").unwrap().code_field_name.clone();
        assert_eq!(first, second);
    }

    #[test]
    fn test_unknown_property_resolves_to_none() {
        let registry = small_registry();
        assert!(registry.get("Button").unwrap().resolve("Frobnicate").is_none());
    }

    #[test]
    fn test_duplicate_property_is_a_construction_error() {
        let err = SchemaRegistry::build(vec![
            ClassDef::new("View", "nkView_t", "nkView_Create")
                .property("Margin", "margin", ValueType::Thickness)
                .property("Margin", "margin2", ValueType::Thickness),
        ])
        .unwrap_err();
        assert!(matches!(err, SchemaError::DuplicateProperty { .. }));
    }

    #[test]
    fn test_unknown_superclass_is_a_construction_error() {
        let err = SchemaRegistry::build(vec![
            ClassDef::new("Button", "nkButton_t", "nkButton_Create").super_class("Widget"),
        ])
        .unwrap_err();
        assert!(matches!(err, SchemaError::UnknownSuperclass { .. }));
    }

    #[test]
    fn test_constructor_param_must_name_a_property() {
        let err = SchemaRegistry::build(vec![
            ClassDef::new("Window", "nkWindow_t", "nkWindow_Create")
                .constructor_params(["Title"]),
        ])
        .unwrap_err();
        assert!(matches!(err, SchemaError::UnknownConstructorParam { .. }));
    }

    #[test]
    fn test_toolkit_prefix() {
        let registry = small_registry();
        assert_eq!(registry.get("Button").unwrap().toolkit_prefix(), "nkButton");
    }
}
