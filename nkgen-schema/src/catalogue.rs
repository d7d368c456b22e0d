//! The compiled-in NanoKit widget catalogue.

use crate::{ClassDef, SchemaError, SchemaRegistry, ValueType};

impl SchemaRegistry {
    /// Build the NanoKit catalogue.
    ///
    /// `Window` and `View` are the root classes; every container and
    /// control derives from `View` (one level, never deeper).
    pub fn nanokit() -> Result<Self, SchemaError> {
        Self::build(vec![
            ClassDef::new("Window", "nkWindow_t", "nkWindow_Create")
                .constructor_params(["Title", "Width", "Height"])
                .property("Title", "title", ValueType::String)
                .property("Width", "width", ValueType::Float)
                .property("Height", "height", ValueType::Float),
            ClassDef::new("View", "nkView_t", "nkView_Create")
                .property("Width", "sizeRequest.width", ValueType::Float)
                .property("Height", "sizeRequest.height", ValueType::Float)
                .property("Margin", "margin", ValueType::Thickness)
                .property("Padding", "padding", ValueType::Thickness)
                .property("BackgroundColor", "backgroundColor", ValueType::Color)
                .property("DockPanel.Dock", "dockPosition", ValueType::DockPosition)
                .property("Click", "onClick", ValueType::GenericCallback)
                .property("PointerDown", "onPointerDown", ValueType::GenericCallback)
                .property("PointerUp", "onPointerUp", ValueType::GenericCallback)
                .property("PointerMove", "onPointerMove", ValueType::GenericCallback),
            ClassDef::new("DockPanel", "nkDockPanel_t", "nkDockPanel_Create")
                .super_class("View")
                .property("LastChildFill", "lastChildFill", ValueType::Boolean),
            ClassDef::new("StackPanel", "nkStackPanel_t", "nkStackPanel_Create")
                .super_class("View")
                .property("Orientation", "orientation", ValueType::StackOrientation)
                .property("Spacing", "spacing", ValueType::Float),
            ClassDef::new("ScrollViewer", "nkScrollViewer_t", "nkScrollViewer_Create")
                .super_class("View")
                .property("HorizontalScroll", "horizontalScroll", ValueType::Boolean)
                .property("VerticalScroll", "verticalScroll", ValueType::Boolean),
            ClassDef::new("Button", "nkButton_t", "nkButton_Create")
                .super_class("View")
                .property("Text", "text", ValueType::String)
                .property("Content", "text", ValueType::String)
                .property("Foreground", "foreground", ValueType::Color)
                .property("Background", "background", ValueType::Color)
                .property("Click", "onClick", ValueType::ButtonCallback),
            ClassDef::new("Label", "nkLabel_t", "nkLabel_Create")
                .super_class("View")
                .property("Text", "text", ValueType::String)
                .property("Content", "text", ValueType::String)
                .property("Foreground", "foreground", ValueType::Color),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogue_builds() {
        let registry = SchemaRegistry::nanokit().unwrap();
        assert_eq!(registry.len(), 7);
        assert!(registry.contains("Window"));
        assert!(registry.contains("ScrollViewer"));
        assert!(!registry.contains("Frobnicator"));
    }

    #[test]
    fn test_window_constructor_params() {
        let registry = SchemaRegistry::nanokit().unwrap();
        let window = registry.get("Window").unwrap();
        assert_eq!(window.constructor_params, ["Title", "Width", "Height"]);
        assert!(window.superclass.is_none());
    }

    #[test]
    fn test_button_click_shadows_view_click() {
        let registry = SchemaRegistry::nanokit().unwrap();
        let button = registry.get("Button").unwrap();

        let click = button.resolve("Click").unwrap();
        assert_eq!(click.value_type, ValueType::ButtonCallback);
        assert!(!click.inherited);

        // Label has no Click of its own, so it inherits the generic one.
        let label = registry.get("Label").unwrap();
        let click = label.resolve("Click").unwrap();
        assert_eq!(click.value_type, ValueType::GenericCallback);
        assert!(click.inherited);
    }

    #[test]
    fn test_dock_attached_property_lives_on_view() {
        let registry = SchemaRegistry::nanokit().unwrap();
        let button = registry.get("Button").unwrap();

        let dock = button.resolve("DockPanel.Dock").unwrap();
        assert_eq!(dock.value_type, ValueType::DockPosition);
        assert!(dock.inherited);
        assert_eq!(dock.code_field_name, "dockPosition");
    }
}
