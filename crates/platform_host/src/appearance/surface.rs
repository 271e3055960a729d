//! Document theme surface contracts.
//!
//! The surface is where the active theme becomes visible to CSS: a single attribute on the
//! document root element and one of two mutually exclusive classes on the body.

use std::{
    cell::RefCell,
    collections::{BTreeMap, BTreeSet},
    rc::Rc,
};

/// Host service that reflects the active theme into the document.
pub trait ThemeSurface {
    /// Sets attribute `name` on the document root element to `value`.
    ///
    /// # Errors
    ///
    /// Returns an error when the document is unavailable.
    fn set_root_attribute(&self, name: &str, value: &str) -> Result<(), String>;

    /// Removes class `remove` from the document body and adds class `add`.
    ///
    /// Both changes are applied in one call so the body never carries both classes.
    ///
    /// # Errors
    ///
    /// Returns an error when the document body is unavailable.
    fn replace_body_class(&self, remove: &str, add: &str) -> Result<(), String>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op theme surface for targets without a document.
pub struct NoopThemeSurface;

impl ThemeSurface for NoopThemeSurface {
    fn set_root_attribute(&self, _name: &str, _value: &str) -> Result<(), String> {
        Ok(())
    }

    fn replace_body_class(&self, _remove: &str, _add: &str) -> Result<(), String> {
        Ok(())
    }
}

#[derive(Debug, Default)]
struct MemorySurfaceInner {
    root_attributes: BTreeMap<String, String>,
    body_classes: BTreeSet<String>,
}

#[derive(Debug, Clone, Default)]
/// In-memory theme surface recording the root attributes and body classes it was given.
pub struct MemoryThemeSurface {
    inner: Rc<RefCell<MemorySurfaceInner>>,
}

impl MemoryThemeSurface {
    /// Returns the current value of root attribute `name`.
    pub fn root_attribute(&self, name: &str) -> Option<String> {
        self.inner.borrow().root_attributes.get(name).cloned()
    }

    /// Returns the body classes in sorted order.
    pub fn body_classes(&self) -> Vec<String> {
        self.inner.borrow().body_classes.iter().cloned().collect()
    }

    /// Adds an unrelated body class, as page markup would.
    pub fn add_body_class(&self, class: &str) {
        self.inner.borrow_mut().body_classes.insert(class.to_string());
    }
}

impl ThemeSurface for MemoryThemeSurface {
    fn set_root_attribute(&self, name: &str, value: &str) -> Result<(), String> {
        self.inner
            .borrow_mut()
            .root_attributes
            .insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn replace_body_class(&self, remove: &str, add: &str) -> Result<(), String> {
        let mut inner = self.inner.borrow_mut();
        inner.body_classes.remove(remove);
        inner.body_classes.insert(add.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn memory_surface_replaces_classes_and_keeps_unrelated_ones() {
        let surface = MemoryThemeSurface::default();
        surface.add_body_class("app");

        surface.replace_body_class("dark", "light").expect("light");
        surface.replace_body_class("light", "dark").expect("dark");
        surface.set_root_attribute("data-theme", "dark").expect("attr");

        assert_eq!(surface.body_classes(), vec!["app".to_string(), "dark".to_string()]);
        assert_eq!(surface.root_attribute("data-theme"), Some("dark".to_string()));
    }
}
