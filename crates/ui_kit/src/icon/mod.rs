//! Icon definitions, the built-in icon set, and the name-to-definition registry.
//!
//! Built-in icons are a closed [`IconName`] enum so typos fail at compile time. Custom icons are
//! registered at runtime under free-form names, from structured definitions, raw SVG markup, or
//! SVG files fetched by URL, and are addressed through [`IconRef::Custom`].

use thiserror::Error;

mod builtin;
mod markup;
mod registry;
mod view;

pub use builtin::IconName;
pub use markup::{canonical_attribute_name, parse_svg_markup};
pub use registry::{load_icon_definition, IconRegistry, SharedIconRegistry};
pub use view::{Icon, IconSize};

/// Coordinate frame used when a definition does not declare one.
pub const DEFAULT_VIEW_BOX: &str = "0 0 24 24";

#[derive(Debug, Clone, PartialEq, Eq)]
/// One SVG element of an icon, with its attributes and nested elements.
pub struct IconShape {
    /// Element tag, for example `path` or `circle`.
    pub tag: String,
    /// Attributes in source order, named in SVG DOM spelling.
    pub attributes: Vec<(String, String)>,
    /// Nested elements (for example the contents of a `g` group).
    pub children: Vec<IconShape>,
}

impl IconShape {
    /// Creates a shape without attributes or children.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Adds an attribute.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// Adds a nested element.
    pub fn child(mut self, child: IconShape) -> Self {
        self.children.push(child);
        self
    }

    /// Returns the value of attribute `name`.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    fn write_markup(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        for (name, value) in &self.attributes {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            escape_attribute_value(value, out);
            out.push('"');
        }
        if self.children.is_empty() {
            out.push_str("/>");
            return;
        }
        out.push('>');
        for child in &self.children {
            child.write_markup(out);
        }
        out.push_str("</");
        out.push_str(&self.tag);
        out.push('>');
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Renderable shape of one icon: its coordinate frame and SVG content.
pub struct IconDefinition {
    /// `viewBox` coordinate frame, for example `"0 0 24 24"`.
    pub view_box: String,
    /// Top-level SVG elements drawn inside the icon's `<svg>` root.
    pub shapes: Vec<IconShape>,
}

impl Default for IconDefinition {
    fn default() -> Self {
        Self {
            view_box: DEFAULT_VIEW_BOX.to_string(),
            shapes: Vec::new(),
        }
    }
}

impl IconDefinition {
    /// Creates a definition in the default coordinate frame.
    pub fn new(shapes: Vec<IconShape>) -> Self {
        Self {
            shapes,
            ..Self::default()
        }
    }

    /// Returns the definition with a different `viewBox`.
    pub fn with_view_box(mut self, view_box: impl Into<String>) -> Self {
        self.view_box = view_box.into();
        self
    }

    /// Serializes the shapes as SVG markup suitable for the inner HTML of an `<svg>` root.
    pub fn content_markup(&self) -> String {
        let mut out = String::new();
        for shape in &self.shapes {
            shape.write_markup(&mut out);
        }
        out
    }
}

fn escape_attribute_value(value: &str, out: &mut String) {
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Reference to an icon: a built-in name or a runtime-registered custom name.
pub enum IconRef {
    /// Icon from the built-in set.
    Builtin(IconName),
    /// Icon registered at runtime under a free-form name.
    Custom(String),
}

impl IconRef {
    /// Returns the registry key for this reference.
    pub fn key(&self) -> &str {
        match self {
            Self::Builtin(name) => name.as_str(),
            Self::Custom(name) => name,
        }
    }
}

impl From<IconName> for IconRef {
    fn from(name: IconName) -> Self {
        Self::Builtin(name)
    }
}

impl From<String> for IconRef {
    fn from(name: String) -> Self {
        Self::Custom(name)
    }
}

impl From<&str> for IconRef {
    fn from(name: &str) -> Self {
        Self::Custom(name.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Failure while loading or parsing an icon.
pub enum IconError {
    /// The SVG markup is not well-formed or has no `<svg>` root.
    #[error("malformed SVG markup at byte {position}: {reason}")]
    Markup {
        /// Byte offset where parsing stopped.
        position: usize,
        /// What was wrong.
        reason: String,
    },
    /// The request for an SVG file could not be completed.
    #[error("failed to fetch icon from {url}: {reason}")]
    Fetch {
        /// Requested URL.
        url: String,
        /// Transport failure description.
        reason: String,
    },
    /// The server answered the SVG request with a non-success status.
    #[error("icon request to {url} returned HTTP {status}")]
    Status {
        /// Requested URL.
        url: String,
        /// HTTP status code.
        status: u16,
    },
}
