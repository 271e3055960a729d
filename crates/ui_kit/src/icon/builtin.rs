//! Built-in icon set drawn as 24x24 stroked outlines.

use super::{IconDefinition, IconShape};

type ShapeSpec = (&'static str, &'static [(&'static str, &'static str)]);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Closed set of icons that ship with the kit.
pub enum IconName {
    /// Sun, shown while dark mode is active.
    Sun,
    /// Crescent moon, shown while light mode is active.
    Moon,
    /// Magnifying glass.
    Search,
    /// Cross used for close and clear actions.
    Close,
    /// Check mark.
    Check,
    /// Downward chevron.
    ChevronDown,
    /// Upward chevron.
    ChevronUp,
    /// Left chevron.
    ChevronLeft,
    /// Right chevron.
    ChevronRight,
    /// Circled "i".
    Info,
    /// Warning triangle.
    Warning,
    /// Circled exclamation mark.
    Error,
    /// Plus sign.
    Plus,
    /// Minus sign.
    Minus,
    /// House.
    Home,
    /// Three-line menu.
    Menu,
    /// Five-point star.
    Star,
    /// Person silhouette.
    User,
    /// Open arc used as a loading indicator.
    Spinner,
}

const SUN: &[ShapeSpec] = &[
    ("circle", &[("cx", "12"), ("cy", "12"), ("r", "4")]),
    (
        "path",
        &[(
            "d",
            "M12 2v2M12 20v2M4.93 4.93l1.41 1.41M17.66 17.66l1.41 1.41M2 12h2M20 12h2M6.34 17.66l-1.41 1.41M19.07 4.93l-1.41 1.41",
        )],
    ),
];
const MOON: &[ShapeSpec] = &[("path", &[("d", "M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z")])];
const SEARCH: &[ShapeSpec] = &[
    ("circle", &[("cx", "11"), ("cy", "11"), ("r", "8")]),
    ("path", &[("d", "m21 21-4.3-4.3")]),
];
const CLOSE: &[ShapeSpec] = &[("path", &[("d", "M18 6 6 18M6 6l12 12")])];
const CHECK: &[ShapeSpec] = &[("path", &[("d", "M20 6 9 17l-5-5")])];
const CHEVRON_DOWN: &[ShapeSpec] = &[("path", &[("d", "m6 9 6 6 6-6")])];
const CHEVRON_UP: &[ShapeSpec] = &[("path", &[("d", "m18 15-6-6-6 6")])];
const CHEVRON_LEFT: &[ShapeSpec] = &[("path", &[("d", "m15 18-6-6 6-6")])];
const CHEVRON_RIGHT: &[ShapeSpec] = &[("path", &[("d", "m9 18 6-6-6-6")])];
const INFO: &[ShapeSpec] = &[
    ("circle", &[("cx", "12"), ("cy", "12"), ("r", "10")]),
    ("path", &[("d", "M12 16v-4M12 8h.01")]),
];
const WARNING: &[ShapeSpec] = &[
    (
        "path",
        &[(
            "d",
            "m21.73 18-8-14a2 2 0 0 0-3.48 0l-8 14A2 2 0 0 0 4 21h16a2 2 0 0 0 1.73-3Z",
        )],
    ),
    ("path", &[("d", "M12 9v4M12 17h.01")]),
];
const ERROR: &[ShapeSpec] = &[
    ("circle", &[("cx", "12"), ("cy", "12"), ("r", "10")]),
    ("path", &[("d", "M12 8v4M12 16h.01")]),
];
const PLUS: &[ShapeSpec] = &[("path", &[("d", "M5 12h14M12 5v14")])];
const MINUS: &[ShapeSpec] = &[("path", &[("d", "M5 12h14")])];
const HOME: &[ShapeSpec] = &[
    (
        "path",
        &[("d", "m3 9 9-7 9 7v11a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z")],
    ),
    ("polyline", &[("points", "9 22 9 12 15 12 15 22")]),
];
const MENU: &[ShapeSpec] = &[("path", &[("d", "M4 6h16M4 12h16M4 18h16")])];
const STAR: &[ShapeSpec] = &[(
    "polygon",
    &[(
        "points",
        "12 2 15.09 8.26 22 9.27 17 14.14 18.18 21.02 12 17.77 5.82 21.02 7 14.14 2 9.27 8.91 8.26 12 2",
    )],
)];
const USER: &[ShapeSpec] = &[
    ("path", &[("d", "M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2")]),
    ("circle", &[("cx", "12"), ("cy", "7"), ("r", "4")]),
];
const SPINNER: &[ShapeSpec] = &[("path", &[("d", "M21 12a9 9 0 1 1-6.219-8.56")])];

impl IconName {
    /// Every built-in icon, in declaration order.
    pub const ALL: [IconName; 19] = [
        Self::Sun,
        Self::Moon,
        Self::Search,
        Self::Close,
        Self::Check,
        Self::ChevronDown,
        Self::ChevronUp,
        Self::ChevronLeft,
        Self::ChevronRight,
        Self::Info,
        Self::Warning,
        Self::Error,
        Self::Plus,
        Self::Minus,
        Self::Home,
        Self::Menu,
        Self::Star,
        Self::User,
        Self::Spinner,
    ];

    /// Returns the registry key for this icon.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sun => "sun",
            Self::Moon => "moon",
            Self::Search => "search",
            Self::Close => "close",
            Self::Check => "check",
            Self::ChevronDown => "chevron-down",
            Self::ChevronUp => "chevron-up",
            Self::ChevronLeft => "chevron-left",
            Self::ChevronRight => "chevron-right",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Plus => "plus",
            Self::Minus => "minus",
            Self::Home => "home",
            Self::Menu => "menu",
            Self::Star => "star",
            Self::User => "user",
            Self::Spinner => "spinner",
        }
    }

    /// Looks up a built-in icon by registry key.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|name| name.as_str() == key)
    }

    fn shape_specs(self) -> &'static [ShapeSpec] {
        match self {
            Self::Sun => SUN,
            Self::Moon => MOON,
            Self::Search => SEARCH,
            Self::Close => CLOSE,
            Self::Check => CHECK,
            Self::ChevronDown => CHEVRON_DOWN,
            Self::ChevronUp => CHEVRON_UP,
            Self::ChevronLeft => CHEVRON_LEFT,
            Self::ChevronRight => CHEVRON_RIGHT,
            Self::Info => INFO,
            Self::Warning => WARNING,
            Self::Error => ERROR,
            Self::Plus => PLUS,
            Self::Minus => MINUS,
            Self::Home => HOME,
            Self::Menu => MENU,
            Self::Star => STAR,
            Self::User => USER,
            Self::Spinner => SPINNER,
        }
    }

    /// Returns the shipped definition of this icon.
    ///
    /// Shapes are wrapped in one stroked group so the definition renders correctly without any
    /// styling on the `<svg>` root.
    pub fn builtin_definition(self) -> IconDefinition {
        let group = self.shape_specs().iter().fold(
            IconShape::new("g")
                .attr("fill", "none")
                .attr("stroke", "currentColor")
                .attr("stroke-width", "2")
                .attr("stroke-linecap", "round")
                .attr("stroke-linejoin", "round"),
            |group, (tag, attributes)| {
                let shape = attributes
                    .iter()
                    .fold(IconShape::new(*tag), |shape, (name, value)| {
                        shape.attr(*name, *value)
                    });
                group.child(shape)
            },
        );
        IconDefinition::new(vec![group])
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::icon::DEFAULT_VIEW_BOX;

    #[test]
    fn keys_are_unique_and_round_trip() {
        let keys = IconName::ALL
            .iter()
            .map(|name| name.as_str())
            .collect::<HashSet<_>>();
        assert_eq!(keys.len(), IconName::ALL.len());
        for name in IconName::ALL {
            assert_eq!(IconName::from_key(name.as_str()), Some(name));
        }
        assert_eq!(IconName::from_key("Sun"), None);
    }

    #[test]
    fn every_builtin_draws_something_in_the_default_frame() {
        for name in IconName::ALL {
            let definition = name.builtin_definition();
            assert_eq!(definition.view_box, DEFAULT_VIEW_BOX);
            assert_eq!(definition.shapes.len(), 1, "{name:?}");
            assert!(!definition.shapes[0].children.is_empty(), "{name:?}");
        }
    }

    #[test]
    fn builtin_group_carries_stroke_styling() {
        let group = &IconName::Check.builtin_definition().shapes[0];
        assert_eq!(group.tag, "g");
        assert_eq!(group.attribute("stroke"), Some("currentColor"));
        assert_eq!(group.children[0].attribute("d"), Some("M20 6 9 17l-5-5"));
    }
}
