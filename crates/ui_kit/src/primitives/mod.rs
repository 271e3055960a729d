//! Presentational primitives sharing the `data-ui-*` DOM contract.
//!
//! Every primitive marks its root with `data-ui-primitive="true"` and a `data-ui-kind` token, and
//! exposes variant, size, tone, and state as further `data-ui-*` attributes so stylesheets select
//! on tokens instead of ad hoc class names.

use leptos::ev::{FocusEvent, KeyboardEvent, MouseEvent};
use leptos::*;

use crate::icon::{Icon, IconName, IconRef, IconSize, SharedIconRegistry};

mod controls;
mod data_display;
mod navigation;

pub use controls::{
    Button, CompletionItem, CompletionList, IconButton, ProgressBar, Switch, TextField,
};
pub use data_display::{Alert, Badge};
pub use navigation::{Tab, TabList};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Shared button variants.
pub enum ButtonVariant {
    /// Standard action button.
    #[default]
    Standard,
    /// Primary emphasized action button.
    Primary,
    /// Quiet/toggle style button.
    Quiet,
    /// Danger/destructive button.
    Danger,
}

impl ButtonVariant {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Primary => "primary",
            Self::Quiet => "quiet",
            Self::Danger => "danger",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Shared button sizing tokens.
pub enum ButtonSize {
    /// Dense button.
    Sm,
    /// Default button.
    #[default]
    Md,
    /// Large button.
    Lg,
}

impl ButtonSize {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }

    pub(crate) fn icon_size(self) -> IconSize {
        match self {
            Self::Sm => IconSize::Sm,
            Self::Md => IconSize::Md,
            Self::Lg => IconSize::Lg,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Shared input-field variants.
pub enum FieldVariant {
    /// Standard input.
    #[default]
    Standard,
    /// Inset input, used inside composite controls.
    Inset,
}

impl FieldVariant {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Inset => "inset",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Semantic tone for badges and alerts.
pub enum Tone {
    /// No particular emphasis.
    #[default]
    Neutral,
    /// Informational.
    Info,
    /// Positive outcome.
    Success,
    /// Needs attention.
    Warning,
    /// Failure or destructive state.
    Danger,
}

impl Tone {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Neutral => "neutral",
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Danger => "danger",
        }
    }

    pub(crate) fn icon(self) -> IconName {
        match self {
            Self::Neutral | Self::Info => IconName::Info,
            Self::Success => IconName::Check,
            Self::Warning => IconName::Warning,
            Self::Danger => IconName::Error,
        }
    }

    /// Whether messages in this tone interrupt assistive technology (`role="alert"`).
    pub(crate) fn is_urgent(self) -> bool {
        matches!(self, Self::Warning | Self::Danger)
    }
}

pub(crate) fn merge_layout_class(base: &'static str, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("{base} {layout_class}"),
        _ => base.to_string(),
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn layout_classes_append_to_the_base_class() {
        assert_eq!(merge_layout_class("ui-button", None), "ui-button");
        assert_eq!(merge_layout_class("ui-button", Some("")), "ui-button");
        assert_eq!(
            merge_layout_class("ui-button", Some("toolbar-action")),
            "ui-button toolbar-action"
        );
    }

    #[test]
    fn tokens_are_stable() {
        assert_eq!(ButtonVariant::default().token(), "standard");
        assert_eq!(ButtonSize::Lg.token(), "lg");
        assert_eq!(FieldVariant::Inset.token(), "inset");
        assert_eq!(Tone::Warning.token(), "warning");
        assert_eq!(bool_token(true), "true");
        assert_eq!(bool_token(false), "false");
    }

    #[test]
    fn only_warning_and_danger_tones_are_urgent() {
        assert!(Tone::Danger.is_urgent());
        assert!(Tone::Warning.is_urgent());
        assert!(!Tone::Info.is_urgent());
        assert_eq!(Tone::Success.icon(), IconName::Check);
    }
}
