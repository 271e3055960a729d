//! Leptos component kit with light/dark theming, an icon registry, and autocomplete.
//!
//! The three stateful pieces are plain Rust first and components second:
//! - [`theme`] decides and persists the light/dark mode and reflects it on the document through
//!   the host's [`platform_host::ThemeSurface`].
//! - [`icon`] maps names to SVG definitions. Built-ins are a closed [`IconName`] enum; custom
//!   icons are registered at runtime from definitions, SVG markup, or fetched SVG files.
//! - [`autocomplete`] filters options for a query and tracks selection state.
//!
//! The remaining [`primitives`] are presentational and share the `data-ui-*` DOM contract that
//! stylesheets select on.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod autocomplete;
pub mod icon;
pub mod primitives;
pub mod theme;

pub use autocomplete::{
    default_match, filter_options, Autocomplete, AutocompleteOption, AutocompleteState,
    MatchPredicate, ValueSource, DEFAULT_OPTION_LIMIT,
};
pub use icon::{
    Icon, IconDefinition, IconError, IconName, IconRef, IconRegistry, IconShape, IconSize,
    SharedIconRegistry,
};
pub use primitives::{
    Alert, Badge, Button, ButtonSize, ButtonVariant, CompletionItem, CompletionList, FieldVariant,
    IconButton, ProgressBar, Switch, Tab, TabList, TextField, Tone,
};
pub use theme::{
    create_theme_context, initialize_theme, Theme, ThemeConfig, ThemeContext, ThemeController,
    ThemePreference, ThemeSwitcher,
};

/// Convenience imports for crates composing the kit.
pub mod prelude {
    pub use crate::{
        create_theme_context, Alert, Autocomplete, AutocompleteOption, Badge, Button, ButtonSize,
        ButtonVariant, CompletionItem, CompletionList, FieldVariant, Icon, IconButton, IconName,
        IconRef, IconSize, ProgressBar, SharedIconRegistry, Switch, Tab, TabList, TextField,
        Theme, ThemeConfig, ThemeContext, ThemeSwitcher, Tone,
    };
}
