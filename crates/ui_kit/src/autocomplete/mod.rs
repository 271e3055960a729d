//! Client-side option filtering and selection state for the [`Autocomplete`] input.
//!
//! [`filter_options`] and [`AutocompleteState`] are plain data so they can be driven and tested
//! without a reactive runtime. The component only wires them to signals and DOM events.

use std::rc::Rc;

use serde::{Deserialize, Serialize};

mod state;
mod view;

pub use state::{AutocompleteState, ValueSource};
pub use view::Autocomplete;

/// Upper bound on visible suggestions when the caller does not pick one.
pub const DEFAULT_OPTION_LIMIT: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One selectable suggestion.
pub struct AutocompleteOption {
    /// Value emitted when the option is chosen.
    pub value: String,
    /// Text shown in the list and written into the input on selection.
    pub label: String,
    /// Disabled options are listed but cannot be chosen.
    #[serde(default)]
    pub disabled: bool,
}

impl AutocompleteOption {
    /// Creates an enabled option.
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            disabled: false,
        }
    }

    /// Marks the option as disabled.
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

/// Caller-supplied matcher deciding whether an option matches a query.
pub type MatchPredicate = Rc<dyn Fn(&AutocompleteOption, &str) -> bool>;

/// Case-insensitive substring match against the option label.
pub fn default_match(option: &AutocompleteOption, query: &str) -> bool {
    option.label.to_lowercase().contains(&query.to_lowercase())
}

/// Returns at most `limit` options matching `query`, in their original order.
///
/// An empty query matches every option without consulting `predicate`.
pub fn filter_options(
    options: &[AutocompleteOption],
    query: &str,
    predicate: &dyn Fn(&AutocompleteOption, &str) -> bool,
    limit: usize,
) -> Vec<AutocompleteOption> {
    options
        .iter()
        .filter(|option| query.is_empty() || predicate(option, query))
        .take(limit)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn fruit() -> Vec<AutocompleteOption> {
        vec![
            AutocompleteOption::new("apple", "Apple"),
            AutocompleteOption::new("grape", "Grape"),
            AutocompleteOption::new("banana", "Banana"),
        ]
    }

    fn labels(options: &[AutocompleteOption]) -> Vec<&str> {
        options.iter().map(|option| option.label.as_str()).collect()
    }

    #[test]
    fn substring_match_is_case_insensitive_and_order_preserving() {
        let options = fruit();
        let visible = filter_options(&options, "ap", &default_match, DEFAULT_OPTION_LIMIT);
        assert_eq!(labels(&visible), vec!["Apple", "Grape"]);

        let visible = filter_options(&options, "AN", &default_match, DEFAULT_OPTION_LIMIT);
        assert_eq!(labels(&visible), vec!["Banana"]);
    }

    #[test]
    fn empty_query_returns_everything_up_to_the_limit() {
        let options = fruit();
        assert_eq!(
            filter_options(&options, "", &default_match, DEFAULT_OPTION_LIMIT),
            options
        );
        assert_eq!(
            labels(&filter_options(&options, "", &default_match, 2)),
            vec!["Apple", "Grape"]
        );
        assert!(filter_options(&options, "", &default_match, 0).is_empty());
    }

    #[test]
    fn filtering_is_idempotent_and_leaves_the_source_alone() {
        let options = fruit();
        let once = filter_options(&options, "a", &default_match, 2);
        let twice = filter_options(&once, "a", &default_match, 2);
        assert_eq!(once, twice);
        assert_eq!(options, fruit());
    }

    #[test]
    fn no_match_yields_an_empty_list() {
        assert!(filter_options(&fruit(), "kiwi", &default_match, DEFAULT_OPTION_LIMIT).is_empty());
    }

    #[test]
    fn custom_predicates_replace_the_default() {
        let prefix: MatchPredicate = Rc::new(|option: &AutocompleteOption, query: &str| {
            option.value.starts_with(&query.to_lowercase())
        });
        let visible = filter_options(&fruit(), "B", prefix.as_ref(), DEFAULT_OPTION_LIMIT);
        assert_eq!(labels(&visible), vec!["Banana"]);
    }

    #[test]
    fn options_deserialize_with_disabled_defaulting_to_false() {
        let option: AutocompleteOption =
            serde_json::from_str(r#"{"value":"kiwi","label":"Kiwi"}"#).expect("deserialize");
        assert_eq!(option, AutocompleteOption::new("kiwi", "Kiwi"));
        assert!(AutocompleteOption::new("x", "X").disabled().disabled);
    }
}
