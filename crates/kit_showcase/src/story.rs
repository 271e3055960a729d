//! Showcase story sections and the persisted active-story preference.

use leptos::logging;
use platform_host::{load_pref_with, save_pref_with, PrefsStore};
use serde::{Deserialize, Serialize};

/// Preference key holding the active story.
pub const STORY_PREFS_KEY: &str = "kit_showcase.story";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// One showcase section.
pub enum Story {
    /// Buttons, icon buttons, and switches.
    #[default]
    Controls,
    /// Badges, alerts, and progress.
    Feedback,
    /// The icon registry gallery.
    Icons,
    /// Autocomplete inputs in each value mode.
    Autocomplete,
    /// Theme switching.
    Theme,
}

impl Story {
    /// Every story in tab order.
    pub const ALL: [Story; 5] = [
        Self::Controls,
        Self::Feedback,
        Self::Icons,
        Self::Autocomplete,
        Self::Theme,
    ];

    /// Stable DOM id fragment.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Controls => "controls",
            Self::Feedback => "feedback",
            Self::Icons => "icons",
            Self::Autocomplete => "autocomplete",
            Self::Theme => "theme",
        }
    }

    /// Tab label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Controls => "Controls",
            Self::Feedback => "Feedback",
            Self::Icons => "Icons",
            Self::Autocomplete => "Autocomplete",
            Self::Theme => "Theme",
        }
    }

    /// DOM id of this story's tab.
    pub fn tab_id(self) -> String {
        format!("tab-{}", self.key())
    }

    /// DOM id of this story's panel.
    pub fn panel_id(self) -> String {
        format!("panel-{}", self.key())
    }

    /// Story a tab-list key press moves to, or `None` for keys the tab list ignores.
    pub fn after_key(self, key: &str) -> Option<Self> {
        match key {
            "ArrowRight" => Some(self.next()),
            "ArrowLeft" => Some(self.previous()),
            "Home" => Some(Self::ALL[0]),
            "End" => Some(Self::ALL[Self::ALL.len() - 1]),
            _ => None,
        }
    }

    /// Story after this one, wrapping.
    pub fn next(self) -> Self {
        let index = Self::ALL.iter().position(|story| *story == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    /// Story before this one, wrapping.
    pub fn previous(self) -> Self {
        let index = Self::ALL.iter().position(|story| *story == self).unwrap_or(0);
        Self::ALL[(index + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Loads the persisted story, falling back to the default on absence or corruption.
pub fn load_story(prefs: &dyn PrefsStore) -> Story {
    match load_pref_with::<_, Story>(prefs, STORY_PREFS_KEY) {
        Ok(story) => story.unwrap_or_default(),
        Err(err) => {
            logging::warn!("ignoring stored showcase story: {err}");
            Story::default()
        }
    }
}

/// Persists `story`, logging failures.
pub fn save_story(prefs: &dyn PrefsStore, story: Story) {
    if let Err(err) = save_pref_with(prefs, STORY_PREFS_KEY, &story) {
        logging::warn!("failed to persist showcase story: {err}");
    }
}

#[cfg(test)]
mod tests {
    use platform_host::MemoryPrefsStore;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn story_round_trips_through_prefs() {
        let prefs = MemoryPrefsStore::default();
        assert_eq!(load_story(&prefs), Story::Controls);

        save_story(&prefs, Story::Icons);
        assert_eq!(prefs.raw(STORY_PREFS_KEY), Some("\"icons\"".to_string()));
        assert_eq!(load_story(&prefs), Story::Icons);
    }

    #[test]
    fn corrupted_story_falls_back_to_default() {
        let prefs = MemoryPrefsStore::with_entries([(STORY_PREFS_KEY, "{not json")]);
        assert_eq!(load_story(&prefs), Story::Controls);

        let prefs = MemoryPrefsStore::with_entries([(STORY_PREFS_KEY, "\"gallery\"")]);
        assert_eq!(load_story(&prefs), Story::Controls);
    }

    #[test]
    fn keyboard_navigation_wraps() {
        assert_eq!(Story::Controls.previous(), Story::Theme);
        assert_eq!(Story::Theme.next(), Story::Controls);
        assert_eq!(Story::Feedback.next(), Story::Icons);
    }

    #[test]
    fn tab_keys_pick_the_story_to_focus() {
        assert_eq!(Story::Icons.after_key("ArrowRight"), Some(Story::Autocomplete));
        assert_eq!(Story::Controls.after_key("ArrowLeft"), Some(Story::Theme));
        assert_eq!(Story::Autocomplete.after_key("Home"), Some(Story::Controls));
        assert_eq!(Story::Feedback.after_key("End"), Some(Story::Theme));
        assert_eq!(Story::Icons.after_key("Tab"), None);
        assert_eq!(Story::Icons.after_key("Enter"), None);
    }

    #[test]
    fn tab_and_panel_ids_pair_up() {
        assert_eq!(Story::Autocomplete.tab_id(), "tab-autocomplete");
        assert_eq!(Story::Autocomplete.panel_id(), "panel-autocomplete");
        let tab_ids = Story::ALL.map(Story::tab_id);
        for (index, id) in tab_ids.iter().enumerate() {
            assert!(!tab_ids[..index].contains(id), "duplicate tab id {id}");
        }
    }
}
