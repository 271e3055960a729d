use super::AutocompleteOption;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Who owns the selected value, decided once when the input is created.
pub enum ValueSource {
    /// The caller owns the value; the input mirrors it whenever it changes.
    Controlled(String),
    /// The input owns its text.
    Uncontrolled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Input text, list visibility, and keyboard highlight of an autocomplete input.
///
/// Methods that can change the externally visible value return `Some(value)` when that value
/// must be emitted to the caller.
pub struct AutocompleteState {
    input_text: String,
    open: bool,
    highlighted: Option<usize>,
    allow_free_text: bool,
    source: ValueSource,
}

fn display_text(value: &str, options: &[AutocompleteOption]) -> String {
    options
        .iter()
        .find(|option| option.value == value)
        .map(|option| option.label.clone())
        .unwrap_or_else(|| value.to_string())
}

impl AutocompleteState {
    /// Creates closed state. A controlled input starts out showing its value's label.
    pub fn new(source: ValueSource, allow_free_text: bool, options: &[AutocompleteOption]) -> Self {
        let input_text = match &source {
            ValueSource::Controlled(value) => display_text(value, options),
            ValueSource::Uncontrolled => String::new(),
        };
        Self {
            input_text,
            open: false,
            highlighted: None,
            allow_free_text,
            source,
        }
    }

    /// Text currently shown in the input; also the filter query.
    pub fn input_text(&self) -> &str {
        &self.input_text
    }

    /// Whether the suggestion list is shown.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Index of the keyboard-highlighted option within the visible list.
    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    /// Whether the caller owns the value.
    pub fn is_controlled(&self) -> bool {
        matches!(self.source, ValueSource::Controlled(_))
    }

    /// Whether every keystroke is emitted as the value.
    pub fn allows_free_text(&self) -> bool {
        self.allow_free_text
    }

    /// Applies typed text. Free-text inputs emit the raw text.
    ///
    /// A controlled free-text input records the emitted text as its value, so the caller's echo
    /// of that value leaves the typed text alone.
    pub fn input(&mut self, text: impl Into<String>) -> Option<String> {
        self.input_text = text.into();
        self.open = true;
        self.highlighted = None;
        if !self.allow_free_text {
            return None;
        }
        if let ValueSource::Controlled(value) = &mut self.source {
            value.clone_from(&self.input_text);
        }
        Some(self.input_text.clone())
    }

    /// Chooses `option`. Disabled options leave the state untouched and emit nothing.
    pub fn select(&mut self, option: &AutocompleteOption) -> Option<String> {
        if option.disabled {
            return None;
        }
        self.input_text = option.label.clone();
        self.open = false;
        self.highlighted = None;
        if let ValueSource::Controlled(value) = &mut self.source {
            value.clone_from(&option.value);
        }
        Some(option.value.clone())
    }

    /// Empties the input and emits an empty value.
    pub fn clear(&mut self) -> Option<String> {
        self.input_text.clear();
        self.open = false;
        self.highlighted = None;
        if let ValueSource::Controlled(value) = &mut self.source {
            value.clear();
        }
        Some(String::new())
    }

    /// Mirrors a new external value into the input text.
    ///
    /// Uncontrolled inputs ignore external values. Returns whether the text was rewritten.
    pub fn sync_external(&mut self, value: &str, options: &[AutocompleteOption]) -> bool {
        let ValueSource::Controlled(current) = &mut self.source else {
            return false;
        };
        if current == value {
            return false;
        }
        *current = value.to_string();
        self.input_text = display_text(value, options);
        self.highlighted = None;
        true
    }

    /// Shows the suggestion list.
    pub fn open(&mut self) {
        self.open = true;
    }

    /// Hides the suggestion list and drops the highlight.
    pub fn dismiss(&mut self) {
        self.open = false;
        self.highlighted = None;
    }

    /// Moves the highlight to the next enabled option, wrapping at the end.
    pub fn highlight_next(&mut self, visible: &[AutocompleteOption]) -> Option<usize> {
        let len = visible.len();
        let start = self.highlighted.map_or(0, |index| index + 1);
        self.move_highlight(visible, (0..len).map(|step| (start + step) % len))
    }

    /// Moves the highlight to the previous enabled option, wrapping at the start.
    pub fn highlight_previous(&mut self, visible: &[AutocompleteOption]) -> Option<usize> {
        let len = visible.len();
        let start = self
            .highlighted
            .filter(|index| *index < len)
            .unwrap_or(0);
        self.move_highlight(visible, (1..=len).map(|step| (start + len - step) % len))
    }

    fn move_highlight(
        &mut self,
        visible: &[AutocompleteOption],
        mut candidates: impl Iterator<Item = usize>,
    ) -> Option<usize> {
        self.open = true;
        self.highlighted = candidates.find(|index| !visible[*index].disabled);
        self.highlighted
    }

    /// Selects the highlighted option, if any.
    pub fn commit_highlighted(&mut self, visible: &[AutocompleteOption]) -> Option<String> {
        let option = self.highlighted.and_then(|index| visible.get(index))?.clone();
        self.select(&option)
    }
}
