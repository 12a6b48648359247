use hedonic_model::{Choice, OptionSet};

/// The state of one variable's dropdown: its choices and which is selected.
///
/// A dropdown starts empty. Once populated it always has a selection unless
/// its option set is empty: the default choice when there is one, otherwise
/// the first choice.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dropdown {
    options: OptionSet,
    selected: Option<usize>,
}

impl Dropdown {
    /// Replaces the choices and selects the default.
    pub fn populate(&mut self, options: OptionSet) {
        self.selected = match options.default_index() {
            Some(index) => Some(index),
            None if options.is_empty() => None,
            None => Some(0),
        };
        self.options = options;
    }

    /// Selects the choice at `index`.
    ///
    /// Returns `false`, leaving the selection untouched, if there is no such
    /// choice.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.options.len() {
            return false;
        }
        self.selected = Some(index);
        true
    }

    /// Selects the first choice whose value equals `value`.
    ///
    /// Returns `false`, leaving the selection untouched, if there is no such
    /// choice.
    pub fn select_value(&mut self, value: f64) -> bool {
        match self.options.position(value) {
            Some(index) => self.select(index),
            None => false,
        }
    }

    /// Returns the available choices.
    #[must_use]
    pub fn options(&self) -> &OptionSet {
        &self.options
    }

    /// Returns the index of the selected choice.
    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Returns the selected choice.
    #[must_use]
    pub fn selected_choice(&self) -> Option<&Choice> {
        self.selected.and_then(|index| self.options.get(index))
    }

    /// Returns the value of the selected choice.
    #[must_use]
    pub fn value(&self) -> Option<f64> {
        self.selected_choice().map(|choice| choice.value)
    }

    /// Returns `true` once the dropdown has choices to offer.
    #[must_use]
    pub fn is_populated(&self) -> bool {
        !self.options.is_empty()
    }
}
