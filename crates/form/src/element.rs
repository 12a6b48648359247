use std::{collections::BTreeSet, fmt, str::FromStr};

use hedonic_model::Variable;
use log::debug;
use thiserror::Error;

/// Identifies one element of the estimator form.
///
/// Each element has a fixed name: a variable's key for its dropdown,
/// `predicted-price` for the price display, `toggle-form` for the toggle
/// button, and `main-content` for the panel holding the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ElementId {
    Dropdown(Variable),
    PriceDisplay,
    ToggleButton,
    Panel,
}

/// Returned when a string does not name a known [`ElementId`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown element: {0:?}")]
pub struct ParseElementError(pub String);

impl ElementId {
    /// Returns the fixed name of this element.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Dropdown(variable) => variable.key(),
            Self::PriceDisplay => "predicted-price",
            Self::ToggleButton => "toggle-form",
            Self::Panel => "main-content",
        }
    }

    /// Returns every element, dropdowns first in model order.
    pub fn all() -> impl Iterator<Item = ElementId> {
        Variable::ALL
            .into_iter()
            .map(Self::Dropdown)
            .chain([Self::PriceDisplay, Self::ToggleButton, Self::Panel])
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ElementId {
    type Err = ParseElementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .find(|element| element.name() == s)
            .ok_or_else(|| ParseElementError(s.to_owned()))
    }
}

/// The set of elements a view actually provides.
///
/// The controller consults the layout before touching any element and
/// quietly skips the ones that are absent. [`Layout::full`] (the default)
/// provides everything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    present: BTreeSet<ElementId>,
}

impl Layout {
    /// A layout providing every element.
    #[must_use]
    pub fn full() -> Self {
        ElementId::all().collect()
    }

    /// A layout providing no elements.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            present: BTreeSet::new(),
        }
    }

    /// Builds a layout from element names, ignoring names it does not know.
    pub fn from_names<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        names
            .into_iter()
            .filter_map(|name| match name.parse() {
                Ok(element) => Some(element),
                Err(error) => {
                    debug!("skipping layout entry: {error}");
                    None
                }
            })
            .collect()
    }

    /// Adds `element` to the layout.
    #[must_use]
    pub fn with(mut self, element: ElementId) -> Self {
        self.present.insert(element);
        self
    }

    /// Removes `element` from the layout.
    #[must_use]
    pub fn without(mut self, element: ElementId) -> Self {
        self.present.remove(&element);
        self
    }

    /// Returns `true` if the view provides `element`.
    #[must_use]
    pub fn contains(&self, element: ElementId) -> bool {
        self.present.contains(&element)
    }

    /// Returns an iterator over the provided elements.
    pub fn iter(&self) -> impl Iterator<Item = ElementId> + '_ {
        self.present.iter().copied()
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::full()
    }
}

impl FromIterator<ElementId> for Layout {
    fn from_iter<I: IntoIterator<Item = ElementId>>(iter: I) -> Self {
        Self {
            present: iter.into_iter().collect(),
        }
    }
}
