use std::collections::BTreeMap;

use crate::Variable;

/// The value currently chosen for each variable.
///
/// Variables without a value are simply absent; the predictor skips them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selections {
    values: BTreeMap<Variable, f64>,
}

impl Selections {
    /// Creates an empty set of selections.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value for `variable`, returning the previous value if any.
    pub fn set(&mut self, variable: Variable, value: f64) -> Option<f64> {
        self.values.insert(variable, value)
    }

    /// Builder-style variant of [`Selections::set`].
    #[must_use]
    pub fn with(mut self, variable: Variable, value: f64) -> Self {
        self.set(variable, value);
        self
    }

    /// Clears the value for `variable`, returning it if present.
    pub fn remove(&mut self, variable: Variable) -> Option<f64> {
        self.values.remove(&variable)
    }

    /// Returns the value for `variable`, if one is selected.
    #[must_use]
    pub fn get(&self, variable: Variable) -> Option<f64> {
        self.values.get(&variable).copied()
    }

    /// Returns the number of variables with a value.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if no variable has a value.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns an iterator over `(variable, value)` pairs in model order.
    pub fn iter(&self) -> impl Iterator<Item = (Variable, f64)> + '_ {
        self.values.iter().map(|(&variable, &value)| (variable, value))
    }
}

impl FromIterator<(Variable, f64)> for Selections {
    fn from_iter<I: IntoIterator<Item = (Variable, f64)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl Extend<(Variable, f64)> for Selections {
    fn extend<I: IntoIterator<Item = (Variable, f64)>>(&mut self, iter: I) {
        self.values.extend(iter);
    }
}
