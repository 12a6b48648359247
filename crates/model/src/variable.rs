use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One of the twelve housing predictors used by the price model.
///
/// Variants are declared in model order, which is also the order in which
/// predictions are summed and dropdowns are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variable {
    Crim,
    Zn,
    Indus,
    Nox,
    Rm,
    Age,
    Dis,
    Rad,
    Tax,
    Ptratio,
    Black,
    Lstat,
}

/// Returned when a string does not name a known [`Variable`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown variable: {0:?}")]
pub struct ParseVariableError(pub String);

impl Variable {
    /// All variables, in model order.
    pub const ALL: [Variable; 12] = [
        Self::Crim,
        Self::Zn,
        Self::Indus,
        Self::Nox,
        Self::Rm,
        Self::Age,
        Self::Dis,
        Self::Rad,
        Self::Tax,
        Self::Ptratio,
        Self::Black,
        Self::Lstat,
    ];

    /// The lowercase key naming this variable in model files and layouts.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Crim => "crim",
            Self::Zn => "zn",
            Self::Indus => "indus",
            Self::Nox => "nox",
            Self::Rm => "rm",
            Self::Age => "age",
            Self::Dis => "dis",
            Self::Rad => "rad",
            Self::Tax => "tax",
            Self::Ptratio => "ptratio",
            Self::Black => "black",
            Self::Lstat => "lstat",
        }
    }

    /// A human-readable description of what the variable measures.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::Crim => "Per capita crime rate by town",
            Self::Zn => "Proportion of residential land zoned for lots over 25,000 sq.ft.",
            Self::Indus => "Proportion of non-retail business acres per town",
            Self::Nox => "Nitric oxides concentration (parts per 10 million)",
            Self::Rm => "Average number of rooms per dwelling",
            Self::Age => "Proportion of owner-occupied units built prior to 1940",
            Self::Dis => "Weighted distances to five Boston employment centres",
            Self::Rad => "Index of accessibility to radial highways",
            Self::Tax => "Full-value property-tax rate per $10,000",
            Self::Ptratio => "Pupil-teacher ratio by town",
            Self::Black => "1000(Bk - 0.63)^2 where Bk is the proportion of blacks by town",
            Self::Lstat => "Lower status of the population (percent)",
        }
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Variable {
    type Err = ParseVariableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|variable| variable.key() == s)
            .ok_or_else(|| ParseVariableError(s.to_owned()))
    }
}
