use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Variable;

/// Weights of the linear price model.
///
/// Holds the intercept and exactly one weight per [`Variable`]. In model
/// files the table is flat, with an `intercept` key beside one key per
/// variable:
///
/// ```toml
/// [coefficients]
/// intercept = 36.89196
/// crim = -0.113139
/// # ...
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCoefficients", into = "RawCoefficients")]
pub struct Coefficients {
    intercept: f64,
    weights: [f64; Variable::ALL.len()],
}

/// Errors that can occur when building a [`Coefficients`] table.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum CoefficientsError {
    #[error("missing coefficient for {0}")]
    Missing(Variable),

    #[error("coefficient for {name} must be finite, got {value}")]
    NonFinite { name: &'static str, value: f64 },
}

impl Coefficients {
    /// Creates a coefficient table from an intercept and one weight per variable.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable has no weight or any value is not finite.
    pub fn new(
        intercept: f64,
        weights: impl IntoIterator<Item = (Variable, f64)>,
    ) -> Result<Self, CoefficientsError> {
        if !intercept.is_finite() {
            return Err(CoefficientsError::NonFinite {
                name: "intercept",
                value: intercept,
            });
        }

        let given: BTreeMap<Variable, f64> = weights.into_iter().collect();
        let mut table = [0.0; Variable::ALL.len()];
        for (slot, variable) in table.iter_mut().zip(Variable::ALL) {
            let weight = *given
                .get(&variable)
                .ok_or(CoefficientsError::Missing(variable))?;
            if !weight.is_finite() {
                return Err(CoefficientsError::NonFinite {
                    name: variable.key(),
                    value: weight,
                });
            }
            *slot = weight;
        }

        Ok(Self {
            intercept,
            weights: table,
        })
    }

    /// Creates a table from weights already known to be valid, in model order.
    pub(crate) const fn from_parts(intercept: f64, weights: [f64; Variable::ALL.len()]) -> Self {
        Self { intercept, weights }
    }

    /// Returns the intercept.
    #[must_use]
    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Returns the weight applied to `variable`.
    #[must_use]
    pub fn weight(&self, variable: Variable) -> f64 {
        self.weights[variable as usize]
    }

    /// Returns an iterator over `(variable, weight)` pairs in model order.
    pub fn iter(&self) -> impl Iterator<Item = (Variable, f64)> + '_ {
        Variable::ALL.into_iter().zip(self.weights.iter().copied())
    }
}

/// Flat shape of a [`Coefficients`] table as it appears in model files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct RawCoefficients {
    intercept: f64,
    #[serde(flatten)]
    weights: BTreeMap<Variable, f64>,
}

impl TryFrom<RawCoefficients> for Coefficients {
    type Error = CoefficientsError;

    fn try_from(raw: RawCoefficients) -> Result<Self, Self::Error> {
        Self::new(raw.intercept, raw.weights)
    }
}

impl From<Coefficients> for RawCoefficients {
    fn from(coefficients: Coefficients) -> Self {
        Self {
            intercept: coefficients.intercept,
            weights: coefficients.iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_weights() -> impl Iterator<Item = (Variable, f64)> {
        Variable::ALL.into_iter().map(|variable| (variable, 1.0))
    }

    #[test]
    fn looks_up_weights_by_variable() {
        let weights = Variable::ALL
            .into_iter()
            .zip(1..)
            .map(|(variable, n)| (variable, f64::from(n)));
        let coefficients = Coefficients::new(10.0, weights).unwrap();

        assert_eq!(coefficients.intercept(), 10.0);
        assert_eq!(coefficients.weight(Variable::Crim), 1.0);
        assert_eq!(coefficients.weight(Variable::Tax), 9.0);
        assert_eq!(coefficients.weight(Variable::Lstat), 12.0);
    }

    #[test]
    fn iterates_in_model_order() {
        let coefficients = Coefficients::new(0.0, unit_weights()).unwrap();
        let order: Vec<Variable> = coefficients.iter().map(|(variable, _)| variable).collect();
        assert_eq!(order, Variable::ALL);
    }

    #[test]
    fn rejects_missing_weight() {
        let weights = unit_weights().filter(|&(variable, _)| variable != Variable::Nox);
        assert_eq!(
            Coefficients::new(0.0, weights),
            Err(CoefficientsError::Missing(Variable::Nox))
        );
    }

    #[test]
    fn rejects_non_finite_values() {
        assert!(matches!(
            Coefficients::new(f64::NAN, unit_weights()),
            Err(CoefficientsError::NonFinite {
                name: "intercept",
                ..
            })
        ));

        let weights = unit_weights().map(|(variable, weight)| {
            let weight = if variable == Variable::Rm { f64::INFINITY } else { weight };
            (variable, weight)
        });
        assert!(matches!(
            Coefficients::new(0.0, weights),
            Err(CoefficientsError::NonFinite { name: "rm", .. })
        ));
    }
}
