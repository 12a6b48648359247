use std::{convert::Infallible, fmt};

use hedonic_core::Model;

use crate::{Coefficients, Selections, format_price};

/// A predicted median home price, in thousands of dollars.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Prediction(f64);

impl Prediction {
    /// Wraps a raw model output expressed in thousands of dollars.
    #[must_use]
    pub fn from_thousands(thousands: f64) -> Self {
        Self(thousands)
    }

    /// Returns the raw model output, in thousands of dollars.
    #[must_use]
    pub fn thousands(self) -> f64 {
        self.0
    }

    /// Returns the price in dollars.
    #[must_use]
    pub fn dollars(self) -> f64 {
        self.0 * crate::DOLLARS_PER_UNIT
    }
}

/// Displays as whole-dollar currency, e.g. `$24,500` for `24.5`.
impl fmt::Display for Prediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_price(self.0))
    }
}

/// Evaluates the linear price model.
///
/// The prediction is the intercept plus the weighted sum of every selected
/// value, accumulated in model order. Values are not range-checked and
/// variables without a selection contribute nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearPredictor {
    coefficients: Coefficients,
}

impl LinearPredictor {
    #[must_use]
    pub fn new(coefficients: Coefficients) -> Self {
        Self { coefficients }
    }

    #[must_use]
    pub fn coefficients(&self) -> &Coefficients {
        &self.coefficients
    }

    /// Predicts the price for the given selections.
    #[must_use]
    pub fn predict(&self, selections: &Selections) -> Prediction {
        let thousands = selections
            .iter()
            .fold(self.coefficients.intercept(), |sum, (variable, value)| {
                sum + self.coefficients.weight(variable) * value
            });
        Prediction(thousands)
    }
}

impl Model for LinearPredictor {
    type Input = Selections;
    type Output = Prediction;
    type Error = Infallible;

    fn call(&self, input: &Selections) -> Result<Prediction, Infallible> {
        Ok(self.predict(input))
    }
}
