use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Largest supported display precision.
const MAX_DECIMALS: u8 = 15;

/// Discretization of one input variable.
///
/// Defines the range `[min, max]` a dropdown covers, the `step` between its
/// choices, the value selected by default, and how many fractional digits
/// each choice is rounded to.
///
/// Construct with [`VariableConfig::new`], which enforces:
///
/// - every number is finite
/// - `min <= max`
/// - `step > 0`
/// - `min <= default <= max`
/// - `decimals <= 15`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawVariableConfig", into = "RawVariableConfig")]
pub struct VariableConfig {
    min: f64,
    max: f64,
    step: f64,
    default: f64,
    decimals: u8,
}

/// Errors that can occur when validating a [`VariableConfig`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("{field} must be finite, got {value}")]
    NonFinite { field: &'static str, value: f64 },

    #[error("min ({min}) must not exceed max ({max})")]
    InvertedRange { min: f64, max: f64 },

    #[error("step must be positive, got {step}")]
    NonPositiveStep { step: f64 },

    #[error("default ({default}) lies outside [{min}, {max}]")]
    DefaultOutOfRange { default: f64, min: f64, max: f64 },

    #[error("decimals must be at most {max}, got {decimals}", max = MAX_DECIMALS)]
    TooManyDecimals { decimals: u8 },
}

impl VariableConfig {
    /// Creates a validated variable config.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] describing the first violated constraint.
    pub fn new(
        min: f64,
        max: f64,
        step: f64,
        default: f64,
        decimals: u8,
    ) -> Result<Self, ConfigError> {
        let fields = [("min", min), ("max", max), ("step", step), ("default", default)];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field, value });
            }
        }
        if min > max {
            return Err(ConfigError::InvertedRange { min, max });
        }
        if step <= 0.0 {
            return Err(ConfigError::NonPositiveStep { step });
        }
        if default < min || default > max {
            return Err(ConfigError::DefaultOutOfRange { default, min, max });
        }
        if decimals > MAX_DECIMALS {
            return Err(ConfigError::TooManyDecimals { decimals });
        }

        Ok(Self {
            min,
            max,
            step,
            default,
            decimals,
        })
    }

    /// Creates a config from values already known to be valid.
    pub(crate) const fn from_parts(
        min: f64,
        max: f64,
        step: f64,
        default: f64,
        decimals: u8,
    ) -> Self {
        Self {
            min,
            max,
            step,
            default,
            decimals,
        }
    }

    /// Returns the lower end of the range.
    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Returns the upper end of the range.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Returns the increment between consecutive choices.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Returns the value selected when the form is first shown.
    #[must_use]
    pub fn default_value(&self) -> f64 {
        self.default
    }

    /// Returns the number of fractional digits each choice is rounded to.
    #[must_use]
    pub fn decimals(&self) -> u8 {
        self.decimals
    }
}

/// Unvalidated shape of a [`VariableConfig`] as it appears in model files.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct RawVariableConfig {
    min: f64,
    max: f64,
    step: f64,
    default: f64,
    decimals: u8,
}

impl TryFrom<RawVariableConfig> for VariableConfig {
    type Error = ConfigError;

    fn try_from(raw: RawVariableConfig) -> Result<Self, Self::Error> {
        Self::new(raw.min, raw.max, raw.step, raw.default, raw.decimals)
    }
}

impl From<VariableConfig> for RawVariableConfig {
    fn from(config: VariableConfig) -> Self {
        Self {
            min: config.min,
            max: config.max,
            step: config.step,
            default: config.default,
            decimals: config.decimals,
        }
    }
}
