use std::{
    collections::BTreeMap,
    fs, io,
    path::{Path, PathBuf},
};

use log::{info, warn};
use serde::Deserialize;
use thiserror::Error;

use crate::{
    Coefficients, CoefficientsError, ConfigError, LinearPredictor, OptionSet, Selections,
    Variable, VariableConfig, boston, coefficients::RawCoefficients, config::RawVariableConfig,
};

/// A complete housing price model: one [`VariableConfig`] per variable plus
/// the regression [`Coefficients`].
///
/// Models are immutable once built. Use [`HousingModel::boston`] for the
/// built-in model, or read one from TOML with [`HousingModel::load`] or
/// [`HousingModel::from_toml_str`]. The expected document has a flat
/// `[coefficients]` table and one `[variables.<key>]` table per variable:
///
/// ```toml
/// [coefficients]
/// intercept = 36.89196
/// crim = -0.113139
/// # ... one key per variable
///
/// [variables.crim]
/// min = 0.00632
/// max = 88.9762
/// step = 0.1
/// default = 0.25651
/// decimals = 2
/// # ... one table per variable
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawHousingModel")]
pub struct HousingModel {
    coefficients: Coefficients,
    variables: Vec<VariableConfig>,
}

/// Errors that can occur when building or loading a [`HousingModel`].
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("failed to read model file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse model")]
    Parse(#[from] toml::de::Error),

    #[error("model has no configuration for {0}")]
    MissingVariable(Variable),

    #[error("invalid configuration for {variable}")]
    Config {
        variable: Variable,
        #[source]
        source: ConfigError,
    },

    #[error("invalid coefficients")]
    Coefficients(#[from] CoefficientsError),
}

impl HousingModel {
    /// Returns the built-in model fitted to the Boston housing dataset.
    #[must_use]
    pub fn boston() -> Self {
        Self {
            coefficients: boston::COEFFICIENTS,
            variables: boston::VARIABLES.to_vec(),
        }
    }

    /// Creates a model from coefficients and one config per variable.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::MissingVariable`] if any variable lacks a config.
    pub fn new(
        coefficients: Coefficients,
        configs: impl IntoIterator<Item = (Variable, VariableConfig)>,
    ) -> Result<Self, ModelError> {
        let mut given: BTreeMap<Variable, VariableConfig> = configs.into_iter().collect();
        let variables = Variable::ALL
            .into_iter()
            .map(|variable| {
                given
                    .remove(&variable)
                    .ok_or(ModelError::MissingVariable(variable))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let model = Self {
            coefficients,
            variables,
        };
        model.warn_on_unaligned_defaults();
        Ok(model)
    }

    /// Parses a model from a TOML document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is malformed, names an unknown
    /// variable, or leaves out or misconfigures any variable or coefficient.
    pub fn from_toml_str(text: &str) -> Result<Self, ModelError> {
        let raw: RawHousingModel = toml::from_str(text)?;
        Self::try_from(raw)
    }

    /// Reads a model from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not hold a valid
    /// model (see [`HousingModel::from_toml_str`]).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ModelError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ModelError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let model = Self::from_toml_str(&text)?;
        info!("loaded housing model from {}", path.display());
        Ok(model)
    }

    /// Returns the regression coefficients.
    #[must_use]
    pub fn coefficients(&self) -> &Coefficients {
        &self.coefficients
    }

    /// Returns the configuration for `variable`.
    #[must_use]
    pub fn config(&self, variable: Variable) -> &VariableConfig {
        &self.variables[variable as usize]
    }

    /// Returns an iterator over `(variable, config)` pairs in model order.
    pub fn configs(&self) -> impl Iterator<Item = (Variable, &VariableConfig)> + '_ {
        Variable::ALL.into_iter().zip(&self.variables)
    }

    /// Generates the dropdown choices for `variable`.
    #[must_use]
    pub fn option_set(&self, variable: Variable) -> OptionSet {
        OptionSet::generate(self.config(variable))
    }

    /// Returns a predictor evaluating this model's coefficients.
    #[must_use]
    pub fn predictor(&self) -> LinearPredictor {
        LinearPredictor::new(self.coefficients.clone())
    }

    /// Returns the selections a freshly populated form starts with.
    ///
    /// Each variable takes its default choice, or its first choice when no
    /// choice lies within half a step of the configured default.
    #[must_use]
    pub fn default_selections(&self) -> Selections {
        Variable::ALL
            .into_iter()
            .filter_map(|variable| {
                let options = self.option_set(variable);
                let index = options.default_index().unwrap_or(0);
                options.get(index).map(|choice| (variable, choice.value))
            })
            .collect()
    }

    fn warn_on_unaligned_defaults(&self) {
        for (variable, config) in self.configs() {
            if OptionSet::generate(config).default_index().is_none() {
                warn!(
                    "default {} for {variable} is not within half a step of any choice",
                    config.default_value()
                );
            }
        }
    }
}

impl Default for HousingModel {
    fn default() -> Self {
        Self::boston()
    }
}

/// Unvalidated shape of a [`HousingModel`] as it appears in model files.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawHousingModel {
    coefficients: RawCoefficients,
    variables: BTreeMap<Variable, RawVariableConfig>,
}

impl TryFrom<RawHousingModel> for HousingModel {
    type Error = ModelError;

    fn try_from(raw: RawHousingModel) -> Result<Self, Self::Error> {
        let coefficients = Coefficients::try_from(raw.coefficients)?;
        let configs = raw
            .variables
            .into_iter()
            .map(|(variable, config)| {
                VariableConfig::try_from(config)
                    .map(|config| (variable, config))
                    .map_err(|source| ModelError::Config { variable, source })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(coefficients, configs)
    }
}
