//! The housing price model behind the Hedonic estimator.
//!
//! A [`HousingModel`] pairs a [`VariableConfig`] for each of the twelve
//! [`Variable`]s with a table of regression [`Coefficients`]. From it you can:
//!
//! - generate the discrete [`OptionSet`] a dropdown offers for a variable
//! - evaluate the [`LinearPredictor`] on a set of [`Selections`]
//! - render the resulting [`Prediction`] with [`format_price`]
//!
//! The built-in model is [`HousingModel::boston`]; other models can be read
//! from TOML with [`HousingModel::load`].

mod boston;
mod coefficients;
mod config;
mod currency;
mod housing;
mod options;
mod predictor;
mod selections;
mod variable;

pub use coefficients::{Coefficients, CoefficientsError};
pub use config::{ConfigError, VariableConfig};
pub use currency::{DOLLARS_PER_UNIT, format_price};
pub use housing::{HousingModel, ModelError};
pub use options::{Choice, OptionSet, round_to_decimals};
pub use predictor::{LinearPredictor, Prediction};
pub use selections::Selections;
pub use variable::{ParseVariableError, Variable};
