//! Interactive housing price estimator.
//!
//! # Usage
//!
//! ```text
//! cargo run -p hedonic-form --example estimator --features gui
//! cargo run -p hedonic-form --example estimator --features gui -- path/to/model.toml
//! ```
//!
//! Without an argument the built-in Boston model is used. Set `RUST_LOG=debug`
//! to trace form updates.

use std::error::Error;

use hedonic_form::{Controller, Layout, gui};
use hedonic_model::HousingModel;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let model = match std::env::args().nth(1) {
        Some(path) => HousingModel::load(path)?,
        None => HousingModel::boston(),
    };

    let controller = Controller::new(model, Layout::full());
    gui::run(controller, "Housing Price Estimator")?;
    Ok(())
}
