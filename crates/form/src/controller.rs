use std::{
    collections::BTreeMap,
    time::{Duration, Instant},
};

use hedonic_core::{Model, Snapshot};
use hedonic_model::{
    HousingModel, LinearPredictor, Prediction, Selections, Variable, format_price,
};
use log::debug;

use crate::{Dropdown, ElementId, Layout, Pulse};

/// Drives the estimator form.
///
/// The controller reacts to the two user actions the form supports:
///
/// - [`toggle`][Controller::toggle] shows or hides the panel. The first time
///   the panel is revealed every dropdown is populated with its choices and
///   default selection. Each reveal recomputes the price.
/// - [`change`][Controller::change] selects a choice in one dropdown and
///   recomputes the price.
///
/// Every recomputation refreshes the price text and restarts the [`Pulse`].
/// Elements missing from the [`Layout`] are skipped: without a display there
/// is no price text, and without both the toggle button and the panel the
/// toggle does nothing.
///
/// Actions take the current instant so the pulse can be driven by any clock.
#[derive(Debug, Clone)]
pub struct Controller {
    model: HousingModel,
    predictor: LinearPredictor,
    layout: Layout,
    dropdowns: BTreeMap<Variable, Dropdown>,
    panel_visible: bool,
    toggle_rotated: bool,
    populated: bool,
    price_text: Option<String>,
    latest: Option<Snapshot<Selections, Prediction>>,
    pulse: Pulse,
}

impl Controller {
    /// Creates a controller with the panel hidden and every dropdown empty.
    #[must_use]
    pub fn new(model: HousingModel, layout: Layout) -> Self {
        let dropdowns = Variable::ALL
            .into_iter()
            .filter(|&variable| layout.contains(ElementId::Dropdown(variable)))
            .map(|variable| (variable, Dropdown::default()))
            .collect();

        Self {
            predictor: model.predictor(),
            model,
            layout,
            dropdowns,
            panel_visible: false,
            toggle_rotated: false,
            populated: false,
            price_text: None,
            latest: None,
            pulse: Pulse::default(),
        }
    }

    /// Shows the panel if hidden, hides it if shown.
    ///
    /// Does nothing unless the layout has both the toggle button and the panel.
    pub fn toggle(&mut self, now: Instant) {
        if !self.layout.contains(ElementId::Panel) || !self.layout.contains(ElementId::ToggleButton)
        {
            debug!("toggle ignored: panel or toggle button not present");
            return;
        }

        self.panel_visible = !self.panel_visible;
        self.toggle_rotated = !self.toggle_rotated;
        debug!("panel {}", if self.panel_visible { "shown" } else { "hidden" });

        if self.panel_visible {
            if !self.populated {
                self.populate();
            }
            self.refresh(now);
        }
    }

    /// Selects the choice at `index` for `variable` and recomputes the price.
    ///
    /// An out-of-range `index` leaves the selection as it was, but the price
    /// is still recomputed. Does nothing if the variable has no dropdown.
    pub fn change(&mut self, variable: Variable, index: usize, now: Instant) {
        let Some(dropdown) = self.dropdowns.get_mut(&variable) else {
            return;
        };
        if !dropdown.select(index) {
            debug!("{variable} has no choice at index {index}");
        }
        self.refresh(now);
    }

    /// Selects the choice for `variable` whose value equals `value` and
    /// recomputes the price.
    ///
    /// Behaves like [`change`][Controller::change] when no choice matches.
    pub fn change_value(&mut self, variable: Variable, value: f64, now: Instant) {
        let Some(dropdown) = self.dropdowns.get_mut(&variable) else {
            return;
        };
        if !dropdown.select_value(value) {
            debug!("{variable} has no choice with value {value}");
        }
        self.refresh(now);
    }

    /// Returns the values currently selected across all dropdowns.
    #[must_use]
    pub fn selections(&self) -> Selections {
        self.dropdowns
            .iter()
            .filter_map(|(&variable, dropdown)| dropdown.value().map(|value| (variable, value)))
            .collect()
    }

    /// Returns `true` while the panel is shown.
    #[must_use]
    pub fn is_panel_visible(&self) -> bool {
        self.panel_visible
    }

    /// Returns `true` while the toggle button is in its rotated state.
    #[must_use]
    pub fn is_toggle_rotated(&self) -> bool {
        self.toggle_rotated
    }

    /// Returns `true` once the dropdowns have been populated.
    #[must_use]
    pub fn is_populated(&self) -> bool {
        self.populated
    }

    /// Returns the dropdown for `variable`, if the layout provides one.
    #[must_use]
    pub fn dropdown(&self, variable: Variable) -> Option<&Dropdown> {
        self.dropdowns.get(&variable)
    }

    /// Returns the formatted price, once one has been displayed.
    #[must_use]
    pub fn price_text(&self) -> Option<&str> {
        self.price_text.as_deref()
    }

    /// Returns the selections and prediction from the latest recomputation.
    #[must_use]
    pub fn latest(&self) -> Option<&Snapshot<Selections, Prediction>> {
        self.latest.as_ref()
    }

    /// Returns `true` while the price display is highlighted at `now`.
    #[must_use]
    pub fn is_pulsing(&self, now: Instant) -> bool {
        self.pulse.is_active(now)
    }

    /// Returns how long the price display stays highlighted after `now`.
    #[must_use]
    pub fn pulse_remaining(&self, now: Instant) -> Option<Duration> {
        self.pulse.remaining(now)
    }

    /// Returns the model behind the form.
    #[must_use]
    pub fn model(&self) -> &HousingModel {
        &self.model
    }

    /// Returns the layout the controller was built with.
    #[must_use]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    fn populate(&mut self) {
        for (&variable, dropdown) in &mut self.dropdowns {
            dropdown.populate(self.model.option_set(variable));
        }
        self.populated = true;
        debug!("populated {} dropdowns", self.dropdowns.len());
    }

    fn refresh(&mut self, now: Instant) {
        let Ok(snapshot) = self.predictor.snapshot(self.selections());
        let thousands = snapshot.output.thousands();
        self.latest = Some(snapshot);

        if self.layout.contains(ElementId::PriceDisplay) {
            let text = format_price(thousands);
            debug!("price updated to {text}");
            self.price_text = Some(text);
            self.pulse.trigger(now);
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use crate::PULSE_DURATION;

    use super::*;

    fn controller(layout: Layout) -> Controller {
        Controller::new(HousingModel::boston(), layout)
    }

    #[test]
    fn starts_hidden_and_unpopulated() {
        let form = controller(Layout::full());

        assert!(!form.is_panel_visible());
        assert!(!form.is_toggle_rotated());
        assert!(!form.is_populated());
        assert!(form.selections().is_empty());
        assert_eq!(form.price_text(), None);
        assert!(form.latest().is_none());
    }

    #[test]
    fn first_reveal_populates_and_prices_the_defaults() {
        let now = Instant::now();
        let mut form = controller(Layout::full());
        form.toggle(now);

        assert!(form.is_panel_visible());
        assert!(form.is_toggle_rotated());
        assert!(form.is_populated());
        assert_eq!(form.selections(), HousingModel::boston().default_selections());
        assert_eq!(form.price_text(), Some("$23,179"));
        assert!(form.is_pulsing(now));

        let dropdown = form.dropdown(Variable::Crim).unwrap();
        assert_eq!(dropdown.options().len(), 890);
        assert_eq!(dropdown.value(), Some(0.21));
    }

    #[test]
    fn change_recomputes_and_pulses() {
        let start = Instant::now();
        let mut form = controller(Layout::full());
        form.toggle(start);
        let before = form.latest().unwrap().output.thousands();

        let later = start + Duration::from_secs(1);
        assert!(!form.is_pulsing(later));

        let rm = form.dropdown(Variable::Rm).unwrap().selected().unwrap();
        form.change(Variable::Rm, rm + 10, later);

        let after = form.latest().unwrap().output.thousands();
        assert_relative_eq!(after - before, 3.850_492, epsilon = 1e-9);
        assert_eq!(form.dropdown(Variable::Rm).unwrap().value(), Some(7.16));
        assert_eq!(form.price_text(), Some("$27,030"));
        assert!(form.is_pulsing(later));
        assert_eq!(form.pulse_remaining(later), Some(PULSE_DURATION));
    }

    #[test]
    fn out_of_range_change_keeps_the_selection() {
        let now = Instant::now();
        let mut form = controller(Layout::full());
        form.toggle(now);
        let before = form.selections();

        form.change(Variable::Zn, 1_000, now);
        assert_eq!(form.selections(), before);
        assert_eq!(form.price_text(), Some("$23,179"));
    }

    #[test]
    fn change_value_selects_matching_choice() {
        let now = Instant::now();
        let mut form = controller(Layout::full());
        form.toggle(now);

        form.change_value(Variable::Tax, 187.0, now);
        assert_eq!(form.selections().get(Variable::Tax), Some(187.0));

        form.change_value(Variable::Tax, 190.0, now);
        assert_eq!(form.selections().get(Variable::Tax), Some(187.0));
    }

    #[test]
    fn toggling_twice_restores_visibility_and_keeps_selections() {
        let now = Instant::now();
        let mut form = controller(Layout::full());
        form.toggle(now);
        form.change(Variable::Lstat, 0, now);
        let selections = form.selections();

        form.toggle(now);
        assert!(!form.is_panel_visible());
        assert!(!form.is_toggle_rotated());
        assert_eq!(form.selections(), selections);

        form.toggle(now);
        assert!(form.is_panel_visible());
        assert_eq!(form.selections(), selections);
    }

    #[test]
    fn hiding_leaves_the_price_untouched() {
        let start = Instant::now();
        let mut form = controller(Layout::full());
        form.toggle(start);

        let later = start + Duration::from_secs(1);
        form.toggle(later);
        assert_eq!(form.price_text(), Some("$23,179"));
        assert!(!form.is_pulsing(later));
    }

    #[test]
    fn toggle_needs_both_panel_and_button() {
        let now = Instant::now();
        for missing in [ElementId::Panel, ElementId::ToggleButton] {
            let mut form = controller(Layout::full().without(missing));
            form.toggle(now);

            assert!(!form.is_panel_visible(), "{missing}");
            assert!(!form.is_populated(), "{missing}");
            assert_eq!(form.price_text(), None, "{missing}");
        }
    }

    #[test]
    fn missing_display_still_tracks_the_prediction() {
        let now = Instant::now();
        let mut form = controller(Layout::full().without(ElementId::PriceDisplay));
        form.toggle(now);

        assert_eq!(form.price_text(), None);
        assert!(!form.is_pulsing(now));
        assert_relative_eq!(
            form.latest().unwrap().output.thousands(),
            23.179_385_885,
            epsilon = 1e-9
        );
    }

    #[test]
    fn missing_dropdown_contributes_nothing() {
        let now = Instant::now();
        let mut form = controller(Layout::full().without(ElementId::Dropdown(Variable::Nox)));
        form.toggle(now);

        assert!(form.dropdown(Variable::Nox).is_none());
        assert_eq!(form.selections().get(Variable::Nox), None);

        form.change(Variable::Nox, 0, now);
        let with_nox = 23.179_385_885;
        let nox_term = -17.366_999 * 0.535;
        assert_relative_eq!(
            form.latest().unwrap().output.thousands(),
            with_nox - nox_term,
            epsilon = 1e-9
        );
    }
}
