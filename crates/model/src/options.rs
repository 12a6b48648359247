use log::warn;

use crate::VariableConfig;

/// Digits examined past the display precision when detecting exact ties.
const TIE_DIGITS: usize = 30;

/// Slack, as a fraction of `step`, allowed when matching the default to a choice.
const DEFAULT_MATCH_SLACK: f64 = 1e-9;

/// A single selectable value in a dropdown.
#[derive(Debug, Clone, PartialEq)]
pub struct Choice {
    /// The value, already rounded to the variable's display precision.
    pub value: f64,

    /// The text shown for this choice.
    pub text: String,
}

/// The ordered choices a dropdown offers for one variable.
///
/// Generated from a [`VariableConfig`] with [`OptionSet::generate`]. Option
/// sets are cheap to rebuild and are never persisted.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OptionSet {
    choices: Vec<Choice>,
    default_index: Option<usize>,
}

impl OptionSet {
    /// Upper bound on the number of choices a single option set may hold.
    pub const MAX_CHOICES: usize = 100_000;

    /// Generates the choices covering `[min, max]` in `step` increments.
    ///
    /// The running value starts at `min` and accumulates `step` by repeated
    /// addition, stopping once it exceeds `max`. Accumulated rounding error
    /// means the final choice can land a step short of `max`. Each value is
    /// rounded with [`round_to_decimals`] before it becomes a choice.
    ///
    /// The default choice is the one closest to the configured default, as
    /// long as it lies within half a step. Ties go to the earlier choice.
    #[must_use]
    pub fn generate(config: &VariableConfig) -> Self {
        let decimals = config.decimals();
        let step = config.step();

        let mut choices = Vec::new();
        let mut value = config.min();
        while value <= config.max() {
            if choices.len() == Self::MAX_CHOICES {
                warn!(
                    "option set truncated at {} choices before reaching {}",
                    Self::MAX_CHOICES,
                    config.max()
                );
                break;
            }

            let rounded = round_to_decimals(value, decimals);
            choices.push(Choice {
                value: rounded,
                text: rounded.to_string(),
            });

            let next = value + step;
            if next == value {
                warn!("step {step} no longer advances past {value}; stopping early");
                break;
            }
            value = next;
        }

        let tolerance = step / 2.0 + step * DEFAULT_MATCH_SLACK;
        let default_index = closest_within(&choices, config.default_value(), tolerance);

        Self {
            choices,
            default_index,
        }
    }

    /// Returns all choices in order.
    #[must_use]
    pub fn choices(&self) -> &[Choice] {
        &self.choices
    }

    /// Returns the choice at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Choice> {
        self.choices.get(index)
    }

    /// Returns the index of the default choice, if one lies within half a step.
    #[must_use]
    pub fn default_index(&self) -> Option<usize> {
        self.default_index
    }

    /// Returns the default choice, if one lies within half a step.
    #[must_use]
    pub fn default_choice(&self) -> Option<&Choice> {
        self.default_index.and_then(|index| self.choices.get(index))
    }

    /// Returns the index of the first choice whose value equals `value`.
    #[must_use]
    pub fn position(&self, value: f64) -> Option<usize> {
        self.choices.iter().position(|choice| choice.value == value)
    }

    /// Returns the number of choices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.choices.len()
    }

    /// Returns `true` if there are no choices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.choices.is_empty()
    }

    /// Returns an iterator over the choices.
    pub fn iter(&self) -> std::slice::Iter<'_, Choice> {
        self.choices.iter()
    }
}

impl<'a> IntoIterator for &'a OptionSet {
    type Item = &'a Choice;
    type IntoIter = std::slice::Iter<'a, Choice>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Rounds `value` to `decimals` fractional digits with fixed-point semantics.
///
/// The exact binary value is rounded to the nearest multiple of
/// `10^-decimals`, with exact ties broken away from zero. So `0.125` rounds to
/// `0.13`, while `1.005` (stored as `1.00499…`) rounds to `1.0`. Negative zero
/// results are normalized to zero, and non-finite values pass through.
#[must_use]
pub fn round_to_decimals(value: f64, decimals: u8) -> f64 {
    if !value.is_finite() {
        return value;
    }

    let precision = usize::from(decimals);
    let expanded = format!("{value:.digits$}", digits = precision + TIE_DIGITS);
    let tail = &expanded[expanded.len() - TIE_DIGITS..];
    let is_tie = tail.starts_with('5') && tail.bytes().skip(1).all(|digit| digit == b'0');

    // Formatting breaks exact ties toward even, so push ties off the midpoint first.
    let fixed = if is_tie {
        let nudge = 10_f64.powi(-i32::from(decimals) - 1).copysign(value);
        format!("{:.precision$}", value + nudge)
    } else {
        format!("{value:.precision$}")
    };

    let rounded = fixed.parse::<f64>().unwrap_or(value);
    if rounded == 0.0 { 0.0 } else { rounded }
}

/// Finds the choice closest to `target` within `tolerance`, preferring earlier ties.
fn closest_within(choices: &[Choice], target: f64, tolerance: f64) -> Option<usize> {
    choices
        .iter()
        .enumerate()
        .map(|(index, choice)| (index, (choice.value - target).abs()))
        .filter(|&(_, distance)| distance <= tolerance)
        .fold(None, |best: Option<(usize, f64)>, (index, distance)| match best {
            Some((_, best_distance)) if best_distance <= distance => best,
            _ => Some((index, distance)),
        })
        .map(|(index, _)| index)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn config(min: f64, max: f64, step: f64, default: f64, decimals: u8) -> VariableConfig {
        VariableConfig::new(min, max, step, default, decimals).unwrap()
    }

    fn values(options: &OptionSet) -> Vec<f64> {
        options.iter().map(|choice| choice.value).collect()
    }

    #[test]
    fn rounds_to_nearest_at_display_precision() {
        assert_eq!(round_to_decimals(0.006_32, 2), 0.01);
        assert_eq!(round_to_decimals(3.561, 2), 3.56);
        assert_eq!(round_to_decimals(77.9, 1), 77.9);
        assert_eq!(round_to_decimals(186.6, 0), 187.0);
    }

    #[test]
    fn breaks_exact_ties_away_from_zero() {
        assert_eq!(round_to_decimals(0.125, 2), 0.13);
        assert_eq!(round_to_decimals(2.5, 0), 3.0);
        assert_eq!(round_to_decimals(0.5, 0), 1.0);
        assert_eq!(round_to_decimals(-2.5, 0), -3.0);
    }

    #[test]
    fn rounds_the_stored_value_not_its_decimal_literal() {
        // 1.005 is stored as 1.00499999999999989…
        assert_eq!(round_to_decimals(1.005, 2), 1.0);
    }

    #[test]
    fn normalizes_negative_zero() {
        let rounded = round_to_decimals(-0.001, 2);
        assert_eq!(rounded, 0.0);
        assert!(rounded.is_sign_positive());
    }

    #[test]
    fn passes_non_finite_values_through() {
        assert!(round_to_decimals(f64::NAN, 2).is_nan());
        assert_eq!(round_to_decimals(f64::INFINITY, 2), f64::INFINITY);
    }

    #[test]
    fn integer_steps_render_without_fraction() {
        let options = OptionSet::generate(&config(0.0, 5.0, 1.0, 2.0, 0));

        let texts: Vec<&str> = options.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, ["0", "1", "2", "3", "4", "5"]);
        assert_eq!(options.default_index(), Some(2));
    }

    #[test]
    fn stops_once_running_value_exceeds_max() {
        let options = OptionSet::generate(&config(187.0, 711.0, 10.0, 330.0, 0));

        assert_eq!(options.len(), 53);
        assert_eq!(options.choices().first().map(|c| c.value), Some(187.0));
        assert_eq!(options.choices().last().map(|c| c.value), Some(707.0));
        assert_eq!(options.default_choice().map(|c| c.value), Some(327.0));
    }

    #[test]
    fn accumulated_error_can_drop_the_final_step() {
        let options = OptionSet::generate(&config(12.6, 22.0, 0.1, 19.05, 1));

        assert_eq!(options.len(), 94);
        assert_eq!(options.choices().last().map(|c| c.value), Some(21.9));
    }

    #[test]
    fn default_halfway_between_choices_prefers_the_earlier_one() {
        let options = OptionSet::generate(&config(12.6, 22.0, 0.1, 19.05, 1));

        let default = options.default_choice().unwrap();
        assert_eq!(default.value, 19.0);
        assert_eq!(default.text, "19");
    }

    #[test]
    fn no_default_when_rounding_moves_every_choice_away() {
        let options = OptionSet::generate(&config(0.0, 0.35, 0.1, 0.3, 0));

        assert_eq!(values(&options), [0.0, 0.0, 0.0, 0.0]);
        assert_eq!(options.default_index(), None);
        assert!(options.default_choice().is_none());
    }

    #[test]
    fn single_point_range_yields_one_choice() {
        let options = OptionSet::generate(&config(5.0, 5.0, 1.0, 5.0, 0));

        assert_eq!(values(&options), [5.0]);
        assert_eq!(options.default_index(), Some(0));
    }

    #[test]
    fn stops_when_step_no_longer_advances() {
        let options = OptionSet::generate(&config(1e17, 2e17, 1.0, 1e17, 0));

        assert_eq!(options.len(), 1);
    }

    #[test]
    fn caps_the_number_of_choices() {
        let options = OptionSet::generate(&config(0.0, 1e6, 1e-3, 0.0, 3));

        assert_eq!(options.len(), OptionSet::MAX_CHOICES);
        assert_relative_eq!(
            options.choices().last().unwrap().value,
            99.999,
            epsilon = 1e-9
        );
    }

    #[test]
    fn position_finds_choice_by_value() {
        let options = OptionSet::generate(&config(0.385, 0.871, 0.01, 0.538, 3));

        assert_eq!(options.position(0.385), Some(0));
        assert_eq!(options.position(0.535), options.default_index());
        assert_eq!(options.position(0.5355), None);
    }
}
