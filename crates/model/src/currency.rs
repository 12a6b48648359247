/// Dollars represented by one unit of model output.
///
/// The regression predicts prices in thousands of dollars, so `24.5` means
/// `$24,500`.
pub const DOLLARS_PER_UNIT: f64 = 1000.0;

/// Formats a model output as whole-dollar US currency.
///
/// The value is scaled by [`DOLLARS_PER_UNIT`], rounded half away from zero,
/// and rendered with `,` thousands separators and a leading `$`. Negative
/// amounts carry a leading `-` (`-$1,500`). A missing or NaN input is treated
/// as zero.
///
/// # Examples
///
/// ```
/// use hedonic_model::format_price;
///
/// assert_eq!(format_price(24.5), "$24,500");
/// assert_eq!(format_price(0.0), "$0");
/// assert_eq!(format_price(f64::NAN), "$0");
/// assert_eq!(format_price(None::<f64>), "$0");
/// ```
#[must_use]
pub fn format_price(price: impl Into<Option<f64>>) -> String {
    let thousands = price.into().filter(|value| !value.is_nan()).unwrap_or(0.0);
    format_dollars(thousands * DOLLARS_PER_UNIT)
}

fn format_dollars(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    if amount.is_infinite() {
        return format!("{sign}$∞");
    }

    let digits = format!("{:.0}", amount.abs().round());
    format!("{sign}${}", group_thousands(&digits))
}

/// Inserts `,` between every group of three digits, counting from the right.
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}
