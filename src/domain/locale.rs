use bigdecimal::{BigDecimal, RoundingMode, Zero};
use chrono::{DateTime, Datelike, NaiveDate, Utc};

pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";
pub const DEFAULT_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Date and price formatting for the back-office language.
#[derive(Debug, Clone)]
pub struct Locale {
    pub date_format: String,
    pub datetime_format: String,
}

impl Default for Locale {
    fn default() -> Self {
        Self {
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            datetime_format: DEFAULT_DATETIME_FORMAT.to_string(),
        }
    }
}

impl Locale {
    pub fn display_date(&self, date: NaiveDate) -> String {
        date.format(&self.date_format).to_string()
    }

    pub fn display_datetime(&self, at: DateTime<Utc>) -> String {
        at.format(&self.datetime_format).to_string()
    }

    /// Two decimals, half-up. Known currencies get their symbol in front,
    /// others are suffixed with the ISO code.
    pub fn format_price(&self, amount: &BigDecimal, currency_iso: &str) -> String {
        let rounded = amount.with_scale_round(2, RoundingMode::HalfUp);
        let negative = rounded < BigDecimal::zero();
        let digits = two_decimals(&rounded.abs());
        match (currency_symbol(currency_iso), negative) {
            (Some(symbol), true) => format!("-{}{}", symbol, digits),
            (Some(symbol), false) => format!("{}{}", symbol, digits),
            (None, true) => format!("-{} {}", digits, currency_iso),
            (None, false) => format!("{} {}", digits, currency_iso),
        }
    }
}

/// Non-negative amount with exactly two decimals; `Display` drops trailing
/// zeros of a zero value.
fn two_decimals(amount: &BigDecimal) -> String {
    let (cents, _) = amount.with_scale(2).as_bigint_and_exponent();
    let cents = format!("{:0>3}", cents.to_string());
    let (units, fraction) = cents.split_at(cents.len() - 2);
    format!("{}.{}", units, fraction)
}

fn currency_symbol(iso: &str) -> Option<&'static str> {
    match iso.to_ascii_uppercase().as_str() {
        "EUR" => Some("€"),
        "USD" => Some("$"),
        "GBP" => Some("£"),
        "JPY" => Some("¥"),
        _ => None,
    }
}

/// Completed years between `birthday` and `today`.
pub fn age_on(birthday: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birthday.year();
    if (today.month(), today.day()) < (birthday.month(), birthday.day()) {
        age -= 1;
    }
    age.max(0)
}

/// Fill `%1$s`/`%1$d` style positional placeholders of a translated template.
pub fn fill_positional(template: &str, args: &[&str]) -> String {
    let mut out = template.to_string();
    for (index, value) in args.iter().enumerate() {
        let n = index + 1;
        out = out
            .replace(&format!("%{}$s", n), value)
            .replace(&format!("%{}$d", n), value);
    }
    out
}
