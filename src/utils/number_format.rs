//! Locale-aware display formatting for banner values
//!
//! Numbers are grouped per locale with at most three fraction digits
//! (trailing zeros dropped), which is how the host formats numeric cells.
//! Everything else renders its plain string form.

use num_format::{Locale, ToFormattedString};

use crate::models::PrimitiveValue;

/// Maximum number of fraction digits kept when formatting
pub const MAX_FRACTION_DIGITS: u32 = 3;

/// Resolve a host locale tag (`"en-US"`, `"de"`) to a CLDR locale.
///
/// Tries the exact name, then the language prefix. Unknown tags fall back
/// to English.
pub fn resolve_locale(tag: &str) -> Locale {
    if let Ok(locale) = Locale::from_name(tag) {
        return locale;
    }

    let language = tag.split(&['-', '_'][..]).next().unwrap_or_default();
    match Locale::from_name(language) {
        Ok(locale) => locale,
        Err(_) => {
            log::warn!("Unknown locale '{}', falling back to 'en'", tag);
            Locale::en
        }
    }
}

/// Format a table value for display
pub fn format_value(value: &PrimitiveValue, locale: &Locale) -> String {
    match value {
        PrimitiveValue::Number(n) => format_number(*n, locale),
        other => other.to_string(),
    }
}

/// Format a number with locale digit grouping
pub fn format_number(n: f64, locale: &Locale) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        let sign = if n < 0.0 { locale.minus_sign() } else { "" };
        return format!("{}{}", sign, locale.infinity());
    }

    let abs = n.abs();
    let factor = 10u32.pow(MAX_FRACTION_DIGITS);

    // Shortest round-trip digits, so 1e32 groups as 1 followed by zeros
    let digits = format!("{}", abs.trunc());
    let mut fraction = (abs.fract() * factor as f64).round() as u32;

    let grouped = match digits.parse::<u128>() {
        Ok(mut integer) => {
            if fraction >= factor {
                integer += 1;
                fraction = 0;
            }
            integer.to_formatted_string(locale)
        }
        // Beyond u128 there is no fractional part left to carry
        Err(_) => group_digits(&digits, locale),
    };

    let mut out = String::new();
    if n < 0.0 && (grouped != "0" || fraction > 0) {
        out.push_str(locale.minus_sign());
    }
    out.push_str(&grouped);

    if fraction > 0 {
        let digits = format!("{:0width$}", fraction, width = MAX_FRACTION_DIGITS as usize);
        out.push_str(locale.decimal());
        out.push_str(digits.trim_end_matches('0'));
    }

    out
}

/// Thousands grouping for integers too large for u128
fn group_digits(digits: &str, locale: &Locale) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3 * locale.separator().len());
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push_str(locale.separator());
        }
        out.push(c);
    }
    out
}
