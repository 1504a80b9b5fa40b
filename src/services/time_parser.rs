//! Natural-language time horizons ("3 meses", "2 weeks", "1 año") to months.

use std::sync::LazyLock;

use regex::Regex;

use super::text::normalize_text;

/// Months assumed when no horizon is given or no number can be found
pub const DEFAULT_MONTHS: u32 = 1;

/// Unit families in precedence order. Tokens match as substrings of the
/// canonical text, in Spanish and English.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimeUnit {
    Day,
    Week,
    Month,
    Year,
}

impl TimeUnit {
    const PRECEDENCE: [TimeUnit; 4] = [
        TimeUnit::Day,
        TimeUnit::Week,
        TimeUnit::Month,
        TimeUnit::Year,
    ];

    fn tokens(&self) -> &'static [&'static str] {
        match self {
            TimeUnit::Day => &["dia", "day"],
            TimeUnit::Week => &["semana", "week"],
            TimeUnit::Month => &["mes", "month"],
            TimeUnit::Year => &["ano", "year"],
        }
    }

    fn detect(text: &str) -> Option<Self> {
        Self::PRECEDENCE
            .into_iter()
            .find(|unit| unit.tokens().iter().any(|token| text.contains(token)))
    }

    fn to_months(self, amount: u32) -> u32 {
        match self {
            TimeUnit::Day => (amount / 30).max(1),
            TimeUnit::Week => (amount / 4).max(1),
            TimeUnit::Month => amount,
            TimeUnit::Year => amount.saturating_mul(12),
        }
    }
}

#[allow(clippy::expect_used)]
static DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+").expect("digit regex is valid"));

/// Parses a time horizon into months.
///
/// Only the first run of ASCII digits counts. A bare number is taken as
/// months. An explicit "0 meses" or "0 años" yields 0; only the
/// absent/no-number case is floored at [`DEFAULT_MONTHS`].
pub fn parse_time_natural(input: Option<&str>) -> u32 {
    let text = normalize_text(input.unwrap_or_default());
    if text.is_empty() {
        return DEFAULT_MONTHS;
    }

    let Some(found) = DIGITS.find(&text) else {
        return DEFAULT_MONTHS;
    };
    // Only overflow can fail here; clamp instead of rejecting
    let amount = found.as_str().parse::<u32>().unwrap_or(u32::MAX);

    match TimeUnit::detect(&text) {
        Some(unit) => unit.to_months(amount),
        None => amount,
    }
}
