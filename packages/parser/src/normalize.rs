//! Field-specific normalization of raw pattern captures.
//!
//! Card numbers arrive in many masked formats (`"XXXX XXXX XXXX 1234"`,
//! `"****-****-****-1234"`); balances arrive with thousands separators and
//! assorted currency prefixes (`"Rs. 12,345.67"`, `"INR 5432.10"`). Both
//! are reduced to a canonical form here. Billing cycle and due date values
//! are stored verbatim — downstream consumers tolerate varied date formats.

/// Canonical currency symbol prefixed to normalized balances.
pub const CURRENCY_SYMBOL: &str = "₹";

/// Extracts the last four digits from a raw card number match.
///
/// Every non-digit character is discarded first, so masked and
/// separator-laden formats are handled uniformly. Returns `None` when fewer
/// than four digits remain.
#[must_use]
pub fn last_four_digits(raw: &str) -> Option<String> {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    (digits.len() >= 4).then(|| digits[digits.len() - 4..].to_owned())
}

/// Normalizes a raw balance match to the canonical currency form.
///
/// Every character except digits and the decimal point is stripped
/// (thousands separators, currency codes and symbols, whitespace), then the
/// result is prefixed with [`CURRENCY_SYMBOL`]. Idempotent: normalizing an
/// already-normalized balance yields the same value.
#[must_use]
pub fn normalize_balance(raw: &str) -> String {
    let amount: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    format!("{CURRENCY_SYMBOL}{amount}")
}
