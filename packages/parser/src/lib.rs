#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Statement parsing pipeline for card-parse.
//!
//! Composes issuer detection, ordered multi-pattern field extraction, and
//! field normalization into a single pure pass over statement text. The
//! pipeline retains no state between requests: the only persistent
//! structure is the read-only issuer registry, so concurrent parses need no
//! coordination.

pub mod extract;
pub mod normalize;

use card_parse_issuer::registry;
use card_parse_statement_models::{FieldName, ParsedStatement};

use crate::extract::extract_field;
use crate::normalize::{last_four_digits, normalize_balance};

/// Parses statement text into a [`ParsedStatement`].
///
/// Detection picks a profile (falling back to the default issuer when no
/// keyword matches), each of the four fields is extracted with that
/// profile's pattern lists, and the card number and balance are normalized.
/// Partial extraction is a valid outcome — this function never fails.
/// Callers decide whether an empty record
/// ([`ParsedStatement::is_empty`]) constitutes a request-level error.
#[must_use]
pub fn parse_statement(text: &str) -> ParsedStatement {
    let detection = registry().detect(text);
    let profile = detection.profile;

    let card_number = extract_field(text, profile.patterns.for_field(FieldName::CardNumber));
    let last_four = card_number.as_deref().and_then(last_four_digits);

    let billing_cycle = extract_field(text, profile.patterns.for_field(FieldName::BillingCycle));
    let due_date = extract_field(text, profile.patterns.for_field(FieldName::DueDate));

    let total_balance = extract_field(text, profile.patterns.for_field(FieldName::TotalBalance))
        .map(|raw| normalize_balance(&raw));

    let parsed = ParsedStatement {
        issuer: profile.name.clone(),
        issuer_guessed: detection.guessed,
        card_number,
        last_four_digits: last_four,
        billing_cycle,
        due_date,
        total_balance,
    };

    log::debug!(
        "Extracted {}/4 fields for issuer '{}'",
        parsed.field_count(),
        profile.key
    );

    parsed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hdfc_statement_end_to_end() {
        let text = "HDFC Bank Credit Card Statement\n\
                    Card ending in 4321\n\
                    Payment Due Date: 05-Jan-2025\n\
                    Total Amount Due: Rs. 5,432.10\n";
        let parsed = parse_statement(text);

        assert_eq!(parsed.issuer, "HDFC Bank");
        assert!(!parsed.issuer_guessed);
        assert_eq!(parsed.last_four_digits.as_deref(), Some("4321"));
        assert_eq!(parsed.due_date.as_deref(), Some("05-Jan-2025"));
        assert_eq!(parsed.total_balance.as_deref(), Some("₹5432.10"));
    }

    #[test]
    fn parses_masked_card_number() {
        let text = "ICICI Bank statement\nCard Number: 4111 XXXX XXXX 9999\n";
        let parsed = parse_statement(text);

        assert_eq!(parsed.issuer, "ICICI Bank");
        assert_eq!(
            parsed.card_number.as_deref(),
            Some("4111 XXXX XXXX 9999")
        );
        assert_eq!(parsed.last_four_digits.as_deref(), Some("9999"));
    }

    #[test]
    fn parses_billing_cycle_range() {
        let text = "Axis Bank\nStatement Period: 01-Dec-2024 to 31-Dec-2024\n";
        let parsed = parse_statement(text);

        assert_eq!(parsed.issuer, "Axis Bank");
        assert_eq!(
            parsed.billing_cycle.as_deref(),
            Some("01-Dec-2024 to 31-Dec-2024")
        );
    }

    #[test]
    fn unrecognized_text_yields_empty_record_with_guessed_issuer() {
        let parsed = parse_statement("A grocery list with nothing relevant on it");

        assert_eq!(parsed.issuer, "HDFC Bank");
        assert!(parsed.issuer_guessed);
        assert!(parsed.is_empty());
        assert!(parsed.last_four_digits.is_none());
    }

    #[test]
    fn case_insensitive_labels_match() {
        let text = "hdfc bank\nPAYMENT DUE DATE: 12-Mar-2025\n";
        let parsed = parse_statement(text);
        assert_eq!(parsed.due_date.as_deref(), Some("12-Mar-2025"));
    }

    #[test]
    fn last_four_absent_when_card_number_has_few_digits() {
        // "Card ending in" needs four digits to match at all, so use the
        // broader card number label with a short value.
        let text = "SBI Card statement\nTotal Amount Due: Rs. 100.00\n";
        let parsed = parse_statement(text);
        assert!(parsed.card_number.is_none());
        assert!(parsed.last_four_digits.is_none());
        assert_eq!(parsed.total_balance.as_deref(), Some("₹100.00"));
    }
}
