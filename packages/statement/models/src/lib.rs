#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Canonical statement field types for the card-parse system.
//!
//! This crate defines the fixed set of fields extracted from a credit card
//! statement and the record assembled per parse. All issuer profiles
//! normalize their source-specific label vocabulary into these shared field
//! names.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// One of the four attributes extracted from a statement.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum FieldName {
    /// The (possibly masked) card number printed on the statement.
    CardNumber,
    /// The statement/billing period.
    BillingCycle,
    /// The payment due date.
    DueDate,
    /// The total outstanding balance.
    TotalBalance,
}

impl FieldName {
    /// All extractable fields, in extraction order.
    pub const ALL: [Self; 4] = [
        Self::CardNumber,
        Self::BillingCycle,
        Self::DueDate,
        Self::TotalBalance,
    ];
}

/// A single parsed statement record.
///
/// Assembled once per parse and never mutated afterwards. Every field except
/// the issuer name is optional: extraction failures for individual fields
/// are represented as absent values, not errors, so a partially recovered
/// statement is still a valid record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedStatement {
    /// Display name of the issuing bank.
    pub issuer: String,
    /// `true` when no identifier keyword matched and the issuer is the
    /// registry's fallback default rather than a detected match.
    pub issuer_guessed: bool,
    /// Raw matched card number text (possibly masked).
    pub card_number: Option<String>,
    /// Exactly four digits. Present iff `card_number` is present and
    /// contains at least four digits after stripping non-digit characters.
    pub last_four_digits: Option<String>,
    /// Statement period, verbatim as printed (trimmed).
    pub billing_cycle: Option<String>,
    /// Payment due date, verbatim as printed (trimmed).
    pub due_date: Option<String>,
    /// Normalized balance carrying the canonical currency prefix.
    pub total_balance: Option<String>,
}

impl ParsedStatement {
    /// Returns `true` when none of the four fields were recovered.
    ///
    /// Callers treat an empty record as a request-level failure distinct
    /// from a text-extraction failure.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.card_number.is_none()
            && self.billing_cycle.is_none()
            && self.due_date.is_none()
            && self.total_balance.is_none()
    }

    /// Number of recovered fields (0-4).
    #[must_use]
    pub fn field_count(&self) -> usize {
        usize::from(self.card_number.is_some())
            + usize::from(self.billing_cycle.is_some())
            + usize::from(self.due_date.is_some())
            + usize::from(self.total_balance.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_record() -> ParsedStatement {
        ParsedStatement {
            issuer: "HDFC Bank".to_string(),
            issuer_guessed: true,
            card_number: None,
            last_four_digits: None,
            billing_cycle: None,
            due_date: None,
            total_balance: None,
        }
    }

    #[test]
    fn empty_record_reports_empty() {
        let record = empty_record();
        assert!(record.is_empty());
        assert_eq!(record.field_count(), 0);
    }

    #[test]
    fn single_field_is_not_empty() {
        let record = ParsedStatement {
            due_date: Some("05-Jan-2025".to_string()),
            ..empty_record()
        };
        assert!(!record.is_empty());
        assert_eq!(record.field_count(), 1);
    }

    #[test]
    fn field_names_serialize_snake_case() {
        assert_eq!(FieldName::CardNumber.to_string(), "card_number");
        assert_eq!(FieldName::TotalBalance.to_string(), "total_balance");
    }

    #[test]
    fn field_name_parses_from_string() {
        assert_eq!(
            "billing_cycle".parse::<FieldName>().unwrap(),
            FieldName::BillingCycle
        );
    }
}
