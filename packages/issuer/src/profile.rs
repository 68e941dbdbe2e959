//! Config-driven issuer profile definition.
//!
//! [`IssuerProfile`] captures everything unique about a card issuer in a
//! serializable config struct: its display name, the keywords that identify
//! its statements, and ordered regex pattern lists for each extractable
//! field. A single generic extraction pipeline handles all issuers.
//!
//! Patterns are compiled case-insensitive and multi-line so that field
//! labels match regardless of letter case and across line-wrapped statement
//! text, and each pattern must carry exactly one capture group — the
//! field's value.

use card_parse_statement_models::FieldName;
use regex::{Regex, RegexBuilder};
use serde::Deserialize;

use crate::RegistryError;

/// A complete issuer profile as declared in TOML.
#[derive(Debug, Deserialize)]
pub struct IssuerProfile {
    /// Unique registry key (e.g., `"hdfc"`).
    pub key: String,
    /// Human-readable issuer name (e.g., `"HDFC Bank"`).
    pub name: String,
    /// Substrings that identify this issuer's statements, tried in order.
    pub identifiers: Vec<String>,
    /// Ordered pattern lists per extractable field.
    pub patterns: PatternSet,
}

/// Raw (uncompiled) pattern lists for the four extractable fields.
///
/// Deserialization fails if any field list is missing, so a profile cannot
/// silently omit a field.
#[derive(Debug, Deserialize)]
pub struct PatternSet {
    /// Patterns locating the card number.
    pub card_number: Vec<String>,
    /// Patterns locating the statement period.
    pub billing_cycle: Vec<String>,
    /// Patterns locating the payment due date.
    pub due_date: Vec<String>,
    /// Patterns locating the total balance.
    pub total_balance: Vec<String>,
}

impl PatternSet {
    /// Returns the raw pattern list for `field`, in declaration order.
    #[must_use]
    pub fn for_field(&self, field: FieldName) -> &[String] {
        match field {
            FieldName::CardNumber => &self.card_number,
            FieldName::BillingCycle => &self.billing_cycle,
            FieldName::DueDate => &self.due_date,
            FieldName::TotalBalance => &self.total_balance,
        }
    }
}

/// An issuer profile with every pattern compiled, ready for extraction.
#[derive(Debug)]
pub struct CompiledProfile {
    /// Unique registry key (e.g., `"hdfc"`).
    pub key: String,
    /// Human-readable issuer name.
    pub name: String,
    /// Lowercased identifier substrings, in declaration order.
    pub identifiers: Vec<String>,
    /// Compiled pattern lists per field.
    pub patterns: FieldPatterns,
}

/// Compiled pattern lists for the four extractable fields.
#[derive(Debug)]
pub struct FieldPatterns {
    card_number: Vec<Regex>,
    billing_cycle: Vec<Regex>,
    due_date: Vec<Regex>,
    total_balance: Vec<Regex>,
}

impl FieldPatterns {
    /// Returns the compiled pattern list for `field`, in declaration order.
    #[must_use]
    pub fn for_field(&self, field: FieldName) -> &[Regex] {
        match field {
            FieldName::CardNumber => &self.card_number,
            FieldName::BillingCycle => &self.billing_cycle,
            FieldName::DueDate => &self.due_date,
            FieldName::TotalBalance => &self.total_balance,
        }
    }
}

/// Parses an [`IssuerProfile`] from a TOML string.
///
/// # Errors
///
/// Returns an error if the TOML is malformed or missing required fields.
pub fn parse_profile_toml(toml_str: &str) -> Result<IssuerProfile, String> {
    toml::de::from_str(toml_str).map_err(|e| e.to_string())
}

impl IssuerProfile {
    /// Compiles every declared pattern, validating the profile eagerly.
    ///
    /// Identifier keywords are lowercased here so detection can compare
    /// against lowercased statement text directly.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::EmptyPatternList`] when a field declares no
    /// patterns, [`RegistryError::Pattern`] when a pattern fails to compile,
    /// and [`RegistryError::PatternShape`] when a pattern does not have
    /// exactly one capture group.
    pub fn compile(self) -> Result<CompiledProfile, RegistryError> {
        let patterns = FieldPatterns {
            card_number: compile_list(&self.key, FieldName::CardNumber, &self.patterns)?,
            billing_cycle: compile_list(&self.key, FieldName::BillingCycle, &self.patterns)?,
            due_date: compile_list(&self.key, FieldName::DueDate, &self.patterns)?,
            total_balance: compile_list(&self.key, FieldName::TotalBalance, &self.patterns)?,
        };

        Ok(CompiledProfile {
            key: self.key,
            name: self.name,
            identifiers: self
                .identifiers
                .iter()
                .map(|kw| kw.to_lowercase())
                .collect(),
            patterns,
        })
    }
}

/// Compiles one field's pattern list, case-insensitive and multi-line.
fn compile_list(
    issuer: &str,
    field: FieldName,
    patterns: &PatternSet,
) -> Result<Vec<Regex>, RegistryError> {
    let raw = patterns.for_field(field);
    if raw.is_empty() {
        return Err(RegistryError::EmptyPatternList {
            issuer: issuer.to_owned(),
            field,
        });
    }

    raw.iter()
        .map(|pattern| {
            let re = RegexBuilder::new(pattern)
                .case_insensitive(true)
                .multi_line(true)
                .build()
                .map_err(|source| RegistryError::Pattern {
                    issuer: issuer.to_owned(),
                    field,
                    source,
                })?;

            // captures_len() counts the implicit whole-match group
            if re.captures_len() != 2 {
                return Err(RegistryError::PatternShape {
                    issuer: issuer.to_owned(),
                    field,
                    pattern: pattern.clone(),
                });
            }

            Ok(re)
        })
        .collect()
}
