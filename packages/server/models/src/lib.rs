#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! API request and response types for the card-parse server.
//!
//! These types are serialized to JSON for the REST API. They are separate
//! from the core statement types to allow independent evolution of the API
//! contract.

use card_parse_statement_models::ParsedStatement;
use serde::{Deserialize, Serialize};

/// Health check response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiHealth {
    /// Whether the service is healthy.
    pub healthy: bool,
    /// Service version.
    pub version: String,
}

/// A parsed statement as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiStatement {
    /// Display name of the issuing bank.
    pub issuer: String,
    /// `true` when the issuer was guessed (detection fallback) rather than
    /// recognized from an identifier keyword.
    pub issuer_guessed: bool,
    /// Raw matched card number text (possibly masked).
    pub card_number: Option<String>,
    /// Last four digits of the card number.
    pub last_four_digits: Option<String>,
    /// Statement period, verbatim as printed.
    pub billing_cycle: Option<String>,
    /// Payment due date, verbatim as printed.
    pub due_date: Option<String>,
    /// Normalized balance with the canonical currency prefix.
    pub total_balance: Option<String>,
    /// Leading slice of the extracted text, for debugging.
    pub raw_text_preview: String,
}

impl ApiStatement {
    /// Builds an API statement from a core record plus a text preview.
    #[must_use]
    pub fn from_parsed(parsed: ParsedStatement, raw_text_preview: String) -> Self {
        Self {
            issuer: parsed.issuer,
            issuer_guessed: parsed.issuer_guessed,
            card_number: parsed.card_number,
            last_four_digits: parsed.last_four_digits,
            billing_cycle: parsed.billing_cycle,
            due_date: parsed.due_date,
            total_balance: parsed.total_balance,
            raw_text_preview,
        }
    }
}

/// Successful parse response envelope.
#[derive(Debug, Serialize)]
pub struct ApiParseResponse {
    /// Always `true` on the success path.
    pub success: bool,
    /// The parsed statement.
    pub data: ApiStatement,
}

/// Structured error payload.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// User-facing error message.
    pub error: String,
    /// Extracted-text preview, included when text was readable but no
    /// fields could be recovered from it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_text_preview: Option<String>,
}
