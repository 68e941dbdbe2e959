#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Issuer profile registry and detection.
//!
//! Each supported card issuer has a TOML profile describing how to recognize
//! its statements (identifier keywords) and where each field's value sits
//! relative to its printed labels (ordered regex pattern lists). Profiles
//! are embedded at compile time, validated and compiled once per process,
//! and never mutated afterwards — there is no behavioral variation between
//! issuers beyond the pattern data itself.

pub mod detect;
pub mod profile;
pub mod registry;

pub use detect::Detection;
pub use profile::{CompiledProfile, FieldPatterns, IssuerProfile};
pub use registry::{Registry, registry};

use card_parse_statement_models::FieldName;

/// Errors raised while loading or querying the issuer registry.
///
/// All variants except [`RegistryError::UnknownIssuer`] are structural
/// configuration problems and are fatal at process start — the registry
/// validates every profile eagerly, never per-request.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// An embedded profile failed to deserialize.
    #[error("invalid profile for '{issuer}': {message}")]
    Toml {
        /// Registry key of the offending profile.
        issuer: String,
        /// Deserialization error detail.
        message: String,
    },

    /// A declared pattern failed to compile.
    #[error("invalid {field} pattern for '{issuer}': {source}")]
    Pattern {
        /// Registry key of the offending profile.
        issuer: String,
        /// Field the pattern was declared for.
        field: FieldName,
        /// The underlying regex compilation error.
        #[source]
        source: regex::Error,
    },

    /// A declared pattern does not have exactly one capture group.
    #[error("{field} pattern for '{issuer}' must have exactly one capture group: {pattern}")]
    PatternShape {
        /// Registry key of the offending profile.
        issuer: String,
        /// Field the pattern was declared for.
        field: FieldName,
        /// The offending pattern source.
        pattern: String,
    },

    /// A profile declares no patterns for one of the four fields.
    #[error("profile '{issuer}' declares no {field} patterns")]
    EmptyPatternList {
        /// Registry key of the offending profile.
        issuer: String,
        /// Field with the empty pattern list.
        field: FieldName,
    },

    /// Lookup with a key outside the registry. Should be unreachable given
    /// the detector's fallback contract; treat as an internal invariant
    /// violation if it occurs.
    #[error("unknown issuer key: {0}")]
    UnknownIssuer(String),
}
