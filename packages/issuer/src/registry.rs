//! Issuer registry — loads all issuer profiles from embedded TOML configs.
//!
//! Each `.toml` file in `packages/issuer/issuers/` is baked into the binary
//! at compile time via [`include_str!`]. Adding an issuer is as simple as
//! creating a new TOML file and adding it to the list below — no code change
//! elsewhere. Declaration order matters: detection scans profiles in this
//! order, and the first entry doubles as the fallback when no identifier
//! keyword matches.

use std::sync::LazyLock;

use crate::RegistryError;
use crate::profile::{CompiledProfile, parse_profile_toml};

/// TOML profiles embedded at compile time, in declaration order.
const ISSUER_TOMLS: &[(&str, &str)] = &[
    ("hdfc", include_str!("../issuers/hdfc.toml")),
    ("icici", include_str!("../issuers/icici.toml")),
    ("sbi", include_str!("../issuers/sbi.toml")),
    ("axis", include_str!("../issuers/axis.toml")),
    ("kotak", include_str!("../issuers/kotak.toml")),
];

/// Total number of configured issuers (used in tests).
#[cfg(test)]
const EXPECTED_ISSUER_COUNT: usize = 5;

static REGISTRY: LazyLock<Registry> = LazyLock::new(|| {
    Registry::load().unwrap_or_else(|e| panic!("Failed to load issuer registry: {e}"))
});

/// The set of supported issuer profiles, compiled and validated.
///
/// Read-only after construction; concurrent parse requests share it with no
/// coordination.
#[derive(Debug)]
pub struct Registry {
    profiles: Vec<CompiledProfile>,
}

impl Registry {
    /// Parses, validates, and compiles every embedded profile.
    ///
    /// # Errors
    ///
    /// Returns the first [`RegistryError`] encountered: malformed TOML, a
    /// pattern that fails to compile, a pattern without exactly one capture
    /// group, or an empty pattern list.
    pub fn load() -> Result<Self, RegistryError> {
        let mut profiles = Vec::with_capacity(ISSUER_TOMLS.len());

        for (key, toml_str) in ISSUER_TOMLS {
            let profile =
                parse_profile_toml(toml_str).map_err(|message| RegistryError::Toml {
                    issuer: (*key).to_owned(),
                    message,
                })?;

            if profile.key != *key {
                return Err(RegistryError::Toml {
                    issuer: (*key).to_owned(),
                    message: format!(
                        "declared key '{}' does not match registry entry",
                        profile.key
                    ),
                });
            }

            profiles.push(profile.compile()?);
        }

        log::debug!("Loaded {} issuer profiles", profiles.len());

        Ok(Self { profiles })
    }

    /// All profiles, in declaration order.
    #[must_use]
    pub fn profiles(&self) -> &[CompiledProfile] {
        &self.profiles
    }

    /// The fallback profile used when detection finds no keyword
    /// (first-declared).
    #[must_use]
    pub fn default_profile(&self) -> &CompiledProfile {
        &self.profiles[0]
    }

    /// Looks up a profile by issuer key.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::UnknownIssuer`] if no profile carries `key`.
    pub fn lookup(&self, key: &str) -> Result<&CompiledProfile, RegistryError> {
        self.profiles
            .iter()
            .find(|p| p.key == key)
            .ok_or_else(|| RegistryError::UnknownIssuer(key.to_owned()))
    }
}

/// Returns the process-wide registry, loading it on first access.
///
/// # Panics
///
/// Panics if any embedded profile is malformed. The server touches the
/// registry at startup so this aborts the process before the first request.
#[must_use]
pub fn registry() -> &'static Registry {
    &REGISTRY
}
