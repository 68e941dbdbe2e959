//! Issuer detection from statement text.
//!
//! Statements nearly always mention the issuing bank by name somewhere, so
//! detection degrades to a best-guess default instead of failing: even a
//! wrong profile lets extraction proceed and report partial results rather
//! than refusing outright. [`Detection::guessed`] tells callers which of the
//! two happened.

use crate::profile::CompiledProfile;
use crate::registry::Registry;

/// The outcome of issuer detection.
#[derive(Debug, Clone, Copy)]
pub struct Detection<'a> {
    /// The matched (or fallback) profile.
    pub profile: &'a CompiledProfile,
    /// `true` when no identifier keyword matched and the first-declared
    /// profile was used as a fallback.
    pub guessed: bool,
}

impl Registry {
    /// Detects the issuing bank from statement text.
    ///
    /// The text is lowercased once, then profiles are scanned in
    /// declaration order and each profile's identifier keywords in
    /// declaration order; the first keyword that is a literal substring of
    /// the text wins. When two issuers share an identifier substring, the
    /// first-declared profile wins. Never fails: with no match, the
    /// first-declared profile is returned with `guessed = true`.
    #[must_use]
    pub fn detect(&self, text: &str) -> Detection<'_> {
        let haystack = text.to_lowercase();

        for profile in self.profiles() {
            if profile
                .identifiers
                .iter()
                .any(|kw| haystack.contains(kw.as_str()))
            {
                log::debug!("Detected issuer '{}'", profile.key);
                return Detection {
                    profile,
                    guessed: false,
                };
            }
        }

        let fallback = self.default_profile();
        log::debug!("No issuer keyword matched, falling back to '{}'", fallback.key);

        Detection {
            profile: fallback,
            guessed: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::registry::Registry;

    #[test]
    fn detects_issuer_by_keyword() {
        let registry = Registry::load().unwrap();
        let detection = registry.detect("ICICI Bank Credit Card Statement");
        assert_eq!(detection.profile.key, "icici");
        assert!(!detection.guessed);
    }

    #[test]
    fn detection_is_case_insensitive() {
        let registry = Registry::load().unwrap();
        assert_eq!(registry.detect("statement from hdfc bank").profile.key, "hdfc");
        assert_eq!(registry.detect("STATEMENT FROM HDFC BANK").profile.key, "hdfc");
    }

    #[test]
    fn matches_secondary_keywords() {
        let registry = Registry::load().unwrap();
        let detection = registry.detect("State Bank of India Card Services");
        assert_eq!(detection.profile.key, "sbi");
    }

    #[test]
    fn first_declared_profile_wins_on_overlap() {
        // Both issuers appear; declaration order (icici before kotak) decides.
        let registry = Registry::load().unwrap();
        let detection = registry.detect("Transfer from Kotak to your ICICI card");
        assert_eq!(detection.profile.key, "icici");
    }

    #[test]
    fn falls_back_to_default_on_no_match() {
        let registry = Registry::load().unwrap();
        let detection = registry.detect("An unrelated document with no bank names");
        assert_eq!(detection.profile.key, "hdfc");
        assert!(detection.guessed);
    }

    #[test]
    fn empty_text_falls_back_without_error() {
        let registry = Registry::load().unwrap();
        let detection = registry.detect("");
        assert_eq!(detection.profile.key, "hdfc");
        assert!(detection.guessed);
    }
}
