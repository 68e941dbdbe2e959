//! Ordered multi-pattern field extraction.
//!
//! Each field is located by trying its profile's patterns in declared
//! order: earlier, more specific label variants take precedence over later,
//! looser ones. A field that matches no pattern is simply absent.

use regex::Regex;

/// Extracts a field value by trying `patterns` in declared order.
///
/// Returns the trimmed content of the single capture group of the first
/// pattern that matches, or `None` when no pattern matches. Pure function:
/// no retry or backtracking beyond trying the next pattern.
#[must_use]
pub fn extract_field(text: &str, patterns: &[Regex]) -> Option<String> {
    for re in patterns {
        if let Some(caps) = re.captures(text)
            && let Some(value) = caps.get(1)
        {
            return Some(value.as_str().trim().to_owned());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::RegexBuilder;

    fn compile(patterns: &[&str]) -> Vec<Regex> {
        patterns
            .iter()
            .map(|p| {
                RegexBuilder::new(p)
                    .case_insensitive(true)
                    .multi_line(true)
                    .build()
                    .unwrap()
            })
            .collect()
    }

    #[test]
    fn first_matching_pattern_wins() {
        let patterns = compile(&[
            r"Payment\s+Due\s+Date\s*:\s*(\S+)",
            r"Due\s+Date\s*:\s*(\S+)",
        ]);
        // Both patterns could match below; the first declared must win.
        let text = "Payment Due Date: 05-Jan-2025\nDue Date: 99-Dec-2099";
        assert_eq!(
            extract_field(text, &patterns),
            Some("05-Jan-2025".to_string())
        );
    }

    #[test]
    fn later_pattern_is_used_when_first_misses() {
        let patterns = compile(&[
            r"Payment\s+Due\s+Date\s*:\s*(\S+)",
            r"Due\s+Date\s*:\s*(\S+)",
        ]);
        let text = "Due Date: 15-Feb-2025";
        assert_eq!(
            extract_field(text, &patterns),
            Some("15-Feb-2025".to_string())
        );
    }

    #[test]
    fn capture_is_trimmed() {
        let patterns = compile(&[r"Total:\s*(.+)"]);
        assert_eq!(
            extract_field("Total:   1,234.00   ", &patterns),
            Some("1,234.00".to_string())
        );
    }

    #[test]
    fn matches_across_wrapped_lines() {
        let patterns = compile(&[r"Statement\s+Period\s*:\s*(\S+)"]);
        let text = "Statement\nPeriod: 01/01/2025";
        assert_eq!(extract_field(text, &patterns), Some("01/01/2025".to_string()));
    }

    #[test]
    fn no_match_returns_none() {
        let patterns = compile(&[r"Due\s+Date\s*:\s*(\S+)"]);
        assert_eq!(extract_field("no labels here", &patterns), None);
    }

    #[test]
    fn empty_pattern_list_returns_none() {
        assert_eq!(extract_field("anything", &[]), None);
    }
}
