//! Compiled field and PII patterns
//!
//! All patterns are compiled once via `Lazy`. The literals are fixed at
//! build time, so the `expect` calls can only fire on a broken literal.

use once_cell::sync::Lazy;
use regex::Regex;

fn compiled(pattern: &str) -> Regex {
    Regex::new(pattern).expect("pattern literal must compile")
}

/// `UEI:` label followed by a 12-char alphanumeric token
pub static UEI: Lazy<Regex> = Lazy::new(|| compiled(r"(?i)UEI:\s*([A-Z0-9]{12})"));

/// `DUNS:` label followed by a 9-digit token
pub static DUNS: Lazy<Regex> = Lazy::new(|| compiled(r"(?i)DUNS:\s*(\d{9})"));

/// `NAICS:` label followed by a comma-separated code list
pub static NAICS: Lazy<Regex> = Lazy::new(|| compiled(r"(?i)NAICS:\s*([0-9,\s]+)"));

/// `SAM.gov:` label followed by the free-text remainder of the line
pub static SAM_STATUS: Lazy<Regex> = Lazy::new(|| compiled(r"(?i)SAM\.gov:\s*([^\n]+)"));

/// Email-shaped token
pub static EMAIL: Lazy<Regex> =
    Lazy::new(|| compiled(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b"));

/// Flexible phone shape used for contact extraction: optional parens,
/// separators `-`, `.`, or space between the groups
pub static PHONE: Lazy<Regex> = Lazy::new(|| compiled(r"\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}"));

/// Past-performance labels, each capturing the rest of its line
pub static PP_CUSTOMER: Lazy<Regex> = Lazy::new(|| compiled(r"(?i)Customer:\s*([^\n]+)"));
/// See [`PP_CUSTOMER`]
pub static PP_CONTRACT: Lazy<Regex> = Lazy::new(|| compiled(r"(?i)Contract:\s*([^\n]+)"));
/// See [`PP_CUSTOMER`]
pub static PP_VALUE: Lazy<Regex> = Lazy::new(|| compiled(r"(?i)Value:\s*([^\n]+)"));
/// See [`PP_CUSTOMER`]
pub static PP_PERIOD: Lazy<Regex> = Lazy::new(|| compiled(r"(?i)Period:\s*([^\n]+)"));
/// See [`PP_CUSTOMER`]
pub static PP_CONTACT: Lazy<Regex> = Lazy::new(|| compiled(r"(?i)Contact:\s*([^\n]+)"));

/// Phone layouts recognized by the redactor, applied in this order:
/// parenthesized area code, hyphenated, dotted, bare 10-digit, +1-prefixed.
pub static PHONE_LAYOUTS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        compiled(r"\(\d{3}\)\s*\d{3}-\d{4}"),      // (415) 555-0100
        compiled(r"\d{3}-\d{3}-\d{4}"),            // 415-555-0100
        compiled(r"\d{3}\.\d{3}\.\d{4}"),          // 415.555.0100
        compiled(r"\d{10}"),                       // 4155550100
        compiled(r"\+1\s*\d{3}\s*\d{3}\s*\d{4}"),  // +1 415 555 0100
    ]
});
