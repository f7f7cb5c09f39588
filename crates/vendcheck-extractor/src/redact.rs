//! PII redaction utility
//!
//! Shared by the extractor and the (out-of-core) storage layer: submission
//! hygiene (R5 in the reference rule pack) requires contact information to
//! be stored in redacted form.

use crate::patterns;

/// Replacement token for email-shaped spans
pub const EMAIL_TOKEN: &str = "[EMAIL_REDACTED]";

/// Replacement token for phone-shaped spans
pub const PHONE_TOKEN: &str = "[PHONE_REDACTED]";

/// Replace every email-shaped and phone-shaped span with a fixed token.
///
/// Emails are rewritten first so a phone layout can never match across a
/// half-redacted email, then the five phone layouts are applied in order.
/// The replacement tokens contain neither digits nor `@`, which makes the
/// whole substitution idempotent: redacting already-redacted text is a
/// no-op.
pub fn redact(text: &str) -> String {
    let mut redacted = patterns::EMAIL.replace_all(text, EMAIL_TOKEN).into_owned();
    for layout in patterns::PHONE_LAYOUTS.iter() {
        redacted = layout.replace_all(&redacted, PHONE_TOKEN).into_owned();
    }
    redacted
}

/// Every email-shaped token in `text`, in order of appearance
pub fn find_emails(text: &str) -> Vec<&str> {
    patterns::EMAIL.find_iter(text).map(|m| m.as_str()).collect()
}

/// Every phone-shaped token in `text`, grouped by layout
/// (parenthesized, hyphenated, dotted, bare, +1-prefixed)
pub fn find_phones(text: &str) -> Vec<&str> {
    patterns::PHONE_LAYOUTS
        .iter()
        .flat_map(|layout| layout.find_iter(text).map(|m| m.as_str()))
        .collect()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn redact_is_idempotent(text in "\\PC{0,80}") {
            let once = redact(&text);
            prop_assert_eq!(redact(&once), once);
        }

        #[test]
        fn redacted_text_contains_no_email_shape(
            user in "[a-z]{1,8}", host in "[a-z]{1,8}"
        ) {
            let text = format!("contact {user}@{host}.example today");
            prop_assert!(!redact(&text).contains('@'));
        }
    }
}
