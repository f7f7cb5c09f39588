//! Registry identifier validation helpers
//!
//! Sanity checks only: extraction records whatever token matched the label
//! pattern, and these helpers let callers flag suspicious values. They never
//! gate extraction.

/// UEI valid iff exactly 12 ASCII alphanumeric characters
pub fn is_valid_uei(uei: &str) -> bool {
    uei.len() == 12 && uei.bytes().all(|b| b.is_ascii_alphanumeric())
}

/// DUNS valid iff exactly 9 ASCII digits
pub fn is_valid_duns(duns: &str) -> bool {
    duns.len() == 9 && duns.bytes().all(|b| b.is_ascii_digit())
}

/// NAICS code valid iff exactly 6 ASCII digits
pub fn is_valid_naics(naics: &str) -> bool {
    naics.len() == 6 && naics.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uei_validation() {
        assert!(is_valid_uei("ABC123DEF456"));
        assert!(is_valid_uei("abc123def456"));
        assert!(!is_valid_uei("ABC123DEF45"));
        assert!(!is_valid_uei("ABC123DEF4567"));
        assert!(!is_valid_uei("ABC123DEF45!"));
        assert!(!is_valid_uei(""));
    }

    #[test]
    fn test_duns_validation() {
        assert!(is_valid_duns("123456789"));
        assert!(!is_valid_duns("12345678"));
        assert!(!is_valid_duns("1234567890"));
        assert!(!is_valid_duns("12345678a"));
    }

    #[test]
    fn test_naics_validation() {
        assert!(is_valid_naics("541511"));
        assert!(!is_valid_naics("54151"));
        assert!(!is_valid_naics("5415111"));
        assert!(!is_valid_naics("54151S"));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn valid_uei_agrees_with_char_rules(s in "\\PC*") {
            let expected = s.len() == 12 && s.bytes().all(|b| b.is_ascii_alphanumeric());
            prop_assert_eq!(is_valid_uei(&s), expected);
        }

        #[test]
        fn nine_digit_strings_are_valid_duns(s in "[0-9]{9}") {
            prop_assert!(is_valid_duns(&s));
        }
    }
}
