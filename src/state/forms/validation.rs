//! Per-field validation rules
//!
//! Each rule answers "is this value in error?" for exactly one field. Rules are
//! kept in a table keyed by [`Field`] so adding a field only adds a row.

use super::field::Field;
use regex::Regex;
use std::sync::LazyLock;

/// A validation rule: returns `true` when the value is in error
pub type Rule = fn(&str) -> bool;

static DIGIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]").expect("digit pattern is valid"));

static MOBILE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10}$").expect("mobile pattern is valid"));

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern is valid"));

const MIN_ADDRESS_LEN: usize = 10;

/// Rule table, one row per field in display order
const RULES: [(Field, Rule); Field::COUNT] = [
    (Field::Name, name_has_error),
    (Field::Address, address_has_error),
    (Field::Mobile, mobile_has_error),
    (Field::Email, email_has_error),
    (Field::Gender, is_unselected),
    (Field::DateOfBirth, is_unselected),
    (Field::Course, is_unselected),
];

/// Look up the rule for a field
pub fn rule_for(field: Field) -> Rule {
    RULES[field.index()].1
}

/// Evaluate a field's rule against a value
pub fn has_error(field: Field, value: &str) -> bool {
    rule_for(field)(value)
}

// Only digits are rejected; no minimum length is applied.
fn name_has_error(value: &str) -> bool {
    DIGIT.is_match(value)
}

fn address_has_error(value: &str) -> bool {
    value.chars().count() < MIN_ADDRESS_LEN
}

fn mobile_has_error(value: &str) -> bool {
    !MOBILE.is_match(value)
}

fn email_has_error(value: &str) -> bool {
    !EMAIL.is_match(value)
}

fn is_unselected(value: &str) -> bool {
    value.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_table_rows_follow_field_order() {
        for (i, (field, _)) in RULES.iter().enumerate() {
            assert_eq!(field.index(), i);
        }
    }

    mod name {
        use super::*;

        #[test]
        fn test_digit_is_error() {
            assert!(has_error(Field::Name, "John3"));
            assert!(has_error(Field::Name, "7"));
        }

        #[test]
        fn test_short_name_is_accepted() {
            assert!(!has_error(Field::Name, "Jo"));
        }

        #[test]
        fn test_empty_name_is_not_flagged() {
            assert!(!has_error(Field::Name, ""));
        }

        #[test]
        fn test_non_ascii_digits_are_not_flagged() {
            assert!(!has_error(Field::Name, "Anu ٣"));
        }
    }

    mod address {
        use super::*;

        #[test]
        fn test_nine_chars_is_error() {
            assert!(has_error(Field::Address, "123456789"));
        }

        #[test]
        fn test_ten_chars_is_ok() {
            assert!(!has_error(Field::Address, "1234567890"));
        }

        #[test]
        fn test_counts_characters_not_bytes() {
            // 9 characters, more than 10 bytes
            assert!(has_error(Field::Address, "éééééééée"));
        }
    }

    mod mobile {
        use super::*;

        #[test]
        fn test_exactly_ten_digits_is_ok() {
            assert!(!has_error(Field::Mobile, "9876543210"));
        }

        #[test]
        fn test_rejects_wrong_shapes() {
            assert!(has_error(Field::Mobile, "12345"));
            assert!(has_error(Field::Mobile, "98765432101"));
            assert!(has_error(Field::Mobile, "98765abcde"));
            assert!(has_error(Field::Mobile, ""));
        }
    }

    mod email {
        use super::*;

        #[test]
        fn test_minimal_address_is_ok() {
            assert!(!has_error(Field::Email, "a@b.co"));
        }

        #[test]
        fn test_rejects_wrong_shapes() {
            assert!(has_error(Field::Email, "a@b"));
            assert!(has_error(Field::Email, "ab.com"));
            assert!(has_error(Field::Email, ""));
        }

        #[test]
        fn test_shape_check_is_unanchored() {
            assert!(!has_error(Field::Email, "contact: a@b.co please"));
        }
    }

    mod selections {
        use super::*;

        #[test]
        fn test_empty_is_error() {
            assert!(has_error(Field::Gender, ""));
            assert!(has_error(Field::DateOfBirth, ""));
            assert!(has_error(Field::Course, ""));
        }

        #[test]
        fn test_any_value_is_ok() {
            assert!(!has_error(Field::Gender, "Other"));
            assert!(!has_error(Field::DateOfBirth, "2099-12-31"));
            assert!(!has_error(Field::Course, "Commerce"));
        }
    }
}
