//! ASCII character classes shared by validation, compilation and matching.
//!
//! All classes are ASCII-only. Any byte >= 0x80 is outside every class, so a
//! path or template containing non-ASCII text is always rejected rather than
//! matched by a wider Unicode class.

pub const SEPARATOR: char = '/';
pub const PREFIX: &str = "prefix";
pub const ID: &str = "id";

/// Regex class for placeholder values; excludes the separator so a value
/// never spans two segments.
pub const VARIABLE_CLASS: &str = r"[A-Za-z0-9_\-.=:;]";
/// Regex class for raw input paths: variable characters plus the separator.
pub const INPUT_CLASS: &str = r"[A-Za-z0-9_\-.=:;/]";

const SEPARATOR_BYTE: u8 = SEPARATOR as u8;

#[inline]
pub fn is_variable_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'_' | b'-' | b'.' | b'=' | b':' | b';')
}

#[inline]
pub fn is_input_byte(b: u8) -> bool {
    is_variable_byte(b) || b == SEPARATOR_BYTE
}

#[inline]
pub fn is_template_byte(b: u8) -> bool {
    is_input_byte(b) || b == b'{' || b == b'}'
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    fn class_regex(class: &str) -> Regex {
        Regex::new(&format!("^{class}$")).unwrap()
    }

    #[test]
    fn variable_class_agrees_with_predicate_for_every_ascii_byte() {
        let re = class_regex(VARIABLE_CLASS);
        for b in 0u8..=127 {
            let s = (b as char).to_string();
            assert_eq!(re.is_match(&s), is_variable_byte(b), "byte {b}");
        }
    }

    #[test]
    fn input_class_agrees_with_predicate_for_every_ascii_byte() {
        let re = class_regex(INPUT_CLASS);
        for b in 0u8..=127 {
            let s = (b as char).to_string();
            assert_eq!(re.is_match(&s), is_input_byte(b), "byte {b}");
        }
    }

    #[test]
    fn separator_is_an_input_byte_but_not_a_variable_byte() {
        assert!(is_input_byte(b'/'));
        assert!(!is_variable_byte(b'/'));
        assert!(is_template_byte(b'{'));
        assert!(!is_input_byte(b'{'));
    }

    #[test]
    fn non_ascii_bytes_belong_to_no_class() {
        for b in 0x80u8..=0xff {
            assert!(!is_template_byte(b));
        }
    }
}
