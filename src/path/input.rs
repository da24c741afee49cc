use crate::charset::is_input_byte;
use crate::path::{PathError, PathResult};

/// Rejects empty input and anything outside the input character class.
#[inline]
pub fn validate_input(input: &str) -> PathResult<()> {
    if input.is_empty() {
        return Err(PathError::Empty);
    }

    match input.char_indices().find(|&(_, c)| !c.is_ascii() || !is_input_byte(c as u8)) {
        Some((index, character)) => Err(PathError::DisallowedCharacter {
            input: input.to_string(),
            character,
            index,
        }),
        None => Ok(()),
    }
}

/// Length guard for untrusted paths, applied before any matching work.
#[inline]
pub fn check_input_length(input: &str, max: usize) -> PathResult<()> {
    if input.len() > max {
        return Err(PathError::TooLong {
            len: input.len(),
            max,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_paths_built_from_input_characters() {
        validate_input("/user/42.xml").unwrap();
        validate_input("/a_b/c-d/e=f:g;h").unwrap();
    }

    #[test]
    fn rejects_empty_input() {
        assert_eq!(validate_input(""), Err(PathError::Empty));
    }

    #[test]
    fn reports_first_disallowed_character() {
        let err = validate_input("/user/4 2?x").unwrap_err();
        assert_eq!(
            err,
            PathError::DisallowedCharacter {
                input: "/user/4 2?x".to_string(),
                character: ' ',
                index: 7,
            }
        );
    }

    #[test]
    fn rejects_non_ascii_characters() {
        match validate_input("/caf\u{e9}").unwrap_err() {
            PathError::DisallowedCharacter { character, index, .. } => {
                assert_eq!(character, '\u{e9}');
                assert_eq!(index, 4);
            }
            other => panic!("expected DisallowedCharacter, got {other:?}"),
        }
    }

    #[test]
    fn length_guard_is_inclusive() {
        check_input_length("/abc", 4).unwrap();
        assert_eq!(
            check_input_length("/abcd", 4),
            Err(PathError::TooLong { len: 5, max: 4 })
        );
    }
}
