use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PathError {
    #[error("path is empty")]
    Empty,
    #[error("path length {len} exceeds the maximum of {max}")]
    TooLong { len: usize, max: usize },
    #[error("path contains disallowed character '{character}' at index {index} in '{input}'")]
    DisallowedCharacter {
        input: String,
        character: char,
        index: usize,
    },
}

pub type PathResult<T> = Result<T, PathError>;
