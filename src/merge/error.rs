use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MergeError {
    #[error("cannot merge into an empty template")]
    EmptyTemplate,
    #[error("failed merge: template has {expected} variables but only {replaced} were replaced")]
    Incomplete { expected: usize, replaced: usize },
}

pub type MergeResult<T> = Result<T, MergeError>;
