mod error;
mod extension;
mod input;

pub use error::{PathError, PathResult};
pub use extension::{ExtensionSplit, extract_extension};
pub use input::{check_input_length, validate_input};
