mod error;
mod substitute;

pub use error::{MergeError, MergeResult};
pub use substitute::merge_template;
