mod resolver;
mod result;

pub use resolver::match_path;
pub use result::{Bindings, TemplateMatch};
