pub mod charset;
pub mod errors;
pub mod matcher;
pub mod merge;
pub mod path;
pub mod registry;
pub mod template;

pub use charset::{ID, PREFIX, SEPARATOR};
pub use errors::{PathTemplateError, PathTemplateResult};
pub use matcher::{Bindings, TemplateMatch, match_path};
pub use merge::{MergeError, merge_template};
pub use path::{ExtensionSplit, PathError, extract_extension};
pub use registry::{RegistryError, RegistryOptions, TemplateRegistry, default_templates};
pub use template::{
    CompileCache, CompiledTemplate, Template, TemplateError, TemplateKey, TemplateRule,
    compile_templates, validate_template,
};
