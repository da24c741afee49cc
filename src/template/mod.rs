mod cache;
mod compiled;
mod error;
mod key;
mod validate;

pub use cache::{CompileCache, DEFAULT_COMPILE_CACHE_CAPACITY};
pub use compiled::{
    CompiledPattern, CompiledTemplate, Template, VariableNames, compile_pattern,
    compile_template, compile_templates,
};
pub use error::{TemplateError, TemplateResult, TemplateRule};
pub use key::TemplateKey;
pub use validate::validate_template;
