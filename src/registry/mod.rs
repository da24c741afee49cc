mod defaults;
mod error;
mod options;
mod stats;
mod store;

pub use defaults::default_templates;
pub use error::{RegistryError, RegistryResult};
pub use options::{
    DEFAULT_MAX_INPUT_LENGTH, RegistryOptions, RegistryOptionsBuilder, RegistryOptionsError,
};
pub use stats::RegistryMetrics;
pub use store::TemplateRegistry;
