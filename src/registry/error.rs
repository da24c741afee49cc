use thiserror::Error;

use crate::registry::RegistryOptionsError;
use crate::template::{TemplateError, TemplateKey};

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("template key '{key}' is not registered")]
    InvalidTemplateKey { key: String },
    #[error("template key '{key}' is registered more than once")]
    DuplicateKey { key: TemplateKey },
    #[error(transparent)]
    Template(#[from] TemplateError),
    #[error(transparent)]
    Options(#[from] RegistryOptionsError),
}

pub type RegistryResult<T> = Result<T, RegistryError>;
