use crate::merge::MergeError;
use crate::path::PathError;
use crate::registry::{RegistryError, RegistryOptionsError};
use crate::template::TemplateError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PathTemplateError {
    #[error(transparent)]
    Template(#[from] TemplateError),
    #[error(transparent)]
    Path(#[from] PathError),
    #[error(transparent)]
    Merge(#[from] MergeError),
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

impl From<RegistryOptionsError> for PathTemplateError {
    fn from(err: RegistryOptionsError) -> Self {
        Self::Registry(RegistryError::Options(err))
    }
}

pub type PathTemplateResult<T> = Result<T, PathTemplateError>;
