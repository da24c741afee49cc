use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_MAX_INPUT_LENGTH: usize = 2048;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegistryOptions {
    /// Upper bound on the byte length of a path passed to `resolve`.
    pub max_input_length: usize,
}

impl Default for RegistryOptions {
    fn default() -> Self {
        Self {
            max_input_length: DEFAULT_MAX_INPUT_LENGTH,
        }
    }
}

impl RegistryOptions {
    pub fn builder() -> RegistryOptionsBuilder {
        RegistryOptionsBuilder::default()
    }

    pub fn validate(&self) -> Result<(), RegistryOptionsError> {
        if self.max_input_length == 0 {
            return Err(RegistryOptionsError::MaxInputLengthInvalid { provided: 0 });
        }
        Ok(())
    }
}

#[derive(Debug, Default, Clone)]
pub struct RegistryOptionsBuilder {
    options: RegistryOptions,
}

impl RegistryOptionsBuilder {
    pub fn max_input_length(mut self, value: usize) -> Self {
        self.options.max_input_length = value;
        self
    }

    pub fn build(self) -> Result<RegistryOptions, RegistryOptionsError> {
        let options = self.options;
        options.validate()?;
        Ok(options)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryOptionsError {
    #[error("max_input_length must be at least 1 (got {provided})")]
    MaxInputLengthInvalid { provided: usize },
}
