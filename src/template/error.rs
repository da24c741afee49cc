use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum TemplateRule {
    #[error("template cannot be empty")]
    Empty,
    #[error("template must start with '/'")]
    MissingLeadingSeparator,
    #[error("template cannot end with '/'")]
    TrailingSeparator,
    #[error("placeholders cannot be next to each other")]
    AdjacentPlaceholders,
    #[error("placeholders cannot be empty")]
    EmptyPlaceholder,
    #[error("template may only contain [A-Za-z0-9_-.=:;/{{}}]")]
    InvalidCharacters,
    #[error("template braces are unbalanced or nested")]
    UnbalancedBraces,
    #[error("placeholder names must be unique within a template")]
    DuplicatePlaceholder,
}

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("invalid template '{pattern}': {rule}")]
    Invalid { pattern: String, rule: TemplateRule },
    #[error("template '{pattern}' failed to compile: {reason}")]
    Regex { pattern: String, reason: String },
    #[error("invalid template key '{key}'")]
    InvalidKey { key: String },
}

impl TemplateError {
    pub fn rule(&self) -> Option<TemplateRule> {
        match self {
            Self::Invalid { rule, .. } => Some(*rule),
            _ => None,
        }
    }
}

pub type TemplateResult<T> = Result<T, TemplateError>;
