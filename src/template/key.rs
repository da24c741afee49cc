use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{TemplateError, TemplateResult};

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateKey {
    List = 0,
    Show = 1,
    New = 2,
    Edit = 3,
    Delete = 4,
}

impl TemplateKey {
    /// Default match order, most specific first.
    pub const PRIORITY: [TemplateKey; 5] = [
        TemplateKey::Edit,
        TemplateKey::Delete,
        TemplateKey::New,
        TemplateKey::Show,
        TemplateKey::List,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Show => "show",
            Self::New => "new",
            Self::Edit => "edit",
            Self::Delete => "delete",
        }
    }

    pub fn default_pattern(self) -> &'static str {
        match self {
            Self::List => "/{prefix}",
            Self::Show => "/{prefix}/{id}",
            Self::New => "/{prefix}/new",
            Self::Edit => "/{prefix}/{id}/edit",
            Self::Delete => "/{prefix}/{id}/delete",
        }
    }
}

impl fmt::Display for TemplateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemplateKey {
    type Err = TemplateError;

    fn from_str(s: &str) -> TemplateResult<Self> {
        Self::PRIORITY
            .into_iter()
            .find(|key| key.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| TemplateError::InvalidKey { key: s.to_string() })
    }
}
