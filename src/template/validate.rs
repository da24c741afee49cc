use memchr::memmem;
use smallvec::SmallVec;

use super::{TemplateError, TemplateResult, TemplateRule};
use crate::charset::{SEPARATOR, is_template_byte};

/// Checks a template for structural well-formedness.
///
/// Rules run in a fixed order and the first violation is reported:
/// empty, leading separator, trailing separator, adjacent placeholders,
/// empty placeholder, character set, brace balance, duplicate names.
#[tracing::instrument(level = "trace", fields(pattern=%pattern))]
pub fn validate_template(pattern: &str) -> TemplateResult<()> {
    check_rules(pattern).map_err(|rule| TemplateError::Invalid {
        pattern: pattern.to_string(),
        rule,
    })
}

fn check_rules(pattern: &str) -> Result<(), TemplateRule> {
    let bytes = pattern.as_bytes();
    let sep = SEPARATOR as u8;

    if bytes.is_empty() {
        return Err(TemplateRule::Empty);
    }
    if bytes[0] != sep {
        return Err(TemplateRule::MissingLeadingSeparator);
    }
    if bytes[bytes.len() - 1] == sep {
        return Err(TemplateRule::TrailingSeparator);
    }
    if memmem::find(bytes, b"}{").is_some() {
        return Err(TemplateRule::AdjacentPlaceholders);
    }
    if memmem::find(bytes, b"{}").is_some() {
        return Err(TemplateRule::EmptyPlaceholder);
    }
    if !bytes.iter().copied().all(is_template_byte) {
        return Err(TemplateRule::InvalidCharacters);
    }

    let names = placeholder_names(pattern)?;
    for (i, name) in names.iter().enumerate() {
        if names[..i].contains(name) {
            return Err(TemplateRule::DuplicatePlaceholder);
        }
    }

    Ok(())
}

fn placeholder_names(pattern: &str) -> Result<SmallVec<[&str; 4]>, TemplateRule> {
    let mut names = SmallVec::new();
    let mut open: Option<usize> = None;

    for (idx, b) in pattern.bytes().enumerate() {
        match (b, open) {
            (b'{', None) => open = Some(idx + 1),
            (b'}', Some(start)) => {
                names.push(&pattern[start..idx]);
                open = None;
            }
            (b'{', Some(_)) | (b'}', None) => return Err(TemplateRule::UnbalancedBraces),
            _ => {}
        }
    }

    if open.is_some() {
        return Err(TemplateRule::UnbalancedBraces);
    }

    Ok(names)
}
