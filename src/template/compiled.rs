use std::sync::Arc;

use regex::Regex;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::{TemplateError, TemplateKey, TemplateResult};
use crate::charset::{INPUT_CLASS, SEPARATOR, VARIABLE_CLASS};

pub type VariableNames = SmallVec<[String; 4]>;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Template {
    pub key: TemplateKey,
    pub pattern: String,
}

impl Template {
    pub fn new<S: Into<String>>(key: TemplateKey, pattern: S) -> Self {
        Self {
            key,
            pattern: pattern.into(),
        }
    }
}

/// Key-independent compiled form of a pattern string.
#[derive(Debug)]
pub struct CompiledPattern {
    pattern: String,
    matcher: Regex,
    trial: Regex,
    variable_names: VariableNames,
}

impl CompiledPattern {
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn matcher(&self) -> &Regex {
        &self.matcher
    }

    /// The matcher followed by an optional tail of further input
    /// characters after a separator.
    pub fn trial(&self) -> &Regex {
        &self.trial
    }

    pub fn variable_names(&self) -> &[String] {
        &self.variable_names
    }

    pub fn group_count(&self) -> usize {
        self.matcher.captures_len() - 1
    }
}

#[derive(Debug, Clone)]
pub struct CompiledTemplate {
    key: TemplateKey,
    compiled: Arc<CompiledPattern>,
}

impl CompiledTemplate {
    pub(crate) fn from_shared(key: TemplateKey, compiled: Arc<CompiledPattern>) -> Self {
        Self { key, compiled }
    }

    pub fn key(&self) -> TemplateKey {
        self.key
    }

    pub fn pattern(&self) -> &str {
        self.compiled.pattern()
    }

    pub fn matcher(&self) -> &Regex {
        self.compiled.matcher()
    }

    pub fn trial(&self) -> &Regex {
        self.compiled.trial()
    }

    pub fn variable_names(&self) -> &[String] {
        self.compiled.variable_names()
    }

    pub fn group_count(&self) -> usize {
        self.compiled.group_count()
    }

    pub fn shares_pattern_with(&self, other: &CompiledTemplate) -> bool {
        Arc::ptr_eq(&self.compiled, &other.compiled)
    }
}

/// Compiles a pattern without validating it; callers run
/// [`validate_template`](super::validate_template) first.
#[tracing::instrument(level = "trace", fields(pattern=%pattern))]
pub fn compile_pattern(pattern: &str) -> TemplateResult<CompiledPattern> {
    let mut source = String::with_capacity(pattern.len() * 2);
    let mut variable_names = VariableNames::new();

    // even parts are literals, odd parts are placeholder names
    for (idx, part) in pattern.split(['{', '}']).enumerate() {
        if idx % 2 == 0 {
            source.push_str(&regex::escape(part));
        } else {
            variable_names.push(part.to_string());
            source.push('(');
            source.push_str(VARIABLE_CLASS);
            source.push_str("+)");
        }
    }

    let separator = regex::escape(&SEPARATOR.to_string());
    let matcher = build_regex(pattern, &format!("^(?:{source})$"))?;
    let trial = build_regex(
        pattern,
        &format!("^(?:{source})(?:{separator}{INPUT_CLASS}+|$)$"),
    )?;

    Ok(CompiledPattern {
        pattern: pattern.to_string(),
        matcher,
        trial,
        variable_names,
    })
}

pub fn compile_template(template: &Template) -> TemplateResult<CompiledTemplate> {
    let compiled = compile_pattern(&template.pattern)?;
    Ok(CompiledTemplate::from_shared(template.key, Arc::new(compiled)))
}

/// Compiles templates one by one, preserving their order.
pub fn compile_templates(templates: &[Template]) -> TemplateResult<Vec<CompiledTemplate>> {
    templates.iter().map(compile_template).collect()
}

fn build_regex(pattern: &str, source: &str) -> TemplateResult<Regex> {
    Regex::new(source).map_err(|err| TemplateError::Regex {
        pattern: pattern.to_string(),
        reason: err.to_string(),
    })
}
