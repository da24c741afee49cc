use std::collections::HashMap;

use regex::Regex;

use crate::template::{CompiledTemplate, TemplateKey};

pub type Bindings = HashMap<String, String>;

/// A successful match of an input path against one compiled template.
#[derive(Debug, Clone)]
pub struct TemplateMatch {
    template: CompiledTemplate,
    bindings: Bindings,
    extension: Option<String>,
}

impl TemplateMatch {
    pub(crate) fn new(
        template: CompiledTemplate,
        bindings: Bindings,
        extension: Option<String>,
    ) -> Self {
        Self {
            template,
            bindings,
            extension,
        }
    }

    pub fn key(&self) -> TemplateKey {
        self.template.key()
    }

    pub fn pattern(&self) -> &str {
        self.template.pattern()
    }

    pub fn matcher(&self) -> &Regex {
        self.template.matcher()
    }

    pub fn variable_names(&self) -> &[String] {
        self.template.variable_names()
    }

    pub fn template(&self) -> &CompiledTemplate {
        &self.template
    }

    pub fn bindings(&self) -> &Bindings {
        &self.bindings
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.bindings.get(name).map(String::as_str)
    }

    pub fn extension(&self) -> Option<&str> {
        self.extension.as_deref()
    }

    pub fn into_bindings(self) -> Bindings {
        self.bindings
    }
}
