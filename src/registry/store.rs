use hashbrown::HashMap as FastHashMap;

use crate::errors::PathTemplateResult;
use crate::matcher::{TemplateMatch, match_path};
use crate::merge::merge_template;
use crate::path::{PathResult, check_input_length};
use crate::registry::{
    RegistryError, RegistryMetrics, RegistryOptions, RegistryResult, default_templates,
};
use crate::template::{
    CompileCache, CompiledTemplate, Template, TemplateKey, TemplateResult, compile_template,
    validate_template,
};

/// An ordered, immutable set of compiled templates.
///
/// Order is match priority. Every template is validated and compiled when
/// the registry is built, so `resolve` never compiles.
#[derive(Debug)]
pub struct TemplateRegistry {
    options: RegistryOptions,
    templates: Vec<CompiledTemplate>,
    index: FastHashMap<TemplateKey, usize>,
    metrics: RegistryMetrics,
}

impl TemplateRegistry {
    pub fn new<I>(templates: I, options: Option<RegistryOptions>) -> RegistryResult<Self>
    where
        I: IntoIterator<Item = Template>,
    {
        Self::build(templates, options, compile_template)
    }

    /// Same as [`new`](Self::new) but reuses patterns already held by `cache`.
    pub fn with_cache<I>(
        templates: I,
        options: Option<RegistryOptions>,
        cache: &CompileCache,
    ) -> RegistryResult<Self>
    where
        I: IntoIterator<Item = Template>,
    {
        Self::build(templates, options, |template| cache.compile(template))
    }

    pub fn with_defaults(options: Option<RegistryOptions>) -> RegistryResult<Self> {
        Self::new(default_templates(), options)
    }

    fn build<I, F>(templates: I, options: Option<RegistryOptions>, compile: F) -> RegistryResult<Self>
    where
        I: IntoIterator<Item = Template>,
        F: Fn(&Template) -> TemplateResult<CompiledTemplate>,
    {
        let options = options.unwrap_or_default();
        options.validate()?;

        let templates: Vec<Template> = templates.into_iter().collect();
        let mut index = FastHashMap::with_capacity(templates.len());

        for (pos, template) in templates.iter().enumerate() {
            validate_template(&template.pattern)?;
            if index.insert(template.key, pos).is_some() {
                return Err(RegistryError::DuplicateKey { key: template.key });
            }
        }

        let compiled = templates
            .iter()
            .map(compile)
            .collect::<TemplateResult<Vec<_>>>()?;

        tracing::debug!(templates = compiled.len(), "template registry built");

        Ok(Self {
            options,
            templates: compiled,
            index,
            metrics: RegistryMetrics::default(),
        })
    }

    /// Resolves an inbound path to the first matching template.
    ///
    /// `Ok(None)` means the path is unresolved; errors are reserved for
    /// input that is empty, too long, or contains disallowed characters.
    pub fn resolve(&self, input: &str) -> PathResult<Option<TemplateMatch>> {
        check_input_length(input, self.options.max_input_length)?;
        let found = match_path(input, &self.templates)?;
        self.metrics.record(found.is_some());
        Ok(found)
    }

    /// Builds an outbound path from the template registered under `key`.
    pub fn merge<I, K, V>(&self, key: TemplateKey, values: I) -> PathTemplateResult<String>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let template = self.template(key)?;
        Ok(merge_template(template.pattern(), values)?)
    }

    pub fn template(&self, key: TemplateKey) -> RegistryResult<&CompiledTemplate> {
        self.index
            .get(&key)
            .map(|&pos| &self.templates[pos])
            .ok_or_else(|| RegistryError::InvalidTemplateKey {
                key: key.to_string(),
            })
    }

    /// Parses `name` and confirms the key is registered here.
    pub fn check_key(&self, name: &str) -> RegistryResult<TemplateKey> {
        let key = name
            .parse::<TemplateKey>()
            .map_err(|_| RegistryError::InvalidTemplateKey {
                key: name.to_string(),
            })?;
        if !self.contains_key(key) {
            return Err(RegistryError::InvalidTemplateKey {
                key: name.to_string(),
            });
        }
        Ok(key)
    }

    pub fn contains_key(&self, key: TemplateKey) -> bool {
        self.index.contains_key(&key)
    }

    pub fn keys(&self) -> impl Iterator<Item = TemplateKey> + '_ {
        self.templates.iter().map(CompiledTemplate::key)
    }

    pub fn templates(&self) -> &[CompiledTemplate] {
        &self.templates
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn options(&self) -> &RegistryOptions {
        &self.options
    }

    pub fn metrics(&self) -> &RegistryMetrics {
        &self.metrics
    }
}

impl Default for TemplateRegistry {
    fn default() -> Self {
        Self::with_defaults(None).expect("default templates should compile")
    }
}
