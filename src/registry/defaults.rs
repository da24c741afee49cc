use crate::template::{Template, TemplateKey};

/// The five canonical templates in match priority order.
pub fn default_templates() -> Vec<Template> {
    TemplateKey::PRIORITY
        .into_iter()
        .map(|key| Template::new(key, key.default_pattern()))
        .collect()
}
