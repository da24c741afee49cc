use crate::matcher::{Bindings, TemplateMatch};
use crate::path::{PathResult, extract_extension, validate_input};
use crate::template::CompiledTemplate;

/// Matches `input` against `templates` in order; the first full match wins.
///
/// Returns `Ok(None)` when no template applies. Only malformed input is an
/// error. No length limit is applied here, see
/// [`TemplateRegistry::resolve`](crate::registry::TemplateRegistry::resolve).
#[tracing::instrument(level = "trace", skip(templates), fields(input=%input, templates=templates.len() as u64))]
pub fn match_path(input: &str, templates: &[CompiledTemplate]) -> PathResult<Option<TemplateMatch>> {
    validate_input(input)?;

    let split = extract_extension(input);

    for template in templates {
        if template.group_count() != template.variable_names().len() {
            tracing::warn!(
                pattern = template.pattern(),
                groups = template.group_count(),
                names = template.variable_names().len(),
                "skipping template with mismatched capture groups"
            );
            continue;
        }

        let Some(caps) = template.trial().captures(split.base) else {
            continue;
        };

        let bindings: Bindings = caps
            .iter()
            .skip(1)
            .zip(template.variable_names())
            .filter_map(|(group, name)| group.map(|m| (name.clone(), m.as_str().to_string())))
            .collect();

        tracing::debug!(key = %template.key(), pattern = template.pattern(), "template matched");

        return Ok(Some(TemplateMatch::new(
            template.clone(),
            bindings,
            split.extension.map(str::to_string),
        )));
    }

    tracing::trace!("no template matched");
    Ok(None)
}
