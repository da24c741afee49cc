use memchr::memchr_iter;

use super::{MergeError, MergeResult};

/// Substitutes `{name}` placeholders in `pattern` with the given values.
///
/// Every occurrence of a placeholder is replaced. Values whose name does not
/// appear in the pattern are ignored. The merge fails unless the number of
/// names replaced equals the number of `{` in the pattern. The output is not
/// validated against the template grammar.
#[tracing::instrument(level = "trace", skip(values), fields(pattern=%pattern))]
pub fn merge_template<I, K, V>(pattern: &str, values: I) -> MergeResult<String>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    if pattern.is_empty() {
        return Err(MergeError::EmptyTemplate);
    }

    let expected = memchr_iter(b'{', pattern.as_bytes()).count();
    let mut merged = pattern.to_string();
    let mut replaced = 0usize;

    for (name, value) in values {
        let placeholder = format!("{{{}}}", name.as_ref());
        if merged.contains(&placeholder) {
            merged = merged.replace(&placeholder, value.as_ref());
            replaced += 1;
        }
    }

    if replaced != expected {
        return Err(MergeError::Incomplete { expected, replaced });
    }

    Ok(merged)
}
