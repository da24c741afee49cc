use memchr::memrchr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtensionSplit<'a> {
    pub base: &'a str,
    pub extension: Option<&'a str>,
}

/// Splits off the text after the last `.`.
///
/// A dot at index 0 or as the final character is not a delimiter, so
/// `".42"` and `"42."` come back unchanged with no extension.
#[tracing::instrument(level = "trace", fields(input=%input))]
pub fn extract_extension(input: &str) -> ExtensionSplit<'_> {
    match memrchr(b'.', input.as_bytes()) {
        Some(dot) if dot > 0 && dot + 1 < input.len() => ExtensionSplit {
            base: &input[..dot],
            extension: Some(&input[dot + 1..]),
        },
        _ => ExtensionSplit {
            base: input,
            extension: None,
        },
    }
}
