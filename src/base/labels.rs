//! Label text helpers shared by the readers.

/// Join label fragments into one single-line label.
///
/// Each fragment is trimmed, empty fragments are dropped, the rest are joined
/// with a single space and embedded newlines become spaces.
pub fn join_fragments<I, S>(fragments: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let joined = fragments
        .into_iter()
        .map(|f| f.as_ref().trim().to_string())
        .filter(|f| !f.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    joined
        .split(['\r', '\n'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Split a multi-line label into its non-empty, trimmed items.
pub fn split_items(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Name for an association the source model left unnamed.
pub fn default_association_name(
    source_type: &str,
    source_role: Option<&str>,
    target_type: &str,
    target_role: Option<&str>,
) -> String {
    format!(
        "{source_type}::{}-{target_type}::{}",
        source_role.unwrap_or_default(),
        target_role.unwrap_or_default()
    )
}
