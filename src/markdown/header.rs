//! Embedded section header removal.

/// Marker that opens a second-level markdown header.
pub const SECTION_PREFIX: &str = "## ";

/// Remove a leading `## ` header line and the blank lines that follow it.
///
/// Leading blank lines before the header are dropped along with it. Only the
/// first non-blank line is considered; headers later in the body stay.
pub fn strip_header(text: &str) -> String {
    let mut lines = text.lines().skip_while(|l| l.trim().is_empty()).peekable();
    if !lines
        .peek()
        .is_some_and(|first| first.starts_with(SECTION_PREFIX))
    {
        return text.to_string();
    }
    lines.next();
    lines
        .skip_while(|l| l.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
