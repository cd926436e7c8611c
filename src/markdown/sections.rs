//! Split a combined instruction document into its general block and `## ` sections.

use super::header::SECTION_PREFIX;

/// Longest description taken from a body line when no `Description:` line exists.
const MAX_DESCRIPTION_CHARS: usize = 100;

const DESCRIPTION_PREFIX: &str = "Description:";

fn is_section_header(line: &str) -> bool {
    line.starts_with(SECTION_PREFIX)
}

/// Trimmed text after `## `; `None` for other lines and bare `## ` lines.
fn header_name(line: &str) -> Option<&str> {
    line.strip_prefix(SECTION_PREFIX)
        .map(str::trim)
        .filter(|name| !name.is_empty())
}

/// Drop leading and trailing blank lines.
pub fn trim_blank_lines<'a>(lines: &'a [&'a str]) -> &'a [&'a str] {
    let Some(start) = lines.iter().position(|l| !l.trim().is_empty()) else {
        return &[];
    };
    let end = lines
        .iter()
        .rposition(|l| !l.trim().is_empty())
        .map_or(lines.len(), |i| i + 1);
    &lines[start..end]
}

/// Lines before the first `## ` header.
pub fn general_block<'a>(lines: &[&'a str]) -> Vec<&'a str> {
    lines
        .iter()
        .take_while(|l| !is_section_header(l))
        .copied()
        .collect()
}

/// Names of all `## ` sections in document order, without repeats.
pub fn section_names(lines: &[&str]) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for name in lines.iter().filter_map(|l| header_name(l)) {
        if !names.iter().any(|n| n == name) {
            names.push(name.to_string());
        }
    }
    names
}

/// Lines of the first section whose header matches `name` case-insensitively.
///
/// The header line is included. The section ends at the next `## ` header or
/// end of input. Returns `None` if no header matches.
pub fn extract_section<'a>(lines: &[&'a str], name: &str) -> Option<Vec<&'a str>> {
    let wanted = name.trim().to_lowercase();
    let start = lines
        .iter()
        .position(|l| header_name(l).is_some_and(|n| n.to_lowercase() == wanted))?;
    let body = lines[start + 1..]
        .iter()
        .take_while(|l| !is_section_header(l))
        .copied();
    Some(std::iter::once(lines[start]).chain(body).collect())
}

/// Description for a prompt section, and the section lines with any
/// `Description:` line removed.
///
/// The first non-blank line that is not a markdown header decides: if it
/// starts with `Description:` the rest of that line is the description and
/// the line is dropped from the content. Otherwise the description is that
/// line's first sentence, or its first hundred characters.
pub fn extract_description(lines: &[&str]) -> (String, Vec<String>) {
    let trimmed = trim_blank_lines(lines);
    let first_text = trimmed.iter().enumerate().find(|(_, l)| {
        let l = l.trim();
        !l.is_empty() && !l.starts_with('#')
    });

    let Some((index, line)) = first_text else {
        return (String::new(), owned(trimmed));
    };
    let line = line.trim();

    if let Some(rest) = line.strip_prefix(DESCRIPTION_PREFIX) {
        let mut remaining: Vec<&str> = trimmed.to_vec();
        remaining.remove(index);
        return (rest.trim().to_string(), owned(trim_blank_lines(&remaining)));
    }

    (summarize(line), owned(trimmed))
}

fn summarize(line: &str) -> String {
    if let Some((sentence, _)) = line.split_once('.') {
        return format!("{}.", sentence.trim());
    }
    let mut summary: String = line.chars().take(MAX_DESCRIPTION_CHARS).collect();
    summary = summary.trim().to_string();
    if line.chars().count() > MAX_DESCRIPTION_CHARS {
        summary.push_str("...");
    }
    summary
}

fn owned(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|l| (*l).to_string()).collect()
}
