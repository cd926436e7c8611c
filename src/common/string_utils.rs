//! String utility functions for section names and fragment identifiers.
//!
//! Section names are human-readable title case with spaces ("Code Style"),
//! fragment identifiers are the dash-separated lowercase filename form
//! ("code-style").

/// Capitalize the first letter of a word
///
/// Converts the first character to uppercase and leaves the rest unchanged.
/// Returns an empty string if the input is empty.
///
/// # Examples
/// ```ignore
/// assert_eq!(capitalize_word("hello"), "Hello");
/// assert_eq!(capitalize_word("HELLO"), "HELLO");
/// assert_eq!(capitalize_word(""), "");
/// ```
pub fn capitalize_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Convert a section name to its fragment identifier
///
/// Lowercases the name and joins whitespace-separated words with `-`.
pub fn header_to_filename(header: &str) -> String {
    header
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

/// Convert a fragment identifier to a section name
///
/// Splits on `-` and capitalizes each word. Empty words from doubled dashes
/// are dropped.
pub fn filename_to_header(filename: &str) -> String {
    filename
        .split('-')
        .filter(|word| !word.is_empty())
        .map(capitalize_word)
        .collect::<Vec<_>>()
        .join(" ")
}
