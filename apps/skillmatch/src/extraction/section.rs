//! Locates the first "skills" block of a resume and reads exact vocabulary labels out of it.

use std::collections::BTreeSet;

use crate::extraction::vocabulary::{is_known_label, SECTION_DELIMITERS, SECTION_HEADERS};

/// Returns the body of the first skills section, one resume line per output line.
///
/// A line mentioning any header keyword opens the section and is not part of it. The section
/// closes on the first blank line or the first line whose trimmed text starts with a digit
/// (typically a date range or a numbered heading). Returns an empty string when no section is
/// found or the section has no body.
pub fn find_skills_section(text: &str) -> String {
    let mut body: Vec<&str> = Vec::new();
    let mut in_section = false;

    for line in text.lines() {
        let line_lower = line.to_lowercase();
        if SECTION_HEADERS.iter().any(|h| line_lower.contains(h)) {
            in_section = true;
            continue;
        }

        if !in_section {
            continue;
        }

        let trimmed = line.trim();
        match trimmed.chars().next() {
            Some(first) if !first.is_numeric() => body.push(line),
            _ => break,
        }
    }

    body.join("\n")
}

/// Splits a skills section on every delimiter at once and keeps tokens that are exactly a
/// vocabulary label. Tokens of two characters or fewer are dropped before lookup.
pub fn labels_in_section(section: &str) -> BTreeSet<String> {
    section
        .split(SECTION_DELIMITERS)
        .map(|part| part.trim().to_lowercase())
        .filter(|token| token.chars().count() > 2)
        .filter(|token| is_known_label(token))
        .collect()
}
