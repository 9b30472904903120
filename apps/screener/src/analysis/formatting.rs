//! Formatting/ATS Checker: raw-text signals that trip applicant tracking systems.

use crate::analysis::fields::EMAIL_RE;
use crate::analysis::text::char_len;
use crate::models::analysis::FormattingReport;

/// Quotes (straight and curly), apostrophes and long dashes.
pub const SPECIAL_CHARACTERS: &[char] = &[
    '"', '\'', '\u{201C}', '\u{201D}', '\u{2018}', '\u{2019}', '\u{2013}', '\u{2014}',
];

const LONG_LINE_CHARS: usize = 120;
const LONG_LINE_RATIO: f64 = 0.1;
const MAX_SPECIAL_CHARACTERS: usize = 5;

pub fn count_special_characters(text: &str) -> usize {
    text.chars().filter(|c| SPECIAL_CHARACTERS.contains(c)).count()
}

/// Runs every rule independently; each failure appends an issue and marks
/// the text as not ATS friendly.
pub fn check_ats_formatting(text: &str) -> FormattingReport {
    let mut issues = Vec::new();

    if text.contains('\t') {
        issues.push("Contains tab characters - use spaces instead".to_string());
    }

    let lines: Vec<&str> = text.split('\n').collect();
    let long_lines = lines
        .iter()
        .filter(|line| char_len(line) > LONG_LINE_CHARS)
        .count();
    if long_lines as f64 > lines.len() as f64 * LONG_LINE_RATIO {
        issues.push("Contains very long lines - may indicate table formatting".to_string());
    }

    if !EMAIL_RE.is_match(text) {
        issues.push("Missing email address".to_string());
    }

    if count_special_characters(text) > MAX_SPECIAL_CHARACTERS {
        issues.push("Contains special characters that may not parse correctly".to_string());
    }

    FormattingReport {
        is_ats_friendly: issues.is_empty(),
        issues,
    }
}
