//! Section Extractor: heading-based slicing of resume text.

use once_cell::sync::Lazy;
use regex::Regex;

pub const SKILLS_HEADERS: &[&str] = &["skills", "technical skills", "technologies"];
pub const EXPERIENCE_HEADERS: &[&str] = &[
    "experience",
    "work experience",
    "professional experience",
    "employment",
    "career",
];
pub const EDUCATION_HEADERS: &[&str] = &["education", "academic", "qualifications"];
pub const CERTIFICATION_HEADERS: &[&str] = &[
    "certifications",
    "certificates",
    "professional certifications",
    "licenses",
];
pub const LANGUAGE_HEADERS: &[&str] = &["languages", "language skills"];

/// Headings that terminate a section.
pub const SECTION_BOUNDARIES: &[&str] = &[
    "experience",
    "education",
    "skills",
    "certifications",
    "projects",
    "contact",
    "summary",
    "objective",
];

static BOUNDARY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?i)\n\s*\b(?:{})\b",
        SECTION_BOUNDARIES.join("|")
    ))
    .expect("valid section boundary regex")
});

/// Returns the body of the first section whose heading matches one of
/// `headers`, tried in order.
///
/// A heading is a word-bounded, case-insensitive match followed by `:` or a
/// newline. The body runs up to the next line starting with a boundary heading
/// or the end of the text and is returned trimmed in its original case.
/// A blank body counts as not found.
pub fn extract_section<'a>(text: &'a str, headers: &[&str]) -> Option<&'a str> {
    for header in headers {
        let Ok(heading) = Regex::new(&format!(r"(?i)\b{}\b[:\n]", regex::escape(header))) else {
            continue;
        };
        let Some(found) = heading.find(text) else {
            continue;
        };

        let body_start = found.end();
        let body_end = BOUNDARY_RE
            .find_at(text, body_start)
            .map(|b| b.start())
            .unwrap_or(text.len());
        let body = text[body_start..body_end].trim();

        return (!body.is_empty()).then_some(body);
    }
    None
}
