//! Keyword Extractor: derives the matching vocabulary from a job description.
//!
//! Deterministic and lexical: catalog containment, experience-duration phrases,
//! degree requirements, and tool lists introduced by context phrases.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::analysis::catalog::reference_vocabulary;
use crate::analysis::text::{char_len, contains_case_insensitive, dedup_case_insensitive, title_case};

static EXPERIENCE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d+)\+?\s*years?\s*(?:of\s*)?(?:experience|exp)").expect("valid experience regex")
});

static DEGREE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:bachelor|master|phd|degree)\s*(?:in|of)?\s*[a-zA-Z\s]+").expect("valid degree regex")
});

/// Context phrases followed by a free-text run of tools.
static TOOL_CONTEXT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:experience with|knowledge of|proficient in|skilled in|using)\s+([a-zA-Z0-9\s.,]+)")
        .expect("valid tool context regex")
});

/// Labelled lists such as `frameworks: react, vue`.
static TOOL_LIST_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:tools?|technologies|frameworks?|libraries|platforms?)[:\s]+([a-zA-Z0-9\s.,\-]+)")
        .expect("valid tool list regex")
});

static TOOL_STRIP_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^A-Za-z0-9_\s.+#-]").expect("valid strip regex"));

const MIN_KEYWORD_LEN: usize = 1;
const MAX_KEYWORD_LEN: usize = 50;
const MIN_TOOL_LEN: usize = 2;
const MAX_TOOL_LEN: usize = 30;

/// Extracts keywords from job description text.
///
/// Output is in discovery order, case-insensitively deduplicated, and never
/// contains entries of length ≤1 or ≥50.
pub fn extract_keywords(description: &str) -> Vec<String> {
    let text = description.to_lowercase();
    let mut keywords: Vec<String> = Vec::new();

    // 1. Catalog terms
    for term in reference_vocabulary() {
        if text.contains(term) {
            keywords.push(title_case(term));
        }
    }

    // 2. Experience durations
    for caps in EXPERIENCE_RE.captures_iter(&text) {
        keywords.push(format!("{}+ years experience", &caps[1]));
    }

    // 3. Degree requirements
    for m in DEGREE_RE.find_iter(&text) {
        keywords.push(m.as_str().trim().to_string());
    }

    // 4. Tool mentions
    for pattern in [&*TOOL_CONTEXT_RE, &*TOOL_LIST_RE] {
        for caps in pattern.captures_iter(&text) {
            for fragment in caps[1].split([',', '\n']) {
                let fragment = fragment.trim();
                let len = char_len(fragment);
                if len <= MIN_TOOL_LEN || len >= MAX_TOOL_LEN {
                    continue;
                }
                let tool = TOOL_STRIP_RE.replace_all(fragment, "");
                let tool = tool.trim();
                if !tool.is_empty() && !contains_case_insensitive(&keywords, tool) {
                    keywords.push(tool.to_string());
                }
            }
        }
    }

    let keywords: Vec<String> = dedup_case_insensitive(keywords)
        .into_iter()
        .filter(|k| {
            let len = char_len(k);
            len > MIN_KEYWORD_LEN && len < MAX_KEYWORD_LEN
        })
        .collect();

    debug!("Extracted {} keywords from job description", keywords.len());
    keywords
}
