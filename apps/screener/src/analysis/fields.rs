//! Field Extractors: name, contact, skills, experience, education,
//! certifications and languages. Every extractor returns an empty value when
//! nothing matches.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::analysis::catalog::TECHNICAL_SKILLS;
use crate::analysis::sections::{
    extract_section, CERTIFICATION_HEADERS, EDUCATION_HEADERS, EXPERIENCE_HEADERS,
    LANGUAGE_HEADERS, SKILLS_HEADERS,
};
use crate::analysis::text::{char_len, contains_case_insensitive, dedup_case_insensitive, title_case};
use crate::models::analysis::Contact;

static NAME_LABEL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bname\s*:\s*([a-z][a-z \t]*)").expect("valid name label regex"));
static NAME_AT_START_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-Z][a-z]+ [A-Z][a-z]+)").expect("valid name regex"));
static NAME_WITH_INITIAL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Z][a-z]+ [A-Z]\. [A-Z][a-z]+)").expect("valid initial name regex")
});
static NAME_LINE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z][a-z]+ [A-Z][a-z]+").expect("valid name line regex"));

pub(crate) static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").expect("valid email regex")
});
static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\+?1?[-.\s]?\(?[0-9]{3}\)?[-.\s]?[0-9]{3}[-.\s]?[0-9]{4}").expect("valid phone regex")
});

static SKILL_SPLIT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[,•\n|\-]").expect("valid skill split regex"));
static SKILL_STRIP_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^A-Za-z0-9_\s.+#]").expect("valid skill strip regex"));
static BLANK_LINE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n\s*\n").expect("valid blank line regex"));

const MAX_NAME_LINE_LEN: usize = 50;
const MAX_SKILL_LEN: usize = 30;

pub fn extract_name(text: &str) -> String {
    for pattern in [&*NAME_LABEL_RE, &*NAME_AT_START_RE, &*NAME_WITH_INITIAL_RE] {
        if let Some(caps) = pattern.captures(text) {
            return caps[1].trim().to_string();
        }
    }

    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .find(|line| NAME_LINE_RE.is_match(line) && char_len(line) < MAX_NAME_LINE_LEN)
        .map(str::to_string)
        .unwrap_or_default()
}

pub fn extract_contact(text: &str) -> Contact {
    Contact {
        email: EMAIL_RE
            .find(text)
            .map(|m| m.as_str().to_string())
            .unwrap_or_default(),
        phone: PHONE_RE
            .find(text)
            .map(|m| m.as_str().trim().to_string())
            .unwrap_or_default(),
    }
}

/// Skills section fragments first, then catalog terms found anywhere in the text.
pub fn extract_skills(text: &str) -> Vec<String> {
    let mut skills = extract_section(text, SKILLS_HEADERS)
        .map(skills_from_section)
        .unwrap_or_default();

    let lower = text.to_lowercase();
    for term in TECHNICAL_SKILLS {
        if lower.contains(term) && !contains_case_insensitive(&skills, term) {
            skills.push(title_case(term));
        }
    }

    dedup_case_insensitive(skills)
}

fn skills_from_section(section: &str) -> Vec<String> {
    SKILL_SPLIT_RE
        .split(section)
        .map(|part| SKILL_STRIP_RE.replace_all(part.trim(), "").into_owned())
        .filter(|skill| {
            let len = char_len(skill);
            len > 1 && len < MAX_SKILL_LEN
        })
        .collect()
}

/// One entry per blank-line separated block of the experience section.
pub fn extract_experience(text: &str) -> Vec<String> {
    extract_section(text, EXPERIENCE_HEADERS)
        .map(|section| {
            BLANK_LINE_RE
                .split(section)
                .map(str::trim)
                .filter(|block| !block.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

pub fn extract_education(text: &str) -> Vec<String> {
    section_entries(text, EDUCATION_HEADERS, &['\n'])
}

pub fn extract_certifications(text: &str) -> Vec<String> {
    section_entries(text, CERTIFICATION_HEADERS, &['\n'])
}

pub fn extract_languages(text: &str) -> Vec<String> {
    section_entries(text, LANGUAGE_HEADERS, &[',', '\n'])
}

fn section_entries(text: &str, headers: &[&str], separators: &[char]) -> Vec<String> {
    extract_section(text, headers)
        .map(|section| {
            section
                .split(separators)
                .map(str::trim)
                .filter(|entry| !entry.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_from_label() {
        assert_eq!(extract_name("Resume\nName: Maria Lopez\nEmail: m@x.io"), "Maria Lopez");
    }

    #[test]
    fn test_name_from_first_line() {
        assert_eq!(extract_name("John Smith\nSoftware Engineer"), "John Smith");
    }

    #[test]
    fn test_name_with_middle_initial() {
        assert_eq!(extract_name("John Q. Public\nAnalyst"), "John Q. Public");
    }

    #[test]
    fn test_name_fallback_scans_lines() {
        let text = "\n   \n  Curriculum vitae\n  Ada Lovelace  \n";
        assert_eq!(extract_name(text), "Ada Lovelace");
    }

    #[test]
    fn test_name_absent() {
        assert_eq!(extract_name("no capitals here\n12345"), "");
        assert_eq!(extract_name(""), "");
    }

    #[test]
    fn test_email_without_phone() {
        let contact = extract_contact("Reach me at john@example.com for details");
        assert_eq!(contact.email, "john@example.com");
        assert_eq!(contact.phone, "");
    }

    #[test]
    fn test_phone_formats() {
        assert_eq!(extract_contact("Phone: (555) 123-4567").phone, "(555) 123-4567");
        assert_eq!(extract_contact("tel +1 555.123.4567").phone, "+1 555.123.4567");
    }

    #[test]
    fn test_skills_section_and_catalog() {
        let text = "Skills: Python, SQL, Docker\n\nExperience\nDeployed services on AWS";
        let skills = extract_skills(text);
        assert_eq!(&skills[..3], &["Python", "SQL", "Docker"]);
        assert!(skills.contains(&"Aws".to_string()));
        // catalog hits already covered by the section are not repeated
        assert_eq!(skills.iter().filter(|s| s.eq_ignore_ascii_case("python")).count(), 1);
    }

    #[test]
    fn test_skills_section_splits_on_bullets_and_pipes() {
        let skills = skills_from_section("• Kafka | Terraform\n- C#\nx");
        assert_eq!(skills, vec!["Kafka", "Terraform", "C#"]);
    }

    #[test]
    fn test_experience_blocks() {
        let text = "Experience\nAcme Corp\nLed 4 engineers\n\n  \nGlobex\nIntern\n\nEducation\nMIT";
        assert_eq!(
            extract_experience(text),
            vec!["Acme Corp\nLed 4 engineers", "Globex\nIntern"]
        );
    }

    #[test]
    fn test_education_and_certifications_lines() {
        let text = "Education\nBSc Physics\n\nMSc Data\nCertifications:\nAWS Solutions Architect\nCKA\n";
        assert_eq!(extract_education(text), vec!["BSc Physics", "MSc Data"]);
        assert_eq!(
            extract_certifications(text),
            vec!["AWS Solutions Architect", "CKA"]
        );
    }

    #[test]
    fn test_languages_split_on_commas() {
        let text = "Languages: English, Spanish\nGerman";
        assert_eq!(extract_languages(text), vec!["English", "Spanish", "German"]);
    }

    #[test]
    fn test_empty_text_defaults() {
        assert!(extract_skills("").is_empty());
        assert!(extract_experience("").is_empty());
        assert!(extract_languages("").is_empty());
        assert_eq!(extract_contact(""), Contact::default());
    }
}
