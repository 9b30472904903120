//! Detailed Analysis Builder: cross-references extracted fields with the job
//! keywords.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::analysis::fields::extract_contact;
use crate::analysis::formatting::count_special_characters;
use crate::analysis::text::{fuzzy_match, word_count};
use crate::models::analysis::{
    AtsCompatibility, ContentQuality, DetailedAnalysis, ExperienceAnalysis, SkillsAnalysis,
};

static YEARS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(\d+)\+?\s*years?").expect("valid years regex"));

static STANDARD_HEADERS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(experience|education|skills)\b").expect("valid standard headers regex")
});

static ACHIEVEMENT_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)increased?.*?(\d+%|\d+x)",
        r"(?i)reduced?.*?(\d+%|\d+ hours?)",
        r"(?i)improved?.*?(\d+%)",
        r"(?i)managed?.*?(\d+)",
        r"(?i)led.*?(\d+)",
        r"(?i)achieved?.*?(\d+)",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("valid achievement regex"))
    .collect()
});

pub const CHECK_CONTACT: &str = "Has contact information";
pub const CHECK_HEADERS: &str = "Uses standard section headers";
pub const CHECK_SPECIAL_CHARACTERS: &str = "No special characters";
pub const CHECK_LENGTH: &str = "Reasonable length";
pub const CHECK_ACHIEVEMENTS: &str = "Has quantifiable achievements";

const MAX_MISSING_SKILLS: usize = 10;
const MAX_IRRELEVANT_SKILLS: usize = 5;
const MAX_EXPERIENCE_GAPS: usize = 5;
const MIN_WORDS: usize = 200;
const MAX_WORDS: usize = 800;

pub fn build_detailed_analysis(
    text: &str,
    skills: &[String],
    experience: &[String],
    keywords: &[String],
) -> DetailedAnalysis {
    let words = word_count(text);
    let achievement_count = count_achievements(text);

    DetailedAnalysis {
        skills_analysis: analyze_skills(skills, keywords),
        experience_analysis: analyze_experience(text, experience, keywords),
        content_quality: ContentQuality {
            word_count: words,
            readability_score: (100.0 - words as f64 / 10.0).clamp(0.0, 100.0),
            has_quantifiable_achievements: achievement_count > 0,
            achievement_count,
        },
        ats_compatibility: check_ats_compatibility(text, words, achievement_count),
    }
}

fn analyze_skills(skills: &[String], keywords: &[String]) -> SkillsAnalysis {
    let (relevant, irrelevant): (Vec<String>, Vec<String>) = skills
        .iter()
        .cloned()
        .partition(|skill| keywords.iter().any(|k| fuzzy_match(skill, k)));

    let missing: Vec<String> = keywords
        .iter()
        .filter(|k| !skills.iter().any(|skill| fuzzy_match(skill, k)))
        .take(MAX_MISSING_SKILLS)
        .cloned()
        .collect();

    SkillsAnalysis {
        total_skills: skills.len(),
        matched_skills: relevant.len(),
        missing_critical_skills: missing,
        relevant_skills: relevant,
        irrelevant_skills: irrelevant.into_iter().take(MAX_IRRELEVANT_SKILLS).collect(),
    }
}

fn analyze_experience(text: &str, experience: &[String], keywords: &[String]) -> ExperienceAnalysis {
    let experience_text = experience.join(" ").to_lowercase();
    let lowered: Vec<String> = keywords.iter().map(|k| k.to_lowercase()).collect();

    ExperienceAnalysis {
        total_years: max_stated_years(text),
        relevant_experience: experience
            .iter()
            .filter(|block| {
                let block = block.to_lowercase();
                lowered.iter().any(|k| block.contains(k.as_str()))
            })
            .cloned()
            .collect(),
        experience_gaps: keywords
            .iter()
            .zip(&lowered)
            .filter(|(_, k)| !experience_text.contains(k.as_str()))
            .map(|(keyword, _)| keyword.clone())
            .take(MAX_EXPERIENCE_GAPS)
            .collect(),
        industry_match: lowered.iter().any(|k| experience_text.contains(k.as_str())),
    }
}

/// Largest "N years" figure anywhere in the text, 0 when there is none.
pub fn max_stated_years(text: &str) -> u32 {
    YEARS_RE
        .captures_iter(text)
        .filter_map(|caps| caps[1].parse::<u32>().ok())
        .max()
        .unwrap_or(0)
}

pub fn count_achievements(text: &str) -> usize {
    ACHIEVEMENT_PATTERNS
        .iter()
        .map(|pattern| pattern.find_iter(text).count())
        .sum()
}

fn check_ats_compatibility(text: &str, words: usize, achievement_count: usize) -> AtsCompatibility {
    let checks = [
        (CHECK_CONTACT, extract_contact(text).is_present()),
        (CHECK_HEADERS, STANDARD_HEADERS_RE.is_match(text)),
        (CHECK_SPECIAL_CHARACTERS, count_special_characters(text) == 0),
        (CHECK_LENGTH, (MIN_WORDS..=MAX_WORDS).contains(&words)),
        (CHECK_ACHIEVEMENTS, achievement_count > 0),
    ];

    let (passed, failed): (Vec<_>, Vec<_>) = checks.iter().partition(|(_, ok)| *ok);
    let score = ((passed.len() as f64 / checks.len() as f64) * 100.0).round() as u32;

    AtsCompatibility {
        score,
        passed_checks: passed.iter().map(|(name, _)| name.to_string()).collect(),
        failed_checks: failed.iter().map(|(name, _)| name.to_string()).collect(),
    }
}
