//! Match scoring: pluggable, trait-based scorer that turns a resume analysis
//! and the job keywords into a 0–100 percentage.
//!
//! Default: `WeightedKeywordScorer` (pure, deterministic, no I/O).
//!
//! `AppState` holds an `Arc<dyn MatchScorer>`, chosen at startup.

use serde::{Deserialize, Serialize};

use crate::analysis::text::{contains_case_insensitive, fuzzy_match};
use crate::models::analysis::{ResumeAnalysis, ScoreDetails, ScoreResult};

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Implement this to swap scoring backends without touching the pipeline or
/// the handlers. Scoring must be pure: identical inputs give identical output,
/// `matched_keywords` order included.
pub trait MatchScorer: Send + Sync {
    fn score(&self, analysis: &ResumeAnalysis, keywords: &[String]) -> ScoreResult;

    /// Short backend label, reported by the health probe.
    fn backend(&self) -> &'static str;
}

// ────────────────────────────────────────────────────────────────────────────
// Weights
// ────────────────────────────────────────────────────────────────────────────

/// Points per category. The defaults sum to 100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub skills: f64,
    pub experience: f64,
    pub sections: f64,
    pub formatting: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            skills: 40.0,
            experience: 30.0,
            sections: 20.0,
            formatting: 10.0,
        }
    }
}

impl ScoringWeights {
    pub fn total(&self) -> f64 {
        self.skills + self.experience + self.sections + self.formatting
    }
}

// ────────────────────────────────────────────────────────────────────────────
// WeightedKeywordScorer
// ────────────────────────────────────────────────────────────────────────────

/// Weighted keyword scorer.
///
/// Algorithm:
/// 1. skills: keyword hits against extracted skills (bidirectional substring)
///    over keyword count, times the skills weight
/// 2. experience: keyword hits inside the lower-cased experience text, times
///    the experience weight
/// 3. sections: found sections out of four, times the sections weight
/// 4. formatting: full weight when the resume is ATS friendly, else 0
///
/// percentage = round(sum), clamped to 0–100.
#[derive(Debug, Clone, Default)]
pub struct WeightedKeywordScorer {
    pub weights: ScoringWeights,
}

impl WeightedKeywordScorer {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }
}

impl MatchScorer for WeightedKeywordScorer {
    fn score(&self, analysis: &ResumeAnalysis, keywords: &[String]) -> ScoreResult {
        compute_weighted_score(analysis, keywords, &self.weights)
    }

    fn backend(&self) -> &'static str {
        "weighted_keyword"
    }
}

fn compute_weighted_score(
    analysis: &ResumeAnalysis,
    keywords: &[String],
    weights: &ScoringWeights,
) -> ScoreResult {
    let mut matched_keywords: Vec<String> = Vec::new();

    let skill_hits = keywords
        .iter()
        .filter(|keyword| {
            let hit = analysis
                .skills
                .iter()
                .any(|skill| fuzzy_match(skill, keyword));
            if hit && !contains_case_insensitive(&matched_keywords, keyword) {
                matched_keywords.push((*keyword).clone());
            }
            hit
        })
        .count();

    let experience_text = analysis.experience.join(" ").to_lowercase();
    let experience_hits = keywords
        .iter()
        .filter(|keyword| {
            let hit = experience_text.contains(&keyword.to_lowercase());
            if hit && !contains_case_insensitive(&matched_keywords, keyword) {
                matched_keywords.push((*keyword).clone());
            }
            hit
        })
        .count();

    let skills = fraction(skill_hits, keywords.len()) * weights.skills;
    let experience = fraction(experience_hits, keywords.len()) * weights.experience;
    let sections = fraction(analysis.sections.present_count(), 4) * weights.sections;
    let formatting = if analysis.formatting.is_ats_friendly {
        weights.formatting
    } else {
        0.0
    };

    let total = skills + experience + sections + formatting;

    ScoreResult {
        percentage: total.round().clamp(0.0, 100.0) as u32,
        matched_keywords,
        details: ScoreDetails {
            skills_match: skills.round() as u32,
            experience_match: experience.round() as u32,
            education_match: sections.round() as u32,
            total_possible: weights.total().round() as u32,
        },
    }
}

/// `hits / total`, 0 when there is nothing to match against.
fn fraction(hits: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        hits as f64 / total as f64
    }
}
