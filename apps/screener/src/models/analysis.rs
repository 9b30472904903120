use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Extracted structure
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub email: String,
    pub phone: String,
}

impl Contact {
    pub fn is_present(&self) -> bool {
        !self.email.is_empty() || !self.phone.is_empty()
    }
}

/// Which of the scored sections were found.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SectionFlags {
    pub has_contact_info: bool,
    pub has_skills: bool,
    pub has_experience: bool,
    pub has_education: bool,
}

impl SectionFlags {
    pub fn present_count(&self) -> usize {
        [
            self.has_contact_info,
            self.has_skills,
            self.has_experience,
            self.has_education,
        ]
        .iter()
        .filter(|present| **present)
        .count()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormattingReport {
    pub is_ats_friendly: bool,
    pub issues: Vec<String>,
}

impl Default for FormattingReport {
    fn default() -> Self {
        Self {
            is_ats_friendly: true,
            issues: Vec::new(),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Recommendations
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationCategory {
    Skills,
    Experience,
    Education,
    Formatting,
    Content,
    Keywords,
}

/// Declaration order is ascending urgency so that `High > Medium > Low`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub category: RecommendationCategory,
    pub priority: Priority,
    pub title: String,
    pub description: String,
    pub impact: String,
    pub action_items: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Detailed analysis
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillsAnalysis {
    pub total_skills: usize,
    pub matched_skills: usize,
    /// At most 10 entries.
    pub missing_critical_skills: Vec<String>,
    pub relevant_skills: Vec<String>,
    /// At most 5 entries.
    pub irrelevant_skills: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExperienceAnalysis {
    /// Highest "N years" figure stated anywhere in the resume.
    pub total_years: u32,
    pub relevant_experience: Vec<String>,
    /// At most 5 entries.
    pub experience_gaps: Vec<String>,
    pub industry_match: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentQuality {
    pub word_count: usize,
    /// clamp(100 - word_count / 10, 0, 100)
    pub readability_score: f64,
    pub has_quantifiable_achievements: bool,
    pub achievement_count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AtsCompatibility {
    /// 0 – 100
    pub score: u32,
    pub passed_checks: Vec<String>,
    pub failed_checks: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DetailedAnalysis {
    pub skills_analysis: SkillsAnalysis,
    pub experience_analysis: ExperienceAnalysis,
    pub content_quality: ContentQuality,
    pub ats_compatibility: AtsCompatibility,
}

/// Immutable snapshot of one resume's extracted structure and feedback.
/// Re-scoring produces a new instance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResumeAnalysis {
    pub name: String,
    pub contact: Contact,
    pub skills: Vec<String>,
    pub experience: Vec<String>,
    pub education: Vec<String>,
    pub certifications: Vec<String>,
    pub languages: Vec<String>,
    pub sections: SectionFlags,
    pub formatting: FormattingReport,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub recommendations: Vec<Recommendation>,
    pub detailed_analysis: DetailedAnalysis,
}

// ────────────────────────────────────────────────────────────────────────────
// Score
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreDetails {
    pub skills_match: u32,
    pub experience_match: u32,
    /// Section-completeness contribution; the name is kept for compatibility
    /// with existing exports.
    pub education_match: u32,
    pub total_possible: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// 0 – 100, rounded
    pub percentage: u32,
    pub matched_keywords: Vec<String>,
    pub details: ScoreDetails,
}
