//! Strength/Weakness/Recommendation Generator: fixed rule set over the
//! detailed analysis. Every rule is evaluated independently, in order.

use crate::models::analysis::{
    DetailedAnalysis, Priority, Recommendation, RecommendationCategory, SectionFlags,
};

const STRONG_ATS_SCORE: u32 = 80;
const WEAK_ATS_SCORE: u32 = 60;
const FORMATTING_ATS_SCORE: u32 = 70;
const SUBSTANTIAL_YEARS: u32 = 3;
const BRIEF_WORD_COUNT: usize = 200;
const EXPANDABLE_WORD_COUNT: usize = 300;
const MAX_TOLERATED_GAPS: usize = 3;
const KEYWORD_COVERAGE_TARGET: f64 = 0.6;

pub fn assess_strengths(sections: &SectionFlags, detailed: &DetailedAnalysis) -> Vec<String> {
    let skills = &detailed.skills_analysis;
    let content = &detailed.content_quality;
    let years = detailed.experience_analysis.total_years;
    let mut strengths = Vec::new();

    if skills.matched_skills > 0 {
        strengths.push(format!(
            "Strong skill match with {} relevant skills identified",
            skills.matched_skills
        ));
    }
    if content.has_quantifiable_achievements {
        strengths.push(format!(
            "Includes {} quantifiable achievements",
            content.achievement_count
        ));
    }
    if detailed.ats_compatibility.score >= STRONG_ATS_SCORE {
        strengths.push("Excellent ATS compatibility with proper formatting".to_string());
    }
    if sections.has_contact_info && sections.has_skills && sections.has_experience {
        strengths.push("Complete resume with all essential sections".to_string());
    }
    if years >= SUBSTANTIAL_YEARS {
        strengths.push(format!("Substantial experience with {years}+ years"));
    }

    strengths
}

pub fn assess_weaknesses(detailed: &DetailedAnalysis) -> Vec<String> {
    let missing = detailed.skills_analysis.missing_critical_skills.len();
    let content = &detailed.content_quality;
    let mut weaknesses = Vec::new();

    if missing > 0 {
        weaknesses.push(format!("Missing {missing} critical job-required skills"));
    }
    if !content.has_quantifiable_achievements {
        weaknesses.push("Lacks quantifiable achievements and measurable results".to_string());
    }
    if detailed.ats_compatibility.score < WEAK_ATS_SCORE {
        weaknesses.push("Poor ATS compatibility may prevent proper parsing".to_string());
    }
    if content.word_count < BRIEF_WORD_COUNT {
        weaknesses.push("Resume too brief - lacks sufficient detail".to_string());
    }
    if detailed.experience_analysis.experience_gaps.len() > MAX_TOLERATED_GAPS {
        weaknesses.push("Limited experience in key job requirement areas".to_string());
    }

    weaknesses
}

/// Builds the gated recommendation templates, then orders them high → low
/// priority. The sort is stable so equal priorities keep rule order.
pub fn build_recommendations(detailed: &DetailedAnalysis, keyword_count: usize) -> Vec<Recommendation> {
    let skills = &detailed.skills_analysis;
    let content = &detailed.content_quality;
    let mut recommendations = Vec::new();

    if !skills.missing_critical_skills.is_empty() {
        let impact = (skills.missing_critical_skills.len() * 3).min(30);
        let top_missing: Vec<&str> = skills
            .missing_critical_skills
            .iter()
            .take(5)
            .map(String::as_str)
            .collect();
        recommendations.push(recommendation(
            RecommendationCategory::Skills,
            Priority::High,
            "Add Missing Critical Skills",
            "Your resume is missing several skills that are essential for this position.",
            format!("Could increase your match score by up to {impact}%"),
            vec![
                format!(
                    "Add these critical skills to your skills section: {}",
                    top_missing.join(", ")
                ),
                "Include examples of how you've used these skills in your experience section"
                    .to_string(),
                "Consider taking courses or certifications in missing areas".to_string(),
            ],
        ));
    }

    if !detailed.experience_analysis.experience_gaps.is_empty() {
        recommendations.push(recommendation(
            RecommendationCategory::Experience,
            Priority::High,
            "Highlight Relevant Experience",
            "Your experience section could better emphasize job-relevant accomplishments.",
            "Could increase experience match score by 15-25%".to_string(),
            strings(&[
                "Rewrite job descriptions to emphasize relevant technologies and methodologies",
                "Add specific projects that demonstrate required skills",
                "Include metrics and quantifiable results where possible",
            ]),
        ));
    }

    if !content.has_quantifiable_achievements {
        recommendations.push(recommendation(
            RecommendationCategory::Content,
            Priority::High,
            "Add Quantifiable Achievements",
            "Your resume lacks specific, measurable accomplishments that demonstrate impact.",
            "Could significantly improve recruiter interest and ATS ranking".to_string(),
            strings(&[
                "Add specific numbers, percentages, and metrics to your accomplishments",
                "Use action verbs like \"increased\", \"reduced\", \"improved\", \"managed\"",
                "Include before/after comparisons where possible",
                "Quantify team sizes, budgets, timelines, and results",
            ]),
        ));
    }

    if detailed.ats_compatibility.score < FORMATTING_ATS_SCORE {
        recommendations.push(recommendation(
            RecommendationCategory::Formatting,
            Priority::Medium,
            "Improve ATS Compatibility",
            "Your resume formatting may prevent proper parsing by ATS systems.",
            "Essential for ensuring your resume is properly read by applicant tracking systems"
                .to_string(),
            strings(&[
                "Use standard section headers (Experience, Education, Skills)",
                "Avoid tables, text boxes, and complex formatting",
                "Use standard fonts and simple bullet points",
                "Ensure contact information is clearly visible at the top",
            ]),
        ));
    }

    if (skills.matched_skills as f64) < keyword_count as f64 * KEYWORD_COVERAGE_TARGET {
        recommendations.push(recommendation(
            RecommendationCategory::Keywords,
            Priority::Medium,
            "Optimize Keyword Usage",
            "Your resume could better incorporate job-specific keywords and terminology.",
            "Could improve keyword matching score by 10-20%".to_string(),
            strings(&[
                "Naturally incorporate job posting keywords throughout your resume",
                "Use industry-standard terminology and acronyms",
                "Mirror the language used in the job description",
                "Include both spelled-out terms and abbreviations",
            ]),
        ));
    }

    if content.word_count < EXPANDABLE_WORD_COUNT {
        recommendations.push(recommendation(
            RecommendationCategory::Content,
            Priority::Medium,
            "Expand Resume Content",
            "Your resume is too brief and may not provide enough information for proper evaluation.",
            "More detailed content improves ATS parsing and recruiter assessment".to_string(),
            strings(&[
                "Add more detail to your work experience descriptions",
                "Include a professional summary or objective",
                "Expand on your key accomplishments and responsibilities",
                "Add relevant projects, certifications, or volunteer work",
            ]),
        ));
    }

    recommendations.sort_by(|a, b| b.priority.cmp(&a.priority));
    recommendations
}

fn recommendation(
    category: RecommendationCategory,
    priority: Priority,
    title: &str,
    description: &str,
    impact: String,
    action_items: Vec<String>,
) -> Recommendation {
    Recommendation {
        category,
        priority,
        title: title.to_string(),
        description: description.to_string(),
        impact,
        action_items,
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
