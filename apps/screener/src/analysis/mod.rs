//! Resume analysis engine.
//!
//! Pure and synchronous: resume text plus job keywords in, `ResumeAnalysis`
//! out. No shared state between resumes, no I/O, no errors; every extractor
//! falls back to an empty value.

pub mod catalog;
pub mod detailed;
pub mod feedback;
pub mod fields;
pub mod formatting;
pub mod keywords;
pub mod sections;
pub mod text;

use tracing::debug;

use crate::models::analysis::{ResumeAnalysis, SectionFlags};

pub use keywords::extract_keywords;

/// Extracts the structure of one resume and judges it against `keywords`.
pub fn analyze_resume(content: &str, keywords: &[String]) -> ResumeAnalysis {
    let content = text::normalize_line_endings(content);
    let content = content.as_ref();

    let name = fields::extract_name(content);
    let contact = fields::extract_contact(content);
    let skills = fields::extract_skills(content);
    let experience = fields::extract_experience(content);
    let education = fields::extract_education(content);
    let certifications = fields::extract_certifications(content);
    let languages = fields::extract_languages(content);

    let sections = SectionFlags {
        has_contact_info: contact.is_present(),
        has_skills: !skills.is_empty(),
        has_experience: !experience.is_empty(),
        has_education: !education.is_empty(),
    };

    let formatting = formatting::check_ats_formatting(content);
    let detailed_analysis =
        detailed::build_detailed_analysis(content, &skills, &experience, keywords);

    let strengths = feedback::assess_strengths(&sections, &detailed_analysis);
    let weaknesses = feedback::assess_weaknesses(&detailed_analysis);
    let recommendations = feedback::build_recommendations(&detailed_analysis, keywords.len());

    debug!(
        skills = skills.len(),
        experience_blocks = experience.len(),
        ats_score = detailed_analysis.ats_compatibility.score,
        "Analyzed resume"
    );

    ResumeAnalysis {
        name,
        contact,
        skills,
        experience,
        education,
        certifications,
        languages,
        sections,
        formatting,
        strengths,
        weaknesses,
        recommendations,
        detailed_analysis,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    pub(crate) const SAMPLE_RESUME: &str = "Jane Doe
jane.doe@example.com | (555) 123-4567

Summary
Backend engineer with 6 years of experience building data platforms.

Languages
English, French

Skills: Python, SQL, Docker, Kubernetes

Experience
Acme Corp - Senior Engineer
Led 5 engineers and reduced deploy time by 40%.
Built Python services on Kubernetes.

Globex - Engineer
Increased throughput by 3x using Docker.

Education
BSc Computer Science, State University

Certifications
Certified Kubernetes Administrator
";

    fn keywords(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_full_resume_extraction() {
        let analysis = analyze_resume(SAMPLE_RESUME, &keywords(&["Python", "AWS"]));

        assert_eq!(analysis.name, "Jane Doe");
        assert_eq!(analysis.contact.email, "jane.doe@example.com");
        assert_eq!(analysis.contact.phone, "(555) 123-4567");
        assert_eq!(&analysis.skills[..4], &["Python", "SQL", "Docker", "Kubernetes"]);
        assert_eq!(analysis.experience.len(), 2);
        assert!(analysis.experience[0].starts_with("Acme Corp"));
        assert_eq!(analysis.education, vec!["BSc Computer Science, State University"]);
        assert_eq!(analysis.certifications, vec!["Certified Kubernetes Administrator"]);
        assert_eq!(analysis.languages, vec!["English", "French"]);
        assert_eq!(analysis.sections.present_count(), 4);
        assert!(analysis.formatting.is_ats_friendly);
    }

    #[test]
    fn test_job_aware_feedback() {
        let analysis = analyze_resume(SAMPLE_RESUME, &keywords(&["Python", "AWS"]));
        let detailed = &analysis.detailed_analysis;

        assert_eq!(detailed.skills_analysis.missing_critical_skills, vec!["AWS"]);
        assert_eq!(detailed.experience_analysis.total_years, 6);
        assert!(detailed.experience_analysis.industry_match);
        assert!(detailed.content_quality.has_quantifiable_achievements);
        assert!(analysis
            .weaknesses
            .contains(&"Missing 1 critical job-required skills".to_string()));
        assert_eq!(
            analysis.recommendations[0].category,
            crate::models::analysis::RecommendationCategory::Skills
        );
    }

    #[test]
    fn test_empty_keywords_leave_matching_empty() {
        let analysis = analyze_resume(SAMPLE_RESUME, &[]);
        let skills = &analysis.detailed_analysis.skills_analysis;
        assert_eq!(skills.matched_skills, 0);
        assert!(skills.missing_critical_skills.is_empty());
        assert!(!analysis.detailed_analysis.experience_analysis.industry_match);
    }

    #[test]
    fn test_empty_text_yields_defaults() {
        let analysis = analyze_resume("", &keywords(&["Rust"]));
        assert_eq!(analysis.name, "");
        assert!(analysis.skills.is_empty());
        assert_eq!(analysis.sections, SectionFlags::default());
        assert!(!analysis.formatting.is_ats_friendly);
        assert_eq!(analysis.detailed_analysis.content_quality.word_count, 0);
        assert_eq!(analysis.detailed_analysis.content_quality.readability_score, 100.0);
    }

    #[test]
    fn test_crlf_input_matches_lf_input() {
        let crlf = SAMPLE_RESUME.replace('\n', "\r\n");
        let kws = keywords(&["Python"]);
        assert_eq!(analyze_resume(&crlf, &kws), analyze_resume(SAMPLE_RESUME, &kws));
    }

    #[test]
    fn test_everyday_apostrophes_cost_ats_points() {
        let text = "Jane Doe\njane@example.com\nI'm a dev. I've led teams. We're \"fast\". It's Jane's team.\nSkills: Rust\n";
        let analysis = analyze_resume(text, &[]);

        assert!(!analysis.formatting.is_ats_friendly);
        let ats = &analysis.detailed_analysis.ats_compatibility;
        assert!(ats
            .failed_checks
            .contains(&detailed::CHECK_SPECIAL_CHARACTERS.to_string()));
    }

    #[test]
    fn test_analysis_is_deterministic() {
        let kws = keywords(&["Docker", "Go"]);
        assert_eq!(analyze_resume(SAMPLE_RESUME, &kws), analyze_resume(SAMPLE_RESUME, &kws));
    }
}
