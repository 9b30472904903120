//! Reference vocabularies shared by the keyword extractor and the skill extractor.
//!
//! Entries are lower-case and matched by plain substring containment, so short
//! entries such as `go` or `ai` also hit inside longer words.

pub const TECHNICAL_SKILLS: &[&str] = &[
    "javascript",
    "python",
    "java",
    "react",
    "angular",
    "vue",
    "node.js",
    "nodejs",
    "typescript",
    "html",
    "css",
    "sql",
    "mongodb",
    "postgresql",
    "mysql",
    "git",
    "docker",
    "kubernetes",
    "aws",
    "azure",
    "gcp",
    "linux",
    "windows",
    "photoshop",
    "illustrator",
    "figma",
    "sketch",
    "adobe",
    "wordpress",
    "bootstrap",
    "tailwind",
    "sass",
    "less",
    "webpack",
    "vite",
    "gulp",
    "redux",
    "graphql",
    "rest",
    "api",
    "microservices",
    "agile",
    "scrum",
    "machine learning",
    "ai",
    "data science",
    "tensorflow",
    "pytorch",
    "c++",
    "c#",
    "php",
    "ruby",
    "go",
    "rust",
    "swift",
    "kotlin",
    "flutter",
    "express",
    "django",
    "flask",
    "spring",
    "laravel",
    "rails",
    "nest.js",
    "elasticsearch",
    "redis",
    "rabbitmq",
    "jenkins",
    "circleci",
    "github actions",
];

pub const SOFT_SKILLS: &[&str] = &[
    "leadership",
    "communication",
    "teamwork",
    "problem solving",
    "analytical",
    "project management",
    "collaboration",
    "mentoring",
    "training",
    "coaching",
    "strategic planning",
    "process improvement",
    "quality assurance",
    "testing",
    "debugging",
    "troubleshooting",
    "optimization",
    "performance",
    "scalability",
    "security",
    "compliance",
    "documentation",
    "presentation",
    "research",
];

pub const EDUCATION_TERMS: &[&str] = &[
    "bachelor",
    "master",
    "phd",
    "degree",
    "computer science",
    "engineering",
    "certification",
    "certified",
    "aws certified",
    "microsoft certified",
    "google certified",
    "cisco",
    "oracle",
    "salesforce",
    "pmp",
    "itil",
];

/// All three catalogs in lookup order: technical, soft, education.
pub fn reference_vocabulary() -> impl Iterator<Item = &'static str> {
    TECHNICAL_SKILLS
        .iter()
        .chain(SOFT_SKILLS)
        .chain(EDUCATION_TERMS)
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_entries_are_lowercase() {
        for term in reference_vocabulary() {
            assert_eq!(term, term.to_lowercase(), "{term} is not lower-case");
        }
    }

    #[test]
    fn test_vocabulary_starts_with_technical_terms() {
        assert_eq!(reference_vocabulary().next(), Some("javascript"));
        assert_eq!(
            reference_vocabulary().count(),
            TECHNICAL_SKILLS.len() + SOFT_SKILLS.len() + EDUCATION_TERMS.len()
        );
    }
}
