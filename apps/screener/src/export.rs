//! CSV export of scored resumes, preceded by a `#`-prefixed metadata block.

use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::models::job::JobDescriptionData;
use crate::models::resume::{ResumeStatus, ScoredResume};

pub const CSV_HEADERS: [&str; 13] = [
    "Candidate Name",
    "Filename",
    "Match Score",
    "Status",
    "Email",
    "Phone",
    "Matched Keywords",
    "Skills",
    "Education",
    "Certifications",
    "ATS Friendly",
    "Issues",
    "Upload Date",
];

const LIST_SEPARATOR: &str = "; ";
const MISSING: &str = "N/A";

/// `resume_screening_results_<YYYY-MM-DD>.csv`
pub fn export_filename(exported_at: DateTime<Utc>) -> String {
    format!(
        "resume_screening_results_{}.csv",
        exported_at.format("%Y-%m-%d")
    )
}

/// ISO-8601 UTC with millisecond precision, e.g. `2024-01-01T00:00:00.000Z`.
fn iso_millis(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn or_missing(value: &str) -> &str {
    if value.trim().is_empty() {
        MISSING
    } else {
        value
    }
}

fn row(scored: &ScoredResume) -> [String; 13] {
    let analysis = &scored.analysis;
    [
        or_missing(&analysis.name).to_string(),
        scored.resume.filename.clone(),
        scored.score.to_string(),
        scored.status.as_str().to_string(),
        or_missing(&analysis.contact.email).to_string(),
        or_missing(&analysis.contact.phone).to_string(),
        scored.matched_keywords.join(LIST_SEPARATOR),
        analysis.skills.join(LIST_SEPARATOR),
        analysis.education.join(LIST_SEPARATOR),
        analysis.certifications.join(LIST_SEPARATOR),
        if analysis.formatting.is_ats_friendly { "Yes" } else { "No" }.to_string(),
        analysis.formatting.issues.join(LIST_SEPARATOR),
        iso_millis(scored.resume.uploaded_at),
    ]
}

/// Renders the export document.
///
/// Layout: metadata block, blank line, unquoted header row, then one row per
/// resume with every field quoted and embedded quotes doubled.
pub fn export_csv(
    scored_resumes: &[ScoredResume],
    job: Option<&JobDescriptionData>,
    exported_at: DateTime<Utc>,
) -> Result<String> {
    let qualified = scored_resumes
        .iter()
        .filter(|r| r.status == ResumeStatus::Qualified)
        .count();

    let mut out = String::new();
    out.push_str("# Resume Screening Results\n");
    out.push_str(&format!(
        "# Job Title: {}\n",
        or_missing(job.map(|j| j.title.as_str()).unwrap_or_default())
    ));
    out.push_str(&format!(
        "# Company: {}\n",
        or_missing(job.map(|j| j.company.as_str()).unwrap_or_default())
    ));
    out.push_str(&format!("# Export Date: {}\n", iso_millis(exported_at)));
    out.push_str(&format!("# Total Candidates: {}\n", scored_resumes.len()));
    out.push_str(&format!("# Qualified Candidates: {qualified}\n"));
    out.push('\n');

    let mut header = WriterBuilder::new()
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    header
        .write_record(CSV_HEADERS)
        .context("Failed to write CSV header")?;
    let buffer = header
        .into_inner()
        .map_err(|e| anyhow!("Failed to flush CSV header: {}", e.error()))?;

    let mut rows = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(buffer);
    for scored in scored_resumes {
        rows.write_record(row(scored))
            .with_context(|| format!("Failed to write CSV row for {}", scored.resume.filename))?;
    }
    let buffer = rows
        .into_inner()
        .map_err(|e| anyhow!("Failed to flush CSV rows: {}", e.error()))?;

    out.push_str(&String::from_utf8(buffer).context("CSV output is not valid UTF-8")?);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    use crate::models::analysis::{Contact, FormattingReport, ResumeAnalysis};
    use crate::models::resume::Resume;

    fn exported_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 0).unwrap()
    }

    fn scored() -> ScoredResume {
        let mut resume = Resume::new("jane \"JD\" doe.txt", "text");
        resume.uploaded_at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        ScoredResume {
            resume,
            score: 72,
            matched_keywords: vec!["Python".to_string(), "Docker".to_string()],
            analysis: ResumeAnalysis {
                name: "Jane Doe".to_string(),
                contact: Contact {
                    email: "jane@example.com".to_string(),
                    phone: String::new(),
                },
                skills: vec!["Python".to_string(), "Docker".to_string(), "SQL".to_string()],
                formatting: FormattingReport {
                    is_ats_friendly: false,
                    issues: vec!["Contains tab characters".to_string()],
                },
                ..Default::default()
            },
            status: ResumeStatus::Qualified,
        }
    }

    fn job() -> JobDescriptionData {
        JobDescriptionData {
            title: "Data Engineer".to_string(),
            company: "Acme".to_string(),
            description: "Python".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_filename_uses_export_date() {
        assert_eq!(
            export_filename(exported_at()),
            "resume_screening_results_2024-03-09.csv"
        );
    }

    #[test]
    fn test_metadata_block_precedes_header() {
        let csv = export_csv(&[scored()], Some(&job()), exported_at()).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines[0], "# Resume Screening Results");
        assert_eq!(lines[1], "# Job Title: Data Engineer");
        assert_eq!(lines[2], "# Company: Acme");
        assert_eq!(lines[3], "# Export Date: 2024-03-09T14:05:00.000Z");
        assert_eq!(lines[4], "# Total Candidates: 1");
        assert_eq!(lines[5], "# Qualified Candidates: 1");
        assert_eq!(lines[6], "");
        assert_eq!(lines[7], CSV_HEADERS.join(","));
    }

    #[test]
    fn test_row_quotes_every_field_and_doubles_quotes() {
        let csv = export_csv(&[scored()], Some(&job()), exported_at()).unwrap();
        let row = csv.lines().nth(8).unwrap();
        assert_eq!(
            row,
            "\"Jane Doe\",\"jane \"\"JD\"\" doe.txt\",\"72\",\"qualified\",\"jane@example.com\",\"N/A\",\
             \"Python; Docker\",\"Python; Docker; SQL\",\"\",\"\",\"No\",\"Contains tab characters\",\
             \"2024-01-01T00:00:00.000Z\""
        );
    }

    #[test]
    fn test_missing_job_renders_na() {
        let csv = export_csv(&[], None, exported_at()).unwrap();
        assert!(csv.contains("# Job Title: N/A\n"));
        assert!(csv.contains("# Company: N/A\n"));
        assert!(csv.contains("# Total Candidates: 0\n"));
        assert!(csv.ends_with(&format!("{}\n", CSV_HEADERS.join(","))));
    }
}
