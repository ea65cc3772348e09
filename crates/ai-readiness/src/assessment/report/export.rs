use chrono::{NaiveDate, Utc};
use regex::Regex;
use std::sync::OnceLock;

use super::super::brief::BriefTimezone;
use super::super::domain::Submission;
use super::super::record::StoredAssessment;
use super::views::AssessmentRow;

const CSV_HEADERS: [&str; 7] = [
    "Date",
    "Company",
    "Industry",
    "Employees",
    "Email",
    "Score",
    "Segment",
];

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to write CSV export: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to finish CSV export: {0}")]
    Buffer(String),
    #[error("failed to serialize assessment: {0}")]
    Json(#[from] serde_json::Error),
}

/// Render the admin listing as CSV, newest first, with every cell quoted.
pub fn export_csv(
    records: &[StoredAssessment],
    timezone: BriefTimezone,
) -> Result<String, ExportError> {
    let mut rows: Vec<AssessmentRow> = records.iter().map(AssessmentRow::from).collect();
    rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    let mut writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Always)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    writer.write_record(CSV_HEADERS)?;

    for row in &rows {
        writer.write_record([
            timezone.format_date(row.created_at),
            row.company_name.clone(),
            row.industry.clone(),
            row.employees.to_string(),
            row.email.clone(),
            row.maturity_score.to_string(),
            row.segment.to_string(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|err| ExportError::Buffer(err.to_string()))?;
    String::from_utf8(bytes).map_err(|err| ExportError::Buffer(err.to_string()))
}

/// Calendar date stamped into export file names, always taken in UTC.
pub fn export_date() -> NaiveDate {
    Utc::now().date_naive()
}

pub fn csv_file_name(date: NaiveDate) -> String {
    format!("assessments-export-{}.csv", date.format("%Y-%m-%d"))
}

/// Pretty-printed submission in its camelCase download shape.
pub fn export_json(submission: &Submission) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(submission)?)
}

pub fn json_file_name(company_name: &str, date: NaiveDate) -> String {
    static WHITESPACE: OnceLock<Regex> = OnceLock::new();
    let whitespace =
        WHITESPACE.get_or_init(|| Regex::new(r"\s+").expect("whitespace pattern compiles"));
    let slug = whitespace.replace_all(company_name, "-").to_lowercase();
    format!("ai-readiness-assessment-{slug}-{}.json", date.format("%Y-%m-%d"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::tests::common::{scored_submission, stored_assessment};
    use chrono::Duration;

    #[test]
    fn csv_export_quotes_cells_and_lists_newest_first() {
        let older = stored_assessment("asmt-1", [0; 6]);
        let mut newer = stored_assessment("asmt-2", [3; 6]);
        newer.company_name = "Quote \"Co\"".to_string();
        newer.created_at = older.created_at + Duration::days(1);

        let csv = export_csv(&[older, newer], BriefTimezone::parse("utc").expect("utc"))
            .expect("csv renders");
        let lines: Vec<_> = csv.lines().collect();

        assert_eq!(
            lines[0],
            "\"Date\",\"Company\",\"Industry\",\"Employees\",\"Email\",\"Score\",\"Segment\""
        );
        assert_eq!(
            lines[1],
            "\"3/16/2025\",\"Quote \"\"Co\"\"\",\"Professional Services\",\"6–15\",\"hello@harborlights.studio\",\"18\",\"Scaler\""
        );
        assert!(lines[2].ends_with("\"0\",\"Starter\""));
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn file_names_carry_the_export_date() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 15).expect("valid date");
        assert_eq!(csv_file_name(date), "assessments-export-2025-03-15.csv");
        assert_eq!(
            json_file_name("Harbor  Lights Studio", date),
            "ai-readiness-assessment-harbor-lights-studio-2025-03-15.json"
        );
    }

    #[test]
    fn export_date_is_the_utc_calendar_day() {
        let before = Utc::now().date_naive();
        let date = export_date();
        let after = Utc::now().date_naive();
        assert!(date == before || date == after);
    }

    #[test]
    fn json_export_uses_camel_case_fields() {
        let json = export_json(&scored_submission([1; 6])).expect("serializes");
        assert!(json.contains("\"companyName\": \"Harbor Lights Studio\""));
        assert!(json.contains("\"maturityScore\": 6"));
        assert!(json.contains("\"customerService\": 1"));
    }
}
