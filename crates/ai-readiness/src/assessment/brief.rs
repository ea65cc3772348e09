use super::domain::{AssessmentError, Department, Submission};
use chrono::{DateTime, FixedOffset, Local, TimeZone, Utc};
use std::fmt;

/// Width of the section dividers in the consultant brief.
pub const RULE_WIDTH: usize = 59;

const TITLE: &str = "AI READINESS ASSESSMENT - CONSULTANT BRIEF";
const BULLET: &str = "  • ";
const TIMESTAMP_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";
const DATE_FORMAT: &str = "%-m/%-d/%Y";

const NEXT_STEPS: [&str; 5] = [
    "1. Address the lowest-scoring departments first (quick wins)",
    "2. Establish clear AI usage guidelines if not already in place",
    "3. Focus on automating the identified time-wasters",
    "4. Align AI initiatives with the stated 6-month goals",
    "5. Schedule a discovery call to discuss implementation roadmap",
];

/// Timezone used to render the `Generated:` line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BriefTimezone {
    #[default]
    Local,
    Fixed(FixedOffset),
}

impl BriefTimezone {
    /// Accepts `local`, `utc`/`z`, or an offset such as `+02:00` / `-0530`.
    pub fn parse(raw: &str) -> Option<Self> {
        let value = raw.trim();
        match value.to_ascii_lowercase().as_str() {
            "local" => return Some(Self::Local),
            "utc" | "z" => return FixedOffset::east_opt(0).map(Self::Fixed),
            _ => {}
        }

        let (sign, digits) = match value.as_bytes().first()? {
            b'+' => (1, &value[1..]),
            b'-' => (-1, &value[1..]),
            _ => return None,
        };
        let digits: String = digits.chars().filter(|ch| *ch != ':').collect();
        if digits.len() != 4 || !digits.chars().all(|ch| ch.is_ascii_digit()) {
            return None;
        }
        let hours: i32 = digits[..2].parse().ok()?;
        let minutes: i32 = digits[2..].parse().ok()?;
        if minutes >= 60 {
            return None;
        }
        FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60)).map(Self::Fixed)
    }

    fn render(self, timestamp: &str) -> String {
        match self {
            Self::Local => render_timestamp(timestamp, &Local),
            Self::Fixed(offset) => render_timestamp(timestamp, &offset),
        }
    }

    /// Calendar date (`M/D/YYYY`) of an instant in this zone.
    pub fn format_date(self, instant: DateTime<Utc>) -> String {
        match self {
            Self::Local => instant.with_timezone(&Local).format(DATE_FORMAT).to_string(),
            Self::Fixed(offset) => instant.with_timezone(&offset).format(DATE_FORMAT).to_string(),
        }
    }
}

fn render_timestamp<Tz>(timestamp: &str, zone: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    match DateTime::parse_from_rfc3339(timestamp.trim()) {
        Ok(parsed) => parsed
            .with_timezone(zone)
            .format(TIMESTAMP_FORMAT)
            .to_string(),
        Err(_) => timestamp.to_string(),
    }
}

/// Render the consultant brief with timestamps in the host's local zone.
pub fn format_brief(submission: &Submission) -> Result<String, AssessmentError> {
    format_brief_in(submission, BriefTimezone::Local)
}

/// Render the consultant brief. The submission must already carry a score and a
/// segment consistent with it.
pub fn format_brief_in(
    submission: &Submission,
    timezone: BriefTimezone,
) -> Result<String, AssessmentError> {
    let (score, segment) = submission.derived()?;
    let mut brief = BriefBuilder::default();

    brief.line(TITLE);
    brief.line(format!("Generated: {}", timezone.render(&submission.timestamp)));
    brief.blank();

    brief.section("COMPANY PROFILE");
    brief.line(format!("Company Name: {}", submission.company_name));
    brief.line(format!("Industry: {}", submission.industry));
    brief.line(format!("Team Size: {} employees", submission.employees.label()));
    brief.line(format!("Contact Role: {}", submission.role));
    brief.line(format!("Location: {}", submission.country));
    brief.line(format!("Email: {}", submission.email));
    brief.line(format!(
        "Wants Follow-up Call: {}",
        if submission.wants_call { "Yes" } else { "No" }
    ));
    brief.blank();

    brief.section("GOALS & PAIN POINTS");
    brief.line("Top 2 Goals (Next 6 Months):");
    brief.bullets(&submission.goals);
    brief.blank();
    brief.line("Biggest Time-Wasters:");
    brief.bullets(&submission.time_wasters);
    brief.blank();

    brief.section("AI USAGE OVERVIEW");
    brief.line(format!(
        "Current AI Usage Level: {}",
        submission.ai_usage_level.label()
    ));
    brief.blank();
    brief.line("AI Tools Currently Used:");
    if submission.ai_tools.is_empty() {
        brief.line(format!("{BULLET}None"));
    } else {
        brief.bullets(&submission.ai_tools);
    }
    brief.blank();
    if !submission.other_ai_tools.is_empty() {
        brief.line(format!("Other Tools: {}", submission.other_ai_tools));
    }
    brief.blank();
    brief.line("Who Uses AI:");
    brief.bullets(&submission.ai_users);
    brief.blank();

    brief.section("AI MATURITY BY DEPARTMENT");
    brief.line(format!("Overall Maturity Score: {score}/18"));
    brief.line(format!("Segment: {segment}"));
    brief.blank();
    brief.line("Department Breakdown:");
    for department in Department::ordered() {
        let level = submission.department_scores.get(department);
        brief.line(format!(
            "  {}: {} ({})",
            department.label(),
            level.value(),
            level.label()
        ));
    }
    brief.blank();
    if !submission.automated_processes.is_empty() {
        brief.line("Automated Processes:");
        brief.bullets(&submission.automated_processes);
    }
    brief.blank();

    brief.section("TOOL STACK & DATA");
    brief.line(format!("Customer Data Storage: {}", submission.data_storage));
    brief.blank();
    brief.line("Core Systems:");
    brief.bullets(&submission.core_systems);
    brief.blank();

    brief.section("RISK & READINESS");
    brief.line(format!("AI Usage Policy: {}", submission.ai_policy.label()));
    brief.blank();
    brief.line("Data Types Handled:");
    brief.bullets(&submission.data_types);
    brief.blank();
    brief.line(format!("Biggest AI Concern: {}", submission.biggest_concern));
    brief.blank();

    brief.section("ADDITIONAL COMMENTS");
    if submission.comments.is_empty() {
        brief.line("None provided");
    } else {
        brief.line(submission.comments.as_str());
    }
    brief.blank();

    brief.section("RECOMMENDED NEXT STEPS");
    brief.line("Based on this assessment, the recommended approach is to:");
    brief.blank();
    for step in NEXT_STEPS {
        brief.line(step);
    }
    brief.blank();
    brief.rule('═');

    Ok(brief.finish())
}

#[derive(Default)]
struct BriefBuilder {
    lines: Vec<String>,
}

impl BriefBuilder {
    fn line(&mut self, text: impl Into<String>) {
        self.lines.push(text.into());
    }

    fn blank(&mut self) {
        self.lines.push(String::new());
    }

    fn rule(&mut self, glyph: char) {
        self.lines.push(glyph.to_string().repeat(RULE_WIDTH));
    }

    /// Divider, blank line, header and underline.
    fn section(&mut self, header: &str) {
        self.rule('═');
        self.blank();
        self.line(header);
        self.rule('─');
    }

    /// One bullet per item on consecutive lines; an empty list still occupies
    /// its (empty) line.
    fn bullets(&mut self, items: &[String]) {
        let block = items
            .iter()
            .map(|item| format!("{BULLET}{item}"))
            .collect::<Vec<_>>()
            .join("\n");
        self.lines.push(block);
    }

    fn finish(self) -> String {
        self.lines.join("\n")
    }
}
