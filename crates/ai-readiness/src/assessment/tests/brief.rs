use super::common::*;
use crate::assessment::brief::{format_brief_in, RULE_WIDTH};
use crate::assessment::domain::AssessmentError;
use crate::assessment::quick_wins::quick_wins;
use crate::assessment::scoring::lowest_departments;
use crate::assessment::{Department, Segment};

fn expected_brief() -> String {
    let heavy = "═".repeat(RULE_WIDTH);
    let light = "─".repeat(RULE_WIDTH);
    let section = |header: &str| format!("{heavy}\n\n{header}\n{light}");

    [
        "AI READINESS ASSESSMENT - CONSULTANT BRIEF".to_string(),
        "Generated: 3/15/2025, 10:00:00 AM".to_string(),
        String::new(),
        section("COMPANY PROFILE"),
        "Company Name: Harbor Lights Studio".to_string(),
        "Industry: Professional Services".to_string(),
        "Team Size: 6–15 employees".to_string(),
        "Contact Role: Owner".to_string(),
        "Location: Ireland".to_string(),
        "Email: hello@harborlights.studio".to_string(),
        "Wants Follow-up Call: Yes".to_string(),
        String::new(),
        section("GOALS & PAIN POINTS"),
        "Top 2 Goals (Next 6 Months):".to_string(),
        "  • More leads\n  • Reduce admin".to_string(),
        String::new(),
        "Biggest Time-Wasters:".to_string(),
        "  • Emails & follow-ups\n  • Quoting & proposals".to_string(),
        String::new(),
        section("AI USAGE OVERVIEW"),
        "Current AI Usage Level: Using weekly".to_string(),
        String::new(),
        "AI Tools Currently Used:".to_string(),
        "  • ChatGPT\n  • Canva AI".to_string(),
        String::new(),
        String::new(),
        "Who Uses AI:".to_string(),
        "  • Owner / Leadership\n  • Marketing".to_string(),
        String::new(),
        section("AI MATURITY BY DEPARTMENT"),
        "Overall Maturity Score: 9/18".to_string(),
        "Segment: Explorer".to_string(),
        String::new(),
        "Department Breakdown:".to_string(),
        "  Customer Service: 0 (Not using)".to_string(),
        "  Sales: 1 (Experimenting)".to_string(),
        "  Marketing: 0 (Not using)".to_string(),
        "  Operations / Delivery: 2 (Implemented)".to_string(),
        "  Finance / Admin: 3 (Embedded)".to_string(),
        "  HR / People: 3 (Embedded)".to_string(),
        String::new(),
        String::new(),
        section("TOOL STACK & DATA"),
        "Customer Data Storage: CRM".to_string(),
        String::new(),
        "Core Systems:".to_string(),
        "  • Google Workspace\n  • Xero".to_string(),
        String::new(),
        section("RISK & READINESS"),
        "AI Usage Policy: Informal".to_string(),
        String::new(),
        "Data Types Handled:".to_string(),
        "  • Personal customer data".to_string(),
        String::new(),
        "Biggest AI Concern: Data privacy".to_string(),
        String::new(),
        section("ADDITIONAL COMMENTS"),
        "None provided".to_string(),
        String::new(),
        section("RECOMMENDED NEXT STEPS"),
        "Based on this assessment, the recommended approach is to:".to_string(),
        String::new(),
        "1. Address the lowest-scoring departments first (quick wins)".to_string(),
        "2. Establish clear AI usage guidelines if not already in place".to_string(),
        "3. Focus on automating the identified time-wasters".to_string(),
        "4. Align AI initiatives with the stated 6-month goals".to_string(),
        "5. Schedule a discovery call to discuss implementation roadmap".to_string(),
        String::new(),
        heavy.clone(),
    ]
    .join("\n")
}

#[test]
fn brief_matches_the_consultant_layout() {
    let brief = format_brief_in(&scored_submission([0, 1, 0, 2, 3, 3]), utc()).expect("renders");
    assert_eq!(brief, expected_brief());
}

#[test]
fn brief_contains_identity_and_result_lines() {
    let brief = format_brief_in(&scored_submission([3; 6]), utc()).expect("renders");
    assert!(brief.contains("Company Name: Harbor Lights Studio"));
    assert!(brief.contains("Email: hello@harborlights.studio"));
    assert!(brief.contains("Overall Maturity Score: 18/18"));
    assert!(brief.contains("Segment: Scaler"));
    assert!(!brief.contains("Other Tools:"));
}

#[test]
fn optional_sections_render_when_present() {
    let mut submission = submission([2, 2, 0, 0, 0, 0]);
    submission.other_ai_tools = "Jasper".to_string();
    submission.automated_processes = vec!["Website chat".to_string()];
    submission.ai_tools.clear();
    submission.wants_call = false;
    submission.comments = "Call after 3pm".to_string();

    let brief = format_brief_in(&submission.scored(), utc()).expect("renders");

    assert!(brief.contains("AI Tools Currently Used:\n  • None\n\nOther Tools: Jasper\n\nWho Uses AI:"));
    assert!(brief.contains("HR / People: 0 (Not using)\n\nAutomated Processes:\n  • Website chat\n\n"));
    assert!(brief.contains("Wants Follow-up Call: No"));
    assert!(brief.contains("Call after 3pm"));
    assert!(!brief.contains("None provided"));
}

#[test]
fn brief_rejects_unscored_or_inconsistent_submissions() {
    assert!(matches!(
        format_brief_in(&submission([1; 6]), utc()),
        Err(AssessmentError::InvalidInput(_))
    ));

    let mut mismatched = scored_submission([1; 6]);
    mismatched.segment = Some(Segment::Scaler);
    assert!(matches!(
        format_brief_in(&mismatched, utc()),
        Err(AssessmentError::InvalidInput(_))
    ));
}

#[test]
fn explorer_pipeline_end_to_end() {
    let submission = scored_submission([0, 1, 0, 2, 3, 3]);
    assert_eq!(submission.maturity_score.map(|score| score.value()), Some(9));
    assert_eq!(submission.segment, Some(Segment::Explorer));

    let lowest = lowest_departments(&submission.department_scores);
    assert_eq!(lowest, [Department::CustomerService, Department::Marketing]);

    let wins = quick_wins(&lowest);
    let titles: Vec<_> = wins.iter().map(|win| win.title).collect();
    assert_eq!(
        titles,
        [
            "Website AI Chat Assistant",
            "FAQ Knowledge Bot",
            "Missed-Call Text-Back Automation"
        ]
    );
}

#[test]
fn extreme_ratings_land_in_the_outer_segments() {
    let top = scored_submission([3; 6]);
    assert_eq!(top.maturity_score.map(|score| score.value()), Some(18));
    assert_eq!(top.segment, Some(Segment::Scaler));

    let bottom = scored_submission([0; 6]);
    assert_eq!(bottom.maturity_score.map(|score| score.value()), Some(0));
    assert_eq!(bottom.segment, Some(Segment::Starter));
    assert_eq!(
        lowest_departments(&bottom.department_scores),
        [Department::CustomerService, Department::Sales]
    );
}
