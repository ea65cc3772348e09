use crate::infra::{in_memory_service, parse_timezone};
use ai_readiness::assessment::report::{
    build_results, csv_file_name, export_date, export_json, json_file_name,
};
use ai_readiness::assessment::{
    AiPolicy, AiUsageLevel, AssessmentDraft, AssessmentError, AssessmentId, AssessmentResults,
    AssessmentStep, BriefTimezone, Department, EmployeeBracket, MaturityLevel, QuickWinCatalog,
    Selection, StoredAssessment, Submission, SubmitAssessment,
};
use ai_readiness::error::AppError;
use chrono::Utc;
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct BriefArgs {
    /// Submission JSON file (camelCase fields, as downloaded from the results page)
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Print the full results payload as JSON instead of the text brief
    #[arg(long)]
    pub(crate) json: bool,
    /// Timezone for the Generated line: local, utc, or an offset like +02:00
    #[arg(long, value_parser = parse_timezone)]
    pub(crate) timezone: Option<BriefTimezone>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Timezone for the Generated line: local, utc, or an offset like +02:00
    #[arg(long, value_parser = parse_timezone)]
    pub(crate) timezone: Option<BriefTimezone>,
    /// Skip the admin overview and CSV export preview.
    #[arg(long)]
    pub(crate) skip_export: bool,
}

pub(crate) fn run_brief(args: BriefArgs) -> Result<(), AppError> {
    let BriefArgs {
        input,
        json,
        timezone,
    } = args;

    let raw = std::fs::read_to_string(&input)?;
    let submission: Submission = serde_json::from_str(&raw)?;
    let results = preview_results(submission, timezone.unwrap_or_default())?;

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        render_results(&results);
        println!("\n{}", results.consultant_brief);
    }
    Ok(())
}

/// Results for a submission that is scored locally and never stored.
fn preview_results(
    submission: Submission,
    timezone: BriefTimezone,
) -> Result<AssessmentResults, AppError> {
    let submission = submission.normalized();
    submission.validate()?;
    let record = StoredAssessment::from_submission(
        AssessmentId("preview".to_string()),
        Utc::now(),
        None,
        submission,
    )?;
    Ok(build_results(&record, QuickWinCatalog::standard(), timezone)?)
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        timezone,
        skip_export,
    } = args;
    let timezone = timezone.unwrap_or_default();

    println!("AI readiness assessment demo");
    let draft = demo_draft()?;
    for step in AssessmentStep::ordered() {
        let status = match draft.validate_step(step) {
            Ok(()) => "complete".to_string(),
            Err(errors) => errors.to_string(),
        };
        println!(
            "  Step {} of 7 - {}: {}",
            step.number(),
            step.title(),
            status
        );
    }

    let (service, _) = in_memory_service(timezone);
    let stored = service.submit_draft(draft, Some("demo-user".to_string()))?;
    let results = service.results(&stored.id)?;
    println!("\nStored assessment {}", stored.id);
    render_results(&results);
    println!("\n{}", results.consultant_brief);

    if skip_export {
        return Ok(());
    }

    for (company, ratings) in [
        ("Copper Kettle Cafe", [0u8, 0, 1, 0, 1, 0]),
        ("Northwind Logistics", [3, 3, 2, 3, 2, 3]),
    ] {
        let mut submission = results.submission.clone();
        submission.company_name = company.to_string();
        for (department, value) in Department::ordered().into_iter().zip(ratings) {
            submission
                .department_scores
                .set(department, MaturityLevel::try_from(value)?);
        }
        service.submit(SubmitAssessment {
            submission,
            user_id: None,
        })?;
    }

    let overview = service.overview()?;
    println!("\nAdmin overview");
    println!(
        "- {} assessments | {} unique users | average score {:.1}/18",
        overview.total_assessments, overview.unique_users, overview.average_score
    );
    for entry in &overview.segment_distribution {
        println!("  - {}: {}", entry.segment, entry.count);
    }
    if let Some(segment) = overview.most_common_segment {
        println!("- Most common segment: {segment}");
    }

    let today = export_date();
    println!("\nCSV export preview ({})", csv_file_name(today));
    println!("{}", service.export_csv()?);

    let download = export_json(&results.submission)?;
    println!(
        "JSON download {} ({} bytes)",
        json_file_name(&results.submission.company_name, today),
        download.len()
    );

    Ok(())
}

fn render_results(results: &AssessmentResults) {
    println!(
        "- {}: {}/{} -> {}",
        results.submission.company_name,
        results.maturity_score,
        results.max_score,
        results.segment
    );
    println!("  {}", results.segment_description);
    println!("  Lowest-rated departments:");
    for entry in &results.lowest_departments {
        println!(
            "    - {}: {} ({})",
            entry.label, entry.score, entry.maturity_label
        );
    }
    println!("  Quick wins:");
    for win in &results.quick_wins {
        println!("    - [{}] {}", win.department_label, win.title);
    }
}

fn demo_draft() -> Result<AssessmentDraft, AppError> {
    let mut draft = AssessmentDraft::new();
    draft
        .set_company_name("Harbor Lights Studio")
        .set_industry("Professional Services")
        .set_employees(EmployeeBracket::SixToFifteen)
        .set_role("Owner")
        .set_country("Ireland")
        .set_ai_usage_level(AiUsageLevel::Weekly)
        .set_other_ai_tools("Jasper")
        .set_data_storage("CRM")
        .set_ai_policy(AiPolicy::Informal)
        .set_biggest_concern("Data privacy")
        .set_email("hello@harborlights.studio")
        .set_wants_call(true)
        .set_comments("Keen to start with customer enquiries.");

    let ratings = [
        (Department::CustomerService, MaturityLevel::NotUsing),
        (Department::Sales, MaturityLevel::Experimenting),
        (Department::Marketing, MaturityLevel::NotUsing),
        (Department::Operations, MaturityLevel::Implemented),
        (Department::Finance, MaturityLevel::Embedded),
        (Department::Hr, MaturityLevel::Embedded),
    ];
    for (department, level) in ratings {
        draft.set_department_score(department, level);
    }

    let toggles: [(&str, fn(&mut AssessmentDraft, &str) -> Result<Selection, AssessmentError>); 8] = [
        ("More leads", AssessmentDraft::toggle_goal),
        ("Reduce admin", AssessmentDraft::toggle_goal),
        ("Emails & follow-ups", AssessmentDraft::toggle_time_waster),
        ("ChatGPT", AssessmentDraft::toggle_ai_tool),
        ("Owner / Leadership", AssessmentDraft::toggle_ai_user),
        ("Invoice reminders", AssessmentDraft::toggle_automated_process),
        ("Xero", AssessmentDraft::toggle_core_system),
        ("Personal customer data", AssessmentDraft::toggle_data_type),
    ];
    for (value, toggle) in toggles {
        toggle(&mut draft, value)?;
    }

    Ok(draft)
}
