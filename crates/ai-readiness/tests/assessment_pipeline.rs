use ai_readiness::assessment::{
    classify, format_brief_in, lowest_departments, quick_wins, score, AssessmentError,
    BriefTimezone, Department, DepartmentScores, MaturityLevel, MaturityScore, QuickWinCatalog,
    Segment, Submission,
};
use serde_json::json;

fn ratings(values: [u8; 6]) -> DepartmentScores {
    DepartmentScores::from_values(values).expect("ratings in range")
}

fn submission_json() -> serde_json::Value {
    json!({
        "timestamp": "2025-05-02T16:45:00.000Z",
        "companyName": "Fernhill Dental",
        "industry": "Healthcare",
        "employees": "16–50",
        "role": "Managing Director",
        "country": "United Kingdom",
        "goals": ["Reduce admin"],
        "timeWasters": ["Scheduling", "Data entry"],
        "aiUsageLevel": "Tried it",
        "aiTools": ["None yet"],
        "otherAiTools": "",
        "aiUsers": ["Nobody yet"],
        "departmentScores": {
            "customerService": 1,
            "sales": 1,
            "marketing": 3,
            "operations": 3,
            "finance": 3,
            "hr": 3
        },
        "dataStorage": "Multiple places",
        "coreSystems": ["Microsoft 365"],
        "aiPolicy": "No",
        "dataTypes": ["Health data"],
        "biggestConcern": "Data privacy",
        "email": "practice@fernhill.example",
        "wantsCall": false
    })
}

#[test]
fn downloaded_submission_scores_and_recommends() {
    let submission: Submission =
        serde_json::from_value(submission_json()).expect("submission parses");
    submission.validate().expect("submission is valid");
    let submission = submission.scored();

    let (maturity, segment) = submission.derived().expect("scored");
    assert_eq!(maturity.value(), 14);
    assert_eq!(segment, Segment::Implementer);

    let lowest = lowest_departments(&submission.department_scores);
    assert_eq!(lowest, [Department::CustomerService, Department::Sales]);
    let wins = quick_wins(&lowest);
    assert_eq!(wins.len(), 3);
    assert!(wins
        .iter()
        .all(|win| win.department == Department::CustomerService));

    let brief = format_brief_in(&submission, BriefTimezone::parse("utc").expect("utc"))
        .expect("brief renders");
    assert!(brief.contains("Generated: 5/2/2025, 4:45:00 PM"));
    assert!(brief.contains("Team Size: 16–50 employees"));
    assert!(brief.contains("AI Tools Currently Used:\n  • None yet\n"));
    assert!(brief.contains("Wants Follow-up Call: No"));
    assert!(!brief.contains("Other Tools:"));
    assert!(!brief.contains("Automated Processes:"));
}

#[test]
fn missing_department_rating_is_rejected() {
    let mut value = submission_json();
    value["departmentScores"]
        .as_object_mut()
        .expect("object")
        .remove("hr");
    assert!(serde_json::from_value::<Submission>(value).is_err());
}

#[test]
fn unknown_department_rating_is_rejected() {
    let mut value = submission_json();
    value["departmentScores"]["legal"] = json!(2);
    assert!(serde_json::from_value::<Submission>(value).is_err());
}

#[test]
fn classification_boundaries() {
    let cases = [
        (0, Segment::Starter),
        (4, Segment::Starter),
        (5, Segment::Explorer),
        (9, Segment::Explorer),
        (10, Segment::Implementer),
        (14, Segment::Implementer),
        (15, Segment::Scaler),
        (18, Segment::Scaler),
    ];
    for (value, expected) in cases {
        let maturity = MaturityScore::new(value).expect("in range");
        assert_eq!(classify(maturity), expected, "score {value}");
    }
    assert!(matches!(
        MaturityScore::new(19),
        Err(AssessmentError::InvalidInput(_))
    ));
}

#[test]
fn score_is_the_sum_of_ratings() {
    assert_eq!(score(&ratings([1, 2, 3, 0, 1, 2])).value(), 9);
    assert_eq!(
        score(&DepartmentScores::uniform(MaturityLevel::Embedded)).value(),
        18
    );
}

#[test]
fn tie_break_follows_department_order() {
    assert_eq!(
        lowest_departments(&ratings([1, 1, 3, 3, 3, 3])),
        [Department::CustomerService, Department::Sales]
    );
    assert_eq!(
        lowest_departments(&ratings([3, 3, 3, 3, 2, 2])),
        [Department::Finance, Department::Hr]
    );
}

#[test]
fn raw_department_keys_round_trip_through_the_catalog() {
    let wins = QuickWinCatalog::standard()
        .recommend_keys(&["operations", "customerService"])
        .expect("known keys");
    let titles: Vec<_> = wins.iter().map(|win| win.title).collect();
    assert_eq!(
        titles,
        [
            "SOP Assistant",
            "Automated Status Updates",
            "Template Document Generator"
        ]
    );
}
