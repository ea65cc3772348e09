use super::domain::{AssessmentError, Department, QuickWin};
use std::sync::OnceLock;

/// Maximum number of recommendations returned for one assessment.
pub const QUICK_WIN_LIMIT: usize = 3;

/// Static catalog of recommendations keyed by department.
#[derive(Debug, Clone)]
pub struct QuickWinCatalog {
    entries: Vec<QuickWin>,
}

impl QuickWinCatalog {
    /// Shared catalog with three entries per department, built once.
    pub fn standard() -> &'static Self {
        static STANDARD: OnceLock<QuickWinCatalog> = OnceLock::new();
        STANDARD.get_or_init(|| Self::from_entries(STANDARD_QUICK_WINS.to_vec()))
    }

    pub fn from_entries(entries: Vec<QuickWin>) -> Self {
        Self { entries }
    }

    pub fn for_department(&self, department: Department) -> impl Iterator<Item = &QuickWin> {
        self.entries
            .iter()
            .filter(move |entry| entry.department == department)
    }

    /// Concatenate entries in the given department order and keep the first three.
    /// A department with no catalog entries contributes nothing.
    pub fn recommend(&self, departments: &[Department]) -> Vec<QuickWin> {
        departments
            .iter()
            .flat_map(|department| self.for_department(*department))
            .take(QUICK_WIN_LIMIT)
            .cloned()
            .collect()
    }

    /// Same as [`recommend`](Self::recommend) for raw department keys; an unknown
    /// key is rejected rather than skipped.
    pub fn recommend_keys<S: AsRef<str>>(
        &self,
        keys: &[S],
    ) -> Result<Vec<QuickWin>, AssessmentError> {
        let departments = keys
            .iter()
            .map(|key| Department::from_key(key.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(self.recommend(&departments))
    }
}

/// Recommendations from the standard catalog.
pub fn quick_wins(departments: &[Department]) -> Vec<QuickWin> {
    QuickWinCatalog::standard().recommend(departments)
}

const STANDARD_QUICK_WINS: [QuickWin; 18] = [
    QuickWin::new(
        Department::CustomerService,
        "Website AI Chat Assistant",
        "Deploy an AI-powered chatbot to handle common customer queries 24/7, reducing response times and freeing up your team.",
    ),
    QuickWin::new(
        Department::CustomerService,
        "FAQ Knowledge Bot",
        "Create an intelligent FAQ system that learns from customer interactions and provides instant, accurate answers.",
    ),
    QuickWin::new(
        Department::CustomerService,
        "Missed-Call Text-Back Automation",
        "Automatically send personalized SMS responses to missed calls with relevant information and callback options.",
    ),
    QuickWin::new(
        Department::Sales,
        "Lead Capture → CRM Automation",
        "Automatically capture leads from all sources and sync them to your CRM with enriched data and lead scoring.",
    ),
    QuickWin::new(
        Department::Sales,
        "Auto Follow-Ups",
        "Set up intelligent follow-up sequences that adapt based on prospect behavior and engagement.",
    ),
    QuickWin::new(
        Department::Sales,
        "AI Proposal Drafts",
        "Generate customized proposal drafts in minutes using AI, based on your templates and client requirements.",
    ),
    QuickWin::new(
        Department::Marketing,
        "Content Repurposing Workflow",
        "Transform one piece of content into multiple formats (blog → social posts → email → video script) automatically.",
    ),
    QuickWin::new(
        Department::Marketing,
        "Social Scheduling Automation",
        "AI-powered social media scheduler that suggests optimal posting times and generates engaging captions.",
    ),
    QuickWin::new(
        Department::Marketing,
        "AI Ad & Email Drafts",
        "Generate high-converting ad copy and email campaigns using AI trained on your brand voice and past performance.",
    ),
    QuickWin::new(
        Department::Operations,
        "SOP Assistant",
        "AI-powered assistant that helps staff quickly find and follow standard operating procedures with step-by-step guidance.",
    ),
    QuickWin::new(
        Department::Operations,
        "Automated Status Updates",
        "Keep clients and team members informed with automated project status updates based on real-time data.",
    ),
    QuickWin::new(
        Department::Operations,
        "Template Document Generator",
        "Generate customized documents (contracts, reports, forms) from templates with AI-powered data population.",
    ),
    QuickWin::new(
        Department::Finance,
        "Invoice Chasing Automation",
        "Automatically send payment reminders with escalating urgency, tracking responses and updating your system.",
    ),
    QuickWin::new(
        Department::Finance,
        "Expense Capture AI",
        "Snap photos of receipts and let AI extract, categorize, and log expenses automatically into your accounting system.",
    ),
    QuickWin::new(
        Department::Finance,
        "Document Extraction Automation",
        "Automatically extract key data from invoices, receipts, and financial documents into your accounting software.",
    ),
    QuickWin::new(
        Department::Hr,
        "AI Job Ad Generator",
        "Create compelling, inclusive job descriptions optimized for your target candidates in minutes.",
    ),
    QuickWin::new(
        Department::Hr,
        "Screening Question Automation",
        "Automatically screen candidates with AI-powered questionnaires that assess fit and qualifications.",
    ),
    QuickWin::new(
        Department::Hr,
        "Onboarding Checklist Assistant",
        "Automated onboarding workflows that guide new hires through tasks, documents, and training with AI support.",
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_catalog_has_three_entries_per_department() {
        let catalog = QuickWinCatalog::standard();
        for department in Department::ordered() {
            assert_eq!(catalog.for_department(department).count(), 3, "{department}");
        }
    }

    #[test]
    fn any_two_distinct_departments_yield_three_matching_entries() {
        for first in Department::ordered() {
            for second in Department::ordered() {
                if first == second {
                    continue;
                }
                let wins = quick_wins(&[first, second]);
                assert_eq!(wins.len(), QUICK_WIN_LIMIT);
                assert!(wins.iter().all(|win| win.department == first));
                assert!(wins
                    .iter()
                    .all(|win| win.department_label == first.short_label()));
            }
        }
    }

    #[test]
    fn first_department_fills_the_list_before_the_second() {
        let wins = quick_wins(&[Department::CustomerService, Department::Marketing]);
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
    fn missing_catalog_department_contributes_nothing() {
        let sparse = QuickWinCatalog::from_entries(
            QuickWinCatalog::standard()
                .for_department(Department::Sales)
                .take(2)
                .cloned()
                .collect(),
        );

        let wins = sparse.recommend(&[Department::Hr, Department::Sales]);
        assert_eq!(wins.len(), 2);
        assert!(wins.iter().all(|win| win.department == Department::Sales));
        assert!(sparse.recommend(&[]).is_empty());
    }

    #[test]
    fn unknown_department_keys_are_rejected() {
        let catalog = QuickWinCatalog::standard();
        let wins = catalog
            .recommend_keys(&["finance", "hr"])
            .expect("known keys");
        assert_eq!(wins[0].title, "Invoice Chasing Automation");

        match catalog.recommend_keys(&["finance", "legal"]) {
            Err(AssessmentError::InvalidInput(detail)) => assert!(detail.contains("legal")),
            other => panic!("expected invalid input, got {other:?}"),
        }
    }
}
