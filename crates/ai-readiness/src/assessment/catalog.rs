//! Fixed option lists shared by the draft validator, the recommender, and the
//! catalog endpoint.

use super::domain::{AiPolicy, AiUsageLevel, Department, EmployeeBracket, MaturityLevel};
use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

pub const GOAL_LIMIT: usize = 2;
pub const TIME_WASTER_LIMIT: usize = 3;
pub const CORE_SYSTEM_LIMIT: usize = 6;
pub const COMMENT_LIMIT: usize = 200;

pub const NO_AI_TOOLS: &str = "None yet";
pub const NO_AI_USERS: &str = "Nobody yet";
pub const NO_DATA_TYPES: &str = "None";

pub const INDUSTRIES: &[&str] = &[
    "Retail / eCommerce",
    "Professional Services",
    "Trades & Construction",
    "Hospitality",
    "Healthcare",
    "Education",
    "Manufacturing",
    "Logistics",
    "Other",
];

pub const ROLES: &[&str] = &[
    "Owner",
    "Managing Director",
    "Operations",
    "Sales",
    "Marketing",
    "IT",
    "Finance",
    "Other",
];

pub const GOALS: &[&str] = &[
    "More leads",
    "Better conversion",
    "Faster delivery",
    "Reduce admin",
    "Improve customer support",
    "Reduce costs",
    "Better reporting",
    "Hiring & retention",
    "Compliance",
    "Other",
];

pub const TIME_WASTERS: &[&str] = &[
    "Emails & follow-ups",
    "Scheduling",
    "Data entry",
    "Quoting & proposals",
    "Customer enquiries",
    "Invoicing & chasing payments",
    "Social content",
    "Internal reporting",
    "Hiring admin",
    "Other",
];

/// Group of AI tools presented together in the form.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ToolCategory {
    pub name: &'static str,
    pub tools: &'static [&'static str],
}

pub const AI_TOOL_CATEGORIES: &[ToolCategory] = &[
    ToolCategory {
        name: "General AI",
        tools: &[
            "ChatGPT",
            "Microsoft Copilot",
            "Google Gemini",
            "Claude",
            "Perplexity",
        ],
    },
    ToolCategory {
        name: "Productivity & Meetings",
        tools: &[
            "Otter.ai",
            "Fireflies.ai",
            "Zoom AI Companion",
            "Notion AI",
            "Grammarly",
        ],
    },
    ToolCategory {
        name: "Design & Content",
        tools: &["Canva AI", "Adobe Firefly", "Midjourney", "DALL·E", "Runway"],
    },
    ToolCategory {
        name: "Video & Avatars",
        tools: &["HeyGen", "Synthesia", "Descript", "CapCut (AI)"],
    },
    ToolCategory {
        name: "Voice",
        tools: &["ElevenLabs"],
    },
    ToolCategory {
        name: "Customer Support & CRM",
        tools: &["Intercom AI", "Zendesk AI", "HubSpot AI"],
    },
    ToolCategory {
        name: "Automation",
        tools: &["Zapier", "Make.com", "n8n"],
    },
    ToolCategory {
        name: "Development",
        tools: &["GitHub Copilot", "Cursor"],
    },
];

pub const AI_USERS: &[&str] = &[
    "Owner / Leadership",
    "Sales",
    "Marketing",
    "Customer Service",
    "Finance",
    "Operations",
    "HR",
    "IT",
    NO_AI_USERS,
];

pub const AUTOMATED_PROCESSES: &[&str] = &[
    "Website chat",
    "Lead capture to CRM",
    "Auto follow-ups",
    "Meeting booking",
    "Proposal generation",
    "Reporting dashboards",
    "Invoice reminders",
    "Document processing",
    "Internal knowledge base / SOP assistant",
    "Other",
];

pub const DATA_STORAGE: &[&str] = &[
    "Spreadsheet",
    "CRM",
    "Accounting system",
    "eCommerce platform",
    "Email inbox",
    "Multiple places",
    "Not sure",
];

pub const CORE_SYSTEMS: &[&str] = &[
    "Google Workspace",
    "Microsoft 365",
    "HubSpot",
    "Salesforce",
    "Pipedrive",
    "Zoho",
    "Shopify",
    "WooCommerce",
    "Wix",
    "Squarespace",
    "Xero",
    "QuickBooks",
    "Sage",
    "Slack",
    "Teams",
    "Asana",
    "Trello",
    "Monday",
    "Other",
];

pub const DATA_TYPES: &[&str] = &[
    "Personal customer data",
    "Payment data",
    "Health data",
    "Legal / confidential client data",
    NO_DATA_TYPES,
    "Not sure",
];

pub const CONCERNS: &[&str] = &[
    "Data privacy",
    "Wrong answers",
    "Reputation risk",
    "Cost",
    "Complexity",
    "Staff adoption",
    "Don't know where to start",
];

pub fn is_known_ai_tool(tool: &str) -> bool {
    tool == NO_AI_TOOLS
        || AI_TOOL_CATEGORIES
            .iter()
            .any(|category| category.tools.contains(&tool))
}

/// Basic `local@domain.tld` shape check.
pub fn is_valid_email(email: &str) -> bool {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL
        .get_or_init(|| {
            Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
        })
        .is_match(email)
}

#[derive(Debug, Clone, Serialize)]
pub struct LabeledOption {
    pub key: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct SelectionLimits {
    pub goals: usize,
    pub time_wasters: usize,
    pub core_systems: usize,
    pub comment_chars: usize,
}

/// Serializable snapshot of every option list, for form renderers.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentCatalog {
    pub industries: &'static [&'static str],
    pub employee_brackets: Vec<&'static str>,
    pub roles: &'static [&'static str],
    pub goals: &'static [&'static str],
    pub time_wasters: &'static [&'static str],
    pub ai_usage_levels: Vec<&'static str>,
    pub ai_tool_categories: &'static [ToolCategory],
    pub no_ai_tools: &'static str,
    pub ai_users: &'static [&'static str],
    pub departments: Vec<LabeledOption>,
    pub maturity_levels: Vec<&'static str>,
    pub automated_processes: &'static [&'static str],
    pub data_storage: &'static [&'static str],
    pub core_systems: &'static [&'static str],
    pub ai_policies: Vec<&'static str>,
    pub data_types: &'static [&'static str],
    pub concerns: &'static [&'static str],
    pub limits: SelectionLimits,
}

impl AssessmentCatalog {
    pub fn standard() -> Self {
        Self {
            industries: INDUSTRIES,
            employee_brackets: EmployeeBracket::ordered()
                .iter()
                .map(|bracket| bracket.label())
                .collect(),
            roles: ROLES,
            goals: GOALS,
            time_wasters: TIME_WASTERS,
            ai_usage_levels: AiUsageLevel::ordered()
                .iter()
                .map(|level| level.label())
                .collect(),
            ai_tool_categories: AI_TOOL_CATEGORIES,
            no_ai_tools: NO_AI_TOOLS,
            ai_users: AI_USERS,
            departments: Department::ordered()
                .iter()
                .map(|department| LabeledOption {
                    key: department.key(),
                    label: department.label(),
                })
                .collect(),
            maturity_levels: MaturityLevel::ordered()
                .iter()
                .map(|level| level.label())
                .collect(),
            automated_processes: AUTOMATED_PROCESSES,
            data_storage: DATA_STORAGE,
            core_systems: CORE_SYSTEMS,
            ai_policies: AiPolicy::ordered()
                .iter()
                .map(|policy| policy.label())
                .collect(),
            data_types: DATA_TYPES,
            concerns: CONCERNS,
            limits: SelectionLimits {
                goals: GOAL_LIMIT,
                time_wasters: TIME_WASTER_LIMIT,
                core_systems: CORE_SYSTEM_LIMIT,
                comment_chars: COMMENT_LIMIT,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_shape_matches_form_rules() {
        assert!(is_valid_email("owner@acme.co.uk"));
        assert!(!is_valid_email("owner@acme"));
        assert!(!is_valid_email("owner acme@example.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn tool_lookup_covers_every_category_and_sentinel() {
        assert!(is_known_ai_tool("ElevenLabs"));
        assert!(is_known_ai_tool("Cursor"));
        assert!(is_known_ai_tool(NO_AI_TOOLS));
        assert!(!is_known_ai_tool("Abacus"));
    }

    #[test]
    fn standard_catalog_lists_departments_in_declaration_order() {
        let catalog = AssessmentCatalog::standard();
        let keys: Vec<_> = catalog.departments.iter().map(|option| option.key).collect();
        assert_eq!(
            keys,
            ["customerService", "sales", "marketing", "operations", "finance", "hr"]
        );
        assert_eq!(catalog.maturity_levels[3], "Embedded");
        assert_eq!(catalog.limits.core_systems, 6);
    }
}
