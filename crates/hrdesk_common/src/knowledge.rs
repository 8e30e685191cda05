//! Knowledge base: static descriptions of the HR modules and workflows.
//!
//! Read-only reference data for the conversational fallback. Relations
//! between modules are by name, resolved on lookup.

use serde::Serialize;

/// One module of the HR system
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleInfo {
    pub name: &'static str,
    pub path: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub endpoints: &'static [&'static str],
    pub related_modules: &'static [&'static str],
}

/// A canonical HR process spanning several modules
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Workflow {
    pub key: &'static str,
    pub title: &'static str,
    /// Phrases that name this workflow in a question
    pub aliases: &'static [&'static str],
    pub steps: &'static [&'static str],
    pub modules: &'static [&'static str],
    /// Suggested next questions, most relevant first
    pub follow_ups: &'static [&'static str],
}

pub static MODULES: &[ModuleInfo] = &[
    ModuleInfo {
        name: "Dashboard",
        path: "/dashboard",
        description: "At-a-glance HR metrics: headcount, open positions, leave and attendance summaries.",
        features: &["view headcount overview", "review open positions", "check leave overview", "see quick stats"],
        endpoints: &["/assistant/dashboard/headcount", "/assistant/dashboard/quick-stats"],
        related_modules: &["Employees", "Attendance", "Job Openings", "Reports"],
    },
    ModuleInfo {
        name: "Employees",
        path: "/employees",
        description: "Employee directory and lifecycle records: personal details, role, department, documents and status.",
        features: &[
            "add employee",
            "edit employee profile",
            "assign department",
            "deactivate employee",
            "export employee list",
        ],
        endpoints: &[
            "/employees",
            "/assistant/employees/missing-documents",
            "/assistant/employees/role-mismatches",
        ],
        related_modules: &["Onboarding", "Departments", "Documents", "Salary Structures"],
    },
    ModuleInfo {
        name: "Departments",
        path: "/departments",
        description: "Organisational units, department heads and reporting lines.",
        features: &["create department", "assign department head", "view department headcount"],
        endpoints: &["/departments"],
        related_modules: &["Employees", "Dashboard"],
    },
    ModuleInfo {
        name: "Documents",
        path: "/documents",
        description: "Employee document storage and verification: ID proofs, contracts and certificates.",
        features: &[
            "upload documents",
            "verify documents",
            "track missing documents",
            "set document expiry reminders",
        ],
        endpoints: &["/documents", "/assistant/employees/missing-documents"],
        related_modules: &["Employees", "Onboarding"],
    },
    ModuleInfo {
        name: "Onboarding",
        path: "/onboarding",
        description: "Checklists and tasks that take a new hire from accepted offer to first productive day.",
        features: &[
            "create onboarding checklist",
            "assign onboarding tasks",
            "track onboarding progress",
            "send welcome emails",
        ],
        endpoints: &["/onboarding", "/assistant/employees/incomplete-onboarding"],
        related_modules: &["Employees", "Offer Letters", "Documents"],
    },
    ModuleInfo {
        name: "Candidates",
        path: "/candidates",
        description: "Applicant records, resumes and stage tracking through the recruitment pipeline.",
        features: &[
            "add candidate",
            "upload resume",
            "move candidate between stages",
            "match candidates to openings",
            "reject candidate",
        ],
        endpoints: &[
            "/candidates",
            "/assistant/recruitment/candidate-matches",
            "/assistant/recruitment/pipeline-summary",
        ],
        related_modules: &["Job Openings", "Interviews", "Offer Letters"],
    },
    ModuleInfo {
        name: "Job Openings",
        path: "/job-openings",
        description: "Open requisitions with role, department, location and hiring manager.",
        features: &[
            "create job opening",
            "publish job opening",
            "close job opening",
            "track applicants per opening",
        ],
        endpoints: &["/job-openings", "/assistant/dashboard/open-positions"],
        related_modules: &["Candidates", "Interviews", "Departments"],
    },
    ModuleInfo {
        name: "Interviews",
        path: "/interviews",
        description: "Interview scheduling, panels and structured feedback.",
        features: &[
            "schedule interview",
            "assign interview panel",
            "submit interview feedback",
            "send feedback reminders",
        ],
        endpoints: &["/interviews", "/assistant/recruitment/pending-feedback"],
        related_modules: &["Candidates", "Job Openings"],
    },
    ModuleInfo {
        name: "Offer Letters",
        path: "/offer-letters",
        description: "Offer drafting, approval and acceptance tracking.",
        features: &[
            "generate offer letter",
            "approve offer",
            "send offer letter",
            "track offer acceptance",
        ],
        endpoints: &["/offer-letters"],
        related_modules: &["Candidates", "Onboarding", "Salary Structures"],
    },
    ModuleInfo {
        name: "Attendance",
        path: "/attendance",
        description: "Daily check-in and check-out records, late arrivals and attendance anomalies.",
        features: &[
            "mark attendance",
            "review daily attendance",
            "track late arrivals",
            "regularize attendance",
            "export attendance reports",
        ],
        endpoints: &[
            "/attendance",
            "/assistant/attendance/today",
            "/assistant/attendance/anomalies",
        ],
        related_modules: &["Leave Management", "Employees", "Payslips"],
    },
    ModuleInfo {
        name: "Leave Management",
        path: "/leaves",
        description: "Leave requests, approvals, balances and the holiday calendar.",
        features: &[
            "apply for leave",
            "approve leave",
            "check leave balance",
            "manage holiday calendar",
            "set leave policy",
        ],
        endpoints: &["/leaves", "/assistant/dashboard/leave-overview"],
        related_modules: &["Attendance", "Employees", "Payslips"],
    },
    ModuleInfo {
        name: "Salary Structures",
        path: "/salary-structures",
        description: "Pay components, grades and CTC breakdowns assigned to employees.",
        features: &[
            "define salary components",
            "assign salary structure",
            "revise salary",
            "view ctc breakdown",
        ],
        endpoints: &["/salary-structures"],
        related_modules: &["Payslips", "Employees", "Offer Letters"],
    },
    ModuleInfo {
        name: "Payslips",
        path: "/payslips",
        description: "Monthly payroll runs and employee payslips.",
        features: &[
            "run payroll",
            "generate payslips",
            "download payslip",
            "configure tax deductions",
            "export payroll reports",
        ],
        endpoints: &["/payslips"],
        related_modules: &["Salary Structures", "Attendance", "Leave Management"],
    },
    ModuleInfo {
        name: "Goals",
        path: "/goals",
        description: "Individual and team objectives with progress tracking.",
        features: &["create goal", "assign goal", "track goal progress", "align team goals"],
        endpoints: &["/goals"],
        related_modules: &["Performance Reviews", "Employees"],
    },
    ModuleInfo {
        name: "Performance Reviews",
        path: "/performance-reviews",
        description: "Review cycles, self-assessments, manager ratings and calibration.",
        features: &[
            "start review cycle",
            "submit self assessment",
            "write manager review",
            "calibrate ratings",
            "export review reports",
        ],
        endpoints: &["/performance-reviews"],
        related_modules: &["Goals", "Employees", "Salary Structures"],
    },
    ModuleInfo {
        name: "Reports",
        path: "/reports",
        description: "Cross-module HR reports and exports.",
        features: &["build headcount report", "build attendance report", "build payroll report", "export to csv"],
        endpoints: &["/reports"],
        related_modules: &["Dashboard", "Attendance", "Payslips"],
    },
];

pub static WORKFLOWS: &[Workflow] = &[
    Workflow {
        key: "recruitment",
        title: "Recruitment",
        aliases: &["recruitment", "recruiting", "hiring"],
        steps: &[
            "Create a job opening for the role",
            "Add candidates and screen their resumes",
            "Schedule interviews and collect panel feedback",
            "Generate and send an offer letter",
            "Hand accepted offers over to onboarding",
        ],
        modules: &["Job Openings", "Candidates", "Interviews", "Offer Letters", "Onboarding"],
        follow_ups: &[
            "Show the hiring funnel for this month",
            "Show pending interview feedback",
            "Give me a pipeline summary",
        ],
    },
    Workflow {
        key: "onboarding",
        title: "Onboarding",
        aliases: &["onboarding", "new joiner"],
        steps: &[
            "Create the employee record from the accepted offer",
            "Collect and verify joining documents",
            "Assign the onboarding checklist and buddy",
            "Assign a salary structure",
            "Track checklist progress until completion",
        ],
        modules: &["Employees", "Documents", "Onboarding", "Salary Structures"],
        follow_ups: &[
            "Who hasn't completed onboarding?",
            "Show employees with missing documents",
            "Show new hires this month",
        ],
    },
    Workflow {
        key: "payroll",
        title: "Payroll",
        aliases: &["payroll", "salary processing", "payslip generation"],
        steps: &[
            "Confirm salary structures and revisions for the month",
            "Lock attendance and approved leave",
            "Run payroll for the pay period",
            "Review and approve the payroll run",
            "Publish payslips to employees",
        ],
        modules: &["Salary Structures", "Attendance", "Leave Management", "Payslips"],
        follow_ups: &[
            "Tell me about the Payslips module",
            "Show attendance anomalies",
            "Show leave overview",
        ],
    },
    Workflow {
        key: "performance",
        title: "Performance Review",
        aliases: &["performance review", "appraisal", "review cycle"],
        steps: &[
            "Set goals for the review period",
            "Start the review cycle",
            "Collect self-assessments",
            "Collect manager reviews and calibrate ratings",
            "Share outcomes and feed revisions into salary structures",
        ],
        modules: &["Goals", "Performance Reviews", "Salary Structures"],
        follow_ups: &[
            "Tell me about the Goals module",
            "How do I start a review cycle?",
            "Find role mismatches",
        ],
    },
    Workflow {
        key: "leave",
        title: "Leave Approval",
        aliases: &["leave approval", "leave application", "time off request"],
        steps: &[
            "Employee applies for leave",
            "Manager reviews the request against the balance",
            "Approved leave updates the attendance calendar",
            "Leave is reflected in the next payroll run",
        ],
        modules: &["Leave Management", "Attendance", "Payslips"],
        follow_ups: &[
            "Show leave overview",
            "Who is absent today?",
            "How do I approve leave?",
        ],
    },
    Workflow {
        key: "offboarding",
        title: "Offboarding",
        aliases: &["offboarding", "exit process", "resignation"],
        steps: &[
            "Record the resignation or termination",
            "Collect company assets and exit documents",
            "Process the final settlement in payroll",
            "Deactivate the employee record",
        ],
        modules: &["Employees", "Documents", "Payslips"],
        follow_ups: &[
            "Explain the payroll workflow",
            "Give me department-wise headcount",
        ],
    },
];

pub fn all_modules() -> &'static [ModuleInfo] {
    MODULES
}

/// Lowercase, punctuation to spaces, padded so `contains(" word ")` works
pub(crate) fn normalize(text: &str) -> String {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect();
    format!(" {} ", cleaned.split_whitespace().collect::<Vec<_>>().join(" "))
}

/// Phrases that refer to a module: name, singular name, path slug
pub fn module_aliases(module: &ModuleInfo) -> Vec<String> {
    let mut aliases = Vec::new();
    let mut push = |alias: String| {
        if !alias.is_empty() && !aliases.contains(&alias) {
            aliases.push(alias);
        }
    };

    let name = module.name.to_lowercase();
    if let Some(singular) = name.strip_suffix('s') {
        push(singular.to_string());
    }
    push(name);

    let slug = module.path.trim_start_matches('/').replace('-', " ");
    if let Some(singular) = slug.strip_suffix('s') {
        push(singular.to_string());
    }
    push(slug);

    aliases
}

/// Case-insensitive exact name match, else first name containing `name`
pub fn find_by_name(name: &str) -> Option<&'static ModuleInfo> {
    let needle = name.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }
    MODULES
        .iter()
        .find(|m| m.name.to_lowercase() == needle)
        .or_else(|| MODULES.iter().find(|m| m.name.to_lowercase().contains(&needle)))
}

/// Exact path match, else the module whose path is the longest prefix
pub fn find_by_path(path: &str) -> Option<&'static ModuleInfo> {
    let path = path.trim().trim_end_matches('/');
    if path.is_empty() {
        return None;
    }
    if let Some(exact) = MODULES.iter().find(|m| m.path == path) {
        return Some(exact);
    }
    MODULES
        .iter()
        .filter(|m| {
            path.strip_prefix(m.path)
                .is_some_and(|rest| rest.starts_with('/'))
        })
        .max_by_key(|m| m.path.len())
}

/// Modules matching a keyword.
///
/// Name and path hits come first, then feature and description hits; each
/// group keeps knowledge-base order.
pub fn find_by_keyword(keyword: &str) -> Vec<&'static ModuleInfo> {
    let kw = keyword.trim().to_lowercase();
    if kw.is_empty() {
        return vec![];
    }

    let (primary, secondary): (Vec<&'static ModuleInfo>, Vec<&'static ModuleInfo>) = MODULES
        .iter()
        .filter(|m| {
            m.name.to_lowercase().contains(&kw)
                || m.path.contains(&kw)
                || m.features.iter().any(|f| f.contains(&kw))
                || m.description.to_lowercase().contains(&kw)
        })
        .partition(|m| m.name.to_lowercase().contains(&kw) || m.path.contains(&kw));

    primary.into_iter().chain(secondary).collect()
}

/// Modules listed as related to `name`; unknown references are skipped
pub fn find_related(name: &str) -> Vec<&'static ModuleInfo> {
    find_by_name(name)
        .map(|module| {
            module
                .related_modules
                .iter()
                .filter_map(|related| MODULES.iter().find(|m| m.name == *related))
                .collect()
        })
        .unwrap_or_default()
}

/// Modules mentioned by name or path slug, in order of first mention
pub fn mentioned_modules(query: &str) -> Vec<&'static ModuleInfo> {
    let text = normalize(query);
    let mut hits: Vec<(usize, &'static ModuleInfo)> = MODULES
        .iter()
        .filter_map(|m| {
            module_aliases(m)
                .iter()
                .filter_map(|alias| text.find(&format!(" {} ", alias)))
                .min()
                .map(|pos| (pos, m))
        })
        .collect();
    hits.sort_by_key(|(pos, _)| *pos);
    hits.into_iter().map(|(_, m)| m).collect()
}

/// First workflow named in the query
pub fn find_workflow(query: &str) -> Option<&'static Workflow> {
    let text = normalize(query);
    WORKFLOWS.iter().find(|w| {
        w.aliases
            .iter()
            .any(|alias| text.contains(&format!(" {} ", alias)))
    })
}

/// Resolve workflow module names to records
pub fn workflow_modules(workflow: &Workflow) -> Vec<&'static ModuleInfo> {
    workflow
        .modules
        .iter()
        .filter_map(|name| MODULES.iter().find(|m| m.name == *name))
        .collect()
}
