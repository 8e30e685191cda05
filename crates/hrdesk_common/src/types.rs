//! Shared data model: categories, query types, parameters, backend
//! responses and transcript messages.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Coarse intent category a query is routed to.
///
/// Declaration order is routing priority: a query matching several
/// categories goes to the one declared first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryCategory {
    Employee,
    Recruitment,
    Attendance,
    Dashboard,
    None,
}

impl QueryCategory {
    /// Data-backed categories in routing priority order
    pub const ROUTED: [QueryCategory; 4] = [
        QueryCategory::Employee,
        QueryCategory::Recruitment,
        QueryCategory::Attendance,
        QueryCategory::Dashboard,
    ];

    /// Lower index = tried earlier
    pub fn priority(&self) -> usize {
        match self {
            Self::Employee => 0,
            Self::Recruitment => 1,
            Self::Attendance => 2,
            Self::Dashboard => 3,
            Self::None => 4,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Employee => "employee",
            Self::Recruitment => "recruitment",
            Self::Attendance => "attendance",
            Self::Dashboard => "dashboard",
            Self::None => "none",
        }
    }
}

impl std::fmt::Display for QueryCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Fine-grained data query, one per backend endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum QueryType {
    // Employee lifecycle
    MissingDocuments,
    IncompleteOnboarding,
    RoleMismatches,
    NewHires,
    // Recruitment
    PendingFeedback,
    CandidateMatching,
    HiringFunnel,
    PipelineSummary,
    // Attendance
    TodayAttendance,
    AbsenteePatterns,
    LateComers,
    AttendanceAnomalies,
    // Dashboard
    Headcount,
    OpenPositions,
    LeaveOverview,
    QuickStats,
}

impl QueryType {
    /// Every query type in routing priority order
    pub const ALL: [QueryType; 16] = [
        QueryType::MissingDocuments,
        QueryType::IncompleteOnboarding,
        QueryType::RoleMismatches,
        QueryType::NewHires,
        QueryType::PendingFeedback,
        QueryType::CandidateMatching,
        QueryType::HiringFunnel,
        QueryType::PipelineSummary,
        QueryType::TodayAttendance,
        QueryType::AbsenteePatterns,
        QueryType::LateComers,
        QueryType::AttendanceAnomalies,
        QueryType::Headcount,
        QueryType::OpenPositions,
        QueryType::LeaveOverview,
        QueryType::QuickStats,
    ];

    pub fn category(&self) -> QueryCategory {
        match self {
            Self::MissingDocuments
            | Self::IncompleteOnboarding
            | Self::RoleMismatches
            | Self::NewHires => QueryCategory::Employee,
            Self::PendingFeedback
            | Self::CandidateMatching
            | Self::HiringFunnel
            | Self::PipelineSummary => QueryCategory::Recruitment,
            Self::TodayAttendance
            | Self::AbsenteePatterns
            | Self::LateComers
            | Self::AttendanceAnomalies => QueryCategory::Attendance,
            Self::Headcount | Self::OpenPositions | Self::LeaveOverview | Self::QuickStats => {
                QueryCategory::Dashboard
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MissingDocuments => "missingDocuments",
            Self::IncompleteOnboarding => "incompleteOnboarding",
            Self::RoleMismatches => "roleMismatches",
            Self::NewHires => "newHires",
            Self::PendingFeedback => "pendingFeedback",
            Self::CandidateMatching => "candidateMatching",
            Self::HiringFunnel => "hiringFunnel",
            Self::PipelineSummary => "pipelineSummary",
            Self::TodayAttendance => "todayAttendance",
            Self::AbsenteePatterns => "absenteePatterns",
            Self::LateComers => "lateComers",
            Self::AttendanceAnomalies => "attendanceAnomalies",
            Self::Headcount => "headcount",
            Self::OpenPositions => "openPositions",
            Self::LeaveOverview => "leaveOverview",
            Self::QuickStats => "quickStats",
        }
    }

    /// Human title used as a markdown heading
    pub fn title(&self) -> &'static str {
        match self {
            Self::MissingDocuments => "Employees with Missing Documents",
            Self::IncompleteOnboarding => "Incomplete Onboarding",
            Self::RoleMismatches => "Role Mismatches",
            Self::NewHires => "New Hires",
            Self::PendingFeedback => "Pending Interview Feedback",
            Self::CandidateMatching => "Candidate Matches",
            Self::HiringFunnel => "Hiring Funnel",
            Self::PipelineSummary => "Recruitment Pipeline",
            Self::TodayAttendance => "Today's Attendance",
            Self::AbsenteePatterns => "Absentee Patterns",
            Self::LateComers => "Late Comers",
            Self::AttendanceAnomalies => "Attendance Anomalies",
            Self::Headcount => "Headcount Distribution",
            Self::OpenPositions => "Open Positions",
            Self::LeaveOverview => "Leave Overview",
            Self::QuickStats => "Quick Stats",
        }
    }
}

impl std::fmt::Display for QueryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Time period mentioned in a query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimePeriod {
    Today,
    Week,
    Month,
}

impl std::fmt::Display for TimePeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Today => write!(f, "today"),
            Self::Week => write!(f, "week"),
            Self::Month => write!(f, "month"),
        }
    }
}

/// Half-open or closed UTC interval sent to the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    #[serde(rename = "start_date")]
    pub start: DateTime<Utc>,
    #[serde(rename = "end_date")]
    pub end: DateTime<Utc>,
}

impl DateRange {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// Query-string pairs in RFC 3339
    pub fn query_pairs(&self) -> [(&'static str, String); 2] {
        [
            ("start_date", self.start.to_rfc3339()),
            ("end_date", self.end.to_rfc3339()),
        ]
    }
}

/// Structured parameters extracted from a routed query
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<TimePeriod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_range: Option<DateRange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold: Option<u32>,
}

impl QueryParams {
    pub fn is_empty(&self) -> bool {
        self.period.is_none() && self.date_range.is_none() && self.threshold.is_none()
    }
}

/// Metadata envelope of every backend response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResponseMeta {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<serde_json::Value>,
}

/// Backend response shape: `{ data, meta: { message, total?, summary? } }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HyperResponse<T = serde_json::Value> {
    pub data: T,
    pub meta: ResponseMeta,
}

impl<T> HyperResponse<T> {
    pub fn new(data: T, message: impl Into<String>) -> Self {
        Self {
            data,
            meta: ResponseMeta {
                message: message.into(),
                total: None,
                summary: None,
            },
        }
    }

    pub fn with_total(mut self, total: u64) -> Self {
        self.meta.total = Some(total);
        self
    }

    pub fn with_summary(mut self, summary: serde_json::Value) -> Self {
        self.meta.summary = Some(summary);
        self
    }
}

impl HyperResponse<serde_json::Value> {
    /// Response used when no endpoint matched the query
    pub fn no_match() -> Self {
        Self::new(serde_json::Value::Null, "No matching endpoint found")
    }
}

/// Who authored a transcript message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Assistant,
    System,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::User => write!(f, "user"),
            Self::Assistant => write!(f, "assistant"),
            Self::System => write!(f, "system"),
        }
    }
}

/// One transcript entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub role: Role,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    /// Follow-up questions, most relevant first; never empty when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module_context: Option<String>,
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            role,
            content: content.into(),
            timestamp,
            suggestions: None,
            module_context: None,
        }
    }

    /// Attach suggestions; an empty list is stored as `None`
    pub fn with_suggestions(mut self, suggestions: Vec<String>) -> Self {
        self.suggestions = if suggestions.is_empty() {
            None
        } else {
            Some(suggestions)
        };
        self
    }

    pub fn with_module_context(mut self, context: Option<String>) -> Self {
        self.module_context = context;
        self
    }
}
