//! Pattern catalog for data-backed queries.
//!
//! Declarative table of case-insensitive regexes per query type. Table order
//! is routing priority: employee lifecycle, recruitment, attendance,
//! dashboard, and declaration order within each domain.

use crate::types::QueryType;
use regex::{Regex, RegexBuilder, RegexSet, RegexSetBuilder};
use std::sync::LazyLock;

/// Pattern sources, in priority order. Any single pattern signals its type.
pub const PATTERN_SOURCES: &[(QueryType, &[&str])] = &[
    // === Employee lifecycle ===
    (
        QueryType::MissingDocuments,
        &[
            r"\bmissing\s+(?:\w+\s+)?doc(?:ument)?s?\b",
            r"\b(?:without|no|lacking)\s+(?:\w+\s+)?doc(?:ument)?s\b",
            r"\bdoc(?:ument)?s?\s+(?:are\s+)?(?:missing|pending|not\s+(?:submitted|uploaded))",
            r"\bincomplete\s+(?:doc(?:ument)?s?|paperwork)",
            r"\b(?:pending|missing)\s+paperwork",
        ],
    ),
    (
        QueryType::IncompleteOnboarding,
        &[
            r"\b(?:has|have)(?:n['’]?t|\s+not)\s+(?:yet\s+)?(?:complete[ds]?|finish(?:ed)?)\s+(?:their\s+|the\s+|his\s+|her\s+)?onboarding",
            r"\bnot\s+(?:yet\s+)?(?:complete[ds]?|finish(?:ed)?)\s+(?:their\s+|the\s+)?onboarding",
            r"\bincomplete\s+onboarding",
            r"\bonboarding\s+(?:is\s+)?(?:pending|incomplete|in\s+progress|status|progress)",
            r"\b(?:pending|stuck|stalled)\s+(?:in\s+)?onboarding",
        ],
    ),
    (
        QueryType::RoleMismatches,
        &[
            r"\brole\s+mismatch(?:es)?\b",
            r"\bmismatch(?:ed|es)?\s+(?:job\s+)?(?:roles?|designations?|titles?)",
            r"\b(?:wrong|incorrect)\s+(?:job\s+)?(?:roles?|designations?|titles?)",
            r"\b(?:roles?|designations?|titles?)\s+(?:that\s+)?(?:don['’]?t|do\s+not|doesn['’]?t|does\s+not)\s+match",
        ],
    ),
    (
        QueryType::NewHires,
        &[
            r"\bnew\s+(?:hires?|joiners?|joinees?|employees?|starters?)\b",
            r"\brecent(?:ly)?\s+(?:hired|joined|hires|joiners|joinees)",
            r"\b(?:who|employees?|people)\s+(?:have\s+|has\s+)?joined\b",
            r"\bhired\s+(?:this|last|past)\s+(?:week|month)",
        ],
    ),
    // === Recruitment ===
    (
        QueryType::PendingFeedback,
        &[
            r"\bpending\s+(?:interview\s+)?feedback",
            r"\bfeedback\s+(?:is\s+)?(?:pending|due|missing|outstanding|overdue)",
            r"\b(?:interviews?|interviewers?)\s+(?:without|missing|awaiting|with\s+no)\s+feedback",
            r"\b(?:awaiting|no)\s+(?:interview\s+)?feedback",
        ],
    ),
    (
        QueryType::CandidateMatching,
        &[
            r"\b(?:match(?:ing)?|best|top|suitable|shortlist(?:ed)?)\s+candidates?\b",
            r"\bcandidates?\s+(?:that\s+|who\s+)?(?:match|fit|suit)",
            r"\bcandidate\s+match(?:es|ing)?\b",
            r"\bwho\s+(?:best\s+)?(?:fits|matches)\s+(?:the\s+)?(?:role|job|position|opening)",
        ],
    ),
    (
        QueryType::HiringFunnel,
        &[
            r"\b(?:hiring|recruitment|recruiting)\s+funnel",
            r"\bfunnel\b",
            r"\b(?:conversion|drop-?off)\s+rates?",
            r"\b(?:offer|hiring)\s+acceptance\s+rate",
        ],
    ),
    (
        QueryType::PipelineSummary,
        &[
            r"\bpipeline\b",
            r"\b(?:recruitment|hiring|recruiting)\s+(?:summary|overview|status|progress)",
            r"\bcandidates?\s+(?:by|per|in\s+each)\s+stage",
            r"\b(?:how\s+many|number\s+of)\s+candidates",
        ],
    ),
    // === Attendance ===
    (
        QueryType::TodayAttendance,
        &[
            r"\b(?:who(?:\s+is|['’]s)|who\s+are)\s+(?:absent|present|on\s+leave|in\s+office|out)\s+today",
            r"\b(?:absent|present|attendance)\s+(?:for\s+)?today",
            r"\btoday['’]?s\s+attendance",
            r"\battendance\s+(?:for\s+)?this\s+day",
        ],
    ),
    (
        QueryType::AbsenteePatterns,
        &[
            r"\babsentee(?:ism|s)?\b",
            r"\babsence\s+(?:patterns?|trends?|report|history)",
            r"\b(?:frequent(?:ly)?|often|repeated(?:ly)?|habitual(?:ly)?)\s+absent",
            r"\babsent\s+(?:more\s+than|over)\s+\d+",
        ],
    ),
    (
        QueryType::LateComers,
        &[
            r"\blate\s*-?comers?\b",
            r"\b(?:came|come|comes|coming|arrived?|arrives|arriving|clocked|logged)\s+(?:in\s+)?late\b",
            r"\blate\s+(?:arrivals?|check-?ins?|log-?ins?|punch(?:es|-ins?)?)",
            r"\b(?:tardy|tardiness)\b",
            r"\bwho\s+(?:is|was|were|are)\s+(?:often\s+|frequently\s+)?late\b",
        ],
    ),
    (
        QueryType::AttendanceAnomalies,
        &[
            r"\battendance\s+(?:anomal(?:y|ies)|irregularit(?:y|ies)|issues?|discrepanc(?:y|ies)|exceptions?)",
            r"\banomal(?:y|ies|ous)\b",
            r"\b(?:missing|irregular|odd)\s+(?:punch(?:es)?|check-?(?:ins?|outs?)|clock-?(?:ins?|outs?))",
            r"\bunusual\s+attendance",
        ],
    ),
    // === Dashboard ===
    (
        QueryType::Headcount,
        &[
            r"\bhead\s*-?\s*count",
            r"\b(?:number|count)\s+of\s+(?:employees|staff|people)",
            r"\bhow\s+many\s+(?:employees|staff|people)\b",
            r"\bdepartment[-\s]?wise\b",
            r"\b(?:employees|staff)\s+(?:by|per)\s+(?:department|team|location)",
        ],
    ),
    (
        QueryType::OpenPositions,
        &[
            r"\bopen\s+(?:positions?|roles?|jobs?|reqs?|requisitions?|vacancies)",
            // bare "job openings" names the module, so a count or list cue is required
            r"\b(?:how\s+many|number\s+of|count\s+of|list(?:\s+(?:all|the|our))?|any|current|unfilled|active)\s+(?:job\s+)?(?:openings|vacanc(?:y|ies))\b",
            r"\b(?:job\s+)?(?:openings|vacancies)\s+(?:do\s+we\s+have|are\s+(?:there|open)|right\s+now)",
            r"\b(?:unfilled|active)\s+(?:positions?|roles?|requisitions?)",
        ],
    ),
    (
        QueryType::LeaveOverview,
        &[
            r"\bleave\s+(?:overview|summary|balances?|requests?|status|report|trends?)",
            r"\b(?:who(?:\s+is|['’]s)|who\s+are|employees?|people)\s+on\s+leave",
            r"\bpending\s+leaves?\b",
            r"\btime[-\s]off\b",
        ],
    ),
    (
        QueryType::QuickStats,
        &[
            r"\bquick\s+(?:stats|statistics|summary|overview)",
            r"\b(?:overall|key|hr|company)\s+(?:stats|statistics|metrics|numbers|kpis?)",
            r"\b(?:dashboard|org(?:anization)?|company)\s+(?:stats|summary|snapshot|overview|metrics)",
            r"\bat\s+a\s+glance\b",
            r"\bkpis?\b",
        ],
    ),
];

/// Compiled patterns for one query type
pub struct CatalogEntry {
    pub query_type: QueryType,
    pub patterns: Vec<Regex>,
}

impl CatalogEntry {
    /// True if any pattern matches
    pub fn is_match(&self, query: &str) -> bool {
        self.patterns.iter().any(|p| p.is_match(query))
    }
}

fn compile(pattern: &str) -> Option<Regex> {
    RegexBuilder::new(pattern).case_insensitive(true).build().ok()
}

static CATALOG: LazyLock<Vec<CatalogEntry>> = LazyLock::new(|| {
    PATTERN_SOURCES
        .iter()
        .map(|(query_type, sources)| CatalogEntry {
            query_type: *query_type,
            patterns: sources.iter().filter_map(|s| compile(s)).collect(),
        })
        .collect()
});

/// Every compiled pattern in one set, for the unordered any-match gate.
/// Built from the same compiled sources as `CATALOG` so both always agree.
static CATALOG_SET: LazyLock<Option<RegexSet>> = LazyLock::new(|| {
    let sources = CATALOG
        .iter()
        .flat_map(|entry| entry.patterns.iter().map(|p| p.as_str().to_string()));
    RegexSetBuilder::new(sources)
        .case_insensitive(true)
        .build()
        .ok()
});

/// Compiled catalog in priority order
pub fn entries() -> &'static [CatalogEntry] {
    &CATALOG
}

/// Compiled patterns for a single query type
pub fn patterns_for(query_type: QueryType) -> &'static [Regex] {
    CATALOG
        .iter()
        .find(|entry| entry.query_type == query_type)
        .map(|entry| entry.patterns.as_slice())
        .unwrap_or(&[])
}

/// First query type in priority order with a matching pattern
pub fn first_match(query: &str) -> Option<QueryType> {
    CATALOG
        .iter()
        .find(|entry| entry.is_match(query))
        .map(|entry| entry.query_type)
}

/// Whether any pattern of any type matches, regardless of priority
pub fn matches_any(query: &str) -> bool {
    match CATALOG_SET.as_ref() {
        Some(set) => set.is_match(query),
        None => first_match(query).is_some(),
    }
}

/// Every query type whose patterns match, in priority order
pub fn all_matches(query: &str) -> Vec<QueryType> {
    CATALOG
        .iter()
        .filter(|entry| entry.is_match(query))
        .map(|entry| entry.query_type)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_pattern_compiles() {
        for (query_type, sources) in PATTERN_SOURCES {
            assert_eq!(
                patterns_for(*query_type).len(),
                sources.len(),
                "pattern failed to compile for {}",
                query_type
            );
        }
        assert!(CATALOG_SET.is_some());
    }

    #[test]
    fn test_catalog_order_is_priority_order() {
        let order: Vec<QueryType> = PATTERN_SOURCES.iter().map(|(t, _)| *t).collect();
        assert_eq!(order, QueryType::ALL.to_vec());
    }

    #[test]
    fn test_every_type_has_patterns() {
        for query_type in QueryType::ALL {
            assert!(!patterns_for(query_type).is_empty(), "{}", query_type);
        }
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(
            first_match("SHOW EMPLOYEES WITH MISSING DOCUMENTS"),
            Some(QueryType::MissingDocuments)
        );
        assert_eq!(first_match("Hiring Funnel"), Some(QueryType::HiringFunnel));
    }

    #[test]
    fn test_contractions() {
        assert_eq!(
            first_match("Who hasn't completed onboarding?"),
            Some(QueryType::IncompleteOnboarding)
        );
        assert_eq!(
            first_match("who hasnt finished onboarding"),
            Some(QueryType::IncompleteOnboarding)
        );
        assert_eq!(
            first_match("Who hasn’t completed their onboarding"),
            Some(QueryType::IncompleteOnboarding)
        );
    }

    #[test]
    fn test_all_matches_is_ordered() {
        let hits = all_matches("match candidates to open positions");
        assert_eq!(
            hits,
            vec![QueryType::CandidateMatching, QueryType::OpenPositions]
        );
    }

    #[test]
    fn test_no_match() {
        assert!(!matches_any("hello there"));
        assert!(!matches_any(""));
        assert!(first_match("   ").is_none());
    }

    #[test]
    fn test_open_positions_needs_data_cue() {
        for q in [
            "How many open positions do we have?",
            "how many job openings",
            "list all job openings",
            "any vacancies in sales?",
            "what openings do we have",
        ] {
            assert_eq!(first_match(q), Some(QueryType::OpenPositions), "{:?}", q);
        }

        for q in [
            "Tell me about the Job Openings module",
            "Where is Job Openings?",
            "How do I create a job opening?",
            "what is a vacancy",
        ] {
            assert!(!matches_any(q), "{:?}", q);
        }
    }

    #[test]
    fn test_module_names_do_not_route() {
        for module in crate::knowledge::MODULES {
            for q in [
                format!("Tell me about the {} module", module.name),
                format!("Where is {}?", module.name),
            ] {
                assert!(!matches_any(&q), "{:?} matched {:?}", q, first_match(&q));
            }
        }
    }
}
