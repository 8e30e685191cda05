//! Response synthesizer - turns backend data, classifier answers and fetch
//! failures into one displayable answer with follow-up suggestions.
//!
//! Rendering is deterministic: object keys are emitted in sorted order and
//! lists are capped at `max_list_items`.

use crate::classifier::ClassifiedResponse;
use crate::error::EndpointError;
use crate::knowledge::{self, ModuleInfo};
use crate::types::{HyperResponse, QueryCategory, QueryType};
use serde_json::{Map, Value};

/// Keys tried in order when picking a label for a list row
const LABEL_KEYS: &[&str] = &[
    "name",
    "employee_name",
    "full_name",
    "candidate_name",
    "title",
    "position",
    "department",
    "label",
];

/// Extra scalar fields shown next to a row label
const MAX_ROW_DETAILS: usize = 3;

/// Final answer for one turn
#[derive(Debug, Clone, PartialEq)]
pub struct SynthesizedResponse {
    pub content: String,
    pub suggestions: Vec<String>,
    pub related_modules: Vec<&'static ModuleInfo>,
    pub module_context: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ResponseSynthesizer {
    max_list_items: usize,
}

impl Default for ResponseSynthesizer {
    fn default() -> Self {
        Self::new(10)
    }
}

impl ResponseSynthesizer {
    pub fn new(max_list_items: usize) -> Self {
        Self {
            max_list_items: max_list_items.max(1),
        }
    }

    pub fn max_list_items(&self) -> usize {
        self.max_list_items
    }

    // ========================================================================
    // Data path
    // ========================================================================

    /// Render a successful backend response.
    ///
    /// The content always carries `meta.message` verbatim.
    pub fn from_data(
        &self,
        category: QueryCategory,
        query_type: Option<QueryType>,
        response: &HyperResponse,
    ) -> SynthesizedResponse {
        let heading = match query_type {
            Some(qt) => qt.title().to_string(),
            None => format!("{} data", category),
        };

        let mut content = format!("## {}\n\n{}\n", heading, response.meta.message);
        if let Some(total) = response.meta.total {
            content.push_str(&format!("\n**Total:** {}\n", total));
        }

        let body = self.render_value(&response.data);
        if !body.is_empty() {
            content.push('\n');
            content.push_str(&body);
        }

        if let Some(summary) = &response.meta.summary {
            let rendered = self.render_value(summary);
            if !rendered.is_empty() {
                content.push_str("\n**Summary:**\n");
                content.push_str(&rendered);
            }
        }

        SynthesizedResponse {
            content: content.trim_end().to_string(),
            suggestions: category_suggestions(category),
            related_modules: category_modules(category),
            module_context: (category != QueryCategory::None).then(|| category.to_string()),
        }
    }

    fn render_value(&self, value: &Value) -> String {
        match value {
            Value::Null => String::new(),
            Value::Array(items) => self.render_list(items),
            Value::Object(map) => render_object(map),
            scalar => format!("{}\n", scalar_text(scalar)),
        }
    }

    fn render_list(&self, items: &[Value]) -> String {
        if items.is_empty() {
            return "_No records found._\n".to_string();
        }

        let mut out = String::new();
        for item in items.iter().take(self.max_list_items) {
            out.push_str(&format!("- {}\n", row_text(item)));
        }
        if items.len() > self.max_list_items {
            out.push_str(&format!("- ...and {} more\n", items.len() - self.max_list_items));
        }
        out
    }

    // ========================================================================
    // Classifier path
    // ========================================================================

    /// Pass a classifier answer through unchanged
    pub fn from_classifier(&self, classified: ClassifiedResponse) -> SynthesizedResponse {
        let module_context = classified.related_modules.first().map(|m| m.name.to_string());
        SynthesizedResponse {
            content: classified.content,
            suggestions: classified.suggestions,
            related_modules: classified.related_modules,
            module_context,
        }
    }

    // ========================================================================
    // Failure path
    // ========================================================================

    /// Diagnostic answer for a failed fetch. Never fails itself.
    pub fn from_error(
        &self,
        category: QueryCategory,
        query: &str,
        err: &EndpointError,
    ) -> SynthesizedResponse {
        let mut content = format!(
            "## Couldn't fetch that data\n\nYour question \"{}\" was understood as a **{}** query, but the request to the HR backend failed:\n\n> {}\n",
            query.trim(),
            category,
            err
        );
        if err.is_transient() {
            content.push_str("\nThis looks temporary. Trying again in a moment may work.");
        } else {
            content.push_str("\nCheck the backend URL and credentials in your configuration.");
        }

        SynthesizedResponse {
            content,
            suggestions: RECOVERY_SUGGESTIONS.iter().map(|s| s.to_string()).collect(),
            related_modules: category_modules(category),
            module_context: (category != QueryCategory::None).then(|| category.to_string()),
        }
    }
}

/// Offered after any failed fetch
pub const RECOVERY_SUGGESTIONS: &[&str] = &[
    "Try the question again",
    "What modules are available?",
    "Explain the recruitment process",
    "How do I add an employee?",
];

/// Canonical follow-ups per category, most relevant first
pub fn category_suggestions(category: QueryCategory) -> Vec<String> {
    let list: &[&str] = match category {
        QueryCategory::Employee => &[
            "Show employees with missing documents",
            "Who hasn't completed onboarding?",
            "Show new hires this month",
            "Find role mismatches",
        ],
        QueryCategory::Recruitment => &[
            "Show pending interview feedback",
            "Show the hiring funnel for this month",
            "Give me a pipeline summary",
            "Match candidates to open positions",
        ],
        QueryCategory::Attendance => &[
            "Who is absent today?",
            "Show absentee patterns this month",
            "Who came in late this week?",
            "Show attendance anomalies",
        ],
        QueryCategory::Dashboard => &[
            "Give me department-wise headcount",
            "How many open positions do we have?",
            "Show leave overview",
            "Show quick stats",
        ],
        QueryCategory::None => &[
            "Show quick stats",
            "Who is absent today?",
            "Show pending interview feedback",
            "What modules are available?",
        ],
    };
    list.iter().map(|s| s.to_string()).collect()
}

/// Knowledge-base modules behind a category's data
pub fn category_modules(category: QueryCategory) -> Vec<&'static ModuleInfo> {
    let names: &[&str] = match category {
        QueryCategory::Employee => &["Employees", "Onboarding", "Documents"],
        QueryCategory::Recruitment => &["Candidates", "Job Openings", "Interviews"],
        QueryCategory::Attendance => &["Attendance", "Leave Management"],
        QueryCategory::Dashboard => &["Dashboard", "Reports"],
        QueryCategory::None => &[],
    };
    names.iter().filter_map(|n| knowledge::find_by_name(n)).collect()
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "-".to_string(),
        other => other.to_string(),
    }
}

fn sorted_entries(map: &Map<String, Value>) -> Vec<(&String, &Value)> {
    let mut entries: Vec<_> = map.iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));
    entries
}

fn humanize(key: &str) -> String {
    let spaced = key.replace(['_', '-'], " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// One list row: label plus a few scalar details
fn row_text(item: &Value) -> String {
    let Value::Object(map) = item else {
        return scalar_text(item);
    };

    let label_key = LABEL_KEYS.iter().copied().find(|k| map.get(*k).is_some_and(|v| !v.is_null()));
    let label = label_key
        .and_then(|k| map.get(k))
        .map(scalar_text)
        .unwrap_or_else(|| "(unnamed)".to_string());

    let details: Vec<String> = sorted_entries(map)
        .into_iter()
        .filter(|(k, v)| Some(k.as_str()) != label_key && !v.is_array() && !v.is_object() && !v.is_null())
        .filter(|(k, _)| k.as_str() != "id")
        .take(MAX_ROW_DETAILS)
        .map(|(k, v)| format!("{}: {}", humanize(k), scalar_text(v)))
        .collect();

    if details.is_empty() {
        format!("**{}**", label)
    } else {
        format!("**{}** ({})", label, details.join(", "))
    }
}

fn render_object(map: &Map<String, Value>) -> String {
    let mut out = String::new();
    for (key, value) in sorted_entries(map) {
        let text = match value {
            Value::Array(items) => format!("{} items", items.len()),
            Value::Object(inner) => sorted_entries(inner)
                .into_iter()
                .map(|(k, v)| format!("{} {}", humanize(k), scalar_text(v)))
                .collect::<Vec<_>>()
                .join(", "),
            scalar => scalar_text(scalar),
        };
        out.push_str(&format!("- **{}**: {}\n", humanize(key), text));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::IntentClassifier;
    use serde_json::json;

    #[test]
    fn test_data_includes_meta_message() {
        let synth = ResponseSynthesizer::default();
        let resp = HyperResponse::new(
            json!({"Engineering": 12, "Sales": 7}),
            "Headcount across 2 departments",
        )
        .with_total(19);
        let out = synth.from_data(QueryCategory::Dashboard, Some(QueryType::Headcount), &resp);

        assert!(out.content.contains("Headcount across 2 departments"));
        assert!(out.content.contains("**Total:** 19"));
        assert!(out.content.starts_with("## Headcount Distribution"));
        assert_eq!(out.suggestions.len(), 4);
        assert_eq!(out.module_context.as_deref(), Some("dashboard"));
        assert_eq!(out.related_modules[0].name, "Dashboard");
    }

    #[test]
    fn test_object_keys_sorted() {
        let synth = ResponseSynthesizer::default();
        let resp = HyperResponse::new(json!({"zeta": 1, "alpha": 2, "mid": 3}), "ok");
        let out = synth.from_data(QueryCategory::Dashboard, None, &resp);
        let a = out.content.find("Alpha").unwrap();
        let m = out.content.find("Mid").unwrap();
        let z = out.content.find("Zeta").unwrap();
        assert!(a < m && m < z);
    }

    #[test]
    fn test_list_capped() {
        let synth = ResponseSynthesizer::new(2);
        let resp = HyperResponse::new(
            json!([
                {"name": "Asha", "department": "Sales"},
                {"name": "Ben"},
                {"name": "Chen"},
                {"name": "Dara"}
            ]),
            "4 employees",
        );
        let out = synth.from_data(
            QueryCategory::Employee,
            Some(QueryType::MissingDocuments),
            &resp,
        );
        assert!(out.content.contains("**Asha** (Department: Sales)"));
        assert!(out.content.contains("**Ben**"));
        assert!(!out.content.contains("Chen"));
        assert!(out.content.contains("...and 2 more"));
    }

    #[test]
    fn test_empty_list_and_null() {
        let synth = ResponseSynthesizer::default();
        let out = synth.from_data(
            QueryCategory::Recruitment,
            Some(QueryType::PendingFeedback),
            &HyperResponse::new(json!([]), "Nothing pending"),
        );
        assert!(out.content.contains("No records found"));

        let out = synth.from_data(QueryCategory::None, None, &HyperResponse::no_match());
        assert!(out.content.contains("No matching endpoint found"));
        assert!(out.module_context.is_none());
    }

    #[test]
    fn test_error_contains_literal_message() {
        let synth = ResponseSynthesizer::default();
        let err = EndpointError::Network("network down".to_string());
        let out = synth.from_error(QueryCategory::Dashboard, "show quick stats", &err);
        assert!(out.content.contains("network down"));
        assert!(out.content.contains("show quick stats"));
        assert_eq!(out.suggestions.len(), RECOVERY_SUGGESTIONS.len());
    }

    #[test]
    fn test_classifier_passthrough() {
        let synth = ResponseSynthesizer::default();
        let classified = IntentClassifier::new().classify("Tell me about the Goals module");
        let expected = classified.clone();
        let out = synth.from_classifier(classified);
        assert_eq!(out.content, expected.content);
        assert_eq!(out.suggestions, expected.suggestions);
        assert_eq!(out.module_context.as_deref(), Some("Goals"));
    }

    #[test]
    fn test_every_category_has_four_suggestions() {
        for cat in QueryCategory::ROUTED.iter().chain([QueryCategory::None].iter()) {
            assert_eq!(category_suggestions(*cat).len(), 4);
        }
    }

    #[test]
    fn test_category_modules_resolve() {
        for cat in QueryCategory::ROUTED {
            assert!(!category_modules(cat).is_empty());
        }
    }
}
