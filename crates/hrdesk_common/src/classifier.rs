//! Intent classifier - fallback for questions with no data-backed route.
//!
//! Ordered rule table, first match wins:
//! greeting, workflow, how-to, module reference, feature, navigation,
//! comparison, then a generic fallback. Every rule produces canned markdown,
//! 2-4 follow-up suggestions and the related knowledge-base modules.

use crate::catalog;
use crate::knowledge::{self, ModuleInfo, Workflow};
use regex::{Regex, RegexBuilder};
use serde::Serialize;
use std::sync::LazyLock;

/// Which fallback rule answered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IntentKind {
    Greeting,
    Workflow,
    HowTo,
    ModuleReference,
    FeatureCapability,
    Navigation,
    Comparison,
    General,
}

impl std::fmt::Display for IntentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Greeting => "greeting",
            Self::Workflow => "workflow",
            Self::HowTo => "how_to",
            Self::ModuleReference => "module_reference",
            Self::FeatureCapability => "feature_capability",
            Self::Navigation => "navigation",
            Self::Comparison => "comparison",
            Self::General => "general",
        };
        write!(f, "{}", s)
    }
}

/// Canned answer produced by a classifier rule
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedResponse {
    pub intent: IntentKind,
    pub content: String,
    pub suggestions: Vec<String>,
    pub related_modules: Vec<&'static ModuleInfo>,
}

/// Words dropped before picking a search keyword
pub const STOP_WORDS: &[&str] = &[
    "the", "and", "for", "are", "was", "were", "been", "being", "with", "from", "into", "about",
    "what", "whats", "where", "when", "which", "who", "whom", "why", "how", "can", "could",
    "would", "should", "will", "does", "did", "doing", "have", "has", "had", "you", "your",
    "our", "ours", "their", "them", "they", "this", "that", "these", "those", "there", "here",
    "its", "any", "some", "all", "please", "show", "tell", "give", "find", "get", "want",
    "need", "know", "like", "let", "use", "using", "is", "it", "me", "my", "we", "an", "to",
    "of", "in", "on", "at", "by", "or", "if", "do", "be", "so", "system", "feature", "features",
    "support", "supports", "supported", "possible", "able", "way", "navigate", "open", "page",
    "go", "locate", "module", "modules", "section", "screen", "menu", "link", "access", "app",
    "hr", "desk",
];

/// Lowercased words of at least 3 chars that are not stop words
pub fn extract_keywords(query: &str) -> Vec<String> {
    query
        .to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| w.chars().count() >= 3)
        .filter(|w| !STOP_WORDS.contains(w))
        .map(String::from)
        .collect()
}

fn regex(pattern: &str) -> Option<Regex> {
    RegexBuilder::new(pattern).case_insensitive(true).build().ok()
}

static GREETING: LazyLock<Option<Regex>> = LazyLock::new(|| {
    regex(r"^\s*(?:hi|hello|hey|hiya|howdy|greetings|namaste|good\s+(?:morning|afternoon|evening))\b")
});

static WORKFLOW_KEYWORDS: LazyLock<Option<Regex>> = LazyLock::new(|| {
    regex(r"\b(?:process|workflow|procedure|lifecycle|life\s+cycle|end[-\s]to[-\s]end)\b")
});

static HOW_TO: LazyLock<Option<Regex>> = LazyLock::new(|| {
    regex(r"\b(?:how\s+(?:do|can|should|would)\s+(?:i|we|you)|how\s+to|steps\s+to|guide\s+(?:me|to)|walk\s+me\s+through)\b")
});

static REFERENCE_CUE: LazyLock<Option<Regex>> = LazyLock::new(|| {
    regex(r"\b(?:module|section|what\s+is|what['’]?s|what\s+are|what\s+does|tell\s+me\s+about|explain|describe|about|overview\s+of|info(?:rmation)?\s+on)\b")
});

static FEATURE: LazyLock<Option<Regex>> = LazyLock::new(|| {
    regex(r"\b(?:can\s+(?:i|you|we|it|the\s+system)|is\s+(?:it|there)\s+(?:possible|a\s+way)|does\s+(?:it|the\s+system)\s+(?:support|have|allow)|features?|capabilit(?:y|ies)|support(?:s|ed)?|able\s+to)\b")
});

static NAVIGATION: LazyLock<Option<Regex>> = LazyLock::new(|| {
    regex(r"\b(?:where|navigate|go\s+to|take\s+me|open|locate|menu|page|screen|link)\b")
});

static COMPARISON: LazyLock<Option<Regex>> = LazyLock::new(|| {
    regex(r"\b(?:difference|differ|differs|compare|comparison|versus|vs)\b")
});

static OVERVIEW: LazyLock<Option<Regex>> = LazyLock::new(|| {
    regex(r"\b(?:help|modules|what\s+can\s+you\s+do|capabilities)\b")
});

fn hit(re: &Option<Regex>, text: &str) -> bool {
    re.as_ref().is_some_and(|r| r.is_match(text))
}

/// Query plus the lookups several rules share
struct Input<'a> {
    raw: &'a str,
    mentioned: Vec<&'static ModuleInfo>,
    workflow: Option<&'static Workflow>,
    keywords: Vec<String>,
}

impl<'a> Input<'a> {
    fn new(raw: &'a str) -> Self {
        Self {
            raw,
            mentioned: knowledge::mentioned_modules(raw),
            workflow: knowledge::find_workflow(raw),
            keywords: extract_keywords(raw),
        }
    }

    fn keyword(&self) -> Option<&str> {
        self.keywords.first().map(String::as_str)
    }

    /// Mentioned modules, else keyword hits
    fn target_modules(&self) -> Vec<&'static ModuleInfo> {
        if !self.mentioned.is_empty() {
            return self.mentioned.clone();
        }
        self.keyword()
            .map(knowledge::find_by_keyword)
            .unwrap_or_default()
    }
}

struct Rule {
    intent: IntentKind,
    applies: fn(&Input) -> bool,
    respond: fn(&Input) -> ClassifiedResponse,
}

/// Evaluated in order; the generic fallback runs when none applies
static RULES: &[Rule] = &[
    Rule {
        intent: IntentKind::Greeting,
        applies: |q| hit(&GREETING, q.raw),
        respond: greeting,
    },
    Rule {
        intent: IntentKind::Workflow,
        applies: |q| hit(&WORKFLOW_KEYWORDS, q.raw) || q.workflow.is_some(),
        respond: workflow,
    },
    Rule {
        intent: IntentKind::HowTo,
        applies: |q| hit(&HOW_TO, q.raw),
        respond: how_to,
    },
    Rule {
        intent: IntentKind::ModuleReference,
        applies: |q| q.mentioned.len() == 1 && hit(&REFERENCE_CUE, q.raw),
        respond: module_reference,
    },
    Rule {
        intent: IntentKind::FeatureCapability,
        applies: |q| hit(&FEATURE, q.raw),
        respond: feature_capability,
    },
    Rule {
        intent: IntentKind::Navigation,
        applies: |q| hit(&NAVIGATION, q.raw),
        respond: navigation,
    },
    Rule {
        intent: IntentKind::Comparison,
        applies: |q| hit(&COMPARISON, q.raw),
        respond: comparison,
    },
];

/// Deterministic fallback classifier over the knowledge base
#[derive(Debug, Clone, Copy, Default)]
pub struct IntentClassifier;

impl IntentClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Which rule would answer, without rendering
    pub fn detect(&self, query: &str) -> IntentKind {
        let input = Input::new(query);
        RULES
            .iter()
            .find(|rule| (rule.applies)(&input))
            .map(|rule| rule.intent)
            .unwrap_or(IntentKind::General)
    }

    /// Answer a query from canned content
    pub fn classify(&self, query: &str) -> ClassifiedResponse {
        let input = Input::new(query);
        match RULES.iter().find(|rule| (rule.applies)(&input)) {
            Some(rule) => (rule.respond)(&input),
            None => general(&input),
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn module_line(module: &ModuleInfo) -> String {
    format!("- **{}** (`{}`): {}", module.name, module.path, module.description)
}

// ============================================================================
// Rule handlers
// ============================================================================

fn greeting(_: &Input) -> ClassifiedResponse {
    let content = "\
Hello! I'm the HR Desk assistant.

I can pull live numbers from the HR system or explain how its modules fit together:

- **Employees**: missing documents, incomplete onboarding, role mismatches, new hires
- **Recruitment**: pending interview feedback, candidate matches, hiring funnel, pipeline
- **Attendance**: today's attendance, absentee patterns, late comers, anomalies
- **Dashboard**: headcount, open positions, leave overview, quick stats

What would you like to know?"
        .to_string();

    ClassifiedResponse {
        intent: IntentKind::Greeting,
        content,
        suggestions: strings(&[
            "Show quick stats",
            "Who hasn't completed onboarding?",
            "Explain the recruitment process",
            "What modules are available?",
        ]),
        related_modules: vec![],
    }
}

fn workflow(q: &Input) -> ClassifiedResponse {
    let Some(flow) = q.workflow else {
        let mut content = String::from("## HR Workflows\n\nI can walk you through these processes:\n\n");
        for flow in knowledge::WORKFLOWS {
            content.push_str(&format!("- **{}**: {}\n", flow.title, flow.modules.join(" → ")));
        }
        content.push_str("\nAsk about any of them by name.");
        return ClassifiedResponse {
            intent: IntentKind::Workflow,
            content,
            suggestions: strings(&[
                "Explain the recruitment process",
                "Explain the onboarding process",
                "Explain the payroll workflow",
            ]),
            related_modules: vec![],
        };
    };

    let modules = knowledge::workflow_modules(flow);
    let mut content = format!("## {} Workflow\n\n", flow.title);
    for (i, step) in flow.steps.iter().enumerate() {
        content.push_str(&format!("{}. {}\n", i + 1, step));
    }
    content.push_str("\n**Modules involved:**\n");
    for module in &modules {
        content.push_str(&format!("- **{}** (`{}`)\n", module.name, module.path));
    }

    ClassifiedResponse {
        intent: IntentKind::Workflow,
        content: content.trim_end().to_string(),
        suggestions: strings(flow.follow_ups),
        related_modules: modules,
    }
}

/// Feature whose words best overlap the query keywords
fn best_feature(module: &ModuleInfo, keywords: &[String]) -> Option<&'static str> {
    module
        .features
        .iter()
        .map(|feature| {
            let overlap = feature
                .split_whitespace()
                .filter(|word| {
                    keywords
                        .iter()
                        .any(|k| k == word || k.trim_end_matches('s') == word.trim_end_matches('s'))
                })
                .count();
            (overlap, *feature)
        })
        .filter(|(overlap, _)| *overlap > 0)
        .max_by_key(|(overlap, _)| *overlap)
        .map(|(_, feature)| feature)
}

/// "How do I ...?" follow-up for the first feature that stays on the
/// knowledge path. Features that name a report would be routed to data.
fn how_do_i(features: &[&str]) -> Option<String> {
    features
        .iter()
        .map(|feature| format!("How do I {}?", feature))
        .find(|question| !catalog::matches_any(question))
}

fn how_to(q: &Input) -> ClassifiedResponse {
    let targets = q.target_modules();
    let Some(module) = targets.first().copied() else {
        let mut content = String::from(
            "## How-to\n\nI couldn't tell which part of the system you mean. These modules cover most tasks:\n\n",
        );
        for module in knowledge::all_modules().iter().take(6) {
            content.push_str(&module_line(module));
            content.push('\n');
        }
        return ClassifiedResponse {
            intent: IntentKind::HowTo,
            content: content.trim_end().to_string(),
            suggestions: strings(&[
                "How do I add an employee?",
                "How do I schedule an interview?",
                "How do I run payroll?",
            ]),
            related_modules: vec![],
        };
    };

    let mut content = String::new();
    match best_feature(module, &q.keywords) {
        Some(feature) => {
            content.push_str(&format!("## How to {}\n\n", feature));
            content.push_str(&format!(
                "1. Open **{}** from the sidebar (`{}`).\n",
                module.name, module.path
            ));
            content.push_str(&format!("2. Choose the **{}** action.\n", feature));
            content.push_str("3. Fill in the required fields and save.\n");
        }
        None => {
            content.push_str(&format!("## Working with {}\n\n", module.name));
            content.push_str(&format!(
                "Open **{}** (`{}`). From there you can:\n\n",
                module.name, module.path
            ));
            for feature in module.features {
                content.push_str(&format!("- {}\n", feature));
            }
        }
    }

    let related = knowledge::find_related(module.name);
    let mut suggestions = vec![format!("Tell me about the {} module", module.name)];
    if let Some(other) = related.first() {
        suggestions.push(format!("Tell me about the {} module", other.name));
    }
    suggestions.push("Show quick stats".to_string());

    ClassifiedResponse {
        intent: IntentKind::HowTo,
        content: content.trim_end().to_string(),
        suggestions,
        related_modules: std::iter::once(module).chain(related).collect(),
    }
}

fn module_reference(q: &Input) -> ClassifiedResponse {
    // applies() guarantees exactly one mention
    let module = q.mentioned[0];
    let related = knowledge::find_related(module.name);

    let mut content = format!("## {}\n\n{}\n\n**Path:** `{}`\n", module.name, module.description, module.path);
    if !module.features.is_empty() {
        content.push_str("\n**Features:**\n");
        for feature in module.features {
            content.push_str(&format!("- {}\n", feature));
        }
    }
    if !related.is_empty() {
        let names: Vec<&str> = related.iter().map(|m| m.name).collect();
        content.push_str(&format!("\n**Related modules:** {}\n", names.join(", ")));
    }

    let mut suggestions: Vec<String> = how_do_i(module.features).into_iter().collect();
    suggestions.push(format!("Where is {}?", module.name));
    if let Some(other) = related.first() {
        suggestions.push(format!("Tell me about the {} module", other.name));
    }

    ClassifiedResponse {
        intent: IntentKind::ModuleReference,
        content: content.trim_end().to_string(),
        suggestions,
        related_modules: std::iter::once(module).chain(related).collect(),
    }
}

fn feature_capability(q: &Input) -> ClassifiedResponse {
    let keyword = q.keyword().unwrap_or_default();
    let matches: Vec<(&'static ModuleInfo, Vec<&'static str>)> = knowledge::all_modules()
        .iter()
        .filter_map(|m| {
            let features: Vec<&'static str> = m
                .features
                .iter()
                .copied()
                .filter(|f| !keyword.is_empty() && f.contains(keyword))
                .collect();
            (!features.is_empty()).then_some((m, features))
        })
        .collect();

    if matches.is_empty() {
        let modules = q.target_modules();
        let mut content = if keyword.is_empty() {
            String::from("## Features\n\nTell me which task you have in mind and I'll point you to the right module.\n")
        } else {
            format!("## Features\n\nI couldn't find a feature matching **{}**.\n", keyword)
        };
        if !modules.is_empty() {
            content.push_str("\nThese modules may still help:\n\n");
            for module in modules.iter().take(3) {
                content.push_str(&module_line(module));
                content.push('\n');
            }
        }
        return ClassifiedResponse {
            intent: IntentKind::FeatureCapability,
            content: content.trim_end().to_string(),
            suggestions: strings(&["What modules are available?", "Show quick stats"]),
            related_modules: modules.into_iter().take(3).collect(),
        };
    }

    let mut content = format!("## Yes, **{}** is supported\n\n", keyword);
    for (module, features) in &matches {
        content.push_str(&format!("- **{}** (`{}`): {}\n", module.name, module.path, features.join(", ")));
    }

    let first = matches[0].0;
    let mut suggestions: Vec<String> = how_do_i(&matches[0].1).into_iter().collect();
    suggestions.push(format!("Tell me about the {} module", first.name));
    suggestions.push(format!("Where is {}?", first.name));

    ClassifiedResponse {
        intent: IntentKind::FeatureCapability,
        content: content.trim_end().to_string(),
        suggestions,
        related_modules: matches.into_iter().map(|(m, _)| m).collect(),
    }
}

fn navigation(q: &Input) -> ClassifiedResponse {
    let modules: Vec<&'static ModuleInfo> = q.target_modules().into_iter().take(3).collect();

    let Some(first) = modules.first().copied() else {
        let mut content = String::from("## Navigation\n\nAll modules are in the left sidebar:\n\n");
        for module in knowledge::all_modules() {
            content.push_str(&format!("- **{}**: `{}`\n", module.name, module.path));
        }
        return ClassifiedResponse {
            intent: IntentKind::Navigation,
            content: content.trim_end().to_string(),
            suggestions: strings(&["Where is Payslips?", "Where is Attendance?"]),
            related_modules: vec![],
        };
    };

    let mut content = format!(
        "## Navigation\n\nYou'll find **{}** in the sidebar at `{}`.\n",
        first.name, first.path
    );
    if modules.len() > 1 {
        content.push_str("\nAlso relevant:\n\n");
        for module in &modules[1..] {
            content.push_str(&format!("- **{}**: `{}`\n", module.name, module.path));
        }
    }

    let mut suggestions = vec![format!("Tell me about the {} module", first.name)];
    match how_do_i(first.features) {
        Some(question) => suggestions.push(question),
        None => suggestions.push("What modules are available?".to_string()),
    }

    ClassifiedResponse {
        intent: IntentKind::Navigation,
        content: content.trim_end().to_string(),
        suggestions,
        related_modules: modules,
    }
}

fn comparison(q: &Input) -> ClassifiedResponse {
    let modules = q.target_modules();

    if modules.len() < 2 {
        let mut content = String::from("## Comparison\n\n");
        match modules.first() {
            Some(module) => {
                content.push_str(&format!(
                    "I can only see one module in your question: **{}**. {}\n\nName a second module to compare it with.",
                    module.name, module.description
                ));
            }
            None => content.push_str("Name two modules and I'll compare what each one covers."),
        }
        return ClassifiedResponse {
            intent: IntentKind::Comparison,
            content,
            suggestions: strings(&[
                "What is the difference between Goals and Performance Reviews?",
                "Compare Attendance and Leave Management",
            ]),
            related_modules: modules,
        };
    }

    let (a, b) = (modules[0], modules[1]);
    let mut content = format!("## {} vs {}\n\n", a.name, b.name);
    content.push_str(&format!("| | {} | {} |\n|---|---|---|\n", a.name, b.name));
    content.push_str(&format!("| Purpose | {} | {} |\n", a.description, b.description));
    content.push_str(&format!("| Path | `{}` | `{}` |\n", a.path, b.path));
    content.push_str(&format!(
        "| Key features | {} | {} |\n",
        a.features.join(", "),
        b.features.join(", ")
    ));
    let linked = a.related_modules.contains(&b.name) || b.related_modules.contains(&a.name);
    if linked {
        content.push_str(&format!("\n**{}** and **{}** work together.", a.name, b.name));
    }

    ClassifiedResponse {
        intent: IntentKind::Comparison,
        content: content.trim_end().to_string(),
        suggestions: vec![
            format!("Tell me about the {} module", a.name),
            format!("Tell me about the {} module", b.name),
        ],
        related_modules: vec![a, b],
    }
}

fn general(q: &Input) -> ClassifiedResponse {
    let hits: Vec<&'static ModuleInfo> = if hit(&OVERVIEW, q.raw) {
        vec![]
    } else {
        q.target_modules().into_iter().take(3).collect()
    };

    if hits.is_empty() {
        let mut content = String::from("## What I can help with\n\n");
        if !hit(&OVERVIEW, q.raw) && !q.raw.trim().is_empty() {
            content.push_str("I'm not sure how to answer that yet. ");
        }
        content.push_str("Here are the modules I know about:\n\n");
        for module in knowledge::all_modules() {
            content.push_str(&module_line(module));
            content.push('\n');
        }
        return ClassifiedResponse {
            intent: IntentKind::General,
            content: content.trim_end().to_string(),
            suggestions: strings(&[
                "Show quick stats",
                "Explain the recruitment process",
                "Who is absent today?",
                "How do I add an employee?",
            ]),
            related_modules: vec![],
        };
    }

    let keyword = q.keyword().unwrap_or_default();
    let mut content = format!("## Related to \"{}\"\n\n", keyword);
    for module in &hits {
        content.push_str(&module_line(module));
        content.push('\n');
    }

    let suggestions = hits
        .iter()
        .take(3)
        .map(|m| format!("Tell me about the {} module", m.name))
        .chain(std::iter::once("Show quick stats".to_string()))
        .collect();

    ClassifiedResponse {
        intent: IntentKind::General,
        content: content.trim_end().to_string(),
        suggestions,
        related_modules: hits,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(q: &str) -> ClassifiedResponse {
        IntentClassifier::new().classify(q)
    }

    #[test]
    fn test_keywords_drop_stop_words_and_short_words() {
        assert_eq!(extract_keywords("Can I upload documents?"), vec!["upload", "documents"]);
        assert_eq!(extract_keywords("is it ok"), Vec::<String>::new());
        assert_eq!(extract_keywords("Where is the payslips page"), vec!["payslips"]);
    }

    #[test]
    fn test_greeting() {
        let r = classify("Hello");
        assert_eq!(r.intent, IntentKind::Greeting);
        assert_eq!(r.suggestions.len(), 4);
        assert_eq!(classify("good morning!").intent, IntentKind::Greeting);
        // "hi" must be a whole word
        assert_ne!(classify("history of payslips").intent, IntentKind::Greeting);
    }

    #[test]
    fn test_named_workflow() {
        let r = classify("Explain the recruitment process");
        assert_eq!(r.intent, IntentKind::Workflow);
        assert!(r.content.contains("Recruitment Workflow"));
        assert!(r.related_modules.iter().any(|m| m.name == "Offer Letters"));
        assert!((2..=4).contains(&r.suggestions.len()));
    }

    #[test]
    fn test_workflow_without_name_lists_all() {
        let r = classify("what is the approval procedure");
        assert_eq!(r.intent, IntentKind::Workflow);
        assert!(r.content.contains("Payroll"));
        assert!(r.related_modules.is_empty());
    }

    #[test]
    fn test_workflow_beats_how_to() {
        assert_eq!(
            IntentClassifier::new().detect("How do I run payroll?"),
            IntentKind::Workflow
        );
    }

    #[test]
    fn test_how_to() {
        let r = classify("How do I add an employee?");
        assert_eq!(r.intent, IntentKind::HowTo);
        assert!(r.content.contains("How to add employee"));
        assert!(r.content.contains("/employees"));
        assert_eq!(r.related_modules[0].name, "Employees");
    }

    #[test]
    fn test_module_reference() {
        let r = classify("Tell me about the Goals module");
        assert_eq!(r.intent, IntentKind::ModuleReference);
        assert!(r.content.starts_with("## Goals"));
        assert_eq!(r.related_modules[0].name, "Goals");
        assert!(r.related_modules.iter().any(|m| m.name == "Performance Reviews"));
    }

    #[test]
    fn test_feature_capability() {
        let r = classify("Can I upload files?");
        assert_eq!(r.intent, IntentKind::FeatureCapability);
        let names: Vec<&str> = r.related_modules.iter().map(|m| m.name).collect();
        assert_eq!(names, vec!["Documents", "Candidates"]);
    }

    #[test]
    fn test_navigation() {
        let r = classify("Where are salary structures?");
        assert_eq!(r.intent, IntentKind::Navigation);
        assert!(r.content.contains("`/salary-structures`"));
    }

    #[test]
    fn test_comparison_two_modules() {
        let r = classify("Goals versus performance reviews");
        assert_eq!(r.intent, IntentKind::Comparison);
        assert!(r.content.contains("## Goals vs Performance Reviews"));
        assert_eq!(r.related_modules.len(), 2);
    }

    #[test]
    fn test_general_fallback() {
        let r = classify("xyzzy");
        assert_eq!(r.intent, IntentKind::General);
        assert!(r.content.contains("not sure"));
        assert_eq!(r.suggestions.len(), 4);

        let r = classify("");
        assert_eq!(r.intent, IntentKind::General);
    }

    #[test]
    fn test_general_keyword_hit() {
        let r = classify("calibration");
        assert_eq!(r.intent, IntentKind::General);
        assert_eq!(r.related_modules[0].name, "Performance Reviews");
    }

    #[test]
    fn test_how_do_i_skips_data_features() {
        // every Dashboard feature names a report
        let dashboard = knowledge::find_by_name("Dashboard").unwrap();
        assert_eq!(how_do_i(dashboard.features), None);

        let attendance = knowledge::find_by_name("Attendance").unwrap();
        assert_eq!(how_do_i(attendance.features).as_deref(), Some("How do I mark attendance?"));
    }

    #[test]
    fn test_module_suggestions_stay_on_knowledge_path() {
        for module in knowledge::MODULES {
            for q in [
                format!("Tell me about the {} module", module.name),
                format!("Where is {}?", module.name),
            ] {
                let r = classify(&q);
                assert!(r.related_modules.iter().any(|m| m.name == module.name), "{:?}", q);
                assert!((2..=4).contains(&r.suggestions.len()), "{:?}", q);
                let knowledge_questions = r.suggestions.iter().filter(|s| {
                    ["Tell me about", "Where is", "How do I"].iter().any(|p| s.starts_with(p))
                });
                for s in knowledge_questions {
                    assert!(!catalog::matches_any(s), "{:?} suggested {:?}", q, s);
                }
            }
        }
    }

    #[test]
    fn test_feature_suggestions_are_questions() {
        for module in knowledge::MODULES {
            for feature in module.features {
                let first = feature.split_whitespace().next().unwrap_or_default();
                assert!(
                    !first.ends_with("ing") && !["leave", "quick", "headcount"].contains(&first),
                    "{} feature {:?} is not a verb phrase",
                    module.name,
                    feature
                );
            }
        }

        let r = classify("Can I upload files?");
        assert_eq!(r.suggestions[0], "How do I upload documents?");
    }

    #[test]
    fn test_suggestion_counts() {
        for q in [
            "Hello",
            "Explain the payroll workflow",
            "How do I schedule an interview?",
            "Tell me about the Interviews module",
            "Can I upload files?",
            "Where are salary structures?",
            "Goals versus performance reviews",
            "xyzzy",
            "What modules are available?",
        ] {
            let r = classify(q);
            assert!(
                (2..=4).contains(&r.suggestions.len()),
                "{:?} gave {} suggestions",
                q,
                r.suggestions.len()
            );
        }
    }
}
