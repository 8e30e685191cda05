//! Terminal output for answers and routing decisions

use hrdesk_common::{
    Message, QueryCategory, QueryMatch, QueryParams, QueryType, Role, TurnOutcome, TurnResult,
};
use owo_colors::OwoColorize;
use serde::Serialize;

/// Routing decision as printed by `hrdeskctl route`
#[derive(Debug, Serialize, PartialEq)]
pub struct RouteDecision {
    pub query: String,
    pub matched: bool,
    pub category: QueryCategory,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_type: Option<QueryType>,
    pub params: QueryParams,
}

impl RouteDecision {
    pub fn new(query: &str, routed: &QueryMatch) -> Self {
        Self {
            query: query.to_string(),
            matched: routed.matched,
            category: routed.category,
            query_type: routed.query_type,
            params: routed.params.clone(),
        }
    }

    /// Plain-text summary, one field per line
    pub fn to_text(&self) -> String {
        let mut out = format!("Query:    {}\n", self.query);
        if !self.matched {
            out.push_str("Matched:  no (answered from the knowledge base)\n");
            return out;
        }
        out.push_str(&format!("Category: {}\n", self.category));
        if let Some(qt) = self.query_type {
            out.push_str(&format!("Type:     {} ({})\n", qt, qt.title()));
        }
        if let Some(period) = self.params.period {
            out.push_str(&format!("Period:   {}\n", period));
        }
        if let Some(range) = &self.params.date_range {
            out.push_str(&format!(
                "Range:    {} .. {}\n",
                range.start.to_rfc3339(),
                range.end.to_rfc3339()
            ));
        }
        if let Some(threshold) = self.params.threshold {
            out.push_str(&format!("Threshold: {}\n", threshold));
        }
        out
    }
}

pub fn print_route(decision: &RouteDecision) {
    let text = decision.to_text();
    if decision.matched {
        print!("{}", text);
    } else {
        print!("{}", text.dimmed());
    }
}

/// Numbered suggestion lines
pub fn suggestion_lines(suggestions: &[String]) -> Vec<String> {
    suggestions
        .iter()
        .enumerate()
        .map(|(i, s)| format!("  {}. {}", i + 1, s))
        .collect()
}

pub fn print_turn(turn: &TurnResult) {
    println!();
    match turn.outcome {
        TurnOutcome::DataFetchFailed => println!("{}", turn.assistant_message.content.bright_red()),
        _ => println!("{}", turn.assistant_message.content),
    }

    if !turn.related_modules.is_empty() {
        let names: Vec<&str> = turn.related_modules.iter().map(|m| m.name).collect();
        println!();
        println!("{} {}", "Related:".dimmed(), names.join(", ").cyan());
    }

    if !turn.suggestions.is_empty() {
        println!();
        println!("{}", "You could also ask:".bold());
        for line in suggestion_lines(&turn.suggestions) {
            println!("{}", line.yellow());
        }
    }
    println!();
}

/// One transcript line for `/history`
pub fn history_line(message: &Message) -> String {
    let first_line = message.content.lines().next().unwrap_or_default();
    format!(
        "[{}] {:<9} {}",
        message.timestamp.format("%H:%M:%S"),
        message.role.to_string(),
        first_line
    )
}

pub fn print_history(history: &[Message]) {
    if history.is_empty() {
        println!("{}", "(no messages yet)".dimmed());
        return;
    }
    for message in history {
        let line = history_line(message);
        match message.role {
            Role::User => println!("{}", line.green()),
            Role::Assistant => println!("{}", line),
            Role::System => println!("{}", line.dimmed()),
        }
    }
}
