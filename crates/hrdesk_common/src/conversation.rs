//! Conversation service - owns one session transcript and runs a turn:
//! append user message, route, fetch or classify, synthesize, append answer.
//!
//! One service is one session. `send_message` takes `&mut self`, so turns on
//! a session are serialized by the borrow checker; run several services over
//! a shared registry for concurrent sessions.

use crate::classifier::IntentClassifier;
use crate::config::HrDeskConfig;
use crate::endpoints::EndpointRegistry;
use crate::error::HrDeskError;
use crate::knowledge::ModuleInfo;
use crate::router::QueryRouter;
use crate::synthesizer::{ResponseSynthesizer, SynthesizedResponse};
use crate::types::{Message, QueryCategory, QueryType, Role};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Which branch resolved a turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnOutcome {
    DataFetchOk,
    DataFetchFailed,
    ClassifierHandled,
}

impl std::fmt::Display for TurnOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DataFetchOk => write!(f, "data_fetch_ok"),
            Self::DataFetchFailed => write!(f, "data_fetch_failed"),
            Self::ClassifierHandled => write!(f, "classifier_handled"),
        }
    }
}

/// Everything produced by one `send_message` call
#[derive(Debug, Clone)]
pub struct TurnResult {
    pub user_message: Message,
    pub assistant_message: Message,
    pub suggestions: Vec<String>,
    pub related_modules: Vec<&'static ModuleInfo>,
    pub category: QueryCategory,
    pub query_type: Option<QueryType>,
    pub outcome: TurnOutcome,
}

pub struct ConversationService {
    router: QueryRouter,
    classifier: IntentClassifier,
    synthesizer: ResponseSynthesizer,
    history: Vec<Message>,
}

impl ConversationService {
    pub fn new(registry: Arc<dyn EndpointRegistry>, config: &HrDeskConfig) -> Self {
        Self::with_max_list_items(registry, config.assistant.max_list_items)
    }

    pub fn with_max_list_items(registry: Arc<dyn EndpointRegistry>, max_list_items: usize) -> Self {
        Self {
            router: QueryRouter::new(registry),
            classifier: IntentClassifier::new(),
            synthesizer: ResponseSynthesizer::new(max_list_items),
            history: Vec::new(),
        }
    }

    pub fn router(&self) -> &QueryRouter {
        &self.router
    }

    /// Run one turn. Always completes with an assistant message.
    pub async fn send_message(&mut self, text: &str) -> TurnResult {
        let user_message = Message::new(Role::User, text, self.next_timestamp());
        self.history.push(user_message.clone());

        let (answer, category, query_type, outcome) = if self.router.should_route(text) {
            let routed = self.router.route(text);
            let category = routed.category;
            let query_type = routed.query_type;
            debug!("Turn routed: category={}, type={:?}", category, query_type);

            match routed.invoke().await {
                Ok(response) => (
                    self.synthesizer.from_data(category, query_type, &response),
                    category,
                    query_type,
                    TurnOutcome::DataFetchOk,
                ),
                Err(err) => {
                    warn!("Endpoint failed for {:?}: {}", query_type, err);
                    (
                        self.synthesizer.from_error(category, text, &err),
                        category,
                        query_type,
                        TurnOutcome::DataFetchFailed,
                    )
                }
            }
        } else {
            let classified = self.classifier.classify(text);
            debug!("Turn classified: intent={}", classified.intent);
            (
                self.synthesizer.from_classifier(classified),
                QueryCategory::None,
                None,
                TurnOutcome::ClassifierHandled,
            )
        };

        let SynthesizedResponse {
            content,
            suggestions,
            related_modules,
            module_context,
        } = answer;

        let assistant_message = Message::new(Role::Assistant, content, self.next_timestamp())
            .with_suggestions(suggestions.clone())
            .with_module_context(module_context);
        self.history.push(assistant_message.clone());

        info!(
            "Turn complete: outcome={}, category={}, history={}",
            outcome,
            category,
            self.history.len()
        );

        TurnResult {
            user_message,
            assistant_message,
            suggestions,
            related_modules,
            category,
            query_type,
            outcome,
        }
    }

    /// Live transcript in call order
    pub fn history(&self) -> &[Message] {
        &self.history
    }

    /// Mutable access for callers that edit the transcript in place
    pub fn history_mut(&mut self) -> &mut Vec<Message> {
        &mut self.history
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Transcript as pretty JSON
    pub fn export_json(&self) -> Result<String, HrDeskError> {
        Ok(serde_json::to_string_pretty(&self.history)?)
    }

    /// Now, never earlier than the last message
    fn next_timestamp(&self) -> DateTime<Utc> {
        let now = Utc::now();
        match self.history.last() {
            Some(last) if last.timestamp > now => last.timestamp,
            _ => now,
        }
    }
}
