//! End-to-end conversation tests over the fake backend.

use hrdesk_common::endpoints::FakeEndpointRegistryBuilder;
use hrdesk_common::{
    ConversationService, EndpointError, FakeEndpointRegistry, HrDeskConfig, HyperResponse,
    IntentClassifier, IntentKind, QueryCategory, QueryType, Role, TurnOutcome,
};
use serde_json::json;
use std::sync::Arc;

fn service_with(fake: Arc<FakeEndpointRegistry>) -> ConversationService {
    ConversationService::new(fake, &HrDeskConfig::default())
}

#[tokio::test]
async fn test_scenario_a_meta_message_rendered() {
    let fake = Arc::new(
        FakeEndpointRegistryBuilder::new()
            .respond(
                QueryType::Headcount,
                HyperResponse::new(
                    json!({"Engineering": 24, "Sales": 11}),
                    "35 employees across 2 departments",
                )
                .with_total(35),
            )
            .build(),
    );
    let mut svc = service_with(fake.clone());

    let turn = svc.send_message("Give me department-wise headcount").await;
    assert_eq!(turn.outcome, TurnOutcome::DataFetchOk);
    assert_eq!(turn.category, QueryCategory::Dashboard);
    assert!(turn
        .assistant_message
        .content
        .contains("35 employees across 2 departments"));
    assert_eq!(fake.call_count(QueryType::Headcount), 1);
}

#[tokio::test]
async fn test_scenario_b_no_range_sent() {
    let fake = Arc::new(FakeEndpointRegistry::new());
    let mut svc = service_with(fake.clone());

    let turn = svc.send_message("Show employees with missing documents").await;
    assert_eq!(turn.category, QueryCategory::Employee);
    assert_eq!(turn.query_type, Some(QueryType::MissingDocuments));

    let calls = fake.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].query_type, QueryType::MissingDocuments);
    assert!(calls[0].range.is_none());
    assert!(calls[0].threshold.is_none());
}

#[tokio::test]
async fn test_scenario_c_onboarding() {
    let fake = Arc::new(FakeEndpointRegistry::new());
    let mut svc = service_with(fake.clone());

    let turn = svc.send_message("Who hasn't completed onboarding?").await;
    assert_eq!(turn.category, QueryCategory::Employee);
    assert_eq!(fake.call_count(QueryType::IncompleteOnboarding), 1);
}

#[tokio::test]
async fn test_scenario_d_failure_is_reported_not_raised() {
    let fake = Arc::new(
        FakeEndpointRegistryBuilder::new()
            .fail_all(EndpointError::Network("network down".to_string()))
            .build(),
    );
    let mut svc = service_with(fake);

    let turn = svc.send_message("show quick stats").await;
    assert_eq!(turn.outcome, TurnOutcome::DataFetchFailed);
    assert_eq!(turn.assistant_message.role, Role::Assistant);
    assert!(turn.assistant_message.content.contains("network down"));
    assert!(!turn.suggestions.is_empty());
    assert_eq!(svc.history().len(), 2);
}

#[tokio::test]
async fn test_scenario_e_greeting() {
    let fake = Arc::new(FakeEndpointRegistry::new());
    let mut svc = service_with(fake.clone());

    assert!(!svc.router().should_route("Hello"));
    assert_eq!(IntentClassifier::new().detect("Hello"), IntentKind::Greeting);

    let turn = svc.send_message("Hello").await;
    assert_eq!(turn.outcome, TurnOutcome::ClassifierHandled);
    assert_eq!(turn.suggestions.len(), 4);
    assert_eq!(
        turn.assistant_message.suggestions.as_ref().map(Vec::len),
        Some(4)
    );
    assert_eq!(fake.total_calls(), 0);
}

#[tokio::test]
async fn test_history_has_two_messages_per_turn() {
    let mut svc = service_with(Arc::new(FakeEndpointRegistry::new()));
    let inputs = [
        "Hello",
        "show quick stats",
        "Explain the recruitment process",
        "Who is absent today?",
        "xyzzy",
    ];

    for input in inputs {
        svc.send_message(input).await;
    }

    let history = svc.history();
    assert_eq!(history.len(), inputs.len() * 2);
    for (i, input) in inputs.iter().enumerate() {
        assert_eq!(history[2 * i].role, Role::User);
        assert_eq!(history[2 * i].content, *input);
        assert_eq!(history[2 * i + 1].role, Role::Assistant);
    }
    assert!(history.windows(2).all(|w| w[0].timestamp <= w[1].timestamp));
    assert!(history
        .iter()
        .filter_map(|m| m.suggestions.as_ref())
        .all(|s| !s.is_empty()));
}

#[tokio::test]
async fn test_clear_history_is_idempotent() {
    let mut svc = service_with(Arc::new(FakeEndpointRegistry::new()));
    svc.send_message("Hello").await;

    svc.clear_history();
    assert!(svc.history().is_empty());
    svc.clear_history();
    assert!(svc.history().is_empty());

    svc.send_message("show quick stats").await;
    assert_eq!(svc.history().len(), 2);
}

#[tokio::test]
async fn test_sessions_are_independent() {
    let fake = Arc::new(FakeEndpointRegistry::new());
    let mut first = service_with(fake.clone());
    let mut second = service_with(fake.clone());

    first.send_message("Hello").await;
    first.send_message("show quick stats").await;
    second.send_message("Show leave overview").await;

    assert_eq!(first.history().len(), 4);
    assert_eq!(second.history().len(), 2);
    assert_eq!(fake.total_calls(), 2);
}

#[tokio::test]
async fn test_partial_failure_only_affects_that_type() {
    let fake = Arc::new(
        FakeEndpointRegistryBuilder::new()
            .fail(
                QueryType::TodayAttendance,
                EndpointError::Status {
                    status: 503,
                    body: "maintenance".to_string(),
                },
            )
            .build(),
    );
    let mut svc = service_with(fake);

    let failed = svc.send_message("Who is absent today?").await;
    assert_eq!(failed.outcome, TurnOutcome::DataFetchFailed);
    assert!(failed.assistant_message.content.contains("HTTP 503"));

    let ok = svc.send_message("Show leave overview").await;
    assert_eq!(ok.outcome, TurnOutcome::DataFetchOk);
}
