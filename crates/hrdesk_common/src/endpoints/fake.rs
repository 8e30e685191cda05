//! Fake endpoint registry for deterministic testing.
//!
//! Serves pre-configured responses without any network access and records
//! every call so tests can assert on routing and parameters.

use super::{EndpointRegistry, EndpointResult};
use crate::error::EndpointError;
use crate::types::{DateRange, HyperResponse, QueryType};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// One observed call to the fake registry
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub query_type: QueryType,
    pub range: Option<DateRange>,
    pub threshold: Option<u32>,
}

/// Fake registry with canned responses.
///
/// ```rust,ignore
/// let fake = FakeEndpointRegistryBuilder::new()
///     .respond(QueryType::Headcount, HyperResponse::new(json!([]), "42 employees"))
///     .fail(QueryType::QuickStats, EndpointError::Network("network down".into()))
///     .build();
/// ```
pub struct FakeEndpointRegistry {
    responses: HashMap<QueryType, EndpointResult>,
    /// Applied to every type without its own response
    default_failure: Option<EndpointError>,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl FakeEndpointRegistry {
    /// Registry where every endpoint answers with an empty list
    pub fn new() -> Self {
        Self {
            responses: HashMap::new(),
            default_failure: None,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Snapshot of recorded calls in call order
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    pub fn call_count(&self, query_type: QueryType) -> usize {
        self.calls()
            .iter()
            .filter(|c| c.query_type == query_type)
            .count()
    }

    pub fn total_calls(&self) -> usize {
        self.calls().len()
    }

    pub fn reset_calls(&self) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.clear();
        }
    }

    fn respond(
        &self,
        query_type: QueryType,
        range: Option<DateRange>,
        threshold: Option<u32>,
    ) -> EndpointResult {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(RecordedCall {
                query_type,
                range,
                threshold,
            });
        }

        if let Some(configured) = self.responses.get(&query_type) {
            return configured.clone();
        }
        if let Some(err) = &self.default_failure {
            return Err(err.clone());
        }
        Ok(HyperResponse::new(
            serde_json::Value::Array(vec![]),
            format!("{}: no records", query_type.title()),
        )
        .with_total(0))
    }
}

impl Default for FakeEndpointRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EndpointRegistry for FakeEndpointRegistry {
    async fn missing_documents(&self) -> EndpointResult {
        self.respond(QueryType::MissingDocuments, None, None)
    }

    async fn incomplete_onboarding(&self) -> EndpointResult {
        self.respond(QueryType::IncompleteOnboarding, None, None)
    }

    async fn role_mismatches(&self) -> EndpointResult {
        self.respond(QueryType::RoleMismatches, None, None)
    }

    async fn new_hires_summary(&self, range: Option<DateRange>) -> EndpointResult {
        self.respond(QueryType::NewHires, range, None)
    }

    async fn pending_feedback(&self) -> EndpointResult {
        self.respond(QueryType::PendingFeedback, None, None)
    }

    async fn candidate_matches(&self) -> EndpointResult {
        self.respond(QueryType::CandidateMatching, None, None)
    }

    async fn hiring_funnel(&self, range: Option<DateRange>) -> EndpointResult {
        self.respond(QueryType::HiringFunnel, range, None)
    }

    async fn pipeline_summary(&self) -> EndpointResult {
        self.respond(QueryType::PipelineSummary, None, None)
    }

    async fn today_attendance(&self) -> EndpointResult {
        self.respond(QueryType::TodayAttendance, None, None)
    }

    async fn absentee_patterns(
        &self,
        range: DateRange,
        threshold: Option<u32>,
    ) -> EndpointResult {
        self.respond(QueryType::AbsenteePatterns, Some(range), threshold)
    }

    async fn late_comers(
        &self,
        range: Option<DateRange>,
        threshold: Option<u32>,
    ) -> EndpointResult {
        self.respond(QueryType::LateComers, range, threshold)
    }

    async fn attendance_anomalies(&self, range: DateRange) -> EndpointResult {
        self.respond(QueryType::AttendanceAnomalies, Some(range), None)
    }

    async fn headcount_distribution(&self) -> EndpointResult {
        self.respond(QueryType::Headcount, None, None)
    }

    async fn open_positions(&self) -> EndpointResult {
        self.respond(QueryType::OpenPositions, None, None)
    }

    async fn leave_overview(&self) -> EndpointResult {
        self.respond(QueryType::LeaveOverview, None, None)
    }

    async fn quick_stats(&self) -> EndpointResult {
        self.respond(QueryType::QuickStats, None, None)
    }
}

/// Builder for `FakeEndpointRegistry`
pub struct FakeEndpointRegistryBuilder {
    responses: HashMap<QueryType, EndpointResult>,
    default_failure: Option<EndpointError>,
}

impl FakeEndpointRegistryBuilder {
    pub fn new() -> Self {
        Self {
            responses: HashMap::new(),
            default_failure: None,
        }
    }

    /// Successful response for one query type
    pub fn respond(mut self, query_type: QueryType, response: HyperResponse) -> Self {
        self.responses.insert(query_type, Ok(response));
        self
    }

    /// Failure for one query type
    pub fn fail(mut self, query_type: QueryType, err: EndpointError) -> Self {
        self.responses.insert(query_type, Err(err));
        self
    }

    /// Failure for every query type without an explicit response
    pub fn fail_all(mut self, err: EndpointError) -> Self {
        self.default_failure = Some(err);
        self
    }

    pub fn build(self) -> FakeEndpointRegistry {
        FakeEndpointRegistry {
            responses: self.responses,
            default_failure: self.default_failure,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl Default for FakeEndpointRegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}
