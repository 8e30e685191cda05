//! Endpoint registry: the backend data sources the router can invoke.
//!
//! One async method per query type. Production code uses
//! `HttpEndpointRegistry`, which calls the HR backend over REST; tests use
//! `FakeEndpointRegistry` with pre-configured responses.

mod fake;
mod http;

pub use fake::{FakeEndpointRegistry, FakeEndpointRegistryBuilder, RecordedCall};
pub use http::HttpEndpointRegistry;

use crate::error::EndpointError;
use crate::types::{DateRange, HyperResponse};
use async_trait::async_trait;

pub type EndpointResult = Result<HyperResponse, EndpointError>;

/// Backend data sources, one per query type.
///
/// Implementations perform their own I/O and return `Err` on any failure;
/// callers decide how to surface it.
#[async_trait]
pub trait EndpointRegistry: Send + Sync {
    // Employee lifecycle
    async fn missing_documents(&self) -> EndpointResult;
    async fn incomplete_onboarding(&self) -> EndpointResult;
    async fn role_mismatches(&self) -> EndpointResult;
    async fn new_hires_summary(&self, range: Option<DateRange>) -> EndpointResult;

    // Recruitment
    async fn pending_feedback(&self) -> EndpointResult;
    async fn candidate_matches(&self) -> EndpointResult;
    async fn hiring_funnel(&self, range: Option<DateRange>) -> EndpointResult;
    async fn pipeline_summary(&self) -> EndpointResult;

    // Attendance
    async fn today_attendance(&self) -> EndpointResult;
    async fn absentee_patterns(&self, range: DateRange, threshold: Option<u32>)
        -> EndpointResult;
    async fn late_comers(&self, range: Option<DateRange>, threshold: Option<u32>)
        -> EndpointResult;
    async fn attendance_anomalies(&self, range: DateRange) -> EndpointResult;

    // Dashboard
    async fn headcount_distribution(&self) -> EndpointResult;
    async fn open_positions(&self) -> EndpointResult;
    async fn leave_overview(&self) -> EndpointResult;
    async fn quick_stats(&self) -> EndpointResult;
}
