//! Query router - maps free text to a backend data query.
//!
//! Walks the pattern catalog in priority order and binds the first matching
//! query type to its endpoint. Greedy: a query matching several
//! types is routed to the earliest one and never re-evaluated.

use crate::catalog;
use crate::endpoints::{EndpointRegistry, EndpointResult};
use crate::extract::{extract_threshold, extract_time_period, resolve_date_range};
use crate::types::{HyperResponse, QueryCategory, QueryParams, QueryType, TimePeriod};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use tracing::debug;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Zero-argument async call bound to one backend query
pub type EndpointInvoker = Box<dyn FnOnce() -> BoxFuture<'static, EndpointResult> + Send>;

/// Result of routing one query
pub struct QueryMatch {
    pub matched: bool,
    pub category: QueryCategory,
    pub query_type: Option<QueryType>,
    pub params: QueryParams,
    invoker: EndpointInvoker,
}

impl QueryMatch {
    fn no_match() -> Self {
        Self {
            matched: false,
            category: QueryCategory::None,
            query_type: None,
            params: QueryParams::default(),
            invoker: Box::new(|| Box::pin(async { Ok(HyperResponse::no_match()) })),
        }
    }

    /// Call the bound endpoint. Failures are returned, not swallowed.
    pub async fn invoke(self) -> EndpointResult {
        (self.invoker)().await
    }

    /// Take the invoker out, leaving the routing metadata
    pub fn into_parts(self) -> (QueryCategory, Option<QueryType>, QueryParams, EndpointInvoker) {
        (self.category, self.query_type, self.params, self.invoker)
    }
}

impl std::fmt::Debug for QueryMatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryMatch")
            .field("matched", &self.matched)
            .field("category", &self.category)
            .field("query_type", &self.query_type)
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

/// Parameters attached for each query type
pub fn params_for(query_type: QueryType, query: &str) -> QueryParams {
    let period = extract_time_period(query);

    match query_type {
        QueryType::NewHires | QueryType::HiringFunnel => with_period(period),
        QueryType::AbsenteePatterns => QueryParams {
            threshold: extract_threshold(query),
            ..with_period(Some(period.unwrap_or(TimePeriod::Week)))
        },
        QueryType::LateComers => QueryParams {
            threshold: extract_threshold(query),
            ..with_period(period)
        },
        QueryType::AttendanceAnomalies => with_period(Some(period.unwrap_or(TimePeriod::Month))),
        _ => QueryParams::default(),
    }
}

fn with_period(period: Option<TimePeriod>) -> QueryParams {
    QueryParams {
        period,
        date_range: period.map(resolve_date_range),
        threshold: None,
    }
}

/// Bind a query type and its params to the registry method that serves it
fn bind(
    registry: Arc<dyn EndpointRegistry>,
    query_type: QueryType,
    params: QueryParams,
) -> EndpointInvoker {
    Box::new(move || {
        Box::pin(async move {
            let range = params.date_range;
            let threshold = params.threshold;
            match query_type {
                QueryType::MissingDocuments => registry.missing_documents().await,
                QueryType::IncompleteOnboarding => registry.incomplete_onboarding().await,
                QueryType::RoleMismatches => registry.role_mismatches().await,
                QueryType::NewHires => registry.new_hires_summary(range).await,
                QueryType::PendingFeedback => registry.pending_feedback().await,
                QueryType::CandidateMatching => registry.candidate_matches().await,
                QueryType::HiringFunnel => registry.hiring_funnel(range).await,
                QueryType::PipelineSummary => registry.pipeline_summary().await,
                QueryType::TodayAttendance => registry.today_attendance().await,
                QueryType::AbsenteePatterns => {
                    let range = range.unwrap_or_else(|| resolve_date_range(TimePeriod::Week));
                    registry.absentee_patterns(range, threshold).await
                }
                QueryType::LateComers => registry.late_comers(range, threshold).await,
                QueryType::AttendanceAnomalies => {
                    let range = range.unwrap_or_else(|| resolve_date_range(TimePeriod::Month));
                    registry.attendance_anomalies(range).await
                }
                QueryType::Headcount => registry.headcount_distribution().await,
                QueryType::OpenPositions => registry.open_positions().await,
                QueryType::LeaveOverview => registry.leave_overview().await,
                QueryType::QuickStats => registry.quick_stats().await,
            }
        })
    })
}

/// Deterministic router over the pattern catalog
#[derive(Clone)]
pub struct QueryRouter {
    registry: Arc<dyn EndpointRegistry>,
}

impl QueryRouter {
    pub fn new(registry: Arc<dyn EndpointRegistry>) -> Self {
        Self { registry }
    }

    /// Route a query; never fails
    pub fn route(&self, query: &str) -> QueryMatch {
        let Some(query_type) = catalog::first_match(query) else {
            debug!("Router: no match for {:?}", query);
            return QueryMatch::no_match();
        };

        let params = params_for(query_type, query);
        debug!(
            "Router: type={}, category={}, params={:?}",
            query_type,
            query_type.category(),
            params
        );

        QueryMatch {
            matched: true,
            category: query_type.category(),
            query_type: Some(query_type),
            invoker: bind(Arc::clone(&self.registry), query_type, params.clone()),
            params,
        }
    }

    /// Whether any catalog pattern matches, independent of priority
    pub fn should_route(&self, query: &str) -> bool {
        should_route(query)
    }
}

/// Fast-path gate: any pattern across all categories matches
pub fn should_route(query: &str) -> bool {
    catalog::matches_any(query)
}
