//! REST-backed endpoint registry.

use super::{EndpointRegistry, EndpointResult};
use crate::config::ApiConfig;
use crate::error::{EndpointError, HrDeskError};
use crate::types::{DateRange, HyperResponse, QueryType};
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

/// Backend path for each query type, relative to the API base URL
pub fn endpoint_path(query_type: QueryType) -> &'static str {
    match query_type {
        QueryType::MissingDocuments => "/assistant/employees/missing-documents",
        QueryType::IncompleteOnboarding => "/assistant/employees/incomplete-onboarding",
        QueryType::RoleMismatches => "/assistant/employees/role-mismatches",
        QueryType::NewHires => "/assistant/employees/new-hires",
        QueryType::PendingFeedback => "/assistant/recruitment/pending-feedback",
        QueryType::CandidateMatching => "/assistant/recruitment/candidate-matches",
        QueryType::HiringFunnel => "/assistant/recruitment/hiring-funnel",
        QueryType::PipelineSummary => "/assistant/recruitment/pipeline-summary",
        QueryType::TodayAttendance => "/assistant/attendance/today",
        QueryType::AbsenteePatterns => "/assistant/attendance/absentee-patterns",
        QueryType::LateComers => "/assistant/attendance/late-comers",
        QueryType::AttendanceAnomalies => "/assistant/attendance/anomalies",
        QueryType::Headcount => "/assistant/dashboard/headcount",
        QueryType::OpenPositions => "/assistant/dashboard/open-positions",
        QueryType::LeaveOverview => "/assistant/dashboard/leave-overview",
        QueryType::QuickStats => "/assistant/dashboard/quick-stats",
    }
}

/// Query-string pairs for an optional range and threshold
fn query_params(range: Option<DateRange>, threshold: Option<u32>) -> Vec<(&'static str, String)> {
    let mut params = Vec::new();
    if let Some(range) = range {
        params.extend(range.query_pairs());
    }
    if let Some(threshold) = threshold {
        params.push(("threshold", threshold.to_string()));
    }
    params
}

/// Endpoint registry that talks to the HR backend over HTTP
pub struct HttpEndpointRegistry {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl HttpEndpointRegistry {
    pub fn new(
        base_url: impl Into<String>,
        timeout: Duration,
        token: Option<String>,
    ) -> Result<Self, EndpointError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| EndpointError::Unavailable(e.to_string()))?;
        Ok(Self {
            client,
            base_url: base_url.into(),
            token,
        })
    }

    /// Build from config; the bearer token is read from `token_env`
    pub fn from_config(config: &ApiConfig) -> Result<Self, HrDeskError> {
        let token = std::env::var(&config.token_env)
            .ok()
            .filter(|t| !t.trim().is_empty());
        Ok(Self::new(
            config.base_url.clone(),
            Duration::from_secs(config.timeout_secs),
            token,
        )?)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for a query type
    pub fn url_for(&self, query_type: QueryType) -> String {
        format!(
            "{}{}",
            self.base_url.trim_end_matches('/'),
            endpoint_path(query_type)
        )
    }

    async fn get(&self, query_type: QueryType, params: Vec<(&'static str, String)>) -> EndpointResult {
        let url = self.url_for(query_type);
        debug!("GET {} params={:?}", url, params);

        let mut request = self.client.get(&url).query(&params);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let resp = request.send().await?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(EndpointError::Status { status, body });
        }

        resp.json::<HyperResponse>()
            .await
            .map_err(|e| EndpointError::Decode(e.to_string()))
    }
}

#[async_trait]
impl EndpointRegistry for HttpEndpointRegistry {
    async fn missing_documents(&self) -> EndpointResult {
        self.get(QueryType::MissingDocuments, vec![]).await
    }

    async fn incomplete_onboarding(&self) -> EndpointResult {
        self.get(QueryType::IncompleteOnboarding, vec![]).await
    }

    async fn role_mismatches(&self) -> EndpointResult {
        self.get(QueryType::RoleMismatches, vec![]).await
    }

    async fn new_hires_summary(&self, range: Option<DateRange>) -> EndpointResult {
        self.get(QueryType::NewHires, query_params(range, None)).await
    }

    async fn pending_feedback(&self) -> EndpointResult {
        self.get(QueryType::PendingFeedback, vec![]).await
    }

    async fn candidate_matches(&self) -> EndpointResult {
        self.get(QueryType::CandidateMatching, vec![]).await
    }

    async fn hiring_funnel(&self, range: Option<DateRange>) -> EndpointResult {
        self.get(QueryType::HiringFunnel, query_params(range, None)).await
    }

    async fn pipeline_summary(&self) -> EndpointResult {
        self.get(QueryType::PipelineSummary, vec![]).await
    }

    async fn today_attendance(&self) -> EndpointResult {
        self.get(QueryType::TodayAttendance, vec![]).await
    }

    async fn absentee_patterns(
        &self,
        range: DateRange,
        threshold: Option<u32>,
    ) -> EndpointResult {
        self.get(QueryType::AbsenteePatterns, query_params(Some(range), threshold))
            .await
    }

    async fn late_comers(
        &self,
        range: Option<DateRange>,
        threshold: Option<u32>,
    ) -> EndpointResult {
        self.get(QueryType::LateComers, query_params(range, threshold)).await
    }

    async fn attendance_anomalies(&self, range: DateRange) -> EndpointResult {
        self.get(QueryType::AttendanceAnomalies, query_params(Some(range), None))
            .await
    }

    async fn headcount_distribution(&self) -> EndpointResult {
        self.get(QueryType::Headcount, vec![]).await
    }

    async fn open_positions(&self) -> EndpointResult {
        self.get(QueryType::OpenPositions, vec![]).await
    }

    async fn leave_overview(&self) -> EndpointResult {
        self.get(QueryType::LeaveOverview, vec![]).await
    }

    async fn quick_stats(&self) -> EndpointResult {
        self.get(QueryType::QuickStats, vec![]).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use std::collections::HashSet;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    /// One-shot backend: answers a single request with `response` and hands
    /// back the raw request head.
    async fn serve_once(response: String) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
            String::from_utf8_lossy(&request).into_owned()
        });
        (base_url, handle)
    }

    fn registry_at(base_url: &str, token: Option<&str>) -> HttpEndpointRegistry {
        HttpEndpointRegistry::new(base_url, Duration::from_secs(5), token.map(String::from)).unwrap()
    }

    #[test]
    fn test_paths_are_unique() {
        let paths: HashSet<&str> = QueryType::ALL.iter().map(|t| endpoint_path(*t)).collect();
        assert_eq!(paths.len(), QueryType::ALL.len());
    }

    #[test]
    fn test_url_joins_without_double_slash() {
        let registry =
            HttpEndpointRegistry::new("http://hr.local/api/", Duration::from_secs(1), None)
                .unwrap();
        assert_eq!(
            registry.url_for(QueryType::Headcount),
            "http://hr.local/api/assistant/dashboard/headcount"
        );
    }

    #[test]
    fn test_query_params() {
        assert!(query_params(None, None).is_empty());

        let range = DateRange::new(
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2024, 1, 31, 0, 0, 0).unwrap(),
        );
        let params = query_params(Some(range), Some(3));
        let keys: Vec<&str> = params.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec!["start_date", "end_date", "threshold"]);
        assert_eq!(params[2].1, "3");
        assert!(params[0].1.starts_with("2024-01-01T00:00:00"));
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_network_error() {
        let registry =
            HttpEndpointRegistry::new("http://127.0.0.1:1", Duration::from_secs(2), None).unwrap();
        let err = registry.quick_stats().await.unwrap_err();
        assert!(matches!(err, EndpointError::Network(_)), "got {:?}", err);
    }

    #[tokio::test]
    async fn test_non_success_status_keeps_body() {
        let (base_url, server) = serve_once(
            "HTTP/1.1 503 Service Unavailable\r\nContent-Length: 11\r\nConnection: close\r\n\r\nmaintenance".to_string(),
        )
        .await;

        let err = registry_at(&base_url, None).quick_stats().await.unwrap_err();
        assert_eq!(
            err,
            EndpointError::Status {
                status: 503,
                body: "maintenance".to_string()
            }
        );
        assert!(err.is_transient());
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_malformed_body_is_decode_error() {
        let (base_url, server) = serve_once(
            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: 8\r\nConnection: close\r\n\r\nnot json".to_string(),
        )
        .await;

        let err = registry_at(&base_url, None).open_positions().await.unwrap_err();
        assert!(matches!(err, EndpointError::Decode(_)), "got {:?}", err);
        assert!(!err.is_transient());
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_success_sends_token_and_params() {
        const BODY: &str = r#"{"data":{"late":2},"meta":{"message":"2 late comers"}}"#;
        let response = format!(
            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            BODY.len(),
            BODY
        );
        let (base_url, server) = serve_once(response).await;

        let resp = registry_at(&base_url, Some("secret"))
            .late_comers(None, Some(3))
            .await
            .unwrap();
        assert_eq!(resp.meta.message, "2 late comers");

        let request = server.await.unwrap();
        assert!(request.starts_with("GET /assistant/attendance/late-comers?threshold=3 "));
        assert!(request.to_lowercase().contains("authorization: bearer secret"));
    }
}
