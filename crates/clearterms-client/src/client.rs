//! HTTP client for the ClearTerms analysis backend.
//!
//! Sends `POST {base_url}/analyze` with `{url, text}` and parses the
//! `PolicyAnalysis` reply. Every failure is folded into an `AnalysisError`
//! carrying the backend's `detail` message when one is available.

use async_trait::async_trait;
use clearterms_core::{AnalysisError, AnalysisTarget, PolicyAnalysis, PolicyAnalyzer};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::config::ClientConfig;

/// Analysis backend client.
#[derive(Clone)]
pub struct AnalysisClient {
    base_url: String,
    client: reqwest::Client,
}

#[derive(Deserialize)]
struct ErrorBody {
    detail: Value,
}

#[derive(Deserialize)]
struct HealthResponse {
    status: String,
}

impl AnalysisClient {
    /// Create a client from explicit settings.
    pub fn new(config: &ClientConfig) -> Self {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().unwrap_or_default();

        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Run one analysis. No retries.
    pub async fn analyze(&self, target: &AnalysisTarget) -> Result<PolicyAnalysis, AnalysisError> {
        let url = format!("{}/analyze", self.base_url);
        let request = target.to_request();

        debug!(url = %url, mode = target.kind(), "Sending analysis request");

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                debug!(url = %url, error = %e, "Failed to reach analysis backend");
                AnalysisError::transport()
            })?;

        let status = response.status();
        let body = response.bytes().await.map_err(|e| {
            debug!(url = %url, error = %e, "Failed to read analysis response");
            AnalysisError::transport()
        })?;

        if !status.is_success() {
            let detail = extract_detail(&body);
            debug!(status = %status, detail = ?detail, "Analysis backend returned an error");
            return Err(AnalysisError::status(status.as_u16(), detail));
        }

        let analysis: PolicyAnalysis = serde_json::from_slice(&body).map_err(|e| {
            debug!(error = %e, "Malformed analysis response");
            AnalysisError::malformed()
        })?;

        debug!(
            score = analysis.transparency_score,
            risks = analysis.risk_flags.len(),
            rights = analysis.user_rights.len(),
            "Parsed analysis response"
        );

        Ok(analysis)
    }

    /// Check whether the backend answers `GET /health` with `{"status": "ok"}`.
    pub async fn health_check(&self) -> bool {
        let url = format!("{}/health", self.base_url);
        let response = self.client.get(&url).send().await;

        match response {
            Ok(resp) if resp.status().is_success() => match resp.json::<HealthResponse>().await {
                Ok(health) => health.status == "ok",
                Err(e) => {
                    debug!(error = %e, "Unexpected health response");
                    false
                }
            },
            Ok(resp) => {
                debug!(status = %resp.status(), "Health check failed");
                false
            }
            Err(e) => {
                debug!(url = %url, error = %e, "Health check could not connect");
                false
            }
        }
    }
}

#[async_trait]
impl PolicyAnalyzer for AnalysisClient {
    async fn analyze(&self, target: &AnalysisTarget) -> Result<PolicyAnalysis, AnalysisError> {
        AnalysisClient::analyze(self, target).await
    }
}

/// Pull a human-readable message out of an error body.
///
/// Accepts `{"detail": "..."}` and the validation shape
/// `{"detail": [{"msg": "..."}, ...]}`.
fn extract_detail(body: &[u8]) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_slice(body).ok()?;

    match parsed.detail {
        Value::String(message) => Some(message),
        Value::Array(items) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(Value::as_str))
                .collect();
            if messages.is_empty() {
                None
            } else {
                Some(messages.join("; "))
            }
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        extract::State,
        http::StatusCode,
        routing::{get, post},
        Json, Router,
    };
    use clearterms_core::{error::GENERIC_FAILURE_MESSAGE, AnalysisErrorKind};
    use serde_json::json;
    use std::sync::{Arc, Mutex};

    type Seen = Arc<Mutex<Vec<Value>>>;

    async fn spawn_backend(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}/api", addr)
    }

    fn client_for(base_url: &str) -> AnalysisClient {
        AnalysisClient::new(&ClientConfig::default().with_base_url(base_url))
    }

    fn recording_backend(seen: Seen, status: StatusCode, reply: Value) -> Router {
        Router::new()
            .route(
                "/api/analyze",
                post(move |State(seen): State<Seen>, Json(body): Json<Value>| {
                    let reply = reply.clone();
                    async move {
                        seen.lock().unwrap().push(body);
                        (status, Json(reply))
                    }
                }),
            )
            .with_state(seen)
    }

    #[tokio::test]
    async fn test_url_analysis_success() {
        let seen: Seen = Arc::default();
        let reply = json!({
            "transparency_score": 92,
            "verdict": "Safe",
            "summary": "Clear and fair.",
            "risk_flags": [],
            "user_rights": [{"right": "Access", "details": "Request a copy."}]
        });
        let base = spawn_backend(recording_backend(seen.clone(), StatusCode::OK, reply)).await;

        let target = AnalysisTarget::Url("https://example.com/privacy".to_string());
        let analysis = client_for(&base).analyze(&target).await.unwrap();

        assert_eq!(analysis.transparency_score, 92);
        assert_eq!(analysis.verdict, "Safe");
        assert_eq!(analysis.user_rights.len(), 1);

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0], json!({"url": "https://example.com/privacy"}));
    }

    #[tokio::test]
    async fn test_text_analysis_sends_text() {
        let seen: Seen = Arc::default();
        let reply = json!({
            "transparency_score": 20,
            "verdict": "Risky",
            "summary": "Sells data.",
            "risk_flags": [{"category": "Data Sale", "severity": "High", "description": "Sold."}],
            "user_rights": []
        });
        let base = spawn_backend(recording_backend(seen.clone(), StatusCode::OK, reply)).await;

        let target = AnalysisTarget::Text("We may sell your data to third parties.".to_string());
        let analysis = client_for(&base).analyze(&target).await.unwrap();

        assert_eq!(analysis.risk_flags[0].severity, "High");
        assert_eq!(
            seen.lock().unwrap()[0],
            json!({"url": "", "text": "We may sell your data to third parties."})
        );
    }

    #[tokio::test]
    async fn test_server_error_detail() {
        let seen: Seen = Arc::default();
        let reply = json!({"detail": "Could not fetch URL"});
        let base = spawn_backend(recording_backend(
            seen.clone(),
            StatusCode::INTERNAL_SERVER_ERROR,
            reply,
        ))
        .await;

        let target = AnalysisTarget::Url("https://example.com/privacy".to_string());
        let err = client_for(&base).analyze(&target).await.unwrap_err();

        assert_eq!(err.kind, AnalysisErrorKind::Status(500));
        assert_eq!(err.display_message(), "Could not fetch URL");
        assert_eq!(seen.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_validation_detail_list() {
        let seen: Seen = Arc::default();
        let reply = json!({"detail": [
            {"loc": ["body", "url"], "msg": "field required", "type": "value_error.missing"},
            {"loc": ["body", "text"], "msg": "str type expected", "type": "type_error.str"}
        ]});
        let base = spawn_backend(recording_backend(
            seen,
            StatusCode::UNPROCESSABLE_ENTITY,
            reply,
        ))
        .await;

        let target = AnalysisTarget::Text("policy".to_string());
        let err = client_for(&base).analyze(&target).await.unwrap_err();

        assert_eq!(err.kind, AnalysisErrorKind::Status(422));
        assert_eq!(err.display_message(), "field required; str type expected");
    }

    #[tokio::test]
    async fn test_error_without_detail_is_generic() {
        let router = Router::new().route(
            "/api/analyze",
            post(|| async { (StatusCode::BAD_GATEWAY, "upstream down") }),
        );
        let base = spawn_backend(router).await;

        let target = AnalysisTarget::Url("https://example.com/privacy".to_string());
        let err = client_for(&base).analyze(&target).await.unwrap_err();

        assert_eq!(err.kind, AnalysisErrorKind::Status(502));
        assert_eq!(err.detail, None);
        assert_eq!(err.display_message(), GENERIC_FAILURE_MESSAGE);
    }

    #[tokio::test]
    async fn test_malformed_success_body() {
        let seen: Seen = Arc::default();
        let reply = json!({"transparency_score": "high", "verdict": "Safe"});
        let base = spawn_backend(recording_backend(seen, StatusCode::OK, reply)).await;

        let target = AnalysisTarget::Url("https://example.com/privacy".to_string());
        let err = client_for(&base).analyze(&target).await.unwrap_err();

        assert_eq!(err.kind, AnalysisErrorKind::MalformedResponse);
        assert_eq!(err.display_message(), GENERIC_FAILURE_MESSAGE);
    }

    #[tokio::test]
    async fn test_unreachable_backend() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = client_for(&format!("http://{}/api", addr));
        let target = AnalysisTarget::Url("https://example.com/privacy".to_string());
        let err = client.analyze(&target).await.unwrap_err();

        assert_eq!(err.kind, AnalysisErrorKind::Transport);
        assert_eq!(err.display_message(), GENERIC_FAILURE_MESSAGE);
        assert!(!client.health_check().await);
    }

    #[tokio::test]
    async fn test_health_check() {
        let router = Router::new().route("/api/health", get(|| async { Json(json!({"status": "ok"})) }));
        let base = spawn_backend(router).await;
        assert!(client_for(&base).health_check().await);

        let router = Router::new().route(
            "/api/health",
            get(|| async { Json(json!({"status": "degraded"})) }),
        );
        let base = spawn_backend(router).await;
        assert!(!client_for(&base).health_check().await);
    }

    #[test]
    fn test_extract_detail_shapes() {
        assert_eq!(extract_detail(br#"{"detail": "boom"}"#), Some("boom".to_string()));
        assert_eq!(extract_detail(br#"{"detail": 42}"#), None);
        assert_eq!(extract_detail(br#"{"detail": []}"#), None);
        assert_eq!(extract_detail(br#"{"error": "boom"}"#), None);
        assert_eq!(extract_detail(b"<html>502</html>"), None);
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let client = client_for("http://localhost:8000/api/");
        assert_eq!(client.base_url(), "http://localhost:8000/api");
    }
}
