//! REST API client for the risk-assessment backend.
//!
//! One method per backend operation, each a single round trip using
//! gloo-net. No retries and no caching; callers own loading and error
//! presentation. A bearer token is attached when a session is present.

use gloo_net::http::{Request, RequestBuilder};
use serde::{Deserialize, Serialize};

use crate::config::DashboardConfig;
use crate::session::Session;

/// Typed client for the backend HTTP API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token,
        }
    }

    /// Build a client from runtime config and the current session.
    pub fn for_session(session: &Session) -> Self {
        let config = DashboardConfig::load();
        Self::new(config.api_url(), session.token())
    }

    /// Unauthenticated client (login/register).
    pub fn anonymous() -> Self {
        let config = DashboardConfig::load();
        Self::new(config.api_url(), None)
    }

    // ------------------------------------------------------------------
    // Auth
    // ------------------------------------------------------------------

    pub async fn login(&self, credentials: &LoginRequest) -> Result<AuthResponse, ApiError> {
        self.post_json("/api/auth/login", credentials).await
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        self.post_json("/api/auth/register", request).await
    }

    pub async fn me(&self) -> Result<UserProfile, ApiError> {
        self.get_json("/api/auth/me").await
    }

    // ------------------------------------------------------------------
    // Risk data
    // ------------------------------------------------------------------

    pub async fn risk_scores(&self) -> Result<Vec<RiskRecord>, ApiError> {
        self.get_json("/api/users/risk-scores").await
    }

    pub async fn user_risk(&self, user_id: u32) -> Result<RiskRecord, ApiError> {
        self.get_json(&format!("/api/users/{}", user_id)).await
    }

    pub async fn user_activity(&self, user_id: u32) -> Result<Vec<ActivityEvent>, ApiError> {
        self.get_json(&format!("/api/users/{}/activity", user_id))
            .await
    }

    pub async fn dashboard_stats(&self) -> Result<DashboardStats, ApiError> {
        self.get_json("/api/dashboard/stats").await
    }

    pub async fn risk_trends(&self) -> Result<Vec<RiskTrendPoint>, ApiError> {
        self.get_json("/api/dashboard/trends").await
    }

    pub async fn recommendations(&self) -> Result<RecommendationsData, ApiError> {
        self.get_json("/api/recommendations").await
    }

    pub async fn predict(&self, request: &PredictionRequest) -> Result<PredictionResult, ApiError> {
        self.post_json("/api/predict", request).await
    }

    pub async fn upload_logs(&self, logs: &[LogUploadEntry]) -> Result<UploadSummary, ApiError> {
        #[derive(Serialize)]
        struct Batch<'a> {
            logs: &'a [LogUploadEntry],
        }
        self.post_json("/api/upload_logs", &Batch { logs }).await
    }

    // ------------------------------------------------------------------
    // Transport helpers
    // ------------------------------------------------------------------

    fn authorize(&self, req: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => req.header("Authorization", &format!("Bearer {}", token)),
            None => req,
        }
    }

    async fn get_json<T: for<'de> Deserialize<'de>>(&self, path: &str) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let resp = self.authorize(Request::get(&url)).send().await?;
        if resp.ok() {
            Ok(resp.json().await?)
        } else {
            Err(ApiError::Http(resp.status()))
        }
    }

    async fn post_json<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: for<'de> Deserialize<'de>,
        B: Serialize,
    {
        let url = format!("{}{}", self.base_url, path);
        let resp = self.authorize(Request::post(&url)).json(body)?.send().await?;
        if resp.ok() {
            Ok(resp.json().await?)
        } else {
            Err(ApiError::Http(resp.status()))
        }
    }
}

/// API error type.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("HTTP error: {0}")]
    Http(u16),

    #[error("Network error: {0}")]
    Network(#[from] gloo_net::Error),
}

// ============================================================================
// Auth types
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub name: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub token_type: String,
    pub user: UserProfile,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: u32,
    pub email: String,
    pub name: String,
    pub role: String,
}

// ============================================================================
// Risk data types
// ============================================================================

/// Per-user risk summary as returned by the backend.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RiskRecord {
    pub user_id: u32,
    pub name: String,
    pub email: String,
    pub current_score: f64,
    pub risk_level: String,
    pub last_updated: String,
}

/// A single entry in a user's activity timeline. Read-only.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ActivityEvent {
    pub id: u32,
    pub timestamp: String,
    pub action: String,
    #[serde(default)]
    pub resource: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    pub success: bool,
    pub risk_score: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
pub struct DashboardStats {
    pub total_users: u64,
    pub high_risk_users: u64,
    pub recent_alerts: u64,
    pub average_risk_score: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RiskTrendPoint {
    pub date: String,
    pub average_score: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct RecommendationsData {
    pub total_high_risk_users: u64,
    pub recommendations: Vec<UserRecommendation>,
    pub generated_at: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UserRecommendation {
    pub user_id: u32,
    pub user_name: String,
    pub user_email: String,
    pub risk_score: f64,
    pub risk_level: String,
    pub recommendations: Vec<String>,
    pub recent_activity_count: u64,
    pub last_updated: String,
}

// ============================================================================
// Prediction types
// ============================================================================

/// Event action kinds accepted by the prediction endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    Login,
    FileAccess,
    Download,
    Upload,
    SystemAccess,
}

impl ActionKind {
    pub const ALL: [ActionKind; 5] = [
        ActionKind::Login,
        ActionKind::FileAccess,
        ActionKind::Download,
        ActionKind::Upload,
        ActionKind::SystemAccess,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActionKind::Login => "login",
            ActionKind::FileAccess => "file_access",
            ActionKind::Download => "download",
            ActionKind::Upload => "upload",
            ActionKind::SystemAccess => "system_access",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ActionKind::Login => "Login",
            ActionKind::FileAccess => "File Access",
            ActionKind::Download => "Download",
            ActionKind::Upload => "Upload",
            ActionKind::SystemAccess => "System Access",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.as_str() == value)
    }
}

/// The simulator's editable draft event. Field defaults mirror the
/// backend's request schema.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionRequest {
    pub user_id: u32,
    pub action: ActionKind,
    pub resource: String,
    pub location: String,
    pub success: bool,
    pub login_frequency: u32,
    pub failed_attempts: u32,
    pub file_size: u64,
    pub session_duration: u32,
}

impl Default for PredictionRequest {
    fn default() -> Self {
        Self {
            user_id: 1,
            action: ActionKind::Login,
            resource: String::new(),
            location: String::new(),
            success: true,
            login_frequency: 1,
            failed_attempts: 0,
            file_size: 0,
            session_duration: 60,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PredictionResult {
    pub user_id: u32,
    pub risk_score: f64,
    pub explanation: String,
    pub recommendations: Vec<String>,
    pub timestamp: String,
}

/// One entry of a batch log upload (Settings page).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogUploadEntry {
    pub user_id: u32,
    pub action: String,
    #[serde(default)]
    pub resource: String,
    #[serde(default)]
    pub location: String,
    #[serde(default = "default_true")]
    pub success: bool,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize)]
pub struct UploadSummary {
    pub message: String,
    pub processed_count: u64,
    pub total_logs: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_kind_wire_format() {
        let json = serde_json::to_string(&ActionKind::FileAccess).unwrap();
        assert_eq!(json, "\"file_access\"");
        assert_eq!(ActionKind::parse("system_access"), Some(ActionKind::SystemAccess));
        assert_eq!(ActionKind::parse("bogus"), None);
    }

    #[test]
    fn prediction_request_defaults() {
        let draft = PredictionRequest::default();
        assert_eq!(draft.user_id, 1);
        assert_eq!(draft.action, ActionKind::Login);
        assert!(draft.success);
        assert_eq!(draft.login_frequency, 1);
        assert_eq!(draft.failed_attempts, 0);
        assert_eq!(draft.file_size, 0);
        assert_eq!(draft.session_duration, 60);
    }

    #[test]
    fn activity_event_tolerates_missing_optionals() {
        let event: ActivityEvent = serde_json::from_str(
            r#"{"id":7,"timestamp":"2026-08-29T02:10:00","action":"download",
                "success":false,"risk_score":34.5}"#,
        )
        .unwrap();
        assert_eq!(event.resource, None);
        assert_eq!(event.location, None);
        assert!(!event.success);
    }

    #[test]
    fn upload_entry_defaults() {
        let entry: LogUploadEntry =
            serde_json::from_str(r#"{"user_id":3,"action":"login"}"#).unwrap();
        assert!(entry.success);
        assert!(entry.resource.is_empty());
    }
}
