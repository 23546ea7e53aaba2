//! Scheduling API client — the one outbound wire contract in the app.
//!
//! `SchedulingApi` is the seam between the submission controller and the
//! transport; `SchedulingClient` is the real HTTP implementation and
//! `MockSchedulingClient` the scripted test double.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use crate::config;

/// Request body for POST /api/agendamentos. Field names are the wire
/// contract of the scheduling backend and must not be renamed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRequest {
    pub nome: String,
    /// 11 digits, punctuation already stripped.
    pub cpf: String,
    pub telefone: String,
    pub email: String,
    /// ISO-8601 UTC instant of the session start.
    pub data_sessao: String,
    pub profissional: String,
}

/// Response body from the scheduling backend. Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// Transport-level failures. Application-level refusal is not an error —
/// the backend signals it with `success: false` in the body.
#[derive(Debug, thiserror::Error)]
pub enum SchedulingError {
    #[error("Scheduling API is not reachable at {0}")]
    Connection(String),

    #[error("Request timed out")]
    Timeout,

    #[error("HTTP client error: {0}")]
    HttpClient(String),

    #[error("Malformed response from scheduling API: {0}")]
    ResponseParsing(String),
}

/// Transport seam for the submission controller.
pub trait SchedulingApi {
    fn create_session(&self, request: &SessionRequest) -> Result<ScheduleResponse, SchedulingError>;
}

/// HTTP client for the scheduling backend.
pub struct SchedulingClient {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl SchedulingClient {
    /// Create a client for the given base URL (no path, no trailing slash).
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::blocking::Client::new(),
        }
    }

    /// Client pointed at the configured backend (`AMPARO_API_URL` or the
    /// development default).
    pub fn from_env() -> Self {
        Self::new(&config::api_base_url())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl SchedulingApi for SchedulingClient {
    fn create_session(&self, request: &SessionRequest) -> Result<ScheduleResponse, SchedulingError> {
        let url = format!("{}/api/agendamentos", self.base_url);

        let response = self.client.post(&url).json(request).send().map_err(|e| {
            if e.is_connect() {
                SchedulingError::Connection(self.base_url.clone())
            } else if e.is_timeout() {
                SchedulingError::Timeout
            } else {
                SchedulingError::HttpClient(e.to_string())
            }
        })?;

        // The backend reports refusal in the body (`success: false`), also
        // on non-2xx statuses, so the body is parsed regardless of status.
        response
            .json()
            .map_err(|e| SchedulingError::ResponseParsing(e.to_string()))
    }
}

/// Scripted scheduling API for tests: fixed outcome, call counting, and an
/// optional per-call delay for exercising the in-flight guard.
pub struct MockSchedulingClient {
    outcome: MockOutcome,
    delay: Option<std::time::Duration>,
    calls: AtomicUsize,
    last_request: Mutex<Option<SessionRequest>>,
}

enum MockOutcome {
    Respond(ScheduleResponse),
    Unreachable,
}

impl MockSchedulingClient {
    /// Backend accepts every session.
    pub fn accepting() -> Self {
        Self::respond(ScheduleResponse { success: true, message: None })
    }

    /// Backend refuses every session with the given message.
    pub fn refusing(message: &str) -> Self {
        Self::respond(ScheduleResponse {
            success: false,
            message: Some(message.to_string()),
        })
    }

    /// Backend refuses without any message.
    pub fn refusing_silently() -> Self {
        Self::respond(ScheduleResponse { success: false, message: None })
    }

    /// Backend is unreachable (connection error on every call).
    pub fn unreachable() -> Self {
        Self {
            outcome: MockOutcome::Unreachable,
            delay: None,
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        }
    }

    /// Every call sleeps for `delay` before responding.
    pub fn with_delay(mut self, delay: std::time::Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// How many calls have been made.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// The most recent request body, if any call was made.
    pub fn last_request(&self) -> Option<SessionRequest> {
        self.last_request.lock().ok()?.clone()
    }

    fn respond(response: ScheduleResponse) -> Self {
        Self {
            outcome: MockOutcome::Respond(response),
            delay: None,
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        }
    }
}

impl SchedulingApi for MockSchedulingClient {
    fn create_session(&self, request: &SessionRequest) -> Result<ScheduleResponse, SchedulingError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut last) = self.last_request.lock() {
            *last = Some(request.clone());
        }
        if let Some(delay) = self.delay {
            std::thread::sleep(delay);
        }
        match &self.outcome {
            MockOutcome::Respond(response) => Ok(response.clone()),
            MockOutcome::Unreachable => Err(SchedulingError::Connection("mock".to_string())),
        }
    }
}
