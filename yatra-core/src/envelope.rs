use serde::Serialize;

/// Where the payload came from. This system only ever serves mock data, so
/// the status is `mock` on success and `error` on failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiStatus {
    Mock,
    Error,
}

/// Uniform wrapper returned by every search endpoint.
///
/// Callers branch on `success` first; a zero-length `data` with
/// `success: true` is the distinct "no offers" state, while
/// `success: false` carries an empty list, a machine-oriented `error`
/// cause, and a human-readable `message`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchEnvelope<T> {
    pub success: bool,
    pub data: Vec<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub message: String,
    pub total: usize,
    pub api_status: ApiStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_params: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl<T: Serialize> SearchEnvelope<T> {
    pub fn ok(data: Vec<T>, message: impl Into<String>, provider: &'static str) -> Self {
        let total = data.len();
        Self {
            success: true,
            data,
            error: None,
            message: message.into(),
            total,
            api_status: ApiStatus::Mock,
            provider: Some(provider),
            search_params: None,
            warnings: Vec::new(),
        }
    }

    /// Echo the canonical parameters the results were generated from.
    pub fn with_params(mut self, params: &impl Serialize) -> Self {
        self.search_params = serde_json::to_value(params).ok();
        self
    }

    pub fn with_warnings(mut self, warnings: Vec<String>) -> Self {
        self.warnings = warnings;
        self
    }

    pub fn failure(cause: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: Vec::new(),
            error: Some(cause.into()),
            message: message.into(),
            total: 0,
            api_status: ApiStatus::Error,
            provider: None,
            search_params: None,
            warnings: Vec::new(),
        }
    }
}
