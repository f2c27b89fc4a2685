//! Error body returned by the backend for every failed request.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Request path that produced the error
    pub path: String,
    pub errors: Vec<String>,
    pub status_code: u16,
    pub timestamp: DateTime<Utc>,
}

impl ApiError {
    pub fn new(path: impl Into<String>, errors: Vec<String>, status_code: u16) -> Self {
        Self {
            path: path.into(),
            errors,
            status_code,
            timestamp: Utc::now(),
        }
    }

    /// All messages joined into one line, for display.
    pub fn summary(&self) -> String {
        self.errors.join("; ")
    }
}
