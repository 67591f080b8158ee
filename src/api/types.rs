use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

// ============================================================================
// WIRE TYPES
// ============================================================================

/// Course as listed by `GET /courses`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Course {
    pub id: i64,
    pub title: String,
}

/// Kind of a lecture file. Unknown kinds from newer backends are kept as `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr, EnumString, Deserialize, Serialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    Audio,
    Document,
    Presentation,
    Photo,
    #[serde(other)]
    Other,
}

/// Deliverable file attached to a topic
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FileMeta {
    pub file_id: String,
    pub name: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<FileKind>,
}

/// Topic as returned by `GET /topics/{course_id}`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Topic {
    pub title: String,
    #[serde(default)]
    pub files: Vec<FileMeta>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course: Option<i64>,
}

/// Body of `POST /request_file`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FileRequest {
    pub telegram_id: i64,
    pub file_id: String,
    pub webapp_token: String,
}

/// Success body of `POST /request_file`. The backend may send anything, so
/// both fields are optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct StatusResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Error body sent with non-2xx statuses
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub detail: serde_json::Value,
}

impl ErrorBody {
    /// Human readable detail. Strings are returned verbatim, anything else
    /// (validation error lists) is rendered as compact JSON.
    pub fn detail_text(&self) -> String {
        match &self.detail {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}
