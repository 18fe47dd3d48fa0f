//! Frontend Models
//!
//! Task data structures and API response envelopes matching the server.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ApiError;

/// Task priority; unrecognized server values fall back to `Medium`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    pub fn parse(raw: &str) -> Self {
        match raw {
            "low" => Priority::Low,
            "high" => Priority::High,
            _ => Priority::Medium,
        }
    }

    /// Wire value, as the API expects it
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }
}

impl Serialize for Priority {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Priority {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Priority::parse(&raw))
    }
}

/// Task data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub priority: Priority,
    /// ISO timestamp as sent by the server; `None` means no deadline
    #[serde(default)]
    pub due_date: Option<String>,
    pub completed: bool,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

// ========================
// Response Envelopes
// ========================

/// Envelope for `GET /api/tasks`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ListResponse {
    pub success: bool,
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ListResponse {
    /// Server-reported failures become `ApiError::Application`, keeping the
    /// server's message when it sent one.
    pub fn into_result(self, fallback: &str) -> Result<Vec<Task>, ApiError> {
        if self.success {
            Ok(self.tasks)
        } else {
            Err(ApiError::Application(
                self.error.unwrap_or_else(|| fallback.to_string()),
            ))
        }
    }
}

/// Envelope for create/update/delete/toggle responses
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MutateResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl MutateResponse {
    pub fn into_result(self, fallback: &str) -> Result<String, ApiError> {
        if self.success {
            Ok(self
                .message
                .unwrap_or_else(|| String::from("Operation completed")))
        } else {
            Err(ApiError::Application(
                self.error.unwrap_or_else(|| fallback.to_string()),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_parse_defaults_to_medium() {
        assert_eq!(Priority::parse("low"), Priority::Low);
        assert_eq!(Priority::parse("high"), Priority::High);
        assert_eq!(Priority::parse("medium"), Priority::Medium);
        assert_eq!(Priority::parse("urgent"), Priority::Medium);
        assert_eq!(Priority::parse(""), Priority::Medium);
    }

    #[test]
    fn test_task_deserializes_with_unknown_priority() {
        let json = r#"{"id":1,"title":"A","priority":"whatever","completed":false}"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.priority, Priority::Medium);
        assert_eq!(task.description, None);
        assert_eq!(task.due_date, None);
    }

    #[test]
    fn test_task_deserializes_full_record() {
        let json = r#"{
            "id": 7,
            "title": "Write report",
            "description": "quarterly numbers",
            "priority": "high",
            "due_date": "2026-09-01T12:00:00",
            "completed": true,
            "created_at": "2026-08-01T09:00:00",
            "updated_at": "2026-08-02T09:00:00"
        }"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.id, 7);
        assert_eq!(task.priority, Priority::High);
        assert_eq!(task.due_date.as_deref(), Some("2026-09-01T12:00:00"));
        assert!(task.completed);
    }

    #[test]
    fn test_list_response_failure_keeps_server_message() {
        let json = r#"{"success":false,"error":"Failed to fetch tasks"}"#;
        let resp: ListResponse = serde_json::from_str(json).unwrap();
        let err = resp.into_result("Failed to load tasks").unwrap_err();
        assert_eq!(
            err,
            ApiError::Application("Failed to fetch tasks".to_string())
        );
    }

    #[test]
    fn test_list_response_failure_without_message_uses_fallback() {
        let json = r#"{"success":false}"#;
        let resp: ListResponse = serde_json::from_str(json).unwrap();
        let err = resp.into_result("Failed to load tasks").unwrap_err();
        assert_eq!(err, ApiError::Application("Failed to load tasks".to_string()));
    }

    #[test]
    fn test_mutate_response_error_shown_verbatim() {
        let json = r#"{"success":false,"error":"Title already exists"}"#;
        let resp: MutateResponse = serde_json::from_str(json).unwrap();
        let err = resp.into_result("Failed to create task").unwrap_err();
        assert_eq!(err.to_string(), "Title already exists");
    }

    #[test]
    fn test_mutate_response_success_message() {
        let json = r#"{"success":true,"message":"Task created successfully"}"#;
        let resp: MutateResponse = serde_json::from_str(json).unwrap();
        assert_eq!(
            resp.into_result("Failed to create task").unwrap(),
            "Task created successfully"
        );
    }
}
