//! Task Form Draft
//!
//! The form's working copy of a task and its local validation. Validation
//! runs before any network call; a failing draft never leaves the client.

use serde::Serialize;
use thiserror::Error;

use crate::models::Priority;

pub const MAX_TITLE_LEN: usize = 200;

/// Form data for a create or update request; serializes to the request body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub due_date: Option<String>,
}

impl TaskDraft {
    /// Build a draft from raw form field values. Title and description are
    /// trimmed; an empty due date means no deadline.
    pub fn from_form(title: &str, description: &str, priority: &str, due_date: &str) -> Self {
        Self {
            title: title.trim().to_string(),
            description: description.trim().to_string(),
            priority: Priority::parse(priority),
            due_date: if due_date.is_empty() {
                None
            } else {
                Some(due_date.to_string())
            },
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.is_empty() {
            return Err(ValidationError::TitleRequired);
        }
        if self.title.chars().count() > MAX_TITLE_LEN {
            return Err(ValidationError::TitleTooLong);
        }
        Ok(())
    }
}

/// Validation failures flag the title field in the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Task title is required")]
    TitleRequired,
    #[error("Task title must be less than 200 characters")]
    TitleTooLong,
}
