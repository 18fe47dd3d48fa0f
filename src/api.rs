//! Task API Client
//!
//! Fetch-based bindings to the task HTTP API, one function per server
//! operation. Transport failures are logged to the console and collapse to
//! the generic `ApiError::Transport`; server-reported failures carry the
//! server's message.

use serde::de::DeserializeOwned;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use crate::draft::TaskDraft;
use crate::error::ApiError;
use crate::models::{ListResponse, MutateResponse, Task};

fn transport(err: JsValue) -> ApiError {
    web_sys::console::error_2(&"[API] request failed:".into(), &err);
    ApiError::Transport
}

/// Issue a request and return the raw response body text. The HTTP status
/// is ignored on purpose: the server reports failures in the JSON envelope
/// even for 4xx/5xx responses.
async fn send(method: &str, url: &str, body: Option<String>) -> Result<String, ApiError> {
    let opts = RequestInit::new();
    opts.set_method(method);
    if let Some(body) = &body {
        opts.set_body(&JsValue::from_str(body));
    }

    let request = Request::new_with_str_and_init(url, &opts).map_err(transport)?;
    if body.is_some() {
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(transport)?;
    }

    let window = web_sys::window().ok_or(ApiError::Transport)?;
    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(transport)?
        .into();

    let text_promise = response.text().map_err(transport)?;
    JsFuture::from(text_promise)
        .await
        .map_err(transport)?
        .as_string()
        .ok_or(ApiError::Transport)
}

fn parse_envelope<T: DeserializeOwned>(text: &str) -> Result<T, ApiError> {
    serde_json::from_str(text).map_err(|err| {
        web_sys::console::error_1(&format!("[API] unreadable response: {}", err).into());
        ApiError::Transport
    })
}

pub async fn list_tasks() -> Result<Vec<Task>, ApiError> {
    let text = send("GET", "/api/tasks", None).await?;
    parse_envelope::<ListResponse>(&text)?.into_result("Failed to load tasks")
}

pub async fn create_task(draft: &TaskDraft) -> Result<String, ApiError> {
    let body = serde_json::to_string(draft).map_err(|_| ApiError::Transport)?;
    let text = send("POST", "/api/tasks", Some(body)).await?;
    parse_envelope::<MutateResponse>(&text)?.into_result("Failed to create task")
}

pub async fn update_task(id: u32, draft: &TaskDraft) -> Result<String, ApiError> {
    let body = serde_json::to_string(draft).map_err(|_| ApiError::Transport)?;
    let text = send("PUT", &format!("/api/tasks/{}", id), Some(body)).await?;
    parse_envelope::<MutateResponse>(&text)?.into_result("Failed to update task")
}

pub async fn delete_task(id: u32) -> Result<String, ApiError> {
    let text = send("DELETE", &format!("/api/tasks/{}", id), None).await?;
    parse_envelope::<MutateResponse>(&text)?.into_result("Failed to delete task")
}

pub async fn toggle_task(id: u32) -> Result<String, ApiError> {
    let text = send("PATCH", &format!("/api/tasks/{}/toggle", id), None).await?;
    parse_envelope::<MutateResponse>(&text)?.into_result("Failed to update task")
}
