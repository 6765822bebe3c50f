//! REST client for the exercise backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `ApiError::Unavailable` since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call parses the body as JSON before looking at the status. A
//! non-success status becomes `ApiError::Remote` carrying the server's
//! `detail` string or a per-endpoint fallback. Nothing is retried and no
//! timeout is applied.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde_json::Value;

use super::types::{AskResponse, Exercise, ExerciseType, GenerateResponse, MessageResponse};
#[cfg(any(test, feature = "hydrate"))]
use serde::de::DeserializeOwned;

/// Backend base URL. Override at build time with `QURRICULAR_API_BASE`.
pub const API_BASE: &str = match option_env!("QURRICULAR_API_BASE") {
    Some(base) => base,
    None => "http://localhost:8000/api",
};

pub const UPLOAD_FAILED: &str = "Failed to upload book";
pub const GENERATE_FAILED: &str = "Failed to generate exercises";
pub const ASK_FAILED: &str = "Failed to get answer";
pub const SAVE_FAILED: &str = "Failed to save exercise";

/// Failure of a backend call. `Display` is the banner text.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Non-success status; carries the server detail or the fallback.
    #[error("{0}")]
    Remote(String),
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// The body was not the JSON we expected.
    #[error("invalid response: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

pub fn upload_book_endpoint() -> String {
    format!("{API_BASE}/exercise/upload-book")
}

/// Book-grounded generation and plain generation live on separate paths.
pub fn generate_endpoint(use_book_context: bool) -> String {
    if use_book_context {
        format!("{API_BASE}/exercise/generate")
    } else {
        format!("{API_BASE}/exercise/generate-simple")
    }
}

pub fn ask_endpoint() -> String {
    format!("{API_BASE}/exercise/ask")
}

pub fn save_endpoint() -> String {
    format!("{API_BASE}/exercise/save")
}

/// Banner text for a failed call: a non-empty string `detail`, else `fallback`.
pub fn failure_message(body: &Value, fallback: &str) -> String {
    body.get("detail")
        .and_then(Value::as_str)
        .filter(|detail| !detail.is_empty())
        .map_or_else(|| fallback.to_owned(), str::to_owned)
}

/// Turn an already-parsed body into the typed result for one call.
#[cfg(any(test, feature = "hydrate"))]
fn decode_body<T: DeserializeOwned>(ok: bool, body: Value, fallback: &str) -> Result<T, ApiError> {
    if !ok {
        return Err(ApiError::Remote(failure_message(&body, fallback)));
    }
    serde_json::from_value(body).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(feature = "hydrate")]
async fn read_response<T: DeserializeOwned>(
    resp: gloo_net::http::Response,
    fallback: &str,
) -> Result<T, ApiError> {
    let body: Value = resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))?;
    decode_body(resp.ok(), body, fallback)
}

#[cfg(feature = "hydrate")]
async fn post_json<T: DeserializeOwned>(
    url: &str,
    payload: &impl serde::Serialize,
    fallback: &str,
) -> Result<T, ApiError> {
    let resp = gloo_net::http::Request::post(url)
        .json(payload)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    read_response(resp, fallback).await
}

/// Upload a PDF via multipart `POST /exercise/upload-book`.
///
/// # Errors
///
/// Returns an `ApiError` if the request fails or the server rejects the book.
#[cfg(feature = "hydrate")]
pub async fn upload_book(user_id: &str, file: &web_sys::File) -> Result<MessageResponse, ApiError> {
    let js_err = |e: wasm_bindgen::JsValue| ApiError::Network(format!("{e:?}"));
    let form = web_sys::FormData::new().map_err(js_err)?;
    form.append_with_str("userId", user_id).map_err(js_err)?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(js_err)?;

    let resp = gloo_net::http::Request::post(&upload_book_endpoint())
        .body(form)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    read_response(resp, UPLOAD_FAILED).await
}

/// Generate exercises, grounded in the uploaded book when `use_book_context`.
///
/// # Errors
///
/// Returns an `ApiError` if the request fails or the server responds with a non-OK status.
pub async fn generate_exercises(
    topic: &str,
    exercise_type: ExerciseType,
    num_questions: u32,
    use_book_context: bool,
    user_id: &str,
) -> Result<GenerateResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = super::types::GenerateRequest { user_id, topic, exercise_type, num_questions };
        post_json(&generate_endpoint(use_book_context), &payload, GENERATE_FAILED).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (topic, exercise_type, num_questions, use_book_context, user_id);
        Err(ApiError::Unavailable)
    }
}

/// Ask a free-text question about the uploaded book.
///
/// # Errors
///
/// Returns an `ApiError` if the request fails or the server responds with a non-OK status.
pub async fn ask_question(user_id: &str, question: &str) -> Result<AskResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = super::types::AskRequest { user_id, question };
        post_json(&ask_endpoint(), &payload, ASK_FAILED).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (user_id, question);
        Err(ApiError::Unavailable)
    }
}

/// Persist a generated exercise set with its curriculum metadata.
///
/// # Errors
///
/// Returns an `ApiError` if the request fails or the server responds with a non-OK status.
pub async fn save_exercise(
    exercise_type: ExerciseType,
    exercise_data: &[Exercise],
    grade: &str,
    subject: &str,
    topic: &str,
    sub_topic: &str,
) -> Result<MessageResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = super::types::SaveRequest {
            exercise_type,
            exercise_data,
            grade,
            subject,
            topic,
            sub_topic,
        };
        post_json(&save_endpoint(), &payload, SAVE_FAILED).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (exercise_type, exercise_data, grade, subject, topic, sub_topic);
        Err(ApiError::Unavailable)
    }
}
