//! Development stand-in for the exercise backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! The real backend (book ingestion, LLM generation, persistence) runs as a
//! separate service. When `QURRICULAR_MOCK_BACKEND` is on, these handlers
//! answer the same five endpoints so the data-entry UI can be exercised end
//! to end without it. Error bodies use the backend's `{"detail": ...}` shape,
//! which the client surfaces verbatim.

#[cfg(test)]
#[path = "mock_api_test.rs"]
mod mock_api_test;

use axum::Router;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::post;
use qurricular_client::net::types::{Exercise, ExerciseType};
use qurricular_client::util::mock::mock_exercises;
use serde::Deserialize;
use serde_json::{Value, json};
use tower_http::cors::{Any, CorsLayer};

use crate::state::MockBackend;

pub const MAX_QUESTIONS: u32 = 50;
const PDF_MEDIA_TYPE: &str = "application/pdf";

pub fn router(backend: MockBackend) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/exercise/upload-book", post(upload_book))
        .route("/api/exercise/generate", post(generate))
        .route("/api/exercise/generate-simple", post(generate_simple))
        .route("/api/exercise/ask", post(ask))
        .route("/api/exercise/save", post(save))
        .layer(cors)
        .with_state(backend)
}

// =============================================================================
// ERRORS
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockError {
    pub status: StatusCode,
    pub detail: String,
}

impl MockError {
    fn new(status: StatusCode, detail: impl Into<String>) -> Self {
        Self { status, detail: detail.into() }
    }

    fn bad_request(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, detail)
    }
}

impl From<JsonRejection> for MockError {
    fn from(rejection: JsonRejection) -> Self {
        Self::new(rejection.status(), rejection.body_text())
    }
}

impl IntoResponse for MockError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "detail": self.detail }))).into_response()
    }
}

type MockResult = Result<Json<Value>, MockError>;

// =============================================================================
// REQUEST BODIES
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct GenerateBody {
    #[serde(rename = "userId", default)]
    pub user_id: String,
    #[serde(default)]
    pub topic: String,
    pub exercise_type: String,
    pub num_questions: u32,
}

#[derive(Debug, Deserialize)]
pub struct AskBody {
    #[serde(rename = "userId", default)]
    pub user_id: String,
    #[serde(default)]
    pub question: String,
}

#[derive(Debug, Deserialize)]
pub struct SaveBody {
    #[serde(rename = "exerciseType", default)]
    pub exercise_type: String,
    #[serde(rename = "exerciseData", default)]
    pub exercise_data: Vec<Exercise>,
    #[serde(default)]
    pub topic: String,
}

/// A file part pulled out of the upload form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    pub name: String,
    pub content_type: Option<String>,
    pub size: usize,
}

// =============================================================================
// VALIDATION
// =============================================================================

/// Check the two upload fields and return the trimmed user id with the file.
///
/// # Errors
///
/// 400 when either field is missing or blank, 415 when the file is not a PDF.
pub fn validate_upload(user_id: Option<String>, file: Option<UploadedFile>) -> Result<(String, UploadedFile), MockError> {
    let user_id = user_id.map(|s| s.trim().to_owned()).unwrap_or_default();
    if user_id.is_empty() {
        return Err(MockError::bad_request("userId is required."));
    }
    let Some(file) = file.filter(|f| !f.name.trim().is_empty()) else {
        return Err(MockError::bad_request("A PDF file is required."));
    };
    if file.content_type.as_deref() != Some(PDF_MEDIA_TYPE) {
        return Err(MockError::new(StatusCode::UNSUPPORTED_MEDIA_TYPE, "Only PDF files are supported."));
    }
    Ok((user_id, file))
}

/// # Errors
///
/// 422 for an unknown type label or a count outside `1..=MAX_QUESTIONS`.
pub fn validate_generate(body: &GenerateBody) -> Result<ExerciseType, MockError> {
    let exercise_type = ExerciseType::from_label(&body.exercise_type).ok_or_else(|| {
        MockError::new(
            StatusCode::UNPROCESSABLE_ENTITY,
            format!("Unsupported exercise type: {}", body.exercise_type),
        )
    })?;
    if !(1..=MAX_QUESTIONS).contains(&body.num_questions) {
        return Err(MockError::new(
            StatusCode::UNPROCESSABLE_ENTITY,
            format!("num_questions must be between 1 and {MAX_QUESTIONS}."),
        ));
    }
    Ok(exercise_type)
}

async fn require_book(backend: &MockBackend, user_id: &str) -> Result<String, MockError> {
    backend
        .book_for(user_id)
        .await
        .ok_or_else(|| MockError::bad_request("No book uploaded for this user."))
}

// =============================================================================
// HANDLERS
// =============================================================================

pub async fn upload_book(State(backend): State<MockBackend>, mut multipart: Multipart) -> MockResult {
    let mut user_id = None;
    let mut file = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| MockError::bad_request(format!("Failed to read multipart data: {e}")))?
    {
        let part = field.name().map(str::to_owned);
        match part.as_deref() {
            Some("userId") => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| MockError::bad_request(format!("Failed to read userId: {e}")))?;
                user_id = Some(text);
            }
            Some("file") => {
                let name = field.file_name().unwrap_or_default().to_owned();
                let content_type = field.content_type().map(str::to_owned);
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| MockError::bad_request(format!("Failed to read file bytes: {e}")))?;
                file = Some(UploadedFile { name, content_type, size: data.len() });
            }
            _ => {}
        }
    }

    let (user_id, file) = validate_upload(user_id, file)?;
    backend.record_book(&user_id, &file.name).await;
    tracing::info!(%user_id, book = %file.name, bytes = file.size, "mock book upload accepted");

    Ok(Json(json!({
        "message": format!("Book '{}' processed successfully for user {user_id}.", file.name),
    })))
}

pub async fn generate(State(backend): State<MockBackend>, payload: Result<Json<GenerateBody>, JsonRejection>) -> MockResult {
    let Json(body) = payload?;
    let exercise_type = validate_generate(&body)?;
    require_book(&backend, body.user_id.trim()).await?;
    Ok(exercises_response(&body, exercise_type, true))
}

pub async fn generate_simple(payload: Result<Json<GenerateBody>, JsonRejection>) -> MockResult {
    let Json(body) = payload?;
    let exercise_type = validate_generate(&body)?;
    Ok(exercises_response(&body, exercise_type, false))
}

fn exercises_response(body: &GenerateBody, exercise_type: ExerciseType, use_book: bool) -> Json<Value> {
    let exercises = mock_exercises(body.topic.trim(), exercise_type, body.num_questions, use_book);
    tracing::info!(
        topic = %body.topic,
        exercise_type = exercise_type.label(),
        count = exercises.len(),
        use_book,
        "mock exercises generated"
    );
    Json(json!({ "exercises": exercises }))
}

pub async fn ask(State(backend): State<MockBackend>, payload: Result<Json<AskBody>, JsonRejection>) -> MockResult {
    let Json(body) = payload?;
    let question = body.question.trim();
    if question.is_empty() {
        return Err(MockError::bad_request("question is required."));
    }
    let book = require_book(&backend, body.user_id.trim()).await?;
    Ok(Json(json!({
        "answer": format!("From '{book}': this is a mock answer to \"{question}\"."),
    })))
}

pub async fn save(payload: Result<Json<SaveBody>, JsonRejection>) -> MockResult {
    let Json(body) = payload?;
    let count = body.exercise_data.len();
    tracing::info!(exercise_type = %body.exercise_type, topic = %body.topic, count, "mock save");
    Ok(Json(json!({ "message": format!("Saved {count} exercise(s).") })))
}
