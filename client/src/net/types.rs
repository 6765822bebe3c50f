//! Wire DTOs for the exercise backend.
//!
//! DESIGN
//! ======
//! Exercise items are re-sent verbatim when saving, so each one wraps the JSON
//! object it arrived as. Kind tags that the UI does not recognize read as
//! `ExerciseKind::Other`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// =============================================================================
// EXERCISE KIND
// =============================================================================

/// Kind tag carried in an exercise item's `type` field.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ExerciseKind {
    MultipleChoice,
    TrueFalse,
    ShortAnswer,
    LongQuestions,
    FillInTheBlanks,
    /// Synthetic kind for a backend that answers with one free-form string.
    Text,
    /// Any tag the UI has no dedicated template for.
    Other(String),
    /// Item without a `type` field.
    #[default]
    Untyped,
}

impl ExerciseKind {
    /// Wire label for this kind.
    pub fn label(&self) -> &str {
        match self {
            Self::MultipleChoice => "Multiple Choice",
            Self::TrueFalse => "True/False",
            Self::ShortAnswer => "Short Answer",
            Self::LongQuestions => "Long Questions",
            Self::FillInTheBlanks => "Fill in the Blanks",
            Self::Text => "Text",
            Self::Other(tag) => tag,
            Self::Untyped => "",
        }
    }

    pub fn from_label(label: &str) -> Self {
        match label {
            "Multiple Choice" => Self::MultipleChoice,
            "True/False" => Self::TrueFalse,
            "Short Answer" => Self::ShortAnswer,
            "Long Questions" => Self::LongQuestions,
            "Fill in the Blanks" => Self::FillInTheBlanks,
            "Text" => Self::Text,
            "" => Self::Untyped,
            other => Self::Other(other.to_owned()),
        }
    }
}

impl From<String> for ExerciseKind {
    fn from(value: String) -> Self {
        Self::from_label(&value)
    }
}

impl From<ExerciseKind> for String {
    fn from(value: ExerciseKind) -> Self {
        value.label().to_owned()
    }
}

impl From<ExerciseType> for ExerciseKind {
    fn from(value: ExerciseType) -> Self {
        match value {
            ExerciseType::MultipleChoice => Self::MultipleChoice,
            ExerciseType::TrueFalse => Self::TrueFalse,
            ExerciseType::ShortAnswer => Self::ShortAnswer,
            ExerciseType::LongQuestions => Self::LongQuestions,
            ExerciseType::FillInTheBlanks => Self::FillInTheBlanks,
        }
    }
}

// =============================================================================
// EXERCISE TYPE (form selection)
// =============================================================================

/// Exercise types offered by the generation form. Closed set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExerciseType {
    #[default]
    #[serde(rename = "Multiple Choice")]
    MultipleChoice,
    #[serde(rename = "True/False")]
    TrueFalse,
    #[serde(rename = "Short Answer")]
    ShortAnswer,
    #[serde(rename = "Long Questions")]
    LongQuestions,
    #[serde(rename = "Fill in the Blanks")]
    FillInTheBlanks,
}

impl ExerciseType {
    /// Options in the order the form lists them.
    pub const ALL: [Self; 5] = [
        Self::MultipleChoice,
        Self::TrueFalse,
        Self::ShortAnswer,
        Self::LongQuestions,
        Self::FillInTheBlanks,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::MultipleChoice => "Multiple Choice",
            Self::TrueFalse => "True/False",
            Self::ShortAnswer => "Short Answer",
            Self::LongQuestions => "Long Questions",
            Self::FillInTheBlanks => "Fill in the Blanks",
        }
    }

    /// Parse a form `<select>` value back into a type.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.label() == label)
    }
}

// =============================================================================
// EXERCISE ITEM
// =============================================================================

/// Scalar answer value. Backends send letters, words, or booleans.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Flag(bool),
    Text(String),
    Other(Value),
}

impl AnswerValue {
    /// Whether the value would render as nothing.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Flag(_) => false,
            Self::Text(text) => text.trim().is_empty(),
            Self::Other(value) => value.is_null(),
        }
    }
}

impl fmt::Display for AnswerValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flag(true) => f.write_str("True"),
            Self::Flag(false) => f.write_str("False"),
            Self::Text(text) => f.write_str(text),
            Self::Other(value) => write!(f, "{value}"),
        }
    }
}

/// One generated question unit.
///
/// The backend's JSON object is the only storage, so saving sends back exactly
/// what was received: absent keys stay absent, `null` and empty arrays stay
/// as they were, and unknown keys pass through. Typed reads are accessors.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Exercise {
    fields: Map<String, Value>,
}

static NULL: Value = Value::Null;

/// String items of an array field; non-string entries render as JSON.
fn string_list(value: Option<&Value>) -> Vec<String> {
    value
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .map(|item| item.as_str().map_or_else(|| item.to_string(), str::to_owned))
                .collect()
        })
        .unwrap_or_default()
}

impl Exercise {
    pub fn new(id: u32, kind: ExerciseKind, question: impl Into<String>) -> Self {
        let mut fields = Map::new();
        fields.insert("id".to_owned(), Value::from(id));
        fields.insert("type".to_owned(), Value::String(kind.into()));
        fields.insert("question".to_owned(), Value::String(question.into()));
        Self { fields }
    }

    /// Multiple-choice options, in display order.
    #[must_use]
    pub fn with_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let list = options.into_iter().map(|o| Value::String(o.into())).collect();
        self.fields.insert("options".to_owned(), Value::Array(list));
        self
    }

    /// Placeholder text for each fill-in blank.
    #[must_use]
    pub fn with_blanks<I, S>(mut self, blanks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let list = blanks.into_iter().map(|b| Value::String(b.into())).collect();
        self.fields.insert("blanks".to_owned(), Value::Array(list));
        self
    }

    #[must_use]
    pub fn with_correct(mut self, correct: AnswerValue) -> Self {
        self.fields.insert("correct".to_owned(), answer_json(correct));
        self
    }

    #[must_use]
    pub fn with_answer(mut self, answer: AnswerValue) -> Self {
        self.fields.insert("answer".to_owned(), answer_json(answer));
        self
    }

    /// Sequence index assigned by the backend (usually 1-based); `null` when absent.
    pub fn id(&self) -> &Value {
        self.fields.get("id").unwrap_or(&NULL)
    }

    pub fn kind(&self) -> ExerciseKind {
        match self.fields.get("type") {
            Some(Value::String(tag)) => ExerciseKind::from_label(tag),
            None | Some(Value::Null) => ExerciseKind::Untyped,
            Some(other) => ExerciseKind::Other(other.to_string()),
        }
    }

    pub fn question(&self) -> &str {
        self.fields.get("question").and_then(Value::as_str).unwrap_or_default()
    }

    pub fn options(&self) -> Vec<String> {
        string_list(self.fields.get("options"))
    }

    pub fn blanks(&self) -> Vec<String> {
        string_list(self.fields.get("blanks"))
    }

    /// Correct option letter, or the boolean for true/false items.
    pub fn correct(&self) -> Option<AnswerValue> {
        self.answer_field("correct")
    }

    pub fn answer(&self) -> Option<AnswerValue> {
        self.answer_field("answer")
    }

    /// Any field as received, including ones this client does not interpret.
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    fn answer_field(&self, key: &str) -> Option<AnswerValue> {
        match self.fields.get(key)? {
            Value::Null => None,
            Value::Bool(flag) => Some(AnswerValue::Flag(*flag)),
            Value::String(text) => Some(AnswerValue::Text(text.clone())),
            other => Some(AnswerValue::Other(other.clone())),
        }
    }

    /// Answer to reveal under the item: `answer` when present, else `correct`.
    pub fn revealed_answer(&self) -> Option<AnswerValue> {
        self.answer()
            .filter(|a| !a.is_blank())
            .or_else(|| self.correct().filter(|c| !c.is_blank()))
    }
}

fn answer_json(value: AnswerValue) -> Value {
    match value {
        AnswerValue::Flag(flag) => Value::Bool(flag),
        AnswerValue::Text(text) => Value::String(text),
        AnswerValue::Other(other) => other,
    }
}

/// `exercises` field of a generate response: a list, or a single string.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ExercisesPayload {
    List(Vec<Exercise>),
    Text(String),
}

impl Default for ExercisesPayload {
    fn default() -> Self {
        Self::List(Vec::new())
    }
}

impl ExercisesPayload {
    /// Normalize into a list; a string becomes one `Text` item with id 1.
    pub fn into_exercises(self) -> Vec<Exercise> {
        match self {
            Self::List(items) => items,
            Self::Text(text) => vec![Exercise::new(1, ExerciseKind::Text, text)],
        }
    }
}

// =============================================================================
// REQUESTS
// =============================================================================

#[derive(Clone, Debug, Serialize)]
pub struct GenerateRequest<'a> {
    #[serde(rename = "userId")]
    pub user_id: &'a str,
    pub topic: &'a str,
    pub exercise_type: ExerciseType,
    pub num_questions: u32,
}

#[derive(Clone, Debug, Serialize)]
pub struct AskRequest<'a> {
    #[serde(rename = "userId")]
    pub user_id: &'a str,
    pub question: &'a str,
}

#[derive(Clone, Debug, Serialize)]
pub struct SaveRequest<'a> {
    #[serde(rename = "exerciseType")]
    pub exercise_type: ExerciseType,
    #[serde(rename = "exerciseData")]
    pub exercise_data: &'a [Exercise],
    pub grade: &'a str,
    pub subject: &'a str,
    pub topic: &'a str,
    pub sub_topic: &'a str,
}

// =============================================================================
// RESPONSES
// =============================================================================

/// Body of a successful upload or save.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub exercises: ExercisesPayload,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct AskResponse {
    #[serde(default)]
    pub answer: Option<String>,
}
