use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use validator::Validate;

use crate::error::Result;
use crate::models::answer::LearnerAnswer;
use crate::models::form::AuthoringForm;
use crate::models::question_kind::{KindTag, QuestionKind};
use crate::services::dispatcher::AuthoringEditor;
use crate::services::editors::check::FormIssue;
use crate::services::editors::EditorAction;
use crate::services::encoder::encode;
use crate::services::formatter::Locale;
use crate::services::registry::{KindInfo, StyleCategory};

/// A question ready to hand to the persistence layer.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct QuestionPayload {
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    pub content: JsonValue,
    pub correct_answer: JsonValue,
    #[validate(length(max = 2000))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    #[validate(length(max = 512))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,
    #[validate(range(min = 0))]
    pub order_index: i32,
}

impl QuestionPayload {
    pub fn from_form(form: &AuthoringForm, order_index: i32) -> Result<Self> {
        let encoded = encode(form);
        let payload = Self {
            kind: form.kind,
            content: encoded.content,
            correct_answer: encoded.correct_answer,
            explanation: form.explanation.clone().filter(|e| !e.trim().is_empty()),
            audio_url: form.audio_url.clone().filter(|url| !url.trim().is_empty()),
            order_index,
        };
        payload.validate()?;
        Ok(payload)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct KindSummary {
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    pub label: &'static str,
    pub category: StyleCategory,
}

impl From<&KindInfo> for KindSummary {
    fn from(info: &KindInfo) -> Self {
        Self {
            kind: info.kind,
            label: info.label,
            category: info.category,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct EncodeRequest {
    pub form: AuthoringForm,
    #[serde(default)]
    pub order_index: i32,
}

#[derive(Debug, Clone, Serialize)]
pub struct DecodeResponse {
    pub label: String,
    pub category: StyleCategory,
    pub editor: AuthoringEditor,
    /// Absent for question types this service cannot edit.
    pub form: Option<AuthoringForm>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResetRequest {
    pub form: AuthoringForm,
    #[serde(rename = "type")]
    pub kind: QuestionKind,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EditRequest {
    pub form: AuthoringForm,
    pub action: EditorAction,
}

#[derive(Debug, Clone, Serialize)]
pub struct IssueView {
    #[serde(flatten)]
    pub issue: FormIssue,
    pub message: String,
}

impl From<FormIssue> for IssueView {
    fn from(issue: FormIssue) -> Self {
        let message = issue.to_string();
        Self { issue, message }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct EditResponse {
    pub form: AuthoringForm,
    pub issues: Vec<IssueView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CheckResponse {
    pub ready: bool,
    pub issues: Vec<IssueView>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FormatRequest {
    #[serde(rename = "type")]
    pub kind: KindTag,
    #[serde(default)]
    pub correct_answer: JsonValue,
    /// Stored content, needed to spell out an ordering answer given as indices.
    #[serde(default)]
    pub content: JsonValue,
    pub locale: Option<Locale>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FormatResponse {
    pub text: String,
}

/// Body sent to the answer-checking service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitAnswerRequest {
    pub answer: LearnerAnswer,
}
