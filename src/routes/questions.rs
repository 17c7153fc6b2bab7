use axum::{extract::State, response::IntoResponse, Json};

use crate::dto::question_dto::{
    CheckResponse, DecodeResponse, EditRequest, EditResponse, EncodeRequest, FormatRequest,
    FormatResponse, IssueView, KindSummary, QuestionPayload, ResetRequest,
};
use crate::error::Error;
use crate::models::form::AuthoringForm;
use crate::models::question::Question;
use crate::services::decoder::decode;
use crate::services::dispatcher::authoring_editor;
use crate::services::editors::{apply, check::check_form};
use crate::services::formatter::format_question_answer;
use crate::services::registry::{all_kinds, category_for, label_for};
use crate::services::resetter::reset_for_kind;
use crate::AppState;

#[axum::debug_handler]
pub async fn list_kinds() -> impl IntoResponse {
    let kinds: Vec<KindSummary> = all_kinds().iter().map(KindSummary::from).collect();
    Json(kinds)
}

#[axum::debug_handler]
pub async fn encode_question(
    Json(payload): Json<EncodeRequest>,
) -> crate::error::Result<impl IntoResponse> {
    let question = QuestionPayload::from_form(&payload.form, payload.order_index)?;
    tracing::info!(kind = %question.kind, "Encoded question");
    Ok(Json(question))
}

#[axum::debug_handler]
pub async fn decode_question(
    Json(question): Json<Question>,
) -> crate::error::Result<impl IntoResponse> {
    let response = DecodeResponse {
        label: label_for(&question.kind).to_string(),
        category: category_for(&question.kind),
        editor: authoring_editor(&question.kind),
        form: decode(&question),
    };
    Ok(Json(response))
}

#[axum::debug_handler]
pub async fn reset_question(
    Json(payload): Json<ResetRequest>,
) -> crate::error::Result<impl IntoResponse> {
    Ok(Json(reset_for_kind(&payload.form, payload.kind)))
}

#[axum::debug_handler]
pub async fn edit_question(
    Json(payload): Json<EditRequest>,
) -> crate::error::Result<impl IntoResponse> {
    let form = apply(payload.form, payload.action);
    let issues = issue_views(&form);
    Ok(Json(EditResponse { form, issues }))
}

#[axum::debug_handler]
pub async fn check_question(
    Json(form): Json<AuthoringForm>,
) -> crate::error::Result<impl IntoResponse> {
    let issues = issue_views(&form);
    Ok(Json(CheckResponse {
        ready: issues.is_empty(),
        issues,
    }))
}

#[axum::debug_handler]
pub async fn format_answer(
    State(state): State<AppState>,
    Json(payload): Json<FormatRequest>,
) -> crate::error::Result<impl IntoResponse> {
    if !payload.correct_answer.is_object() && !payload.correct_answer.is_null() {
        return Err(Error::BadRequest(
            "correct_answer must be a JSON object".to_string(),
        ));
    }
    let locale = payload.locale.unwrap_or(state.config.display_locale);
    let question = Question {
        id: 0,
        kind: payload.kind,
        content: payload.content,
        correct_answer: payload.correct_answer,
        explanation: None,
        audio_url: None,
        order_index: 0,
    };
    Ok(Json(FormatResponse {
        text: format_question_answer(&question, locale),
    }))
}

fn issue_views(form: &AuthoringForm) -> Vec<IssueView> {
    check_form(form).into_iter().map(IssueView::from).collect()
}
