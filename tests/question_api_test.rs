use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use lesson_questions::{build_router, config::Config, services::formatter::Locale, AppState};
use serde_json::{json, Value as JsonValue};
use tower::ServiceExt;

fn app() -> Router {
    build_router(AppState::new(Config {
        server_address: "127.0.0.1:0".into(),
        answer_api_base_url: "http://localhost:9/api".into(),
        answer_api_token: None,
        submit_timeout_secs: 5,
        display_locale: Locale::Vi,
    }))
}

async fn post_json(app: Router, uri: &str, body: JsonValue) -> (StatusCode, JsonValue) {
    let res = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = res.status();
    let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(JsonValue::Null);
    (status, value)
}

#[tokio::test]
async fn health_reports_ok() {
    let res = app()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
    let body: JsonValue = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn lists_every_question_kind_in_order() {
    let res = app()
        .oneshot(
            Request::builder()
                .uri("/api/question-kinds")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
    let kinds: Vec<JsonValue> = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(kinds.len(), 8);
    assert_eq!(kinds[0]["type"], "MCQ");
    assert_eq!(kinds[2]["label"], "True/False");
    assert_eq!(kinds[7]["category"], "pink");
}

#[tokio::test]
async fn encodes_a_matching_form() {
    let (status, body) = post_json(
        app(),
        "/api/questions/encode",
        json!({
            "form": {
                "type": "MATCHING",
                "questionText": "Match",
                "leftItems": ["Cat", "Dog"],
                "rightItems": ["Animal1", "Animal2"],
                "matchPairs": {"0": 1, "1": 0},
                "explanation": "Pets"
            },
            "order_index": 2
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["type"], "MATCHING");
    assert_eq!(body["order_index"], 2);
    assert_eq!(
        body["correct_answer"],
        json!({"pairs": [
            {"left": "Cat", "right": "Animal2"},
            {"left": "Dog", "right": "Animal1"}
        ]})
    );
    assert_eq!(body["explanation"], "Pets");
}

#[tokio::test]
async fn encode_rejects_negative_order_index() {
    let (status, body) = post_json(
        app(),
        "/api/questions/encode",
        json!({"form": {"type": "TRUE_FALSE"}, "order_index": -1}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn decodes_ordering_and_flags_unsupported_kinds() {
    let (status, body) = post_json(
        app(),
        "/api/questions/decode",
        json!({
            "id": 5,
            "type": "ORDERING",
            "content": {"question": "Arrange", "items": ["happy", "I", "am"]},
            "correct_answer": {"order": [1, 2, 0]}
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["editor"]["editor"], "ordering");
    assert_eq!(body["form"]["options"], json!(["I", "am", "happy"]));

    let (status, body) = post_json(
        app(),
        "/api/questions/decode",
        json!({"id": 6, "type": "ESSAY", "content": {}, "correct_answer": {}}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["label"], "ESSAY");
    assert_eq!(body["editor"], json!({"editor": "unsupported", "kind": "ESSAY"}));
    assert!(body["form"].is_null());
}

#[tokio::test]
async fn reset_switches_kind_and_keeps_audio() {
    let (status, body) = post_json(
        app(),
        "/api/questions/reset",
        json!({
            "form": {
                "type": "MCQ",
                "questionText": "Capital?",
                "options": ["Paris", "Lyon", "Nice", "Lille"],
                "correctAnswer": "Paris",
                "audio_url": "https://cdn.example.com/q.mp3"
            },
            "type": "TRUE_FALSE"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["type"], "TRUE_FALSE");
    assert_eq!(body["options"], json!(["", ""]));
    assert_eq!(body["correctAnswer"], "");
    assert_eq!(body["audio_url"], "https://cdn.example.com/q.mp3");
}

#[tokio::test]
async fn edit_applies_action_and_reports_issues() {
    let (status, body) = post_json(
        app(),
        "/api/questions/edit",
        json!({
            "form": {"type": "MCQ", "questionText": "Pick", "options": ["a", "b"], "correctAnswer": ""},
            "action": {"action": "select_correct", "value": "b"}
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["form"]["correctAnswer"], "b");
    assert_eq!(body["issues"], json!([]));
}

#[tokio::test]
async fn check_lists_transcript_issues() {
    let (status, body) = post_json(
        app(),
        "/api/questions/check",
        json!({"type": "TRANSCRIPT", "questionText": "Listen", "correctAnswer": "hello"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ready"], false);
    assert_eq!(body["issues"][0]["code"], "missing_audio");
    assert_eq!(body["issues"][0]["message"], "An audio file is required");
}

#[tokio::test]
async fn format_uses_configured_locale_unless_overridden() {
    let (status, body) = post_json(
        app(),
        "/api/answers/format",
        json!({"type": "TRUE_FALSE", "correct_answer": {"answer": true}}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["text"], "Đúng");

    let (_, body) = post_json(
        app(),
        "/api/answers/format",
        json!({"type": "TRUE_FALSE", "correct_answer": {"answer": true}, "locale": "en"}),
    )
    .await;
    assert_eq!(body["text"], "True");

    let (_, body) = post_json(
        app(),
        "/api/answers/format",
        json!({
            "type": "ORDERING",
            "content": {"items": ["I", "am", "happy"]},
            "correct_answer": {"order": [0, 1, 2]}
        }),
    )
    .await;
    assert_eq!(body["text"], "I am happy");
}

#[tokio::test]
async fn format_rejects_non_object_answers() {
    let (status, _) = post_json(
        app(),
        "/api/answers/format",
        json!({"type": "MCQ", "correct_answer": "Paris"}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
