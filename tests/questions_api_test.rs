use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    routing::get,
    Router,
};
use quiz_backend::{routes, store::QuestionStore, AppState};
use serde_json::Value as JsonValue;
use tower::ServiceExt;

fn setup_app() -> Router {
    let state = AppState::new(QuestionStore::seeded());
    Router::new()
        .route("/health", get(routes::health::health))
        .route("/questions/find", get(routes::questions::find_question))
        .route("/questions/random", get(routes::questions::random_question))
        .route("/questions/all", get(routes::questions::all_questions))
        .route("/api-docs/openapi.json", get(routes::docs::openapi))
        .with_state(state)
}

async fn get_json(app: &Router, uri: &str) -> (StatusCode, JsonValue) {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    let body: JsonValue = serde_json::from_slice(&bytes).unwrap();
    (status, body)
}

fn assert_no_secret(question: &JsonValue) {
    let options = question["answerOptions"].as_array().expect("answer options");
    assert!(!options.is_empty());
    for option in options {
        assert!(option["answerText"].is_string());
        assert!(option.get("isCorrect").is_none());
    }
}

#[tokio::test]
async fn find_returns_public_question() {
    let app = setup_app();
    let (status, body) = get_json(&app, "/questions/find?id=1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 1);
    assert_eq!(body["questionText"], "What is the capital of France?");
    assert_eq!(body["difficulty"], 1);
    assert_no_secret(&body);
}

#[tokio::test]
async fn find_rejects_missing_and_invalid_ids() {
    let app = setup_app();

    for uri in ["/questions/find", "/questions/find?id=", "/questions/find?id=abc", "/questions/find?id=0"] {
        let (status, body) = get_json(&app, uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
        assert_eq!(body["message"], "Provide a valid question id as query");
    }
}

#[tokio::test]
async fn find_unknown_id_is_bad_request() {
    let app = setup_app();
    let (status, body) = get_json(&app, "/questions/find?id=999").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Question not found");
}

#[tokio::test]
async fn random_returns_a_seeded_question() {
    let app = setup_app();
    let count = QuestionStore::seeded().len() as i64;

    let (status, body) = get_json(&app, "/questions/random").await;
    assert_eq!(status, StatusCode::OK);
    let id = body["id"].as_i64().unwrap();
    assert!((1..=count).contains(&id));
    assert_no_secret(&body);
}

#[tokio::test]
async fn all_lists_every_question_without_secrets() {
    let app = setup_app();
    let (status, body) = get_json(&app, "/questions/all").await;
    assert_eq!(status, StatusCode::OK);

    let questions = body.as_array().unwrap();
    assert_eq!(questions.len(), QuestionStore::seeded().len());
    questions.iter().for_each(assert_no_secret);
}

#[tokio::test]
async fn health_reports_question_count() {
    let app = setup_app();
    let (status, body) = get_json(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["questions"], QuestionStore::seeded().len());
}

#[tokio::test]
async fn openapi_document_lists_routes() {
    let app = setup_app();
    let (status, body) = get_json(&app, "/api-docs/openapi.json").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/questions/find"].is_object());
    assert!(body["paths"]["/responses/verify"].is_object());
    assert!(body["components"]["schemas"]["PublicQuestion"].is_object());
}
