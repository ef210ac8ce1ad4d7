//! Shared helpers for API integration tests.

// Not every test binary uses every helper.
#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderName, Method, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use jsonwebtoken::{encode, EncodingKey, Header};
use sqlx::PgPool;
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use prepdeck_ai::GeminiClient;
use prepdeck_api::auth::jwt::{Claims, JwtConfig};
use prepdeck_api::config::{AiConfig, ServerConfig};
use prepdeck_api::routes;
use prepdeck_api::state::AppState;

/// Secret shared between token minting in tests and the app under test.
const TEST_SECRET: &str = "integration-test-secret-long-enough-for-hmac";

/// Base URL with nothing listening, so every AI call fails fast. The
/// submit path must degrade to sentinel feedback, never an error.
const UNREACHABLE_AI_URL: &str = "http://127.0.0.1:9";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: TEST_SECRET.to_string(),
        },
        ai: AiConfig {
            api_url: Some(UNREACHABLE_AI_URL.to_string()),
            api_key: "test-key".to_string(),
            question_count: 3,
        },
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (CORS, request ID, timeout, tracing,
/// panic recovery) that production uses.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let ai = GeminiClient::with_api_url(
        config.ai.api_url.clone().expect("test AI URL is set"),
        config.ai.api_key.clone(),
    );

    let state = AppState {
        pool,
        config: Arc::new(config),
        ai: Arc::new(ai),
    };

    let cors = CorsLayer::new()
        .allow_origin(["http://localhost:5173".parse().unwrap()])
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
        ])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600));

    let request_id_header = HeaderName::from_static("x-request-id");

    Router::new()
        .merge(routes::health::router())
        .nest("/api/v1", routes::api_routes())
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(30),
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(cors)
        .with_state(state)
}

/// Mint a session token for `email` signed with the test secret.
pub fn auth_token(email: &str) -> String {
    let claims = Claims {
        sub: format!("user_{email}"),
        email: email.to_string(),
        exp: chrono::Utc::now().timestamp() + 900,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .expect("token encoding should succeed")
}

/// Issue a request with an optional bearer token and optional JSON body.
pub async fn request(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("request should build");

    app.oneshot(request).await.expect("request should complete")
}

/// GET without authentication.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    request(app, Method::GET, uri, None, None).await
}

/// GET with a bearer token.
pub async fn get_authed(app: Router, uri: &str, token: &str) -> Response<Body> {
    request(app, Method::GET, uri, Some(token), None).await
}

/// Insert an interview row directly, bypassing the AI generation step.
pub async fn seed_interview(
    pool: &PgPool,
    mock_id: &str,
    created_by: &str,
    questions_json: &str,
) -> prepdeck_db::models::interview::Interview {
    let new_interview = prepdeck_db::models::interview::NewInterview {
        mock_id: mock_id.to_string(),
        job_position: "Backend Engineer".to_string(),
        tech_stacks: "Rust, Postgres".to_string(),
        job_description: "Own the API layer".to_string(),
        job_experience: "3".to_string(),
        questions_json: questions_json.to_string(),
        created_by: created_by.to_string(),
    };
    prepdeck_db::repositories::InterviewRepo::create(pool, &new_interview)
        .await
        .expect("seed interview should insert")
}

/// Insert an answer row directly with the given raw rating.
pub async fn seed_answer(
    pool: &PgPool,
    mock_id: &str,
    question: &str,
    rating: Option<&str>,
) -> prepdeck_db::models::answer::Answer {
    let new_answer = prepdeck_db::models::answer::NewAnswer {
        mock_id: mock_id.to_string(),
        question: question.to_string(),
        correct_answer: None,
        user_answer: Some("I would use a connection pool.".to_string()),
        feedback: Some("Reasonable answer.".to_string()),
        rating: rating.map(str::to_string),
        user_email: Some("seed@example.com".to_string()),
    };
    prepdeck_db::repositories::AnswerRepo::create(pool, &new_answer)
        .await
        .expect("seed answer should insert")
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be JSON")
}
