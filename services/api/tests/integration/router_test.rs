use axum::http::header::{
    ACCESS_CONTROL_ALLOW_CREDENTIALS, ACCESS_CONTROL_ALLOW_ORIGIN, ACCESS_CONTROL_REQUEST_METHOD,
    AUTHORIZATION, ORIGIN,
};
use axum::http::{HeaderName, HeaderValue, Method, StatusCode};
use axum_test::TestServer;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use kala_api::config::{DEFAULT_SMS_BASE_URL, SmsConfig};
use kala_api::router::{build_router, with_middleware};
use kala_api::state::AppState;
use kala_auth_types::identity::JwtSecret;
use kala_testing::auth::{MockAuth, TEST_JWT_SECRET};

/// Router over a disconnected database: only requests rejected before any
/// query runs produce meaningful responses.
fn server() -> TestServer {
    let state = AppState {
        db: DatabaseConnection::Disconnected,
        jwt_secret: JwtSecret::new(TEST_JWT_SECRET),
        sms: SmsConfig {
            base_url: DEFAULT_SMS_BASE_URL.to_owned(),
            login_id: "login".to_owned(),
            password: "secret".to_owned(),
            sender_id: "KALA".to_owned(),
            route_id: "1".to_owned(),
            template_id: "1001".to_owned(),
        },
        http: reqwest::Client::new(),
    };
    let router = with_middleware(
        build_router(state),
        &["http://localhost:3000".to_owned()],
    );
    TestServer::new(router).unwrap()
}

fn auth() -> MockAuth {
    MockAuth::new(Uuid::now_v7(), "talent@example.com")
}

#[tokio::test]
async fn should_answer_health_probes() {
    let server = server();
    server.get("/healthz").await.assert_status_ok();
    server
        .get("/readyz")
        .await
        .assert_status(StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn should_echo_request_id() {
    let response = server()
        .get("/healthz")
        .add_header(
            HeaderName::from_static("x-request-id"),
            HeaderValue::from_static("req-42"),
        )
        .await;

    response.assert_status_ok();
    assert_eq!(response.header("x-request-id"), "req-42");
}

#[tokio::test]
async fn should_generate_request_id_when_missing() {
    let response = server().get("/healthz").await;
    let id = response.header("x-request-id");
    assert!(
        Uuid::parse_str(id.to_str().unwrap()).is_ok(),
        "expected uuid request id, got {id:?}"
    );
}

#[tokio::test]
async fn should_allow_preflight_from_configured_origin() {
    let response = server()
        .method(Method::OPTIONS, "/sms/send-otp")
        .add_header(ORIGIN, HeaderValue::from_static("http://localhost:3000"))
        .add_header(
            ACCESS_CONTROL_REQUEST_METHOD,
            HeaderValue::from_static("POST"),
        )
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.header(ACCESS_CONTROL_ALLOW_ORIGIN),
        "http://localhost:3000"
    );
    assert_eq!(response.header(ACCESS_CONTROL_ALLOW_CREDENTIALS), "true");
}

#[tokio::test]
async fn should_not_allow_unlisted_origin() {
    let response = server()
        .get("/healthz")
        .add_header(ORIGIN, HeaderValue::from_static("https://evil.example"))
        .await;

    response.assert_status_ok();
    assert!(
        response
            .headers()
            .get(ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none()
    );
}

#[tokio::test]
async fn should_require_token_for_otp() {
    let response = server()
        .post("/sms/send-otp")
        .json(&serde_json::json!({ "phone": "9876543210" }))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = response.json();
    assert_eq!(body["kind"], "UNAUTHORIZED");
}

#[tokio::test]
async fn should_reject_token_signed_with_other_secret() {
    let response = server()
        .post("/sms/send-otp")
        .add_header(AUTHORIZATION, auth().with_secret("other-secret").bearer())
        .json(&serde_json::json!({ "phone": "9876543210" }))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn should_reject_malformed_phone() {
    for phone in ["12345", "5876543210", "98765432101", "98765abcde"] {
        let response = server()
            .post("/sms/send-otp")
            .add_header(AUTHORIZATION, auth().bearer())
            .json(&serde_json::json!({ "phone": phone }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: serde_json::Value = response.json();
        assert_eq!(body["kind"], "INVALID_INPUT", "phone {phone}");
    }
}

#[tokio::test]
async fn should_reject_non_numeric_otp() {
    let response = server()
        .post("/sms/verify-otp")
        .add_header(AUTHORIZATION, auth().bearer())
        .json(&serde_json::json!({ "phone": "9876543210", "otp": "12a456" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn should_reject_short_password_on_register() {
    let response = server()
        .post("/auth/register")
        .json(&serde_json::json!({ "email": "new@example.com", "password": "short" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["kind"], "INVALID_INPUT");
}

#[tokio::test]
async fn should_reject_inverted_rate_filter() {
    let response = server()
        .get("/talents?min_rate=5000&max_rate=100")
        .add_header(AUTHORIZATION, auth().bearer())
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn should_reject_unknown_platform_segment() {
    let response = server()
        .get(&format!("/socials/talent/{}/platform/myspace", Uuid::now_v7()))
        .add_header(AUTHORIZATION, auth().bearer())
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}
