use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use sqlx::PgPool;
use teacher_portal::config::jwt::JwtConfig;
use teacher_portal::config::rate_limit::RateLimitConfig;
use teacher_portal::router::init_router;
use teacher_portal::state::AppState;
use tower::ServiceExt;
use uuid::Uuid;

/// Client address stamped on every test request. The rate limiter keys on
/// forwarding headers and rejects requests without any client ip.
pub const TEST_CLIENT_IP: &str = "203.0.113.7";

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "test-secret-key-for-integration-tests".to_string(),
        issuer: "teacher-portal".to_string(),
        audience: "teacher-portal-clients".to_string(),
    }
}

/// Builds the application router against the given pool. The limiter burst
/// is large enough that ordinary test traffic never trips it; throttling
/// has its own dedicated test using [`test_app_with_rate_limit`].
pub fn test_app(pool: PgPool) -> Router {
    test_app_with_rate_limit(
        pool,
        RateLimitConfig {
            auth_per_second: 1,
            auth_burst_size: 1000,
        },
    )
}

pub fn test_app_with_rate_limit(pool: PgPool, rate_limit_config: RateLimitConfig) -> Router {
    let state = AppState {
        db: pool,
        jwt_config: test_jwt_config(),
        rate_limit_config,
    };
    init_router(state)
}

pub fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .header("x-forwarded-for", TEST_CLIENT_IP)
        .body(Body::from(serde_json::to_string(body).unwrap()))
        .unwrap()
}

#[allow(dead_code)]
pub fn authed_request(method: &str, uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("authorization", format!("Bearer {}", token))
        .header("x-forwarded-for", TEST_CLIENT_IP)
        .body(Body::empty())
        .unwrap()
}

#[allow(dead_code)]
pub fn authed_json_request(method: &str, uri: &str, token: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("authorization", format!("Bearer {}", token))
        .header("content-type", "application/json")
        .header("x-forwarded-for", TEST_CLIENT_IP)
        .body(Body::from(serde_json::to_string(body).unwrap()))
        .unwrap()
}

/// Request with no authorization header, for exercising the auth guard.
#[allow(dead_code)]
pub fn bare_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("x-forwarded-for", TEST_CLIENT_IP)
        .body(Body::empty())
        .unwrap()
}

pub async fn read_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    }
}

#[allow(dead_code)]
pub struct TestTeacher {
    pub id: Uuid,
    pub user_name: String,
    pub email: String,
    pub password: String,
    pub token: String,
}

/// Registers a fresh teacher over the API and logs them in.
#[allow(dead_code)]
pub async fn register_and_login(app: &Router, first_name: &str, last_name: &str) -> TestTeacher {
    let suffix = Uuid::new_v4().simple().to_string();
    let user_name = format!("{}_{}", first_name.to_lowercase(), &suffix[..8]);
    let email = format!("{}@test.com", user_name);
    let password = "testpass123".to_string();

    let request = json_request(
        "POST",
        "/auth/register",
        &json!({
            "userName": user_name,
            "email": email,
            "firstName": first_name,
            "lastName": last_name,
            "password": password,
            "confirmPassword": password,
        }),
    );
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let profile = read_json(response).await;
    let id = Uuid::parse_str(profile["id"].as_str().unwrap()).unwrap();

    let request = json_request(
        "POST",
        "/auth/login",
        &json!({
            "userName": user_name,
            "password": password,
        }),
    );
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    let token = body["token"].as_str().unwrap().to_string();

    TestTeacher {
        id,
        user_name,
        email,
        password,
        token,
    }
}

/// Adds a student to the authenticated teacher's roster and returns the
/// created record.
#[allow(dead_code)]
pub async fn add_student(
    app: &Router,
    token: &str,
    first_name: &str,
    last_name: &str,
    email: &str,
) -> Value {
    let request = authed_json_request(
        "POST",
        "/students",
        token,
        &json!({
            "firstName": first_name,
            "lastName": last_name,
            "email": email,
        }),
    );
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    read_json(response).await
}
