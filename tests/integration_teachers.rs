mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{
    TEST_CLIENT_IP, add_student, authed_request, bare_request, read_json, register_and_login,
    test_app,
};
use sqlx::PgPool;
use tower::ServiceExt;

#[sqlx::test(migrations = "./migrations")]
async fn test_directory_requires_auth(pool: PgPool) {
    let app = test_app(pool);

    let response = app
        .oneshot(bare_request("GET", "/teachers"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = read_json(response).await;
    assert_eq!(body["message"], "Missing authorization header");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_directory_rejects_garbage_token(pool: PgPool) {
    let app = test_app(pool);

    let response = app
        .oneshot(authed_request("GET", "/teachers", "not-a-real-token"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = read_json(response).await;
    assert_eq!(body["message"], "Invalid or expired token");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_directory_rejects_non_bearer_header(pool: PgPool) {
    let app = test_app(pool);

    let request = Request::builder()
        .method("GET")
        .uri("/teachers")
        .header("authorization", "Basic dXNlcjpwYXNz")
        .header("x-forwarded-for", TEST_CLIENT_IP)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = read_json(response).await;
    assert_eq!(body["message"], "Invalid authorization header format");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_directory_shows_all_teachers_with_live_counts(pool: PgPool) {
    let app = test_app(pool);

    let teacher_a = register_and_login(&app, "Zoe", "Keller").await;
    let teacher_b = register_and_login(&app, "Amy", "Nguyen").await;

    add_student(&app, &teacher_a.token, "Ben", "Ross", "ben.ross@school.test").await;
    add_student(&app, &teacher_a.token, "Ida", "Wolf", "ida.wolf@school.test").await;

    // Teacher B sees A's roster size without owning any of it
    let response = app
        .oneshot(authed_request("GET", "/teachers", &teacher_b.token))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = read_json(response).await;
    let directory = body.as_array().unwrap();
    assert_eq!(directory.len(), 2);

    let entry_a = directory
        .iter()
        .find(|t| t["userName"] == teacher_a.user_name.as_str())
        .unwrap();
    let entry_b = directory
        .iter()
        .find(|t| t["userName"] == teacher_b.user_name.as_str())
        .unwrap();

    assert_eq!(entry_a["studentCount"], 2);
    assert_eq!(entry_a["fullName"], "Zoe Keller");
    assert_eq!(entry_b["studentCount"], 0);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_directory_is_ordered_by_first_name(pool: PgPool) {
    let app = test_app(pool);

    register_and_login(&app, "Zoe", "Keller").await;
    let caller = register_and_login(&app, "Amy", "Nguyen").await;
    register_and_login(&app, "Mia", "Torres").await;

    let response = app
        .oneshot(authed_request("GET", "/teachers", &caller.token))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = read_json(response).await;
    let first_names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["firstName"].as_str().unwrap())
        .collect();

    assert_eq!(first_names, vec!["Amy", "Mia", "Zoe"]);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_me_returns_caller_profile_with_live_count(pool: PgPool) {
    let app = test_app(pool);
    let teacher = register_and_login(&app, "Elif", "Demir").await;

    let response = app
        .clone()
        .oneshot(authed_request("GET", "/teachers/me", &teacher.token))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = read_json(response).await;
    assert_eq!(body["userName"], teacher.user_name.as_str());
    assert_eq!(body["email"], teacher.email.as_str());
    assert_eq!(body["studentCount"], 0);

    add_student(&app, &teacher.token, "Sam", "Low", "sam.low@school.test").await;

    let response = app
        .oneshot(authed_request("GET", "/teachers/me", &teacher.token))
        .await
        .unwrap();
    let body = read_json(response).await;
    assert_eq!(body["studentCount"], 1);
}
