use axum::body::Body;
use axum::http::{Request, StatusCode};

use crate::integration::common::{
    admin_token, authed_json_request, authed_request, json_request, send, setup_test_app,
};

#[tokio::test]
async fn health_returns_200() {
    let app = setup_test_app().await;

    let (status, json) = send(
        &app.router,
        Request::get("/health").body(Body::empty()).unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["users"], 1);
}

#[tokio::test]
async fn list_users_includes_seeded_admin() {
    let app = setup_test_app().await;
    let token = admin_token(&app).await;

    let (status, json) = send(&app.router, authed_request("GET", "/api/users", &token)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json,
        serde_json::json!([{"id": 1, "name": "Admin", "email": "admin@example.com"}])
    );
}

#[tokio::test]
async fn create_and_get_user() {
    let app = setup_test_app().await;
    let token = admin_token(&app).await;

    let (status, created) = send(
        &app.router,
        authed_json_request(
            "POST",
            "/api/users",
            &token,
            serde_json::json!({"name": "Ada", "email": "ada@example.com"}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["id"], 2);
    assert_eq!(created["name"], "Ada");

    let (status, fetched) = send(
        &app.router,
        authed_request("GET", "/api/users/2", &token),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
    assert_eq!(app.state.store.len().await, 2);
}

#[tokio::test]
async fn create_user_missing_field_returns_400() {
    let app = setup_test_app().await;
    let token = admin_token(&app).await;

    let (status, json) = send(
        &app.router,
        authed_json_request(
            "POST",
            "/api/users",
            &token,
            serde_json::json!({"name": "Ada"}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "bad_request");
}

#[tokio::test]
async fn get_missing_user_returns_404() {
    let app = setup_test_app().await;
    let token = admin_token(&app).await;

    let (status, json) = send(
        &app.router,
        authed_request("GET", "/api/users/999", &token),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "not_found");
}

#[tokio::test]
async fn non_numeric_id_returns_400() {
    let app = setup_test_app().await;
    let token = admin_token(&app).await;

    let (status, json) = send(
        &app.router,
        authed_request("GET", "/api/users/abc", &token),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "bad_request");
}

#[tokio::test]
async fn partial_update_keeps_other_fields() {
    let app = setup_test_app().await;
    let token = admin_token(&app).await;

    send(
        &app.router,
        authed_json_request(
            "POST",
            "/api/users",
            &token,
            serde_json::json!({"name": "Ada", "email": "ada@example.com"}),
        ),
    )
    .await;

    let (status, updated) = send(
        &app.router,
        authed_json_request(
            "PUT",
            "/api/users/2",
            &token,
            serde_json::json!({"name": "Ada Lovelace"}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        updated,
        serde_json::json!({"id": 2, "name": "Ada Lovelace", "email": "ada@example.com"})
    );
}

#[tokio::test]
async fn update_missing_user_returns_404() {
    let app = setup_test_app().await;
    let token = admin_token(&app).await;

    let (status, _) = send(
        &app.router,
        authed_json_request(
            "PUT",
            "/api/users/42",
            &token,
            serde_json::json!({"name": "Nobody"}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_is_idempotent() {
    let app = setup_test_app().await;
    let token = admin_token(&app).await;

    send(
        &app.router,
        authed_json_request(
            "POST",
            "/api/users",
            &token,
            serde_json::json!({"name": "Ada", "email": "ada@example.com"}),
        ),
    )
    .await;

    let (status, body) = send(
        &app.router,
        authed_request("DELETE", "/api/users/2", &token),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_null());

    let (status, _) = send(
        &app.router,
        authed_request("DELETE", "/api/users/2", &token),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(
        &app.router,
        authed_request("GET", "/api/users/2", &token),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn crud_created_user_cannot_log_in() {
    let app = setup_test_app().await;
    let token = admin_token(&app).await;

    send(
        &app.router,
        authed_json_request(
            "POST",
            "/api/users",
            &token,
            serde_json::json!({"name": "Ada", "email": "ada@example.com"}),
        ),
    )
    .await;

    let request = Request::post("/api/auth/login")
        .header("content-type", "application/json")
        .body(Body::from(
            r#"{"email": "ada@example.com", "password": "anything"}"#,
        ))
        .unwrap();
    let (status, _) = send(&app.router, request).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn openapi_document_is_public() {
    let app = setup_test_app().await;

    let (status, json) = send(
        &app.router,
        Request::get("/openapi.json").body(Body::empty()).unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["info"]["title"], "Roster API");
    assert!(json["paths"]["/api/users/{id}"].is_object());
    assert!(json["components"]["securitySchemes"]["bearer"].is_object());
}

#[tokio::test]
async fn swagger_ui_is_public() {
    let app = setup_test_app().await;

    let response = tower::ServiceExt::oneshot(
        app.router.clone(),
        Request::get("/api-docs/").body(Body::empty()).unwrap(),
    )
    .await
    .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn crud_email_edit_does_not_lock_out_registered_user() {
    let app = setup_test_app().await;
    let token = admin_token(&app).await;

    let (_, crud) = send(
        &app.router,
        authed_json_request(
            "POST",
            "/api/users",
            &token,
            serde_json::json!({"name": "Crud", "email": "crud@x.com"}),
        ),
    )
    .await;
    let crud_id = crud["id"].as_u64().unwrap();

    let (status, maria) = send(
        &app.router,
        json_request(
            "POST",
            "/api/auth/register",
            serde_json::json!({"name": "Maria", "email": "maria@x.com", "password": "secret"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = send(
        &app.router,
        authed_json_request(
            "PUT",
            &format!("/api/users/{crud_id}"),
            &token,
            serde_json::json!({"email": "maria@x.com"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, json) = send(
        &app.router,
        json_request(
            "POST",
            "/api/auth/login",
            serde_json::json!({"email": "maria@x.com", "password": "secret"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["user"]["id"], maria["user"]["id"]);
}

#[tokio::test]
async fn swagger_ui_bare_path_is_public() {
    let app = setup_test_app().await;

    let response = tower::ServiceExt::oneshot(
        app.router.clone(),
        Request::get("/api-docs").body(Body::empty()).unwrap(),
    )
    .await
    .unwrap();

    let status = response.status();
    assert!(
        status.is_success() || status.is_redirection(),
        "unexpected status {status}"
    );
    if status.is_redirection() {
        let location = response.headers()["location"].to_str().unwrap();
        assert!(location.ends_with("/api-docs/"), "redirected to {location}");
    }
}
