mod common;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use beyondsmart_api::app_router;
use beyondsmart_api::entities::user::UserRole;

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn get(path: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().uri(path);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::empty()).unwrap()
}

#[tokio::test]
async fn status_endpoint_is_public() {
    let state = common::test_state().await;
    let app = app_router(state);

    let response = app.oneshot(get("/api/v1/status", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let payload = body_json(response).await;
    assert_eq!(payload["success"], json!(true));
    assert_eq!(payload["data"]["status"], json!("ok"));
}

#[tokio::test]
async fn login_returns_a_usable_token() {
    let state = common::test_state().await;
    common::seed_user(&state, "smoke", UserRole::Sales, "pw-sales-123").await;
    let app = app_router(state);

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/auth/login")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    json!({
                        "email": "smoke@example.com",
                        "password": "pw-sales-123",
                    })
                    .to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let payload = body_json(response).await;
    let token = payload["data"]["access_token"].as_str().unwrap().to_string();
    assert_eq!(payload["data"]["token_type"], json!("Bearer"));

    let me = app
        .oneshot(get("/api/v1/auth/me", Some(&token)))
        .await
        .unwrap();
    assert_eq!(me.status(), StatusCode::OK);
    let me_payload = body_json(me).await;
    assert_eq!(me_payload["data"]["email"], json!("smoke@example.com"));
}

#[tokio::test]
async fn wrong_password_is_rejected() {
    let state = common::test_state().await;
    common::seed_user(&state, "locked", UserRole::Sales, "pw-sales-123").await;
    let app = app_router(state);

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/auth/login")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    json!({
                        "email": "locked@example.com",
                        "password": "not-the-password",
                    })
                    .to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn protected_routes_require_a_token() {
    let state = common::test_state().await;
    let app = app_router(state);

    let response = app.oneshot(get("/api/v1/quotations", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn role_gates_return_forbidden() {
    let state = common::test_state().await;
    let (keeper, _) = common::seed_user(&state, "gate", UserRole::Warehouse, "pw-wh-12345").await;
    let token = state
        .services
        .auth
        .generate_token(&keeper)
        .expect("token")
        .access_token;
    let app = app_router(state);

    // warehouse staff may browse inventory
    let allowed = app
        .clone()
        .oneshot(get("/api/v1/inventory", Some(&token)))
        .await
        .unwrap();
    assert_eq!(allowed.status(), StatusCode::OK);

    // but the sales visit log is off limits
    let denied = app
        .oneshot(get("/api/v1/visits", Some(&token)))
        .await
        .unwrap();
    assert_eq!(denied.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn admin_bypasses_role_gates() {
    let state = common::test_state().await;
    let (admin, _) = common::seed_user(&state, "root", UserRole::Admin, "pw-admin-123").await;
    let token = state
        .services
        .auth
        .generate_token(&admin)
        .expect("token")
        .access_token;
    let app = app_router(state);

    for path in ["/api/v1/visits", "/api/v1/hr/employees", "/api/v1/users"] {
        let response = app
            .clone()
            .oneshot(get(path, Some(&token)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK, "admin blocked on {path}");
    }
}

#[tokio::test]
async fn openapi_document_is_served() {
    let state = common::test_state().await;
    let app = app_router(state);

    let response = app
        .oneshot(get("/api-docs/openapi.json", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let document = body_json(response).await;
    assert_eq!(document["info"]["title"], json!("BeyondSmart ERP API"));
    let schemas = document["components"]["schemas"]
        .as_object()
        .expect("schema map");
    for name in ["Quotation", "Project", "MaintenanceRequest", "LoginCredentials"] {
        assert!(schemas.contains_key(name), "missing schema {name}");
    }
}

#[tokio::test]
async fn request_id_header_is_echoed() {
    let state = common::test_state().await;
    let app = app_router(state);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/status")
                .header("x-request-id", "smoke-42")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(
        response.headers().get("x-request-id").unwrap(),
        "smoke-42"
    );

    let payload = body_json(response).await;
    assert_eq!(payload["meta"]["request_id"], json!("smoke-42"));
}

#[tokio::test]
async fn unknown_resource_is_a_404() {
    let state = common::test_state().await;
    let (admin, _) = common::seed_user(&state, "seeker", UserRole::Admin, "pw-admin-123").await;
    let token = state
        .services
        .auth
        .generate_token(&admin)
        .expect("token")
        .access_token;
    let app = app_router(state);

    let response = app
        .oneshot(get(
            "/api/v1/projects/00000000-0000-0000-0000-000000000000",
            Some(&token),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let payload = body_json(response).await;
    assert_eq!(payload["error"], json!("Not Found"));
    assert!(payload["message"]
        .as_str()
        .unwrap()
        .contains("Project"));
}
