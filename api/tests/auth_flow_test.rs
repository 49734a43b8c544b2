//! Integration tests for the authentication flow:
//! registration, login, token gating and profile editing.

mod common;

use actix_web::{http::StatusCode, test};

use tg_api::app::create_app;
use tg_core::repositories::UserRepository;
use tg_core::services::token::{TokenConfig, TokenService};

use common::{registration_body, test_context, TEST_SECRET};

#[actix_rt::test]
async fn test_register_then_authenticate_round_trip() {
    let ctx = test_context();
    let app = test::init_service(create_app(ctx.state.clone(), ctx.resolver.clone())).await;

    let response = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/register")
            .set_json(registration_body("a@x.com"))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let body: serde_json::Value = test::read_body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["user_id"], 1);

    let response = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/authenticate")
            .set_json(serde_json::json!({"email": "a@x.com", "password": "pw1"}))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["userRole"], "exporter");
    assert_eq!(body["primaryCountry"], "Nigeria");
    assert!(!body["token"].as_str().unwrap().is_empty());
    // The password digest never crosses the boundary.
    assert!(body.get("password").is_none());
}

#[actix_rt::test]
async fn test_wrong_password_is_unauthorized() {
    let ctx = test_context();
    let app = test::init_service(create_app(ctx.state.clone(), ctx.resolver.clone())).await;

    test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/register")
            .set_json(registration_body("a@x.com"))
            .to_request(),
    )
    .await;

    let response = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/authenticate")
            .set_json(serde_json::json!({"email": "a@x.com", "password": "wrong"}))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[actix_rt::test]
async fn test_duplicate_registration_is_a_conflict() {
    let ctx = test_context();
    let app = test::init_service(create_app(ctx.state.clone(), ctx.resolver.clone())).await;

    test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/register")
            .set_json(registration_body("a@x.com"))
            .to_request(),
    )
    .await;

    let response = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/register")
            .set_json(registration_body("a@x.com"))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let body: serde_json::Value = test::read_body_json(response).await;
    assert_eq!(body["message"], "Email already exists");
}

#[actix_rt::test]
async fn test_registration_with_missing_fields_is_rejected() {
    let ctx = test_context();
    let app = test::init_service(create_app(ctx.state.clone(), ctx.resolver.clone())).await;

    let response = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/register")
            .set_json(serde_json::json!({"email": "a@x.com"}))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = test::read_body_json(response).await;
    assert_eq!(body["message"], "Missing required fields");
}

#[actix_rt::test]
async fn test_registration_with_unknown_role_is_rejected() {
    let ctx = test_context();
    let app = test::init_service(create_app(ctx.state.clone(), ctx.resolver.clone())).await;

    let mut body = registration_body("a@x.com");
    body["userRole"] = serde_json::json!("superuser");

    let response = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/register")
            .set_json(body)
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[actix_rt::test]
async fn test_protected_route_without_token_is_forbidden() {
    let ctx = test_context();
    let app = test::init_service(create_app(ctx.state.clone(), ctx.resolver.clone())).await;

    let response = test::call_service(
        &app,
        test::TestRequest::get().uri("/fetch-consignments").to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let body: serde_json::Value = test::read_body_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Token is missing");
}

#[actix_rt::test]
async fn test_expired_token_is_forbidden() {
    let ctx = test_context();
    let app = test::init_service(create_app(ctx.state.clone(), ctx.resolver.clone())).await;

    test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/register")
            .set_json(registration_body("a@x.com"))
            .to_request(),
    )
    .await;
    let user = ctx
        .user_repository
        .find_by_id(1)
        .await
        .unwrap()
        .unwrap();

    // Same secret, but the token is already past its expiry when issued.
    let expired_issuer =
        TokenService::new(TokenConfig::new(TEST_SECRET).with_expiry_minutes(-1));
    let token = expired_issuer.issue(&user).unwrap();

    let response = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/fetch-consignments")
            .insert_header(("Authorization", token))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let body: serde_json::Value = test::read_body_json(response).await;
    assert_eq!(body["message"], "Token has expired");
}

#[actix_rt::test]
async fn test_edit_profile_updates_own_account() {
    let ctx = test_context();
    let app = test::init_service(create_app(ctx.state.clone(), ctx.resolver.clone())).await;

    test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/register")
            .set_json(registration_body("a@x.com"))
            .to_request(),
    )
    .await;

    let login: serde_json::Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::post()
            .uri("/authenticate")
            .set_json(serde_json::json!({"email": "a@x.com", "password": "pw1"}))
            .to_request(),
    )
    .await;
    let token = login["token"].as_str().unwrap().to_string();

    let response = test::call_service(
        &app,
        test::TestRequest::put()
            .uri("/edit-profile")
            .insert_header(("Authorization", token))
            .set_json(serde_json::json!({
                "user_id": 1,
                "companyName": "Okafor Global"
            }))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let user = ctx.user_repository.find_by_id(1).await.unwrap().unwrap();
    assert_eq!(user.company_name, "Okafor Global");
    // Untouched fields keep their values.
    assert_eq!(user.first_name, "Ada");
}

#[actix_rt::test]
async fn test_edit_profile_rejects_other_accounts() {
    let ctx = test_context();
    let app = test::init_service(create_app(ctx.state.clone(), ctx.resolver.clone())).await;

    test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/register")
            .set_json(registration_body("a@x.com"))
            .to_request(),
    )
    .await;

    let login: serde_json::Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::post()
            .uri("/authenticate")
            .set_json(serde_json::json!({"email": "a@x.com", "password": "pw1"}))
            .to_request(),
    )
    .await;
    let token = login["token"].as_str().unwrap().to_string();

    let response = test::call_service(
        &app,
        test::TestRequest::put()
            .uri("/edit-profile")
            .insert_header(("Authorization", token))
            .set_json(serde_json::json!({
                "user_id": 2,
                "companyName": "Hijacked Ltd"
            }))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}
