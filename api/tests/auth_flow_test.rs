//! Integration tests for the signup, verification, login, refresh and logout flow

#[macro_use]
mod common;

use actix_web::{http::StatusCode, test};
use serde_json::json;

use common::{create_context, token_from_link};
use rc_api::app::create_app;
use rc_api::config::HttpSettings;

fn signup_body(username: &str, email: &str) -> serde_json::Value {
    json!({ "username": username, "email": email, "password": "password123" })
}

#[actix_web::test]
async fn test_signup_creates_disabled_account_and_mails_link() {
    let ctx = create_context();
    let app = test::init_service(create_app(ctx.state.clone(), HttpSettings::default())).await;

    let (status, body) = call_json!(
        app,
        test::TestRequest::post()
            .uri("/api/auth/signup")
            .set_json(signup_body("alice", "alice@example.com"))
    );

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        body["message"],
        "Account created successfully, please check your inbox to activate your account"
    );
    assert_eq!(ctx.users.count().await, 1);

    let link = ctx.mail.last_link_for("alice@example.com").await.unwrap();
    assert!(link.starts_with("http://localhost:8080/api/auth/account-verification/"));

    // Not verified yet
    let (status, body) = call_json!(
        app,
        test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(json!({ "username": "alice", "password": "password123" }))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Disabled Account");
}

#[actix_web::test]
async fn test_full_flow_verify_login_refresh_logout() {
    let ctx = create_context();
    let app = test::init_service(create_app(ctx.state.clone(), HttpSettings::default())).await;

    call_json!(
        app,
        test::TestRequest::post()
            .uri("/api/auth/signup")
            .set_json(signup_body("alice", "alice@example.com"))
    );
    let link = ctx.mail.last_link_for("alice@example.com").await.unwrap();
    let token = token_from_link(&link);

    let (status, body) = call_json!(
        app,
        test::TestRequest::get().uri(&format!("/api/auth/account-verification/{}", token))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Account activated successfully, now you can Log In");

    let (status, login) = call_json!(
        app,
        test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(json!({ "username": "alice", "password": "password123" }))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(login["username"], "alice");
    assert_eq!(login["expires_in"], 900);

    let access_token = login["access_token"].as_str().unwrap();
    let refresh_token = login["refresh_token"].as_str().unwrap().to_string();
    assert_eq!(refresh_token.len(), 64);
    assert_eq!(ctx.token_service.subject(access_token).unwrap(), "alice");
    assert_eq!(ctx.tokens.len().await, 1);

    let (status, refreshed) = call_json!(
        app,
        test::TestRequest::post()
            .uri("/api/auth/refresh-token")
            .set_json(json!({ "refresh_token": refresh_token }))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(refreshed["refresh_token"], refresh_token.as_str());
    assert_eq!(refreshed["username"], "alice");
    let new_access = refreshed["access_token"].as_str().unwrap();
    assert_eq!(ctx.token_service.subject(new_access).unwrap(), "alice");

    let (status, body) = call_json!(
        app,
        test::TestRequest::post()
            .uri("/api/auth/logout")
            .set_json(json!({ "refresh_token": refresh_token }))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Refresh Token Deleted Successfully!");
    assert_eq!(ctx.tokens.len().await, 0);

    let (status, _) = call_json!(
        app,
        test::TestRequest::post()
            .uri("/api/auth/refresh-token")
            .set_json(json!({ "refresh_token": refresh_token }))
    );
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Logging out twice is fine
    let (status, _) = call_json!(
        app,
        test::TestRequest::post()
            .uri("/api/auth/logout")
            .set_json(json!({ "refresh_token": refresh_token }))
    );
    assert_eq!(status, StatusCode::OK);
}

#[actix_web::test]
async fn test_verification_token_is_single_use() {
    let ctx = create_context();
    let app = test::init_service(create_app(ctx.state.clone(), HttpSettings::default())).await;

    call_json!(
        app,
        test::TestRequest::post()
            .uri("/api/auth/signup")
            .set_json(signup_body("bob", "bob@example.com"))
    );
    let token = token_from_link(&ctx.mail.last_link_for("bob@example.com").await.unwrap());
    let uri = format!("/api/auth/account-verification/{}", token);

    let (first, _) = call_json!(app, test::TestRequest::get().uri(&uri));
    let (second, body) = call_json!(app, test::TestRequest::get().uri(&uri));

    assert_eq!(first, StatusCode::OK);
    assert_eq!(second, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NOT_FOUND");
}

#[actix_web::test]
async fn test_unknown_verification_token_is_not_found() {
    let ctx = create_context();
    let app = test::init_service(create_app(ctx.state.clone(), HttpSettings::default())).await;

    let (status, _) = call_json!(
        app,
        test::TestRequest::get().uri("/api/auth/account-verification/does-not-exist")
    );

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(ctx.users.count().await, 0);
}

#[actix_web::test]
async fn test_duplicate_signup_reports_every_taken_field() {
    let ctx = create_context();
    let app = test::init_service(create_app(ctx.state.clone(), HttpSettings::default())).await;

    call_json!(
        app,
        test::TestRequest::post()
            .uri("/api/auth/signup")
            .set_json(signup_body("alice", "alice@example.com"))
    );

    let (status, body) = call_json!(
        app,
        test::TestRequest::post()
            .uri("/api/auth/signup")
            .set_json(signup_body("alice", "alice@example.com"))
    );

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let fields = body["fields"].as_array().unwrap();
    assert_eq!(fields.len(), 2);
    assert!(fields.contains(&json!({ "field": "username", "message": "alice in use" })));
    assert!(fields.contains(&json!({ "field": "email", "message": "alice@example.com in use" })));
    assert_eq!(ctx.users.count().await, 1);
    assert_eq!(ctx.mail.len().await, 1);
}

#[actix_web::test]
async fn test_signup_validation_errors() {
    let ctx = create_context();
    let app = test::init_service(create_app(ctx.state.clone(), HttpSettings::default())).await;

    let (status, body) = call_json!(
        app,
        test::TestRequest::post()
            .uri("/api/auth/signup")
            .set_json(json!({ "username": "a b", "email": "nope", "password": "short" }))
    );

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "VALIDATION_ERROR");
    let fields: Vec<&str> = body["fields"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["field"].as_str().unwrap())
        .collect();
    assert!(fields.contains(&"username"));
    assert!(fields.contains(&"email"));
    assert!(fields.contains(&"password"));
    assert_eq!(ctx.users.count().await, 0);
}

#[actix_web::test]
async fn test_signup_reports_email_and_password_together() {
    let ctx = create_context();
    let app = test::init_service(create_app(ctx.state.clone(), HttpSettings::default())).await;

    let (status, body) = call_json!(
        app,
        test::TestRequest::post().uri("/api/auth/signup").set_json(json!({
            "username": "alice",
            "email": "alice@localhost",
            "password": "short"
        }))
    );

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let fields = body["fields"].as_array().unwrap();
    assert_eq!(fields.len(), 2);
    assert_eq!(fields[0]["field"], "email");
    assert_eq!(fields[1]["field"], "password");
    assert_eq!(ctx.users.count().await, 0);
}

#[actix_web::test]
async fn test_signup_accepts_multibyte_password() {
    let ctx = create_context();
    let app = test::init_service(create_app(ctx.state.clone(), HttpSettings::default())).await;

    let (status, _) = call_json!(
        app,
        test::TestRequest::post().uri("/api/auth/signup").set_json(json!({
            "username": "mei",
            "email": "mei@example.com",
            "password": "密".repeat(30)
        }))
    );

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(ctx.users.count().await, 1);
}

#[actix_web::test]
async fn test_malformed_json_is_bad_request() {
    let ctx = create_context();
    let app = test::init_service(create_app(ctx.state.clone(), HttpSettings::default())).await;

    let (status, body) = call_json!(
        app,
        test::TestRequest::post()
            .uri("/api/auth/login")
            .insert_header(("content-type", "application/json"))
            .set_payload("{ not json")
    );

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BAD_REQUEST");
}

#[actix_web::test]
async fn test_login_rejects_bad_credentials() {
    let ctx = create_context();
    let app = test::init_service(create_app(ctx.state.clone(), HttpSettings::default())).await;

    call_json!(
        app,
        test::TestRequest::post()
            .uri("/api/auth/signup")
            .set_json(signup_body("alice", "alice@example.com"))
    );
    let token = token_from_link(&ctx.mail.last_link_for("alice@example.com").await.unwrap());
    call_json!(
        app,
        test::TestRequest::get().uri(&format!("/api/auth/account-verification/{}", token))
    );

    for (username, password) in [("alice", "wrong-password"), ("nobody", "password123")] {
        let (status, body) = call_json!(
            app,
            test::TestRequest::post()
                .uri("/api/auth/login")
                .set_json(json!({ "username": username, "password": password }))
        );
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Bad Credentials");
    }
    assert_eq!(ctx.tokens.len().await, 0);
}

#[actix_web::test]
async fn test_disabled_login_ignores_password() {
    let ctx = create_context();
    let app = test::init_service(create_app(ctx.state.clone(), HttpSettings::default())).await;

    call_json!(
        app,
        test::TestRequest::post()
            .uri("/api/auth/signup")
            .set_json(signup_body("carol", "carol@example.com"))
    );

    let (status, body) = call_json!(
        app,
        test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(json!({ "username": "carol", "password": "wrong-password" }))
    );

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "ACCOUNT_DISABLED");
}

#[actix_web::test]
async fn test_refresh_with_unknown_token_is_not_found() {
    let ctx = create_context();
    let app = test::init_service(create_app(ctx.state.clone(), HttpSettings::default())).await;

    let (status, body) = call_json!(
        app,
        test::TestRequest::post()
            .uri("/api/auth/refresh-token")
            .set_json(json!({ "refresh_token": "never-issued" }))
    );

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NOT_FOUND");
}

#[actix_web::test]
async fn test_refresh_and_logout_require_a_value() {
    let ctx = create_context();
    let app = test::init_service(create_app(ctx.state.clone(), HttpSettings::default())).await;

    for uri in ["/api/auth/refresh-token", "/api/auth/logout"] {
        let (status, body) = call_json!(
            app,
            test::TestRequest::post()
                .uri(uri)
                .set_json(json!({ "refresh_token": "" }))
        );
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["fields"][0]["field"], "refresh_token");
    }
}

#[actix_web::test]
async fn test_health_and_unknown_route() {
    let ctx = create_context();
    let app = test::init_service(create_app(ctx.state.clone(), HttpSettings::default())).await;

    let (status, body) = call_json!(app, test::TestRequest::get().uri("/health"));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");

    let (status, body) = call_json!(app, test::TestRequest::get().uri("/api/posts"));
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NOT_FOUND");
}
