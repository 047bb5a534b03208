//! Integration tests for signup, login, the session gate, and chat tokens.

mod helpers;

use http::StatusCode;

#[tokio::test]
async fn test_signup_success() {
    let Some(app) = helpers::TestApp::new().await else {
        return;
    };

    let email = helpers::unique_email("signup");
    let response = app
        .request(
            "POST",
            "/api/auth/signup",
            Some(serde_json::json!({
                "email": email,
                "password": "password123",
                "fullName": "Signup Tester",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED, "{}", response.body);
    assert!(response.cookie.is_some());

    let user = &response.body["data"];
    assert_eq!(user["email"], email.as_str());
    assert_eq!(user["fullName"], "Signup Tester");
    assert_eq!(user["isOnboarded"], false);
    assert!(
        user["avatarUrl"]
            .as_str()
            .is_some_and(|url| url.ends_with(".png")),
        "placeholder avatar assigned"
    );
    assert!(user.get("passwordHash").is_none());
    assert!(user.get("password_hash").is_none());
}

#[tokio::test]
async fn test_signup_duplicate_email_conflict() {
    let Some(app) = helpers::TestApp::new().await else {
        return;
    };

    let email = helpers::unique_email("dup");
    let body = serde_json::json!({
        "email": email,
        "password": "password123",
        "fullName": "First",
    });

    let first = app
        .request("POST", "/api/auth/signup", Some(body.clone()), None)
        .await;
    assert_eq!(first.status, StatusCode::CREATED);

    let second = app.request("POST", "/api/auth/signup", Some(body), None).await;
    assert_eq!(second.status, StatusCode::CONFLICT);
    assert_eq!(second.body["error"], "CONFLICT");
}

#[tokio::test]
async fn test_signup_rejects_bad_input() {
    let Some(app) = helpers::TestApp::new().await else {
        return;
    };

    // Missing fields
    let response = app
        .request(
            "POST",
            "/api/auth/signup",
            Some(serde_json::json!({ "email": helpers::unique_email("partial") })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    // Short password
    let response = app
        .request(
            "POST",
            "/api/auth/signup",
            Some(serde_json::json!({
                "email": helpers::unique_email("short"),
                "password": "12345",
                "fullName": "Short Password",
            })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    // Malformed email
    let response = app
        .request(
            "POST",
            "/api/auth/signup",
            Some(serde_json::json!({
                "email": "not-an-email",
                "password": "password123",
                "fullName": "Bad Email",
            })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_login_roundtrip() {
    let Some(app) = helpers::TestApp::new().await else {
        return;
    };

    let email = helpers::unique_email("login");
    let signup = app
        .request(
            "POST",
            "/api/auth/signup",
            Some(serde_json::json!({
                "email": email,
                "password": "password123",
                "fullName": "Login Tester",
            })),
            None,
        )
        .await;
    assert_eq!(signup.status, StatusCode::CREATED);
    let user_id = signup.body["data"]["id"].clone();

    let login = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "email": email,
                "password": "password123",
            })),
            None,
        )
        .await;

    assert_eq!(login.status, StatusCode::OK, "{}", login.body);
    assert!(login.cookie.is_some());
    assert_eq!(login.body["data"]["id"], user_id);
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let Some(app) = helpers::TestApp::new().await else {
        return;
    };

    let email = helpers::unique_email("wrongpw");
    app.request(
        "POST",
        "/api/auth/signup",
        Some(serde_json::json!({
            "email": email,
            "password": "password123",
            "fullName": "Wrong Password",
        })),
        None,
    )
    .await;

    let wrong_password = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({ "email": email, "password": "nope-nope" })),
            None,
        )
        .await;
    assert_eq!(wrong_password.status, StatusCode::UNAUTHORIZED);

    let unknown_email = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "email": helpers::unique_email("ghost"),
                "password": "password123",
            })),
            None,
        )
        .await;
    assert_eq!(unknown_email.status, StatusCode::UNAUTHORIZED);

    // Same generic body either way: no email-existence oracle.
    assert_eq!(wrong_password.body["message"], unknown_email.body["message"]);
}

#[tokio::test]
async fn test_me_authenticated() {
    let Some(app) = helpers::TestApp::new().await else {
        return;
    };

    let (user, cookie) = app.signup("Me Tester").await;

    let response = app.request("GET", "/api/auth/me", None, Some(&cookie)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["id"], user["id"]);
}

#[tokio::test]
async fn test_session_gate_rejections() {
    let Some(app) = helpers::TestApp::new().await else {
        return;
    };

    // Absent cookie
    let response = app.request("GET", "/api/auth/me", None, None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    // Tampered token
    let (_, cookie) = app.signup("Tamper Tester").await;
    let tampered = format!("{cookie}x");
    let response = app
        .request("GET", "/api/auth/me", None, Some(&tampered))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    // Token for a deleted user
    let (user, cookie) = app.signup("Deleted Tester").await;
    sqlx::query("DELETE FROM users WHERE id = $1::uuid")
        .bind(user["id"].as_str().expect("user id"))
        .execute(&app.db_pool)
        .await
        .expect("delete user");
    let response = app.request("GET", "/api/auth/me", None, Some(&cookie)).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_logout_clears_cookie() {
    let Some(app) = helpers::TestApp::new().await else {
        return;
    };

    let response = app.request("POST", "/api/auth/logout", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    // Removal cookie: same name, emptied value.
    assert_eq!(response.cookie.as_deref(), Some(""));
}

#[tokio::test]
async fn test_chat_token_issued_for_session() {
    let Some(app) = helpers::TestApp::new().await else {
        return;
    };

    let (_, cookie) = app.signup("Chat Tester").await;

    let response = app
        .request("GET", "/api/chat/token", None, Some(&cookie))
        .await;
    assert_eq!(response.status, StatusCode::OK, "{}", response.body);
    assert!(
        response.body["data"]["token"]
            .as_str()
            .is_some_and(|t| !t.is_empty())
    );

    let unauthenticated = app.request("GET", "/api/chat/token", None, None).await;
    assert_eq!(unauthenticated.status, StatusCode::UNAUTHORIZED);
}
