//! Integration tests for onboarding and recommendations.

mod helpers;

use http::StatusCode;

#[tokio::test]
async fn test_onboarding_success() {
    let Some(app) = helpers::TestApp::new().await else {
        return;
    };

    let (_, cookie) = app.signup("Onboard Tester").await;

    let response = app
        .request(
            "POST",
            "/api/auth/onboarding",
            Some(serde_json::json!({
                "fullName": "Onboard Tester",
                "bio": "Ciao!",
                "nativeLanguage": "Italian",
                "learningLanguage": "Portuguese",
                "location": "Torino",
            })),
            Some(&cookie),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK, "{}", response.body);
    let user = &response.body["data"];
    assert_eq!(user["isOnboarded"], true);
    assert_eq!(user["bio"], "Ciao!");
    assert_eq!(user["nativeLanguage"], "Italian");
    assert_eq!(user["learningLanguage"], "Portuguese");
    assert_eq!(user["location"], "Torino");
}

#[tokio::test]
async fn test_onboarding_missing_bio_enumerated() {
    let Some(app) = helpers::TestApp::new().await else {
        return;
    };

    let (_, cookie) = app.signup("Missing Bio").await;

    let response = app
        .request(
            "POST",
            "/api/auth/onboarding",
            Some(serde_json::json!({
                "fullName": "Missing Bio",
                "nativeLanguage": "French",
                "learningLanguage": "German",
                "location": "Lyon",
            })),
            Some(&cookie),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body["details"]["missingFields"],
        serde_json::json!(["bio"])
    );
}

#[tokio::test]
async fn test_onboarding_requires_session() {
    let Some(app) = helpers::TestApp::new().await else {
        return;
    };

    let response = app
        .request(
            "POST",
            "/api/auth/onboarding",
            Some(serde_json::json!({
                "fullName": "Nobody",
                "bio": "x",
                "nativeLanguage": "x",
                "learningLanguage": "x",
                "location": "x",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_recommendations_list_onboarded_strangers_only() {
    let Some(app) = helpers::TestApp::new().await else {
        return;
    };

    let (viewer, viewer_cookie) = app.signup("Reco Viewer").await;
    let (onboarded, onboarded_cookie) = app.signup("Reco Onboarded").await;
    let (raw, _) = app.signup("Reco Raw").await;

    app.onboard(&onboarded_cookie, "Reco Onboarded").await;

    let response = app
        .request("GET", "/api/users", None, Some(&viewer_cookie))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let ids: Vec<&str> = response.body["data"]
        .as_array()
        .expect("array")
        .iter()
        .filter_map(|u| u["id"].as_str())
        .collect();

    // The onboarded stranger shows up; the non-onboarded one and the
    // viewer themselves do not.
    assert!(ids.contains(&onboarded["id"].as_str().expect("id")));
    assert!(!ids.contains(&raw["id"].as_str().expect("id")));
    assert!(!ids.contains(&viewer["id"].as_str().expect("id")));
}
