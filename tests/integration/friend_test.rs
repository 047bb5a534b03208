//! Integration tests for the friend request/accept state machine.

mod helpers;

use http::StatusCode;
use serde_json::Value;

async fn send_request(
    app: &helpers::TestApp,
    cookie: &str,
    target_id: &str,
) -> helpers::TestResponse {
    app.request(
        "POST",
        &format!("/api/users/friend-request/{target_id}"),
        None,
        Some(cookie),
    )
    .await
}

fn ids_of(list: &Value) -> Vec<&str> {
    list.as_array()
        .expect("array")
        .iter()
        .filter_map(|item| item["id"].as_str())
        .collect()
}

#[tokio::test]
async fn test_full_friend_flow() {
    let Some(app) = helpers::TestApp::new().await else {
        return;
    };

    let (alice, alice_cookie) = app.signup("Flow Alice").await;
    let (bob, bob_cookie) = app.signup("Flow Bob").await;
    app.onboard(&alice_cookie, "Flow Alice").await;
    app.onboard(&bob_cookie, "Flow Bob").await;

    let alice_id = alice["id"].as_str().expect("id");
    let bob_id = bob["id"].as_str().expect("id");

    // Alice sends Bob a request.
    let sent = send_request(&app, &alice_cookie, bob_id).await;
    assert_eq!(sent.status, StatusCode::CREATED, "{}", sent.body);
    assert_eq!(sent.body["data"]["status"], "pending");
    let request_id = sent.body["data"]["id"].as_str().expect("request id");

    // Bob's incoming list shows it, with Alice's summary attached.
    let incoming = app
        .request("GET", "/api/users/friend-requests", None, Some(&bob_cookie))
        .await;
    assert_eq!(incoming.status, StatusCode::OK);
    let found = incoming.body["data"]["incoming"]
        .as_array()
        .expect("incoming array")
        .iter()
        .find(|r| r["id"] == request_id)
        .expect("request visible to recipient");
    assert_eq!(found["sender"]["id"], alice_id);
    assert_eq!(found["sender"]["fullName"], "Flow Alice");

    // Alice's outgoing list shows it as pending.
    let outgoing = app
        .request(
            "GET",
            "/api/users/outgoing-friend-requests",
            None,
            Some(&alice_cookie),
        )
        .await;
    assert!(
        outgoing.body["data"]
            .as_array()
            .expect("outgoing array")
            .iter()
            .any(|r| r["id"] == request_id)
    );

    // Bob accepts.
    let accepted = app
        .request(
            "PUT",
            &format!("/api/users/friend-request/{request_id}/accept"),
            None,
            Some(&bob_cookie),
        )
        .await;
    assert_eq!(accepted.status, StatusCode::OK, "{}", accepted.body);
    assert_eq!(accepted.body["data"]["status"], "accepted");

    // Both friend-sets now contain each other.
    let alice_friends = app
        .request("GET", "/api/users/friends", None, Some(&alice_cookie))
        .await;
    let bob_friends = app
        .request("GET", "/api/users/friends", None, Some(&bob_cookie))
        .await;
    assert!(ids_of(&alice_friends.body["data"]).contains(&bob_id));
    assert!(ids_of(&bob_friends.body["data"]).contains(&alice_id));

    // The accepted request left Alice's pending outgoing list.
    let outgoing = app
        .request(
            "GET",
            "/api/users/outgoing-friend-requests",
            None,
            Some(&alice_cookie),
        )
        .await;
    assert!(
        !outgoing.body["data"]
            .as_array()
            .expect("outgoing array")
            .iter()
            .any(|r| r["id"] == request_id)
    );

    // Friends no longer appear in each other's recommendations.
    let recommendations = app
        .request("GET", "/api/users", None, Some(&alice_cookie))
        .await;
    assert!(!ids_of(&recommendations.body["data"]).contains(&bob_id));
}

#[tokio::test]
async fn test_send_request_to_self_rejected() {
    let Some(app) = helpers::TestApp::new().await else {
        return;
    };

    let (user, cookie) = app.signup("Self Sender").await;
    let response = send_request(&app, &cookie, user["id"].as_str().expect("id")).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_send_request_unknown_target() {
    let Some(app) = helpers::TestApp::new().await else {
        return;
    };

    let (_, cookie) = app.signup("Ghost Sender").await;
    let response = send_request(&app, &cookie, &uuid::Uuid::new_v4().to_string()).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_duplicate_request_conflicts_in_both_directions() {
    let Some(app) = helpers::TestApp::new().await else {
        return;
    };

    let (carol, carol_cookie) = app.signup("Dup Carol").await;
    let (dave, dave_cookie) = app.signup("Dup Dave").await;
    let carol_id = carol["id"].as_str().expect("id");
    let dave_id = dave["id"].as_str().expect("id");

    let first = send_request(&app, &carol_cookie, dave_id).await;
    assert_eq!(first.status, StatusCode::CREATED);

    // Same direction.
    let repeat = send_request(&app, &carol_cookie, dave_id).await;
    assert_eq!(repeat.status, StatusCode::CONFLICT);

    // Opposite direction: the unordered pair is the key.
    let reverse = send_request(&app, &dave_cookie, carol_id).await;
    assert_eq!(reverse.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_request_between_friends_conflicts() {
    let Some(app) = helpers::TestApp::new().await else {
        return;
    };

    let (erin, erin_cookie) = app.signup("Friend Erin").await;
    let (frank, frank_cookie) = app.signup("Friend Frank").await;
    let erin_id = erin["id"].as_str().expect("id");
    let frank_id = frank["id"].as_str().expect("id");

    let sent = send_request(&app, &erin_cookie, frank_id).await;
    let request_id = sent.body["data"]["id"].as_str().expect("id");
    let accepted = app
        .request(
            "PUT",
            &format!("/api/users/friend-request/{request_id}/accept"),
            None,
            Some(&frank_cookie),
        )
        .await;
    assert_eq!(accepted.status, StatusCode::OK);

    let again = send_request(&app, &erin_cookie, frank_id).await;
    assert_eq!(again.status, StatusCode::CONFLICT);
    let reverse = send_request(&app, &frank_cookie, erin_id).await;
    assert_eq!(reverse.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_only_recipient_accepts() {
    let Some(app) = helpers::TestApp::new().await else {
        return;
    };

    let (_, grace_cookie) = app.signup("Acl Grace").await;
    let (heidi, _) = app.signup("Acl Heidi").await;

    let sent = send_request(&app, &grace_cookie, heidi["id"].as_str().expect("id")).await;
    let request_id = sent.body["data"]["id"].as_str().expect("id");

    // The sender cannot accept their own outgoing request.
    let response = app
        .request(
            "PUT",
            &format!("/api/users/friend-request/{request_id}/accept"),
            None,
            Some(&grace_cookie),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_accept_unknown_request() {
    let Some(app) = helpers::TestApp::new().await else {
        return;
    };

    let (_, cookie) = app.signup("Accept Nobody").await;
    let response = app
        .request(
            "PUT",
            &format!("/api/users/friend-request/{}/accept", uuid::Uuid::new_v4()),
            None,
            Some(&cookie),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_double_accept_is_conflict_not_duplicate() {
    let Some(app) = helpers::TestApp::new().await else {
        return;
    };

    let (ivan, ivan_cookie) = app.signup("Twice Ivan").await;
    let (judy, judy_cookie) = app.signup("Twice Judy").await;
    let ivan_id = ivan["id"].as_str().expect("id");
    let judy_id = judy["id"].as_str().expect("id");

    let sent = send_request(&app, &ivan_cookie, judy_id).await;
    let request_id = sent.body["data"]["id"].as_str().expect("id");
    let accept_path = format!("/api/users/friend-request/{request_id}/accept");

    let first = app
        .request("PUT", &accept_path, None, Some(&judy_cookie))
        .await;
    assert_eq!(first.status, StatusCode::OK);

    let second = app
        .request("PUT", &accept_path, None, Some(&judy_cookie))
        .await;
    assert_eq!(second.status, StatusCode::CONFLICT);

    // The replay did not duplicate or desynchronize the friend-sets.
    let ivan_friends = app
        .request("GET", "/api/users/friends", None, Some(&ivan_cookie))
        .await;
    let judy_friends = app
        .request("GET", "/api/users/friends", None, Some(&judy_cookie))
        .await;

    let ivan_list = ids_of(&ivan_friends.body["data"]);
    let judy_list = ids_of(&judy_friends.body["data"]);
    assert_eq!(ivan_list.iter().filter(|id| **id == judy_id).count(), 1);
    assert_eq!(judy_list.iter().filter(|id| **id == ivan_id).count(), 1);
}
