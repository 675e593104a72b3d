//! Member/admin message thread and announcement targeting over HTTP.

mod common;

use axum::http::StatusCode;
use chrono::{Duration, Utc};
use serde_json::json;

use crate::common::{id_of, member_session, TestHarness};

#[tokio::test]
async fn test_message_thread() {
    let harness = TestHarness::with_admin().await.unwrap();
    let admin = harness.admin_token().await;
    let (member_id, member) = member_session(&harness, "a@x.com", "0712345678").await;
    let (_, other) = member_session(&harness, "c@x.com", "0787654321").await;

    let (status, message) = harness
        .post("/api/messages", Some(&member), json!({ "content": "Hello admin" }))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(message["senderId"], member_id);
    assert_eq!(message["senderEmail"], "a@x.com");
    assert_eq!(message["senderPhone"], "0712****78");
    assert_eq!(message["read"], false);
    assert!(message.get("reply").is_none());

    // Members only see their own thread
    let (_, own) = harness.get("/api/messages", Some(&member)).await;
    assert_eq!(own.as_array().unwrap().len(), 1);
    let (_, others) = harness.get("/api/messages", Some(&other)).await;
    assert!(others.as_array().unwrap().is_empty());

    let id = id_of(&message);
    let (status, read) = harness
        .post(&format!("/api/messages/{}/read", id), Some(&admin), json!({}))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(read["read"], true);

    let (status, _) = harness
        .post(
            &format!("/api/messages/{}/reply", id),
            Some(&admin),
            json!({ "reply": "   " }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, replied) = harness
        .post(
            &format!("/api/messages/{}/reply", id),
            Some(&admin),
            json!({ "reply": "Hi Jane" }),
        )
        .await;
    assert_eq!(replied["reply"], "Hi Jane");
    assert!(replied["repliedAt"].is_string());

    let (_, own) = harness.get("/api/messages", Some(&member)).await;
    assert_eq!(own[0]["reply"], "Hi Jane");
}

#[tokio::test]
async fn test_reply_to_missing_message() {
    let harness = TestHarness::with_admin().await.unwrap();
    let admin = harness.admin_token().await;

    let (status, body) = harness
        .post(
            &format!("/api/messages/{}/reply", uuid::Uuid::now_v7()),
            Some(&admin),
            json!({ "reply": "Hi" }),
        )
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Message not found");
}

#[tokio::test]
async fn test_unparseable_ids_are_not_found() {
    let harness = TestHarness::with_admin().await.unwrap();
    let admin = harness.admin_token().await;

    let (status, body) = harness
        .post("/api/messages/abc/reply", Some(&admin), json!({ "reply": "Hi" }))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "message": "Message not found" }));

    let (status, body) = harness.post("/api/messages/abc/read", Some(&admin), json!({})).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Message not found");

    let (status, _) = harness.delete("/api/messages/abc", Some(&admin)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = harness.delete("/api/announcements/abc", Some(&admin)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "message": "Announcement not found" }));
}

#[tokio::test]
async fn test_reply_body_missing_field() {
    let harness = TestHarness::with_admin().await.unwrap();
    let admin = harness.admin_token().await;

    let (status, body) = harness
        .post(
            &format!("/api/messages/{}/reply", uuid::Uuid::now_v7()),
            Some(&admin),
            json!({ "text": "Hi" }),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn test_announcement_targeting() {
    let harness = TestHarness::with_admin().await.unwrap();
    let admin = harness.admin_token().await;
    let (u1, u1_token) = member_session(&harness, "a@x.com", "0712345678").await;
    let (_, u2_token) = member_session(&harness, "c@x.com", "0787654321").await;

    harness
        .post("/api/announcements", Some(&admin), json!({ "content": "For everyone" }))
        .await;
    harness
        .post(
            "/api/announcements",
            Some(&admin),
            json!({
                "content": "Only for u1",
                "targetAudience": "specific",
                "targetMembers": [u1],
            }),
        )
        .await;
    harness
        .post(
            "/api/announcements",
            Some(&admin),
            json!({
                "content": "Already over",
                "expiryDate": (Utc::now() - Duration::hours(1)).to_rfc3339(),
            }),
        )
        .await;
    harness
        .post(
            "/api/announcements",
            Some(&admin),
            json!({
                "content": "Still running",
                "expiryDate": (Utc::now() + Duration::days(1)).to_rfc3339(),
            }),
        )
        .await;

    let contents = |body: serde_json::Value| -> Vec<String> {
        body.as_array()
            .unwrap()
            .iter()
            .map(|a| a["content"].as_str().unwrap().to_string())
            .collect()
    };

    let (_, seen_by_u1) = harness.get("/api/announcements", Some(&u1_token)).await;
    assert_eq!(
        contents(seen_by_u1),
        vec!["For everyone", "Only for u1", "Still running"]
    );

    let (_, seen_by_u2) = harness.get("/api/announcements", Some(&u2_token)).await;
    assert_eq!(contents(seen_by_u2), vec!["For everyone", "Still running"]);

    // The admin view includes expired announcements
    let (_, all) = harness.get("/api/announcements", Some(&admin)).await;
    assert_eq!(all.as_array().unwrap().len(), 4);

    let (status, _) = harness.get("/api/announcements", None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_empty_announcement_rejected() {
    let harness = TestHarness::with_admin().await.unwrap();
    let admin = harness.admin_token().await;

    let (status, _) = harness
        .post("/api/announcements", Some(&admin), json!({ "content": "  " }))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}
