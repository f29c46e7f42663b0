// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! # CRUD Integration Tests
//!
//! Drives the public collection endpoints end to end:
//!
//! - `test_activities_*`: activity collection round trips
//! - `test_volunteers_*`: registration and removal
//! - `test_health_*`: banner and health endpoints

use axum::http::StatusCode;
use tower::ServiceExt;

use roots_store::{DocumentStore, VOLUNTEERS};
use roots_tests::common::{body_json, body_text, delete, get, post_json, TestService};

// =============================================================================
// Activities
// =============================================================================

#[tokio::test]
async fn test_activities_list_is_a_bare_array() {
    let service = TestService::new();

    let response = service
        .router
        .oneshot(get("/activities", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert!(body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_activities_insert_round_trip() {
    let service = TestService::new();

    let response = service
        .router
        .clone()
        .oneshot(post_json(
            "/add-activities",
            serde_json::json!({
                "title": "Community garden",
                "location": "Riverside park",
                "spots": 20,
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let ack = body_json(response).await;
    assert_eq!(ack["acknowledged"], true);
    assert!(ack["inserted_id"].as_str().is_some());

    // The stored document comes back with its id rendered as hex.
    let response = service
        .router
        .oneshot(get("/activities", None))
        .await
        .unwrap();
    let body = body_json(response).await;
    let activities = body.as_array().unwrap();
    assert_eq!(activities.len(), 1);
    assert_eq!(activities[0]["title"], "Community garden");
    assert_eq!(activities[0]["_id"], ack["inserted_id"]);
}

#[tokio::test]
async fn test_activities_non_object_payload_is_400() {
    let service = TestService::new();

    let response = service
        .router
        .oneshot(post_json("/add-activities", serde_json::json!([1, 2, 3])))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["title"], "Bad Request");
}

// =============================================================================
// Volunteers
// =============================================================================

#[tokio::test]
async fn test_volunteers_registration_and_removal() {
    let service = TestService::new();

    let response = service
        .router
        .clone()
        .oneshot(post_json(
            "/volunteer-registration",
            serde_json::json!({
                "email": "alice@example.com",
                "activity": "Beach cleanup",
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let ack = body_json(response).await;
    let id = ack["inserted_id"].as_str().unwrap().to_string();

    // Removal by the id from the acknowledgement.
    let response = service
        .router
        .clone()
        .oneshot(delete(&format!("/remove-volunteer/{}", id)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let ack = body_json(response).await;
    assert_eq!(ack["deleted_count"], 1);

    assert!(service.store.is_empty(VOLUNTEERS));
}

#[tokio::test]
async fn test_volunteers_removal_of_unknown_id_deletes_nothing() {
    let service = TestService::new();

    let response = service
        .router
        .oneshot(delete("/remove-volunteer/65f0aa11bb22cc33dd44ee55"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let ack = body_json(response).await;
    assert_eq!(ack["deleted_count"], 0);
}

#[tokio::test]
async fn test_volunteers_removal_with_bad_id_is_400() {
    let service = TestService::new();

    let response = service
        .router
        .oneshot(delete("/remove-volunteer/not-a-hex-id"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["title"], "Bad Request");
}

#[tokio::test]
async fn test_volunteers_registration_is_not_filtered_by_gate() {
    // The write routes predate the gate and stay public.
    let service = TestService::new();

    let response = service
        .router
        .oneshot(post_json(
            "/volunteer-registration",
            serde_json::json!({ "email": "carol@example.com" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        service
            .store
            .find(VOLUNTEERS, bson::doc! {})
            .await
            .unwrap()
            .len(),
        1
    );
}

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn test_health_banner() {
    let service = TestService::new();

    let response = service.router.oneshot(get("/", None)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "Radiant Roots Server is Running");
}

#[tokio::test]
async fn test_health_endpoints() {
    let service = TestService::new();

    let response = service
        .router
        .clone()
        .oneshot(get("/health", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["status"], "ok");

    let response = service.router.oneshot(get("/ready", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["ready"], true);
}
