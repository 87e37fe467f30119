//! Integration tests for the analytics pipeline
//!
//! End-to-end flow: store a profile and a lab analysis over HTTP, then
//! request the composite score and ranked recommendations.

mod common;

use axum::http::StatusCode;
use uuid::Uuid;

#[tokio::test]
#[ignore = "requires database"]
async fn test_score_requires_profile() {
    let app = common::TestApp::new().await;
    app.cleanup().await;

    let user_id = Uuid::new_v4();
    let (status, _) = app
        .get(&format!("/api/v1/analytics/{}/score", user_id))
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_healthy_profile_scores_low_risk() {
    let app = common::TestApp::new().await;
    app.cleanup().await;

    let user_id = Uuid::new_v4();
    let (status, _) = app
        .put(
            &format!("/api/v1/profile/{}", user_id),
            r#"{
                "age": 30,
                "smoking": "never",
                "physical_activity": "active",
                "sleep_hours": 8.0,
                "stress_level": 3,
                "alcohol": "none"
            }"#,
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = app
        .get(&format!("/api/v1/analytics/{}/score", user_id))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("\"total_score\":100"));
    assert!(body.contains("низкий"));
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_full_pipeline_with_labs() {
    let app = common::TestApp::new().await;
    app.cleanup().await;

    let user_id = Uuid::new_v4();
    let (status, _) = app
        .put(
            &format!("/api/v1/profile/{}", user_id),
            r#"{
                "age": 60,
                "smoking": "regular",
                "physical_activity": "sedentary",
                "sleep_hours": 5.0,
                "stress_level": 9,
                "alcohol": "heavy",
                "medical_conditions": ["диабет", "гипертония"],
                "family_history": ["онкология"]
            }"#,
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = app
        .post(
            &format!("/api/v1/labs/{}", user_id),
            r#"{
                "markers": [
                    {"name": "Глюкоза", "value": "8,4", "unit": "ммоль/л"},
                    {"name": "СОЭ", "value": "28", "unit": "мм/ч"},
                    {"name": "Гомоцистеин", "value": "не определено"}
                ]
            }"#,
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = app
        .get(&format!("/api/v1/analytics/{}/score", user_id))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("\"total_score\":20"));
    assert!(body.contains("критический"));

    let (status, body) = app
        .get(&format!("/api/v1/analytics/{}/recommendations?limit=3", user_id))
        .await;

    assert_eq!(status, StatusCode::OK);
    // Limit trims the ranked list
    assert_eq!(body.matches("\"action\"").count(), 3);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_marker_trend_endpoint() {
    let app = common::TestApp::new().await;
    app.cleanup().await;

    let user_id = Uuid::new_v4();
    app.put(&format!("/api/v1/profile/{}", user_id), r#"{"age": 40}"#)
        .await;

    app.post(
        &format!("/api/v1/labs/{}", user_id),
        r#"{
            "performed_at": "2025-05-01T10:00:00Z",
            "markers": [{"name": "Глюкоза", "value": "7.0"}]
        }"#,
    )
    .await;
    app.post(
        &format!("/api/v1/labs/{}", user_id),
        r#"{
            "performed_at": "2025-06-01T10:00:00Z",
            "markers": [{"name": "Глюкоза", "value": "6.0"}]
        }"#,
    )
    .await;

    let (status, body) = app
        .get(&format!("/api/v1/labs/{}/markers/glucose/trend", user_id))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("\"improving\""));

    // Markers outside the weight table are not tracked
    let (status, _) = app
        .get(&format!("/api/v1/labs/{}/markers/unknown-marker/trend", user_id))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_invalid_profile_rejected() {
    let app = common::TestApp::new().await;
    app.cleanup().await;

    let user_id = Uuid::new_v4();
    let (status, body) = app
        .put(
            &format!("/api/v1/profile/{}", user_id),
            r#"{"age": 300}"#,
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("VALIDATION_ERROR"));
}
