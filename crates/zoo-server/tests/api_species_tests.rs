//! Integration tests for species API endpoints

use axum::http::StatusCode;
use serde_json::json;

mod helpers;
use helpers::{assert_error, json_body, TestApp, NIL_ID, VALID_ID};

#[tokio::test]
async fn test_create_then_get_species() {
    let app = TestApp::new();
    let category = app.create("/category", r#"{"category_name":"Mammal"}"#).await;

    let body = json!({
        "species_name": "Wolf",
        "category": category,
        "image": "wolf.png",
        "location": { "type": "Point", "coordinates": [10, 20.5] },
    });
    let id = app.create("/species", &body.to_string()).await;

    let response = app.get(&format!("/species/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        json_body(response).await,
        json!({
            "_id": id,
            "species_name": "Wolf",
            "category": category,
            "image": "wolf.png",
            "location": { "type": "Point", "coordinates": [10.0, 20.5] },
        })
    );
}

#[tokio::test]
async fn test_species_location_is_optional() {
    let app = TestApp::new();

    let id = app.create("/species", r#"{"species_name":"Eagle"}"#).await;

    let stored = json_body(app.get(&format!("/species/{id}")).await).await;
    assert_eq!(stored["category"], NIL_ID);
    assert_eq!(stored["image"], "");
    assert_eq!(stored["location"], json!({ "type": "", "coordinates": [] }));
}

#[tokio::test]
async fn test_invalid_category_reference() {
    let app = TestApp::new();

    let response = app.post("/species", r#"{"species_name":"Wolf","category":"xyz"}"#).await;

    assert_error(response, StatusCode::BAD_REQUEST, "Invalid category ID").await;
    assert!(app.species.is_empty().await);
}

#[tokio::test]
async fn test_list_species() {
    let app = TestApp::new();
    app.create("/species", r#"{"species_name":"Wolf"}"#).await;
    app.create("/species", r#"{"species_name":"Fox"}"#).await;

    let response = app.get("/species").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_update_keeps_unsubmitted_fields() {
    let app = TestApp::new();
    let id = app
        .create("/species", r#"{"species_name":"Wolf","image":"wolf.png"}"#)
        .await;

    let response = app
        .put(&format!("/species/{id}"), &format!(r#"{{"category":"{VALID_ID}"}}"#))
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, json!({ "category": VALID_ID }));

    let stored = json_body(app.get(&format!("/species/{id}")).await).await;
    assert_eq!(stored["species_name"], "Wolf");
    assert_eq!(stored["image"], "wolf.png");
    assert_eq!(stored["category"], VALID_ID);
}

#[tokio::test]
async fn test_update_invalid_id_makes_no_storage_call() {
    let app = TestApp::new();

    let response = app.put("/species/bad-id", r#"{"species_name":"Wolf"}"#).await;

    assert_error(response, StatusCode::BAD_REQUEST, "Invalid ID").await;
    assert_eq!(app.species.operations(), 0);
}

#[tokio::test]
async fn test_update_invalid_id_checked_before_body() {
    let app = TestApp::new();

    let response = app.put("/species/bad-id", "not json").await;

    assert_error(response, StatusCode::BAD_REQUEST, "Invalid ID").await;
}

#[tokio::test]
async fn test_update_invalid_category_reference() {
    let app = TestApp::new();
    let id = app.create("/species", r#"{"species_name":"Wolf"}"#).await;

    let response = app.put(&format!("/species/{id}"), r#"{"category":"123"}"#).await;

    assert_error(response, StatusCode::BAD_REQUEST, "Invalid category ID").await;
}
