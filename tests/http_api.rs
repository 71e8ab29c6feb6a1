//! HTTP API integration tests.
//!
//! Wires the real routers and application services over the in-memory
//! repositories and drives them with `tower::ServiceExt::oneshot`, so the
//! full request path is exercised without PostgreSQL.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header::CONTENT_TYPE, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use cantine::adapters::http::{api_router, MealHandlers, UserHandlers};
use cantine::adapters::memory::{InMemoryMealRepository, InMemoryUserRepository};
use cantine::application::{MealRegistry, UserDirectory};

fn app() -> Router {
    let registry = Arc::new(MealRegistry::new(Arc::new(InMemoryMealRepository::new())));
    let directory = Arc::new(UserDirectory::new(Arc::new(InMemoryUserRepository::new())));
    api_router(MealHandlers::new(registry), UserHandlers::new(directory))
}

fn post(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn save_meal_body(email: &str, date: &str, meal_type: &str, state: &str) -> Value {
    json!({
        "userEmail": email,
        "date": date,
        "mealType": meal_type,
        "state": state,
    })
}

#[tokio::test]
async fn health_probe_responds_ok() {
    let response = app().oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["status"], "ok");
}

#[tokio::test]
async fn save_meal_acknowledges_with_id() {
    let response = app()
        .oneshot(post(
            "/api/save-meal",
            save_meal_body("a@x.com", "2024-01-01", "lunch", "present"),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Meal saved");
    assert!(body["id"].is_i64());
}

#[tokio::test]
async fn save_meal_with_missing_field_is_rejected() {
    let response = app()
        .oneshot(post(
            "/api/save-meal",
            json!({ "userEmail": "a@x.com", "date": "2024-01-01", "state": "present" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn resaving_a_triple_replaces_only_the_state() {
    let app = app();

    let first = app
        .clone()
        .oneshot(post(
            "/api/save-meal",
            save_meal_body("a@x.com", "2024-01-01", "lunch", "present"),
        ))
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::OK);

    let second = app
        .clone()
        .oneshot(post(
            "/api/save-meal",
            save_meal_body("a@x.com", "2024-01-01", "lunch", "absent"),
        ))
        .await
        .unwrap();
    assert_eq!(second.status(), StatusCode::OK);

    let response = app
        .oneshot(get("/api/get-meals?userEmail=a@x.com"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let meals = body_json(response).await;
    assert_eq!(
        meals,
        json!([{ "date": "2024-01-01", "mealType": "lunch", "state": "absent" }])
    );
}

#[tokio::test]
async fn get_meals_is_scoped_to_the_requested_user() {
    let app = app();

    for (email, state) in [("a@x.com", "present"), ("b@x.com", "absent")] {
        let response = app
            .clone()
            .oneshot(post(
                "/api/save-meal",
                save_meal_body(email, "2024-01-01", "lunch", state),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = app
        .oneshot(get("/api/get-meals?userEmail=b@x.com"))
        .await
        .unwrap();
    let meals = body_json(response).await;
    assert_eq!(meals.as_array().unwrap().len(), 1);
    assert_eq!(meals[0]["state"], "absent");
}

#[tokio::test]
async fn get_meals_without_matches_is_an_empty_array() {
    let response = app()
        .oneshot(get("/api/get-meals?userEmail=nobody@x.com"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}

#[tokio::test]
async fn get_all_meals_returns_one_row_per_triple() {
    let app = app();

    for state in ["present", "absent"] {
        app.clone()
            .oneshot(post(
                "/api/save-meal",
                save_meal_body("a@x.com", "2024-01-01", "lunch", state),
            ))
            .await
            .unwrap();
    }
    app.clone()
        .oneshot(post(
            "/api/save-meal",
            save_meal_body("b@x.com", "2024-01-02", "dinner", "present"),
        ))
        .await
        .unwrap();

    let response = app.oneshot(get("/api/get-all-meals")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let meals = body_json(response).await;
    let rows = meals.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert!(rows
        .iter()
        .any(|r| r["userEmail"] == "a@x.com" && r["state"] == "absent"));
}

#[tokio::test]
async fn create_user_returns_201_with_id() {
    let response = app()
        .oneshot(post(
            "/api/create-user",
            json!({ "email": "a@x.com", "firstname": "Alice", "lastname": "Martin" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    assert!(body_json(response).await["id"].is_i64());
}

#[tokio::test]
async fn create_user_without_lastname_is_rejected() {
    let response = app()
        .oneshot(post(
            "/api/create-user",
            json!({ "email": "a@x.com", "firstname": "Alice" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn duplicate_email_is_a_conflict_and_keeps_the_first_row() {
    let app = app();

    let first = app
        .clone()
        .oneshot(post(
            "/api/create-user",
            json!({ "email": "a@x.com", "firstname": "A", "lastname": "B" }),
        ))
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = app
        .clone()
        .oneshot(post(
            "/api/create-user",
            json!({ "email": "a@x.com", "firstname": "C", "lastname": "D" }),
        ))
        .await
        .unwrap();
    assert_eq!(second.status(), StatusCode::CONFLICT);

    let response = app.oneshot(get("/api/get-users")).await.unwrap();
    let users = body_json(response).await;
    let rows = users.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["firstname"], "A");
}

#[tokio::test]
async fn get_users_orders_by_lastname_then_firstname() {
    let app = app();

    for (email, firstname, lastname) in [
        ("c@x.com", "Claire", "Moreau"),
        ("a@x.com", "Bob", "Dupont"),
        ("b@x.com", "Anne", "Dupont"),
    ] {
        let response = app
            .clone()
            .oneshot(post(
                "/api/create-user",
                json!({ "email": email, "firstname": firstname, "lastname": lastname }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = app.oneshot(get("/api/get-users")).await.unwrap();
    let users = body_json(response).await;
    let names: Vec<(String, String)> = users
        .as_array()
        .unwrap()
        .iter()
        .map(|u| {
            (
                u["lastname"].as_str().unwrap().to_string(),
                u["firstname"].as_str().unwrap().to_string(),
            )
        })
        .collect();
    assert_eq!(
        names,
        vec![
            ("Dupont".to_string(), "Anne".to_string()),
            ("Dupont".to_string(), "Bob".to_string()),
            ("Moreau".to_string(), "Claire".to_string()),
        ]
    );
}

#[tokio::test]
async fn login_returns_the_full_user_row() {
    let app = app();

    app.clone()
        .oneshot(post(
            "/api/create-user",
            json!({
                "email": "a@x.com",
                "firstname": "Alice",
                "lastname": "Martin",
                "roomNumber": "12",
            }),
        ))
        .await
        .unwrap();

    let response = app
        .oneshot(post("/api/login", json!({ "email": "a@x.com" })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let user = body_json(response).await;
    assert_eq!(user["email"], "a@x.com");
    assert_eq!(user["firstname"], "Alice");
    assert_eq!(user["roomNumber"], "12");
}

#[tokio::test]
async fn login_with_unknown_email_is_404() {
    let response = app()
        .oneshot(post("/api/login", json!({ "email": "ghost@x.com" })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");
}
