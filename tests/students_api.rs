//! End-to-end tests for the student registry router.

mod common;

use axum::http::{Method, StatusCode};
use common::{get, send};
use crud_demo::{students_app, ServerConfig, StudentState};
use serde_json::json;

fn app() -> axum::Router {
    students_app(StudentState::seeded(), &ServerConfig::default())
}

#[tokio::test]
async fn lists_seed_students_in_order() {
    let app = app();
    let res = get(&app, "/students").await;
    assert_eq!(res.status, StatusCode::OK);
    let names: Vec<String> = res.json().as_array().unwrap().iter().map(|s| s["name"].as_str().unwrap().to_string()).collect();
    assert_eq!(names, vec!["Tony", "Kalle", "Maija"]);
}

#[tokio::test]
async fn filters_by_campus_and_credit_points() {
    let app = app();
    let res = get(&app, "/students?campus=kauppi").await;
    let body = res.json();
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["campus"], "Kauppi");

    let res = get(&app, "/students?creditPointsMin=100").await;
    let ids: Vec<u64> = res.json().as_array().unwrap().iter().map(|s| s["id"].as_u64().unwrap()).collect();
    assert_eq!(ids, vec![1, 3]);

    // Invalid thresholds are ignored rather than rejected.
    let res = get(&app, "/students?creditPointsMin=many").await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.json().as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn read_unknown_student_is_404() {
    let app = app();
    let res = get(&app, "/students/99").await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
    assert_eq!(res.json()["error"]["code"], "not_found");

    let res = get(&app, "/students/abc").await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn create_assigns_next_id_and_defaults() {
    let app = app();
    let res = send(
        &app,
        Method::POST,
        "/students",
        Some(json!({"id": 50, "name": "Aino", "age": 19, "campus": "Center"})),
    )
    .await;
    assert_eq!(res.status, StatusCode::CREATED);
    let created = res.json();
    assert_eq!(created["id"], 4);
    assert_eq!(created["creditPoints"], 0);

    let fetched = get(&app, "/students/4").await.json();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn invalid_create_is_400_and_not_stored() {
    let app = app();
    let res = send(
        &app,
        Method::POST,
        "/students",
        Some(json!({"name": "", "age": 5, "creditPoints": 0, "campus": "X"})),
    )
    .await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.json()["error"]["message"], "Name is required");
    assert_eq!(get(&app, "/students").await.json().as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn patch_merges_and_rejects_negative_age() {
    let app = app();
    let res = send(&app, Method::PATCH, "/students/2", Some(json!({"creditPoints": 60}))).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.json()["creditPoints"], 60);
    assert_eq!(res.json()["name"], "Kalle");

    let res = send(&app, Method::PATCH, "/students/2", Some(json!({"age": -1}))).await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.json()["error"]["message"], "Invalid age");
    assert_eq!(get(&app, "/students/2").await.json()["age"], 20);

    let res = send(&app, Method::PUT, "/students/3", Some(json!({"campus": "Kauppi"}))).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.json()["campus"], "Kauppi");

    let res = send(&app, Method::PATCH, "/students/42", Some(json!({"age": 30}))).await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn patch_with_null_fields_is_rejected_and_not_stored() {
    let app = app();
    let before = get(&app, "/students/1").await.json();

    let res = send(&app, Method::PATCH, "/students/1", Some(json!({"name": null}))).await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.json()["error"]["message"], "Name is required");

    let res = send(&app, Method::PATCH, "/students/1", Some(json!({"age": null}))).await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.json()["error"]["message"], "Invalid age");

    assert_eq!(get(&app, "/students/1").await.json(), before);
}

#[tokio::test]
async fn non_integer_age_is_invalid_age() {
    let app = app();
    for age in [json!(2.5), json!("old")] {
        let res = send(&app, Method::PATCH, "/students/2", Some(json!({"age": age}))).await;
        assert_eq!(res.status, StatusCode::BAD_REQUEST);
        assert_eq!(res.json()["error"]["message"], "Invalid age");
    }
    let res = send(
        &app,
        Method::POST,
        "/students",
        Some(json!({"name": "Aino", "age": 19.5, "campus": "Center"})),
    )
    .await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.json()["error"]["message"], "Invalid age");
    assert_eq!(get(&app, "/students/2").await.json()["age"], 20);
}

#[tokio::test]
async fn delete_returns_204_then_404() {
    let app = app();
    let res = send(&app, Method::DELETE, "/students/1", None).await;
    assert_eq!(res.status, StatusCode::NO_CONTENT);
    assert!(res.body.is_empty());
    assert_eq!(get(&app, "/students/1").await.status, StatusCode::NOT_FOUND);
    assert_eq!(send(&app, Method::DELETE, "/students/1", None).await.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn index_lists_students_as_html() {
    let app = app();
    let res = get(&app, "/").await;
    assert_eq!(res.status, StatusCode::OK);
    assert!(res.body.contains("<li>Name: Tony, Age: 24, Credit points: 100, Campus: Kauppi</li>"));
}

#[tokio::test]
async fn common_routes_and_fallback() {
    let app = app();
    let health = get(&app, "/health").await.json();
    assert_eq!(health["status"], "ok");
    assert_eq!(health["kind"], "Student");
    assert_eq!(get(&app, "/ready").await.json()["records"], 3);
    assert_eq!(get(&app, "/info").await.status, StatusCode::NOT_FOUND);
    assert_eq!(get(&app, "/version").await.json()["name"], "crud-demo");

    let docs = get(&app, "/api-docs/openapi.json").await.json();
    assert!(docs["paths"]["/students/{id}"].is_object());

    let res = get(&app, "/nowhere").await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
    assert_eq!(res.body, "Oops! Not found");
}
