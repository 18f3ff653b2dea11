mod support;

use axum::http::{header, Method, StatusCode};
use serde_json::json;
use support::{empty, failing_app, json, send, test_app};

#[tokio::test]
async fn create_answers_with_confirmation_text() {
    let app = test_app();
    let first = send(&app, json(Method::POST, "/api/suppliers", json!({"name": "Bolt Co"}))).await;
    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(first.text(), "Supplier created successfully with ID: 1");

    let second = send(&app, json(Method::POST, "/api/suppliers", json!({"name": "Nut Ltd"}))).await;
    assert_eq!(second.text(), "Supplier created successfully with ID: 2");

    let fetched = send(&app, empty(Method::GET, "/api/suppliers/1")).await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.json()["name"], "Bolt Co");
    assert_eq!(fetched.json()["id"], 1);
}

#[tokio::test]
async fn update_delete_and_missing_ids() {
    let app = test_app();
    send(
        &app,
        json(Method::POST, "/api/suppliers", json!({"name": "Bolt Co", "contactName": "Dana"})),
    )
    .await;

    let updated = send(
        &app,
        json(Method::PUT, "/api/suppliers/1", json!({"name": "Bolt & Sons", "phone": "123"})),
    )
    .await;
    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(
        updated.json(),
        json!({
            "id": 1,
            "name": "Bolt & Sons",
            "contactName": null,
            "email": null,
            "phone": "123",
            "address": null
        })
    );

    let deleted = send(&app, empty(Method::DELETE, "/api/suppliers/1")).await;
    assert_eq!(deleted.status, StatusCode::OK);
    assert!(deleted.body.is_empty());

    for reply in [
        send(&app, empty(Method::GET, "/api/suppliers/1")).await,
        send(&app, json(Method::PUT, "/api/suppliers/1", json!({"name": "x"}))).await,
        send(&app, empty(Method::DELETE, "/api/suppliers/1")).await,
    ] {
        assert_eq!(reply.status, StatusCode::NOT_FOUND);
        assert!(reply.body.is_empty());
    }
}

#[tokio::test]
async fn paged_listing() {
    let app = test_app();
    for i in 0..25 {
        send(&app, json(Method::POST, "/api/suppliers", json!({"name": format!("s{}", i)}))).await;
    }

    let all = send(&app, empty(Method::GET, "/api/suppliers")).await;
    assert_eq!(all.json().as_array().unwrap().len(), 25);

    let page = send(&app, empty(Method::GET, "/api/suppliers/paged?page=2&size=10")).await;
    assert_eq!(page.status, StatusCode::OK);
    let body = page.json();
    assert_eq!(body["content"].as_array().unwrap().len(), 5);
    assert_eq!(body["content"][0]["name"], "s20");
    assert_eq!(body["totalElements"], 25);
    assert_eq!(body["totalPages"], 3);
    assert_eq!(body["number"], 2);
    assert_eq!(body["size"], 10);
    assert_eq!(body["last"], true);
    assert_eq!(body["first"], false);

    let default = send(&app, empty(Method::GET, "/api/suppliers/paged")).await;
    let body = default.json();
    assert_eq!(body["size"], 10);
    assert_eq!(body["number"], 0);
    assert_eq!(body["numberOfElements"], 10);
    assert_eq!(body["first"], true);
}

#[tokio::test]
async fn paged_listing_sorts_by_property() {
    let app = test_app();
    for (name, contact) in [("b", "Zoe"), ("c", "Amy"), ("a", "Max")] {
        send(
            &app,
            json(Method::POST, "/api/suppliers", json!({"name": name, "contactName": contact})),
        )
        .await;
    }

    let names = |body: &serde_json::Value| -> Vec<String> {
        body["content"]
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["name"].as_str().unwrap().to_string())
            .collect()
    };

    let asc = send(&app, empty(Method::GET, "/api/suppliers/paged?sort=name,asc")).await;
    assert_eq!(asc.status, StatusCode::OK);
    assert_eq!(names(&asc.json()), vec!["a", "b", "c"]);
    assert_eq!(asc.json()["sort"]["sorted"], true);

    let desc = send(&app, empty(Method::GET, "/api/suppliers/paged?sort=name,desc")).await;
    assert_eq!(names(&desc.json()), vec!["c", "b", "a"]);

    let by_contact = send(&app, empty(Method::GET, "/api/suppliers/paged?sort=contactName")).await;
    assert_eq!(names(&by_contact.json()), vec!["c", "a", "b"]);

    let second = send(
        &app,
        empty(Method::GET, "/api/suppliers/paged?page=1&size=2&sort=name,asc"),
    )
    .await;
    assert_eq!(names(&second.json()), vec!["c"]);

    let unsorted = send(&app, empty(Method::GET, "/api/suppliers/paged")).await;
    assert_eq!(names(&unsorted.json()), vec!["b", "c", "a"]);
    assert_eq!(unsorted.json()["sort"]["unsorted"], true);
}

#[tokio::test]
async fn unknown_sort_property_is_500_with_message() {
    let app = test_app();
    let reply = send(&app, empty(Method::GET, "/api/suppliers/paged?sort=password")).await;
    assert_eq!(reply.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        reply.text(),
        "Error fetching suppliers: No property 'password' found for type 'Supplier'"
    );
}

#[tokio::test]
async fn create_failure_is_400_with_message() {
    let app = failing_app();
    let reply = send(&app, json(Method::POST, "/api/suppliers", json!({"name": "x"}))).await;
    assert_eq!(reply.status, StatusCode::BAD_REQUEST);
    assert_eq!(reply.text(), "Error creating supplier: database offline");

    let list = send(&app, empty(Method::GET, "/api/suppliers")).await;
    assert_eq!(list.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(list.text(), "Error fetching suppliers: database offline");
}

#[tokio::test]
async fn update_and_delete_failures_are_404_with_empty_body() {
    let app = failing_app();

    let update = send(&app, json(Method::PUT, "/api/suppliers/3", json!({"name": "x"}))).await;
    assert_eq!(update.status, StatusCode::NOT_FOUND);
    assert!(update.body.is_empty());

    let delete = send(&app, empty(Method::DELETE, "/api/suppliers/3")).await;
    assert_eq!(delete.status, StatusCode::NOT_FOUND);
    assert!(delete.body.is_empty());
}

#[tokio::test]
async fn mistyped_body_is_400() {
    let app = test_app();
    let reply = send(&app, json(Method::POST, "/api/suppliers", json!({"name": 5}))).await;
    assert_eq!(reply.status, StatusCode::BAD_REQUEST);

    let listed = send(&app, empty(Method::GET, "/api/suppliers")).await;
    assert!(listed.json().as_array().unwrap().is_empty());
}

#[tokio::test]
async fn any_origin_is_allowed() {
    let app = test_app();
    let request = axum::http::Request::builder()
        .method(Method::GET)
        .uri("/api/suppliers")
        .header(header::ORIGIN, "http://anywhere.example")
        .body(axum::body::Body::empty())
        .unwrap();
    let reply = send(&app, request).await;
    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(), "*");
}
