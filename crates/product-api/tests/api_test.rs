use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use product_api::api::router;
use product_api::lifecycle::ProductSystem;
use serde_json::{json, Value};
use tower::ServiceExt;

/// A router backed by a real, freshly seeded product actor.
fn app() -> Router {
    let system = ProductSystem::new(32).expect("Failed to start product system");
    router(system.product_client.clone())
}

async fn call(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn empty(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn with_json(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn ids(body: &Value) -> Vec<u64> {
    body.as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_u64().unwrap())
        .collect()
}

#[tokio::test]
async fn test_greeting() {
    let app = app();
    let (status, body) = call(&app, empty("GET", "/")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!("Hello world"));
}

#[tokio::test]
async fn test_list_returns_seed_catalogue() {
    let app = app();
    let (status, body) = call(&app, empty("GET", "/products/")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec![1, 2, 3, 4]);
    assert_eq!(
        body[0],
        json!({
            "id": 1,
            "name": "Phone",
            "description": "A smartphone",
            "price": 699.99,
            "quantity": 50
        })
    );
}

#[tokio::test]
async fn test_create_delete_create_never_reuses_ids() {
    let app = app();

    let (status, cup) = call(
        &app,
        with_json("POST", "/products/", json!({"name": "Cup", "price": 5.0, "quantity": 10})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        cup,
        json!({"id": 5, "name": "Cup", "description": null, "price": 5.0, "quantity": 10})
    );

    let (status, body) = call(&app, empty("DELETE", "/products/3")).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (_, mug) = call(
        &app,
        with_json("POST", "/products/", json!({"name": "Mug", "price": 7.5, "quantity": 1})),
    )
    .await;
    assert_eq!(mug["id"], 6);

    let (_, list) = call(&app, empty("GET", "/products/")).await;
    assert_eq!(ids(&list), vec![1, 2, 4, 5, 6]);
}

#[tokio::test]
async fn test_client_supplied_id_is_ignored() {
    let app = app();
    let (status, body) = call(
        &app,
        with_json(
            "POST",
            "/products/",
            json!({"id": 1, "name": "Cup", "price": 5.0, "quantity": 10}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 5);
}

#[tokio::test]
async fn test_create_validation_failures_are_422() {
    let app = app();
    let bodies = [
        json!({"name": "Cup", "price": 0, "quantity": 1}),
        json!({"name": "Cup", "price": -1, "quantity": 1}),
        json!({"name": "Cup", "price": 1, "quantity": -1}),
        json!({"name": "", "price": 1, "quantity": 1}),
        json!({"name": "n".repeat(101), "price": 1, "quantity": 1}),
        json!({"name": "Cup", "description": "d".repeat(256), "price": 1, "quantity": 1}),
        json!({"name": "Cup", "quantity": 1}),
        json!({"name": "Cup", "price": "cheap", "quantity": 1}),
    ];
    for body in bodies {
        let (status, detail) = call(&app, with_json("POST", "/products/", body.clone())).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "body: {body}");
        assert!(detail["detail"].is_array());
    }

    // Missing and mistyped fields are reported at the field, not at the whole body
    let located = [
        (json!({"name": "Cup", "quantity": 1}), "missing"),
        (json!({"name": "Cup", "price": "cheap", "quantity": 1}), "float_parsing"),
    ];
    for (body, kind) in located {
        let (status, detail) = call(&app, with_json("POST", "/products/", body)).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(detail["detail"][0]["loc"], json!(["body", "price"]));
        assert_eq!(detail["detail"][0]["type"], kind);
    }

    let (_, detail) = call(
        &app,
        with_json("POST", "/products/", json!({"name": "Cup", "price": 1, "quantity": [1]})),
    )
    .await;
    assert_eq!(detail["detail"][0]["loc"], json!(["body", "quantity"]));
    assert_eq!(detail["detail"][0]["type"], "int_type");

    // Nothing was stored
    let (_, list) = call(&app, empty("GET", "/products/")).await;
    assert_eq!(ids(&list), vec![1, 2, 3, 4]);
}

#[tokio::test]
async fn test_quantity_beyond_u32_is_stored() {
    let app = app();
    let (status, body) = call(
        &app,
        with_json(
            "POST",
            "/products/",
            json!({"name": "Bulk", "price": 1.0, "quantity": 5_000_000_000_u64}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["quantity"], 5_000_000_000_u64);

    let (_, fetched) = call(&app, empty("GET", "/products/5")).await;
    assert_eq!(fetched["quantity"], 5_000_000_000_u64);
}

#[tokio::test]
async fn test_whole_float_quantity_is_accepted() {
    let app = app();
    let (status, body) = call(
        &app,
        with_json("POST", "/products/", json!({"name": "Cup", "price": 5.0, "quantity": 10.0})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["quantity"], 10);

    let (status, body) = call(
        &app,
        with_json("PATCH", "/products/5", json!({"quantity": 10.5})),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["detail"][0]["loc"], json!(["body", "quantity"]));
    assert_eq!(body["detail"][0]["type"], "int_from_float");
}

#[tokio::test]
async fn test_patch_with_mistyped_field_is_located() {
    let app = app();
    let (status, body) = call(
        &app,
        with_json("PATCH", "/products/1", json!({"name": 42, "price": 1.0})),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["detail"][0]["loc"], json!(["body", "name"]));
    assert_eq!(body["detail"][0]["type"], "string_type");

    let (_, fetched) = call(&app, empty("GET", "/products/1")).await;
    assert_eq!(fetched["price"], 699.99);
}

#[tokio::test]
async fn test_malformed_json_is_422() {
    let app = app();
    let request = Request::builder()
        .method("POST")
        .uri("/products/")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, body) = call(&app, request).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["detail"][0]["loc"], json!(["body"]));
}

#[tokio::test]
async fn test_bad_path_ids_are_422() {
    let app = app();
    for uri in ["/products/0", "/products/-1", "/products/abc"] {
        for method in ["GET", "DELETE"] {
            let (status, body) = call(&app, empty(method, uri)).await;
            assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "{method} {uri}");
            assert_eq!(body["detail"][0]["loc"], json!(["path", "product_id"]));
        }
    }
}

#[tokio::test]
async fn test_missing_ids_are_404() {
    let app = app();
    let replacement = json!({"name": "X", "price": 1.0, "quantity": 1});
    let requests = [
        empty("GET", "/products/99"),
        empty("GET", "/products/99999999999999999999"),
        empty("DELETE", "/products/99999999999999999999"),
        empty("DELETE", "/products/99"),
        with_json("PUT", "/products/99", replacement),
        with_json("PATCH", "/products/99", json!({"price": 1.0})),
    ];
    for request in requests {
        let (status, body) = call(&app, request).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"detail": "Product not found"}));
    }
}

#[tokio::test]
async fn test_put_with_invalid_body_on_missing_id_is_422() {
    let app = app();
    let (status, _) = call(
        &app,
        with_json("PUT", "/products/99", json!({"name": "X", "price": 0, "quantity": 1})),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_put_replaces_every_field_in_place() {
    let app = app();
    let (status, body) = call(
        &app,
        with_json(
            "PUT",
            "/products/2",
            json!({"name": "Notebook", "price": 799.0, "quantity": 12}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"id": 2, "name": "Notebook", "description": null, "price": 799.0, "quantity": 12})
    );

    let (_, list) = call(&app, empty("GET", "/products/")).await;
    assert_eq!(ids(&list), vec![1, 2, 3, 4]);
    assert_eq!(list[1]["name"], "Notebook");
}

#[tokio::test]
async fn test_patch_changes_only_supplied_fields() {
    let app = app();
    let (status, body) = call(
        &app,
        with_json("PATCH", "/products/1", json!({"price": 649.99})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "id": 1,
            "name": "Phone",
            "description": "A smartphone",
            "price": 649.99,
            "quantity": 50
        })
    );

    let (_, fetched) = call(&app, empty("GET", "/products/1")).await;
    assert_eq!(fetched, body);
}

#[tokio::test]
async fn test_patch_null_description_clears_it() {
    let app = app();
    let (status, body) = call(
        &app,
        with_json("PATCH", "/products/4", json!({"description": null})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["description"], Value::Null);
    assert_eq!(body["name"], "Table");
}

#[tokio::test]
async fn test_patch_rejects_invalid_values_without_partial_apply() {
    let app = app();
    let (status, _) = call(
        &app,
        with_json("PATCH", "/products/1", json!({"name": "Phone 2", "price": 0})),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, _) = call(&app, with_json("PATCH", "/products/1", json!({"name": null}))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (_, fetched) = call(&app, empty("GET", "/products/1")).await;
    assert_eq!(fetched["name"], "Phone");
    assert_eq!(fetched["price"], 699.99);
}

#[tokio::test]
async fn test_empty_patch_returns_record_unchanged() {
    let app = app();
    let (_, before) = call(&app, empty("GET", "/products/3")).await;
    let (status, after) = call(&app, with_json("PATCH", "/products/3", json!({}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(after, before);
}

#[tokio::test]
async fn test_delete_twice_is_404_the_second_time() {
    let app = app();
    let (status, _) = call(&app, empty("DELETE", "/products/2")).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = call(&app, empty("DELETE", "/products/2")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, list) = call(&app, empty("GET", "/products/")).await;
    assert_eq!(list.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_collection_without_slash_redirects_and_keeps_query() {
    let app = app();
    let response = app
        .clone()
        .oneshot(empty("GET", "/products?limit=2"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.headers()["location"], "/products/?limit=2");

    let (status, _) = call(
        &app,
        with_json("POST", "/products", json!({"name": "Cup", "price": 5.0, "quantity": 1})),
    )
    .await;
    assert_eq!(status, StatusCode::TEMPORARY_REDIRECT);

    // The redirect itself stores nothing
    let (_, list) = call(&app, empty("GET", "/products/")).await;
    assert_eq!(ids(&list), vec![1, 2, 3, 4]);
}
