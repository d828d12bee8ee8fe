mod common;

use axum::http::StatusCode;
use common::{TestApp, id_of, item_body, order_body};
use serde_json::{Value, json};

/// Two orders: the first with wrench and hammer, the second with beer and Beer.
async fn seeded() -> anyhow::Result<(TestApp, Value, Value)> {
    let app = TestApp::new().await?;
    let first = app
        .create_order(&order_body(
            1,
            "2018-03-01T09:30",
            "processing",
            json!([item_body(1, "wrench", 1, 10.5), item_body(2, "hammer", 2, 11.0)]),
        ))
        .await?;
    let second = app
        .create_order(&order_body(
            2,
            "2018-03-02T12:00",
            "shipped",
            json!([item_body(3, "beer", 2, 2.5), item_body(4, "Beer", 6, 3.0)]),
        ))
        .await?;
    Ok((app, first, second))
}

fn names(body: &Value) -> Vec<&str> {
    body.as_array()
        .map(|items| items.iter().filter_map(|i| i["name"].as_str()).collect())
        .unwrap_or_default()
}

#[tokio::test]
async fn list_and_get_items() -> anyhow::Result<()> {
    let (app, first, _) = seeded().await?;

    let resp = app.get("/items").await?;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(names(&resp.body), vec!["wrench", "hammer", "beer", "Beer"]);

    let hammer = &first["items"][1];
    let resp = app.get(&format!("/items/{}", id_of(hammer))).await?;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(&resp.body, hammer);
    assert_eq!(resp.body["price"], 11.0);

    let resp = app.get("/items/9999").await?;
    assert_eq!(resp.status, StatusCode::NOT_FOUND);
    assert_eq!(resp.body["message"], "Item with id '9999' was not found.");
    Ok(())
}

#[tokio::test]
async fn name_query_is_exact_and_case_sensitive() -> anyhow::Result<()> {
    let (app, _, _) = seeded().await?;

    let resp = app.get("/items/query?name=beer").await?;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(names(&resp.body), vec!["beer"]);

    let resp = app.get("/items/query?name=bee").await?;
    assert_eq!(resp.body, json!([]));
    Ok(())
}

#[tokio::test]
async fn item_queries_honor_first_parameter() -> anyhow::Result<()> {
    let (app, first, _) = seeded().await?;

    // quantity comes before name
    let resp = app.get("/items/query?name=wrench&quantity=2").await?;
    assert_eq!(names(&resp.body), vec!["hammer", "beer"]);

    // order_id comes before everything else
    let resp = app
        .get(&format!("/items/query?price=3.0&order_id={}", id_of(&first)))
        .await?;
    assert_eq!(names(&resp.body), vec!["wrench", "hammer"]);

    let resp = app.get("/items?product_id=4").await?;
    assert_eq!(names(&resp.body), vec!["Beer"]);

    let resp = app.get("/items/query?price=10.5").await?;
    assert_eq!(names(&resp.body), vec!["wrench"]);

    let resp = app.get("/items/query?quantity=many").await?;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn update_item_takes_order_from_path() -> anyhow::Result<()> {
    let (app, first, second) = seeded().await?;
    let wrench_id = id_of(&first["items"][0]);
    let second_id = id_of(&second);

    let resp = app
        .put_json(
            &format!("/orders/{second_id}/items/{wrench_id}"),
            &json!({ "order_id": 777, "product_id": 1, "name": "wrench", "quantity": 3, "price": 9.75 }),
        )
        .await?;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(
        resp.body,
        json!({
            "id": wrench_id,
            "order_id": second_id,
            "product_id": 1,
            "name": "wrench",
            "quantity": 3,
            "price": 9.75
        })
    );

    let moved = app.get(&format!("/orders/{second_id}/items")).await?;
    assert_eq!(names(&moved.body), vec!["wrench", "beer", "Beer"]);
    Ok(())
}

#[tokio::test]
async fn update_item_error_cases() -> anyhow::Result<()> {
    let (app, first, _) = seeded().await?;
    let order_id = id_of(&first);
    let wrench_id = id_of(&first["items"][0]);
    let body = item_body(1, "wrench", 3, 9.75);

    let resp = app
        .put_json(&format!("/orders/{order_id}/items/9999"), &body)
        .await?;
    assert_eq!(resp.status, StatusCode::NOT_FOUND);

    let resp = app
        .request(
            "PUT",
            &format!("/orders/{order_id}/items/{wrench_id}"),
            Some("text/plain"),
            Some(body.to_string()),
        )
        .await?;
    assert_eq!(resp.status, StatusCode::UNSUPPORTED_MEDIA_TYPE);

    let resp = app
        .put_json(
            &format!("/orders/{order_id}/items/{wrench_id}"),
            &json!({ "product_id": 1, "quantity": 3, "price": 9.75 }),
        )
        .await?;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
    assert_eq!(resp.body["message"], "Invalid item: missing name");
    Ok(())
}

#[tokio::test]
async fn delete_item_checks_owning_order() -> anyhow::Result<()> {
    let (app, first, second) = seeded().await?;
    let hammer_id = id_of(&first["items"][1]);

    let resp = app
        .delete(&format!("/orders/{}/items/{hammer_id}", id_of(&second)))
        .await?;
    assert_eq!(resp.status, StatusCode::NOT_FOUND);
    assert_eq!(app.get(&format!("/items/{hammer_id}")).await?.status, StatusCode::OK);

    let resp = app
        .delete(&format!("/orders/{}/items/{hammer_id}", id_of(&first)))
        .await?;
    assert_eq!(resp.status, StatusCode::NO_CONTENT);
    assert_eq!(
        app.get(&format!("/items/{hammer_id}")).await?.status,
        StatusCode::NOT_FOUND
    );

    let resp = app
        .delete(&format!("/orders/{}/items/{hammer_id}", id_of(&first)))
        .await?;
    assert_eq!(resp.status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn storage_failure_is_generic_json_500() -> anyhow::Result<()> {
    let (app, first, _) = seeded().await?;
    let wrench_id = id_of(&first["items"][0]);

    // No order 9999, so the foreign key on items rejects the update.
    let resp = app
        .put_json(
            &format!("/orders/9999/items/{wrench_id}"),
            &item_body(1, "wrench", 1, 10.5),
        )
        .await?;
    assert_eq!(resp.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        resp.body,
        json!({ "status": 500, "error": "Internal Server Error", "message": "Database error" })
    );

    let resp = app.get(&format!("/items/{wrench_id}")).await?;
    assert_eq!(resp.body["order_id"], first["id"]);
    Ok(())
}
