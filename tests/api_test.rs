//! HTTP-level tests driving the real route table through `actix_web::test`.
//! Each test builds its own app, so every test starts from empty collections.

use actix_web::{test, web, App};
use restaurant_api::infrastructure::memory::{InMemoryDishRepository, InMemoryOrderRepository};
use restaurant_api::{handlers, routes, DishApi, OrderApi};
use serde_json::{json, Value};

macro_rules! test_app {
    () => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(DishApi::new(InMemoryDishRepository::default())))
                .app_data(web::Data::new(OrderApi::new(InMemoryOrderRepository::default())))
                .app_data(handlers::json_config())
                .configure(routes),
        )
        .await
    };
}

fn dish_body() -> Value {
    json!({
        "name": "Margherita",
        "description": "Tomato, mozzarella, basil",
        "price": 1200,
        "image_url": "https://example.com/margherita.jpg"
    })
}

fn order_body() -> Value {
    json!({
        "deliverTo": "1 Main St",
        "mobileNumber": "555-0100",
        "dishes": [{ "dishId": "d1", "quantity": 2 }]
    })
}

#[actix_web::test]
async fn dish_round_trip() {
    let app = test_app!();

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/dishes")
            .set_json(json!({ "data": dish_body() }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 201);
    let created: Value = test::read_body_json(resp).await;
    let id = created["data"]["id"].as_str().expect("id").to_string();
    assert!(!id.is_empty());
    assert_eq!(created["data"]["name"], "Margherita");
    assert_eq!(created["data"]["price"], 1200);

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/dishes/{id}"))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 200);
    let fetched: Value = test::read_body_json(resp).await;
    assert_eq!(fetched, created);

    let resp = test::call_service(&app, test::TestRequest::get().uri("/dishes").to_request()).await;
    assert_eq!(resp.status(), 200);
    let listed: Value = test::read_body_json(resp).await;
    assert_eq!(listed["data"].as_array().expect("array").len(), 1);
}

#[actix_web::test]
async fn dish_create_names_first_missing_field() {
    let app = test_app!();

    let mut body = dish_body();
    body.as_object_mut().unwrap().remove("name");
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/dishes")
            .set_json(json!({ "data": body }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 400);
    let err: Value = test::read_body_json(resp).await;
    assert_eq!(err["message"], "Must include a name");
}

#[actix_web::test]
async fn dish_create_rejects_bad_price_and_leaves_collection_unchanged() {
    let app = test_app!();

    for bad in [json!(0), json!(-5), json!(9.99), json!("1200")] {
        let mut body = dish_body();
        body["price"] = bad;
        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/dishes")
                .set_json(json!({ "data": body }))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), 400);
        let err: Value = test::read_body_json(resp).await;
        assert_eq!(
            err["message"],
            "Dish must have a price that is an integer greater than 0"
        );
    }

    let resp = test::call_service(&app, test::TestRequest::get().uri("/dishes").to_request()).await;
    let listed: Value = test::read_body_json(resp).await;
    assert!(listed["data"].as_array().expect("array").is_empty());
}

#[actix_web::test]
async fn missing_data_member_reads_as_empty_object() {
    let app = test_app!();

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/dishes")
            .set_json(json!({}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 400);
    let err: Value = test::read_body_json(resp).await;
    assert_eq!(err["message"], "Must include a name");
}

#[actix_web::test]
async fn unknown_dish_is_404() {
    let app = test_app!();

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/dishes/no-such-id").to_request(),
    )
    .await;
    assert_eq!(resp.status(), 404);
    let err: Value = test::read_body_json(resp).await;
    assert_eq!(err["message"], "Dish does not exist: no-such-id");
}

#[actix_web::test]
async fn dish_update_with_mismatched_body_id_is_rejected() {
    let app = test_app!();

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/dishes")
            .set_json(json!({ "data": dish_body() }))
            .to_request(),
    )
    .await;
    let created: Value = test::read_body_json(resp).await;
    let id = created["data"]["id"].as_str().expect("id").to_string();

    let mut body = dish_body();
    body["id"] = json!("something-else");
    body["name"] = json!("Changed");
    let resp = test::call_service(
        &app,
        test::TestRequest::put()
            .uri(&format!("/dishes/{id}"))
            .set_json(json!({ "data": body }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 400);

    // Record unchanged.
    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/dishes/{id}"))
            .to_request(),
    )
    .await;
    let fetched: Value = test::read_body_json(resp).await;
    assert_eq!(fetched["data"]["name"], "Margherita");
}

#[actix_web::test]
async fn dish_update_with_matching_id_replaces_fields() {
    let app = test_app!();

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/dishes")
            .set_json(json!({ "data": dish_body() }))
            .to_request(),
    )
    .await;
    let created: Value = test::read_body_json(resp).await;
    let id = created["data"]["id"].as_str().expect("id").to_string();

    let mut body = dish_body();
    body["id"] = json!(id);
    body["name"] = json!("Marinara");
    body["price"] = json!(900);
    let resp = test::call_service(
        &app,
        test::TestRequest::put()
            .uri(&format!("/dishes/{id}"))
            .set_json(json!({ "data": body }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 200);
    let updated: Value = test::read_body_json(resp).await;
    assert_eq!(updated["data"]["id"], id.as_str());
    assert_eq!(updated["data"]["name"], "Marinara");
    assert_eq!(updated["data"]["price"], 900);
}

#[actix_web::test]
async fn order_create_leaves_status_unset() {
    let app = test_app!();

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/orders")
            .set_json(json!({ "data": order_body() }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 201);
    let created: Value = test::read_body_json(resp).await;
    assert!(created["data"].get("status").is_none());
    assert_eq!(created["data"]["dishes"][0]["quantity"], 2);
}

#[actix_web::test]
async fn order_create_requires_at_least_one_dish() {
    let app = test_app!();

    let mut body = order_body();
    body["dishes"] = json!([]);
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/orders")
            .set_json(json!({ "data": body }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 400);
    let err: Value = test::read_body_json(resp).await;
    assert_eq!(err["message"], "Order must include at least one dish");
}

#[actix_web::test]
async fn order_create_rejects_non_array_dishes() {
    let app = test_app!();

    let mut body = order_body();
    body["dishes"] = json!("two margheritas");
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/orders")
            .set_json(json!({ "data": body }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 400);
    let err: Value = test::read_body_json(resp).await;
    assert_eq!(err["message"], "Order must include at least one dish");
}

#[actix_web::test]
async fn order_create_names_offending_quantity_index() {
    let app = test_app!();

    let mut body = order_body();
    body["dishes"] = json!([
        { "dishId": "d1", "quantity": 1 },
        { "dishId": "d2", "quantity": 0 }
    ]);
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/orders")
            .set_json(json!({ "data": body }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 400);
    let err: Value = test::read_body_json(resp).await;
    assert_eq!(
        err["message"],
        "Dish 1 must have a quantity that is an integer greater than 0"
    );
}

#[actix_web::test]
async fn delivered_order_cannot_be_updated_again() {
    let app = test_app!();

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/orders")
            .set_json(json!({ "data": order_body() }))
            .to_request(),
    )
    .await;
    let created: Value = test::read_body_json(resp).await;
    let id = created["data"]["id"].as_str().expect("id").to_string();

    let mut body = order_body();
    body["status"] = json!("delivered");
    let resp = test::call_service(
        &app,
        test::TestRequest::put()
            .uri(&format!("/orders/{id}"))
            .set_json(json!({ "data": body }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 200);
    let updated: Value = test::read_body_json(resp).await;
    assert_eq!(updated["data"]["status"], "delivered");

    let mut body = order_body();
    body["status"] = json!("pending");
    let resp = test::call_service(
        &app,
        test::TestRequest::put()
            .uri(&format!("/orders/{id}"))
            .set_json(json!({ "data": body }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 400);
    let err: Value = test::read_body_json(resp).await;
    assert_eq!(err["message"], "A delivered order cannot be changed");
}

#[actix_web::test]
async fn order_update_rejects_invalid_status() {
    let app = test_app!();

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/orders")
            .set_json(json!({ "data": order_body() }))
            .to_request(),
    )
    .await;
    let created: Value = test::read_body_json(resp).await;
    let id = created["data"]["id"].as_str().expect("id").to_string();

    for bad in [json!(""), json!("shipped")] {
        let mut body = order_body();
        body["status"] = bad;
        let resp = test::call_service(
            &app,
            test::TestRequest::put()
                .uri(&format!("/orders/{id}"))
                .set_json(json!({ "data": body }))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), 400);
        let err: Value = test::read_body_json(resp).await;
        assert_eq!(
            err["message"],
            "Order must have a status of pending, preparing, out-for-delivery, delivered"
        );
    }
}

#[actix_web::test]
async fn fresh_order_deletes_but_preparing_order_does_not() {
    let app = test_app!();

    // Freshly created, no status: counts as pending, delete succeeds.
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/orders")
            .set_json(json!({ "data": order_body() }))
            .to_request(),
    )
    .await;
    let created: Value = test::read_body_json(resp).await;
    let id = created["data"]["id"].as_str().expect("id").to_string();

    let resp = test::call_service(
        &app,
        test::TestRequest::delete()
            .uri(&format!("/orders/{id}"))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 204);

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/orders/{id}"))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 404);

    // A preparing order refuses deletion.
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/orders")
            .set_json(json!({ "data": order_body() }))
            .to_request(),
    )
    .await;
    let created: Value = test::read_body_json(resp).await;
    let id = created["data"]["id"].as_str().expect("id").to_string();

    let mut body = order_body();
    body["status"] = json!("preparing");
    let resp = test::call_service(
        &app,
        test::TestRequest::put()
            .uri(&format!("/orders/{id}"))
            .set_json(json!({ "data": body }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 200);

    let resp = test::call_service(
        &app,
        test::TestRequest::delete()
            .uri(&format!("/orders/{id}"))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 400);
    let err: Value = test::read_body_json(resp).await;
    assert_eq!(err["message"], "An order cannot be deleted unless it is pending");
}

#[actix_web::test]
async fn unsupported_verbs_get_405() {
    let app = test_app!();

    let resp = test::call_service(
        &app,
        test::TestRequest::delete().uri("/dishes").to_request(),
    )
    .await;
    assert_eq!(resp.status(), 405);
    let err: Value = test::read_body_json(resp).await;
    assert_eq!(err["message"], "DELETE not allowed for /dishes");

    let resp = test::call_service(
        &app,
        test::TestRequest::patch().uri("/orders/abc").to_request(),
    )
    .await;
    assert_eq!(resp.status(), 405);

    let resp = test::call_service(
        &app,
        test::TestRequest::delete().uri("/dishes/abc").to_request(),
    )
    .await;
    assert_eq!(resp.status(), 405);
}

#[actix_web::test]
async fn malformed_json_body_is_400_with_message() {
    let app = test_app!();

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/dishes")
            .insert_header(("content-type", "application/json"))
            .set_payload("{ not json")
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 400);
    let err: Value = test::read_body_json(resp).await;
    assert!(err["message"].is_string());
}
