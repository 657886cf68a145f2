//! GraphQL schema tests against the in-memory repository

use std::sync::Arc;

use async_graphql::{Request, Variables};
use async_trait::async_trait;
use order_processing::api::{OrderSchema, build_schema};
use order_processing::application::OrderService;
use order_processing::domain::{NewOrder, Order, OrderId, OrderRepository};
use order_processing::infrastructure::persistence::InMemoryOrderRepository;
use orders_errors::{AppError, AppResult};
use serde_json::{Value, json};

const CREATE_ORDER: &str = r#"
    mutation Create($customerName: String!, $product: String!, $quantity: Int!) {
        createOrder(customerName: $customerName, product: $product, quantity: $quantity) {
            id customerName product quantity status
        }
    }
"#;

fn schema() -> OrderSchema {
    let repo = Arc::new(InMemoryOrderRepository::new());
    build_schema(Arc::new(OrderService::new(repo)))
}

async fn execute(schema: &OrderSchema, request: impl Into<Request>) -> Value {
    let response = schema.execute(request).await;
    assert!(response.errors.is_empty(), "unexpected errors: {:?}", response.errors);
    serde_json::to_value(&response.data).unwrap()
}

async fn create(schema: &OrderSchema, customer_name: &str, product: &str, quantity: i32) -> Value {
    let request = Request::new(CREATE_ORDER).variables(Variables::from_json(json!({
        "customerName": customer_name,
        "product": product,
        "quantity": quantity,
    })));
    execute(schema, request).await["createOrder"].clone()
}

#[tokio::test]
async fn test_create_order_returns_created_order() {
    let schema = schema();

    let order = create(&schema, "Alice", "Widget", 3).await;

    assert_eq!(
        order,
        json!({
            "id": 1,
            "customerName": "Alice",
            "product": "Widget",
            "quantity": 3,
            "status": "CREATED"
        })
    );
}

#[tokio::test]
async fn test_created_order_is_readable_by_id() {
    let schema = schema();
    let created = create(&schema, "Alice", "Widget", 3).await;

    let data = execute(
        &schema,
        format!(
            "{{ order(id: {}) {{ id customerName product quantity status }} }}",
            created["id"]
        ),
    )
    .await;

    assert_eq!(data["order"], created);
}

#[tokio::test]
async fn test_unknown_id_returns_null_without_errors() {
    let schema = schema();
    create(&schema, "Alice", "Widget", 3).await;

    let data = execute(&schema, "{ order(id: 999) { id } }").await;

    assert_eq!(data, json!({ "order": null }));
}

#[tokio::test]
async fn test_orders_lists_every_created_order() {
    let schema = schema();

    let empty = execute(&schema, "{ orders { id } }").await;
    assert_eq!(empty, json!({ "orders": [] }));

    create(&schema, "Alice", "Widget", 3).await;
    create(&schema, "Bob", "Gadget", 1).await;

    let data = execute(&schema, "{ orders { id customerName status } }").await;
    assert_eq!(
        data,
        json!({
            "orders": [
                { "id": 1, "customerName": "Alice", "status": "CREATED" },
                { "id": 2, "customerName": "Bob", "status": "CREATED" }
            ]
        })
    );
}

#[tokio::test]
async fn test_reads_do_not_change_state() {
    let schema = schema();
    create(&schema, "Alice", "Widget", 3).await;

    let first = execute(&schema, "{ orders { id customerName product quantity status } }").await;
    execute(&schema, "{ order(id: 1) { id } }").await;
    let second = execute(&schema, "{ orders { id customerName product quantity status } }").await;

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_identical_inputs_create_distinct_orders() {
    let schema = schema();

    let first = create(&schema, "Alice", "Widget", 3).await;
    let second = create(&schema, "Alice", "Widget", 3).await;

    assert_ne!(first["id"], second["id"]);
    let data = execute(&schema, "{ orders { id } }").await;
    assert_eq!(data["orders"].as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn test_input_is_stored_without_validation() {
    let schema = schema();

    let order = create(&schema, "", "", -4).await;

    assert_eq!(order["customerName"], "");
    assert_eq!(order["quantity"], -4);
    assert_eq!(order["status"], "CREATED");
}

#[tokio::test]
async fn test_missing_argument_is_rejected_by_schema() {
    let schema = schema();

    let response = schema
        .execute(r#"mutation { createOrder(customerName: "Alice", product: "Widget") { id } }"#)
        .await;
    assert!(!response.errors.is_empty());

    let data = execute(&schema, "{ orders { id } }").await;
    assert_eq!(data, json!({ "orders": [] }));
}

#[tokio::test]
async fn test_schema_exposes_order_operations() {
    let sdl = schema().sdl();

    assert!(sdl.contains("type Order"));
    assert!(sdl.contains("orders: [Order!]!"));
    assert!(sdl.contains("order(id: Int!): Order"));
    assert!(sdl.contains("createOrder(customerName: String!, product: String!, quantity: Int!): Order!"));
}

/// 总是失败的仓储，用于验证错误映射
struct UnavailableRepository;

#[async_trait]
impl OrderRepository for UnavailableRepository {
    async fn list(&self) -> AppResult<Vec<Order>> {
        Err(AppError::database("connection refused"))
    }

    async fn find_by_id(&self, _id: OrderId) -> AppResult<Option<Order>> {
        Err(AppError::database("connection refused"))
    }

    async fn save(&self, _order: NewOrder) -> AppResult<Order> {
        Err(AppError::database("connection refused"))
    }
}

#[tokio::test]
async fn test_storage_failure_maps_to_graphql_error_with_code() {
    let schema = build_schema(Arc::new(OrderService::new(Arc::new(UnavailableRepository))));

    let response = schema.execute("{ orders { id } }").await;
    let body = serde_json::to_value(&response).unwrap();

    assert_eq!(body["errors"][0]["message"], "Database error: connection refused");
    assert_eq!(body["errors"][0]["extensions"]["code"], "DATABASE_ERROR");
    assert_eq!(body["errors"][0]["path"], json!(["orders"]));
}
