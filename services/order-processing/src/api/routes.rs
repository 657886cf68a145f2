//! HTTP 路由
//!
//! `POST /graphql` 执行请求，`GET /graphql` 返回 GraphiQL 页面

use std::time::Instant;

use async_graphql::http::GraphiQLSource;
use async_graphql::parser::{
    parse_query,
    types::{DocumentOperations, OperationDefinition, Selection},
};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Router,
    extract::State,
    response::{Html, IntoResponse},
    routing::get,
};
use orders_bootstrap::record_graphql_request;
use tracing::debug;

use super::graphql::OrderSchema;

pub const GRAPHQL_PATH: &str = "/graphql";

/// schema 的根字段，指标的 `operation` 标签只取这些值
const ROOT_FIELDS: [&str; 3] = ["orders", "order", "createOrder"];

const UNKNOWN_OPERATION: &str = "unknown";

pub fn router(schema: OrderSchema) -> Router {
    Router::new()
        .route(GRAPHQL_PATH, get(graphiql).post(graphql_handler))
        .with_state(schema)
}

async fn graphql_handler(State(schema): State<OrderSchema>, req: GraphQLRequest) -> GraphQLResponse {
    let request = req.into_inner();
    let operation = root_field_label(&request);

    let started = Instant::now();
    let response = schema.execute(request).await;
    let status = if response.is_ok() { "ok" } else { "error" };
    record_graphql_request(operation, status, started.elapsed());
    debug!(operation, status, "GraphQL request executed");

    response.into()
}

async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}

/// 被执行操作的第一个已知根字段，无法识别时为 `unknown`
fn root_field_label(request: &async_graphql::Request) -> &'static str {
    let Ok(document) = parse_query(&request.query) else {
        return UNKNOWN_OPERATION;
    };

    let selected: Option<&OperationDefinition> = match &document.operations {
        DocumentOperations::Single(operation) => Some(&operation.node),
        DocumentOperations::Multiple(operations) => {
            request.operation_name.as_deref().and_then(|wanted| {
                operations
                    .iter()
                    .find(|(name, _)| name.as_str() == wanted)
                    .map(|(_, operation)| &operation.node)
            })
        }
    };

    selected
        .and_then(|operation| {
            operation
                .selection_set
                .node
                .items
                .iter()
                .find_map(|selection| match &selection.node {
                    Selection::Field(field) => ROOT_FIELDS
                        .into_iter()
                        .find(|known| *known == field.node.name.node.as_str()),
                    _ => None,
                })
        })
        .unwrap_or(UNKNOWN_OPERATION)
}
