//! order-processing Service - 订单管理
//!
//! GraphQL API：`orders`、`order(id)`、`createOrder(customerName, product, quantity)`

pub mod api;
pub mod application;
pub mod domain;
pub mod infrastructure;

use std::sync::Arc;

use axum::Router;
use orders_bootstrap::Infrastructure;
use orders_errors::AppResult;

use application::OrderService;
use infrastructure::build_order_repository;

/// 组装仓储、服务、schema 与路由
pub async fn build_app(infra: Infrastructure) -> AppResult<Router> {
    let order_repo = build_order_repository(&infra).await?;
    let service = Arc::new(OrderService::new(order_repo));
    let schema = api::build_schema(service);
    Ok(api::router(schema))
}
