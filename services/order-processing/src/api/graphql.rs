//! GraphQL query and mutation roots
//!
//! 纯适配层：把 GraphQL 参数转换为服务调用，把服务错误转换为带 `code` 的 GraphQL 错误。
//!
//! `#[Object]` 方法上的文档注释会成为 schema 中的字段描述，面向 API 使用者，因此用英文书写。

use std::sync::Arc;

use async_graphql::{Context, EmptySubscription, ErrorExtensions, Object, Result, Schema};

use crate::application::{CreateOrderCommand, OrderService};
use crate::domain::value_objects::OrderId;

use super::objects::OrderObject;

pub type OrderSchema = Schema<OrderQuery, OrderMutation, EmptySubscription>;

/// 构建 schema，`OrderService` 作为上下文数据注入
pub fn build_schema(service: Arc<OrderService>) -> OrderSchema {
    Schema::build(OrderQuery, OrderMutation, EmptySubscription)
        .data(service)
        .finish()
}

fn order_service<'a>(ctx: &Context<'a>) -> Result<&'a Arc<OrderService>> {
    ctx.data::<Arc<OrderService>>()
}

#[derive(Debug, Clone, Copy, Default)]
pub struct OrderQuery;

#[Object]
impl OrderQuery {
    /// All stored orders.
    async fn orders(&self, ctx: &Context<'_>) -> Result<Vec<OrderObject>> {
        let orders = order_service(ctx)?
            .get_orders()
            .await
            .map_err(|e| e.extend())?;
        Ok(orders.into_iter().map(OrderObject::from).collect())
    }

    /// A single order, or null when no order has this id.
    async fn order(&self, ctx: &Context<'_>, id: i64) -> Result<Option<OrderObject>> {
        let order = order_service(ctx)?
            .get_order_by_id(OrderId(id))
            .await
            .map_err(|e| e.extend())?;
        Ok(order.map(OrderObject::from))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct OrderMutation;

#[Object]
impl OrderMutation {
    /// Create an order with status CREATED.
    async fn create_order(
        &self,
        ctx: &Context<'_>,
        customer_name: String,
        product: String,
        quantity: i32,
    ) -> Result<OrderObject> {
        let order = order_service(ctx)?
            .create_order(CreateOrderCommand::new(customer_name, product, quantity))
            .await
            .map_err(|e| e.extend())?;
        Ok(order.into())
    }
}
