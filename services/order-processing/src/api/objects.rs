//! GraphQL 输出类型

use async_graphql::SimpleObject;

use crate::domain::entities::Order;

/// Schema 中的 `Order` 类型，字段名为 camelCase
#[derive(Debug, Clone, PartialEq, Eq, SimpleObject)]
#[graphql(name = "Order")]
pub struct OrderObject {
    pub id: i64,
    pub customer_name: String,
    pub product: String,
    pub quantity: i32,
    pub status: String,
}

impl From<Order> for OrderObject {
    fn from(order: Order) -> Self {
        Self {
            id: order.id().value(),
            customer_name: order.customer_name().to_string(),
            product: order.product().to_string(),
            quantity: order.quantity(),
            status: order.status().to_string(),
        }
    }
}
