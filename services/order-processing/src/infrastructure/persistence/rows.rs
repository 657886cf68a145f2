//! 数据库行映射结构

use sqlx::FromRow;

use crate::domain::entities::Order;
use crate::domain::value_objects::OrderId;

/// 订单数据库行
#[derive(Debug, FromRow)]
pub struct OrderRow {
    pub id: i64,
    pub customer_name: String,
    pub product: String,
    pub quantity: i32,
    pub status: String,
}

impl From<OrderRow> for Order {
    fn from(row: OrderRow) -> Self {
        Order::from_parts(
            OrderId(row.id),
            row.customer_name,
            row.product,
            row.quantity,
            row.status,
        )
    }
}
