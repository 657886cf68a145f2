//! 订单实体

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::OrderId;

/// 新建订单的初始状态，目前也是唯一会被写入的状态
pub const ORDER_STATUS_CREATED: &str = "CREATED";

/// 已持久化的订单
///
/// 字段不做任何校验，原样保存调用方给出的值。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    id: OrderId,
    customer_name: String,
    product: String,
    quantity: i32,
    status: String,
}

impl Order {
    /// 从存储中的字段重建订单
    pub fn from_parts(
        id: OrderId,
        customer_name: impl Into<String>,
        product: impl Into<String>,
        quantity: i32,
        status: impl Into<String>,
    ) -> Self {
        Self {
            id,
            customer_name: customer_name.into(),
            product: product.into(),
            quantity,
            status: status.into(),
        }
    }

    // ========== Getters ==========

    pub fn id(&self) -> OrderId {
        self.id
    }

    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    pub fn product(&self) -> &str {
        &self.product
    }

    pub fn quantity(&self) -> i32 {
        self.quantity
    }

    pub fn status(&self) -> &str {
        &self.status
    }
}

/// 尚未分配 ID 的订单
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrder {
    pub customer_name: String,
    pub product: String,
    pub quantity: i32,
    pub status: String,
}

impl NewOrder {
    /// 状态为 `CREATED` 的新订单
    pub fn created(customer_name: impl Into<String>, product: impl Into<String>, quantity: i32) -> Self {
        Self {
            customer_name: customer_name.into(),
            product: product.into(),
            quantity,
            status: ORDER_STATUS_CREATED.to_string(),
        }
    }

    /// 绑定存储层分配的 ID
    pub fn into_order(self, id: OrderId) -> Order {
        Order {
            id,
            customer_name: self.customer_name,
            product: self.product,
            quantity: self.quantity,
            status: self.status,
        }
    }
}
