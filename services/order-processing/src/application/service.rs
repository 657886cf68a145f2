//! 订单业务逻辑
//!
//! 唯一的业务规则：新订单状态固定为 `CREATED`。其余操作直接委托给仓储。

use std::sync::Arc;

use orders_bootstrap::record_order_created;
use orders_errors::AppResult;
use tracing::{debug, info};

use crate::domain::entities::{NewOrder, Order};
use crate::domain::repositories::OrderRepository;
use crate::domain::value_objects::OrderId;

use super::commands::CreateOrderCommand;

pub struct OrderService {
    order_repo: Arc<dyn OrderRepository>,
}

impl OrderService {
    pub fn new(order_repo: Arc<dyn OrderRepository>) -> Self {
        Self { order_repo }
    }

    /// 创建订单
    pub async fn create_order(&self, cmd: CreateOrderCommand) -> AppResult<Order> {
        let new_order = NewOrder::created(cmd.customer_name, cmd.product, cmd.quantity);
        let order = self.order_repo.save(new_order).await?;

        record_order_created();
        info!(
            order_id = %order.id(),
            customer_name = %order.customer_name(),
            product = %order.product(),
            quantity = order.quantity(),
            "Order created"
        );

        Ok(order)
    }

    /// 全部订单
    pub async fn get_orders(&self) -> AppResult<Vec<Order>> {
        let orders = self.order_repo.list().await?;
        debug!(count = orders.len(), "Orders listed");
        Ok(orders)
    }

    /// 按 ID 查询订单，不存在时返回 `None`
    pub async fn get_order_by_id(&self, id: OrderId) -> AppResult<Option<Order>> {
        let order = self.order_repo.find_by_id(id).await?;
        debug!(order_id = %id, found = order.is_some(), "Order lookup");
        Ok(order)
    }
}
