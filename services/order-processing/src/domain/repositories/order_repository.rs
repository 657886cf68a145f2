//! 订单仓储接口

use async_trait::async_trait;
use orders_errors::AppResult;

use crate::domain::entities::{NewOrder, Order};
use crate::domain::value_objects::OrderId;

/// 订单仓储接口
///
/// 实现方负责分配 ID；除此之外不附加任何约束。
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// 全部订单，顺序由实现决定
    async fn list(&self) -> AppResult<Vec<Order>>;

    /// 根据 ID 查找订单
    async fn find_by_id(&self, id: OrderId) -> AppResult<Option<Order>>;

    /// 保存新订单，返回带 ID 的存储形式
    async fn save(&self, order: NewOrder) -> AppResult<Order>;
}
