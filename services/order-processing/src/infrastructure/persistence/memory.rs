//! 内存仓储实现
//!
//! 用于开发环境和测试；进程退出后数据丢失。

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use orders_errors::AppResult;
use tokio::sync::RwLock;

use crate::domain::entities::{NewOrder, Order};
use crate::domain::repositories::OrderRepository;
use crate::domain::value_objects::OrderId;

/// 以 ID 排序保存订单，ID 从 1 开始递增
pub struct InMemoryOrderRepository {
    orders: RwLock<BTreeMap<OrderId, Order>>,
    sequence: AtomicI64,
}

impl InMemoryOrderRepository {
    pub fn new() -> Self {
        Self {
            orders: RwLock::new(BTreeMap::new()),
            sequence: AtomicI64::new(1),
        }
    }

    fn next_id(&self) -> OrderId {
        OrderId(self.sequence.fetch_add(1, Ordering::SeqCst))
    }
}

impl Default for InMemoryOrderRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn list(&self) -> AppResult<Vec<Order>> {
        Ok(self.orders.read().await.values().cloned().collect())
    }

    async fn find_by_id(&self, id: OrderId) -> AppResult<Option<Order>> {
        Ok(self.orders.read().await.get(&id).cloned())
    }

    async fn save(&self, order: NewOrder) -> AppResult<Order> {
        let order = order.into_order(self.next_id());
        self.orders.write().await.insert(order.id(), order.clone());
        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_save_assigns_sequential_ids() {
        let repo = InMemoryOrderRepository::new();

        let first = repo.save(NewOrder::created("Alice", "Widget", 3)).await.unwrap();
        let second = repo.save(NewOrder::created("Bob", "Gadget", 1)).await.unwrap();

        assert_eq!(first.id(), OrderId(1));
        assert_eq!(second.id(), OrderId(2));
        assert_eq!(repo.find_by_id(OrderId(2)).await.unwrap(), Some(second));
        assert!(repo.find_by_id(OrderId(3)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_concurrent_saves_get_distinct_ids() {
        let repo = Arc::new(InMemoryOrderRepository::new());

        let handles: Vec<_> = (0..32)
            .map(|i| {
                let repo = repo.clone();
                tokio::spawn(async move {
                    repo.save(NewOrder::created(format!("customer-{i}"), "Widget", i))
                        .await
                        .unwrap()
                        .id()
                })
            })
            .collect();

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap());
        }
        ids.sort();
        ids.dedup();

        assert_eq!(ids.len(), 32);
        assert_eq!(repo.list().await.unwrap().len(), 32);
    }
}
