//! PostgreSQL repository implementation

use std::time::Instant;

use async_trait::async_trait;
use orders_bootstrap::record_db_query;
use orders_errors::{AppError, AppResult};
use sqlx::PgPool;

use crate::domain::entities::{NewOrder, Order};
use crate::domain::repositories::OrderRepository;
use crate::domain::value_objects::OrderId;

use super::rows::OrderRow;

const TABLE: &str = "orders";

pub struct PostgresOrderRepository {
    pool: PgPool,
}

impl PostgresOrderRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OrderRepository for PostgresOrderRepository {
    async fn list(&self) -> AppResult<Vec<Order>> {
        let started = Instant::now();
        let result = sqlx::query_as::<_, OrderRow>(
            r#"
            SELECT id, customer_name, product, quantity, status
            FROM orders
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await;
        record_db_query("select", TABLE, started.elapsed(), result.is_ok());

        let rows = result.map_err(|e| AppError::database(format!("查询订单列表失败: {}", e)))?;
        Ok(rows.into_iter().map(Order::from).collect())
    }

    async fn find_by_id(&self, id: OrderId) -> AppResult<Option<Order>> {
        let started = Instant::now();
        let result = sqlx::query_as::<_, OrderRow>(
            r#"
            SELECT id, customer_name, product, quantity, status
            FROM orders
            WHERE id = $1
            "#,
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await;
        record_db_query("select_by_id", TABLE, started.elapsed(), result.is_ok());

        let row = result.map_err(|e| AppError::database(format!("查询订单失败: {}", e)))?;
        Ok(row.map(Order::from))
    }

    async fn save(&self, order: NewOrder) -> AppResult<Order> {
        let started = Instant::now();
        let result = sqlx::query_as::<_, OrderRow>(
            r#"
            INSERT INTO orders (customer_name, product, quantity, status)
            VALUES ($1, $2, $3, $4)
            RETURNING id, customer_name, product, quantity, status
            "#,
        )
        .bind(&order.customer_name)
        .bind(&order.product)
        .bind(order.quantity)
        .bind(&order.status)
        .fetch_one(&self.pool)
        .await;
        record_db_query("insert", TABLE, started.elapsed(), result.is_ok());

        let row = result.map_err(|e| AppError::database(format!("保存订单失败: {}", e)))?;
        Ok(row.into())
    }
}
