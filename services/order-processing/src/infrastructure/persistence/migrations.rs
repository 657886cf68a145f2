//! 订单表迁移

use orders_adapter_postgres::Migration;

/// 本服务的全部迁移，按版本递增
pub fn order_migrations() -> Vec<Migration> {
    vec![Migration::new(
        1,
        "create_orders",
        r#"
        CREATE TABLE IF NOT EXISTS orders (
            id BIGSERIAL PRIMARY KEY,
            customer_name TEXT NOT NULL,
            product TEXT NOT NULL,
            quantity INTEGER NOT NULL,
            status TEXT NOT NULL
        )
        "#,
    )]
}
