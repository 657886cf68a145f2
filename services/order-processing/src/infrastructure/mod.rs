//! Infrastructure layer

pub mod persistence;

use std::sync::Arc;

use orders_adapter_postgres::MigrationManager;
use orders_bootstrap::Infrastructure;
use orders_config::StorageBackend;
use orders_errors::AppResult;
use tracing::info;

use crate::domain::repositories::OrderRepository;
use persistence::{InMemoryOrderRepository, PostgresOrderRepository, order_migrations};

/// 按配置的存储后端创建订单仓储
///
/// postgres 后端在 `storage.run_migrations` 开启时先执行迁移。
pub async fn build_order_repository(infra: &Infrastructure) -> AppResult<Arc<dyn OrderRepository>> {
    match infra.storage_backend() {
        StorageBackend::Memory => {
            info!("Using in-memory order repository");
            Ok(Arc::new(InMemoryOrderRepository::new()))
        }
        StorageBackend::Postgres => {
            let pool = infra.require_postgres_pool()?;

            if infra.config().storage.run_migrations {
                let report = MigrationManager::new(pool.clone())
                    .migrate(&order_migrations())
                    .await?
                    .into_result()?;
                info!(
                    applied = report.applied.len(),
                    skipped = report.skipped.len(),
                    "Order migrations finished"
                );
            }

            info!("Using PostgreSQL order repository");
            Ok(Arc::new(PostgresOrderRepository::new(pool)))
        }
    }
}
