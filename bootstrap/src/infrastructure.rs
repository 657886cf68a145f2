//! 基础设施资源管理
//!
//! 按配置的存储后端初始化外部资源（目前只有 PostgreSQL 连接池）

use orders_adapter_postgres::{PostgresConfig, create_pool};
use orders_config::{AppConfig, DatabaseConfig, StorageBackend};
use orders_errors::{AppError, AppResult};
use secrecy::ExposeSecret;
use sqlx::PgPool;
use tracing::info;

use crate::retry::{RetryConfig, with_retry};

/// 连接池状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolStatus {
    pub size: u32,
    pub idle: usize,
}

/// 由 `[database]` 配置生成连接池参数
pub fn postgres_config(database: &DatabaseConfig) -> PostgresConfig {
    PostgresConfig::new(database.url.expose_secret(), database.max_connections)
        .with_min_connections(database.min_connections)
        .with_acquire_timeout(database.connect_timeout())
        .with_idle_timeout(database.idle_timeout())
}

/// 基础设施资源容器
///
/// 克隆开销很小：`PgPool` 内部是引用计数。
#[derive(Clone)]
pub struct Infrastructure {
    config: AppConfig,
    postgres_pool: Option<PgPool>,
}

impl Infrastructure {
    /// 从配置创建基础设施资源（带重试）
    pub async fn from_config(config: AppConfig) -> AppResult<Self> {
        let postgres_pool = match config.storage.backend {
            StorageBackend::Memory => {
                info!("In-memory storage selected, skipping PostgreSQL");
                None
            }
            StorageBackend::Postgres => {
                let database = config.database.as_ref().ok_or_else(|| {
                    AppError::configuration("postgres backend requires [database] settings")
                })?;

                let pg_config = postgres_config(database);
                let pool = with_retry(&RetryConfig::default(), "PostgreSQL connection", || {
                    let cfg = pg_config.clone();
                    async move { create_pool(&cfg).await }
                })
                .await?;
                info!(
                    max_connections = database.max_connections,
                    "PostgreSQL connection pool created"
                );
                Some(pool)
            }
        };

        Ok(Self {
            config,
            postgres_pool,
        })
    }

    /// 不连接任何外部资源的基础设施（内存存储）
    pub fn in_memory(config: AppConfig) -> Self {
        Self {
            config,
            postgres_pool: None,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn storage_backend(&self) -> StorageBackend {
        self.config.storage.backend
    }

    pub fn postgres_pool(&self) -> Option<PgPool> {
        self.postgres_pool.clone()
    }

    /// postgres 后端下获取连接池，未初始化时报错
    pub fn require_postgres_pool(&self) -> AppResult<PgPool> {
        self.postgres_pool()
            .ok_or_else(|| AppError::configuration("PostgreSQL pool is not initialized"))
    }

    pub fn pool_status(&self) -> Option<PoolStatus> {
        self.postgres_pool.as_ref().map(|pool| PoolStatus {
            size: pool.size(),
            idle: pool.num_idle(),
        })
    }

    /// 关闭连接池
    pub async fn close(&self) {
        if let Some(pool) = &self.postgres_pool {
            pool.close().await;
            info!("PostgreSQL connection pool closed");
        }
    }
}
