//! 服务启动器
//!
//! 提供统一的 HTTP 服务启动模式

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use orders_config::AppConfig;
use orders_errors::AppResult;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::health::{HealthChecker, HealthServer};
use crate::infrastructure::Infrastructure;
use crate::recorder::{MetricsRecorder, spawn_pool_metrics};
use crate::runtime::{init_runtime, shutdown_signal};

const POOL_METRICS_INTERVAL: Duration = Duration::from_secs(15);

/// 运行 HTTP 服务
///
/// 所有服务的统一入口点：
/// 1. 加载配置
/// 2. 初始化日志
/// 3. 安装 Prometheus 记录器
/// 4. 创建基础设施资源（数据库，带重试）
/// 5. 启动健康检查 HTTP 服务器和连接池指标采集
/// 6. 调用 `router_builder` 构建业务路由
/// 7. 启动服务器并处理 graceful shutdown
///
/// # 示例
///
/// ```ignore
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     run_server("config", |infra| async move {
///         Ok(Router::new().route("/", get(|| async { "ok" })))
///     })
///     .await
/// }
/// ```
pub async fn run_server<F, Fut>(
    config_dir: &str,
    router_builder: F,
) -> Result<(), Box<dyn std::error::Error>>
where
    F: FnOnce(Infrastructure) -> Fut,
    Fut: Future<Output = AppResult<Router>>,
{
    let config = AppConfig::load(config_dir)?;

    init_runtime(&config)?;

    info!("Starting {} service", config.app_name);

    let metrics = Arc::new(MetricsRecorder::install()?);

    let infra = Infrastructure::from_config(config.clone()).await?;

    let pool_metrics_handle = spawn_pool_metrics(infra.clone(), POOL_METRICS_INTERVAL);

    let health_server = HealthServer::new(
        HealthChecker::new(infra.clone()),
        metrics,
        config.server.host.clone(),
        config.server.health_port(),
    );
    let health_handle = tokio::spawn(async move {
        if let Err(e) = health_server.serve().await {
            error!("Health server error: {}", e);
        }
    });

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;

    let router = router_builder(infra.clone())
        .await?
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    info!(%addr, "HTTP server starting");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    health_handle.abort();
    if let Some(handle) = pool_metrics_handle {
        handle.abort();
    }
    infra.close().await;

    info!("Service stopped");

    Ok(())
}
