//! Metrics 模块
//!
//! Prometheus 记录器以及服务内使用的指标名称

use std::time::Duration;

use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::PrometheusHandle;
use orders_telemetry::{TelemetryError, init_metrics};
use tokio::task::JoinHandle;
use tracing::debug;

use crate::infrastructure::Infrastructure;

/// Metrics 记录器
pub struct MetricsRecorder {
    handle: PrometheusHandle,
}

impl MetricsRecorder {
    /// 安装全局 Prometheus 记录器，每个进程只能调用一次
    pub fn install() -> Result<Self, TelemetryError> {
        Ok(Self {
            handle: init_metrics()?,
        })
    }

    /// 使用已有的 handle，不安装全局记录器
    pub fn from_handle(handle: PrometheusHandle) -> Self {
        Self { handle }
    }

    /// 获取 Prometheus 格式的 metrics
    pub fn render(&self) -> String {
        self.handle.render()
    }
}

/// 记录 GraphQL 请求
///
/// 标签只接受 `'static` 字符串，调用方需先把请求映射到固定的操作集合，
/// 客户端传入的 `operationName` 不能直接作为标签。
pub fn record_graphql_request(operation: &'static str, status: &'static str, duration: Duration) {
    let labels = [("operation", operation), ("status", status)];

    counter!("graphql_requests_total", &labels).increment(1);
    histogram!("graphql_request_duration_ms", &labels).record(duration.as_secs_f64() * 1000.0);
}

/// 记录数据库查询
pub fn record_db_query(operation: &str, table: &str, duration: Duration, success: bool) {
    let labels = [
        ("operation", operation.to_string()),
        ("table", table.to_string()),
        ("success", success.to_string()),
    ];

    counter!("db_queries_total", &labels).increment(1);
    histogram!("db_query_duration_ms", &labels).record(duration.as_secs_f64() * 1000.0);
}

/// 记录新建订单
pub fn record_order_created() {
    counter!("orders_created_total").increment(1);
}

/// 定期采集连接池指标，内存存储时不启动
pub fn spawn_pool_metrics(infra: Infrastructure, interval: Duration) -> Option<JoinHandle<()>> {
    infra.pool_status()?;

    Some(tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        loop {
            ticker.tick().await;
            if let Some(status) = infra.pool_status() {
                gauge!("connection_pool_size", "pool" => "postgres").set(status.size as f64);
                gauge!("connection_pool_idle", "pool" => "postgres").set(status.idle as f64);
                debug!(size = status.size, idle = status.idle, "Pool metrics collected");
            }
        }
    }))
}
