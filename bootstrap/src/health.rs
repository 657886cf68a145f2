//! 健康检查模块
//!
//! 提供 /health、/ready 和 /metrics 端点

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use orders_adapter_postgres::check_connection;
use serde::Serialize;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use crate::infrastructure::Infrastructure;
use crate::recorder::MetricsRecorder;

/// 健康检查状态
#[derive(Debug, Clone, Serialize)]
pub struct HealthStatus {
    pub status: String,
    pub checks: Vec<ComponentHealth>,
}

/// 组件健康状态
#[derive(Debug, Clone, Serialize)]
pub struct ComponentHealth {
    pub name: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl HealthStatus {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            checks: vec![],
        }
    }

    pub fn add_check(&mut self, check: ComponentHealth) {
        if check.status != "healthy" {
            self.status = "unhealthy".to_string();
        }
        self.checks.push(check);
    }

    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

impl ComponentHealth {
    pub fn healthy(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: "healthy".to_string(),
            message: None,
        }
    }

    pub fn unhealthy(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: "unhealthy".to_string(),
            message: Some(message.into()),
        }
    }
}

/// 健康检查器
pub struct HealthChecker {
    infra: Infrastructure,
}

impl HealthChecker {
    pub fn new(infra: Infrastructure) -> Self {
        Self { infra }
    }

    /// 存活检查：只确认进程在运行
    pub async fn liveness(&self) -> HealthStatus {
        HealthStatus::healthy()
    }

    /// 就绪检查：确认存储后端可用
    pub async fn readiness(&self) -> HealthStatus {
        let mut status = HealthStatus::healthy();

        match self.infra.postgres_pool() {
            Some(pool) => match check_connection(&pool).await {
                Ok(()) => status.add_check(ComponentHealth::healthy("postgres")),
                Err(e) => status.add_check(ComponentHealth::unhealthy("postgres", e.to_string())),
            },
            None => status.add_check(ComponentHealth::healthy("memory")),
        }

        status
    }
}

// ============================================================================
// HTTP 健康检查服务器
// ============================================================================

#[derive(Clone)]
struct HealthServerState {
    checker: Arc<HealthChecker>,
    metrics: Arc<MetricsRecorder>,
}

/// HTTP 健康检查服务器
pub struct HealthServer {
    checker: Arc<HealthChecker>,
    metrics: Arc<MetricsRecorder>,
    host: String,
    port: u16,
}

impl HealthServer {
    /// `host` 与 API 服务使用同一个监听地址
    pub fn new(
        checker: HealthChecker,
        metrics: Arc<MetricsRecorder>,
        host: impl Into<String>,
        port: u16,
    ) -> Self {
        Self {
            checker: Arc::new(checker),
            metrics,
            host: host.into(),
            port,
        }
    }

    /// 绑定监听端口
    pub async fn bind(&self) -> Result<TcpListener, std::io::Error> {
        TcpListener::bind((self.host.as_str(), self.port)).await
    }

    /// 启动 HTTP 服务器
    pub async fn serve(self) -> Result<(), std::io::Error> {
        let listener = self.bind().await?;
        let state = HealthServerState {
            checker: self.checker,
            metrics: self.metrics,
        };

        let app = Router::new()
            .route("/health", get(health_handler))
            .route("/ready", get(ready_handler))
            .route("/metrics", get(metrics_handler))
            .with_state(state);

        info!(addr = %listener.local_addr()?, "Health check HTTP server starting");

        axum::serve(listener, app).await
    }
}

async fn health_handler(State(state): State<HealthServerState>) -> impl IntoResponse {
    let status = state.checker.liveness().await;
    (StatusCode::OK, Json(status))
}

async fn ready_handler(State(state): State<HealthServerState>) -> impl IntoResponse {
    let status = state.checker.readiness().await;
    let code = if status.is_healthy() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (code, Json(status))
}

async fn metrics_handler(State(state): State<HealthServerState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [("content-type", "text/plain; charset=utf-8")],
        state.metrics.render(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use orders_config::{AppConfig, ServerConfig, StorageConfig, TelemetryConfig};

    fn memory_config() -> AppConfig {
        AppConfig {
            app_name: "order-processing".to_string(),
            app_env: "test".to_string(),
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
                health_port: None,
            },
            storage: StorageConfig::default(),
            database: None,
            telemetry: TelemetryConfig::default(),
        }
    }

    #[tokio::test]
    async fn test_readiness_with_memory_backend() {
        let checker = HealthChecker::new(Infrastructure::in_memory(memory_config()));

        let status = checker.readiness().await;
        assert!(status.is_healthy());
        assert_eq!(status.checks[0].name, "memory");
        assert!(checker.liveness().await.is_healthy());
    }

    #[tokio::test]
    async fn test_health_server_binds_configured_host() {
        let infra = Infrastructure::in_memory(memory_config());
        let metrics = Arc::new(MetricsRecorder::from_handle(
            metrics_exporter_prometheus::PrometheusBuilder::new()
                .build_recorder()
                .handle(),
        ));
        let server = HealthServer::new(HealthChecker::new(infra), metrics, "127.0.0.1", 0);

        let listener = server.bind().await.unwrap();
        let addr = listener.local_addr().unwrap();
        assert!(addr.ip().is_loopback());
        assert_ne!(addr.port(), 0);
    }

    #[test]
    fn test_failed_check_marks_status_unhealthy() {
        let mut status = HealthStatus::healthy();
        status.add_check(ComponentHealth::healthy("memory"));
        assert!(status.is_healthy());

        status.add_check(ComponentHealth::unhealthy("postgres", "connection refused"));
        assert!(!status.is_healthy());
        assert_eq!(status.checks.len(), 2);
    }

    #[test]
    fn test_health_status_serialization() {
        let mut status = HealthStatus::healthy();
        status.add_check(ComponentHealth::healthy("memory"));

        let json = serde_json::to_value(&status).unwrap();
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["checks"][0]["name"], "memory");
        assert!(json["checks"][0].get("message").is_none());
    }
}
