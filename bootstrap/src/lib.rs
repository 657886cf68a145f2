//! orders-bootstrap - 统一服务启动骨架
//!
//! 配置加载、日志、基础设施、健康检查与 HTTP 服务的启动逻辑

mod health;
mod infrastructure;
mod recorder;
mod retry;
mod runtime;
mod starter;

pub use health::*;
pub use infrastructure::*;
pub use recorder::*;
pub use retry::*;
pub use runtime::*;
pub use starter::*;
