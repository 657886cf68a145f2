//! 仓储接口模块

mod order_repository;

#[cfg(test)]
pub use order_repository::MockOrderRepository;
pub use order_repository::OrderRepository;
