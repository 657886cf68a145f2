//! 实体模块

mod order;

pub use order::{NewOrder, ORDER_STATUS_CREATED, Order};
