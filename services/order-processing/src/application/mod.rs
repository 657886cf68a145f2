//! Application layer

pub mod commands;
pub mod service;

pub use commands::*;
pub use service::OrderService;
