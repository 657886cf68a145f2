//! Persistence implementations

mod memory;
mod migrations;
mod postgres;
mod rows;

pub use memory::InMemoryOrderRepository;
pub use migrations::order_migrations;
pub use postgres::PostgresOrderRepository;
pub use rows::OrderRow;
