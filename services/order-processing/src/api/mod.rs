//! API layer - GraphQL schema and HTTP routes

mod graphql;
mod objects;
mod routes;

pub use graphql::{OrderMutation, OrderQuery, OrderSchema, build_schema};
pub use objects::OrderObject;
pub use routes::{GRAPHQL_PATH, router};
