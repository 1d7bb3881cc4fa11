//! GraphQL Inbound Adapter
//!
//! Axum-based HTTP server hosting the async-graphql schema.

mod handlers;
mod schema;
mod server;

pub use handlers::AppState;
pub use schema::{ApiError, LedgerSchema, MutationRoot, QueryRoot, build_schema};
pub use server::HttpServer;
