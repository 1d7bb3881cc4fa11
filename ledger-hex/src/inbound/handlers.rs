//! HTTP request handlers.

use std::sync::Arc;

use async_graphql::http::GraphiQLSource;
use axum::{
    Json,
    extract::State,
    response::{Html, IntoResponse},
};

use super::schema::LedgerSchema;

/// Application state shared across handlers.
pub struct AppState {
    pub schema: LedgerSchema,
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}

/// Executes a GraphQL request.
#[tracing::instrument(skip_all, fields(operation = req.operation_name.as_deref().unwrap_or("")))]
pub async fn graphql(
    State(state): State<Arc<AppState>>,
    Json(req): Json<async_graphql::Request>,
) -> Json<async_graphql::Response> {
    let resp = state.schema.execute(req).await;
    if resp.is_err() {
        tracing::debug!(errors = resp.errors.len(), "GraphQL request returned errors");
    }
    Json(resp)
}

/// GraphiQL playground pointed at the GraphQL endpoint.
pub async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}

/// Schema definition in SDL form.
pub async fn schema_sdl(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    state.schema.sdl()
}
