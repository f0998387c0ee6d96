//! Route table and application assembly.

use crate::handlers::{create, delete as delete_handler, list, toggle, update};
use crate::state::AppState;
use axum::{
    routing::{get, patch, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

/// The five todo operations. Mounted under `/api` by [`app`].
pub fn todo_routes(state: AppState) -> Router {
    Router::new()
        .route("/todos", get(list).post(create))
        .route("/todos/:id", put(update).delete(delete_handler))
        .route("/todos/:id/toggle", patch(toggle))
        .with_state(state)
}

/// Full application: the API under `/api`, the static landing page as
/// fallback, request tracing and permissive CORS over everything.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .nest("/api", todo_routes(state))
        .fallback_service(ServeDir::new("public"))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::postgres::PgPoolOptions;

    // Lazy pool construction still spawns maintenance tasks, so this needs
    // the runtime even though no connection is opened.
    #[tokio::test]
    async fn router_builds() {
        let pool = PgPoolOptions::new()
            .connect_lazy("postgres://localhost/todos")
            .unwrap();
        let _router = app(AppState { pool });
    }
}
