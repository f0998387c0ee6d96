//! Minimal todo REST API backed by PostgreSQL.

pub mod error;
pub mod handlers;
pub mod model;
pub mod routes;
pub mod schema;
pub mod service;
pub mod state;

pub use error::AppError;
pub use model::{CreateTodo, Todo, UpdateTodo};
pub use routes::{app, todo_routes};
pub use schema::{ensure_database_exists, init_schema};
pub use service::TodoService;
pub use state::AppState;
