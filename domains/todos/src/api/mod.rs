//! API layer for the Todos domain
//!
//! Contains HTTP handlers, routes, and domain state definition.

pub mod handlers;
pub mod middleware;
pub mod routes;

pub use middleware::TodosState;
pub use routes::routes;
