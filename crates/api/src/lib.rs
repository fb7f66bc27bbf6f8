//! Passthrough HTTP surface for Easel
//!
//! Routes with no repository behind them: service info, the user-service
//! proxy, and the art-catalog read-through.

pub mod handlers;
pub mod middleware;
pub mod routes;

pub use middleware::ApiState;
pub use routes::routes;
