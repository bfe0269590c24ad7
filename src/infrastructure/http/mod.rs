//! HTTP Layer - JSON API
//!
//! 路由、参数校验、handlers、错误映射与服务器启动

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod params;
pub mod routes;
pub mod server;
pub mod state;

pub use error::ApiError;
pub use routes::create_routes;
pub use server::{build_router, HttpServer};
pub use state::AppState;
