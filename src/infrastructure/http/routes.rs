//! HTTP Routes
//!
//! API Endpoints:
//! - /                      GET       健康检查
//! - /api/health            GET       详细健康状态
//! - /api/info              GET       应用信息与端点目录
//! - /api/add               GET       a + b
//! - /api/subtract          GET       a - b
//! - /api/multiply          GET       a * b
//! - /api/divide            GET       a / b（浮点）
//! - /api/square            GET       n * n
//! - /api/abs               GET       |n|
//! - /api/parity/{n}        GET       奇偶性
//! - /api/odd_even/{n}      GET       奇偶性（别名）
//! - /api/echo              GET/POST  回显 message
//! - /api/palindrome        GET       回文判断
//! - /api/reverse           GET       字符串反转
//! - /api/sort              POST      数值列表排序

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(handlers::index))
        .nest("/api", api_routes())
        .fallback(handlers::not_found)
}

/// API 路由
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/info", get(handlers::info))
        .merge(math_routes())
        .route("/parity/:n", get(handlers::parity))
        .route("/odd_even/:n", get(handlers::odd_even))
        .route("/echo", get(handlers::echo_query).post(handlers::echo_body))
        .route("/palindrome", get(handlers::palindrome))
        .route("/reverse", get(handlers::reverse))
        .route("/sort", post(handlers::sort))
}

/// 算术路由
fn math_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/add", get(handlers::add))
        .route("/subtract", get(handlers::subtract))
        .route("/multiply", get(handlers::multiply))
        .route("/divide", get(handlers::divide))
        .route("/square", get(handlers::square))
        .route("/abs", get(handlers::absolute_value))
}
