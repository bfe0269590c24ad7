//! Infrastructure Layer - 基础设施层
//!
//! 对外暴露领域运算的 HTTP 适配

pub mod http;

pub use http::{AppState, HttpServer};
