//! calc-service - 算术运算 JSON API
//!
//! 领域层 (domain/):
//! - Arithmetic Context: 操作数类型与四则运算、平方、绝对值
//! - Parity: 奇偶性与位奇偶性
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: axum 路由、参数校验、统一错误响应
//!
//! 配置 (config/): 默认值 → 配置文件 → 环境变量

pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
