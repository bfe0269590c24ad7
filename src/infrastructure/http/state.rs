//! Application State
//!
//! 启动时构建一次，所有请求只读共享

use std::time::Instant;

use crate::config::{AppConfig, ServiceConfig};

/// 应用状态
pub struct AppState {
    pub service: ServiceConfig,
    pub debug: bool,
    pub started_at: Instant,
}

impl AppState {
    /// 创建应用状态
    pub fn new(service: ServiceConfig, debug: bool) -> Self {
        Self {
            service,
            debug,
            started_at: Instant::now(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.service.clone(), config.server.debug)
    }

    /// 服务已运行秒数
    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ServiceConfig::default(), false)
    }
}
