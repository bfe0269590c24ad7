//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// 服务元数据（health / info 端点展示）
    #[serde(default)]
    pub service: ServiceConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,

    /// 调试模式：提升日志级别，500 响应中附带 panic 信息
    #[serde(default)]
    pub debug: bool,

    /// 请求体大小上限（字节）
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_max_body_bytes() -> usize {
    64 * 1024 // 64 KB，echo 足够
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            debug: false,
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

impl ServerConfig {
    /// 获取服务器地址
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 服务元数据
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    /// 展示名称
    #[serde(default = "default_service_name")]
    pub name: String,

    /// 服务标识
    #[serde(default = "default_service_id")]
    pub id: String,

    #[serde(default = "default_service_description")]
    pub description: String,

    /// 运行环境（development / staging / production）
    #[serde(default = "default_environment")]
    pub environment: String,
}

fn default_service_name() -> String {
    "Calc Service".to_string()
}

fn default_service_id() -> String {
    "calc-service".to_string()
}

fn default_service_description() -> String {
    "Educational arithmetic JSON API".to_string()
}

fn default_environment() -> String {
    "development".to_string()
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            name: default_service_name(),
            id: default_service_id(),
            description: default_service_description(),
            environment: default_environment(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

impl LogConfig {
    /// 实际生效的日志级别：调试模式下至少为 debug（级别名不区分大小写）
    pub fn effective_level(&self, debug: bool) -> &str {
        let coarse = ["info", "warn", "error"]
            .iter()
            .any(|level| self.level.eq_ignore_ascii_case(level));
        if debug && coarse {
            "debug"
        } else {
            &self.level
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 5000);
        assert!(!config.server.debug);
        assert_eq!(config.service.environment, "development");
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn test_server_addr() {
        let config = ServerConfig::default();
        assert_eq!(config.addr(), "127.0.0.1:5000");
    }

    #[test]
    fn test_effective_log_level() {
        let log = LogConfig::default();
        assert_eq!(log.effective_level(false), "info");
        assert_eq!(log.effective_level(true), "debug");

        let trace = LogConfig {
            level: "trace".to_string(),
            json: false,
        };
        assert_eq!(trace.effective_level(true), "trace");

        let upper = LogConfig {
            level: "INFO".to_string(),
            json: false,
        };
        assert_eq!(upper.effective_level(true), "debug");
        assert_eq!(upper.effective_level(false), "INFO");
    }
}
