//! Health / Info Handlers

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::infrastructure::http::dto::{
    current_timestamp, EndpointInfo, EndpointMethods, HealthResponse, InfoResponse,
    StatusResponse,
};
use crate::infrastructure::http::state::AppState;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// 端点目录（`/api/info` 展示）
pub const ENDPOINTS: &[EndpointInfo] = &[
    EndpointInfo {
        path: "/",
        method: EndpointMethods::One("GET"),
        description: "Health check",
    },
    EndpointInfo {
        path: "/api/health",
        method: EndpointMethods::One("GET"),
        description: "Detailed health",
    },
    EndpointInfo {
        path: "/api/info",
        method: EndpointMethods::One("GET"),
        description: "App info",
    },
    EndpointInfo {
        path: "/api/add?a=<int>&b=<int>",
        method: EndpointMethods::One("GET"),
        description: "Add numbers",
    },
    EndpointInfo {
        path: "/api/subtract?a=<int>&b=<int>",
        method: EndpointMethods::One("GET"),
        description: "Subtract numbers",
    },
    EndpointInfo {
        path: "/api/multiply?a=<int>&b=<int>",
        method: EndpointMethods::One("GET"),
        description: "Multiply numbers",
    },
    EndpointInfo {
        path: "/api/divide?a=<int>&b=<int>",
        method: EndpointMethods::One("GET"),
        description: "Divide numbers",
    },
    EndpointInfo {
        path: "/api/square?n=<int>",
        method: EndpointMethods::One("GET"),
        description: "Square number",
    },
    EndpointInfo {
        path: "/api/abs?n=<int>",
        method: EndpointMethods::One("GET"),
        description: "Absolute value",
    },
    EndpointInfo {
        path: "/api/parity/<n>",
        method: EndpointMethods::One("GET"),
        description: "Check even/odd",
    },
    EndpointInfo {
        path: "/api/odd_even/<n>",
        method: EndpointMethods::One("GET"),
        description: "Check even/odd (alias)",
    },
    EndpointInfo {
        path: "/api/echo",
        method: EndpointMethods::Many(&["GET", "POST"]),
        description: "Echo data",
    },
    EndpointInfo {
        path: "/api/palindrome?text=<str>",
        method: EndpointMethods::One("GET"),
        description: "Check palindrome",
    },
    EndpointInfo {
        path: "/api/reverse?text=<str>",
        method: EndpointMethods::One("GET"),
        description: "Reverse string",
    },
    EndpointInfo {
        path: "/api/sort",
        method: EndpointMethods::One("POST"),
        description: "Sort numbers",
    },
];

/// 根路径健康检查
pub async fn index(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "healthy",
        message: format!("{} is running!", state.service.name),
        timestamp: current_timestamp(),
    })
}

/// 详细健康检查
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: state.service.id.clone(),
        version: VERSION,
        message: "Application is operational",
        environment: state.service.environment.clone(),
        uptime_seconds: state.uptime_seconds(),
        timestamp: current_timestamp(),
    })
}

/// 应用信息与端点目录
pub async fn info(State(state): State<Arc<AppState>>) -> Json<InfoResponse> {
    Json(InfoResponse {
        app_name: state.service.name.clone(),
        version: VERSION,
        description: state.service.description.clone(),
        endpoints: ENDPOINTS.to_vec(),
        timestamp: current_timestamp(),
    })
}
