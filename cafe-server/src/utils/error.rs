//! 统一错误处理
//!
//! 提供应用级错误类型和响应结构：
//! - [`AppError`] - 应用错误枚举
//! - [`AppResponse`] - 创建/更新接口的统一响应信封
//!
//! # 响应信封规范
//!
//! | status | 含义 | HTTP |
//! |--------|------|------|
//! | success | 操作成功 | 201 |
//! | conflict | 唯一性冲突 (邮箱重复) | 200 |
//! | error | 存储层写入失败 | 500 |
//!
//! # 使用示例
//!
//! ```ignore
//! // 返回错误
//! Err(AppError::not_found("Cafe not found"))
//!
//! // 返回成功信封
//! Ok(created(cafe, "Cafe added successfully."))
//! ```

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

/// 创建/更新接口的统一响应信封
///
/// ```json
/// {
///   "status": "success",
///   "message": "Cafe added successfully.",
///   "data": { ... }
/// }
/// ```
///
/// `details` 只在存储层写入失败时出现，携带底层错误信息。
#[derive(Debug, Serialize)]
pub struct AppResponse<T> {
    /// success | conflict | error
    pub status: &'static str,
    /// 消息
    pub message: String,
    /// 失败详情 (仅 error)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    /// 提交/返回的记录
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> AppResponse<T> {
    /// 成功信封
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            status: "success",
            message: message.into(),
            details: None,
            data: Some(data),
        }
    }

    /// 冲突信封 (不是 HTTP 错误，随 200 返回)
    pub fn conflict(data: T, message: impl Into<String>) -> Self {
        Self {
            status: "conflict",
            message: message.into(),
            details: None,
            data: Some(data),
        }
    }

    /// 错误信封，回显提交的记录并携带底层错误详情
    pub fn error(data: T, message: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            status: "error",
            message: message.into(),
            details: Some(details.into()),
            data: Some(data),
        }
    }
}

/// 应用错误枚举
///
/// | 分类 | 说明 |
/// |------|------|
/// | 业务逻辑错误 | 资源不存在、验证失败、无效请求 |
/// | 系统错误 | ID 生成耗尽等内部错误 |
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Resource not found: {0}")]
    /// 资源不存在 (404)
    NotFound(String),

    #[error("Validation failed: {0}")]
    /// 验证失败 (400)
    Validation(String),

    #[error("Invalid request: {0}")]
    /// 无效请求，如路径/载荷 ID 不一致 (400)
    Invalid(String),

    #[error("Internal server error: {0}")]
    /// 内部错误 (500)
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.as_str()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.as_str()),
            AppError::Invalid(msg) => (StatusCode::BAD_REQUEST, msg.as_str()),
            AppError::Internal(msg) => {
                error!(target: "internal", error = %msg, "Internal error occurred");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        let body = Json(AppResponse::<()> {
            status: "error",
            message: message.to_string(),
            details: None,
            data: None,
        });

        (status, body).into_response()
    }
}

// ========== Helper Constructors ==========

impl AppError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::Invalid(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

// ========== Helper functions ==========

/// Create a 201 response with a success envelope
pub fn created<T: Serialize>(
    data: T,
    message: impl Into<String>,
) -> (StatusCode, Json<AppResponse<T>>) {
    (
        StatusCode::CREATED,
        Json(AppResponse::success(data, message)),
    )
}

/// Create a 200 response with a conflict envelope
pub fn conflict<T: Serialize>(data: T, message: impl Into<String>) -> Json<AppResponse<T>> {
    Json(AppResponse::conflict(data, message))
}

/// Create a 500 response with an error envelope echoing the submitted record
pub fn storage_error<T: Serialize>(
    data: T,
    message: impl Into<String>,
    details: impl Into<String>,
) -> (StatusCode, Json<AppResponse<T>>) {
    let message = message.into();
    let details = details.into();
    error!(target: "store", error = %details, "Store write failed");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(AppResponse::error(data, message, details)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope_shape() {
        let envelope = AppResponse::success("record", "Added.");
        let json = serde_json::to_value(&envelope).unwrap();

        assert_eq!(json["status"], "success");
        assert_eq!(json["message"], "Added.");
        assert_eq!(json["data"], "record");
        assert!(json.get("details").is_none()); // 成功时不序列化 details
    }

    #[test]
    fn test_error_envelope_carries_details_and_data() {
        let envelope = AppResponse::error("record", "Save failed.", "row vanished");
        let json = serde_json::to_value(&envelope).unwrap();

        assert_eq!(json["status"], "error");
        assert_eq!(json["details"], "row vanished");
        assert_eq!(json["data"], "record");
    }

    #[test]
    fn test_conflict_envelope_status() {
        let envelope = AppResponse::conflict((), "Duplicate email.");
        let json = serde_json::to_value(&envelope).unwrap();

        assert_eq!(json["status"], "conflict");
    }
}
