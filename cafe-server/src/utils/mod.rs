//! 工具模块 - 通用工具函数和类型
//!
//! # 内容
//!
//! - [`AppError`] - 应用错误类型
//! - [`AppResponse`] - 创建/更新接口的响应信封
//! - 日志、验证、业务时区等工具

pub mod error;
pub mod logger;
pub mod result;
pub mod time;
pub mod validation;

pub use error::{AppError, AppResponse};
pub use error::{conflict, created, storage_error};
pub use result::AppResult;
