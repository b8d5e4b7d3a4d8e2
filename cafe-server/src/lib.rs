//! Cafe Admin Server - 咖啡馆/员工管理后台 API
//!
//! # 架构概述
//!
//! 本模块是 Cafe Admin Server 的主入口，提供以下核心功能：
//!
//! - **内存存储** (`store`): 按主键索引的 Cafe/Employee 集合，启动时填充示例数据
//! - **投影** (`projection`): 跨集合派生字段 (employeeCount / cafeName / daysWorked)
//! - **ID 生成** (`idgen`): `UI` + 7 位字母数字的员工编号
//! - **HTTP API** (`routes` / `handler`): RESTful CRUD 接口
//!
//! # 模块结构
//!
//! ```text
//! cafe-server/src/
//! ├── core/          # 配置、状态、服务器
//! ├── models/        # 实体与投影输出
//! ├── store/         # 内存存储与示例数据
//! ├── projection.rs  # 派生字段计算
//! ├── idgen.rs       # 员工 ID 生成
//! ├── routes/        # HTTP 路由
//! ├── handler/       # HTTP 处理器
//! └── utils/         # 错误、日志、验证、业务时区
//! ```

pub mod core;
pub mod handler;
pub mod idgen;
pub mod models;
pub mod projection;
pub mod routes;
pub mod store;
pub mod utils;

// Re-export 公共类型
pub use core::{Config, Server, ServerState};
pub use models::{Cafe, Employee, Gender};
pub use routes::{OneshotRouter, build_app, build_router};
pub use utils::{AppError, AppResponse, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// 设置运行环境 (dotenv + 日志)
pub fn setup_environment() {
    dotenv::dotenv().ok();

    let log_level = std::env::var("LOG_LEVEL").ok();
    let log_dir = std::env::var("LOG_DIR").ok();
    init_logger_with_file(log_level.as_deref(), log_dir.as_deref());
}

pub fn print_banner() {
    println!(
        r#"
   ______      ____
  / ____/___ _/ __/__
 / /   / __ `/ /_/ _ \
/ /___/ /_/ / __/  __/
\____/\__,_/_/  \___/
    ___       __          _
   /   | ____/ /___ ___  (_)___
  / /| |/ __  / __ `__ \/ / __ \
 / ___ / /_/ / / / / / / / / / /
/_/  |_\__,_/_/ /_/ /_/_/_/ /_/
    "#
    );
}
