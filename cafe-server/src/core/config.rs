/// 服务器配置
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | HTTP_PORT | 3000 | HTTP 服务端口 |
/// | ENVIRONMENT | development | 运行环境 |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_DIR | (未设置) | 日志文件目录，设置后按天滚动写入 |
/// | CLAMP_MIN_DAYS_WORKED | true | 工龄最小值钳制为 1 天 |
/// | SORT_CAFES_BY_EMPLOYEE_COUNT | true | 咖啡馆列表按员工数降序 |
///
/// # 示例
///
/// ```ignore
/// HTTP_PORT=8080 CLAMP_MIN_DAYS_WORKED=false cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 运行环境: development | staging | production
    pub environment: String,
    /// 日志级别
    pub log_level: String,
    /// 日志文件目录 (可选)
    pub log_dir: Option<String>,

    // === 投影行为开关 (见 projection 模块) ===
    /// daysWorked 最小值钳制为 1 天
    pub clamp_min_days_worked: bool,
    /// 咖啡馆列表按 employeeCount 降序排列
    pub sort_cafes_by_employee_count: bool,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok(),
            clamp_min_days_worked: std::env::var("CLAMP_MIN_DAYS_WORKED")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
            sort_cafes_by_employee_count: std::env::var("SORT_CAFES_BY_EMPLOYEE_COUNT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
        }
    }
}

impl Default for Config {
    /// 固定默认值，不读取环境变量 (测试场景)
    fn default() -> Self {
        Self {
            http_port: 3000,
            environment: "development".into(),
            log_level: "info".into(),
            log_dir: None,
            clamp_min_days_worked: true,
            sort_cafes_by_employee_count: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_follows_clamp_and_sort_variant() {
        let config = Config::default();
        assert!(config.clamp_min_days_worked);
        assert!(config.sort_cafes_by_employee_count);
        assert_eq!(config.http_port, 3000);
    }
}
