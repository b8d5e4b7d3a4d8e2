//! 时间工具函数 — 业务时区转换
//!
//! 工龄 (daysWorked) 按固定业务时区 (UTC+8) 的"今天"计算，
//! 与服务器所在时区无关。

use chrono::NaiveDate;
use chrono_tz::Tz;

use super::{AppError, AppResult};

/// 业务时区 — 新加坡 (UTC+8)
pub const BUSINESS_TZ: Tz = chrono_tz::Asia::Singapore;

/// 业务时区的当前日期
pub fn today_business() -> NaiveDate {
    chrono::Utc::now().with_timezone(&BUSINESS_TZ).date_naive()
}

/// 验证日期不在未来 (业务时区)
pub fn validate_not_future(date: NaiveDate, field: &str) -> AppResult<()> {
    let today = today_business();
    if date > today {
        return Err(AppError::validation(format!(
            "{field} {} is in the future (today is {})",
            date, today
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_today_is_never_future() {
        assert!(validate_not_future(today_business(), "employmentDate").is_ok());
    }

    #[test]
    fn test_future_date_rejected() {
        let tomorrow = today_business() + Duration::days(1);
        assert!(validate_not_future(tomorrow, "employmentDate").is_err());
    }

    #[test]
    fn test_past_date_accepted() {
        let past = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        assert!(validate_not_future(past, "employmentDate").is_ok());
    }
}
