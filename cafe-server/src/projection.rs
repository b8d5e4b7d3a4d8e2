//! 投影层 - 跨集合派生字段
//!
//! 列表接口的派生字段在每次请求时重新计算：
//! - 每家咖啡馆的 `employeeCount`
//! - 每名员工的 `cafeName` 与 `daysWorked`
//!
//! 两个集合的快照是先后各自读取的，中间发生的并发删除可能造成
//! 一次性的计数/名称不一致，属于可接受行为（无跨集合事务）。

use chrono::NaiveDate;

use crate::models::{Cafe, CafeWithEmployeeCount, Employee, EmployeeWithCafeDetails};

/// 咖啡馆列表投影：统计引用每家咖啡馆的员工数
///
/// `sort_by_count` 开启时按 `employeeCount` 降序排列；
/// 计数相同的保持原始插入顺序（稳定排序）。
pub fn cafes_with_employee_counts(
    cafes: Vec<Cafe>,
    employees: &[Employee],
    sort_by_count: bool,
) -> Vec<CafeWithEmployeeCount> {
    let mut projected: Vec<CafeWithEmployeeCount> = cafes
        .into_iter()
        .map(|cafe| {
            let employee_count = employees
                .iter()
                .filter(|e| e.cafe_id == Some(cafe.id))
                .count();
            CafeWithEmployeeCount {
                cafe,
                employee_count,
            }
        })
        .collect();

    if sort_by_count {
        projected.sort_by(|a, b| b.employee_count.cmp(&a.employee_count));
    }
    projected
}

/// 员工列表投影：关联咖啡馆名称并计算工龄，按 `daysWorked` 降序
pub fn employees_with_cafe_details(
    employees: Vec<Employee>,
    cafes: &[Cafe],
    today: NaiveDate,
    clamp_min_one_day: bool,
) -> Vec<EmployeeWithCafeDetails> {
    let mut projected: Vec<EmployeeWithCafeDetails> = employees
        .into_iter()
        .map(|employee| {
            let cafe_name = employee
                .cafe_id
                .and_then(|id| cafes.iter().find(|c| c.id == id))
                .map(|c| c.name.clone())
                .unwrap_or_default();
            let days_worked = days_worked(employee.employment_date, today, clamp_min_one_day);
            EmployeeWithCafeDetails {
                employee,
                cafe_name,
                days_worked,
            }
        })
        .collect();

    projected.sort_by(|a, b| b.days_worked.cmp(&a.days_worked));
    projected
}

/// 工龄：业务时区"今天"与入职日期的整天差
///
/// 未设置入职日期返回 0；`clamp_min_one_day` 开启时结果至少为 1
/// （兼容旧版行为，由 Config 开关控制）。
pub fn days_worked(
    employment_date: Option<NaiveDate>,
    today: NaiveDate,
    clamp_min_one_day: bool,
) -> i64 {
    match employment_date {
        None => 0,
        Some(date) => {
            let days = (today - date).num_days();
            if clamp_min_one_day { days.max(1) } else { days }
        }
    }
}
