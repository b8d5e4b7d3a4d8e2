//! 数据模型 - Cafe / Employee 实体与投影输出
//!
//! 所有对外 JSON 均为 camelCase。创建载荷 (`CafeCreate` / `EmployeeCreate`)
//! 不携带 id，id 由服务端分配后不可变。

pub mod cafe;
pub mod employee;

pub use cafe::{Cafe, CafeCreate, CafeWithEmployeeCount};
pub use employee::{Employee, EmployeeCreate, EmployeeWithCafeDetails, Gender};

use serde::{Deserialize, Deserializer};
use uuid::Uuid;

/// 反序列化可选的 cafe 引用
///
/// 管理界面在"未分配"时会提交空字符串，这里统一归一化为 `None`；
/// 非空值必须是合法 UUID。
pub(crate) fn uuid_or_empty<'de, D>(deserializer: D) -> Result<Option<Uuid>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    match value.as_deref() {
        None | Some("") => Ok(None),
        Some(raw) => Uuid::parse_str(raw)
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}
