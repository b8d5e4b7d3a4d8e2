//! 内存存储层
//!
//! 两个按主键索引的内存集合 (Cafe / Employee)，进程启动时一次性
//! 填充示例数据 ([`seed::ensure_seeded`])。没有持久化，没有跨集合
//! 事务；单条记录的插入/覆盖/删除各自持锁完成。

pub mod collection;
pub mod seed;

pub use collection::{Keyed, MemoryCollection, StoreError};

use uuid::Uuid;

use crate::models::{Cafe, Employee};

impl Keyed for Cafe {
    type Key = Uuid;

    fn key(&self) -> Uuid {
        self.id
    }
}

impl Keyed for Employee {
    type Key = String;

    fn key(&self) -> String {
        self.id.clone()
    }
}

/// 内存存储 - 持有两个实体集合
#[derive(Debug, Default)]
pub struct MemoryStore {
    pub cafes: MemoryCollection<Cafe>,
    pub employees: MemoryCollection<Employee>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            cafes: MemoryCollection::new(),
            employees: MemoryCollection::new(),
        }
    }
}
