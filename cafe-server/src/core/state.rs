use std::sync::Arc;

use crate::core::Config;
use crate::store::{MemoryStore, seed};

/// 服务器状态 - 持有配置与内存存储的共享引用
///
/// 使用 Arc 实现浅拷贝，每个请求处理器拿到的都是同一份存储。
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | store | Arc<MemoryStore> | 内存存储 |
#[derive(Clone, Debug)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 内存存储
    store: Arc<MemoryStore>,
}

impl ServerState {
    /// 初始化服务器状态
    ///
    /// 创建空的内存存储并一次性填充示例数据。填充是幂等的，
    /// 列表接口不再做任何存在性检查。
    ///
    /// # Panics
    ///
    /// 示例数据填充失败时 panic (仅在 ID 生成器耗尽时可能发生)
    pub fn initialize(config: &Config) -> Self {
        let store = Arc::new(MemoryStore::new());
        seed::ensure_seeded(&store).expect("Failed to seed store");

        Self {
            config: config.clone(),
            store,
        }
    }

    /// 获取内存存储
    pub fn store(&self) -> &MemoryStore {
        &self.store
    }
}
