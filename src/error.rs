//! 统一错误处理 - 所有可能错误类型和恢复逻辑

/// 线性探测哈希表可能发生的错误
#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    #[error("键不存在: {key}")]
    KeyNotFound {
        key: String,
    },

    #[error("无效配置: {reason}")]
    InvalidConfig {
        reason: String,
    },

    #[error("计数增量必须大于零")]
    InvalidIncrement,

    #[error("计数溢出: {key}")]
    CountOverflow {
        key: String,
    },

    #[error("未知哈希函数: {name}")]
    InvalidHashName {
        name: String,
    },

    #[error("读取输入失败: {0}")]
    Io(#[from] std::io::Error),

    #[error("分词正则无效: {0}")]
    Pattern(#[from] regex::Error),
}

impl ProbeError {
    /// 获取错误恢复建议
    pub fn recovery_suggestion(&self) -> Option<&'static str> {
        match self {
            Self::KeyNotFound { .. } => Some("确认键值是否存在"),
            Self::InvalidConfig { .. } => Some("检查配置参数：容量须在(0, 2^30]之间，负载因子须在[0.001, 1)之间"),
            Self::InvalidIncrement => Some("使用大于零的增量"),
            Self::CountOverflow { .. } => Some("计数已接近u64上限，改用更小的增量"),
            Self::InvalidHashName { .. } => Some("可选值: builtin, binary, polynomial"),
            Self::Io(_) => Some("检查文件路径和读取权限"),
            Self::Pattern(_) => None,
        }
    }

    /// 判断错误是否可恢复
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::Pattern(_))
    }

    /// 是否为查找未命中
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::KeyNotFound { .. })
    }
}
