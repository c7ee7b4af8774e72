//! 核心类型定义 - 共享类型和接口

use core::fmt;
use std::{
    borrow::Cow,
    fmt::{Debug, Display},
};

/// 键特征 - 支持动态类型
///
/// 哈希函数通过`&dyn Key`读取键，因此本特征保持对象安全
pub trait Key: Debug + Display + 'static {
    /// 获取键的字节表示
    fn as_bytes(&self) -> &[u8];

    // 添加可读字符串表示方法
    fn as_str(&self) -> Cow<'_, str> {
        std::str::from_utf8(self.as_bytes())
            .map(Cow::Borrowed)
            .unwrap_or_else(|_| {
                Cow::Owned(format!("<invalid_utf8: {:?}>", self.as_bytes()))
            })
    }
}

impl Key for String {
    fn as_bytes(&self) -> &[u8] {
        self.as_str().as_bytes()
    }

    fn as_str(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl Key for &'static str {
    fn as_bytes(&self) -> &[u8] {
        str::as_bytes(self)
    }

    fn as_str(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

/// 字节数组键
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ByteKey(pub Vec<u8>);

impl ByteKey {
    /// 创建新字节键
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// 获取内部字节
    pub fn into_inner(self) -> Vec<u8> {
        self.0
    }
}

impl Debug for ByteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ByteKey(")?;
        for byte in &self.0 {
            write!(f, "{:02X}", byte)?;
        }
        write!(f, ")")
    }
}

impl Display for ByteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{:02X}", byte)?;
        }
        Ok(())
    }
}

impl Key for ByteKey {
    fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

/// 已占用槽位中的条目
///
/// `count`从首次插入起至少为1，只增不减
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<K> {
    key: K,
    count: u64,
}

impl<K> Entry<K> {
    pub(crate) fn new(key: K, count: u64) -> Self {
        Self { key, count }
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    /// 出现次数
    pub fn count(&self) -> u64 {
        self.count
    }

    /// 累加计数，返回新值；溢出时返回`None`且计数不变
    pub(crate) fn bump(&mut self, increment: u64) -> Option<u64> {
        self.count = self.count.checked_add(increment)?;
        Some(self.count)
    }

    pub fn into_parts(self) -> (K, u64) {
        (self.key, self.count)
    }
}

impl<K: Display> Display for Entry<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x{}", self.key, self.count)
    }
}
