//! 线性探测哈希表核心实现

use crate::{
    error::ProbeError,
    hash::HashFunction,
    map::{DEFAULT_INITIAL_CAPACITY, DEFAULT_MAX_LOAD_FACTOR, MAX_CAPACITY, MIN_MAX_LOAD_FACTOR},
    stats::{ProbeStats, TableStats},
    types::{Entry, Key},
};
use std::{fmt, iter::FusedIterator, slice};

/// 哈希表配置
#[derive(Clone, Debug, PartialEq)]
pub struct ProbeTableConfig {
    // 初始槽位数量
    pub initial_capacity: usize,
    // 占用率超过该值即扩容
    pub max_load_factor: f64,
}

impl Default for ProbeTableConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            max_load_factor: DEFAULT_MAX_LOAD_FACTOR,
        }
    }
}

impl ProbeTableConfig {
    /// 指定负载因子，其余取默认值
    pub fn with_max_load_factor(max_load_factor: f64) -> Self {
        Self {
            max_load_factor,
            ..Self::default()
        }
    }

    /// 校验配置：容量在(0, MAX_CAPACITY]之间，负载因子在[MIN_MAX_LOAD_FACTOR, 1)之间
    ///
    /// 负载因子的下限保证扩容时每个条目所需的槽位数有界，翻倍不会溢出
    pub fn validate(&self) -> Result<(), ProbeError> {
        if self.initial_capacity == 0 || self.initial_capacity > MAX_CAPACITY {
            return Err(ProbeError::InvalidConfig {
                reason: format!(
                    "initial_capacity must be in (0, {}], got {}",
                    MAX_CAPACITY, self.initial_capacity
                ),
            });
        }
        if !(self.max_load_factor >= MIN_MAX_LOAD_FACTOR && self.max_load_factor < 1.0) {
            return Err(ProbeError::InvalidConfig {
                reason: format!(
                    "max_load_factor must be in [{}, 1), got {}",
                    MIN_MAX_LOAD_FACTOR, self.max_load_factor
                ),
            });
        }
        Ok(())
    }
}

/// 线性探测哈希表
///
/// 每个键对应一个出现次数。所有条目直接存放在槽位数组中，冲突时向后
/// 逐个探测（末尾回绕）。任意时刻都满足`len() < capacity()`，因此探测
/// 必然在遇到空槽或目标键时终止。
pub struct ProbeTable<K: Key> {
    // 槽位数组，长度即容量
    slots: Vec<Option<Entry<K>>>,

    // 已占用槽位数
    occupied: usize,

    // 配置
    config: ProbeTableConfig,

    // 哈希函数，构造后固定
    hasher: Box<dyn HashFunction>,

    // 冲突/探测统计
    stats: ProbeStats,
}

impl<K: Key + Eq> ProbeTable<K> {
    /// 创建新哈希表，配置无效时直接返回错误
    pub fn new(config: ProbeTableConfig, hasher: Box<dyn HashFunction>) -> Result<Self, ProbeError> {
        config.validate()?;
        log_debug!(
            "creating probe table: hash={}, capacity={}, max_load_factor={}",
            hasher.name(),
            config.initial_capacity,
            config.max_load_factor
        );
        Ok(Self {
            slots: empty_slots(config.initial_capacity),
            occupied: 0,
            config,
            hasher,
            stats: ProbeStats::new(),
        })
    }

    /// 使用默认配置创建
    pub fn with_hasher(hasher: Box<dyn HashFunction>) -> Self {
        let config = ProbeTableConfig::default();
        Self {
            slots: empty_slots(config.initial_capacity),
            occupied: 0,
            config,
            hasher,
            stats: ProbeStats::new(),
        }
    }

    /// 记录一次出现，返回该键的最新计数
    ///
    /// 计数已经是`u64::MAX`时保持不变并返回该值；需要感知溢出时用`put_with`
    pub fn put(&mut self, key: K) -> u64 {
        match self.insert_counted(key, 1) {
            Ok(count) => count,
            Err(_) => {
                log_warn!("count already at u64::MAX, left unchanged");
                u64::MAX
            }
        }
    }

    /// 按指定增量累加计数
    ///
    /// 累加后超出`u64`时返回`CountOverflow`，原计数不变
    pub fn put_with(&mut self, key: K, increment: u64) -> Result<u64, ProbeError> {
        if increment == 0 {
            return Err(ProbeError::InvalidIncrement);
        }
        self.insert_counted(key, increment)
    }

    /// 查询键的出现次数
    ///
    /// 查询同样计入冲突和探测统计
    pub fn get(&mut self, key: &K) -> Result<u64, ProbeError> {
        let index = self.resolve(key);
        match &self.slots[index] {
            Some(entry) if entry.key() == key => Ok(entry.count()),
            _ => {
                log_debug!("key not found: {}", key);
                Err(ProbeError::KeyNotFound { key: key.to_string() })
            }
        }
    }

    /// 键是否存在，同样计入统计
    pub fn contains(&mut self, key: &K) -> bool {
        let index = self.resolve(key);
        matches!(&self.slots[index], Some(entry) if entry.key() == key)
    }

    fn insert_counted(&mut self, key: K, increment: u64) -> Result<u64, ProbeError> {
        let index = self.probe_for_insert(&key);

        let slot = &mut self.slots[index];
        let count = match slot {
            Some(entry) => entry
                .bump(increment)
                .ok_or_else(|| ProbeError::CountOverflow {
                    key: entry.key().to_string(),
                })?,
            None => {
                *slot = Some(Entry::new(key, increment));
                self.occupied += 1;
                increment
            }
        };

        if self.exceeds_max_load() {
            self.grow();
        }
        Ok(count)
    }

    /// 插入路径的探测：离开理想槽位的第一步记一次冲突，每一步记一次探测
    fn probe_for_insert(&mut self, key: &K) -> usize {
        let capacity = self.slots.len();
        let mut index = self.ideal_slot(key);
        let mut first_step = true;

        while let Some(entry) = &self.slots[index] {
            if entry.key() == key {
                break;
            }
            if first_step {
                self.stats.record_collision();
                first_step = false;
            }
            self.stats.record_probe();
            index = (index + 1) % capacity;
        }
        index
    }

    /// 查询路径的探测：理想槽位非空即记一次冲突，每一步记一次探测
    fn resolve(&mut self, key: &K) -> usize {
        let capacity = self.slots.len();
        let mut index = self.ideal_slot(key);

        if self.slots[index].is_some() {
            self.stats.record_collision();
        }
        while let Some(entry) = &self.slots[index] {
            if entry.key() == key {
                break;
            }
            self.stats.record_probe();
            index = (index + 1) % capacity;
        }
        index
    }

    fn exceeds_max_load(&self) -> bool {
        self.occupied as f64 / self.slots.len() as f64 > self.config.max_load_factor
    }

    /// 两倍扩容
    ///
    /// 先分配新数组，再逐个迁移旧条目，迁移过程不经过`put`，也不会再次触发扩容。
    /// 负载因子低于0.5时一次翻倍可能不够，继续翻倍直到迁移后的占用率不超过上限。
    /// 容量翻倍到`usize`上限时停在当前值，不再继续。
    fn grow(&mut self) {
        let old_capacity = self.slots.len();
        let mut new_capacity = old_capacity.saturating_mul(2);
        while self.occupied as f64 / new_capacity as f64 > self.config.max_load_factor {
            match new_capacity.checked_mul(2) {
                Some(doubled) => new_capacity = doubled,
                None => {
                    log_warn!("probe table capacity cannot grow past {}", new_capacity);
                    break;
                }
            }
        }

        let old_slots = std::mem::replace(&mut self.slots, empty_slots(new_capacity));
        let mut migrated = 0u64;
        for entry in old_slots.into_iter().flatten() {
            let mut index = self.hasher.slot(entry.key(), new_capacity);
            while self.slots[index].is_some() {
                self.stats.record_rehash_probe();
                index = (index + 1) % new_capacity;
            }
            self.slots[index] = Some(entry);
            migrated += 1;
        }
        self.stats.record_resize(migrated);

        log_info!(
            "probe table resized: hash={}, capacity {} -> {}, migrated {} entries",
            self.hasher.name(),
            old_capacity,
            new_capacity,
            migrated
        );
    }
}

impl<K: Key> ProbeTable<K> {
    fn ideal_slot(&self, key: &K) -> usize {
        self.hasher.slot(key, self.slots.len())
    }

    /// 遍历全部槽位（含空槽），不影响统计
    pub fn iter(&self) -> Slots<'_, K> {
        Slots {
            inner: self.slots.iter(),
        }
    }

    /// 只遍历已占用的条目
    pub fn entries(&self) -> impl Iterator<Item = &Entry<K>> + '_ {
        self.iter().flatten()
    }

    /// 出现次数最多的条目，次数相同时先遇到的胜出
    pub fn max_element(&self) -> Option<&Entry<K>> {
        let mut best: Option<&Entry<K>> = None;
        for entry in self.iter().flatten() {
            if best.map_or(true, |current| entry.count() > current.count()) {
                best = Some(entry);
            }
        }
        best
    }

    /// 已占用槽位数，即不同键的数量
    pub fn len(&self) -> usize {
        self.occupied
    }

    pub fn is_empty(&self) -> bool {
        self.occupied == 0
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn load_factor(&self) -> f64 {
        self.occupied as f64 / self.slots.len() as f64
    }

    pub fn max_load_factor(&self) -> f64 {
        self.config.max_load_factor
    }

    pub fn config(&self) -> &ProbeTableConfig {
        &self.config
    }

    pub fn collisions(&self) -> u64 {
        self.stats.collisions()
    }

    pub fn probes(&self) -> u64 {
        self.stats.probes()
    }

    pub fn probe_stats(&self) -> &ProbeStats {
        &self.stats
    }

    pub fn hash_name(&self) -> &str {
        self.hasher.name()
    }

    /// 统计快照
    pub fn stats(&self) -> TableStats {
        TableStats {
            hash_name: self.hasher.name().to_string(),
            size: self.occupied,
            capacity: self.slots.len(),
            load_factor: self.load_factor(),
            max_load_factor: self.config.max_load_factor,
            collisions: self.stats.collisions(),
            probes: self.stats.probes(),
            resize_count: self.stats.resizes(),
            migrated_entries: self.stats.migrated_entries(),
            rehash_probes: self.stats.rehash_probes(),
        }
    }

    /// 导出Prometheus格式指标
    pub fn export_prometheus(&self) -> String {
        self.stats().export_prometheus()
    }
}

fn empty_slots<K>(capacity: usize) -> Vec<Option<Entry<K>>> {
    let mut slots = Vec::with_capacity(capacity);
    slots.resize_with(capacity, || None);
    slots
}

/// 槽位迭代器，空槽产出`None`
#[derive(Clone)]
pub struct Slots<'a, K> {
    inner: slice::Iter<'a, Option<Entry<K>>>,
}

impl<'a, K> Iterator for Slots<'a, K> {
    type Item = Option<&'a Entry<K>>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(Option::as_ref)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K> ExactSizeIterator for Slots<'_, K> {}

impl<K> FusedIterator for Slots<'_, K> {}

impl<'a, K: Key> IntoIterator for &'a ProbeTable<K> {
    type Item = Option<&'a Entry<K>>;
    type IntoIter = Slots<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: Key> fmt::Debug for ProbeTable<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProbeTable")
            .field("hash", &self.hasher.name())
            .field("size", &self.occupied)
            .field("capacity", &self.slots.len())
            .field("load_factor", &self.load_factor())
            .field("collisions", &self.stats.collisions())
            .field("probes", &self.stats.probes())
            .finish()
    }
}
