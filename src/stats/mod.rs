//! 统计模块 - 冲突、探测与扩容指标

pub mod report;

pub use report::render_report;

/// 探测计数器
///
/// 只由所属的表修改，对外只读。`collisions`/`probes`只统计调用方发起的
/// put/get/contains，扩容迁移时的探测单独记在`rehash_probes`。
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ProbeStats {
    collisions: u64,
    probes: u64,
    resizes: u64,
    migrated_entries: u64,
    rehash_probes: u64,
}

impl ProbeStats {
    /// 创建新统计
    pub fn new() -> Self {
        Self::default()
    }

    pub fn collisions(&self) -> u64 {
        self.collisions
    }

    pub fn probes(&self) -> u64 {
        self.probes
    }

    /// 扩容次数
    pub fn resizes(&self) -> u64 {
        self.resizes
    }

    /// 扩容时累计迁移的条目数
    pub fn migrated_entries(&self) -> u64 {
        self.migrated_entries
    }

    pub fn rehash_probes(&self) -> u64 {
        self.rehash_probes
    }

    pub(crate) fn record_collision(&mut self) {
        self.collisions += 1;
    }

    pub(crate) fn record_probe(&mut self) {
        self.probes += 1;
    }

    pub(crate) fn record_rehash_probe(&mut self) {
        self.rehash_probes += 1;
    }

    pub(crate) fn record_resize(&mut self, migrated: u64) {
        self.resizes += 1;
        self.migrated_entries += migrated;
    }
}

/// 哈希表统计快照
#[derive(Debug, Clone, PartialEq)]
pub struct TableStats {
    pub hash_name: String,
    pub size: usize,
    pub capacity: usize,
    pub load_factor: f64,
    pub max_load_factor: f64,
    pub collisions: u64,
    pub probes: u64,
    pub resize_count: u64,
    pub migrated_entries: u64,
    pub rehash_probes: u64,
}

impl TableStats {
    /// 平均每次冲突的探测步数
    pub fn probes_per_collision(&self) -> f64 {
        if self.collisions == 0 {
            0.0
        } else {
            self.probes as f64 / self.collisions as f64
        }
    }

    /// 导出Prometheus格式指标
    pub fn export_prometheus(&self) -> String {
        let labels = format!(
            "hash=\"{}\",max_load=\"{}\"",
            self.hash_name, self.max_load_factor
        );
        let metrics: [(&str, &str, &str, String); 6] = [
            ("probe_table_collisions", "counter", "Total collisions", self.collisions.to_string()),
            ("probe_table_probes", "counter", "Total probe steps", self.probes.to_string()),
            ("probe_table_resizes", "counter", "Total resize operations", self.resize_count.to_string()),
            ("probe_table_size", "gauge", "Occupied slots", self.size.to_string()),
            ("probe_table_capacity", "gauge", "Slot array length", self.capacity.to_string()),
            ("probe_table_load_factor", "gauge", "Occupied slots / capacity", format!("{:.4}", self.load_factor)),
        ];

        let mut output = String::new();
        for (name, kind, help, value) in metrics {
            output.push_str(&format!("# HELP {} {}\n", name, help));
            output.push_str(&format!("# TYPE {} {}\n", name, kind));
            output.push_str(&format!("{}{{{}}} {}\n", name, labels, value));
        }
        output
    }
}
