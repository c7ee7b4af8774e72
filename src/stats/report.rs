//! 对比报告 - 按最大负载因子分组输出各哈希函数的冲突与探测次数

use std::fmt::Write;

use crate::{
    hash::HashFunctionKind,
    stats::TableStats,
    types::{Entry, Key},
};

/// 渲染文本报告
///
/// `rows`应按负载因子排好序，相邻且负载因子相同的表归为一组，
/// 每张表以其哈希函数的报告标题开头
pub fn render_report<K: Key>(
    rows: &[(HashFunctionKind, TableStats)],
    most_frequent: Option<&Entry<K>>,
) -> String {
    let mut output = String::new();
    let mut current_load: Option<f64> = None;

    for (kind, table) in rows {
        if current_load != Some(table.max_load_factor) {
            if current_load.is_some() {
                output.push('\n');
            }
            current_load = Some(table.max_load_factor);
            let _ = writeln!(output, "For load = {}", table.max_load_factor);
            output.push('\n');
        }
        let _ = writeln!(output, "{}", kind.report_label());
        let _ = writeln!(output, "collisions = {}", table.collisions);
        let _ = writeln!(output, "probes = {}", table.probes);
        output.push('\n');
    }

    match most_frequent {
        Some(entry) => {
            let _ = writeln!(
                output,
                "The word with the most number of occurrences is '{}' which occurs {} times",
                entry.key().as_str(),
                entry.count()
            );
        }
        None => output.push_str("No words were counted\n"),
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(
        kind: HashFunctionKind,
        max_load_factor: f64,
        collisions: u64,
        probes: u64,
    ) -> (HashFunctionKind, TableStats) {
        let stats = TableStats {
            hash_name: kind.as_str().into(),
            size: 0,
            capacity: 100,
            load_factor: 0.0,
            max_load_factor,
            collisions,
            probes,
            resize_count: 0,
            migrated_entries: 0,
            rehash_probes: 0,
        };
        (kind, stats)
    }

    #[test]
    fn test_report_groups_by_load() {
        let grid = [
            row(HashFunctionKind::Builtin, 0.7, 1, 2),
            row(HashFunctionKind::BinaryDigitSum, 0.7, 3, 4),
            row(HashFunctionKind::Builtin, 0.8, 5, 6),
        ];
        let entry = Entry::new("the", 3);
        let report = render_report(&grid, Some(&entry));

        assert_eq!(report.matches("For load =").count(), 2);
        assert!(report.starts_with("For load = 0.7\n\nInbuilt Function\ncollisions = 1\nprobes = 2\n\n"));
        assert!(report.contains("First Function\ncollisions = 3\nprobes = 4\n"));
        assert!(report.contains("\n\nFor load = 0.8\n\nInbuilt Function\ncollisions = 5\nprobes = 6\n"));
        assert!(!report.contains("builtin-ahash"));
        assert!(report.ends_with("is 'the' which occurs 3 times\n"));
    }

    #[test]
    fn test_report_without_words() {
        let report = render_report::<String>(&[], None);
        assert_eq!(report, "No words were counted\n");
    }
}
