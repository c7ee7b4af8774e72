//! 线性探测哈希表性能基准测试

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, PlotConfiguration, Throughput};

use probe_hashtable::{batch_put, HashAlgorithm, HashFunctionKind, ProbeTable, ProbeTableConfig};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;

// 基准测试配置
const SEED: u64 = 42;
const WORD_COUNTS: [usize; 3] = [10_000, 100_000, 1_000_000];
const VOCABULARY: usize = 20_000;

/// 生成带重复的随机词流
fn generate_words(count: usize) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(SEED);
    let vocabulary: Vec<String> = (0..VOCABULARY)
        .map(|_| {
            let len = rng.gen_range(2..=12);
            (0..len).map(|_| rng.gen_range(b'a'..=b'z') as char).collect()
        })
        .collect();
    (0..count)
        .map(|_| vocabulary[rng.gen_range(0..vocabulary.len())].clone())
        .collect()
}

fn create_table(kind: HashFunctionKind, max_load_factor: f64) -> ProbeTable<String> {
    ProbeTable::new(
        ProbeTableConfig::with_max_load_factor(max_load_factor),
        kind.build(HashAlgorithm::AHash),
    )
    .unwrap()
}

/// 计数插入基准测试
fn bench_put(c: &mut Criterion) {
    let plot_config = PlotConfiguration::default().summary_scale(criterion::AxisScale::Logarithmic);
    let mut group = c.benchmark_group("Put");
    group.plot_config(plot_config);

    for &count in WORD_COUNTS.iter() {
        let words = generate_words(count);
        group.throughput(Throughput::Elements(count as u64));

        for kind in HashFunctionKind::ALL {
            group.bench_with_input(
                BenchmarkId::new(kind.as_str(), count),
                &words,
                |b, words| {
                    b.iter_batched(
                        || create_table(kind, 0.7),
                        |mut table| {
                            batch_put(&mut table, words.iter().cloned());
                            table
                        },
                        criterion::BatchSize::PerIteration,
                    );
                },
            );
        }
    }
    group.finish();
}

/// 查询基准测试
fn bench_get(c: &mut Criterion) {
    let mut group = c.benchmark_group("Get");
    let words = generate_words(100_000);

    for kind in HashFunctionKind::ALL {
        let mut table = create_table(kind, 0.7);
        batch_put(&mut table, words.iter().cloned());

        group.throughput(Throughput::Elements(words.len() as u64));
        group.bench_function(kind.as_str(), |b| {
            b.iter(|| {
                for word in &words {
                    criterion::black_box(table.get(word).ok());
                }
            });
        });
    }
    group.finish();
}

/// 不同最大负载因子的插入对比
fn bench_load_factor(c: &mut Criterion) {
    let mut group = c.benchmark_group("Load Factor");
    let words = generate_words(100_000);

    for max_load_factor in [0.5, 0.7, 0.8, 0.9] {
        group.bench_with_input(
            BenchmarkId::from_parameter(max_load_factor),
            &words,
            |b, words| {
                b.iter_batched(
                    || create_table(HashFunctionKind::Builtin, max_load_factor),
                    |mut table| {
                        batch_put(&mut table, words.iter().cloned());
                        table
                    },
                    criterion::BatchSize::PerIteration,
                );
            },
        );
    }
    group.finish();
}

criterion_group!(
    name = benches;
    config = Criterion::default()
        .sample_size(10)
        .warm_up_time(Duration::from_secs(1))
        .measurement_time(Duration::from_secs(5))
        .noise_threshold(0.05);
    targets =
        bench_put,
        bench_get,
        bench_load_factor
);
criterion_main!(benches);
