//! Criterion benchmarks for rust_multi_logger

use criterion::{
    black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput,
};
use rust_multi_logger::core::template::render;
use rust_multi_logger::prelude::*;
use std::sync::Arc;

// ============================================================================
// Registry Benchmarks
// ============================================================================

fn memory_registry(extra_loggers: usize, level: LogLevel) -> (LoggerRegistry, Vec<Arc<MemoryLogger>>) {
    let default = Arc::new(MemoryLogger::with_level(level));
    let registry = LoggerRegistry::with_default_logger(default.clone());
    let mut sinks = vec![default];
    for i in 0..extra_loggers {
        let sink = Arc::new(MemoryLogger::with_level(level));
        registry
            .register(format!("sink-{}", i), sink.clone())
            .expect("non-empty key");
        sinks.push(sink);
    }
    (registry, sinks)
}

fn bench_registry_creation(c: &mut Criterion) {
    let mut group = c.benchmark_group("registry_creation");
    group.throughput(Throughput::Elements(1));

    group.bench_function("new", |b| {
        b.iter(|| black_box(LoggerRegistry::new()));
    });

    group.bench_function("register_unregister", |b| {
        let (registry, _) = memory_registry(0, LogLevel::Info);
        b.iter(|| {
            registry
                .register("bench", Arc::new(MemoryLogger::new()))
                .expect("non-empty key");
            black_box(registry.unregister("bench").expect("registered"));
        });
    });

    group.finish();
}

// ============================================================================
// Broadcast Benchmarks
// ============================================================================

fn bench_broadcast_filtered(c: &mut Criterion) {
    let mut group = c.benchmark_group("broadcast_filtered");
    group.throughput(Throughput::Elements(1));

    for loggers in [1usize, 4, 16] {
        // Fatal threshold: every logger drops the message
        let (registry, _) = memory_registry(loggers - 1, LogLevel::Fatal);
        group.bench_with_input(BenchmarkId::from_parameter(loggers), &registry, |b, registry| {
            b.iter(|| registry.log_all(LogLevel::Info, black_box(&"Filtered message")));
        });
    }

    group.finish();
}

fn bench_broadcast_written(c: &mut Criterion) {
    let mut group = c.benchmark_group("broadcast_written");
    group.throughput(Throughput::Elements(1));

    for loggers in [1usize, 4, 16] {
        let (registry, sinks) = memory_registry(loggers - 1, LogLevel::All);
        group.bench_with_input(BenchmarkId::from_parameter(loggers), &registry, |b, registry| {
            b.iter_batched(
                || sinks.iter().for_each(|sink| sink.clear()),
                |()| {
                    registry.log_formatted_all(
                        LogLevel::Info,
                        black_box("Person: %v, Car: %v"),
                        &[&"Michael", &2020],
                    )
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

// ============================================================================
// Formatting Benchmarks
// ============================================================================

fn bench_template(c: &mut Criterion) {
    let mut group = c.benchmark_group("template");
    group.throughput(Throughput::Elements(1));

    group.bench_function("default_layout", |b| {
        let base = BaseLogger::default();
        b.iter(|| black_box(base.render(LogLevel::Warning, &"disk almost full")));
    });

    group.bench_function("custom_layout", |b| {
        b.iter(|| black_box(render(black_box("***error:'%s'"), &[&"disk almost full"])));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_registry_creation,
    bench_broadcast_filtered,
    bench_broadcast_written,
    bench_template,
);
criterion_main!(benches);
