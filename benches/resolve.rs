//! Criterion benchmarks for Stylepipe critical paths
//!
//! Benchmarks the core operations on the resolve path:
//! - Resolver: merging partial records against the standard defaults
//! - Shape checking: full-record error collection
//! - Parsing: TOML and JSON5 partial-record parsing
//! - Plan: canonical configuration to execution plan

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use serde_json::{json, Map, Value};

use stylepipe::config::{check, resolve, Defaults, RawConfig};
use stylepipe::pipeline::PipelinePlan;

// =============================================================================
// Test Data Generators
// =============================================================================

/// Generate a partial record with n entry points and m plugins
fn make_raw(entries: usize, plugins: usize) -> RawConfig {
    let css: Vec<Value> =
        (0..entries).map(|i| Value::String(format!("~/assets/css/sheet_{}.css", i))).collect();

    let mut chain = Map::new();
    for i in 0..plugins {
        chain.insert(
            format!("postcss-plugin-{}", i),
            json!({ "option": i, "enabled": i % 2 == 0 }),
        );
    }

    RawConfig {
        css: Some(Value::Array(css)),
        postcss: Some(json!({ "plugins": chain })),
    }
}

/// Generate TOML config text with n entry points and m plugins
fn make_toml_text(entries: usize, plugins: usize) -> String {
    let css: Vec<String> =
        (0..entries).map(|i| format!("\"~/assets/css/sheet_{}.css\"", i)).collect();

    let tables: Vec<String> = (0..plugins)
        .map(|i| format!("[postcss.plugins.postcss-plugin-{}]\noption = {}", i, i))
        .collect();

    format!("css = [{}]\n\n{}\n", css.join(", "), tables.join("\n\n"))
}

/// Generate JSON5 config text with n entry points and m plugins
fn make_json5_text(entries: usize, plugins: usize) -> String {
    let css: Vec<String> = (0..entries).map(|i| format!("'~/assets/css/sheet_{}.css'", i)).collect();

    let chain: Vec<String> =
        (0..plugins).map(|i| format!("'postcss-plugin-{}': {{ option: {} }}", i, i)).collect();

    format!("{{ css: [{}], postcss: {{ plugins: {{ {} }} }} }}", css.join(", "), chain.join(", "))
}

// =============================================================================
// Resolver Benchmarks
// =============================================================================

fn bench_resolver(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolver");

    // Empty record: pure default materialization
    let empty = RawConfig::default();
    let defaults = Defaults::standard();
    group.bench_function("resolve_empty", |b| {
        b.iter(|| resolve(black_box(&empty), black_box(&defaults)))
    });

    // Realistic record: one entry point, one override, one extra plugin
    let realistic = RawConfig {
        css: Some(json!(["~/assets/css/tailwind.css"])),
        postcss: Some(json!({ "plugins": {
            "tailwindcss": { "mode": "jit" },
            "cssnano": { "preset": "default" },
        } })),
    };
    group.bench_function("resolve_realistic", |b| {
        b.iter(|| resolve(black_box(&realistic), black_box(&defaults)))
    });

    // Scaling in plugin count
    for plugins in [10, 50, 200].iter() {
        let raw = make_raw(4, *plugins);
        group.throughput(Throughput::Elements(*plugins as u64));
        group.bench_with_input(BenchmarkId::new("resolve_plugins", plugins), &raw, |b, raw| {
            b.iter(|| resolve(black_box(raw), black_box(&defaults)))
        });
    }

    // Scaling in entry-point count
    for entries in [10, 100].iter() {
        let raw = make_raw(*entries, 4);
        group.throughput(Throughput::Elements(*entries as u64));
        group.bench_with_input(BenchmarkId::new("resolve_entries", entries), &raw, |b, raw| {
            b.iter(|| resolve(black_box(raw), black_box(&defaults)))
        });
    }

    group.finish();
}

// =============================================================================
// Shape Check Benchmarks
// =============================================================================

fn bench_check(c: &mut Criterion) {
    let mut group = c.benchmark_group("check");

    let clean = make_raw(8, 50);
    group.bench_function("check_clean_50_plugins", |b| b.iter(|| check(black_box(&clean))));

    // Worst case: every entry point malformed
    let broken = RawConfig {
        css: Some(Value::Array(vec![json!(1); 64])),
        postcss: None,
    };
    group.bench_function("check_all_entries_invalid", |b| b.iter(|| check(black_box(&broken))));

    group.finish();
}

// =============================================================================
// Parsing Benchmarks
// =============================================================================

fn bench_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for (entries, plugins) in [(1, 2), (4, 10), (8, 50)] {
        let label = format!("{}x{}", entries, plugins);

        let toml_text = make_toml_text(entries, plugins);
        group.throughput(Throughput::Bytes(toml_text.len() as u64));
        group.bench_with_input(BenchmarkId::new("toml", &label), &toml_text, |b, text| {
            b.iter(|| toml::from_str::<RawConfig>(black_box(text)))
        });

        let json5_text = make_json5_text(entries, plugins);
        group.throughput(Throughput::Bytes(json5_text.len() as u64));
        group.bench_with_input(BenchmarkId::new("json5", &label), &json5_text, |b, text| {
            b.iter(|| json5::from_str::<RawConfig>(black_box(text)))
        });
    }

    group.finish();
}

// =============================================================================
// Plan Benchmarks
// =============================================================================

fn bench_plan(c: &mut Criterion) {
    let mut group = c.benchmark_group("plan");

    let defaults = Defaults::standard();
    for plugins in [2, 20, 100].iter() {
        let raw = make_raw(4, *plugins);
        let config = resolve(&raw, &defaults).expect("bench record should resolve");

        group.throughput(Throughput::Elements(*plugins as u64));
        group.bench_with_input(BenchmarkId::new("from_config", plugins), &config, |b, config| {
            b.iter(|| PipelinePlan::from_config(black_box(config)))
        });
    }

    group.finish();
}

// =============================================================================
// Criterion Configuration
// =============================================================================

criterion_group!(benches, bench_resolver, bench_check, bench_parsing, bench_plan);

criterion_main!(benches);
