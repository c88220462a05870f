//! Benchmarks for the in-process part of a dispatch: lookup, payload shaping
//! and statistics bookkeeping. The webhook round-trip itself is excluded.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use relay::config::ActionConfig;
use relay::engine::{ActionStatus, Statistics};
use relay::registry::ActionRegistry;
use serde_json::json;

fn phone_registry() -> ActionRegistry {
    let mut block_touch =
        ActionConfig::new("block_touch", "http://127.0.0.1:9/block", "Block touch")
            .with_route("/api/block-touch");
    block_touch.payload_fields = vec!["duration".to_string()];
    block_touch
        .payload_defaults
        .insert("duration".to_string(), json!(10));

    let mut actions = vec![
        ActionConfig::new("lock_screen", "http://127.0.0.1:9/lock", "Lock").with_route("/api/lock"),
        block_touch,
    ];
    for n in 1..=3 {
        let mut site = ActionConfig::new(
            format!("open_site{}", n),
            format!("http://127.0.0.1:9/site{}", n),
            format!("Open Site {}", n),
        );
        site.payload_fields = vec!["url".to_string()];
        actions.push(site);
    }

    ActionRegistry::new(actions).unwrap()
}

fn bench_registry_lookup(c: &mut Criterion) {
    let registry = phone_registry();

    c.bench_function("registry_lookup_hit", |b| {
        b.iter(|| black_box(registry.lookup(black_box("open_site3")).is_ok()));
    });

    c.bench_function("registry_lookup_miss", |b| {
        b.iter(|| black_box(registry.lookup(black_box("nonexistent_key")).is_err()));
    });
}

fn bench_shape_payload(c: &mut Criterion) {
    let registry = phone_registry();
    let action = registry.lookup("block_touch").unwrap();
    let inbound = json!({"duration": 30, "extra": "dropped"})
        .as_object()
        .cloned()
        .unwrap();

    c.bench_function("shape_payload_with_body", |b| {
        b.iter(|| black_box(action.shape_payload(Some(black_box(&inbound)))));
    });

    c.bench_function("shape_payload_defaults_only", |b| {
        b.iter(|| black_box(action.shape_payload(None)));
    });
}

fn bench_statistics_record(c: &mut Criterion) {
    let stats = Statistics::new();

    c.bench_function("statistics_record", |b| {
        b.iter(|| stats.record(black_box("lock_screen"), ActionStatus::Success));
    });

    c.bench_function("statistics_snapshot", |b| {
        b.iter(|| black_box(stats.snapshot()));
    });
}

criterion_group!(
    benches,
    bench_registry_lookup,
    bench_shape_payload,
    bench_statistics_record
);
criterion_main!(benches);
