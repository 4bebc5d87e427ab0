//! Criterion benchmarks for hot paths in the portal daemon.
//!
//! Run with:
//!   cargo bench
//!
//! Covers:
//!   - Route-guard evaluation (runs on every page navigation)
//!   - Flag store snapshot (cloned on every guarded navigation)
//!   - Flag envelope serialization (served on every /api/feature-flags hit)
//!   - Application email validation (regex pipeline)

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use portald::config::defaults;
use portald::flags::model::FlagsEnvelope;
use portald::flags::{FeatureDescriptor, FeatureFlagSet, FlagStore};
use portald::guard::RouteGuard;
use portald::jobs::JobApplication;

// ─── Route-guard evaluation ──────────────────────────────────────────────────

/// Synthetic set with many features, every other one disabled. Real
/// deployments carry a handful; this exaggerates the scan to make the
/// per-feature cost visible.
fn wide_flag_set(count: usize) -> FeatureFlagSet {
    (0..count)
        .map(|i| {
            let key = format!("feature{i:03}");
            let descriptor = FeatureDescriptor {
                name: key.clone(),
                features: vec![key.clone()],
                routes: vec![format!("/{key}"), format!("/{key}/detail")],
                description: String::new(),
                enabled: i % 2 == 0,
            };
            (key, descriptor)
        })
        .collect()
}

fn bench_guard_evaluate(c: &mut Criterion) {
    let guard = RouteGuard::new("/features", "123456");
    let wide = wide_flag_set(50);
    let shipped = defaults::default_flag_set();

    c.bench_function("guard_shipped_set_miss", |b| {
        b.iter(|| {
            let d = guard.evaluate(black_box(&shipped), black_box("/pricing"), None);
            black_box(d);
        });
    });

    c.bench_function("guard_wide_set_miss", |b| {
        // No feature owns the path, so the whole set is scanned.
        b.iter(|| {
            let d = guard.evaluate(black_box(&wide), black_box("/pricing"), None);
            black_box(d);
        });
    });

    c.bench_function("guard_wide_set_disabled_hit", |b| {
        // feature001 is disabled and owns this path.
        b.iter(|| {
            let d = guard.evaluate(black_box(&wide), black_box("/feature001/detail"), None);
            black_box(d);
        });
    });

    c.bench_function("guard_protected_prefix", |b| {
        b.iter(|| {
            let d = guard.evaluate(black_box(&wide), black_box("/features"), Some("123456"));
            black_box(d);
        });
    });
}

// ─── Flag store snapshot ─────────────────────────────────────────────────────

fn bench_store_snapshot(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();

    c.bench_function("store_read_shipped_set", |b| {
        let store = FlagStore::new(defaults::default_flag_set());
        b.iter(|| {
            let set = rt.block_on(store.read());
            black_box(set);
        });
    });

    c.bench_function("store_read_wide_set", |b| {
        // Snapshot cost is dominated by the clone; 50 features bounds it.
        let store = FlagStore::new(wide_flag_set(50));
        b.iter(|| {
            let set = rt.block_on(store.read());
            black_box(set);
        });
    });
}

// ─── Flag envelope serialization ─────────────────────────────────────────────

fn bench_envelope_serialize(c: &mut Criterion) {
    c.bench_function("envelope_serialize_published", |b| {
        let envelope = FlagsEnvelope::success(defaults::published_flags());
        b.iter(|| {
            let s = serde_json::to_string(black_box(&envelope)).unwrap();
            black_box(s);
        });
    });

    c.bench_function("envelope_parse_published", |b| {
        let raw = serde_json::to_string(&FlagsEnvelope::success(defaults::published_flags()))
            .unwrap();
        b.iter(|| {
            let e: FlagsEnvelope = serde_json::from_str(black_box(&raw)).unwrap();
            black_box(e);
        });
    });
}

// ─── Application email validation ────────────────────────────────────────────

fn application(email: &str) -> JobApplication {
    serde_json::from_value(serde_json::json!({
        "jobId": "1",
        "applicantName": "Bench Tester",
        "email": email,
        "phone": "+1 555 0100",
    }))
    .unwrap()
}

fn bench_application_validate(c: &mut Criterion) {
    let valid = application("applicant@example.com");
    let invalid = application("not an email");

    c.bench_function("application_validate_valid", |b| {
        b.iter(|| {
            let r = black_box(&valid).validate();
            black_box(r).ok();
        });
    });

    c.bench_function("application_validate_invalid", |b| {
        b.iter(|| {
            let r = black_box(&invalid).validate();
            black_box(r).ok();
        });
    });
}

// ─── Entry point ─────────────────────────────────────────────────────────────

criterion_group!(
    benches,
    bench_guard_evaluate,
    bench_store_snapshot,
    bench_envelope_serialize,
    bench_application_validate
);
criterion_main!(benches);
