use criterion::{Criterion, black_box, criterion_group, criterion_main};
use transit_catalog::lookup;
use transit_model::TransitModel;
use transit_search::{LightCurveConfig, TransitSearchConfig, next_transit, sample};

fn lightcurve_bench(c: &mut Criterion) {
    let planet = match lookup("hd-209458b") {
        Some(p) => p,
        None => return,
    };
    let config = LightCurveConfig::new(0.0, planet.period_days);

    let mut group = c.benchmark_group("lightcurve");
    group.bench_function("one_period_angle_window", |b| {
        b.iter(|| {
            sample(
                black_box(&planet),
                black_box(TransitModel::AngleWindow),
                black_box(&config),
            )
            .expect("sampling should succeed")
        })
    });
    group.bench_function("one_period_scaled_radius", |b| {
        b.iter(|| {
            sample(
                black_box(&planet),
                black_box(TransitModel::scaled_radius()),
                black_box(&config),
            )
            .expect("sampling should succeed")
        })
    });
    group.finish();
}

fn search_bench(c: &mut Criterion) {
    let planet = match lookup("hd-209458b") {
        Some(p) => p,
        None => return,
    };
    let config = TransitSearchConfig::default();

    let mut group = c.benchmark_group("search_transit");
    group.sample_size(20);
    group.bench_function("next_transit", |b| {
        b.iter(|| {
            next_transit(
                black_box(&planet),
                black_box(TransitModel::AngleWindow),
                black_box(0.0),
                black_box(&config),
            )
            .expect("search should succeed")
            .expect("event should exist")
        })
    });
    group.finish();
}

criterion_group!(benches, lightcurve_bench, search_bench);
criterion_main!(benches);
