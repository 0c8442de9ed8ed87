use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kundali_ephem::{ALL_BODIES, Body, Ephemeris, NodeMode, SeriesEphemeris};

fn body_bench(c: &mut Criterion) {
    let eph = SeriesEphemeris::new();
    let jd = 2_448_057.708_333;

    let mut group = c.benchmark_group("series_position");
    for body in [Body::Sun, Body::Moon, Body::Mars, Body::Saturn, Body::Rahu] {
        group.bench_function(body.name(), |b| {
            b.iter(|| eph.position(black_box(jd), body))
        });
    }
    group.finish();
}

fn chart_set_bench(c: &mut Criterion) {
    let mean = SeriesEphemeris::new();
    let true_node = SeriesEphemeris::with_node_mode(NodeMode::True);
    let jd = 2_460_000.5;

    let mut group = c.benchmark_group("all_nine");
    group.bench_function("mean_node", |b| {
        b.iter(|| {
            ALL_BODIES
                .iter()
                .map(|&body| mean.longitude_deg(black_box(jd), body))
                .collect::<Vec<_>>()
        })
    });
    group.bench_function("true_node", |b| {
        b.iter(|| {
            ALL_BODIES
                .iter()
                .map(|&body| true_node.longitude_deg(black_box(jd), body))
                .collect::<Vec<_>>()
        })
    });
    group.finish();
}

criterion_group!(benches, body_bench, chart_set_bench);
criterion_main!(benches);
