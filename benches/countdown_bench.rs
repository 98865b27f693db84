// Benchmark for the per-tick countdown work and burst scheduling
// Measures snapshot computation, target computation and burst pumping

use birthday_countdown::models::countdown::TimeParts;
use birthday_countdown::services::countdown::{compute_target, CountdownEngine, CountdownZone};
use birthday_countdown::services::effects::{BurstScheduler, ConfettiParams, EffectsSink};
use chrono::{Duration, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

struct CountingSink(u64);

impl EffectsSink for CountingSink {
    fn fire(&mut self, params: &ConfettiParams) {
        self.0 += u64::from(params.particle_count);
    }
}

fn bench_time_parts(c: &mut Criterion) {
    c.bench_function("time_parts_from_millis", |b| {
        b.iter(|| TimeParts::from_millis(black_box(82_861_337)))
    });
}

fn bench_tick(c: &mut Criterion) {
    let zone = CountdownZone::fixed_hours(3).unwrap();
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap();

    c.bench_function("engine_tick_and_snapshot", |b| {
        let mut engine = CountdownEngine::new(start, zone);
        let mut now = start;
        b.iter(|| {
            now += Duration::seconds(1);
            engine.tick(black_box(now));
            black_box(engine.snapshot())
        })
    });

    let named = CountdownZone::Named(chrono_tz::America::Santiago);
    c.bench_function("compute_target_named_zone", |b| {
        b.iter(|| compute_target(black_box(start), &named))
    });
}

fn bench_bursts(c: &mut Criterion) {
    let mut group = c.benchmark_group("burst_pump");
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 21, 0, 0).unwrap();

    for bursts in [1usize, 4, 16].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(bursts), bursts, |b, &bursts| {
            b.iter(|| {
                let mut scheduler = BurstScheduler::new(StdRng::seed_from_u64(3));
                let mut sink = CountingSink(0);
                for _ in 0..bursts {
                    scheduler.start(start);
                }
                scheduler.pump(start + Duration::seconds(3), &mut sink);
                black_box(sink.0)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_time_parts, bench_tick, bench_bursts);
criterion_main!(benches);
