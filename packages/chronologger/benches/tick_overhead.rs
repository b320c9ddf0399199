//! Benchmarks to measure the overhead of capturing and recording time events.

#![allow(
    missing_docs,
    reason = "No need for API documentation in benchmark code"
)]

use std::hint::black_box;

use chronologger::{Clock, EventRecorder, RootTimeRepository, TimeUnit, Timer};
use criterion::{Criterion, criterion_group, criterion_main};

criterion_group!(benches, entrypoint);
criterion_main!(benches);

fn entrypoint(c: &mut Criterion) {
    let mut group = c.benchmark_group("chronologger_overhead");

    let clock = Clock::new();

    group.bench_function("tick", |b| {
        b.iter(|| black_box(clock.tick("tick")));
    });

    group.bench_function("tick_subtract", |b| {
        let start = clock.tick("start");
        b.iter(|| {
            let end = clock.tick_in("end", TimeUnit::Nanoseconds);
            black_box((&end - &start).elapsed())
        });
    });

    group.bench_function("recorder_add", |b| {
        let mut recorder = EventRecorder::new();
        b.iter(|| black_box(recorder.add(clock.tick("event"))));
    });

    group.bench_function("repository_add", |b| {
        let mut repository = RootTimeRepository::new("bench");
        repository
            .register("target", "root")
            .expect("fresh repository has no timer named target");

        b.iter(|| {
            black_box(
                repository
                    .add(clock.tick("event"), "target")
                    .expect("target timer is registered"),
            )
        });
    });

    group.bench_function("timer_measure_empty", |b| {
        let mut timer = Timer::builder().name("empty").build();

        b.iter(|| {
            timer.reset();
            black_box(timer.measure(|| ()).expect("timer was reset"))
        });
    });

    group.finish();
}
