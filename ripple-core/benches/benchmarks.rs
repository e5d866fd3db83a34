// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ripple_core::{Event, EventObserver, Observable, Subject};
use std::hint::black_box;

pub fn bench_subject_broadcast(c: &mut Criterion) {
    let mut group = c.benchmark_group("subject_broadcast");

    let subscriber_counts = [1usize, 8, 64, 256];
    for &subs in &subscriber_counts {
        group.throughput(Throughput::Elements(subs as u64));
        let id = BenchmarkId::from_parameter(format!("subs_{subs}"));
        group.bench_with_input(id, &subs, |bencher, &subs| {
            bencher.iter(|| {
                let subject = Subject::<u64>::new();
                let mut subscriptions = Vec::with_capacity(subs);
                for _ in 0..subs {
                    subscriptions.push(subject.observable().subscribe(EventObserver::new(
                        |event: Event<u64>| {
                            black_box(&event);
                        },
                    )));
                }

                subject.next(42);
                subject.completed();
                black_box(subscriptions);
            });
        });
    }

    group.finish();
}

pub fn bench_subscribe_dispose_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("subscribe_dispose");

    group.bench_function("cold_from_iter_100", |bencher| {
        let source = Observable::from_iter((0u64..100).collect::<Vec<_>>());
        bencher.iter(|| {
            let subscription = source.subscribe(EventObserver::new(|event: Event<u64>| {
                black_box(&event);
            }));
            black_box(subscription);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_subject_broadcast, bench_subscribe_dispose_cycle);
criterion_main!(benches);
