/*!
 * Scheduling Policy Benchmarks
 *
 * Compare engine cost of round robin, FCFS and priority over growing
 * synthetic workloads
 */

use cpu_sched_sim::{simulate, ProcessDescriptor, SchedulingPolicy, TimeQuantum};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn workload(count: usize) -> Vec<ProcessDescriptor> {
    let mut rng = StdRng::seed_from_u64(42);
    let mut arrival = 0i64;
    (0..count)
        .map(|i| {
            arrival += rng.gen_range(0..=2);
            ProcessDescriptor::new(i as u32 + 1, format!("P{}", i + 1), arrival, rng.gen_range(3..=12))
                .with_priority(rng.gen_range(1..=5))
        })
        .collect()
}

fn bench_policies(c: &mut Criterion) {
    let mut group = c.benchmark_group("simulate");

    for count in [8usize, 64, 256] {
        let descriptors = workload(count);

        for policy in SchedulingPolicy::ALL {
            group.bench_with_input(
                BenchmarkId::new(policy.label(), count),
                &descriptors,
                |b, descriptors| {
                    b.iter(|| {
                        simulate(
                            black_box(descriptors.clone()),
                            policy,
                            TimeQuantum::default(),
                        )
                        .unwrap()
                    });
                },
            );
        }
    }

    group.finish();
}

fn bench_quantum_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("round_robin_quantum");
    let descriptors = workload(128);

    for quantum in [1u64, 2, 4, 8] {
        group.bench_with_input(BenchmarkId::from_parameter(quantum), &quantum, |b, &quantum| {
            let quantum = TimeQuantum::new(quantum).unwrap();
            b.iter(|| {
                simulate(
                    black_box(descriptors.clone()),
                    SchedulingPolicy::RoundRobin,
                    quantum,
                )
                .unwrap()
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_policies, bench_quantum_sweep);
criterion_main!(benches);
