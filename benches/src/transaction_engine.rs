use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use teller::prelude::*;

/// Quotas high enough that the daily limits never interfere with the
/// measurement.
fn permissive_policy() -> AccountPolicy {
    AccountPolicy {
        branch_code: "0001".to_string(),
        limits: AccountLimits {
            per_withdrawal_cap: Money::from_cents(1_000_000_000),
            daily_withdrawal_quota: usize::MAX,
            daily_transaction_quota: usize::MAX,
        },
        auto_open_on_register: true,
    }
}

fn logged_in_teller() -> Teller<InMemoryRegistry> {
    let identity = IdentityCode::parse("11122233396").unwrap();
    let mut registry = InMemoryRegistry::new(permissive_policy());
    registry
        .register_customer(Customer::new(
            identity.clone(),
            "Bench Customer".to_string(),
            NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
            "1 Bench St".to_string(),
        ))
        .unwrap();

    let mut teller = Teller::new(registry, 10);
    teller.handle(Request::Login { identity }).unwrap();
    teller
}

fn deposit_batch(count: usize) -> Vec<Request> {
    (0..count)
        .map(|_| Request::Deposit {
            amount: Money::from_cents(1_000),
        })
        .collect()
}

fn mixed_batch(count: usize) -> Vec<Request> {
    (0..count)
        .map(|i| match i % 4 {
            0 | 1 => Request::Deposit {
                amount: Money::from_cents(5_000),
            },
            2 => Request::Withdraw {
                amount: Money::from_cents(2_000),
            },
            _ => Request::Statement,
        })
        .collect()
}

/// Benchmark deposit throughput against a growing ledger
fn bench_deposit_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("deposit_throughput");

    for count in [100, 1_000, 10_000] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter_batched(
                || (logged_in_teller(), deposit_batch(count)),
                |(mut teller, requests)| {
                    for request in requests {
                        black_box(teller.handle(request).ok());
                    }
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

/// Benchmark withdrawal throughput from a funded account
fn bench_withdrawal_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("withdrawal_throughput");

    for count in [100, 1_000, 10_000] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter_batched(
                || {
                    let mut teller = logged_in_teller();
                    teller
                        .handle(Request::Deposit {
                            amount: Money::from_cents(1_000 * count as i64),
                        })
                        .unwrap();

                    let withdrawals: Vec<_> = (0..count)
                        .map(|_| Request::Withdraw {
                            amount: Money::from_cents(1_000),
                        })
                        .collect();

                    (teller, withdrawals)
                },
                |(mut teller, requests)| {
                    for request in requests {
                        black_box(teller.handle(request).ok());
                    }
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

/// Benchmark statement generation over histories of various lengths
fn bench_statement_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("statement_generation");

    for entries in [100, 1_000, 10_000] {
        group.bench_with_input(
            BenchmarkId::from_parameter(entries),
            &entries,
            |b, &entries| {
                b.iter_batched(
                    || {
                        let mut teller = logged_in_teller();
                        for _ in 0..entries {
                            teller
                                .handle(Request::Deposit {
                                    amount: Money::from_cents(100),
                                })
                                .unwrap();
                        }
                        teller
                    },
                    |mut teller| {
                        black_box(teller.handle(Request::Statement).ok());
                    },
                    BatchSize::SmallInput,
                );
            },
        );
    }

    group.finish();
}

/// Benchmark mixed request workload (realistic ratio)
fn bench_mixed_workload(c: &mut Criterion) {
    let mut group = c.benchmark_group("mixed_workload");

    for count in [1_000, 10_000] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter_batched(
                || (logged_in_teller(), mixed_batch(count)),
                |(mut teller, requests)| {
                    for request in requests {
                        black_box(teller.handle(request).ok());
                    }
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

/// Benchmark the cost of the rejection path
fn bench_rejected_withdrawal_overhead(c: &mut Criterion) {
    c.bench_function("rejected_withdrawal", |b| {
        b.iter_batched(
            logged_in_teller,
            |mut teller| {
                // Empty account, so every attempt bounces
                for _ in 0..1_000 {
                    black_box(
                        teller
                            .handle(Request::Withdraw {
                                amount: Money::from_cents(1_000),
                            })
                            .err(),
                    );
                }
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(
    benches,
    bench_deposit_throughput,
    bench_withdrawal_throughput,
    bench_statement_generation,
    bench_mixed_workload,
    bench_rejected_withdrawal_overhead,
);

criterion_main!(benches);
