//! Criterion benchmarks for u-roster.
//!
//! Synthetic multi-store weeks of increasing size: cost evaluation,
//! greedy construction, single perturbations and a short annealing run.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use u_roster::construct::build_initial_solution;
use u_roster::cost::{evaluate, evaluate_cost, CostParams};
use u_roster::model::{Employee, Roster, Shift};
use u_roster::neighborhood::perturb;
use u_roster::random::create_rng;
use u_roster::sa::SaConfig;
use u_roster::solver::anneal;

const POSITIONS: [&str; 3] = ["Cashier", "Stocker", "Manager"];

/// `stores` stores, each with `per_position` employees per position and
/// two shifts per day.
fn synthetic_roster(stores: usize, per_position: usize) -> Roster {
    let mut employees = Vec::new();
    let mut shifts = Vec::new();
    for s in 0..stores {
        let store = format!("store{s}");
        for (p, position) in POSITIONS.iter().enumerate() {
            for i in 0..per_position {
                let first = ((i + p) % 3) as u8;
                employees.push(
                    Employee::new(format!("{store}-{position}-{i}"), *position, store.as_str())
                        .with_workdays(first, first + 4)
                        .with_max_daily_hours(8.0)
                        .with_max_weekly_hours(40.0),
                );
            }
        }
        for day in 0..7 {
            for (start, end) in [("06:00", "14:00"), ("14:00", "22:00")] {
                shifts.push(
                    Shift::new(day, start.parse().unwrap(), end.parse().unwrap(), store.as_str())
                        .with_requirement("Cashier", 2)
                        .with_requirement("Stocker", 1)
                        .with_requirement("Manager", 1),
                );
            }
        }
    }
    Roster::new(employees, shifts).unwrap()
}

fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");
    let params = CostParams::default();

    for &stores in &[1, 4, 16] {
        let roster = synthetic_roster(stores, 6);
        let schedule = build_initial_solution(&roster);
        group.bench_with_input(BenchmarkId::new("full", stores), &stores, |b, _| {
            b.iter(|| black_box(evaluate(black_box(&roster), black_box(&schedule), &params)))
        });
        group.bench_with_input(BenchmarkId::new("cost_only", stores), &stores, |b, _| {
            b.iter(|| black_box(evaluate_cost(black_box(&roster), black_box(&schedule), &params)))
        });
    }
    group.finish();
}

fn bench_construct(c: &mut Criterion) {
    let mut group = c.benchmark_group("construct");

    for &stores in &[1, 4, 16] {
        let roster = synthetic_roster(stores, 6);
        group.bench_with_input(BenchmarkId::from_parameter(stores), &roster, |b, r| {
            b.iter(|| black_box(build_initial_solution(black_box(r))))
        });
    }
    group.finish();
}

fn bench_perturb(c: &mut Criterion) {
    let mut group = c.benchmark_group("perturb");

    for &stores in &[1, 4, 16] {
        let roster = synthetic_roster(stores, 6);
        let schedule = build_initial_solution(&roster);
        let mut rng = create_rng(42);
        group.bench_with_input(BenchmarkId::from_parameter(stores), &stores, |b, _| {
            b.iter(|| black_box(perturb(&roster, black_box(&schedule), &mut rng)))
        });
    }
    group.finish();
}

fn bench_anneal(c: &mut Criterion) {
    let mut group = c.benchmark_group("anneal");
    group.sample_size(10);

    let config = SaConfig::default()
        .with_initial_temp(100.0)
        .with_min_temp(1.0)
        .with_cooling_rate(0.9)
        .with_iterations_per_temperature(100)
        .with_seed(42);
    let params = CostParams::default();

    for &stores in &[1, 4] {
        let roster = synthetic_roster(stores, 6);
        group.bench_with_input(BenchmarkId::from_parameter(stores), &roster, |b, r| {
            b.iter(|| black_box(anneal(black_box(r), &config, &params)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_evaluate, bench_construct, bench_perturb, bench_anneal);
criterion_main!(benches);
