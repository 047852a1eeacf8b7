//! Performance benchmarks for the payroll core.
//!
//! Covers the net salary formula, payroll runs over growing record sets, and
//! a fetch-all plus payroll run against an in-memory store.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use payroll_core::calculation::{net_salary, process_payroll};
use payroll_core::models::{Employee, EmployeeRecord, PayComponents};
use payroll_core::store::{EmployeeStore, StoreOptions};

const DEPARTMENTS: [&str; 4] = ["Eng", "Sales", "Ops", "Finance"];
const POSITIONS: [&str; 3] = ["Engineer", "Manager", "Clerk"];

/// Creates a record with salary and overtime varied by index.
fn create_record(i: usize) -> EmployeeRecord {
    let mut record = EmployeeRecord::new(
        format!("Employee {:04}", i),
        POSITIONS[i % POSITIONS.len()],
        DEPARTMENTS[i % DEPARTMENTS.len()],
        Decimal::new(1_500_000 + (i as i64 % 50) * 12_345, 2),
        "2024-01-01",
    );
    record.overtime_hours = (i % 20) as u32;
    record
}

fn create_employees(count: usize) -> Vec<Employee> {
    (0..count)
        .map(|i| Employee::new(i as i64 + 1, create_record(i)))
        .collect()
}

/// Benchmark: Net salary for one record.
fn bench_net_salary(c: &mut Criterion) {
    let record = create_record(7);
    c.bench_function("net_salary", |b| b.iter(|| net_salary(black_box(&record))));
}

/// Benchmark: Payroll run scaling with employee count.
fn bench_process_payroll(c: &mut Criterion) {
    let components = PayComponents::standard();
    let mut group = c.benchmark_group("process_payroll");

    for count in [10usize, 100, 1000].iter() {
        let employees = create_employees(*count);
        group.throughput(Throughput::Elements(*count as u64));
        group.bench_with_input(BenchmarkId::new("employees", count), count, |b, _| {
            b.iter(|| process_payroll(black_box(&employees), &components))
        });
    }

    group.finish();
}

/// Benchmark: Fetch all from the store and run payroll.
fn bench_store_payroll(c: &mut Criterion) {
    let store = EmployeeStore::open_in_memory(StoreOptions::default()).expect("Failed to open store");
    for i in 0..500 {
        store.create(&create_record(i)).expect("Failed to seed store");
    }
    let components = PayComponents::standard();

    let mut group = c.benchmark_group("store_payroll");
    group.throughput(Throughput::Elements(500));
    group.sample_size(20);
    group.bench_function("fetch_all_and_process_500", |b| {
        b.iter(|| {
            let employees = store.fetch_all().expect("fetch_all failed");
            black_box(process_payroll(&employees, &components))
        })
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_net_salary,
    bench_process_payroll,
    bench_store_payroll,
);
criterion_main!(benches);
