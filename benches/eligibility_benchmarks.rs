//! Performance benchmarks for the Leave Eligibility Engine.
//!
//! Covers the pure calculations and the HTTP round trip:
//! - Working days over a full year
//! - Validation against a large leave history
//! - Selectable dates for a one-month picker window via the API
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use chrono::{Days, NaiveDate};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use leave_engine::api::{AppState, create_router};
use leave_engine::calculation::{
    LeaveConflictIndex, WorkCalendarPolicy, count_working_days, validate,
};
use leave_engine::config::ConfigLoader;
use leave_engine::models::{
    LeaveApplicationDraft, LeaveBalance, LeaveBalances, LeaveRecord, LeaveStatus, LeaveType,
};

use axum::{body::Body, http::Request};
use tower::ServiceExt;

fn make_date(date_str: &str) -> NaiveDate {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
}

/// Creates a test state with loaded configuration.
fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config").expect("Failed to load config");
    AppState::new(config)
}

/// One-day leave records every third day from the start of 2026.
fn create_leave_history(count: usize) -> Vec<LeaveRecord> {
    let start = make_date("2026-01-01");
    (0..count)
        .map(|i| {
            let date = start + Days::new(i as u64 * 3);
            LeaveRecord {
                id: i as u64 + 1,
                leave_type: LeaveType::ALL[i % 3],
                from_date: date,
                to_date: date,
                status: if i % 5 == 0 {
                    LeaveStatus::Rejected
                } else {
                    LeaveStatus::Approved
                },
            }
        })
        .collect()
}

fn bench_full_year_working_days(c: &mut Criterion) {
    let loader = ConfigLoader::load("./config").expect("Failed to load config");
    let policy = loader.work_calendar(2026).expect("2026 calendar");
    let conflicts = LeaveConflictIndex::new(&create_leave_history(40));
    let from = make_date("2026-01-01");
    let to = make_date("2026-12-31");

    c.bench_function("working_days_full_year", |b| {
        b.iter(|| count_working_days(black_box(from), black_box(to), &policy, &conflicts))
    });
}

fn bench_validate_scaling(c: &mut Criterion) {
    let policy = WorkCalendarPolicy::default();
    let balances = LeaveBalances::new(vec![LeaveBalance::new(LeaveType::Earned, 30, 0)]);
    // Falls in a gap between history entries
    let draft = LeaveApplicationDraft {
        leave_type: Some(LeaveType::Earned),
        from_date: Some(make_date("2026-02-03")),
        to_date: Some(make_date("2026-02-04")),
        reason: "Conference".to_string(),
    };

    let mut group = c.benchmark_group("validate_history");

    for history_len in [10usize, 100, 1000].iter() {
        let conflicts = LeaveConflictIndex::new(&create_leave_history(*history_len));

        group.throughput(Throughput::Elements(*history_len as u64));
        group.bench_with_input(
            BenchmarkId::new("records", history_len),
            history_len,
            |b, _| b.iter(|| black_box(validate(&draft, &policy, &conflicts, &balances))),
        );
    }

    group.finish();
}

fn bench_selectable_dates_api(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(create_test_state());
    let body = serde_json::json!({
        "from_date": "2026-03-01",
        "to_date": "2026-03-31",
        "today": "2026-03-01",
        "leaves": create_leave_history(100)
    })
    .to_string();

    c.bench_function("selectable_dates_one_month", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/selectable-dates")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

criterion_group!(
    benches,
    bench_full_year_working_days,
    bench_validate_scaling,
    bench_selectable_dates_api,
);
criterion_main!(benches);
