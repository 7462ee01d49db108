use chrono::NaiveDate;
use criterion::{criterion_group, criterion_main, Criterion};

use service::dto::{BankDto, BranchDto, CalendarAssignmentDto, WorkingCalendarDto};
use service::filter::{FilterCriteria, FilterOperator};
use service::Services;

fn bench_resolve(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let s = Services::in_memory();
    let on = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();

    // one bank, 50 branches, each with its own calendar assignment
    let (bank_id, branch_id) = rt.block_on(async {
        let bank_id = s
            .banks
            .create_bank(BankDto { code: "BENCH".into(), name: "Bench Bank".into(), ..Default::default() })
            .await
            .unwrap()
            .id
            .unwrap();
        let calendar_id = s
            .calendars
            .create_working_calendar_for_bank(
                bank_id,
                WorkingCalendarDto { name: "Std".into(), timezone: "UTC".into(), is_default: true, ..Default::default() },
            )
            .await
            .unwrap()
            .id
            .unwrap();
        let mut last = None;
        for i in 0..50 {
            let branch_id = s
                .branches
                .create_branch_for_bank(
                    bank_id,
                    BranchDto {
                        code: format!("B{}", i),
                        name: format!("Branch {}", i),
                        address_line1: "1 High St".into(),
                        city: "Bath".into(),
                        ..Default::default()
                    },
                )
                .await
                .unwrap()
                .id
                .unwrap();
            s.assignments
                .create_calendar_assignment(CalendarAssignmentDto {
                    calendar_id: Some(calendar_id),
                    branch_id: Some(branch_id),
                    effective_from: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
                    ..Default::default()
                })
                .await
                .unwrap();
            last = Some(branch_id);
        }
        (bank_id, last.unwrap())
    });

    c.bench_function("resolve_calendar_branch_level", |b| {
        b.to_async(&rt).iter(|| async {
            s.assignments.resolve_calendar(bank_id, branch_id, None, None, on).await.unwrap();
        });
    });

    c.bench_function("filter_branches_like", |b| {
        let criteria = FilterCriteria::new().with("name", FilterOperator::Like, "branch 4").paged(0, 10);
        b.to_async(&rt).iter(|| async {
            s.branches.filter_branches_for_bank(bank_id, &criteria).await.unwrap();
        });
    });
}

criterion_group!(benches, bench_resolve);
criterion_main!(benches);
