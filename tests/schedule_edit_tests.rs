use chrono::NaiveDate;
use ibc_fill_planner::{DaySchedule, PlanConfig, PlanError, Shift, ShiftCapacities};

fn d(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn monday_schedule(horizon: i64) -> DaySchedule {
    let cfg = PlanConfig::new(
        d(2025, 1, 6),
        horizon,
        ShiftCapacities::uniform(3, 5),
        Shift::Morning,
    );
    DaySchedule::build(&cfg).unwrap()
}

#[test]
fn set_capacity_touches_only_target_day() {
    let mut schedule = monday_schedule(3);
    schedule.set_capacity(1, 30).unwrap();
    assert_eq!(schedule.capacities().unwrap(), vec![14, 30, 14]);
}

#[test]
fn zero_capacity_clears_a_day() {
    let mut schedule = monday_schedule(3);
    schedule.zero_capacity(0).unwrap();
    assert_eq!(schedule.capacities().unwrap(), vec![0, 14, 14]);
}

#[test]
fn adjust_capacity_applies_delta() {
    let mut schedule = monday_schedule(2);
    schedule.adjust_capacity(0, 5).unwrap();
    schedule.adjust_capacity(1, -5).unwrap();
    assert_eq!(schedule.capacities().unwrap(), vec![19, 9]);
}

#[test]
fn adjust_capacity_floors_at_zero() {
    let mut schedule = monday_schedule(1);
    schedule.adjust_capacity(0, -5).unwrap();
    schedule.adjust_capacity(0, -5).unwrap();
    assert_eq!(schedule.capacity(0).unwrap(), 4);
    schedule.adjust_capacity(0, -5).unwrap();
    assert_eq!(schedule.capacity(0).unwrap(), 0);
}

#[test]
fn edits_out_of_range_fail() {
    let mut schedule = monday_schedule(3);
    for result in [
        schedule.set_capacity(3, 1),
        schedule.zero_capacity(7),
        schedule.adjust_capacity(3, 5),
    ] {
        match result {
            Err(PlanError::OutOfRange { len: 3, .. }) => {}
            other => panic!("expected OutOfRange, got {other:?}"),
        }
    }
}

#[test]
fn set_capacity_rejects_negative_values() {
    let mut schedule = monday_schedule(1);
    match schedule.set_capacity(0, -2) {
        Err(PlanError::InvalidCapacity {
            shift: None,
            value: -2,
        }) => {}
        other => panic!("expected InvalidCapacity, got {other:?}"),
    }
    assert_eq!(schedule.capacity(0).unwrap(), 14);
}
