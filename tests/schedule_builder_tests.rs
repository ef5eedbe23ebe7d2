use chrono::NaiveDate;
use ibc_fill_planner::{DaySchedule, PlanConfig, PlanError, Shift, ShiftCapacities};

fn d(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn config(start: NaiveDate, horizon: i64, starting_shift: Shift) -> PlanConfig {
    PlanConfig::new(start, horizon, ShiftCapacities::uniform(3, 5), starting_shift)
}

#[test]
fn weekdays_carry_the_day_shift_bonus() {
    // 2025-01-06 is a Monday; Mon-Wed are all weekdays.
    let cfg = config(d(2025, 1, 6), 3, Shift::Morning);
    let schedule = DaySchedule::build(&cfg).unwrap();
    assert_eq!(schedule.capacities().unwrap(), vec![14, 14, 14]);
}

#[test]
fn weekends_drop_the_day_shift() {
    // 2025-01-03 is a Friday; the window covers Fri, Sat, Sun, Mon.
    let cfg = config(d(2025, 1, 3), 4, Shift::Morning);
    let schedule = DaySchedule::build(&cfg).unwrap();
    assert_eq!(schedule.capacities().unwrap(), vec![14, 9, 9, 14]);
}

#[test]
fn first_day_counts_only_shifts_from_starting_shift() {
    // Monday start at Afternoon: day 0 = Afternoon + Night = 6, Day excluded
    // because filling has already passed it.
    let cfg = config(d(2025, 1, 6), 2, Shift::Afternoon);
    let schedule = DaySchedule::build(&cfg).unwrap();
    assert_eq!(schedule.capacities().unwrap(), vec![6, 14]);
}

#[test]
fn first_day_on_saturday_excludes_day_shift_too() {
    // 2025-01-04 is a Saturday; Afternoon start = Afternoon + Night = 6.
    let cfg = config(d(2025, 1, 4), 1, Shift::Afternoon);
    let schedule = DaySchedule::build(&cfg).unwrap();
    assert_eq!(schedule.capacities().unwrap(), vec![6]);
}

#[test]
fn first_day_starting_at_day_shift_keeps_it_on_weekdays() {
    let cfg = config(d(2025, 1, 6), 1, Shift::Day);
    let schedule = DaySchedule::build(&cfg).unwrap();
    // Day + Afternoon + Night = 5 + 3 + 3
    assert_eq!(schedule.capacities().unwrap(), vec![11]);
}

#[test]
fn dates_ascend_from_start_date() {
    let cfg = config(d(2025, 1, 6), 5, Shift::Morning);
    let schedule = DaySchedule::build(&cfg).unwrap();
    let dates = schedule.dates().unwrap();
    assert_eq!(dates.len(), 5);
    assert_eq!(dates[0], d(2025, 1, 6));
    assert_eq!(dates[4], d(2025, 1, 10));
}

#[test]
fn build_is_deterministic() {
    let cfg = config(d(2025, 1, 6), 15, Shift::Night);
    let a = DaySchedule::build(&cfg).unwrap();
    let b = DaySchedule::build(&cfg).unwrap();
    assert_eq!(a.capacities().unwrap(), b.capacities().unwrap());
    assert_eq!(a.dates().unwrap(), b.dates().unwrap());
}

#[test]
fn zero_horizon_is_rejected() {
    let cfg = config(d(2025, 1, 6), 0, Shift::Morning);
    match DaySchedule::build(&cfg) {
        Err(PlanError::InvalidHorizon(0)) => {}
        other => panic!("expected InvalidHorizon, got {other:?}"),
    }
}

#[test]
fn negative_shift_capacity_is_rejected() {
    let mut cfg = config(d(2025, 1, 6), 5, Shift::Morning);
    cfg.capacities.set(Shift::Night, -1);
    match DaySchedule::build(&cfg) {
        Err(PlanError::InvalidCapacity {
            shift: Some(Shift::Night),
            value: -1,
        }) => {}
        other => panic!("expected InvalidCapacity, got {other:?}"),
    }
}

#[test]
fn default_config_matches_planner_defaults() {
    let cfg = PlanConfig::default();
    assert_eq!(cfg.horizon_days, 15);
    assert_eq!(cfg.starting_shift, Shift::Morning);
    assert_eq!(cfg.capacities, ShiftCapacities::uniform(3, 5));
}
