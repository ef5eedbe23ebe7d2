use crate::calculations::FillOutcome;
use crate::error::{PlanError, PlanResult};
use crate::schedule::DaySchedule;
use crate::shift::Shift;

/// Resolves how quickly a cumulative IBC target is reached by walking the
/// schedule in date order with a shrinking remainder.
pub struct FastestFill<'a> {
    schedule: &'a DaySchedule,
}

impl<'a> FastestFill<'a> {
    pub fn new(schedule: &'a DaySchedule) -> Self {
        Self { schedule }
    }

    /// Day-level resolution over the current (possibly edited) per-day
    /// capacities. The first day whose capacity covers the remainder answers;
    /// the comparison is inclusive, so a target exactly met on day k resolves
    /// to day k.
    pub fn execute(&self, target: i64) -> PlanResult<FillOutcome> {
        if target < 1 {
            return Err(PlanError::InvalidTarget(target));
        }

        let rows = self.schedule.rows()?;
        let mut remaining = target;
        for row in &rows {
            if remaining <= row.capacity {
                return Ok(FillOutcome::Reached {
                    day_index: row.day,
                    date: row.date,
                    shift: None,
                });
            }
            remaining -= row.capacity;
        }

        Ok(FillOutcome::NotAchievable {
            horizon_days: rows.len(),
            total_capacity: rows.iter().map(|r| r.capacity).sum(),
        })
    }

    /// Per-shift refinement: the same walk at shift granularity over the
    /// nominal configured capacities. Day 0 counts only shifts at or after the
    /// starting shift; the Day shift is skipped on weekends. Per-day capacity
    /// overrides are not visible at this granularity, so edited schedules
    /// should prefer `execute`.
    pub fn execute_with_shifts(&self, target: i64) -> PlanResult<FillOutcome> {
        if target < 1 {
            return Err(PlanError::InvalidTarget(target));
        }

        let config = self.schedule.config();
        let dates = self.schedule.dates()?;
        let mut remaining = target;
        let mut nominal_total = 0i64;

        for (day_index, date) in dates.iter().enumerate() {
            for shift in Shift::ORDER {
                if day_index == 0 && shift < config.starting_shift {
                    continue;
                }
                if !shift.runs_on(*date) {
                    continue;
                }
                let cap = config.capacities.get(shift);
                nominal_total += cap;
                if remaining <= cap {
                    return Ok(FillOutcome::Reached {
                        day_index,
                        date: *date,
                        shift: Some(shift),
                    });
                }
                remaining -= cap;
            }
        }

        Ok(FillOutcome::NotAchievable {
            horizon_days: dates.len(),
            total_capacity: nominal_total,
        })
    }
}
