use crate::error::{PlanError, PlanResult};
use crate::schedule::DaySchedule;

/// Answers "how many IBCs in the first N days" by summing the leading window
/// of the schedule.
pub struct WindowTotal<'a> {
    schedule: &'a DaySchedule,
}

impl<'a> WindowTotal<'a> {
    pub fn new(schedule: &'a DaySchedule) -> Self {
        Self { schedule }
    }

    pub fn execute(&self, window_days: usize) -> PlanResult<i64> {
        let len = self.schedule.len();
        if window_days == 0 || window_days > len {
            return Err(PlanError::OutOfRange {
                index: window_days,
                len,
            });
        }
        let caps = self.schedule.capacities()?;
        Ok(caps[..window_days].iter().sum())
    }
}
