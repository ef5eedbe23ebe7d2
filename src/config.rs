use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{PlanError, PlanResult};
use crate::shift::{Shift, ShiftCapacities};

/// Everything the planner needs to derive a day schedule. Two configs that
/// compare equal derive identical schedules, which is what the session layer
/// relies on to decide whether user edits survive a reconfiguration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanConfig {
    pub start_date: NaiveDate,
    pub horizon_days: i64,
    pub capacities: ShiftCapacities,
    pub starting_shift: Shift,
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            start_date: NaiveDate::from_ymd_opt(2025, 1, 6).unwrap(),
            horizon_days: 15,
            capacities: ShiftCapacities::default(),
            starting_shift: Shift::Morning,
        }
    }
}

impl PlanConfig {
    pub fn new(
        start_date: NaiveDate,
        horizon_days: i64,
        capacities: ShiftCapacities,
        starting_shift: Shift,
    ) -> Self {
        Self {
            start_date,
            horizon_days,
            capacities,
            starting_shift,
        }
    }

    pub fn validate(&self) -> PlanResult<()> {
        if self.horizon_days < 1 {
            return Err(PlanError::InvalidHorizon(self.horizon_days));
        }
        self.capacities.validate()
    }
}
