use chrono::NaiveDate;

use crate::shift::Shift;

pub mod fastest_fill;
pub mod window_total;

pub use fastest_fill::FastestFill;
pub use window_total::WindowTotal;

/// Result of a fastest-fill query. Falling short of the target within the
/// horizon is an ordinary answer, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillOutcome {
    Reached {
        day_index: usize,
        date: NaiveDate,
        /// Present only when resolved at per-shift granularity.
        shift: Option<Shift>,
    },
    NotAchievable {
        horizon_days: usize,
        total_capacity: i64,
    },
}

impl FillOutcome {
    pub fn is_reached(&self) -> bool {
        matches!(self, FillOutcome::Reached { .. })
    }
}
