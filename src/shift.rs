use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{PlanError, PlanResult};

/// The four filling shifts in canonical fill order. The ordering matters:
/// on the first day of a plan only the starting shift and everything after
/// it in this order can contribute capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Shift {
    Morning,
    Day,
    Afternoon,
    Night,
}

impl Shift {
    pub const ORDER: [Shift; 4] = [Shift::Morning, Shift::Day, Shift::Afternoon, Shift::Night];

    pub fn as_str(&self) -> &'static str {
        match self {
            Shift::Morning => "Morning",
            Shift::Day => "Day",
            Shift::Afternoon => "Afternoon",
            Shift::Night => "Night",
        }
    }

    /// Display label carrying the shift's time window, as shown in the planner UI.
    pub fn label(&self) -> &'static str {
        match self {
            Shift::Morning => "Morning (06-14)",
            Shift::Day => "Day (08-16, wkdays)",
            Shift::Afternoon => "Afternoon (14-22)",
            Shift::Night => "Night (22-06)",
        }
    }

    pub fn from_str(s: &str) -> Option<Shift> {
        match s {
            "Morning" => Some(Shift::Morning),
            "Day" => Some(Shift::Day),
            "Afternoon" => Some(Shift::Afternoon),
            "Night" => Some(Shift::Night),
            _ => None,
        }
    }

    /// Whether this shift is staffed on the given date. The Day shift runs
    /// Monday-Friday only; the other three run every calendar day.
    pub fn runs_on(&self, date: NaiveDate) -> bool {
        match self {
            Shift::Day => !matches!(date.weekday(), Weekday::Sat | Weekday::Sun),
            _ => true,
        }
    }
}

/// Per-shift IBC capacities. Values are kept signed so that negative inputs
/// can be rejected with a proper error at the validation boundary rather than
/// wrapping silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftCapacities {
    pub morning: i64,
    pub day: i64,
    pub afternoon: i64,
    pub night: i64,
}

impl ShiftCapacities {
    pub fn new(morning: i64, day: i64, afternoon: i64, night: i64) -> Self {
        Self {
            morning,
            day,
            afternoon,
            night,
        }
    }

    /// Capacities as configured in the source planner: one master value for
    /// the three around-the-clock shifts plus a separate weekday Day value.
    pub fn uniform(master: i64, day: i64) -> Self {
        Self::new(master, day, master, master)
    }

    pub fn get(&self, shift: Shift) -> i64 {
        match shift {
            Shift::Morning => self.morning,
            Shift::Day => self.day,
            Shift::Afternoon => self.afternoon,
            Shift::Night => self.night,
        }
    }

    pub fn set(&mut self, shift: Shift, value: i64) {
        match shift {
            Shift::Morning => self.morning = value,
            Shift::Day => self.day = value,
            Shift::Afternoon => self.afternoon = value,
            Shift::Night => self.night = value,
        }
    }

    pub fn validate(&self) -> PlanResult<()> {
        for shift in Shift::ORDER {
            let value = self.get(shift);
            if value < 0 {
                return Err(PlanError::InvalidCapacity {
                    shift: Some(shift),
                    value,
                });
            }
        }
        Ok(())
    }

    /// Sum of every shift staffed on `date`.
    pub fn daily_total(&self, date: NaiveDate) -> i64 {
        Shift::ORDER
            .iter()
            .filter(|shift| shift.runs_on(date))
            .map(|shift| self.get(*shift))
            .sum()
    }

    /// Sum over the shifts at or after `starting_shift` in canonical order,
    /// still honoring the weekday rule. Used for the first day of a plan when
    /// filling starts mid-cycle.
    pub fn partial_total(&self, date: NaiveDate, starting_shift: Shift) -> i64 {
        Shift::ORDER
            .iter()
            .filter(|shift| **shift >= starting_shift && shift.runs_on(date))
            .map(|shift| self.get(*shift))
            .sum()
    }
}

impl Default for ShiftCapacities {
    fn default() -> Self {
        Self::uniform(3, 5)
    }
}
