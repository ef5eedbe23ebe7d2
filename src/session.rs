use crate::calculations::{FastestFill, FillOutcome, WindowTotal};
use crate::config::PlanConfig;
use crate::error::PlanResult;
use crate::schedule::DaySchedule;

/// Which of the two planning questions is being asked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scenario {
    FastestFill { target: i64 },
    TotalOverWindow { days: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScenarioOutcome {
    FastestFill(FillOutcome),
    TotalOverWindow(i64),
}

/// One planning session: a configuration plus the day schedule derived from
/// it. Per-day edits accumulate on the schedule and survive queries; any
/// change to the configuration rebuilds the schedule and discards them, since
/// the edits were made against capacities that no longer apply.
pub struct PlanningSession {
    config: PlanConfig,
    schedule: DaySchedule,
}

impl PlanningSession {
    pub fn new(config: PlanConfig) -> PlanResult<Self> {
        let schedule = DaySchedule::build(&config)?;
        Ok(Self { config, schedule })
    }

    pub fn config(&self) -> &PlanConfig {
        &self.config
    }

    pub fn schedule(&self) -> &DaySchedule {
        &self.schedule
    }

    /// Apply a configuration. Rebuilds the schedule only when the new config
    /// differs from the held snapshot; returns whether a rebuild happened.
    pub fn apply_config(&mut self, config: PlanConfig) -> PlanResult<bool> {
        if config == self.config {
            return Ok(false);
        }
        self.schedule = DaySchedule::build(&config)?;
        self.config = config;
        Ok(true)
    }

    pub fn set_capacity(&mut self, index: usize, value: i64) -> PlanResult<()> {
        self.schedule.set_capacity(index, value)
    }

    pub fn zero_capacity(&mut self, index: usize) -> PlanResult<()> {
        self.schedule.zero_capacity(index)
    }

    pub fn adjust_capacity(&mut self, index: usize, delta: i64) -> PlanResult<()> {
        self.schedule.adjust_capacity(index, delta)
    }

    pub fn run(&self, scenario: Scenario) -> PlanResult<ScenarioOutcome> {
        match scenario {
            Scenario::FastestFill { target } => {
                let outcome = FastestFill::new(&self.schedule).execute(target)?;
                Ok(ScenarioOutcome::FastestFill(outcome))
            }
            Scenario::TotalOverWindow { days } => {
                let total = WindowTotal::new(&self.schedule).execute(days)?;
                Ok(ScenarioOutcome::TotalOverWindow(total))
            }
        }
    }
}
