pub mod calculations;
pub mod config;
pub mod error;
pub mod persistence;
pub mod schedule;
pub mod session;
pub mod shift;

pub use calculations::{FastestFill, FillOutcome, WindowTotal};
pub use config::PlanConfig;
pub use error::{PlanError, PlanResult};
pub use persistence::{
    PersistenceError, export_schedule_to_csv, import_schedule_from_csv, load_plan_from_json,
    save_plan_to_json,
};
pub use schedule::{DayRow, DaySchedule};
pub use session::{PlanningSession, Scenario, ScenarioOutcome};
pub use shift::{Shift, ShiftCapacities};
