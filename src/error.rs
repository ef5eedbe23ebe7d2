use crate::shift::Shift;
use polars::prelude::PolarsError;
use std::fmt;

#[derive(Debug)]
pub enum PlanError {
    InvalidCapacity { shift: Option<Shift>, value: i64 },
    InvalidHorizon(i64),
    InvalidTarget(i64),
    OutOfRange { index: usize, len: usize },
    DataFrame(PolarsError),
}

impl fmt::Display for PlanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanError::InvalidCapacity { shift, value } => match shift {
                Some(shift) => write!(
                    f,
                    "{} shift capacity must be non-negative (got {value})",
                    shift.as_str()
                ),
                None => write!(f, "capacity must be non-negative (got {value})"),
            },
            PlanError::InvalidHorizon(days) => {
                write!(f, "horizon must cover at least one day (got {days})")
            }
            PlanError::InvalidTarget(target) => {
                write!(f, "fill target must be positive (got {target})")
            }
            PlanError::OutOfRange { index, len } => {
                write!(f, "day index {index} out of range for {len}-day schedule")
            }
            PlanError::DataFrame(err) => write!(f, "dataframe error: {err}"),
        }
    }
}

impl std::error::Error for PlanError {}

impl From<PolarsError> for PlanError {
    fn from(value: PolarsError) -> Self {
        Self::DataFrame(value)
    }
}

pub type PlanResult<T> = Result<T, PlanError>;
