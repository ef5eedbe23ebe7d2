use chrono::{Duration, NaiveDate};
use polars::prelude::PlSmallStr;
use polars::prelude::*;

use crate::config::PlanConfig;
use crate::error::{PlanError, PlanResult};

/// One day of the planning horizon, as handed to callers and the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayRow {
    pub day: usize,
    pub date: NaiveDate,
    pub capacity: i64,
}

/// Ordered per-day IBC capacities over the planning horizon, backed by a
/// DataFrame with `day` (Int32), `date` (Date) and `capacity` (Int64)
/// columns. Built deterministically from a `PlanConfig`; individual days can
/// then be edited in place without touching the rest of the sequence.
#[derive(Debug)]
pub struct DaySchedule {
    df: DataFrame,
    config: PlanConfig,
}

impl DaySchedule {
    pub fn build(config: &PlanConfig) -> PlanResult<Self> {
        config.validate()?;

        let horizon = config.horizon_days as usize;
        let mut day_vals: Vec<i32> = Vec::with_capacity(horizon);
        let mut date_vals: Vec<i32> = Vec::with_capacity(horizon);
        let mut cap_vals: Vec<i64> = Vec::with_capacity(horizon);

        for i in 0..horizon {
            let date = config.start_date + Duration::days(i as i64);
            let capacity = if i == 0 {
                config.capacities.partial_total(date, config.starting_shift)
            } else {
                config.capacities.daily_total(date)
            };
            day_vals.push(i as i32);
            date_vals.push(Self::date_to_i32(date));
            cap_vals.push(capacity);
        }

        let day_series = Series::new(PlSmallStr::from_static("day"), day_vals);
        let date_series =
            Series::new(PlSmallStr::from_static("date"), date_vals).cast(&DataType::Date)?;
        let cap_series = Series::new(PlSmallStr::from_static("capacity"), cap_vals);

        let df = DataFrame::new(vec![
            day_series.into_column(),
            date_series.into_column(),
            cap_series.into_column(),
        ])?;

        Ok(Self {
            df,
            config: config.clone(),
        })
    }

    pub fn dataframe(&self) -> &DataFrame {
        &self.df
    }

    pub fn config(&self) -> &PlanConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.df.height()
    }

    pub fn is_empty(&self) -> bool {
        self.df.height() == 0
    }

    pub fn date(&self, index: usize) -> PlanResult<NaiveDate> {
        self.check_index(index)?;
        let days = self
            .df
            .column("date")?
            .date()?
            .get(index)
            .ok_or(PlanError::OutOfRange {
                index,
                len: self.len(),
            })?;
        Ok(Self::date_from_i32(days))
    }

    pub fn capacity(&self, index: usize) -> PlanResult<i64> {
        self.check_index(index)?;
        self.df
            .column("capacity")?
            .i64()?
            .get(index)
            .ok_or(PlanError::OutOfRange {
                index,
                len: self.len(),
            })
    }

    pub fn capacities(&self) -> PlanResult<Vec<i64>> {
        Ok(self
            .df
            .column("capacity")?
            .i64()?
            .into_iter()
            .flatten()
            .collect())
    }

    pub fn dates(&self) -> PlanResult<Vec<NaiveDate>> {
        Ok(self
            .df
            .column("date")?
            .date()?
            .into_iter()
            .flatten()
            .map(Self::date_from_i32)
            .collect())
    }

    pub fn rows(&self) -> PlanResult<Vec<DayRow>> {
        let dates = self.dates()?;
        let caps = self.capacities()?;
        Ok(dates
            .into_iter()
            .zip(caps)
            .enumerate()
            .map(|(day, (date, capacity))| DayRow {
                day,
                date,
                capacity,
            })
            .collect())
    }

    /// Sum of all day capacities across the horizon.
    pub fn total_capacity(&self) -> PlanResult<i64> {
        Ok(self.capacities()?.iter().sum())
    }

    /// Set one day's capacity to an explicit non-negative value.
    pub fn set_capacity(&mut self, index: usize, value: i64) -> PlanResult<()> {
        if value < 0 {
            return Err(PlanError::InvalidCapacity { shift: None, value });
        }
        self.check_index(index)?;
        self.replace_capacity(index, value)
    }

    /// Zero out one day, e.g. a planned production stop.
    pub fn zero_capacity(&mut self, index: usize) -> PlanResult<()> {
        self.check_index(index)?;
        self.replace_capacity(index, 0)
    }

    /// Adjust one day's capacity by `delta`, floored at 0. The planner UI
    /// passes +5 / -5.
    pub fn adjust_capacity(&mut self, index: usize, delta: i64) -> PlanResult<()> {
        self.check_index(index)?;
        let current = self.capacity(index)?;
        self.replace_capacity(index, (current + delta).max(0))
    }

    fn check_index(&self, index: usize) -> PlanResult<()> {
        if index >= self.len() {
            return Err(PlanError::OutOfRange {
                index,
                len: self.len(),
            });
        }
        Ok(())
    }

    fn replace_capacity(&mut self, index: usize, new_value: i64) -> PlanResult<()> {
        let day_col = self.df.column("day")?;
        let cap_col = self.df.column("capacity")?;

        let new_series = cap_col
            .i64()?
            .into_iter()
            .zip(day_col.i32()?.into_iter())
            .map(|(val, day)| {
                if day == Some(index as i32) {
                    Some(new_value)
                } else {
                    val
                }
            })
            .collect::<Int64Chunked>()
            .into_series()
            .with_name(PlSmallStr::from_static("capacity"));

        self.df.replace("capacity", new_series)?;
        Ok(())
    }

    fn date_to_i32(date: NaiveDate) -> i32 {
        let epoch = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap();
        (date - epoch).num_days() as i32
    }

    fn date_from_i32(days: i32) -> NaiveDate {
        let epoch = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap();
        epoch + Duration::days(days as i64)
    }
}
