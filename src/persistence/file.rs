use super::{PersistenceError, PersistenceResult};
use crate::config::PlanConfig;
use crate::schedule::DaySchedule;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::Path;

/// Full planning state: the configuration plus the current, possibly edited,
/// per-day capacities.
#[derive(Serialize, Deserialize)]
struct PlanSnapshot {
    config: PlanConfig,
    capacities: Vec<i64>,
}

impl PlanSnapshot {
    fn from_schedule(schedule: &DaySchedule) -> PersistenceResult<Self> {
        Ok(Self {
            config: schedule.config().clone(),
            capacities: schedule.capacities()?,
        })
    }

    fn into_schedule(self) -> PersistenceResult<DaySchedule> {
        self.config.validate()?;
        if self.capacities.len() as i64 != self.config.horizon_days {
            return Err(PersistenceError::InvalidData(format!(
                "snapshot has {} capacities for a {}-day horizon",
                self.capacities.len(),
                self.config.horizon_days
            )));
        }
        if let Some(bad) = self.capacities.iter().find(|c| **c < 0) {
            return Err(PersistenceError::InvalidData(format!(
                "snapshot contains negative capacity {bad}"
            )));
        }

        let mut schedule = DaySchedule::build(&self.config)?;
        for (index, capacity) in self.capacities.iter().enumerate() {
            if schedule.capacity(index)? != *capacity {
                schedule.set_capacity(index, *capacity)?;
            }
        }
        Ok(schedule)
    }
}

pub fn save_plan_to_json<P: AsRef<Path>>(
    schedule: &DaySchedule,
    path: P,
) -> PersistenceResult<()> {
    let snapshot = PlanSnapshot::from_schedule(schedule)?;
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, &snapshot)?;
    Ok(())
}

pub fn load_plan_from_json<P: AsRef<Path>>(path: P) -> PersistenceResult<DaySchedule> {
    let file = File::open(path)?;
    let snapshot: PlanSnapshot = serde_json::from_reader(file)?;
    snapshot.into_schedule()
}

#[derive(Serialize, Deserialize)]
struct DayCsvRecord {
    day: usize,
    date: String,
    capacity: i64,
}

pub fn export_schedule_to_csv<P: AsRef<Path>>(
    schedule: &DaySchedule,
    path: P,
) -> PersistenceResult<()> {
    let file = File::create(path)?;
    let mut writer = csv::Writer::from_writer(file);
    for row in schedule.rows()? {
        writer.serialize(DayCsvRecord {
            day: row.day,
            date: format_date(row.date),
            capacity: row.capacity,
        })?;
    }
    writer.flush()?;
    Ok(())
}

/// Rebuild a schedule from an exported day table. The CSV carries no
/// configuration, so the caller supplies the config the table was derived
/// from; rows must line up with that config's calendar.
pub fn import_schedule_from_csv<P: AsRef<Path>>(
    config: &PlanConfig,
    path: P,
) -> PersistenceResult<DaySchedule> {
    let file = File::open(path)?;
    let mut reader = csv::Reader::from_reader(file);
    let mut records = Vec::new();
    for record in reader.deserialize::<DayCsvRecord>() {
        records.push(record?);
    }

    if records.len() as i64 != config.horizon_days {
        return Err(PersistenceError::InvalidData(format!(
            "CSV has {} rows for a {}-day horizon",
            records.len(),
            config.horizon_days
        )));
    }

    let mut schedule = DaySchedule::build(config)?;
    for (index, record) in records.iter().enumerate() {
        if record.day != index {
            return Err(PersistenceError::InvalidData(format!(
                "CSV row {index} carries day index {}",
                record.day
            )));
        }
        let date = parse_date(&record.date)?;
        if date != schedule.date(index)? {
            return Err(PersistenceError::InvalidData(format!(
                "CSV date {} does not match schedule date for day {index}",
                record.date
            )));
        }
        if record.capacity < 0 {
            return Err(PersistenceError::InvalidData(format!(
                "CSV day {index} has negative capacity {}",
                record.capacity
            )));
        }
        if schedule.capacity(index)? != record.capacity {
            schedule.set_capacity(index, record.capacity)?;
        }
    }
    Ok(schedule)
}

fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

fn parse_date(input: &str) -> PersistenceResult<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|e| PersistenceError::InvalidData(format!("invalid date '{input}': {e}")))
}
