//! Hard-coded sample data standing in for a real data store

mod dataset;
mod directory;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

pub use dataset::clinic_dataset;
pub use directory::FixtureDirectory;

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .expect("fixture timestamp is a valid UTC instant")
}

fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("fixture date is a valid calendar day")
}
