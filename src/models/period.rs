use chrono::{Datelike, NaiveDate, NaiveDateTime};
use clap::ValueEnum;
use serde::Serialize;
use std::fmt;

/// Time window used to bucket trips for summaries and charts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Period {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl Period {
    /// Grouping key of a timestamp for this period.
    pub fn key_for(&self, ts: NaiveDateTime) -> PeriodKey {
        let date = ts.date();
        match self {
            Period::Daily => PeriodKey::Day(date),
            Period::Weekly => {
                let week = date.iso_week();
                PeriodKey::Week {
                    year: week.year(),
                    week: week.week(),
                }
            }
            Period::Monthly => PeriodKey::Month {
                year: date.year(),
                month: date.month(),
            },
            Period::Yearly => PeriodKey::Year(date.year()),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Daily => "Daily",
            Period::Weekly => "Weekly",
            Period::Monthly => "Monthly",
            Period::Yearly => "Yearly",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Bucket key. Keys produced by the same `Period` share a variant, and the
/// derived ordering of each variant is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum PeriodKey {
    Day(NaiveDate),
    /// ISO 8601 week-numbering year and week.
    Week { year: i32, week: u32 },
    Month { year: i32, month: u32 },
    Year(i32),
}

impl fmt::Display for PeriodKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeriodKey::Day(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            PeriodKey::Week { year, week } => write!(f, "{year:04}-W{week:02}"),
            PeriodKey::Month { year, month } => write!(f, "{year:04}-{month:02}"),
            PeriodKey::Year(y) => write!(f, "{y:04}"),
        }
    }
}
