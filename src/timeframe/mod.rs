#[cfg(test)]
mod tests;

use chrono::{DateTime, Duration, Months, Utc};
use thiserror::Error;

use crate::payload::SessionRecord;

/// Historical window selector carried in the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Timeframe {
    OneDay,
    OneWeek,
    OneMonth,
    OneYear,
    AllTime,
}

#[derive(Debug, Error)]
#[error("Invalid timeframe {0:?}: use 1D, 1W, 1M, 1Y, AT")]
pub(crate) struct InvalidTimeframe(pub String);

impl Timeframe {
    pub(crate) fn parse(input: &str) -> Option<Self> {
        match input {
            "1D" => Some(Self::OneDay),
            "1W" => Some(Self::OneWeek),
            "1M" => Some(Self::OneMonth),
            "1Y" => Some(Self::OneYear),
            "AT" => Some(Self::AllTime),
            _ => None,
        }
    }

    pub(crate) fn code(self) -> &'static str {
        match self {
            Self::OneDay => "1D",
            Self::OneWeek => "1W",
            Self::OneMonth => "1M",
            Self::OneYear => "1Y",
            Self::AllTime => "AT",
        }
    }
}

/// Keeps records dated on or after the window cutoff, preserving input order.
/// The cutoff is anchored to the newest record in the set, not the wall
/// clock, so historical payloads filter reproducibly.
pub(crate) fn filter_by_timeframe(
    records: &[SessionRecord],
    timeframe: Timeframe,
) -> Vec<SessionRecord> {
    let Some(newest) = records.iter().map(|record| record.study_date).max() else {
        return Vec::new();
    };

    let cutoff = window_start(newest, records, timeframe);
    records
        .iter()
        .filter(|record| record.study_date >= cutoff)
        .cloned()
        .collect()
}

fn window_start(
    newest: DateTime<Utc>,
    records: &[SessionRecord],
    timeframe: Timeframe,
) -> DateTime<Utc> {
    match timeframe {
        Timeframe::OneDay => newest - Duration::days(1),
        Timeframe::OneWeek => newest - Duration::days(7),
        // Calendar-aware shifts: end-of-month and leap-day dates clamp to the
        // last valid day of the target month.
        Timeframe::OneMonth => newest
            .checked_sub_months(Months::new(1))
            .unwrap_or(DateTime::<Utc>::MIN_UTC),
        Timeframe::OneYear => newest
            .checked_sub_months(Months::new(12))
            .unwrap_or(DateTime::<Utc>::MIN_UTC),
        Timeframe::AllTime => records
            .iter()
            .map(|record| record.study_date)
            .min()
            .unwrap_or(newest),
    }
}
