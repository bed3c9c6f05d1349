mod error;
mod model;


use std::io::Read;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};

pub(crate) use error::PayloadError;

use model::RawRequest;

/// One study session row, dates resolved to UTC.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SessionRecord {
    pub study_date: DateTime<Utc>,
    pub study_time: f64,
    pub actual_study_time: f64,
    pub rest_time: f64,
}

pub(crate) struct AnalysisRequest {
    pub records: Vec<SessionRecord>,
    pub timeframe: String,
}

pub(crate) fn read_request(mut reader: impl Read) -> Result<AnalysisRequest, PayloadError> {
    let mut raw = String::new();
    reader
        .read_to_string(&mut raw)
        .map_err(PayloadError::Read)?;
    parse_request(&raw)
}

pub(crate) fn parse_request(raw: &str) -> Result<AnalysisRequest, PayloadError> {
    let request: RawRequest = serde_json::from_str(raw)?;

    let mut records = Vec::with_capacity(request.data.len());
    for (index, row) in request.data.into_iter().enumerate() {
        let study_date = parse_study_date(&row.study_date)
            .ok_or_else(|| PayloadError::DateParse {
                index,
                value: row.study_date,
            })?;
        records.push(SessionRecord {
            study_date,
            study_time: row.study_time,
            actual_study_time: row.actual_study_time,
            rest_time: row.rest_time,
        });
    }

    Ok(AnalysisRequest {
        records,
        timeframe: request.timeframe,
    })
}

/// Accepts RFC 3339, `YYYY-MM-DDTHH:MM:SS`, `YYYY-MM-DD HH:MM:SS`, and bare
/// `YYYY-MM-DD` (midnight). Values without an offset are taken as UTC.
fn parse_study_date(raw: &str) -> Option<DateTime<Utc>> {
    let trimmed = raw.trim();

    if let Ok(date_time) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(date_time.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN)));
    }

    None
}
