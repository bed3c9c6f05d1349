use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(super) struct RawRequest {
    pub data: Vec<RawSessionRecord>,
    pub timeframe: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct RawSessionRecord {
    pub study_date: String,
    pub study_time: f64,
    pub actual_study_time: f64,
    pub rest_time: f64,
}
