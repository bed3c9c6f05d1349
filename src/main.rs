mod charts;
mod config;
mod error;
mod payload;
mod response;
mod timeframe;

use std::io::Write;
use std::time::Instant;

use tracing_subscriber::EnvFilter;

use crate::config::{load_chart_settings, ChartSettings};
use crate::error::AppError;
use crate::response::ResponseEnvelope;
use crate::timeframe::{filter_by_timeframe, Timeframe};

const CONFIG_PATH: &str = "charts.toml";

fn init_json_logging() {
    if let Err(error) = tracing_log::LogTracer::init() {
        eprintln!(
            "logging bridge initialization failed (continuing with existing logger): {}",
            error
        );
    }

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .json()
        .with_current_span(false)
        .with_span_list(false)
        .finish();

    if let Err(error) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("global logger initialization failed: {}", error);
    }
}

fn run(settings: &ChartSettings) -> Result<Vec<String>, AppError> {
    let request = payload::read_request(std::io::stdin().lock())?;
    log::info!(
        "request_parsed records={} timeframe={}",
        request.records.len(),
        request.timeframe
    );

    let timeframe = Timeframe::parse(&request.timeframe)
        .ok_or_else(|| timeframe::InvalidTimeframe(request.timeframe.clone()))?;

    let filtered = filter_by_timeframe(&request.records, timeframe);
    log::info!(
        "timeframe_filter_applied timeframe={} source_records={} kept_records={}",
        timeframe.code(),
        request.records.len(),
        filtered.len()
    );

    let render_started_at = Instant::now();
    let graphs = charts::render_all(&filtered, timeframe, settings)?;
    log::info!(
        "charts_rendered count={} elapsed_ms={}",
        graphs.len(),
        render_started_at.elapsed().as_millis()
    );

    Ok(graphs)
}

fn write_response(envelope: &ResponseEnvelope) {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    if let Err(error) = response::write_response(envelope, &mut handle) {
        log::error!("response_write_failed error={}", error);
        std::process::exit(1);
    }
    if let Err(error) = handle.flush() {
        log::error!("response_flush_failed error={}", error);
        std::process::exit(1);
    }
}

fn main() {
    init_json_logging();

    let settings = match load_chart_settings(CONFIG_PATH) {
        Ok(settings) => settings,
        Err(error) => {
            log::error!("config_load_failed path={} error={}", CONFIG_PATH, error);
            std::process::exit(1);
        }
    };

    match run(&settings) {
        Ok(graphs) => {
            write_response(&ResponseEnvelope::graphs(graphs));
        }
        Err(error) => {
            log::error!("pipeline_failed error={}", error);
            write_response(&ResponseEnvelope::error(error.user_message()));
            std::process::exit(1);
        }
    }
}
