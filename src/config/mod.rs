mod defaults;
mod io;
mod schema;
mod validate;

#[cfg(test)]
mod tests;

pub(crate) use io::load_chart_settings;
pub(crate) use schema::ChartSettings;
#[allow(unused_imports)]
pub(crate) use validate::ConfigError;
