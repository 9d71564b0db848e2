use serde::Serialize;

/// One mock weather observation: a place name, a formatted temperature and a
/// human-readable condition.
///
/// Records are baked into the binary (see `weather::fixtures`); nothing is
/// constructed or mutated at runtime, so borrowed statics are sufficient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WeatherRecord {
    pub city: &'static str,
    pub temp: &'static str,
    pub condition: &'static str,
}
