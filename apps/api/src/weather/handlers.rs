use axum::Json;

use crate::models::weather::WeatherRecord;
use crate::weather::fixtures::CITY_REPORTS;

/// ANY /api/data
///
/// Serves the canned city reports. Method, headers, query string and request
/// body are all ignored; every call returns the same three records in the
/// same order.
pub async fn handle_get_data() -> Json<&'static [WeatherRecord]> {
    Json(CITY_REPORTS.as_slice())
}
