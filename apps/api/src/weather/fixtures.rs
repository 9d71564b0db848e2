use crate::models::weather::WeatherRecord;

/// The canned reports served by the data endpoint, in response order.
pub static CITY_REPORTS: [WeatherRecord; 3] = [
    WeatherRecord {
        city: "New York",
        temp: "25°C",
        condition: "Sunny",
    },
    WeatherRecord {
        city: "London",
        temp: "18°C",
        condition: "Cloudy",
    },
    WeatherRecord {
        city: "Tokyo",
        temp: "30°C",
        condition: "Rainy",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_serializes_with_wire_field_names() {
        let value = serde_json::to_value(CITY_REPORTS[0]).unwrap();
        assert_eq!(
            value,
            json!({ "city": "New York", "temp": "25°C", "condition": "Sunny" })
        );
    }

    #[test]
    fn test_catalog_lists_three_cities_in_order() {
        let cities: Vec<&str> = CITY_REPORTS.iter().map(|r| r.city).collect();
        assert_eq!(cities, ["New York", "London", "Tokyo"]);
    }
}
