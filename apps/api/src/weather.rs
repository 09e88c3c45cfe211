//! Weather Client — OpenWeatherMap current-weather lookup by coordinates.
//!
//! Weather enrichment is non-essential: callers swallow failures and proceed
//! without location data rather than failing the request.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const OPENWEATHER_API_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status})")]
    Api { status: u16 },
}

/// Weather readings folded into an analysis result.
/// Temperature is passed through in the API's default units (Kelvin).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationData {
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
    pub weather: Option<String>,
}

/// Location snapshot attached to enriched chat entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationContext {
    pub coordinates: String,
    pub weather: WeatherSummary,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherSummary {
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
}

impl LocationContext {
    pub fn new(lat: f64, long: f64, data: &LocationData) -> Self {
        Self {
            coordinates: format!("{lat}, {long}"),
            weather: WeatherSummary {
                temperature: data.temperature,
                humidity: data.humidity,
            },
        }
    }
}

#[derive(Debug, Deserialize)]
struct WeatherResponse {
    main: Option<MainReadings>,
    #[serde(default)]
    weather: Vec<Condition>,
}

#[derive(Debug, Deserialize)]
struct MainReadings {
    temp: Option<f64>,
    humidity: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct Condition {
    main: Option<String>,
}

impl From<WeatherResponse> for LocationData {
    fn from(response: WeatherResponse) -> Self {
        let (temperature, humidity) = match response.main {
            Some(readings) => (readings.temp, readings.humidity),
            None => (None, None),
        };
        LocationData {
            temperature,
            humidity,
            weather: response.weather.into_iter().next().and_then(|c| c.main),
        }
    }
}

/// Valid WGS84 ranges for the optional request coordinates.
pub fn coordinates_in_range(lat: Option<f64>, long: Option<f64>) -> bool {
    lat.map_or(true, |v| (-90.0..=90.0).contains(&v))
        && long.map_or(true, |v| (-180.0..=180.0).contains(&v))
}

#[derive(Clone)]
pub struct WeatherClient {
    client: Client,
    api_key: String,
}

impl WeatherClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(10))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
        }
    }

    /// Fetches current weather for the given coordinates.
    pub async fn current(&self, lat: f64, long: f64) -> Result<LocationData, WeatherError> {
        let response = self
            .client
            .get(OPENWEATHER_API_URL)
            .query(&[
                ("lat", lat.to_string()),
                ("lon", long.to_string()),
                ("appid", self.api_key.clone()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(WeatherError::Api {
                status: status.as_u16(),
            });
        }

        let body: WeatherResponse = response.json().await?;
        Ok(LocationData::from(body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WEATHER_FIXTURE: &str = r#"{
        "coord": {"lon": 77.21, "lat": 28.67},
        "weather": [{"id": 721, "main": "Haze", "description": "haze"}],
        "main": {"temp": 301.15, "humidity": 64, "pressure": 1006},
        "name": "Delhi"
    }"#;

    #[test]
    fn test_location_data_from_full_response() {
        let response: WeatherResponse = serde_json::from_str(WEATHER_FIXTURE).unwrap();
        let data = LocationData::from(response);
        assert_eq!(data.temperature, Some(301.15));
        assert_eq!(data.humidity, Some(64.0));
        assert_eq!(data.weather.as_deref(), Some("Haze"));
    }

    #[test]
    fn test_location_data_tolerates_missing_fields() {
        let response: WeatherResponse = serde_json::from_str(r#"{"cod": 200}"#).unwrap();
        let data = LocationData::from(response);
        assert_eq!(data.temperature, None);
        assert_eq!(data.humidity, None);
        assert_eq!(data.weather, None);
    }

    #[test]
    fn test_coordinates_in_range_bounds() {
        assert!(coordinates_in_range(None, None));
        assert!(coordinates_in_range(Some(-90.0), Some(180.0)));
        assert!(!coordinates_in_range(Some(90.5), Some(0.0)));
        assert!(!coordinates_in_range(Some(0.0), Some(-180.5)));
    }

    #[test]
    fn test_location_context_formats_coordinates() {
        let data = LocationData {
            temperature: Some(295.0),
            humidity: Some(40.0),
            weather: Some("Clear".to_string()),
        };
        let context = LocationContext::new(28.67, 77.21, &data);
        assert_eq!(context.coordinates, "28.67, 77.21");
        assert_eq!(context.weather.temperature, Some(295.0));
    }
}
