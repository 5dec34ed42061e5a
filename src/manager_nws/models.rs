use chrono::{DateTime, FixedOffset};
use serde::Deserialize;
use serde_with::{serde_as, DisplayFromStr};

/// A measured value as reported by api.weather.gov, e.g. `{"value": 20.6, "unitCode": "wmoUnit:degC"}`
///
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuantitativeValue {
    pub value: Option<f64>,
    #[serde(default)]
    pub unit_code: String,
}

#[cfg(test)]
impl QuantitativeValue {
    pub fn new(value: Option<f64>, unit_code: &str) -> Self {
        Self { value, unit_code: unit_code.to_string() }
    }
}

/// Latest observation from a weather station
///
#[serde_as]
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Observation {
    #[serde_as(as = "DisplayFromStr")]
    pub timestamp: DateTime<FixedOffset>,
    #[serde(default)]
    pub temperature: QuantitativeValue,
    #[serde(default)]
    pub wind_speed: QuantitativeValue,
    #[serde(default)]
    pub wind_direction: QuantitativeValue,
    #[serde(default)]
    pub relative_humidity: QuantitativeValue,
    #[serde(default)]
    pub barometric_pressure: QuantitativeValue,
}

/// One period of either the hourly or the 12-hour forecast.
/// Temperatures of forecast periods are reported in Fahrenheit.
///
#[serde_as]
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ForecastPeriod {
    #[serde_as(as = "DisplayFromStr")]
    pub start_time: DateTime<FixedOffset>,
    pub is_daytime: bool,
    pub temperature: f64,
    pub short_forecast: String,
    #[serde(default)]
    pub detailed_forecast: String,
    pub icon: String,
}

/// Everything fetched during one request cycle
///
#[derive(Debug, Clone)]
pub struct WeatherReport {
    pub observation: Observation,
    pub hourly: Vec<ForecastPeriod>,
    pub daily: Vec<ForecastPeriod>,
    pub station_name: String,
    pub time_zone: Option<String>,
}

#[derive(Deserialize)]
pub struct PointDocument {
    pub properties: PointProperties,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointProperties {
    pub forecast: String,
    pub forecast_hourly: String,
    pub observation_stations: String,
    pub time_zone: Option<String>,
}

#[derive(Deserialize)]
pub struct StationCollection {
    pub features: Vec<StationFeature>,
}

#[derive(Deserialize)]
pub struct StationFeature {
    pub properties: StationProperties,
}

#[derive(Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct StationProperties {
    pub station_identifier: String,
    pub name: String,
    pub time_zone: Option<String>,
}

#[derive(Deserialize)]
pub struct ObservationDocument {
    pub properties: Observation,
}

#[derive(Deserialize)]
pub struct ForecastDocument {
    pub properties: ForecastProperties,
}

#[derive(Deserialize)]
pub struct ForecastProperties {
    pub periods: Vec<ForecastPeriod>,
}
