use serde::Serialize;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CurrentConditions {
    pub date: String,
    pub last_updated: String,
    pub temperature: String,
    pub icon: String,
    pub high: String,
    pub low: String,
    pub wind: String,
    pub wind_direction: String,
    pub humidity: String,
    pub pressure: String,
    pub short_forecast: String,
    pub detailed_forecast: String,
    pub city: String,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct HourlyEntry {
    pub time: String,
    pub icon: String,
    pub short_forecast: String,
    pub temperature: f64,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct DailyEntry {
    pub day: String,
    pub date: String,
    pub icon: String,
    pub short_forecast: String,
    pub high: f64,
    pub low: f64,
}

/// Everything the weather page shows
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct WeatherView {
    pub current: CurrentConditions,
    pub hourly: Vec<HourlyEntry>,
    pub daily: Vec<DailyEntry>,
}
