pub mod errors;
pub mod models;

use std::time::Duration;
use log::debug;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::Client;
use serde::de::DeserializeOwned;
use crate::initialization::NwsConfig;
use crate::manager_nws::errors::NWSError;
use crate::manager_nws::models::{ForecastDocument, ObservationDocument, PointDocument, StationCollection, WeatherReport};


/// Struct for fetching observations and forecasts from the National Weather Service
pub struct NWS {
    client: Client,
    base_url: String,
    lat: f64,
    long: f64,
}

impl NWS {
    /// Returns a NWS struct ready for fetching weather reports from api.weather.gov
    ///
    /// The API refuses requests without a User-Agent, so one naming the application and
    /// the configured contact address is set on every request.
    ///
    /// # Arguments
    ///
    /// * 'config' - NWS section of the configuration
    /// * 'lat' - latitude of the location
    /// * 'long' - longitude of the location
    pub fn new(config: &NwsConfig, lat: f64, long: f64) -> Result<NWS, NWSError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/geo+json"));

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(user_agent(&config.contact))
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            lat,
            long,
        })
    }

    /// Retrieves everything needed for one rendering of the weather page.
    ///
    /// The location is resolved to a forecast grid point, the first station listed for that
    /// point provides the current observation, and the 12-hour and hourly forecasts are
    /// fetched together with the observation.
    pub async fn weather_report(&self) -> Result<WeatherReport, NWSError> {
        let point_url = format!("{}/points/{:0.4},{:0.4}", self.base_url, self.lat, self.long);
        let point: PointDocument = self.get_document(&point_url).await?;

        let stations: StationCollection = self.get_document(&point.properties.observation_stations).await?;
        let station = stations.features
            .into_iter()
            .next()
            .map(|f| f.properties)
            .ok_or_else(|| NWSError::NoStation(point_url.clone()))?;

        let observation_url = format!("{}/stations/{}/observations/latest",
                                      self.base_url, station.station_identifier);

        let (observation, daily, hourly) = tokio::try_join!(
            self.get_document::<ObservationDocument>(&observation_url),
            self.get_document::<ForecastDocument>(&point.properties.forecast),
            self.get_document::<ForecastDocument>(&point.properties.forecast_hourly),
        )?;

        Ok(WeatherReport {
            observation: observation.properties,
            hourly: hourly.properties.periods,
            daily: daily.properties.periods,
            station_name: station.name,
            time_zone: station.time_zone.or(point.properties.time_zone),
        })
    }

    /// Makes a request and deserializes the returned document
    ///
    /// # Arguments
    ///
    /// * 'url' - url to the document
    async fn get_document<T: DeserializeOwned>(&self, url: &str) -> Result<T, NWSError> {
        debug!("fetching {}", url);

        let req = self.client
            .get(url)
            .send().await?;

        let status = req.status();
        if !status.is_success() {
            return Err(NWSError::Status { url: url.to_string(), status });
        }

        let json = req.text().await?;
        Ok(serde_json::from_str(&json)?)
    }
}

/// User-Agent as requested by the NWS API terms of service
///
/// # Arguments
///
/// * 'contact' - contact e-mail address of whoever runs this instance
pub fn user_agent(contact: &str) -> String {
    format!("(nookweather/{}, {})", env!("CARGO_PKG_VERSION"), contact)
}
