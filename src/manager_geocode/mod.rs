pub mod errors;
mod models;

use std::time::Duration;
use log::info;
use reqwest::Client;
use crate::initialization::GeocodingConfig;
use crate::manager_geocode::errors::GeocodeError;
use crate::manager_geocode::models::Place;


/// Struct for resolving postal codes to coordinates using a Nominatim service
pub struct Nominatim {
    client: Client,
    base_url: String,
}

impl Nominatim {
    /// Returns a Nominatim struct ready for postal code lookups
    ///
    /// # Arguments
    ///
    /// * 'config' - geocoding section of the configuration
    /// * 'user_agent' - User-Agent to identify with, required by the Nominatim usage policy
    pub fn new(config: &GeocodingConfig, user_agent: &str) -> Result<Nominatim, GeocodeError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Returns latitude and longitude for the given postal code
    ///
    /// # Arguments
    ///
    /// * 'postal_code' - the postal code to look up
    /// * 'country' - country code the postal code belongs to
    pub async fn postal_code(&self, postal_code: &str, country: &str) -> Result<(f64, f64), GeocodeError> {
        let req = self.client
            .get(format!("{}/search", self.base_url))
            .query(&[("postalcode", postal_code), ("country", country), ("format", "json"), ("limit", "1")])
            .send().await?;

        let status = req.status();
        if !status.is_success() {
            return Err(GeocodeError::Geocode(format!("Error while geocoding {}: {}", postal_code, status)));
        }

        let json = req.text().await?;
        let (lat, long) = first_coordinates(&json)?
            .ok_or_else(|| GeocodeError::NotFound(format!("no location for postal code {} ({})", postal_code, country)))?;

        info!("postal code {} resolved to {}, {}", postal_code, lat, long);
        Ok((lat, long))
    }
}

/// Parses a Nominatim search result and returns the coordinates of the first place, if any
///
/// # Arguments
///
/// * 'json' - the search result document
fn first_coordinates(json: &str) -> Result<Option<(f64, f64)>, GeocodeError> {
    let places: Vec<Place> = serde_json::from_str(json)?;

    match places.first() {
        Some(place) => Ok(Some((place.lat.parse()?, place.lon.parse()?))),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn nominatim(server: &MockServer) -> Nominatim {
        let config = GeocodingConfig { base_url: format!("{}/", server.uri()) };
        Nominatim::new(&config, "(nookweather/test, someone@example.com)").unwrap()
    }

    #[tokio::test]
    async fn test_postal_code() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .and(query_param("postalcode", "02134"))
            .and(query_param("country", "US"))
            .and(query_param("format", "json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"place_id": 282457410, "lat": "42.3548561", "lon": "-71.1321364"}
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let (lat, long) = nominatim(&server).postal_code("02134", "US").await.unwrap();
        assert!((lat - 42.3548561).abs() < 1e-9);
        assert!((long + 71.1321364).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_postal_code_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let result = nominatim(&server).postal_code("00000", "US").await;
        assert!(matches!(result, Err(GeocodeError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_postal_code_error_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(429))
            .mount(&server)
            .await;

        let result = nominatim(&server).postal_code("02134", "US").await;
        assert!(matches!(result, Err(GeocodeError::Geocode(_))));
    }

    #[test]
    fn test_first_coordinates() {
        let json = r#"[
            {
                "place_id": 282457410,
                "lat": "42.3548561",
                "lon": "-71.1321364",
                "display_name": "Boston, Suffolk County, Massachusetts, 02134, United States"
            }
        ]"#;
        let (lat, long) = first_coordinates(json).unwrap().unwrap();
        assert!((lat - 42.3548561).abs() < 1e-9);
        assert!((long + 71.1321364).abs() < 1e-9);
    }

    #[test]
    fn test_first_coordinates_empty() {
        assert!(first_coordinates("[]").unwrap().is_none());
    }

    #[test]
    fn test_first_coordinates_bad_number() {
        let json = r#"[{"lat": "north", "lon": "-71.1"}]"#;
        assert!(matches!(first_coordinates(json), Err(GeocodeError::Document(_))));
    }
}
