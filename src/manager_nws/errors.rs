use std::fmt;
use reqwest::StatusCode;

#[derive(Debug)]
pub enum NWSError {
    /// Request could not be sent or the response not read
    Transport(String),
    /// api.weather.gov answered with a non-success status
    Status { url: String, status: StatusCode },
    /// The forecast point lists no observation station
    NoStation(String),
    Document(String),
}

impl fmt::Display for NWSError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            NWSError::Transport(e) => write!(f, "NWSError::Transport: {}", e),
            NWSError::Status { url, status } => write!(f, "NWSError::Status: {} returned {}", url, status),
            NWSError::NoStation(point) => write!(f, "NWSError::NoStation: no observation station for {}", point),
            NWSError::Document(e) => write!(f, "NWSError::Document: {}", e),
        }
    }
}
impl From<reqwest::Error> for NWSError {
    fn from(e: reqwest::Error) -> Self {
        NWSError::Transport(e.to_string())
    }
}
impl From<serde_json::Error> for NWSError {
    fn from(e: serde_json::Error) -> Self {
        NWSError::Document(e.to_string())
    }
}
