use std::fmt;

#[derive(Debug)]
pub enum GeocodeError {
    Geocode(String),
    Document(String),
    NotFound(String),
}

impl fmt::Display for GeocodeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GeocodeError::Geocode(e) => write!(f, "GeocodeError::Geocode: {}", e),
            GeocodeError::Document(e) => write!(f, "GeocodeError::Document: {}", e),
            GeocodeError::NotFound(e) => write!(f, "GeocodeError::NotFound: {}", e),
        }
    }
}
impl From<reqwest::Error> for GeocodeError {
    fn from(e: reqwest::Error) -> Self {
        GeocodeError::Geocode(e.to_string())
    }
}
impl From<serde_json::Error> for GeocodeError {
    fn from(e: serde_json::Error) -> Self {
        GeocodeError::Document(e.to_string())
    }
}
impl From<std::num::ParseFloatError> for GeocodeError {
    fn from(e: std::num::ParseFloatError) -> Self {
        GeocodeError::Document(e.to_string())
    }
}
