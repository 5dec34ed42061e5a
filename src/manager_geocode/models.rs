use serde::Deserialize;

/// One search hit, Nominatim reports coordinates as strings
#[derive(Deserialize)]
pub struct Place {
    pub lat: String,
    pub lon: String,
}
