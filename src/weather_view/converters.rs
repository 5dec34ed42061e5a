use crate::manager_nws::models::QuantitativeValue;

/// Placeholder for values the station did not report
pub const NOT_AVAILABLE: &str = "N/A";

const COMPASS: [(&str, f64, f64); 8] = [
    ("N", 0.0, 22.5),
    ("NE", 22.5, 67.5),
    ("E", 67.5, 112.5),
    ("SE", 112.5, 157.5),
    ("S", 157.5, 202.5),
    ("SW", 202.5, 247.5),
    ("W", 247.5, 292.5),
    ("NW", 292.5, 337.5),
];

/// Convert Celsius to Fahrenheit
///
/// # Arguments
///
/// * 'temp' - temperature in Celsius
pub fn celsius_to_fahrenheit(temp: Option<f64>) -> Option<f64> {
    temp.map(|t| t * 1.8 + 32.0)
}

/// Returns an observed temperature in Fahrenheit.
/// Only values reported in Celsius are converted, anything else is taken as is.
///
/// # Arguments
///
/// * 'temp' - observed temperature with its unit code
pub fn temperature_in_fahrenheit(temp: &QuantitativeValue) -> Option<f64> {
    if temp.unit_code.ends_with("degC") {
        celsius_to_fahrenheit(temp.value)
    } else {
        temp.value
    }
}

/// Formats a temperature for display, e.g. 72.9 becomes "72°".
/// The value is truncated towards zero, not rounded.
///
/// # Arguments
///
/// * 'temp' - temperature in any unit
pub fn format_temperature(temp: Option<f64>) -> String {
    match temp {
        Some(t) => format!("{}°", t.trunc() as i64),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Converts a wind bearing to one of eight compass points.
/// Bearings from 337.5 and up, as well as anything outside the table, map to north.
///
/// # Arguments
///
/// * 'bearing' - wind direction in degrees
pub fn bearing_to_compass(bearing: Option<f64>) -> &'static str {
    let bearing = match bearing {
        Some(b) => b,
        None => return "",
    };

    COMPASS.iter()
        .find(|(_, lower, upper)| *lower <= bearing && bearing < *upper)
        .map(|(point, _, _)| *point)
        .unwrap_or("N")
}

/// Extracts the condition key from an NWS icon url,
/// e.g. "https://api.weather.gov/icons/land/day/tsra_hi,40/rain,30?size=medium" gives "tsra_hi"
///
/// # Arguments
///
/// * 'url' - icon url from a forecast period
pub fn condition_from_icon_url(url: &str) -> &str {
    let path = url.split('?').next().unwrap_or(url);
    let path = path.split(',').next().unwrap_or(path);
    path.rsplit('/').next().unwrap_or(path)
}

/// Converts from kilometers per hour to miles per hour.
///
/// # Arguments
///
/// * 'kph' - kilometers per hour
fn kph_to_mph(kph: f64) -> f64 {
    kph / 1.609344
}

/// Formats wind speed and direction, e.g. "5 MPH N"
///
/// # Arguments
///
/// * 'speed' - observed wind speed with its unit code
/// * 'compass' - compass point the wind comes from
pub fn format_wind(speed: &QuantitativeValue, compass: &str) -> String {
    let mph = if speed.unit_code.ends_with("km_h-1") {
        speed.value.map(kph_to_mph)
    } else {
        speed.value
    };

    match mph {
        Some(s) => format!("{} MPH {}", s.trunc() as i64, compass).trim_end().to_string(),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Formats relative humidity, e.g. "80%"
///
/// # Arguments
///
/// * 'humidity' - relative humidity in percent
pub fn format_humidity(humidity: Option<f64>) -> String {
    match humidity {
        Some(h) => format!("{}%", h.trunc() as i64),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Formats barometric pressure in millibar, e.g. 101325 Pa becomes "1013.25 mb".
/// Whole millibar values keep one decimal, 101300 Pa becomes "1013.0 mb".
///
/// # Arguments
///
/// * 'pascal' - pressure in pascal
pub fn format_pressure(pascal: Option<f64>) -> String {
    match pascal {
        Some(p) => format!("{:?} mb", p.trunc() / 100.0),
        None => NOT_AVAILABLE.to_string(),
    }
}
