pub mod converters;
pub mod errors;
pub mod icons;
pub mod models;
pub mod selector;
#[cfg(test)]
mod fixtures;

use chrono_tz::Tz;
use log::warn;
use crate::manager_nws::models::WeatherReport;
use crate::weather_view::converters::{
    bearing_to_compass, format_humidity, format_pressure, format_temperature, format_wind,
    temperature_in_fahrenheit,
};
use crate::weather_view::errors::AssembleError;
use crate::weather_view::icons::IconTable;
use crate::weather_view::models::{CurrentConditions, WeatherView};
use crate::weather_view::selector::{pair_daily, select_hourly};

/// Fewest hourly periods a report must hold, the hourly selection reads up to index 12
pub const MIN_HOURLY_PERIODS: usize = 13;

/// Fewest 12-hour periods a report must hold, six day/night pairs
pub const MIN_DAILY_PERIODS: usize = 12;

/// Turns a fetched weather report into what the weather page displays.
///
/// Either every part of the view is produced or an error is returned, a report that is too
/// short or refers to an icon missing from the icon table never gives a partial view.
/// Values the station did not report show up as "N/A".
///
/// # Arguments
///
/// * 'report' - observation and forecasts from one fetch
/// * 'icons' - icon lookup table
pub fn assemble(report: &WeatherReport, icons: &IconTable) -> Result<WeatherView, AssembleError> {
    if report.hourly.len() < MIN_HOURLY_PERIODS || report.daily.len() < MIN_DAILY_PERIODS {
        return Err(AssembleError::InsufficientData(format!(
            "got {} hourly and {} daily periods, need {} and {}",
            report.hourly.len(), report.daily.len(), MIN_HOURLY_PERIODS, MIN_DAILY_PERIODS)));
    }

    let observation = &report.observation;
    let observed = observation.timestamp.with_timezone(&time_zone(report.time_zone.as_deref()));

    let this_hour = &report.hourly[0];
    let first = report.daily[0].temperature;
    let second = report.daily[1].temperature;
    let compass = bearing_to_compass(observation.wind_direction.value);

    let current = CurrentConditions {
        date: observed.format("%A, %B %d %Y").to_string(),
        last_updated: observed.format("%Y-%m-%d %I:%M%p %Z").to_string(),
        temperature: format_temperature(temperature_in_fahrenheit(&observation.temperature)),
        icon: icons.icon_src(&this_hour.icon, this_hour.is_daytime)?,
        high: format_temperature(Some(first.max(second))),
        low: format_temperature(Some(first.min(second))),
        wind: format_wind(&observation.wind_speed, compass),
        wind_direction: compass.to_string(),
        humidity: format_humidity(observation.relative_humidity.value),
        pressure: format_pressure(observation.barometric_pressure.value),
        short_forecast: this_hour.short_forecast.clone(),
        detailed_forecast: report.daily[0].detailed_forecast.clone(),
        city: report.station_name.clone(),
    };

    let hourly = select_hourly(&report.hourly, icons)?;
    let daily = pair_daily(&report.daily, icons)?;

    Ok(WeatherView { current, hourly, daily })
}

/// Resolves an IANA time zone name, falling back to UTC when it is missing or unknown
///
/// # Arguments
///
/// * 'name' - time zone name, e.g. "America/New_York"
pub fn time_zone(name: Option<&str>) -> Tz {
    match name.map(|n| n.parse::<Tz>()) {
        Some(Ok(tz)) => tz,
        Some(Err(_)) => {
            warn!("unknown time zone {:?}, using UTC", name);
            chrono_tz::UTC
        },
        None => chrono_tz::UTC,
    }
}
