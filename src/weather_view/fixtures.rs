use chrono::{DateTime, TimeDelta, Timelike};
use crate::manager_nws::models::{ForecastPeriod, Observation, QuantitativeValue};
use crate::weather_view::icons::IconTable;

pub fn icons() -> IconTable {
    IconTable::from_toml(r#"
        [skc]
        day = "wi-day-sunny"
        night = "wi-night-clear"

        [rain]
        day = "wi-day-rain"
        night = "wi-night-alt-rain"
    "#).unwrap()
}

pub fn period(start: &str, is_daytime: bool, temperature: f64) -> ForecastPeriod {
    let (time_of_day, short_forecast) = if is_daytime { ("day", "Sunny") } else { ("night", "Clear") };

    ForecastPeriod {
        start_time: DateTime::parse_from_rfc3339(start).unwrap(),
        is_daytime,
        temperature,
        short_forecast: short_forecast.to_string(),
        detailed_forecast: format!("{}, with a temperature around {}.", short_forecast, temperature),
        icon: format!("https://api.weather.gov/icons/land/{}/skc?size=medium", time_of_day),
    }
}

/// Hourly periods starting at 20:00 local time with temperatures 70, 71, 72...
pub fn hourly(count: usize) -> Vec<ForecastPeriod> {
    let start = DateTime::parse_from_rfc3339("2020-07-11T20:00:00-04:00").unwrap();

    (0..count)
        .map(|i| {
            let time = start + TimeDelta::hours(i as i64);
            let is_daytime = (6..18).contains(&time.hour());
            period(&time.to_rfc3339(), is_daytime, 70.0 + i as f64)
        })
        .collect()
}

/// 12-hour periods alternating between day and night, day temperatures 80, 81... and
/// night temperatures 60, 61...
///
/// * 'first_is_day' - whether the sequence starts with a day period
pub fn daily(count: usize, first_is_day: bool) -> Vec<ForecastPeriod> {
    let start = if first_is_day {
        DateTime::parse_from_rfc3339("2020-07-12T06:00:00-04:00").unwrap()
    } else {
        DateTime::parse_from_rfc3339("2020-07-11T18:00:00-04:00").unwrap()
    };

    (0..count)
        .map(|i| {
            let time = start + TimeDelta::hours(12 * i as i64);
            let is_daytime = (i % 2 == 0) == first_is_day;
            let base = if is_daytime { 80.0 } else { 60.0 };
            let temperature = base + (i / 2) as f64;
            period(&time.to_rfc3339(), is_daytime, temperature)
        })
        .collect()
}

pub fn observation() -> Observation {
    Observation {
        timestamp: DateTime::parse_from_rfc3339("2020-07-11T23:52:00+00:00").unwrap(),
        temperature: QuantitativeValue::new(Some(20.0), "wmoUnit:degC"),
        wind_speed: QuantitativeValue::new(Some(5.0), ""),
        wind_direction: QuantitativeValue::new(Some(10.0), "wmoUnit:degree_(angle)"),
        relative_humidity: QuantitativeValue::new(Some(80.0), "wmoUnit:percent"),
        barometric_pressure: QuantitativeValue::new(Some(101325.0), "wmoUnit:Pa"),
    }
}
