use crate::manager_nws::models::ForecastPeriod;
use crate::weather_view::errors::AssembleError;
use crate::weather_view::icons::IconTable;
use crate::weather_view::models::{DailyEntry, HourlyEntry};

/// Hourly periods shown, every second hour skipping the current one
pub const HOURLY_OFFSETS: [usize; 6] = [2, 4, 6, 8, 10, 12];

/// Start of each day/night pair in the 12-hour forecast
pub const DAILY_OFFSETS: [usize; 6] = [0, 2, 4, 6, 8, 10];

/// Picks six upcoming hours at two hour intervals
///
/// # Arguments
///
/// * 'periods' - hourly forecast periods, ordered by start time
/// * 'icons' - icon lookup table
pub fn select_hourly(periods: &[ForecastPeriod], icons: &IconTable) -> Result<Vec<HourlyEntry>, AssembleError> {
    let required = HOURLY_OFFSETS[HOURLY_OFFSETS.len() - 1] + 1;
    if periods.len() < required {
        return Err(AssembleError::InsufficientData(
            format!("{} hourly periods, at least {} needed", periods.len(), required)));
    }

    HOURLY_OFFSETS.iter()
        .map(|&i| -> Result<HourlyEntry, AssembleError> {
            let p = &periods[i];
            Ok(HourlyEntry {
                time: p.start_time.format("%-I %p").to_string(),
                icon: icons.icon_src(&p.icon, p.is_daytime)?,
                short_forecast: p.short_forecast.clone(),
                temperature: p.temperature,
            })
        })
        .collect()
}

/// Merges the 12-hour forecast into six daily entries.
///
/// Each pair of consecutive periods holds one day and one night period, in either order.
/// The day period gives date, icon and text while the temperatures of both make up high and low.
///
/// # Arguments
///
/// * 'periods' - 12-hour forecast periods, ordered by start time
/// * 'icons' - icon lookup table
pub fn pair_daily(periods: &[ForecastPeriod], icons: &IconTable) -> Result<Vec<DailyEntry>, AssembleError> {
    let required = DAILY_OFFSETS[DAILY_OFFSETS.len() - 1] + 2;
    if periods.len() < required {
        return Err(AssembleError::InsufficientData(
            format!("{} daily periods, at least {} needed", periods.len(), required)));
    }

    DAILY_OFFSETS.iter()
        .map(|&i| -> Result<DailyEntry, AssembleError> {
            let (day, night) = day_and_night(&periods[i], &periods[i + 1])
                .ok_or_else(|| AssembleError::InsufficientData(
                    format!("daily periods {} and {} are not a day/night pair", i, i + 1)))?;

            Ok(DailyEntry {
                day: day.start_time.format("%A").to_string(),
                date: day.start_time.format("%m/%d").to_string(),
                icon: icons.icon_src(&day.icon, true)?,
                short_forecast: day.short_forecast.clone(),
                high: day.temperature.max(night.temperature),
                low: day.temperature.min(night.temperature),
            })
        })
        .collect()
}

/// Sorts out which of two periods is the day and which is the night period
///
/// # Arguments
///
/// * 'a' - first period
/// * 'b' - second period
fn day_and_night<'a>(a: &'a ForecastPeriod, b: &'a ForecastPeriod) -> Option<(&'a ForecastPeriod, &'a ForecastPeriod)> {
    match (a.is_daytime, b.is_daytime) {
        (true, false) => Some((a, b)),
        (false, true) => Some((b, a)),
        _ => None,
    }
}
