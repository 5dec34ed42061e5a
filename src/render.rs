use crate::weather_view::converters::format_temperature;
use crate::weather_view::models::{DailyEntry, HourlyEntry, WeatherView};

const STYLE: &str = "
body { width: 600px; height: 800px; margin: 0; font-family: sans-serif; color: #000; background: #fff; }
h1 { font-size: 28px; margin: 8px 12px 0 12px; }
.updated { font-size: 14px; margin: 0 12px; }
.now { display: table; width: 100%; margin: 8px 0; }
.now div { display: table-cell; vertical-align: middle; padding: 0 12px; }
.temperature { font-size: 72px; font-weight: bold; }
.details { font-size: 18px; }
.forecast { font-size: 16px; margin: 0 12px; }
table { width: 100%; border-collapse: collapse; text-align: center; font-size: 16px; }
td { padding: 2px; border-top: 1px solid #000; }
img.small { width: 48px; height: 48px; }
";

/// Renders the weather page shown on the e-reader.
/// The page reloads itself every `refresh_minutes`.
///
/// # Arguments
///
/// * 'view' - the assembled weather view
/// * 'refresh_minutes' - minutes between reloads
pub fn page(view: &WeatherView, refresh_minutes: u32) -> String {
    let current = &view.current;

    let body = format!(
        "<h1>{city}</h1>\n\
         <p class=\"updated\">{date} &middot; updated {updated}</p>\n\
         <div class=\"now\">\n\
         <div><img src=\"{icon}\" width=\"128\" height=\"128\" alt=\"{short}\"></div>\n\
         <div class=\"temperature\">{temperature}</div>\n\
         <div class=\"details\">High {high} &middot; Low {low}<br>Wind {wind}<br>Humidity {humidity}<br>Pressure {pressure}</div>\n\
         </div>\n\
         <p class=\"forecast\"><b>{short}</b> {detailed}</p>\n\
         {hourly}\n\
         {daily}\n",
        city = escape(&current.city),
        date = escape(&current.date),
        updated = escape(&current.last_updated),
        icon = escape(&current.icon),
        short = escape(&current.short_forecast),
        temperature = escape(&current.temperature),
        high = escape(&current.high),
        low = escape(&current.low),
        wind = escape(&current.wind),
        humidity = escape(&current.humidity),
        pressure = escape(&current.pressure),
        detailed = escape(&current.detailed_forecast),
        hourly = hourly_table(&view.hourly),
        daily = daily_table(&view.daily),
    );

    document(&body, refresh_minutes)
}

/// Renders the page shown when no weather could be fetched
///
/// # Arguments
///
/// * 'refresh_minutes' - minutes between reloads
pub fn unavailable(refresh_minutes: u32) -> String {
    document("<h1>Weather unavailable</h1>\n<p class=\"forecast\">No data right now, trying again shortly.</p>\n", refresh_minutes)
}

fn document(body: &str, refresh_minutes: u32) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html>\n<head>\n\
         <meta charset=\"utf-8\">\n\
         <meta http-equiv=\"refresh\" content=\"{}\">\n\
         <title>Weather</title>\n\
         <style>{}</style>\n\
         </head>\n<body>\n{}</body>\n</html>\n",
        refresh_minutes * 60, STYLE, body)
}

fn hourly_table(hourly: &[HourlyEntry]) -> String {
    let times: String = hourly.iter()
        .map(|h| format!("<td>{}</td>", escape(&h.time)))
        .collect();
    let icons: String = hourly.iter()
        .map(|h| format!("<td><img class=\"small\" src=\"{}\" alt=\"{}\"></td>", escape(&h.icon), escape(&h.short_forecast)))
        .collect();
    let temperatures: String = hourly.iter()
        .map(|h| format!("<td>{}</td>", escape(&format_temperature(Some(h.temperature)))))
        .collect();

    format!("<table class=\"hourly\">\n<tr>{}</tr>\n<tr>{}</tr>\n<tr>{}</tr>\n</table>", times, icons, temperatures)
}

fn daily_table(daily: &[DailyEntry]) -> String {
    let rows: String = daily.iter()
        .map(|d| format!(
            "<tr><td>{} {}</td><td><img class=\"small\" src=\"{}\" alt=\"\"></td><td>{}</td><td>{} / {}</td></tr>\n",
            escape(&d.day),
            escape(&d.date),
            escape(&d.icon),
            escape(&d.short_forecast),
            escape(&format_temperature(Some(d.high))),
            escape(&format_temperature(Some(d.low))),
        ))
        .collect();

    format!("<table class=\"daily\">\n{}</table>", rows)
}

/// Escapes text for use in html content and attribute values
///
/// # Arguments
///
/// * 'text' - text to escape
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }

    escaped
}
