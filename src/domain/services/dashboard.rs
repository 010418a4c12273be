use chrono::NaiveDate;
use chrono::NaiveDateTime;

use super::aqi;
use super::weather_code;
use crate::domain::models::DailySeries;
use crate::domain::models::HourlySeries;
use crate::domain::models::Unit;
use crate::domain::models::WeatherSnapshot;

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod tests;

/// Terminal glyph for an icon name from the weather code catalog.
pub fn icon_glyph(name: &str) -> &'static str {
    return match name {
        "sun" => "☀",
        "moon" => "☾",
        "cloud-sun" => "⛅",
        "cloud-moon" => "☁",
        "cloud" => "☁",
        "smog" => "🌫",
        "cloud-rain" => "🌧",
        "cloud-showers-heavy" => "🌧",
        "snowflake" => "❄",
        "bolt" => "⚡",
        _ => "?",
    };
}

pub fn header_lines(city: &str, country: &str, date: NaiveDate) -> Vec<String> {
    let mut title = city.to_string();
    if !country.is_empty() {
        title = format!("{city}, {country}");
    }

    return vec![title, date.format("%A, %B %-d, %Y").to_string()];
}

fn clock_label(timestamp: &str) -> String {
    if let Ok(parsed) = NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%dT%H:%M") {
        return parsed.format("%I:%M %p").to_string();
    }

    return "--:--".to_string();
}

/// Lines for the current conditions panel, top to bottom.
pub fn current_lines(snapshot: &WeatherSnapshot, unit: Unit) -> Vec<String> {
    let current = &snapshot.current;
    let glyph = weather_code::classify(current.weather_code);
    let is_day = current.is_day == 1;
    let icon = icon_glyph(&weather_code::icon_for_time(current.weather_code, is_day));
    let suffix = unit.suffix();

    let mut lines = vec![
        format!(
            "{icon} {}{suffix} {}",
            current.temperature_2m.round(),
            glyph.description
        ),
        format!("Feels like {}{suffix}", current.apparent_temperature.round()),
        format!("Humidity: {}%", current.relative_humidity_2m),
        format!("Wind: {} km/h", current.wind_speed_10m.round()),
        format!("Pressure: {} hPa", current.surface_pressure.round()),
        format!("Visibility: {:.1} km", current.visibility / 1000.0),
    ];

    if let Some(sunrise) = snapshot.daily.sunrise.first() {
        lines.push(format!("Sunrise: {}", clock_label(sunrise)));
    }
    if let Some(sunset) = snapshot.daily.sunset.first() {
        lines.push(format!("Sunset: {}", clock_label(sunset)));
    }

    lines.push(format!(
        "AQI: {:.0} ({})",
        snapshot.us_aqi,
        aqi::classify(snapshot.us_aqi)
    ));

    return lines;
}

/// The next 24 hours starting at the current local hour. The hourly series
/// covers the whole forecast window, so the slice is bound checked rather
/// than assumed.
pub fn hourly_entries(hourly: &HourlySeries, start_hour: usize) -> Vec<String> {
    let mut entries = vec![];

    for idx in start_hour..(start_hour + 24) {
        if idx >= hourly.time.len() {
            break;
        }

        let mut label = "--".to_string();
        if let Ok(parsed) = NaiveDateTime::parse_from_str(&hourly.time[idx], "%Y-%m-%dT%H:%M") {
            label = parsed.format("%-I %p").to_string();
        }

        let is_day = hourly.is_day.get(idx).copied().unwrap_or(1) == 1;
        let icon = icon_glyph(&weather_code::icon_for_time(
            hourly.weather_code.get(idx).copied().unwrap_or(-1),
            is_day,
        ));
        let temp = hourly.temperature_2m.get(idx).copied().unwrap_or(0.0).round();

        entries.push(format!("{label} {icon} {temp}°"));
    }

    return entries;
}

/// Seven day outlook. The first entry is always labelled "Today".
pub fn daily_entries(daily: &DailySeries) -> Vec<String> {
    let mut entries = vec![];

    for idx in 0..7 {
        if idx >= daily.time.len() {
            break;
        }

        let mut day = "Today".to_string();
        if idx > 0 {
            if let Ok(parsed) = NaiveDate::parse_from_str(&daily.time[idx], "%Y-%m-%d") {
                day = parsed.format("%A").to_string();
            }
        }

        let icon = icon_glyph(weather_code::classify(daily.weather_code.get(idx).copied().unwrap_or(-1)).icon);
        let max = daily.temperature_2m_max.get(idx).copied().unwrap_or(0.0).round();
        let min = daily.temperature_2m_min.get(idx).copied().unwrap_or(0.0).round();

        entries.push(format!("{day} {icon} {max}° / {min}°"));
    }

    return entries;
}
