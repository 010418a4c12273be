use ratatui::style::Color;

#[cfg(test)]
#[path = "aqi_test.rs"]
mod tests;

/// US AQI band label, matching the EPA breakpoints the dashboard shows.
pub fn classify(aqi: f64) -> &'static str {
    if aqi <= 50.0 {
        return "Good";
    }
    if aqi <= 100.0 {
        return "Moderate";
    }
    if aqi <= 150.0 {
        return "Unhealthy (Sens.)";
    }
    if aqi <= 200.0 {
        return "Unhealthy";
    }

    return "Hazardous";
}

pub fn color(aqi: f64) -> Color {
    if aqi <= 50.0 {
        return Color::Green;
    }
    if aqi <= 100.0 {
        return Color::Yellow;
    }
    if aqi <= 150.0 {
        return Color::LightRed;
    }

    return Color::Red;
}
