#[cfg(test)]
#[path = "weather_code_test.rs"]
mod tests;

pub struct WeatherGlyph {
    pub description: &'static str,
    pub icon: &'static str,
}

/// Maps a WMO weather interpretation code to a human readable description and
/// an icon name. Unknown codes fall back to a question mark.
pub fn classify(code: i64) -> WeatherGlyph {
    let (description, icon) = match code {
        0 => ("Clear Sky", "sun"),
        1 => ("Mainly Clear", "cloud-sun"),
        2 => ("Partly Cloudy", "cloud-sun"),
        3 => ("Overcast", "cloud"),
        45 => ("Foggy", "smog"),
        48 => ("Depositing Rime Fog", "smog"),
        51 => ("Light Drizzle", "cloud-rain"),
        53 => ("Moderate Drizzle", "cloud-rain"),
        55 => ("Dense Drizzle", "cloud-showers-heavy"),
        56 => ("Light Freezing Drizzle", "snowflake"),
        57 => ("Dense Freezing Drizzle", "snowflake"),
        61 => ("Slight Rain", "cloud-rain"),
        63 => ("Moderate Rain", "cloud-rain"),
        65 => ("Heavy Rain", "cloud-showers-heavy"),
        66 => ("Light Freezing Rain", "snowflake"),
        67 => ("Heavy Freezing Rain", "snowflake"),
        71 => ("Slight Snow Fall", "snowflake"),
        73 => ("Moderate Snow Fall", "snowflake"),
        75 => ("Heavy Snow Fall", "snowflake"),
        77 => ("Snow Grains", "snowflake"),
        80 => ("Slight Rain Showers", "cloud-rain"),
        81 => ("Moderate Rain Showers", "cloud-rain"),
        82 => ("Violent Rain Showers", "cloud-showers-heavy"),
        85 => ("Slight Snow Showers", "snowflake"),
        86 => ("Heavy Snow Showers", "snowflake"),
        95 => ("Thunderstorm", "bolt"),
        96 => ("Thunderstorm with Hail", "bolt"),
        99 => ("Thunderstorm with Hail", "bolt"),
        _ => ("Unknown", "question"),
    };

    return WeatherGlyph { description, icon };
}

/// Icon name adjusted for time of day. Sun based icons swap to their moon
/// variant at night, everything else is unchanged.
pub fn icon_for_time(code: i64, is_day: bool) -> String {
    let icon = classify(code).icon;
    if is_day {
        return icon.to_string();
    }

    return icon.replace("sun", "moon");
}

#[derive(Debug, PartialEq)]
pub enum Background {
    Sunny,
    NightClear,
    Cloudy,
    Rainy,
    Snowy,
}

/// Coarse scene for the dashboard backdrop. Thresholds cover ranges rather
/// than individual codes, so codes without a catalog entry still land in a
/// bucket.
pub fn background_for(code: i64, is_day: bool) -> Background {
    if code <= 1 {
        if is_day {
            return Background::Sunny;
        }
        return Background::NightClear;
    }
    if code <= 3 {
        return Background::Cloudy;
    }
    if code <= 48 {
        return Background::Cloudy;
    }
    if code <= 67 {
        return Background::Rainy;
    }
    if code <= 77 {
        return Background::Snowy;
    }
    if code <= 82 {
        return Background::Rainy;
    }
    if code <= 86 {
        return Background::Snowy;
    }

    return Background::Rainy;
}
