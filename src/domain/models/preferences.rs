use serde::Deserialize;
use serde::Serialize;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    #[default]
    Celsius,
    Fahrenheit,
}

impl Unit {
    pub fn toggled(self) -> Unit {
        if self == Unit::Celsius {
            return Unit::Fahrenheit;
        }
        return Unit::Celsius;
    }

    pub fn suffix(self) -> &'static str {
        if self == Unit::Celsius {
            return "°C";
        }
        return "°F";
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Theme {
        if self == Theme::Light {
            return Theme::Dark;
        }
        return Theme::Light;
    }
}
