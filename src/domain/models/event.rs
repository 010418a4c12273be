use tui_textarea::Input;

use super::GeoCandidate;
use super::WeatherReport;

pub enum Event {
    KeyboardCharInput(Input),
    KeyboardCTRLC(),
    KeyboardEnter(),
    KeyboardEsc(),
    KeyboardPaste(String),
    KeyboardTab(),
    Notice(String),
    SuggestionDown(),
    SuggestionUp(),
    Suggestions(Vec<GeoCandidate>),
    UITick(),
    WeatherReady(WeatherReport),
}
