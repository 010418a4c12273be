pub mod actions;
mod app_state;
pub mod aqi;
pub mod dashboard;
mod debounce;
pub mod events;
mod store;
pub mod weather_code;

pub use app_state::*;
pub use debounce::*;
pub use store::*;

pub use actions::ActionsService;
pub use events::EventsService;
