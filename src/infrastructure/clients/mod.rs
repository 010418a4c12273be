mod air_quality;
mod forecast;
mod geocoding;

pub use air_quality::*;
pub use forecast::*;
pub use geocoding::*;
