mod action;
mod city;
mod event;
mod loading;
mod preferences;
mod session;
mod slash_commands;
mod textarea;
mod weather;

pub use action::*;
pub use city::*;
pub use event::*;
pub use loading::*;
pub use preferences::*;
pub use session::*;
pub use slash_commands::*;
pub use textarea::*;
pub use weather::*;
