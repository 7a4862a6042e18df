// ABOUTME: Application state and event routing for the TUI

pub mod events;
pub mod state;

pub use events::EventHandler;
pub use state::{App, AppState, InputField, ProfilesQuery, View};
