//! Page components for AstroWeather.

mod home;
mod insights;
mod life_areas;
mod moon_tracker;
mod retrogrades;

pub use home::Home;
pub use insights::Insights;
pub use life_areas::LifeAreas;
pub use moon_tracker::MoonTracker;
pub use retrogrades::Retrogrades;
