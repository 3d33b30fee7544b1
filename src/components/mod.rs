//! UI components for AstroWeather.

mod cosmic_score_card;
mod dashboard_header;
mod life_area_focus;
mod moon_card;
mod page_header;
mod retrograde_card;
mod tab_bar;
mod transit_alerts;
mod weekly_forecast_modal;

pub use cosmic_score_card::CosmicScoreCard;
pub use dashboard_header::DashboardHeader;
pub use life_area_focus::LifeAreaFocusCard;
pub use moon_card::MoonCard;
pub use page_header::PageHeader;
pub use retrograde_card::RetrogradeCard;
pub use tab_bar::{TabBar, TabLocation};
pub use transit_alerts::TransitAlertsCard;
pub use weekly_forecast_modal::WeeklyForecastModal;
