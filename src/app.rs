use astroweather_core::UserProfile;
use dioxus::prelude::*;

use crate::pages::{Home, Insights, LifeAreas, MoonTracker, Retrogrades};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Home dashboard
/// - `/moon` - Moon tracker detail
/// - `/life-areas` - Life area focus detail
/// - `/retrogrades` - Retrograde status report
/// - `/insights` - Cosmic insights detail
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/moon")]
    MoonTracker {},
    #[route("/life-areas")]
    LifeAreas {},
    #[route("/retrogrades")]
    Retrogrades {},
    #[route("/insights")]
    Insights {},
}

/// Root application component.
///
/// Provides global styles, the demo profile context, and routing.
#[component]
pub fn App() -> Element {
    // The demo birth chart shown in the dashboard greeting
    let profile: Signal<UserProfile> = use_signal(UserProfile::sample);
    use_context_provider(|| profile);

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
