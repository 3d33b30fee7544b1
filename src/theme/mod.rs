//! Theme for AstroWeather.

mod colors;
mod styles;

pub use styles::GLOBAL_STYLES;

#[allow(unused_imports)]
pub use colors::*;
