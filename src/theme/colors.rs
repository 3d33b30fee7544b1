//! Cosmic purple palette color constants.
//!
//! Dark night-sky aesthetic: deep indigo backgrounds, violet accents.

#![allow(dead_code)]

// === NIGHT SKY (Backgrounds) ===
pub const NIGHT: &str = "#0F0F1E";
pub const NIGHT_SURFACE: &str = "#1A1A2E";
pub const NIGHT_CARD: &str = "#1F1F33";
pub const NIGHT_RAISED: &str = "#252538";
pub const NIGHT_BORDER: &str = "#2D2D3D";

// === VIOLET (Primary accents) ===
pub const VIOLET: &str = "#8B5CF6";
pub const VIOLET_SOFT: &str = "#A78BFA";
pub const VIOLET_BRIGHT: &str = "#C084FC";
pub const VIOLET_DEEP: &str = "#6B46C1";
pub const VIOLET_NIGHT: &str = "#4C1D95";

// === TEXT ===
pub const TEXT_PRIMARY: &str = "#E5E5E7";
pub const TEXT_SECONDARY: &str = "rgba(229, 229, 231, 0.85)";
pub const TEXT_MUTED: &str = "rgba(229, 229, 231, 0.6)";

// === SEMANTIC ===
pub const POSITIVE: &str = "#10B981";
pub const CHALLENGING: &str = "#EF4444";
pub const NEUTRAL: &str = "#F59E0B";

// === PLANETS ===
pub const SUN: &str = "#F59E0B";
pub const MOON: &str = "#E0E7FF";
pub const MERCURY: &str = "#8B5CF6";
pub const VENUS: &str = "#EC4899";
pub const MARS: &str = "#EF4444";
pub const JUPITER: &str = "#A78BFA";
pub const SATURN: &str = "#6B7280";
