use log::Level;

#[cfg(debug_assertions)]
pub fn get_app_url() -> &'static str {
    "http://localhost:8080"  // Web app running locally
}

#[cfg(not(debug_assertions))]
pub fn get_app_url() -> &'static str {
    "https://app.staffline.io"
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose while running locally with trunk serve
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

// Crossfade window around each step, in step units
pub const BLEND_HALF_WINDOW: f64 = 0.55;
// Fraction of the half window spent ramping from 0 to full opacity
pub const BLEND_DAMPENING: f64 = 0.45;

// Pixels a panel travels while fading in or out
pub const PANEL_TRAVEL_PX: f64 = 48.0;

// Each step gets this much scroll distance inside the pinned section
pub const VIEWPORTS_PER_STEP: f64 = 1.0;

pub const DESKTOP_BREAKPOINT_PX: f64 = 1024.0;

// Time after a smooth scroll request before re-reading the scroll position
pub const NAVIGATION_SETTLE_MS: u32 = 700;

pub const NAV_SCROLLED_THRESHOLD_PX: f64 = 80.0;

pub const STARFIELD_DEG_PER_SEC: f64 = 1.5;

pub const PHONE_MAX_YAW_DEG: f64 = 28.0;
pub const PHONE_MAX_PITCH_DEG: f64 = 8.0;

pub const PREFS_STORAGE_KEY: &str = "staffline.prefs";

pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";
