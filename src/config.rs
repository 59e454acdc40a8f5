
#[cfg(debug_assertions)]
pub fn get_form_endpoint() -> &'static str {
    match option_env!("LEAD_FORM_ENDPOINT") {
        Some(url) => url,
        None => "http://localhost:3001/api/leads", // Mock endpoint when running locally
    }
}

#[cfg(not(debug_assertions))]
pub fn get_form_endpoint() -> &'static str {
    match option_env!("LEAD_FORM_ENDPOINT") {
        Some(url) => url,
        None => "https://formspree.io/f/xdkzbpqw",
    }
}

#[cfg(debug_assertions)]
pub fn log_level() -> log::Level {
    log::Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> log::Level {
    log::Level::Info
}

pub const SUBMISSION_SUBJECT: &str = "New DeAgro Investor Registration";
pub const CONTACT_EMAIL: &str = "deagro@deagro.io";
pub const REFERENCE_PREFIX: &str = "DEA";

/// Vertical offset in px past which the header switches to its scrolled look.
pub const HEADER_SCROLL_THRESHOLD: f64 = 50.0;
/// Fraction of an element that has to be visible before it is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const TESTIMONIAL_INTERVAL_MS: u32 = 5_000;
/// Links are hardened after this delay so every section has rendered its anchors.
pub const LINK_HYGIENE_DELAY_MS: u32 = 100;
