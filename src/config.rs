use log::Level;

pub const BRAND_FIRST: &str = "STRAIGHT";
pub const BRAND_SECOND: &str = "EDGE";
pub const BRAND_TAGLINE: &str = "Construction";
pub const COMPANY_NAME: &str = "Straight Edge Construction";

/// Vertical scroll offset (px) past which the nav bar turns solid.
pub const SCROLL_THRESHOLD: f64 = 50.0;

/// How long a statistic takes to count up, in seconds.
pub const COUNT_DURATION: f64 = 2.0;

/// Frame interval for count-up animations, in milliseconds.
pub const FRAME_MS: u32 = 16;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose logging when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Where the contact form posts to. The form-processing endpoint lives
/// outside this site, so nothing is wired up yet and the browser falls back
/// to its default submission.
pub fn form_action() -> Option<&'static str> {
    option_env!("FORM_ACTION").filter(|url| !url.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_up_outlasts_a_frame() {
        assert!(COUNT_DURATION * 1000.0 > FRAME_MS as f64);
    }

    #[test]
    fn log_level_matches_build_profile() {
        if cfg!(debug_assertions) {
            assert_eq!(log_level(), Level::Debug);
        } else {
            assert_eq!(log_level(), Level::Info);
        }
    }
}
