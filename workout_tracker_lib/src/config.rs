pub const STORAGE_KEY: &str = "workout";
pub const DEFAULT_ZOOM: f64 = 13.0;
pub const TILE_URL: &str = "https://tile.openstreetmap.fr/hot/{z}/{x}/{y}.png";
pub const ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";
pub const PAN_DURATION_SECS: f64 = 1.0;
pub const POPUP_MAX_WIDTH: f64 = 250.0;
pub const POPUP_MIN_WIDTH: f64 = 100.0;
/// The form is pulled out of layout while hiding and put back after this delay.
pub const FORM_DISPLAY_DELAY_MS: u32 = 1000;

/// Fixed settings for one tracker session.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackerConfig {
    pub storage_key: String,
    pub zoom: f64,
    pub tile_url: String,
    pub attribution: String,
    pub pan_duration_secs: f64,
    pub popup_max_width: f64,
    pub popup_min_width: f64,
    pub form_display_delay_ms: u32,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            storage_key: STORAGE_KEY.to_string(),
            zoom: DEFAULT_ZOOM,
            tile_url: TILE_URL.to_string(),
            attribution: ATTRIBUTION.to_string(),
            pan_duration_secs: PAN_DURATION_SECS,
            popup_max_width: POPUP_MAX_WIDTH,
            popup_min_width: POPUP_MIN_WIDTH,
            form_display_delay_ms: FORM_DISPLAY_DELAY_MS,
        }
    }
}
