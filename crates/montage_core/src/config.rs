use std::path::PathBuf;
use std::time::Duration;

/// Every knob of the pipeline in one place, so tests can override
/// individual fields without touching global state.
#[derive(Debug, Clone)]
pub struct MontageConfig {
    /// Publishing label used as the catalog query key and output filename.
    pub imprint: String,
    /// Base URL of the metadata API, without a trailing slash.
    pub api_base: String,
    pub series_workers: usize,
    pub cover_workers: usize,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    /// Fixed number of grid columns.
    pub columns: usize,
    /// Covers taller than this are scaled down to exactly this height.
    pub max_cover_height: u32,
    /// Vertical space reserved below each cover for its caption lines.
    pub caption_band: u32,
    /// Vertical space reserved at the top of the canvas for the banner.
    pub banner_band: u32,
    /// Captions longer than this are truncated.
    pub caption_max_len: usize,
    /// Number of leading characters kept when truncating, before the ellipsis.
    pub caption_keep_len: usize,
    /// Greedy word-wrap width for caption lines.
    pub wrap_width: usize,
    pub body_font_size: f32,
    pub banner_font_size: f32,
    /// Preferred TrueType font; the embedded fallback is used when unset
    /// or unloadable.
    pub font_path: Option<PathBuf>,
    /// Canvas size of the generated "No Image" substitute.
    pub placeholder_size: (u32, u32),
    pub output_dir: PathBuf,
}

impl Default for MontageConfig {
    fn default() -> Self {
        Self {
            imprint: "Afternoon".to_string(),
            api_base: "https://api.mangaupdates.com/v1".to_string(),
            series_workers: 10,
            cover_workers: 20,
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(10),
            columns: 10,
            max_cover_height: 218,
            caption_band: 30,
            banner_band: 50,
            caption_max_len: 50,
            caption_keep_len: 45,
            wrap_width: 18,
            body_font_size: 16.0,
            banner_font_size: 24.0,
            font_path: None,
            placeholder_size: (150, 218),
            output_dir: PathBuf::from("."),
        }
    }
}

impl MontageConfig {
    /// Name of the PNG written to `output_dir`.
    pub fn output_filename(&self) -> String {
        format!("{}.png", self.imprint)
    }

    /// Banner text drawn across the top of the montage.
    pub fn banner_text(&self) -> String {
        format!("Completely scanlated manga in {}", self.imprint)
    }
}
