use image::RgbImage;

pub type SeriesId = u64;

/// One filtered, eligible work. Constructed only for series whose metadata
/// passed the eligibility rule; immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkRecord {
    pub series_id: SeriesId,
    pub title: String,
    pub detail_url: String,
    /// Source URL of the cover, when the metadata carried one. A missing
    /// URL turns into a placeholder during the cover stage.
    pub image_url: Option<String>,
    pub completed: bool,
}

/// Where a rendered cover came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoverSource {
    Fetched,
    Placeholder,
}

/// A size-normalized cover paired with its caption, ready for the grid.
#[derive(Debug, Clone)]
pub struct RenderItem {
    pub image: RgbImage,
    pub title: String,
    pub source: CoverSource,
}
