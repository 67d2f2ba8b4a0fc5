//! Montage engine: catalog lookup, concurrent cover fetch, and grid rendering.
mod catalog;
mod covers;
mod fetch;
mod font;
mod persist;
mod pipeline;
mod render;
mod types;

pub use catalog::CatalogClient;
pub use covers::{fetch_cover, fetch_covers, placeholder_cover, resize_cover, CoverError};
pub use fetch::{build_client, fetch_bytes, FetchError, FetchSettings};
pub use font::{load_font, FontError};
pub use persist::{ensure_output_dir, save_png, AtomicFileWriter, PersistError};
pub use pipeline::{run, PipelineError, PipelineSummary};
pub use render::compose_montage;
pub use types::{CoverSource, RenderItem, SeriesId, WorkRecord};
