//! Montage core: pure configuration, filtering, caption, and layout logic.
mod config;
mod filter;
mod layout;
mod text;

pub use config::MontageConfig;
pub use filter::is_eligible;
pub use layout::GridLayout;
pub use text::{truncate_caption, wrap_caption};
