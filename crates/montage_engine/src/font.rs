use std::fs;
use std::path::Path;

use ab_glyph::FontVec;
use thiserror::Error;

// DejaVu Sans, bundled so the renderer always has a usable face. License
// sits next to the file.
static FALLBACK_FONT: &[u8] = include_bytes!("../assets/DejaVuSans.ttf");

#[derive(Debug, Error)]
pub enum FontError {
    #[error("failed to load font: {0}")]
    Load(String),
}

/// Load the preferred TrueType font from `path`, falling back to the
/// embedded face when the path is unset, unreadable, or not a valid font.
/// Only a broken embedded face is a hard error.
pub fn load_font(path: Option<&Path>) -> Result<FontVec, FontError> {
    if let Some(path) = path {
        match fs::read(path) {
            Ok(bytes) => match FontVec::try_from_vec(bytes) {
                Ok(font) => return Ok(font),
                Err(err) => {
                    log::warn!(
                        "unusable font at {}: {err}; using built-in fallback",
                        path.display()
                    );
                }
            },
            Err(err) => {
                log::warn!(
                    "could not read font at {}: {err}; using built-in fallback",
                    path.display()
                );
            }
        }
    }
    FontVec::try_from_vec(FALLBACK_FONT.to_vec()).map_err(|err| FontError::Load(err.to_string()))
}
