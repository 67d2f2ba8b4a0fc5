use ab_glyph::{FontVec, PxScale};
use futures_util::{stream, StreamExt};
use image::{imageops::FilterType, Rgb, RgbImage};
use imageproc::drawing::{draw_text_mut, text_size};
use thiserror::Error;

use montage_core::MontageConfig;

use crate::fetch::{fetch_bytes, FetchError};
use crate::types::{CoverSource, RenderItem, WorkRecord};

const PLACEHOLDER_TEXT: &str = "No Image";
const PLACEHOLDER_FILL: Rgb<u8> = Rgb([200, 200, 200]);
const PLACEHOLDER_TEXT_COLOR: Rgb<u8> = Rgb([50, 50, 50]);

#[derive(Debug, Error)]
pub enum CoverError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("decode failed: {0}")]
    Decode(#[from] image::ImageError),
}

/// Scale a cover down so its height does not exceed `max_height`,
/// preserving aspect ratio. Shorter images pass through unchanged; width
/// is never independently capped.
pub fn resize_cover(img: RgbImage, max_height: u32) -> RgbImage {
    let (width, height) = img.dimensions();
    if height <= max_height {
        return img;
    }
    let aspect_ratio = width as f32 / height as f32;
    let new_width = (max_height as f32 * aspect_ratio) as u32;
    image::imageops::resize(&img, new_width.max(1), max_height, FilterType::Lanczos3)
}

/// Neutral substitute for a cover that could not be fetched or decoded.
pub fn placeholder_cover(size: (u32, u32), font: &FontVec, font_size: f32) -> RgbImage {
    let (width, height) = size;
    let mut img = RgbImage::from_pixel(width, height, PLACEHOLDER_FILL);
    let scale = PxScale::from(font_size);
    let (text_width, text_height) = text_size(scale, font, PLACEHOLDER_TEXT);
    let x = width.saturating_sub(text_width) / 2;
    let y = height.saturating_sub(text_height) / 2;
    draw_text_mut(
        &mut img,
        PLACEHOLDER_TEXT_COLOR,
        x as i32,
        y as i32,
        scale,
        font,
        PLACEHOLDER_TEXT,
    );
    img
}

/// Download and normalize the cover for one record. Every failure path
/// (missing URL, network, timeout, bad bytes) substitutes the placeholder,
/// so the work is never dropped.
pub async fn fetch_cover(
    client: &reqwest::Client,
    record: &WorkRecord,
    font: &FontVec,
    config: &MontageConfig,
) -> RenderItem {
    let fetched = match record.image_url.as_deref() {
        Some(url) => match download_cover(client, url).await {
            Ok(img) => Some(img),
            Err(err) => {
                log::warn!("failed to load image for {}: {err}", record.title);
                None
            }
        },
        None => {
            log::warn!("no image url for {}", record.title);
            None
        }
    };
    let (image, source) = match fetched {
        Some(img) => (img, CoverSource::Fetched),
        None => (
            placeholder_cover(config.placeholder_size, font, config.body_font_size),
            CoverSource::Placeholder,
        ),
    };
    RenderItem {
        image: resize_cover(image, config.max_cover_height),
        title: record.title.clone(),
        source,
    }
}

/// Fetch all covers with at most `cover_workers` downloads in flight.
/// `buffered` keeps completion order equal to record order, so the output
/// stays aligned with its captions; the pool drains fully before returning.
pub async fn fetch_covers(
    client: &reqwest::Client,
    records: &[WorkRecord],
    font: &FontVec,
    config: &MontageConfig,
) -> Vec<RenderItem> {
    stream::iter(records.iter())
        .map(|record| fetch_cover(client, record, font, config))
        .buffered(config.cover_workers.max(1))
        .collect()
        .await
}

async fn download_cover(client: &reqwest::Client, url: &str) -> Result<RgbImage, CoverError> {
    let bytes = fetch_bytes(client, url, &[]).await?;
    let img = image::load_from_memory(&bytes)?;
    Ok(img.to_rgb8())
}
