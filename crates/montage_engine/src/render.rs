use ab_glyph::{FontVec, PxScale};
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_text_mut, text_size};

use montage_core::{truncate_caption, wrap_caption, GridLayout, MontageConfig};

use crate::types::RenderItem;

const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);
const TEXT_COLOR: Rgb<u8> = Rgb([0, 0, 0]);

/// Compose the montage: centered banner on top, then each cover pasted into
/// its grid cell with its wrapped caption underneath. Returns `None` for an
/// empty batch (logged, nothing to write).
pub fn compose_montage(
    items: &[RenderItem],
    banner: &str,
    font: &FontVec,
    config: &MontageConfig,
) -> Option<RgbImage> {
    let dims: Vec<(u32, u32)> = items.iter().map(|item| item.image.dimensions()).collect();
    let Some(layout) = GridLayout::compute(
        &dims,
        config.columns,
        config.caption_band,
        config.banner_band,
    ) else {
        log::info!("no images to create a montage");
        return None;
    };

    let mut canvas = RgbImage::from_pixel(layout.canvas_width, layout.canvas_height, BACKGROUND);

    let banner_scale = PxScale::from(config.banner_font_size);
    let (banner_width, _) = text_size(banner_scale, font, banner);
    let banner_x = layout.canvas_width.saturating_sub(banner_width) / 2;
    draw_text_mut(
        &mut canvas,
        TEXT_COLOR,
        banner_x as i32,
        0,
        banner_scale,
        font,
        banner,
    );

    let body_scale = PxScale::from(config.body_font_size);
    // Line height from the metrics of a reference glyph, plus fixed spacing.
    let (_, line_height) = text_size(body_scale, font, "A");
    let line_spacing = line_height + 2;

    for (i, item) in items.iter().enumerate() {
        let (x, y) = layout.position(i);
        image::imageops::replace(&mut canvas, &item.image, i64::from(x), i64::from(y));

        let caption = truncate_caption(&item.title, config.caption_max_len, config.caption_keep_len);
        for (j, line) in wrap_caption(&caption, config.wrap_width).iter().enumerate() {
            let text_y = y + layout.image_height + j as u32 * line_spacing;
            draw_text_mut(
                &mut canvas,
                TEXT_COLOR,
                x as i32,
                text_y as i32,
                body_scale,
                font,
                line.trim_end(),
            );
        }
    }

    Some(canvas)
}
