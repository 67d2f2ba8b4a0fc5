/// Precomputed geometry of the montage grid.
///
/// The image band of every cell is as tall as the tallest image in the
/// batch, so shorter covers leave vertical whitespace. That is the intended
/// look, not a bug.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    pub columns: usize,
    pub rows: usize,
    pub cell_width: u32,
    /// Image band plus caption band.
    pub cell_height: u32,
    /// Height of the image band alone; captions start below this offset.
    pub image_height: u32,
    pub banner_band: u32,
    pub canvas_width: u32,
    pub canvas_height: u32,
}

impl GridLayout {
    /// Compute the grid for the given image dimensions. Returns `None` when
    /// there is nothing to lay out.
    pub fn compute(
        dims: &[(u32, u32)],
        columns: usize,
        caption_band: u32,
        banner_band: u32,
    ) -> Option<GridLayout> {
        if dims.is_empty() {
            return None;
        }
        let columns = columns.max(1);
        let count = dims.len();
        let cell_width = dims.iter().map(|&(w, _)| w).max().unwrap_or(0);
        let image_height = dims.iter().map(|&(_, h)| h).max().unwrap_or(0);
        let cell_height = image_height + caption_band;
        let rows = (count - 1) / columns + 1;
        Some(GridLayout {
            columns,
            rows,
            cell_width,
            cell_height,
            image_height,
            banner_band,
            canvas_width: cell_width * columns.min(count) as u32,
            canvas_height: cell_height * rows as u32 + banner_band,
        })
    }

    /// Top-left corner of the image band of cell `index`, in canvas
    /// coordinates (the banner offset is already applied).
    pub fn position(&self, index: usize) -> (u32, u32) {
        let col = (index % self.columns) as u32;
        let row = (index / self.columns) as u32;
        (col * self.cell_width, row * self.cell_height + self.banner_band)
    }
}
