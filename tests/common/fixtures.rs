use canny_stages::Grid;
use image::{GrayImage, ImageBuffer, Luma, Rgb};
use tempfile::NamedTempFile;

/// Image filled with a single intensity
pub fn constant_image(height: usize, width: usize, value: u8) -> Grid<u8> {
    Grid::from_fn(height, width, |_, _| value)
}

/// Vertical step edge: 0 on the left half, 255 on the right half
pub fn step_edge_image(height: usize, width: usize) -> Grid<u8> {
    Grid::from_fn(height, width, |_, col| if col < width / 2 { 0 } else { 255 })
}

/// Deterministic low-contrast noise in `base..base + amplitude`
pub fn low_contrast_noise(height: usize, width: usize, base: u8, amplitude: u8, seed: u64) -> Grid<u8> {
    let mut state = seed;
    Grid::from_fn(height, width, |_, _| {
        // 64-bit LCG (Knuth MMIX constants)
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        base + ((state >> 33) % u64::from(amplitude)) as u8
    })
}

/// Bright square on a dark background, exercising all four sectors
pub fn square_image(size: usize, lo: usize, hi: usize) -> Grid<u8> {
    Grid::from_fn(size, size, |row, col| {
        if (lo..hi).contains(&row) && (lo..hi).contains(&col) {
            220
        } else {
            30
        }
    })
}

pub fn to_luma(grid: &Grid<u8>) -> GrayImage {
    GrayImage::from_fn(grid.width() as u32, grid.height() as u32, |x, y| {
        Luma([grid.get(y as usize, x as usize)])
    })
}

/// Saves `grid` as a PNG in a temp file that is removed on drop.
pub fn write_png(grid: &Grid<u8>) -> NamedTempFile {
    let file = tempfile::Builder::new()
        .suffix(".png")
        .tempfile()
        .expect("Failed to create temp image file");
    to_luma(grid)
        .save_with_format(file.path(), image::ImageFormat::Png)
        .expect("Failed to save test image");
    file
}

/// Creates a 30x40 red RGB PNG.
pub fn write_rgb_png() -> NamedTempFile {
    let img = ImageBuffer::from_fn(40, 30, |_, _| Rgb([255u8, 0u8, 0u8]));
    let file = tempfile::Builder::new()
        .suffix(".png")
        .tempfile()
        .expect("Failed to create temp image file");
    img.save_with_format(file.path(), image::ImageFormat::Png)
        .expect("Failed to save test image");
    file
}

/// True when every sample within `margin` of an edge equals `T::default()`
pub fn border_is_zero<T: Copy + Default + PartialEq>(grid: &Grid<T>, margin: usize) -> bool {
    grid.positions()
        .filter(|&(row, col)| grid.in_border(row, col, margin))
        .all(|(row, col)| grid.get(row, col) == T::default())
}
