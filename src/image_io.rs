//! Conversion between image files and sample grids.
//!
//! - `load_grayscale`: decode any supported file into a `Grid<u8>` of luma samples.
//! - `grid_from_luma` / `to_gray_image`: in-memory conversions.
//! - float and integer grids are written as 8-bit by rounding and saturating to [0, 255].
use std::path::Path;

use image::{GrayImage, ImageReader, Luma};

use crate::error::{CannyError, Result};
use crate::grid::Grid;
use crate::pipeline::ArtifactGrid;

/// Decode an image file and convert it to 8-bit grayscale
pub fn load_grayscale(path: &Path) -> Result<Grid<u8>> {
    let decode_err = |source| CannyError::Decode {
        path: path.to_path_buf(),
        source,
    };

    let img = ImageReader::open(path)
        .map_err(|e| decode_err(image::ImageError::IoError(e)))?
        .with_guessed_format()
        .map_err(|e| decode_err(image::ImageError::IoError(e)))?
        .decode()
        .map_err(decode_err)?;

    Ok(grid_from_luma(&img.into_luma8()))
}

pub fn grid_from_luma(img: &GrayImage) -> Grid<u8> {
    Grid::from_fn(img.height() as usize, img.width() as usize, |row, col| {
        img.get_pixel(col as u32, row as u32)[0]
    })
}

fn saturate_f64(value: f64) -> u8 {
    value.round_ties_even().clamp(0.0, 255.0) as u8
}

fn saturate_i32(value: i32) -> u8 {
    value.clamp(0, 255) as u8
}

/// Render any artifact grid as an 8-bit grayscale image
pub fn to_gray_image(grid: ArtifactGrid<'_>) -> GrayImage {
    match grid {
        ArtifactGrid::Float(g) => render(g, saturate_f64),
        ArtifactGrid::Int(g) => render(g, saturate_i32),
        ArtifactGrid::Byte(g) => render(g, |v| v),
    }
}

fn render<T: Copy>(grid: &Grid<T>, to_u8: impl Fn(T) -> u8) -> GrayImage {
    GrayImage::from_fn(grid.width() as u32, grid.height() as u32, |x, y| {
        Luma([to_u8(grid.get(y as usize, x as usize))])
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn float_samples_round_and_saturate() {
        assert_eq!(saturate_f64(-3.2), 0);
        assert_eq!(saturate_f64(12.5), 12);
        assert_eq!(saturate_f64(13.5), 14);
        assert_eq!(saturate_f64(300.0), 255);
        assert_eq!(saturate_i32(-1), 0);
        assert_eq!(saturate_i32(1000), 255);
    }
}
