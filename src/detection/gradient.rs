//! Sobel gradient operator applied on top of the smoothed grid.
//!
//! The undefined border widens to four pixels: one ring for the 3x3 kernel on
//! top of the three rings the smoothing stage already left at zero.
use crate::grid::Grid;

/// Width of the undefined border of every gradient grid.
pub const GRADIENT_MARGIN: usize = 4;

/// Divisor applied to both directional responses
pub const RESPONSE_DIVISOR: f64 = 3.0;

/// Angle stored wherever the signed horizontal response is exactly zero.
pub const VERTICAL_ANGLE: f64 = 90.0;

type Kernel3 = [[f64; 3]; 3];

const SOBEL_KERNEL_X: Kernel3 = [[-1.0, 0.0, 1.0], [-2.0, 0.0, 2.0], [-1.0, 0.0, 1.0]];
const SOBEL_KERNEL_Y: Kernel3 = [[1.0, 2.0, 1.0], [0.0, 0.0, 0.0], [-1.0, -2.0, -1.0]];

/// Gradient responses, magnitude and angle for every pixel.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientField {
    /// Absolute horizontal response
    pub horizontal: Grid<f64>,
    /// Absolute vertical response
    pub vertical: Grid<f64>,
    /// `sqrt(h^2 + v^2) / sqrt(2)`
    pub magnitude: Grid<f64>,
    /// Degrees, computed from the signed responses before taking absolutes
    pub angle: Grid<f64>,
}

fn correlate3(grid: &Grid<f64>, row: usize, col: usize, kernel: &Kernel3) -> f64 {
    let mut sum = 0.0;
    for (i, kernel_row) in kernel.iter().enumerate() {
        for (j, &weight) in kernel_row.iter().enumerate() {
            sum += grid.get(row + i - 1, col + j - 1) * weight;
        }
    }
    sum
}

/// Single-quadrant angle in degrees from signed responses.
///
/// Uses `atan(v / h)` rather than `atan2`, so opposite gradients share an
/// angle. Non-maxima sectors are laid out against this range.
pub fn gradient_angle(horizontal: f64, vertical: f64) -> f64 {
    if horizontal == 0.0 {
        VERTICAL_ANGLE
    } else {
        (vertical / horizontal).atan().to_degrees()
    }
}

/// Compute the gradient field of a smoothed grid.
pub fn gradient_operation(smoothed: &Grid<f64>) -> GradientField {
    let height = smoothed.height();
    let width = smoothed.width();

    let mut horizontal = Grid::new(height, width);
    let mut vertical = Grid::new(height, width);
    let mut angle = Grid::new(height, width);
    let mut magnitude = Grid::new(height, width);

    for (row, col) in smoothed.positions() {
        let (gx, gy) = if smoothed.in_border(row, col, GRADIENT_MARGIN) {
            (0.0, 0.0)
        } else {
            (
                correlate3(smoothed, row, col, &SOBEL_KERNEL_X) / RESPONSE_DIVISOR,
                correlate3(smoothed, row, col, &SOBEL_KERNEL_Y) / RESPONSE_DIVISOR,
            )
        };

        angle.set(row, col, gradient_angle(gx, gy));

        let (gx, gy) = (gx.abs(), gy.abs());
        horizontal.set(row, col, gx);
        vertical.set(row, col, gy);
        magnitude.set(row, col, (gx * gx + gy * gy).sqrt() / std::f64::consts::SQRT_2);
    }

    GradientField {
        horizontal,
        vertical,
        magnitude,
        angle,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_horizontal_response_maps_to_vertical_angle() {
        assert_eq!(gradient_angle(0.0, 5.0), 90.0);
        assert_eq!(gradient_angle(0.0, -5.0), 90.0);
        assert_eq!(gradient_angle(0.0, 0.0), 90.0);
    }

    #[test]
    fn angle_is_single_quadrant() {
        assert!((gradient_angle(1.0, 1.0) - 45.0).abs() < 1e-12);
        // opposite direction, same angle
        assert!((gradient_angle(-1.0, -1.0) - 45.0).abs() < 1e-12);
        assert!((gradient_angle(-1.0, 1.0) + 45.0).abs() < 1e-12);
    }
}
