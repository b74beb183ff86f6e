use crate::grid::Grid;

/// Radius of the smoothing kernel; also the width of the undefined border.
pub const SMOOTHING_MARGIN: usize = 3;

/// Sum of all kernel weights, used as the normalization divisor
pub const GAUSSIAN_DIVISOR: f64 = 140.0;

const GAUSSIAN_KERNEL: [[u32; 7]; 7] = [
    [1, 1, 2, 2, 2, 1, 1],
    [1, 2, 2, 4, 2, 2, 1],
    [2, 2, 4, 8, 4, 2, 2],
    [2, 4, 8, 16, 8, 4, 2],
    [2, 2, 4, 8, 4, 2, 2],
    [1, 2, 2, 4, 2, 2, 1],
    [1, 1, 2, 2, 2, 1, 1],
];

/// Smooth an 8-bit intensity grid with the fixed 7x7 Gaussian kernel.
///
/// Pixels within [`SMOOTHING_MARGIN`] of an edge are set to 0; every other
/// pixel receives the weighted neighborhood sum divided by 140.
pub fn gaussian_smoothing(image: &Grid<u8>) -> Grid<f64> {
    let mut smoothed = Grid::new(image.height(), image.width());

    for (row, col) in image.positions() {
        if image.in_border(row, col, SMOOTHING_MARGIN) {
            continue;
        }

        let mut sum = 0u32;
        for (k, kernel_row) in GAUSSIAN_KERNEL.iter().enumerate() {
            let r = row + k - SMOOTHING_MARGIN;
            for (l, &weight) in kernel_row.iter().enumerate() {
                let c = col + l - SMOOTHING_MARGIN;
                sum += u32::from(image.get(r, c)) * weight;
            }
        }

        smoothed.set(row, col, f64::from(sum) / GAUSSIAN_DIVISOR);
    }

    smoothed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kernel_weights_sum_to_divisor() {
        let total: u32 = GAUSSIAN_KERNEL.iter().flatten().sum();
        assert_eq!(f64::from(total), GAUSSIAN_DIVISOR);
    }
}
