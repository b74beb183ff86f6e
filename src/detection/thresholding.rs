//! Hysteresis (double) thresholding of the suppressed grid.
use crate::grid::Grid;

/// Fraction of the maximum suppressed value above which a pixel is a strong edge
pub const HIGH_THRESHOLD_RATIO: f64 = 0.20;
/// Fraction of the maximum suppressed value below which a pixel is discarded
pub const LOW_THRESHOLD_RATIO: f64 = 0.10;
/// Minimum angle difference (degrees) between a weak pixel and its strong neighbor
pub const PROMOTION_ANGLE_DIFF: f64 = 45.0;

pub const EDGE: u8 = 255;
pub const NO_EDGE: u8 = 0;

const NEIGHBORS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// First-pass classification of a suppressed sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeClass {
    Strong,
    Weak,
    NoEdge,
}

/// Thresholds derived from the maximum suppressed value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    pub high: f64,
    pub low: f64,
}

impl Thresholds {
    pub fn from_max(max_value: i32) -> Self {
        let max_value = f64::from(max_value);
        Self {
            high: max_value * HIGH_THRESHOLD_RATIO,
            low: max_value * LOW_THRESHOLD_RATIO,
        }
    }

    pub fn classify(&self, value: i32) -> EdgeClass {
        let value = f64::from(value);
        if value > self.high {
            EdgeClass::Strong
        } else if value < self.low {
            EdgeClass::NoEdge
        } else {
            EdgeClass::Weak
        }
    }
}

/// Classify every pixel as edge (255) or no edge (0).
///
/// Strong pixels are kept unconditionally. A weak pixel off the outermost
/// ring is promoted when one of its eight neighbors is strong and the angle
/// difference to that neighbor exceeds [`PROMOTION_ANGLE_DIFF`].
pub fn double_thresholding(suppressed: &Grid<i32>, angle: &Grid<f64>) -> Grid<u8> {
    let height = suppressed.height();
    let width = suppressed.width();
    let thresholds = Thresholds::from_max(suppressed.max().unwrap_or(0));
    let classes = suppressed.map(|v| thresholds.classify(v));

    let mut output = Grid::new(height, width);
    let mut weak = Vec::new();

    for (row, col) in classes.positions() {
        match classes.get(row, col) {
            EdgeClass::Strong => output.set(row, col, EDGE),
            EdgeClass::NoEdge => output.set(row, col, NO_EDGE),
            EdgeClass::Weak => weak.push((row, col)),
        }
    }

    for (row, col) in weak {
        if row == 0 || col == 0 || row + 1 >= height || col + 1 >= width {
            continue;
        }

        let pixel_angle = angle.get(row, col);
        let promoted = NEIGHBORS.iter().any(|&(dr, dc)| {
            let r = row.wrapping_add_signed(dr);
            let c = col.wrapping_add_signed(dc);
            classes.get(r, c) == EdgeClass::Strong
                && (angle.get(r, c) - pixel_angle).abs() > PROMOTION_ANGLE_DIFF
        });

        if promoted {
            output.set(row, col, EDGE);
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_split_on_ratios() {
        let thresholds = Thresholds::from_max(100);
        assert_eq!(thresholds.classify(21), EdgeClass::Strong);
        assert_eq!(thresholds.classify(20), EdgeClass::Weak);
        assert_eq!(thresholds.classify(10), EdgeClass::Weak);
        assert_eq!(thresholds.classify(9), EdgeClass::NoEdge);
    }

    #[test]
    fn all_zero_input_is_weak_but_never_promoted() {
        let thresholds = Thresholds::from_max(0);
        assert_eq!(thresholds.classify(0), EdgeClass::Weak);
    }
}
