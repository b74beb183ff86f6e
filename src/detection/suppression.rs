//! Non-maxima suppression along the quantized gradient direction.
//!
//! Every pixel outside the five-pixel border keeps its rounded magnitude only
//! if it is not smaller than either neighbor along the gradient direction.
use crate::grid::Grid;

/// Width of the undefined border of the suppressed grid.
pub const SUPPRESSION_MARGIN: usize = 5;

/// One of the four direction sectors an angle is quantized into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sector {
    /// Horizontal gradient: compare with left and right
    Horizontal,
    /// Compare with top-right and bottom-left
    Diagonal,
    /// Vertical gradient: compare with top and bottom
    Vertical,
    /// Compare with top-left and bottom-right
    AntiDiagonal,
}

impl Sector {
    /// Classify an angle in degrees. `None` for NaN.
    pub fn from_angle(angle: f64) -> Option<Self> {
        let in_range = |lo: f64, hi: f64| lo < angle && angle <= hi;

        if in_range(-22.5, 22.5) || in_range(157.5, 180.0) || (-180.0..=-157.5).contains(&angle) {
            Some(Self::Horizontal)
        } else if in_range(22.5, 67.5) || in_range(-157.5, -112.5) {
            Some(Self::Diagonal)
        } else if in_range(67.5, 112.5) || in_range(-112.5, -67.5) {
            Some(Self::Vertical)
        } else if in_range(112.5, 157.5) || in_range(-67.5, -22.5) {
            Some(Self::AntiDiagonal)
        } else {
            None
        }
    }

    /// `(row, col)` offsets of the two neighbors compared against
    fn neighbor_offsets(self) -> [(isize, isize); 2] {
        match self {
            Self::Horizontal => [(0, -1), (0, 1)],
            Self::Diagonal => [(-1, 1), (1, -1)],
            Self::Vertical => [(-1, 0), (1, 0)],
            Self::AntiDiagonal => [(-1, -1), (1, 1)],
        }
    }
}

/// Thin the magnitude grid to one-pixel-wide ridges.
pub fn non_maxima_suppression(magnitude: &Grid<f64>, angle: &Grid<f64>) -> Grid<i32> {
    let mut suppressed = Grid::new(magnitude.height(), magnitude.width());

    for (row, col) in magnitude.positions() {
        if magnitude.in_border(row, col, SUPPRESSION_MARGIN) {
            continue;
        }

        let Some(sector) = Sector::from_angle(angle.get(row, col)) else {
            continue;
        };

        let value = magnitude.get(row, col);
        let is_maximum = sector.neighbor_offsets().iter().all(|&(dr, dc)| {
            let r = row.wrapping_add_signed(dr);
            let c = col.wrapping_add_signed(dc);
            value >= magnitude.get(r, c)
        });

        if is_maximum {
            suppressed.set(row, col, value.round_ties_even() as i32);
        }
    }

    suppressed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sector_boundaries_are_upper_inclusive() {
        assert_eq!(Sector::from_angle(22.5), Some(Sector::Horizontal));
        assert_eq!(Sector::from_angle(22.6), Some(Sector::Diagonal));
        assert_eq!(Sector::from_angle(67.5), Some(Sector::Diagonal));
        assert_eq!(Sector::from_angle(90.0), Some(Sector::Vertical));
        assert_eq!(Sector::from_angle(-90.0), Some(Sector::Vertical));
        assert_eq!(Sector::from_angle(-67.5), Some(Sector::Vertical));
        assert_eq!(Sector::from_angle(-22.5), Some(Sector::AntiDiagonal));
        assert_eq!(Sector::from_angle(-22.4), Some(Sector::Horizontal));
        assert_eq!(Sector::from_angle(-0.0), Some(Sector::Horizontal));
    }

    #[test]
    fn outer_half_circle_is_classified() {
        assert_eq!(Sector::from_angle(170.0), Some(Sector::Horizontal));
        assert_eq!(Sector::from_angle(-180.0), Some(Sector::Horizontal));
        assert_eq!(Sector::from_angle(-130.0), Some(Sector::Diagonal));
        assert_eq!(Sector::from_angle(-100.0), Some(Sector::Vertical));
        assert_eq!(Sector::from_angle(120.0), Some(Sector::AntiDiagonal));
        assert_eq!(Sector::from_angle(f64::NAN), None);
    }
}
