/// Row-major 2-D sample container shared by every pipeline stage.
///
/// Addressing is `(row, col)` with the origin at the top-left corner. All
/// grids produced from one input share its height and width.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<T> {
    height: usize,
    width: usize,
    data: Vec<T>,
}

impl<T: Copy + Default> Grid<T> {
    /// Create a grid filled with `T::default()` (zero for numeric samples)
    pub fn new(height: usize, width: usize) -> Self {
        Self {
            height,
            width,
            data: vec![T::default(); height * width],
        }
    }
}

impl<T: Copy> Grid<T> {
    /// Wrap row-major samples. Returns `None` when the length does not match.
    pub fn from_vec(height: usize, width: usize, data: Vec<T>) -> Option<Self> {
        if data.len() != height * width {
            return None;
        }
        Some(Self {
            height,
            width,
            data,
        })
    }

    /// Build a grid by evaluating `f(row, col)` at every position
    pub fn from_fn(height: usize, width: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(height * width);
        for row in 0..height {
            for col in 0..width {
                data.push(f(row, col));
            }
        }
        Self {
            height,
            width,
            data,
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> T {
        self.data[row * self.width + col]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        self.data[row * self.width + col] = value;
    }

    /// True when `(row, col)` lies within `margin` pixels of any edge
    #[inline]
    pub fn in_border(&self, row: usize, col: usize, margin: usize) -> bool {
        row < margin
            || col < margin
            || row + margin >= self.height
            || col + margin >= self.width
    }

    /// Apply `f` sample-wise, producing a grid of the same shape
    pub fn map<U: Copy>(&self, f: impl Fn(T) -> U) -> Grid<U> {
        Grid {
            height: self.height,
            width: self.width,
            data: self.data.iter().map(|&v| f(v)).collect(),
        }
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        self.data.iter().copied()
    }

    /// Iterate `(row, col)` pairs in row-major order
    pub fn positions(&self) -> impl Iterator<Item = (usize, usize)> {
        let width = self.width;
        (0..self.height).flat_map(move |row| (0..width).map(move |col| (row, col)))
    }
}

impl<T: Copy + PartialOrd> Grid<T> {
    /// Largest sample, or `None` for an empty grid
    pub fn max(&self) -> Option<T> {
        let mut iter = self.data.iter().copied();
        let first = iter.next()?;
        Some(iter.fold(first, |acc, v| if v > acc { v } else { acc }))
    }
}
