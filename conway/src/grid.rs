// grid.rs - Grid geometry for the toroidal board

use crate::GridError;

/// Largest height or width the terminal driver accepts.
pub const MAX_DIMENSION: usize = 2000;

/// Dimensions of a run. Both sides are strictly positive and fixed for the run.
///
/// Cells live in flat row-major `[u8]` buffers of length [`GridSize::area`],
/// index `y * width + x`, each element 0 (dead) or 1 (alive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridSize {
    height: usize,
    width: usize,
}

impl GridSize {
    pub fn new(height: usize, width: usize) -> Result<Self, GridError> {
        if height == 0 || width == 0 {
            return Err(GridError::ZeroDimension { height, width });
        }
        Ok(Self { height, width })
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of cells.
    pub const fn area(&self) -> usize {
        self.height * self.width
    }

    /// Flat index of `(y, x)`, wrapped onto the torus.
    pub const fn wrapped_index(&self, y: usize, x: usize) -> usize {
        (y % self.height) * self.width + (x % self.width)
    }
}

/// Count of live cells.
pub fn population(cells: &[u8]) -> usize {
    cells.iter().map(|&c| c as usize).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_dimensions() {
        assert_eq!(
            GridSize::new(0, 5),
            Err(GridError::ZeroDimension { height: 0, width: 5 })
        );
        assert!(GridSize::new(5, 0).is_err());
    }

    #[test]
    fn area_and_wrap() {
        let size = GridSize::new(3, 4).unwrap();
        assert_eq!(size.area(), 12);
        assert_eq!(size.wrapped_index(0, 0), 0);
        assert_eq!(size.wrapped_index(3, 4), 0);
        assert_eq!(size.wrapped_index(2, 5), 2 * 4 + 1);
    }

    #[test]
    fn population_counts_live_cells() {
        assert_eq!(population(&[1, 0, 1, 1, 0]), 3);
        assert_eq!(population(&[]), 0);
    }
}
