use std::fmt;

use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum GridError {
    InvalidDimension { width: usize, height: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::InvalidDimension { width, height } => {
                write!(f, "grid dimensions must be positive, got {width}x{height}")
            }
        }
    }
}

impl std::error::Error for GridError {}

/// Row-major field of cells, 0 dead and 1 live. Dimensions never change after
/// construction; each generation replaces the grid wholesale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Grid {
    width: usize,
    height: usize,
    cells: Vec<u8>,
}

impl Grid {
    pub(crate) fn dead(width: usize, height: usize) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::InvalidDimension { width, height });
        }
        Ok(Self {
            width,
            height,
            cells: vec![0; width * height],
        })
    }

    pub(crate) fn random(
        width: usize,
        height: usize,
        density: f64,
        rng: &mut impl Rng,
    ) -> Result<Self, GridError> {
        let mut grid = Self::dead(width, height)?;
        let density = density.clamp(0.0, 1.0);
        for cell in &mut grid.cells {
            *cell = rng.gen_bool(density) as u8;
        }
        Ok(grid)
    }

    // Same dimensions, every cell dead. Output buffer for the next generation.
    pub(crate) fn blank_like(&self) -> Self {
        Self {
            width: self.width,
            height: self.height,
            cells: vec![0; self.cells.len()],
        }
    }

    pub(crate) fn width(&self) -> usize {
        self.width
    }

    pub(crate) fn height(&self) -> usize {
        self.height
    }

    fn idx(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    pub(crate) fn get(&self, row: usize, col: usize) -> u8 {
        assert!(
            row < self.height && col < self.width,
            "cell read out of bounds: ({row}, {col})"
        );
        self.cells[self.idx(row, col)]
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, state: u8) {
        assert!(
            row < self.height && col < self.width,
            "cell write out of bounds: ({row}, {col})"
        );
        let i = self.idx(row, col);
        self.cells[i] = (state != 0) as u8;
    }

    pub(crate) fn live_count(&self) -> usize {
        self.cells.iter().map(|&c| c as usize).sum()
    }

    /// 3x3 window centered on (row, col). Positions outside the grid read as
    /// dead; the boundary is fixed, not toroidal. Rows are bounded by height,
    /// columns by width.
    pub(crate) fn neighborhood(&self, row: usize, col: usize) -> [[u8; 3]; 3] {
        assert!(
            row < self.height && col < self.width,
            "neighborhood center out of bounds: ({row}, {col})"
        );
        let mut window = [[0u8; 3]; 3];
        for dr in -1isize..=1 {
            for dc in -1isize..=1 {
                let r = row as isize + dr;
                let c = col as isize + dc;
                if r < 0 || c < 0 {
                    continue;
                }
                let (r, c) = (r as usize, c as usize);
                if r < self.height && c < self.width {
                    window[(dr + 1) as usize][(dc + 1) as usize] = self.cells[self.idx(r, c)];
                }
            }
        }
        window
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_zero_dimensions_rejected() {
        assert_eq!(
            Grid::dead(0, 4).unwrap_err(),
            GridError::InvalidDimension { width: 0, height: 4 }
        );
        assert_eq!(
            Grid::dead(4, 0).unwrap_err(),
            GridError::InvalidDimension { width: 4, height: 0 }
        );

        let mut rng = StdRng::seed_from_u64(1);
        assert!(Grid::random(0, 0, 0.15, &mut rng).is_err());
    }

    #[test]
    fn test_density_extremes() {
        let mut rng = StdRng::seed_from_u64(7);

        let empty = Grid::random(8, 6, 0.0, &mut rng).unwrap();
        assert_eq!(empty.live_count(), 0);

        let full = Grid::random(8, 6, 1.0, &mut rng).unwrap();
        assert_eq!(full.live_count(), 48);
    }

    #[test]
    fn test_set_get_population() {
        let mut grid = Grid::dead(4, 3).unwrap();
        grid.set(2, 3, 1);
        grid.set(0, 0, 7); // any nonzero stores as live
        assert_eq!(grid.get(2, 3), 1);
        assert_eq!(grid.get(0, 0), 1);
        assert_eq!(grid.live_count(), 2);

        grid.set(0, 0, 0);
        assert_eq!(grid.live_count(), 1);
    }

    #[test]
    fn test_neighborhood_window() {
        // 5 wide, 2 high: row bounds come from height, column bounds from
        // width, also on grids where the two differ.
        let mut grid = Grid::dead(5, 2).unwrap();
        for col in 0..5 {
            grid.set(0, col, 1);
            grid.set(1, col, 1);
        }
        assert_eq!(grid.neighborhood(0, 0), [[0, 0, 0], [0, 1, 1], [0, 1, 1]]);
        assert_eq!(grid.neighborhood(1, 4), [[1, 1, 0], [1, 1, 0], [0, 0, 0]]);
    }

    #[test]
    fn test_corners_never_see_opposite_edges() {
        let mut grid = Grid::dead(6, 4).unwrap();
        grid.set(0, 5, 1);
        grid.set(3, 0, 1);
        grid.set(3, 5, 1);
        assert_eq!(grid.neighborhood(0, 0), [[0; 3]; 3]);
    }

    #[test]
    #[should_panic]
    fn test_out_of_range_neighborhood_panics() {
        let grid = Grid::dead(3, 3).unwrap();
        grid.neighborhood(3, 0);
    }
}
