use crate::{GridError, GridSize};

/// A named starting configuration, stored as `(row, col)` offsets from its
/// top-left corner.
#[derive(Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "glider",
        cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
    },
    Pattern {
        name: "blinker",
        cells: &[(0, 0), (0, 1), (0, 2)],
    },
    Pattern {
        name: "toad",
        cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
    },
    Pattern {
        name: "beacon",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)],
    },
    Pattern {
        name: "pulsar",
        cells: &[
            // Top half
            (0, 2), (0, 3), (0, 4), (0, 8), (0, 9), (0, 10),
            (2, 0), (2, 5), (2, 7), (2, 12),
            (3, 0), (3, 5), (3, 7), (3, 12),
            (4, 0), (4, 5), (4, 7), (4, 12),
            (5, 2), (5, 3), (5, 4), (5, 8), (5, 9), (5, 10),
            // Bottom half (mirrored)
            (7, 2), (7, 3), (7, 4), (7, 8), (7, 9), (7, 10),
            (8, 0), (8, 5), (8, 7), (8, 12),
            (9, 0), (9, 5), (9, 7), (9, 12),
            (10, 0), (10, 5), (10, 7), (10, 12),
            (12, 2), (12, 3), (12, 4), (12, 8), (12, 9), (12, 10),
        ],
    },
    Pattern {
        name: "r-pentomino",
        cells: &[(0, 1), (0, 2), (1, 0), (1, 1), (2, 1)],
    },
    Pattern {
        name: "gosper-glider-gun",
        cells: &[
            (0, 24),
            (1, 22), (1, 24),
            (2, 12), (2, 13), (2, 20), (2, 21), (2, 34), (2, 35),
            (3, 11), (3, 15), (3, 20), (3, 21), (3, 34), (3, 35),
            (4, 0), (4, 1), (4, 10), (4, 16), (4, 20), (4, 21),
            (5, 0), (5, 1), (5, 10), (5, 14), (5, 16), (5, 17), (5, 22), (5, 24),
            (6, 10), (6, 16), (6, 24),
            (7, 11), (7, 15),
            (8, 12), (8, 13),
        ],
    },
];

impl Pattern {
    /// Look a pattern up by name, ignoring case.
    pub fn find(name: &str) -> Result<&'static Pattern, GridError> {
        PATTERNS
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| GridError::UnknownPattern { name: name.to_owned() })
    }

    /// Names of all known patterns.
    pub fn names() -> impl Iterator<Item = &'static str> {
        PATTERNS.iter().map(|p| p.name)
    }

    /// Bounding box as `(rows, cols)`.
    pub fn extent(&self) -> (usize, usize) {
        self.cells
            .iter()
            .fold((0, 0), |(h, w), &(r, c)| (h.max(r + 1), w.max(c + 1)))
    }

    /// Clear `cells` and write the pattern with its top-left corner at
    /// `origin`, wrapping around the edges.
    pub fn place(&self, cells: &mut [u8], size: GridSize, origin: (usize, usize)) -> Result<(), GridError> {
        assert_eq!(cells.len(), size.area(), "grid has wrong length");
        let (rows, cols) = self.extent();
        if rows > size.height() || cols > size.width() {
            return Err(GridError::PatternTooLarge {
                pattern: self.name,
                height: size.height(),
                width: size.width(),
            });
        }

        cells.fill(0);
        for &(row, col) in self.cells {
            cells[size.wrapped_index(origin.0 + row, origin.1 + col)] = 1;
        }
        Ok(())
    }

    /// [`Pattern::place`] with the pattern centred on the grid.
    pub fn place_centered(&self, cells: &mut [u8], size: GridSize) -> Result<(), GridError> {
        let (rows, cols) = self.extent();
        let origin = (
            size.height().saturating_sub(rows) / 2,
            size.width().saturating_sub(cols) / 2,
        );
        self.place(cells, size, origin)
    }
}
