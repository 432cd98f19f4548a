use crate::{Error, Grid, Result};

/// A named seed, as alive cells relative to its top-left corner.
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(i64, i64)],
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Block",
        cells: &[(0, 0), (1, 0), (0, 1), (1, 1)],
    },
    Pattern {
        name: "Beehive",
        cells: &[(1, 0), (2, 0), (0, 1), (3, 1), (1, 2), (2, 2)],
    },
    Pattern {
        name: "Blinker",
        cells: &[(0, 0), (1, 0), (2, 0)],
    },
    Pattern {
        name: "Toad",
        cells: &[(1, 0), (2, 0), (3, 0), (0, 1), (1, 1), (2, 1)],
    },
    Pattern {
        name: "Beacon",
        cells: &[(0, 0), (1, 0), (0, 1), (3, 2), (2, 3), (3, 3)],
    },
    Pattern {
        name: "Glider",
        cells: &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
    },
    Pattern {
        name: "R-pentomino",
        cells: &[(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)],
    },
];

impl Pattern {
    /// Case-insensitive lookup among [`PATTERNS`].
    pub fn by_name(name: &str) -> Result<&'static Pattern> {
        PATTERNS
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| Error::UnknownPattern(name.to_string()))
    }

    pub fn width(&self) -> i64 {
        self.cells.iter().map(|&(x, _)| x + 1).max().unwrap_or(0)
    }

    pub fn height(&self) -> i64 {
        self.cells.iter().map(|&(_, y)| y + 1).max().unwrap_or(0)
    }

    /// Sets the pattern's cells alive with its top-left corner at `(x, y)`.
    ///
    /// Fails without partial writes if any cell lands outside the field.
    pub fn place(&self, grid: &Grid, x: i64, y: i64) -> Result<Grid> {
        let n = grid.size();
        let mut cells = grid.cells().to_vec();
        for &(dx, dy) in self.cells {
            match x.checked_add(dx).zip(y.checked_add(dy)) {
                Some((cx, cy)) if grid.is_in_bounds(cx, cy) => {
                    cells[cx as usize + cy as usize * n] = true;
                }
                _ => {
                    return Err(Error::OutOfBounds {
                        x: x.saturating_add(dx),
                        y: y.saturating_add(dy),
                        size: n,
                    })
                }
            }
        }
        Ok(Grid::from_buffer(n, cells))
    }

    /// A blank field of the given size with the pattern in the middle.
    pub fn centered(&self, size: usize) -> Result<Grid> {
        let grid = Grid::blank(size)?;
        let n = size as i64;
        self.place(&grid, (n - self.width()) / 2, (n - self.height()) / 2)
    }
}
