use crate::{Error, Result};
use std::{fmt, sync::Arc};

/// Square board of dead and alive cells.
///
/// Cells are stored row-major (`x + y * size`) in a buffer shared between
/// clones. Every edit builds a new buffer, so a `Grid` that was handed out as
/// a snapshot never changes under its holder.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    cells: Arc<[bool]>,
    size: usize,
}

impl Grid {
    /// Largest accepted side length.
    pub const MAX_SIZE: usize = 4096;

    /// Number of cells in a `size x size` field, or why there can be no such field.
    pub fn cell_count(size: usize) -> Result<usize> {
        if size == 0 {
            return Err(Error::EmptyGrid);
        }
        size.checked_mul(size)
            .filter(|_| size <= Self::MAX_SIZE)
            .ok_or(Error::TooLarge {
                size,
                max: Self::MAX_SIZE,
            })
    }

    /// Create an all-dead field with dimensions `size x size`.
    pub fn blank(size: usize) -> Result<Self> {
        let count = Self::cell_count(size)?;
        Ok(Self::from_buffer(size, vec![false; count]))
    }

    /// Create a field from row-major cells.
    pub fn from_cells(size: usize, cells: Vec<bool>) -> Result<Self> {
        let expected = Self::cell_count(size)?;
        if cells.len() != expected {
            return Err(Error::CellCount {
                expected,
                actual: cells.len(),
            });
        }
        Ok(Self::from_buffer(size, cells))
    }

    /// Create a field with random cells.
    ///
    /// `seed` - random seed (if `None`, then random seed is generated)
    pub fn random(size: usize, seed: Option<u64>, fill_rate: f64) -> Result<Self> {
        use rand::{Rng, SeedableRng};

        if !(0.0..=1.0).contains(&fill_rate) {
            return Err(Error::InvalidFillRate(fill_rate));
        }
        let count = Self::cell_count(size)?;
        let mut rng = if let Some(x) = seed {
            rand_chacha::ChaCha8Rng::seed_from_u64(x)
        } else {
            rand_chacha::ChaCha8Rng::from_entropy()
        };
        let cells = (0..count).map(|_| rng.gen_bool(fill_rate)).collect();
        Ok(Self::from_buffer(size, cells))
    }

    /// Parse a square picture made of `.`/`0` (dead) and `#`/`O`/`1` (alive).
    ///
    /// Surrounding whitespace and blank lines are ignored.
    pub fn parse(text: &str) -> Result<Self> {
        let rows = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>();
        let size = rows.len();
        let mut cells = Vec::with_capacity(Self::cell_count(size)?);
        for (row, line) in rows.iter().enumerate() {
            let len = line.chars().count();
            if len != size {
                return Err(Error::RaggedRow { row, len, size });
            }
            for ch in line.chars() {
                cells.push(match ch {
                    '.' | '0' => false,
                    '#' | 'O' | '1' => true,
                    _ => return Err(Error::InvalidChar { ch }),
                });
            }
        }
        Self::from_cells(size, cells)
    }

    /// Wraps a buffer produced inside the crate; the length is trusted.
    pub(crate) fn from_buffer(size: usize, cells: Vec<bool>) -> Self {
        debug_assert_eq!(cells.len(), size * size);
        Self {
            cells: cells.into(),
            size,
        }
    }

    /// Side length of the field.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Row-major view of the cells.
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.chunks(self.size)
    }

    /// Whether `(x, y)` lies within `[0, size)` on both axes.
    pub fn is_in_bounds(&self, x: i64, y: i64) -> bool {
        let n = self.size as i64;
        (0..n).contains(&x) && (0..n).contains(&y)
    }

    fn index(&self, x: i64, y: i64) -> Option<usize> {
        if self.is_in_bounds(x, y) {
            Some(x as usize + y as usize * self.size)
        } else {
            None
        }
    }

    fn checked_index(&self, x: i64, y: i64) -> Result<usize> {
        self.index(x, y).ok_or(Error::OutOfBounds {
            x,
            y,
            size: self.size,
        })
    }

    /// Cell state at `(x, y)`; everything outside the field is dead.
    pub fn get(&self, x: i64, y: i64) -> bool {
        self.index(x, y).is_some_and(|i| self.cells[i])
    }

    /// Cell state at `(x, y)`, rejecting coordinates outside the field.
    pub fn cell(&self, x: i64, y: i64) -> Result<bool> {
        Ok(self.cells[self.checked_index(x, y)?])
    }

    /// Copy of the field with the cell at `(x, y)` flipped.
    pub fn toggled(&self, x: i64, y: i64) -> Result<Self> {
        let i = self.checked_index(x, y)?;
        let mut cells = self.cells.to_vec();
        cells[i] = !cells[i];
        Ok(Self::from_buffer(self.size, cells))
    }

    /// Copy of the field with the cell at `(x, y)` set to `alive`.
    pub fn with_cell(&self, x: i64, y: i64, alive: bool) -> Result<Self> {
        let i = self.checked_index(x, y)?;
        if self.cells[i] == alive {
            return Ok(self.clone());
        }
        let mut cells = self.cells.to_vec();
        cells[i] = alive;
        Ok(Self::from_buffer(self.size, cells))
    }

    /// Total number of alive cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// True when no cell is alive.
    pub fn is_blank(&self) -> bool {
        !self.cells.contains(&true)
    }

    /// Coordinates of alive cells in row-major order.
    pub fn alive_cells(&self) -> impl Iterator<Item = (i64, i64)> + '_ {
        let n = self.size;
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &alive)| alive)
            .map(move |(i, _)| ((i % n) as i64, (i / n) as i64))
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.rows().enumerate() {
            if y != 0 {
                writeln!(f)?;
            }
            let line = row
                .iter()
                .map(|&alive| if alive { '#' } else { '.' })
                .collect::<String>();
            f.write_str(&line)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Grid({}x{})\n{}", self.size, self.size, self)
    }
}

#[cfg(test)]
mod tests {
    use super::Grid;
    use crate::Error;

    const N: usize = 20;

    #[test]
    fn test_blank() {
        let grid = Grid::blank(N).unwrap();
        assert_eq!(grid.size(), N);
        assert_eq!(grid.cells().len(), N * N);
        assert!(grid.is_blank());
        assert_eq!(Grid::blank(0), Err(Error::EmptyGrid));
    }

    #[test]
    fn test_oversized_fields_are_rejected() {
        let max = Grid::MAX_SIZE;
        assert_eq!(Grid::cell_count(max), Ok(max * max));
        for size in [max + 1, usize::MAX / 2, usize::MAX] {
            let too_large = Err(Error::TooLarge { size, max });
            assert_eq!(Grid::blank(size), too_large);
            assert_eq!(Grid::from_cells(size, vec![]), too_large);
            assert_eq!(Grid::random(size, Some(42), 0.5), too_large);
        }
    }

    #[test]
    fn test_out_of_bounds_reads_are_dead() {
        let grid = Grid::parse("##\n##").unwrap();
        for (x, y) in [(-1, 0), (0, -1), (2, 0), (0, 2), (-1, -1), (2, 2)] {
            assert!(!grid.get(x, y), "x={} y={}", x, y);
            assert_eq!(
                grid.cell(x, y),
                Err(Error::OutOfBounds { x, y, size: 2 }),
                "x={} y={}",
                x,
                y
            );
        }
        assert!(grid.get(1, 1));
    }

    #[test]
    fn test_toggle_corners() {
        let grid = Grid::blank(N).unwrap();
        let last = N as i64 - 1;
        for (x, y) in [(0, 0), (last, last)] {
            let toggled = grid.toggled(x, y).unwrap();
            assert_eq!(toggled.alive_cells().collect::<Vec<_>>(), vec![(x, y)]);
        }
        assert!(matches!(
            grid.toggled(-1, 0),
            Err(Error::OutOfBounds { x: -1, y: 0, .. })
        ));
        assert!(matches!(
            grid.toggled(N as i64, N as i64),
            Err(Error::OutOfBounds { .. })
        ));
    }

    #[test]
    fn test_toggle_leaves_original_untouched() {
        let original = Grid::blank(N).unwrap();
        let snapshot = original.clone();
        let toggled = original.toggled(3, 4).unwrap();

        assert!(toggled.get(3, 4));
        assert!(!original.get(3, 4));
        assert!(!snapshot.get(3, 4));
        assert_eq!(toggled.toggled(3, 4).unwrap(), original);
    }

    #[test]
    fn test_with_cell() {
        let grid = Grid::blank(4).unwrap().with_cell(1, 2, true).unwrap();
        assert!(grid.cell(1, 2).unwrap());
        assert_eq!(grid.with_cell(1, 2, true).unwrap(), grid);
        assert!(grid.with_cell(1, 2, false).unwrap().is_blank());
    }

    #[test]
    fn test_parse_and_display() {
        let text = "
            .#.
            .#.
            .#.
        ";
        let grid = Grid::parse(text).unwrap();
        assert_eq!(grid.size(), 3);
        assert_eq!(grid.population(), 3);
        assert_eq!(grid.to_string(), ".#.\n.#.\n.#.");
        assert_eq!(Grid::parse(&grid.to_string()).unwrap(), grid);

        assert_eq!(
            Grid::parse("..\n..."),
            Err(Error::RaggedRow {
                row: 1,
                len: 3,
                size: 2
            })
        );
        assert_eq!(Grid::parse("x"), Err(Error::InvalidChar { ch: 'x' }));
        assert_eq!(Grid::parse("  \n"), Err(Error::EmptyGrid));
    }

    #[test]
    fn test_random_is_seeded() {
        const SEED: u64 = 42;

        let a = Grid::random(N, Some(SEED), 0.3).unwrap();
        let b = Grid::random(N, Some(SEED), 0.3).unwrap();
        assert_eq!(a, b);
        assert!(Grid::random(N, Some(SEED), 0.0).unwrap().is_blank());
        assert_eq!(Grid::random(N, Some(SEED), 1.0).unwrap().population(), N * N);
        assert!(matches!(
            Grid::random(N, Some(SEED), 1.5),
            Err(Error::InvalidFillRate(_))
        ));
        assert!(Grid::random(N, Some(SEED), f64::NAN).is_err());
    }
}
