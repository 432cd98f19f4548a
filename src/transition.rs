use crate::{count_neighbors, Grid};

/// Result of applying the rule to a whole field once.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    pub grid: Grid,
    /// Whether at least one cell differs from the input.
    pub changed: bool,
}

/// B3/S23: an alive cell survives with 2 or 3 neighbors, a dead cell is born
/// with exactly 3.
pub fn next_state(alive: bool, neighbors: u8) -> bool {
    matches!((alive, neighbors), (true, 2) | (true, 3) | (false, 3))
}

/// Computes the next generation.
///
/// Neighbor counts are always taken from `grid`, which is never written;
/// results go to a separate buffer that starts as a copy of the input.
pub fn step(grid: &Grid) -> Transition {
    let n = grid.size();
    let mut cells_next = grid.cells().to_vec();
    let mut changed = false;
    for y in 0..n {
        for x in 0..n {
            let alive = grid.cells()[x + y * n];
            let neighbors = count_neighbors(grid, x as i64, y as i64);
            let next = next_state(alive, neighbors);
            if next != alive {
                cells_next[x + y * n] = next;
                changed = true;
            }
        }
    }
    Transition {
        grid: if changed {
            Grid::from_buffer(n, cells_next)
        } else {
            grid.clone()
        },
        changed,
    }
}
