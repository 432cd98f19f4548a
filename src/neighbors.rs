use crate::Grid;

/// Offsets of the eight surrounding cells as `(dx, dy)`.
pub const NEIGHBOR_OFFSETS: [(i64, i64); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Number of alive cells around `(x, y)`, in `0..=8`.
///
/// Edges are hard: a neighbor position outside the field contributes
/// nothing, it never wraps to the opposite side.
pub fn count_neighbors(grid: &Grid, x: i64, y: i64) -> u8 {
    let mut count = 0;
    for (dx, dy) in NEIGHBOR_OFFSETS {
        // past i64::MAX is as far outside as past the last column
        let (Some(nx), Some(ny)) = (x.checked_add(dx), y.checked_add(dy)) else {
            continue;
        };
        if !grid.is_in_bounds(nx, ny) {
            continue;
        }
        if grid.get(nx, ny) {
            count += 1;
        }
    }
    count
}
