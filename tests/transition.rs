#[cfg(test)]
mod tests {
    use life_board::{count_neighbors, next_state, step, Grid, Pattern, NEIGHBOR_OFFSETS};

    const N: usize = 20;
    const SEED: u64 = 42;
    const FILL_RATE: f64 = 0.3;

    /// 5x5 field with the center set to `alive` and the first `count`
    /// surrounding cells alive.
    fn neighborhood(alive: bool, count: usize) -> Grid {
        let mut grid = Grid::blank(5).unwrap().with_cell(2, 2, alive).unwrap();
        for &(dx, dy) in NEIGHBOR_OFFSETS.iter().take(count) {
            grid = grid.with_cell(2 + dx, 2 + dy, true).unwrap();
        }
        grid
    }

    fn pattern(name: &str, size: usize) -> Grid {
        Pattern::by_name(name).unwrap().centered(size).unwrap()
    }

    #[test]
    fn test_survival() {
        for count in 0..=8 {
            let grid = neighborhood(true, count);
            assert_eq!(count_neighbors(&grid, 2, 2) as usize, count);
            let next = step(&grid);
            assert_eq!(
                next.grid.get(2, 2),
                count == 2 || count == 3,
                "alive cell with {} neighbors",
                count
            );
        }
    }

    #[test]
    fn test_birth() {
        for count in 0..=8 {
            let next = step(&neighborhood(false, count));
            assert_eq!(
                next.grid.get(2, 2),
                count == 3,
                "dead cell with {} neighbors",
                count
            );
        }
    }

    #[test]
    fn test_blank_is_fixed_point() {
        for size in [1, N, 35] {
            let grid = Grid::blank(size).unwrap();
            let next = step(&grid);
            assert!(!next.changed);
            assert_eq!(next.grid, grid);
        }
    }

    #[test]
    fn test_still_lifes() {
        for name in ["Block", "Beehive"] {
            let grid = pattern(name, N);
            let next = step(&grid);
            assert!(!next.changed, "{}", name);
            assert_eq!(next.grid, grid, "{}", name);
        }
    }

    #[test]
    fn test_oscillators_have_period_two() {
        for name in ["Blinker", "Toad", "Beacon"] {
            let start = pattern(name, N);
            let mut grid = start.clone();
            for generation in 1..=10 {
                let next = step(&grid);
                assert!(next.changed, "{} at generation {}", name, generation);
                assert_eq!(next.grid == start, generation % 2 == 0, "{}", name);
                grid = next.grid;
            }
        }
    }

    #[test]
    fn test_blinker_rotates() {
        let horizontal = Grid::parse(
            "
            .....
            .....
            .###.
            .....
            .....
            ",
        )
        .unwrap();
        let vertical = step(&horizontal).grid;
        assert_eq!(vertical.alive_cells().collect::<Vec<_>>(), [(2, 1), (2, 2), (2, 3)]);
        assert_eq!(step(&vertical).grid, horizontal);
    }

    #[test]
    fn test_glider_settles_in_corner() {
        // with hard edges the glider crashes into the far corner as a block
        let glider = Pattern::by_name("Glider").unwrap();
        let mut grid = glider.place(&Grid::blank(10).unwrap(), 0, 0).unwrap();
        let mut generations = 0;
        loop {
            let next = step(&grid);
            if !next.changed {
                break;
            }
            grid = next.grid;
            generations += 1;
            assert!(generations < 100, "glider never settled:\n{}", grid);
        }
        assert_eq!(generations, 31);
        assert_eq!(grid.alive_cells().collect::<Vec<_>>(), [(8, 8), (9, 8), (8, 9), (9, 9)]);
    }

    #[test]
    fn test_edges_act_as_dead_cells() {
        // a field embedded in a larger blank one evolves identically for one
        // generation, as long as only the original area is compared
        const MARGIN: usize = 5;

        let small = Grid::random(N, Some(SEED), FILL_RATE).unwrap();
        let big_size = N + 2 * MARGIN;
        let mut big = Grid::blank(big_size).unwrap();
        for (x, y) in small.alive_cells() {
            big = big
                .with_cell(x + MARGIN as i64, y + MARGIN as i64, true)
                .unwrap();
        }

        let small_next = step(&small).grid;
        let big_next = step(&big).grid;
        for y in 0..N as i64 {
            for x in 0..N as i64 {
                assert_eq!(
                    small_next.get(x, y),
                    big_next.get(x + MARGIN as i64, y + MARGIN as i64),
                    "x={} y={}",
                    x,
                    y
                );
            }
        }
    }

    #[test]
    fn test_step_matches_rule_per_cell() {
        let grid = Grid::random(35, Some(SEED), FILL_RATE).unwrap();
        let next = step(&grid);
        let mut changed = false;
        for y in 0..35 {
            for x in 0..35 {
                let expected = next_state(grid.get(x, y), count_neighbors(&grid, x, y));
                assert_eq!(next.grid.get(x, y), expected, "x={} y={}", x, y);
                changed |= expected != grid.get(x, y);
            }
        }
        assert_eq!(next.changed, changed);
    }
}
