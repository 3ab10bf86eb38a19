//! Tests for growing-tree maze carving and its tree invariants

#[cfg(test)]
mod tests {
    use pixmaze::algorithm::maze::carve;
    use pixmaze::spatial::grid::{Cell, Grid};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::VecDeque;

    fn open_edges(grid: &Grid) -> usize {
        grid.open_cells()
            .map(|cell| {
                let n = grid.neighbors(cell);
                usize::from(n.right) + usize::from(n.down)
            })
            .sum()
    }

    fn reachable_from_first_open(grid: &Grid) -> usize {
        let Some(start) = grid.open_cells().next() else {
            return 0;
        };
        let mut seen = vec![start];
        let mut queue = VecDeque::from([start]);
        while let Some(cell) = queue.pop_front() {
            let candidates = [
                cell.row.checked_sub(1).map(|r| Cell::new(r, cell.col)),
                Some(Cell::new(cell.row + 1, cell.col)),
                cell.col.checked_sub(1).map(|c| Cell::new(cell.row, c)),
                Some(Cell::new(cell.row, cell.col + 1)),
            ];
            for next in candidates.into_iter().flatten() {
                if grid.is_open(next) && !seen.contains(&next) {
                    seen.push(next);
                    queue.push_back(next);
                }
            }
        }
        seen.len()
    }

    fn has_open_square(grid: &Grid) -> bool {
        (0..grid.rows().saturating_sub(1)).any(|row| {
            (0..grid.cols().saturating_sub(1)).any(|col| {
                [(0, 0), (0, 1), (1, 0), (1, 1)]
                    .iter()
                    .all(|&(dr, dc)| grid.is_open(Cell::new(row + dr, col + dc)))
            })
        })
    }

    fn assert_perfect(grid: &Grid) {
        let open = grid.open_count();
        assert!(open >= 1, "a non-empty maze opens at least its start cell");
        assert_eq!(
            reachable_from_first_open(grid),
            open,
            "open cells must form one connected component"
        );
        assert_eq!(open_edges(grid), open - 1, "open cells must form a tree");
        assert!(!has_open_square(grid), "no 2x2 block may be fully open");
    }

    // Tests tree shape over many seeds and sizes
    #[test]
    fn test_carve_produces_connected_acyclic_maze() {
        for size in 1..=12 {
            for seed in 0..20 {
                let mut rng = StdRng::seed_from_u64(seed);
                let grid = carve(size, &mut rng);
                assert_eq!((grid.rows(), grid.cols()), (size, size));
                assert_perfect(&grid);
            }
        }
    }

    // Tests that the carve only stops once no wall cell could still join the tree
    #[test]
    fn test_carve_is_maximal() {
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let grid = carve(15, &mut rng);
            for row in 0..grid.rows() {
                for col in 0..grid.cols() {
                    let cell = Cell::new(row, col);
                    let touching = grid.neighbors(cell).count();
                    if !grid.is_open(cell) && touching > 0 {
                        assert!(
                            touching >= 2,
                            "wall cell {cell:?} with one open neighbor should have been carved"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_carve_three_by_three_is_a_spanning_tree_without_loops() {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let grid = carve(3, &mut rng);
            assert_perfect(&grid);
            assert!(
                grid.open_count() < 9,
                "opening all nine cells would create a 2x2 block"
            );
        }
    }

    #[test]
    fn test_carve_single_cell_and_empty_grid() {
        let mut rng = StdRng::seed_from_u64(3);

        let single = carve(1, &mut rng);
        assert_eq!(single.open_count(), 1);
        assert!(single.is_open(Cell::new(0, 0)));

        let empty = carve(0, &mut rng);
        assert_eq!((empty.rows(), empty.cols()), (0, 0));
        assert_eq!(empty.open_count(), 0);
    }

    #[test]
    fn test_carve_two_by_two_opens_three_cells() {
        for seed in 0..10 {
            let mut rng = StdRng::seed_from_u64(seed);
            assert_eq!(carve(2, &mut rng).open_count(), 3);
        }
    }

    #[test]
    fn test_carve_is_reproducible_for_a_seed() {
        let a = carve(25, &mut StdRng::seed_from_u64(7));
        let b = carve(25, &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }
}
