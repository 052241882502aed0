#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::num::NonZero;

    use proptest::prelude::*;

    use crate::builder::GridBuilder;
    use crate::connectivity::check_contiguity;
    use crate::grid::Grid;
    use crate::input::parse_grid;
    use crate::location::Location;
    use crate::solver::{PathSolver, SearchOptions, Solution};

    fn count(text: &str, assume_contiguity: bool, options: SearchOptions) -> Solution {
        parse_grid(text, assume_contiguity).unwrap().count_paths(options)
    }

    fn count_every_way(text: &str) -> Vec<u64> {
        let mut counts = Vec::new();
        for assume_contiguity in [false, true] {
            for options in [SearchOptions::default(), SearchOptions::exhaustive()] {
                counts.push(count(text, assume_contiguity, options).paths);
            }
        }
        counts
    }

    // plain depth-first walk over a set of visited cells, sharing no code with the solver
    fn brute_force(grid: &Grid) -> u64 {
        fn walk(grid: &Grid, location: Location, visited: &mut HashSet<Location>) -> u64 {
            if location == grid.end() {
                return u64::from(visited.len() + 1 == grid.target_length());
            }

            visited.insert(location);
            let open = grid.neighbors(location)
                .filter(|(_, next)| !grid[*next].is_blocking() && !visited.contains(next))
                .map(|(_, next)| next)
                .collect::<Vec<_>>();
            let total: u64 = open.into_iter()
                .map(|next| walk(grid, next, visited))
                .sum();
            visited.remove(&location);

            total
        }

        walk(grid, grid.start(), &mut HashSet::new())
    }

    #[test]
    fn corner_to_corner_3x3() {
        let text = "3 3\n2 0 0\n0 0 0\n0 0 3\n";
        assert_eq!(count_every_way(text), vec![2, 2, 2, 2]);
        assert_eq!(count(text, false, SearchOptions::default()), Solution { paths: 2, calls: 35 });
        assert_eq!(count(text, true, SearchOptions::exhaustive()), Solution { paths: 2, calls: 51 });
    }

    #[test]
    fn owned_center_3x3() {
        let text = "3 3\n2 0 0\n0 1 0\n0 0 3\n";
        let grid = parse_grid(text, false).unwrap();
        assert_eq!(grid.target_length(), 8);
        assert_eq!(count_every_way(text), vec![0, 0, 0, 0]);
    }

    #[test]
    fn single_room() {
        let mut grid = GridBuilder::default()
            .set_start(Location(1, 1))
            .set_end(Location(1, 1))
            .build()
            .unwrap();

        assert_eq!(grid.target_length(), 1);
        assert_eq!(grid.count_paths(SearchOptions::default()), Solution { paths: 1, calls: 1 });
    }

    #[test]
    fn challenge_sample() {
        let text = "4 3\n2 0 0 0\n0 0 0 0\n0 0 3 1\n";
        assert_eq!(count_every_way(text), vec![2, 2, 2, 2]);
        assert_eq!(count(text, true, SearchOptions::default()).calls, 44);
    }

    #[test]
    fn larger_open_grids() {
        assert_eq!(count_every_way("4 3\n2000\n0000\n0003\n"), vec![4, 4, 4, 4]);
        assert_eq!(count_every_way("5 4\n20000\n00000\n00000\n00003\n"), vec![20, 20, 20, 20]);
    }

    #[test]
    fn start_between_walls_is_not_a_pinch() {
        // the start sits between the border and a room we do not own, yet the duct leaves it sideways
        let text = "4 3\n0320\n0010\n1000\n";
        assert_eq!(count(text, false, SearchOptions::default()).paths, 1);
        assert_eq!(count(text, true, SearchOptions::default()).paths, 1);
        assert_eq!(count_every_way(text), vec![1, 1, 1, 1]);
    }

    #[test]
    fn pruning_saves_calls() {
        let text = "5 4\n20000\n00000\n00000\n00003\n";
        let pruned = count(text, false, SearchOptions::default());
        let exhaustive = count(text, false, SearchOptions::exhaustive());
        assert_eq!(pruned.paths, exhaustive.paths);
        assert!(pruned.calls < exhaustive.calls);
    }

    #[test]
    fn unreachable_end() {
        for text in ["3 1\n2 1 3\n", "3 3\n2 0 0\n0 1 1\n0 1 3\n"] {
            for assume_contiguity in [false, true] {
                for options in [SearchOptions::default(), SearchOptions::exhaustive()] {
                    let mut grid = parse_grid(text, assume_contiguity).unwrap();
                    let solution = grid.count_paths(options);
                    assert_eq!(solution.paths, 0);
                    assert!(solution.calls as usize <= grid.interior_len());
                }
            }
        }
    }

    #[test]
    fn search_restores_grid() {
        let text = "4 4\n2 0 0 0\n0 1 0 0\n0 0 0 1\n1 0 0 3\n";
        for assume_contiguity in [false, true] {
            let mut grid = parse_grid(text, assume_contiguity).unwrap();
            let before = grid.clone();
            PathSolver::new(SearchOptions::default()).solve(&mut grid);
            assert_eq!(grid, before);
        }
    }

    #[test]
    fn assuming_contiguity_wrongly_loses_routes() {
        // the start room touches neither the outside nor a room we do not own
        let text = "3 3\n0 0 0\n0 2 0\n3 0 0\n";
        assert!(!check_contiguity(&parse_grid(text, true).unwrap()).holds());
        assert_eq!(count(text, false, SearchOptions::default()).paths, 2);
        assert_eq!(count(text, true, SearchOptions::exhaustive()).paths, 2);
        assert_eq!(count(text, true, SearchOptions::default()).paths, 0);

        // a room we do not own stranded in the middle
        let text = "3 3\n0 0 0\n0 1 3\n0 0 2\n";
        assert_eq!(check_contiguity(&parse_grid(text, true).unwrap()).stranded, vec![Location(2, 2)]);
        assert_eq!(count(text, false, SearchOptions::default()).paths, 1);
        assert_eq!(count(text, true, SearchOptions::default()).paths, 0);
    }

    /// Width, height, which rooms we do not own, and the row-major start and end indices.
    fn floor_plan() -> impl Strategy<Value = (usize, usize, Vec<bool>, usize, usize)> {
        (1usize..=4, 1usize..=4).prop_flat_map(|(width, height)| {
            let rooms = width * height;
            (
                Just(width),
                Just(height),
                proptest::collection::vec(proptest::bool::weighted(0.2), rooms),
                0..rooms,
                0..rooms,
            )
        })
    }

    fn build(plan: &(usize, usize, Vec<bool>, usize, usize), assume_contiguity: bool) -> Grid {
        let (width, height, owned, start, end) = plan;
        let at = |index: usize| Location(index % width + 1, index / width + 1);

        let mut builder = GridBuilder::with_dims((NonZero::new(*width).unwrap(), NonZero::new(*height).unwrap()));
        builder.assume_contiguity(assume_contiguity);
        for (index, _) in owned.iter().enumerate().filter(|(index, owned)| **owned && index != start && index != end) {
            builder.drop_location(at(index));
        }
        builder.set_start(at(*start)).set_end(at(*end));

        builder.build().unwrap()
    }

    proptest! {
        #[test]
        fn pruning_never_changes_the_count(plan in floor_plan()) {
            let mut grid = build(&plan, false);
            let expected = brute_force(&grid);

            prop_assert_eq!(grid.count_paths(SearchOptions::exhaustive()).paths, expected);
            prop_assert_eq!(grid.count_paths(SearchOptions::default()).paths, expected);
            prop_assert_eq!(grid.count_paths(SearchOptions { corridor_pruning: true, diagonal_pruning: false }).paths, expected);
            prop_assert_eq!(grid.count_paths(SearchOptions { corridor_pruning: false, diagonal_pruning: true }).paths, expected);
        }

        #[test]
        fn assumed_contiguity_is_exact_when_it_holds(plan in floor_plan()) {
            let mut grid = build(&plan, true);
            prop_assume!(check_contiguity(&grid).holds());

            let expected = brute_force(&grid);
            prop_assert_eq!(grid.count_paths(SearchOptions::default()).paths, expected);
            prop_assert_eq!(build(&plan, false).count_paths(SearchOptions::default()).paths, expected);
        }

        #[test]
        fn search_leaves_grid_untouched(plan in floor_plan(), assume_contiguity in any::<bool>()) {
            let mut grid = build(&plan, assume_contiguity);
            let before = grid.clone();

            grid.count_paths(SearchOptions::default());
            prop_assert_eq!(&grid, &before);
        }
    }
}
