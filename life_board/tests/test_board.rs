#[cfg(test)]
mod tests {
    use life_board::{Board, BoardError, BoardObserver, NullObserver};

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Event {
        Toggle(usize, usize),
        Set(usize, usize, bool),
    }

    /// Observer that records every notification in order.
    #[derive(Default)]
    struct Recorder {
        events: Vec<Event>,
    }

    impl BoardObserver for Recorder {
        fn on_toggle(&mut self, x: usize, y: usize) {
            self.events.push(Event::Toggle(x, y));
        }

        fn on_set(&mut self, x: usize, y: usize, alive: bool) {
            self.events.push(Event::Set(x, y, alive));
        }
    }

    fn board_with(side: usize, alive: &[(usize, usize)]) -> Board<NullObserver> {
        let mut board = Board::new(side, NullObserver);
        for &(x, y) in alive {
            board.set_cell(x, y, true).unwrap();
        }
        board
    }

    fn alive_cells<O: BoardObserver>(board: &Board<O>) -> Vec<(usize, usize)> {
        let mut result = vec![];
        for x in 0..board.side() {
            for y in 0..board.side() {
                if board.cell_state(x, y).unwrap() {
                    result.push((x, y));
                }
            }
        }
        result
    }

    #[test]
    fn test_new_board_is_all_dead() {
        let board = Board::new(5, NullObserver);
        assert_eq!(board.side(), 5);
        assert!(alive_cells(&board).is_empty());
    }

    #[test]
    fn test_step_keeps_all_dead_board_dead() {
        let mut board = Board::new(5, NullObserver);
        board.step();
        assert!(alive_cells(&board).is_empty());
    }

    #[test]
    fn test_lone_cell_dies_anywhere() {
        // interior, edge and corner positions
        for pos in [(2, 2), (0, 2), (2, 0), (0, 0), (4, 4)] {
            let mut board = board_with(5, &[pos]);
            board.step();
            assert!(
                alive_cells(&board).is_empty(),
                "lone cell at {pos:?} survived"
            );
        }
    }

    #[test]
    fn test_lone_corner_cell_dies_on_4x4() {
        let mut board = board_with(4, &[(0, 0)]);
        board.step();
        assert!(alive_cells(&board).is_empty());
    }

    #[test]
    fn test_block_is_still_life() {
        let block = [(2, 2), (2, 3), (3, 2), (3, 3)];
        let mut board = board_with(6, &block);
        for _ in 0..5 {
            board.step();
            assert_eq!(alive_cells(&board), block.to_vec());
        }
    }

    #[test]
    fn test_blinker_oscillates_with_period_2() {
        let horizontal = [(2, 1), (2, 2), (2, 3)];
        let vertical = [(1, 2), (2, 2), (3, 2)];
        let mut board = board_with(5, &horizontal);

        board.step();
        assert_eq!(alive_cells(&board), vertical.to_vec());

        board.step();
        assert_eq!(alive_cells(&board), horizontal.to_vec());
    }

    #[test]
    fn test_double_toggle_restores_state_and_fires_twice() {
        let mut board = Board::new(4, Recorder::default());
        board.toggle_cell(1, 2).unwrap();
        assert!(board.cell_state(1, 2).unwrap());

        board.toggle_cell(1, 2).unwrap();
        assert!(!board.cell_state(1, 2).unwrap());
        assert_eq!(
            board.observer().events,
            vec![Event::Toggle(1, 2), Event::Toggle(1, 2)]
        );
    }

    #[test]
    fn test_set_cell_renotifies_unchanged_value() {
        let mut board = Board::new(3, Recorder::default());
        board.set_cell(0, 0, true).unwrap();
        board.set_cell(0, 0, true).unwrap();
        assert_eq!(
            board.observer().events,
            vec![Event::Set(0, 0, true), Event::Set(0, 0, true)]
        );
    }

    #[test]
    fn test_clear_notifies_every_cell_in_row_major_order() {
        let mut board = Board::new(3, Recorder::default());
        board.set_cell(1, 1, true).unwrap();
        board.observer_mut().events.clear();

        board.clear();

        let mut expected = vec![];
        for x in 0..3 {
            for y in 0..3 {
                expected.push(Event::Set(x, y, false));
            }
        }
        assert_eq!(board.observer().events, expected);
        assert!(alive_cells(&board).is_empty());
    }

    #[test]
    fn test_step_notifies_every_cell_every_generation() {
        let mut board = Board::new(3, Recorder::default());
        board.set_cell(1, 1, true).unwrap();
        board.observer_mut().events.clear();

        board.step();

        // all 9 cells are reported, unchanged ones included
        assert_eq!(board.observer().events.len(), 9);
        let mut expected = vec![];
        for x in 0..3 {
            for y in 0..3 {
                expected.push(Event::Set(x, y, false));
            }
        }
        assert_eq!(board.observer().events, expected);
    }

    #[test]
    fn test_neighbor_count_on_full_board() {
        let all: Vec<_> = (0..3).flat_map(|x| (0..3).map(move |y| (x, y))).collect();
        let board = board_with(3, &all);

        assert_eq!(board.neighbor_count(1, 1).unwrap(), 8);
        assert_eq!(board.neighbor_count(0, 1).unwrap(), 5);
        assert_eq!(board.neighbor_count(0, 0).unwrap(), 3);
        assert_eq!(board.neighbor_count(2, 2).unwrap(), 3);
    }

    #[test]
    fn test_neighbor_count_clips_at_the_boundary() {
        // corner (0, 0) only sees (0, 1), (1, 0) and (1, 1)
        let board = board_with(5, &[(0, 1), (1, 0), (1, 1), (0, 4), (4, 0), (4, 4)]);
        assert_eq!(board.neighbor_count(0, 0).unwrap(), 3);
    }

    #[test]
    fn test_out_of_range_coordinates_are_rejected() {
        let mut board = Board::new(4, Recorder::default());

        let err = BoardError::OutOfRangeCoordinate { x: 4, y: 0, side: 4 };
        assert_eq!(board.set_cell(4, 0, true), Err(err));

        let err = BoardError::OutOfRangeCoordinate { x: 1, y: 7, side: 4 };
        assert_eq!(board.toggle_cell(1, 7), Err(err));

        assert!(board.cell_state(4, 4).is_err());
        assert!(board.neighbor_count(0, 4).is_err());

        // a rejected call must not have notified or written anything
        assert!(board.observer().events.is_empty());
        assert!(alive_cells(&board).is_empty());
    }

    #[test]
    fn test_for_each_cell_visits_row_major_order() {
        let mut board = board_with(3, &[(1, 2)]);
        let mut visits = vec![];
        board.for_each_cell(|_, x, y, state| visits.push((x, y, state)));

        let mut expected = vec![];
        for x in 0..3 {
            for y in 0..3 {
                expected.push((x, y, (x, y) == (1, 2)));
            }
        }
        assert_eq!(visits, expected);
    }

    #[test]
    fn test_for_each_cell_mutation_takes_effect_immediately() {
        let mut board = Board::new(3, NullObserver);
        let mut visits = 0;
        board.for_each_cell(|board, x, y, state| {
            visits += 1;
            if (x, y) == (0, 0) {
                board.set_cell(2, 2, true).unwrap();
            }
            if (x, y) == (2, 2) {
                // the write from the first visit is already observable
                assert!(state);
            }
        });
        // mutation does not change the fixed traversal sequence
        assert_eq!(visits, 9);
    }

    #[test]
    fn test_randomize_is_reproducible_with_seed() {
        let mut a = Board::new(8, NullObserver);
        let mut b = Board::new(8, NullObserver);
        a.randomize(Some(42), 0.5);
        b.randomize(Some(42), 0.5);
        assert_eq!(alive_cells(&a), alive_cells(&b));
        assert!(!alive_cells(&a).is_empty());
    }
}
