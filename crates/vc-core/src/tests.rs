mod position {
    use crate::{Direction, Position};
    use std::collections::HashSet;

    #[test]
    fn moved_applies_unit_offset() {
        let p = Position::new(2, 3);
        assert_eq!(p.moved(Direction::North), Position::new(1, 3));
        assert_eq!(p.moved(Direction::South), Position::new(3, 3));
        assert_eq!(p.moved(Direction::East), Position::new(2, 4));
        assert_eq!(p.moved(Direction::West), Position::new(2, 2));
    }

    #[test]
    fn hash_distinguishes_negative_coordinates() {
        let mut seen = HashSet::new();
        for row in -5..5 {
            for col in -5..5 {
                assert!(seen.insert(Position::new(row, col)), "collision at ({row}, {col})");
            }
        }
    }

    #[test]
    fn direction_order_is_fixed() {
        assert_eq!(
            Direction::ALL,
            [Direction::North, Direction::East, Direction::South, Direction::West]
        );
    }
}

mod step {
    use crate::{Direction, Step};

    #[test]
    fn directional_steps_round_trip_through_direction() {
        for d in Direction::ALL {
            let step: Step = d.into();
            assert_eq!(Direction::try_from(step), Ok(d));
        }
    }

    #[test]
    fn stay_and_finish_have_no_direction() {
        assert!(Direction::try_from(Step::Stay).is_err());
        assert!(Direction::try_from(Step::Finish).is_err());
    }

    #[test]
    fn as_char_matches_output_artifact_convention() {
        assert_eq!(Step::North.as_char(), 'N');
        assert_eq!(Step::East.as_char(), 'E');
        assert_eq!(Step::South.as_char(), 'S');
        assert_eq!(Step::West.as_char(), 'W');
        assert_eq!(Step::Stay.as_char(), 's');
        assert_eq!(Step::Finish.as_char(), 'F');
    }
}
