mod grid {
    use vc_core::Position;

    use crate::grid::Grid;

    fn open_3x3() -> Grid {
        Grid::new(3, 3, vec![false; 9], vec![0; 9])
    }

    #[test]
    fn off_grid_positions_are_walls() {
        let grid = open_3x3();
        assert!(grid.is_wall(Position::new(-1, 0)));
        assert!(grid.is_wall(Position::new(0, 3)));
        assert!(!grid.is_wall(Position::new(0, 0)));
    }

    #[test]
    fn clean_floors_at_zero() {
        let mut grid = Grid::new(1, 1, vec![false], vec![0]);
        grid.clean(Position::ORIGIN);
        assert_eq!(grid.dirt_level(Position::ORIGIN), 0);
    }

    #[test]
    fn clean_reduces_dirt_by_one() {
        let mut grid = Grid::new(1, 1, vec![false], vec![3]);
        grid.clean(Position::ORIGIN);
        assert_eq!(grid.dirt_level(Position::ORIGIN), 2);
    }

    #[test]
    fn total_dirt_sums_all_cells() {
        let grid = Grid::new(1, 3, vec![false, false, true], vec![1, 2, 9]);
        // Wall cell's dirt value is never exposed via `dirt_level`, but
        // `total_dirt` sums the raw dirt vector as stored — a malformed
        // environment with dirt behind a wall is the parser's problem, not
        // the grid's, so this sum is intentionally unconditional.
        assert_eq!(grid.total_dirt(), 12);
    }
}

mod house {
    use vc_core::{Direction, DirtSensor, Position, WallsSensor};

    use crate::error::HouseError;
    use crate::grid::Grid;
    use crate::house::House;

    /// 1x3 corridor: dock at (0,0), open floor at (0,1) with dirt=2, wall at (0,2).
    fn corridor() -> House {
        let grid = Grid::new(1, 3, vec![false, false, true], vec![0, 2, 0]);
        House::new(grid, Position::ORIGIN).unwrap()
    }

    #[test]
    fn starts_at_dock() {
        let house = corridor();
        assert!(house.is_at_docking_station());
        assert_eq!(house.agent_position(), Position::ORIGIN);
    }

    #[test]
    fn move_into_wall_is_rejected() {
        let mut house = corridor();
        house.move_agent(Direction::East).unwrap();
        let err = house.move_agent(Direction::East).unwrap_err();
        assert!(matches!(err, HouseError::InvalidMove(_)));
        // Position is unchanged after a rejected move.
        assert_eq!(house.agent_position(), Position::new(0, 1));
    }

    #[test]
    fn move_into_open_floor_updates_position_and_leaves_dock() {
        let mut house = corridor();
        house.move_agent(Direction::East).unwrap();
        assert_eq!(house.agent_position(), Position::new(0, 1));
        assert!(!house.is_at_docking_station());
    }

    #[test]
    fn dirt_sensor_reflects_current_cell() {
        let mut house = corridor();
        assert_eq!(house.dirt_level(), 0);
        house.move_agent(Direction::East).unwrap();
        assert_eq!(house.dirt_level(), 2);
    }

    #[test]
    fn clean_current_position_reduces_total_dirt_left() {
        let mut house = corridor();
        house.move_agent(Direction::East).unwrap();
        assert_eq!(house.total_dirt_left(), 2);
        house.clean_current_position();
        assert_eq!(house.total_dirt_left(), 1);
    }

    #[test]
    fn walls_sensor_reports_all_four_neighbors_relative_to_current_position() {
        let house = corridor();
        assert!(house.is_wall(Direction::North));
        assert!(house.is_wall(Direction::South));
        assert!(house.is_wall(Direction::West));
        assert!(!house.is_wall(Direction::East));
    }

    #[test]
    fn dock_on_a_wall_is_rejected_at_construction() {
        let grid = Grid::new(1, 1, vec![true], vec![0]);
        let err = House::new(grid, Position::ORIGIN).unwrap_err();
        assert!(matches!(err, HouseError::DockOutOfBounds(_)));
    }
}
