mod scoring {
    use vc_core::Step;

    use crate::scoring::score;
    use crate::statistics::Status;

    #[test]
    fn at_dock_normal_end() {
        let (status, value) = score(Some(Step::Finish), 12, 100, 0, true, false);
        assert_eq!(status, Status::Finished);
        assert_eq!(value, 12);
    }

    #[test]
    fn dead_when_battery_exhausted_away_from_dock() {
        let (status, value) = score(Some(Step::East), 50, 100, 2, false, true);
        assert_eq!(status, Status::Dead);
        assert_eq!(value, 100 + 2 * 300 + 2000);
    }

    #[test]
    fn lying_when_finish_reported_away_from_dock() {
        let (status, value) = score(Some(Step::Finish), 10, 100, 1, false, false);
        assert_eq!(status, Status::Dead);
        assert_eq!(value, 100 + 1 * 300 + 3000);
    }

    #[test]
    fn working_when_steps_ran_out_elsewhere_with_battery_left() {
        let (status, value) = score(Some(Step::East), 100, 100, 3, false, false);
        assert_eq!(status, Status::Working);
        assert_eq!(value, 100 + 3 * 300 + 1000);
    }

    #[test]
    fn working_when_at_dock_with_dirt_left_and_no_finish() {
        let (status, value) = score(Some(Step::Stay), 100, 100, 2, true, false);
        assert_eq!(status, Status::Working);
        assert_eq!(value, 100 + 2 * 300);
    }
}

/// End-to-end scenarios (§8) driven through the real `Simulator`.
mod scenarios {
    use vc_battery::Battery;
    use vc_core::Step;
    use vc_house::{Grid, House};
    use vc_planner::GreedyPlanner;

    use crate::simulator::Simulator;
    use crate::statistics::Status;

    /// 5x5, all open, dock at a corner, five separate dirty cells (dirt=1
    /// each) totalling 5, comfortably within a battery of 20 / 100 steps.
    #[test]
    fn sanity_scenario_cleans_everything_and_returns() {
        let rows = 5;
        let cols = 5;
        let walls = vec![false; rows * cols];
        let mut dirt = vec![0u32; rows * cols];
        for &(r, c) in &[(0, 1), (0, 2), (0, 3), (0, 4), (1, 0)] {
            dirt[r * cols + c] = 1;
        }
        let grid = Grid::new(rows, cols, walls, dirt);
        let house = House::new(grid, vc_core::Position::new(0, 0)).unwrap();
        let battery = Battery::new(20);

        let mut sim = Simulator::new(Box::new(GreedyPlanner::new()), house, battery, 100).unwrap();
        let stats = sim.run().unwrap();

        assert_eq!(stats.status, Status::Finished);
        assert_eq!(stats.dirt_left, 0);
        assert!(stats.is_at_docking_station);
        assert_ne!(*stats.step_history.first().unwrap(), Step::Stay);
    }

    /// A dirty cell at (0,0) is walled off from the rest of an otherwise
    /// open grid; the dock sits elsewhere and can never reach it.
    #[test]
    fn trapped_dirt_is_left_uncleaned() {
        let rows = 3;
        let cols = 3;
        let mut walls = vec![false; rows * cols];
        walls[1] = true;
        walls[cols] = true;
        let mut dirt = vec![0u32; rows * cols];
        dirt[0] = 3;
        let grid = Grid::new(rows, cols, walls, dirt);
        let house = House::new(grid, vc_core::Position::new(1, 1)).unwrap();
        let battery = Battery::new(20);

        let mut sim = Simulator::new(Box::new(GreedyPlanner::new()), house, battery, 100).unwrap();
        let stats = sim.run().unwrap();

        assert_eq!(stats.status, Status::Finished);
        assert!(stats.dirt_left > 0);
        assert!(stats.is_at_docking_station);
    }

    /// A lone dirty cell lies farther than `(MaxBattery-1)/2` from the dock.
    #[test]
    fn too_distant_dirt_is_left_uncleaned() {
        let cols = 6;
        let walls = vec![false; cols];
        let mut dirt = vec![0u32; cols];
        dirt[cols - 1] = 1;
        let grid = Grid::new(1, cols, walls, dirt);
        let house = House::new(grid, vc_core::Position::ORIGIN).unwrap();
        let battery = Battery::new(4);

        let mut sim = Simulator::new(Box::new(GreedyPlanner::new()), house, battery, 50).unwrap();
        let stats = sim.run().unwrap();

        assert_eq!(stats.status, Status::Finished);
        assert_eq!(stats.dirt_left, 1);
        assert!(stats.is_at_docking_station);
        assert!(stats.num_steps_taken < 50);
    }

    /// Dock surrounded by walls; dirt elsewhere is unreachable from the start.
    #[test]
    fn immediate_finish_scores_total_dirt_times_dirt_factor() {
        let cols = 3;
        let walls = vec![true, false, true];
        let mut dirt = vec![0u32; cols];
        dirt[2] = 5;
        let grid = Grid::new(1, cols, walls, dirt);
        let house = House::new(grid, vc_core::Position::new(0, 1)).unwrap();
        let battery = Battery::new(20);

        let mut sim = Simulator::new(Box::new(GreedyPlanner::new()), house, battery, 100).unwrap();
        let stats = sim.run().unwrap();

        assert_eq!(stats.status, Status::Finished);
        assert!(stats.is_at_docking_station);
        assert_eq!(stats.num_steps_taken, 0);
        assert_eq!(*stats.step_history.first().unwrap(), Step::Finish);
        assert_eq!(stats.score, 5 * 300);
    }
}
