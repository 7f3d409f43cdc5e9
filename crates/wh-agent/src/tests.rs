use std::collections::VecDeque;

use wh_core::{AgentId, AgentRng, Direction, GridPos};
use wh_grid::{CellTag, Grid};

use crate::{Agent, Motion, TaskPhase};

fn open_grid(rows: usize, cols: usize) -> Grid {
    Grid::new(rows, cols)
}

fn spawn(grid: &mut Grid, x: i32, y: i32) -> Agent {
    Agent::new(AgentId(0), GridPos::new(x, y), grid)
}

#[cfg(test)]
mod stepping {
    use super::*;

    #[test]
    fn step_moves_both_occupancy_tags() {
        let mut grid = open_grid(3, 3);
        let mut agent = spawn(&mut grid, 1, 1);
        assert_eq!(grid.tag(GridPos::new(1, 1)), CellTag::Agent);

        assert!(agent.step(&mut grid, Direction::Right, 100));
        assert_eq!(agent.pos, GridPos::new(2, 1));
        assert_eq!(grid.tag(GridPos::new(1, 1)), CellTag::Empty);
        assert_eq!(grid.tag(GridPos::new(2, 1)), CellTag::Agent);
        assert_eq!(
            agent.motion,
            Motion { from: GridPos::new(1, 1), to: GridPos::new(2, 1), started_ms: 100 }
        );
    }

    #[test]
    fn blocked_step_changes_nothing() {
        let mut grid = open_grid(3, 3);
        grid.set_tag(GridPos::new(2, 1), CellTag::Obstacle);
        let mut agent = spawn(&mut grid, 1, 1);
        let before = agent.motion;

        assert!(!agent.step(&mut grid, Direction::Right, 100));
        assert_eq!(agent.pos, GridPos::new(1, 1));
        assert_eq!(grid.tag(GridPos::new(1, 1)), CellTag::Agent);
        assert_eq!(grid.tag(GridPos::new(2, 1)), CellTag::Obstacle);
        assert_eq!(agent.motion, before);
    }

    #[test]
    fn step_off_the_edge_fails() {
        let mut grid = open_grid(2, 2);
        let mut agent = spawn(&mut grid, 0, 0);
        assert!(!agent.step(&mut grid, Direction::Up, 0));
        assert!(!agent.step(&mut grid, Direction::Left, 0));
        assert_eq!(agent.pos, GridPos::new(0, 0));
    }
}

#[cfg(test)]
mod planning {
    use super::*;

    #[test]
    fn plan_route_loads_shortest_path() {
        let mut grid = open_grid(3, 3);
        let mut agent = spawn(&mut grid, 0, 0);
        assert!(agent.plan_route(&grid, GridPos::new(2, 2)));
        assert_eq!(agent.path.len(), 4);
        assert!(!agent.route_complete());
    }

    #[test]
    fn plan_route_to_current_cell_is_complete() {
        let mut grid = open_grid(3, 3);
        let mut agent = spawn(&mut grid, 1, 1);
        assert!(agent.plan_route(&grid, GridPos::new(1, 1)));
        assert!(agent.route_complete());
    }

    #[test]
    fn plan_route_reports_unreachable() {
        let mut grid = open_grid(3, 3);
        for y in 0..3 {
            grid.set_tag(GridPos::new(1, y), CellTag::Obstacle);
        }
        let mut agent = spawn(&mut grid, 0, 1);
        assert!(!agent.plan_route(&grid, GridPos::new(2, 1)));
        assert!(agent.path.is_empty());
    }

    #[test]
    fn replanning_clears_avoidance_state() {
        let mut grid = open_grid(3, 3);
        let mut agent = spawn(&mut grid, 0, 0);
        agent.avoiding = true;
        agent.recovery.push(Direction::Left);
        agent.plan_route(&grid, GridPos::new(2, 0));
        assert!(!agent.avoiding);
        assert!(agent.recovery.is_empty());
    }
}

#[cfg(test)]
mod avoidance {
    use super::*;

    /// A blocked front move triggers a side-step whose inverse lands on the
    /// recovery stack.
    #[test]
    fn blocked_move_detours_and_records_inverse() {
        let mut grid = open_grid(3, 3);
        let mut agent = spawn(&mut grid, 0, 1);
        let mut rng = AgentRng::new(7, agent.id);

        assert!(agent.plan_route(&grid, GridPos::new(2, 1)));
        // Another agent parks on the next cell after planning.
        grid.set_tag(GridPos::new(1, 1), CellTag::Agent);

        let origin = agent.pos;
        agent.perform_move(&mut grid, &mut rng, 0);

        assert!(agent.avoiding);
        assert_eq!(agent.path.front(), Some(&Direction::Right));
        // From (0,1) only Up and Down are free, so the detour must have moved.
        assert_ne!(agent.pos, origin);
        assert_eq!(agent.recovery.len(), 1);
        assert_eq!(agent.pos.step(agent.recovery[0]), origin);
    }

    #[test]
    fn boxed_in_agent_stays_put_while_avoiding() {
        let mut grid = open_grid(3, 3);
        let mut agent = spawn(&mut grid, 0, 0);
        let mut rng = AgentRng::new(7, agent.id);

        assert!(agent.plan_route(&grid, GridPos::new(2, 0)));
        grid.set_tag(GridPos::new(1, 0), CellTag::Agent);
        grid.set_tag(GridPos::new(0, 1), CellTag::Agent);

        agent.perform_move(&mut grid, &mut rng, 0);
        assert!(agent.avoiding);
        assert_eq!(agent.pos, GridPos::new(0, 0));
        assert!(agent.recovery.is_empty());
    }

    /// Full cycle: block, detour, obstacle clears, unwind, resume, arrive.
    #[test]
    fn detour_unwinds_and_resumes_route() {
        let mut grid = open_grid(3, 3);
        let mut agent = spawn(&mut grid, 0, 1);
        agent.phase = TaskPhase::ToPickup;
        let mut rng = AgentRng::new(11, agent.id);

        assert!(agent.plan_route(&grid, GridPos::new(2, 1)));
        grid.set_tag(GridPos::new(1, 1), CellTag::Agent);
        agent.perform_move(&mut grid, &mut rng, 0);
        assert!(agent.avoiding);

        // The other agent moves on.
        grid.set_tag(GridPos::new(1, 1), CellTag::Empty);

        let mut rounds = 0;
        while !agent.route_complete() {
            agent.perform_move(&mut grid, &mut rng, rounds);
            rounds += 1;
            assert!(rounds <= 10, "state machine failed to converge");
        }
        assert_eq!(agent.pos, GridPos::new(2, 1));
        assert_eq!(grid.tag(GridPos::new(2, 1)), CellTag::Agent);
        assert_eq!(grid.count_tag(CellTag::Agent), 1);
    }

    #[test]
    fn drained_path_unwinds_recovery_unconditionally() {
        let mut grid = open_grid(3, 3);
        let mut agent = spawn(&mut grid, 1, 1);
        agent.phase = TaskPhase::ToDropoff;
        let mut rng = AgentRng::new(3, agent.id);

        agent.avoiding = true;
        agent.path = VecDeque::new();
        agent.recovery.push(Direction::Up); // detour went Down earlier

        agent.perform_move(&mut grid, &mut rng, 0);
        assert_eq!(agent.pos, GridPos::new(1, 0));
        assert!(agent.recovery.is_empty());
        assert!(agent.avoiding);

        agent.perform_move(&mut grid, &mut rng, 1);
        assert!(!agent.avoiding);
        assert!(agent.route_complete());
    }
}

#[cfg(test)]
mod idling {
    use super::*;

    #[test]
    fn idle_agent_wanders_one_cell() {
        let mut grid = open_grid(3, 3);
        let mut agent = spawn(&mut grid, 1, 1);
        let mut rng = AgentRng::new(5, agent.id);

        agent.perform_move(&mut grid, &mut rng, 0);
        assert_eq!(agent.pos.manhattan(GridPos::new(1, 1)), 1);
        assert_eq!(grid.count_tag(CellTag::Agent), 1);
    }

    #[test]
    fn tasked_agent_without_a_route_stays_put() {
        let mut grid = open_grid(3, 3);
        let mut agent = spawn(&mut grid, 1, 1);
        agent.phase = TaskPhase::ToPickup;
        let mut rng = AgentRng::new(5, agent.id);

        agent.perform_move(&mut grid, &mut rng, 0);
        assert_eq!(agent.pos, GridPos::new(1, 1));
    }

    #[test]
    fn fully_boxed_in_idle_agent_does_not_move() {
        let mut grid = open_grid(1, 1);
        let mut agent = spawn(&mut grid, 0, 0);
        let mut rng = AgentRng::new(5, agent.id);
        agent.perform_move(&mut grid, &mut rng, 0);
        assert_eq!(agent.pos, GridPos::new(0, 0));
    }
}

#[cfg(test)]
mod motion {
    use super::*;

    #[test]
    fn stationary_motion_is_always_settled() {
        let m = Motion::stationary(GridPos::new(2, 2));
        assert!(m.settled(0, 250));
        assert!((m.progress(0, 250) - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn motion_settles_after_the_animation_window() {
        let m = Motion { from: GridPos::new(0, 0), to: GridPos::new(1, 0), started_ms: 1_000 };
        assert!(!m.settled(1_100, 250));
        assert!(m.settled(1_250, 250));
        assert!(m.progress(1_125, 250) > 0.4 && m.progress(1_125, 250) < 0.6);
    }

    #[test]
    fn zero_animation_never_blocks() {
        let m = Motion { from: GridPos::new(0, 0), to: GridPos::new(1, 0), started_ms: 1_000 };
        assert!(m.settled(1_000, 0));
        assert!((m.progress(1_000, 0) - 1.0).abs() < f32::EPSILON);
    }
}
