use clap::Parser;

use astar_pathfinding::algorithms::common::{PathResult, SearchSignal};
use astar_pathfinding::config::Config;
use astar_pathfinding::grid::{Grid, Position, Role};
use astar_pathfinding::orchestrator;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::thread;
use std::time::Duration;

/// Ghost starting cells and the shared pacman goal.
const GHOSTS: [(usize, usize); 3] = [(5, 5), (5, 9), (5, 7)];
const PACMAN: (usize, usize) = (8, 8);

fn main() {
    let config = Config::parse();

    let mut grid = match Grid::new(config.rows, config.cols) {
        Ok(grid) => grid,
        Err(e) => {
            eprintln!("Failed to build grid: {}", e);
            std::process::exit(1);
        }
    };
    grid.apply_border_walls(&[0, config.rows - 1], &[0, config.cols - 1]);

    let agents: Vec<Position> = GHOSTS
        .iter()
        .map(|&(row, col)| Position::new(row, col))
        .collect();
    let goal = Position::new(PACMAN.0, PACMAN.1);

    if config.num_walls > 0 {
        scatter_walls(&mut grid, &agents, goal, &config);
    }

    println!("Starting pathfinding demo...");
    println!("Grid size: {}x{}", config.rows, config.cols);
    println!("Agents: {:?}, goal: {:?}", agents, goal);
    if config.no_visualization {
        println!("Visualization disabled - running in fast mode");
    } else {
        println!("Visualization enabled with {}ms delay", config.delay_ms);
    }
    println!();

    // The searches only read the grid; transitions are painted onto a
    // display copy so start/goal markers stay visible.
    let mut display = grid.clone();
    for &agent in &agents {
        if display.contains(agent) {
            display.set_role(agent, Role::Start);
        }
    }
    if display.contains(goal) {
        display.set_role(goal, Role::Goal);
    }

    let results = if config.no_visualization {
        orchestrator::run_all(&grid, &agents, goal, |_, _| SearchSignal::Continue)
    } else {
        let delay = Duration::from_millis(config.delay_ms);
        orchestrator::run_all(&grid, &agents, goal, |pos, role| {
            let shown = display.role_of(pos);
            if shown != Role::Start && shown != Role::Goal {
                display.set_role(pos, role);
            }
            clear_screen();
            println!("=== A* SEARCH ===");
            display.print_grid();
            thread::sleep(delay);
            SearchSignal::Continue
        })
    };

    if !config.no_visualization {
        clear_screen();
        println!("=== SEARCH COMPLETE ===");
        display.print_grid();
    }

    println!("=== RESULTS ===");
    for (agent, result) in agents.iter().zip(&results) {
        match result {
            PathResult::Success(path) => {
                println!(
                    "Agent {:?}: reached {:?} in {} moves",
                    agent,
                    goal,
                    path.len() - 1
                );
            }
            PathResult::NoPathExists => {
                println!("Agent {:?}: no path to {:?}", agent, goal);
            }
            PathResult::InvalidEndpoints => {
                println!("Agent {:?}: invalid start or goal", agent);
            }
            PathResult::Cancelled => {
                println!("Agent {:?}: search cancelled", agent);
            }
        }
    }
}

/// Place `num_walls` random walls, avoiding the agents and the goal.
fn scatter_walls(grid: &mut Grid, agents: &[Position], goal: Position, config: &Config) {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut placed = 0;
    let mut attempts = 0;
    while placed < config.num_walls && attempts < config.num_walls * 3 {
        let pos = Position::new(rng.gen_range(0..grid.rows), rng.gen_range(0..grid.cols));

        if pos != goal && !agents.contains(&pos) && grid.role_of(pos) == Role::Empty {
            grid.set_role(pos, Role::Wall);
            placed += 1;
        }
        attempts += 1;
    }
}

fn clear_screen() {
    print!("\x1B[2J\x1B[1;1H");
}
