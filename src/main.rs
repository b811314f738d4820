use std::{
    io::{Read, Stdout, Write},
    path::PathBuf,
};

use clap::{Parser, Subcommand};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    queue,
    style::{Attribute, Color, Print, PrintStyledContent, Stylize},
    terminal::{self, ClearType},
};
use serde_json::Value;
use thiserror::Error;

use mazeforge::{
    game::GameState,
    generators::{generate_maze, get_rng},
    levels::{DEFAULT_LEVEL, Level},
    logging,
    maze::{Direction, Grid, render::GridView},
    solvers::{Path, Solver, solve_maze},
    wire::{self, SolveRequest, WireError},
};

/// Generate perfect mazes and solve them with BFS or DFS
#[derive(Parser, Debug)]
#[command(version, about, name = "mazeforge")]
struct Args {
    /// Write logs to a file in this directory instead of stderr
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a maze for a level (1-10, unknown levels use level 3)
    Generate {
        #[arg(short, long, default_value_t = DEFAULT_LEVEL)]
        level: u32,
        /// Random seed for a reproducible maze
        #[arg(long)]
        seed: Option<u64>,
        /// Print the generate payload as JSON instead of drawing the maze
        #[arg(long)]
        json: bool,
    },
    /// Solve a maze read as JSON (`{"maze": [[...]]}`) from a file or stdin
    Solve {
        /// `bfs` or `dfs`
        #[arg(short, long, default_value = "bfs")]
        algorithm: String,
        /// Input file, stdin when omitted
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Print the solve payload as JSON instead of drawing the route
        #[arg(long)]
        json: bool,
    },
    /// Generate a level and compare the BFS and DFS routes
    Run {
        #[arg(short, long, default_value_t = DEFAULT_LEVEL)]
        level: u32,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Walk a generated level to the goal with the arrow keys (Esc to quit)
    Play {
        #[arg(short, long, default_value_t = DEFAULT_LEVEL)]
        level: u32,
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Wire(#[from] WireError),
    #[error("cannot encode output: {0}")]
    Json(#[from] serde_json::Error),
}

fn route_color(solver: Solver) -> Color {
    match solver {
        Solver::Bfs => Color::Yellow,
        Solver::Dfs => Color::Cyan,
    }
}

fn print_route(grid: &Grid, solver: Solver, path: &Path) {
    print!(
        "{}",
        GridView::new(grid).with_route(path.coords(), route_color(solver))
    );
    if path.is_empty() {
        println!("{}", format!("No path found by {}.", solver).with(Color::Red));
    } else {
        println!(
            "{}",
            format!("{} found a path of length {}.", solver, path.moves())
                .with(route_color(solver))
                .attribute(Attribute::Bold)
        );
    }
}

fn generate(level: u32, seed: Option<u64>, json: bool) -> Result<(), CliError> {
    let response = wire::handle_generate(level, &mut get_rng(seed));
    tracing::info!(
        level = response.level,
        width = response.width,
        height = response.height,
        "generated maze"
    );
    if json {
        println!("{}", serde_json::to_string(&response)?);
    } else {
        println!("Level {} ({}x{})", response.level, response.width, response.height);
        print!("{}", GridView::new(&response.maze));
    }
    Ok(())
}

fn solve(algorithm: String, input: Option<PathBuf>, json: bool) -> Result<(), CliError> {
    let body = match input {
        Some(file) => std::fs::read_to_string(file)?,
        None => {
            let mut body = String::new();
            std::io::stdin().read_to_string(&mut body)?;
            body
        }
    };
    let mut request: SolveRequest = serde_json::from_str(&body).map_err(WireError::from)?;
    let selected = algorithm.parse::<Solver>();
    request.algorithm = Value::String(algorithm);
    let response = wire::handle_solve(&request);

    if json {
        println!("{}", serde_json::to_string(&response)?);
        return Ok(());
    }

    let grid = match wire::decode_grid(&request.maze) {
        Ok(grid) => grid,
        Err(err) => {
            println!("{}", format!("No path found: {err}.").with(Color::Red));
            return Ok(());
        }
    };
    match selected {
        Ok(solver) => print_route(&grid, solver, &response.path),
        Err(_) => {
            print!("{}", GridView::new(&grid));
            println!("{}", "Unknown algorithm, expected `bfs` or `dfs`.".with(Color::Red));
        }
    }
    Ok(())
}

fn run(level: u32, seed: Option<u64>) {
    let response = wire::handle_generate(level, &mut get_rng(seed));
    println!("Level {} ({}x{})", response.level, response.width, response.height);
    for solver in Solver::ALL {
        let path = solve_maze(&response.maze, solver);
        tracing::info!(solver = solver.selector(), moves = path.moves(), "solved maze");
        print_route(&response.maze, solver, &path);
        println!();
    }
}

/// Enable raw mode and switch to a cleared alternate screen.
fn setup_terminal(stdout: &mut Stdout) -> std::io::Result<()> {
    terminal::enable_raw_mode()?;
    queue!(
        stdout,
        terminal::EnterAlternateScreen,
        terminal::Clear(ClearType::All),
        cursor::Hide,
        cursor::MoveTo(0, 0)
    )?;
    stdout.flush()
}

fn restore_terminal(stdout: &mut Stdout) -> std::io::Result<()> {
    queue!(stdout, terminal::LeaveAlternateScreen, cursor::Show)?;
    stdout.flush()?;
    terminal::disable_raw_mode()
}

/// Redraw the maze with the player on it. Raw mode needs explicit line moves.
fn draw_game(stdout: &mut Stdout, game: &GameState, status: &str) -> std::io::Result<()> {
    queue!(stdout, cursor::MoveTo(0, 0), terminal::Clear(ClearType::All))?;
    let view = GridView::new(game.grid()).with_player(game.player()).to_string();
    for line in view.lines() {
        queue!(stdout, Print(line), cursor::MoveToNextLine(1))?;
    }
    queue!(stdout, PrintStyledContent(status.with(Color::Cyan)))?;
    stdout.flush()
}

fn key_direction(code: KeyCode) -> Option<Direction> {
    match code {
        KeyCode::Left => Some(Direction::Left),
        KeyCode::Right => Some(Direction::Right),
        KeyCode::Up => Some(Direction::Up),
        KeyCode::Down => Some(Direction::Down),
        _ => None,
    }
}

/// Input loop; returns whether the goal was reached.
fn play_loop(stdout: &mut Stdout, game: &mut GameState) -> std::io::Result<bool> {
    draw_game(stdout, game, "Arrow keys to move, Esc to quit")?;
    loop {
        let Event::Key(KeyEvent { code, kind, .. }) = event::read()? else {
            continue;
        };
        if kind != KeyEventKind::Press {
            continue;
        }
        if code == KeyCode::Esc {
            return Ok(false);
        }
        let Some(direction) = key_direction(code) else {
            continue;
        };
        if game.try_move(direction).is_none() {
            continue;
        }
        if game.goal_reached() {
            return Ok(true);
        }
        draw_game(stdout, game, &format!("Moves: {}", game.moves()))?;
    }
}

fn play(level: u32, seed: Option<u64>) -> Result<(), CliError> {
    let level = Level::resolve(level);
    let maze = generate_maze(level.dimensions(), &mut get_rng(seed));
    let mut game = GameState::from_generated(maze);
    tracing::info!(level = level.id(), "starting game");

    let mut stdout = std::io::stdout();
    setup_terminal(&mut stdout)?;
    let result = play_loop(&mut stdout, &mut game);
    restore_terminal(&mut stdout)?;

    if result? {
        tracing::info!(level = level.id(), moves = game.moves(), "goal reached");
        println!(
            "{}",
            format!("You win! Level {} solved in {} moves.", level.id(), game.moves())
                .with(Color::Green)
                .attribute(Attribute::Bold)
        );
    } else {
        println!("{}", "Game canceled.".with(Color::Yellow));
    }
    Ok(())
}

fn main() -> Result<(), CliError> {
    let args = Args::parse();
    let _guard = logging::init(args.log_dir.as_deref());

    match args.command {
        Command::Generate { level, seed, json } => generate(level, seed, json)?,
        Command::Solve {
            algorithm,
            input,
            json,
        } => solve(algorithm, input, json)?,
        Command::Run { level, seed } => run(level, seed),
        Command::Play { level, seed } => play(level, seed)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_keys_map_to_directions() {
        assert_eq!(key_direction(KeyCode::Left), Some(Direction::Left));
        assert_eq!(key_direction(KeyCode::Right), Some(Direction::Right));
        assert_eq!(key_direction(KeyCode::Up), Some(Direction::Up));
        assert_eq!(key_direction(KeyCode::Down), Some(Direction::Down));
        assert_eq!(key_direction(KeyCode::Char('w')), None);
        assert_eq!(key_direction(KeyCode::Esc), None);
    }
}
