//! Request and response payloads exchanged with the game front end.
//!
//! These handlers are transport agnostic: a serving layer decodes the route or body,
//! calls [`handle_generate`] or [`handle_solve`] and encodes the result as JSON.
//! Bad input never fails a solve request; it produces an empty path instead.

use rand::Rng;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::{
    generators::generate_maze,
    levels::Level,
    maze::{Cell, Coord, Grid, MazeError},
    solvers::{Path, solve_with},
};

#[derive(Debug, Error)]
pub enum WireError {
    #[error("malformed JSON payload: {0}")]
    Json(#[from] serde_json::Error),
    #[error("malformed maze grid: {0}")]
    Grid(#[from] MazeError),
}

#[derive(Debug, Clone, Serialize)]
pub struct GenerateResponse {
    pub maze: Grid,
    pub start: Coord,
    pub goal: Coord,
    pub level: u32,
    pub width: u16,
    pub height: u16,
}

/// Body of a solve request. The maze is kept as raw JSON so that a malformed grid
/// can be answered with an empty path rather than rejected.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SolveRequest {
    #[serde(default)]
    pub maze: Value,
    /// Kept as raw JSON too: only a string can select a solver, but whatever was
    /// sent is echoed back
    #[serde(default)]
    pub algorithm: Value,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SolveResponse {
    pub path: Path,
    /// The requested selector, echoed back unchanged (`null` when absent)
    pub algorithm: Value,
}

/// Generates a maze for `level_id`; unknown levels fall back to the default level.
pub fn handle_generate<R: Rng>(level_id: u32, rng: &mut R) -> GenerateResponse {
    let level = Level::resolve(level_id);
    let dims = level.dimensions();
    let generated = generate_maze(dims, rng);
    GenerateResponse {
        maze: generated.grid,
        start: generated.start,
        goal: generated.goal,
        level: level.id(),
        width: dims.width(),
        height: dims.height(),
    }
}

/// Decodes the wire grid: an array of equal-length rows of `0`, `1`, `"S"`, `"G"`.
pub fn decode_grid(value: &Value) -> Result<Grid, WireError> {
    let rows = Vec::<Vec<Cell>>::deserialize(value)?;
    Ok(Grid::from_rows(rows)?)
}

pub fn handle_solve(request: &SolveRequest) -> SolveResponse {
    let path = match &request.algorithm {
        Value::String(selector) => match decode_grid(&request.maze) {
            Ok(grid) => solve_with(&grid, selector),
            Err(err) => {
                tracing::warn!(%err, "rejecting maze in solve request");
                Path::default()
            }
        },
        Value::Null => {
            tracing::warn!("solve request without an algorithm");
            Path::default()
        }
        other => {
            tracing::warn!(algorithm = %other, "solve request with a non-string algorithm");
            Path::default()
        }
    };

    SolveResponse {
        path,
        algorithm: request.algorithm.clone(),
    }
}

/// Parses a JSON solve request body and solves it.
/// Fails only if the body is not a JSON object at all.
pub fn handle_solve_json(body: &str) -> Result<SolveResponse, WireError> {
    let request: SolveRequest = serde_json::from_str(body)?;
    Ok(handle_solve(&request))
}
