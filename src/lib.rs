pub mod game;
pub mod generators;
pub mod levels;
pub mod logging;
pub mod maze;
pub mod solvers;
pub mod wire;
