// FICHIER : core/src/lib.rs

//! Recherche de politiques FrozenLake par essaim particulaire puis
//! algorithme génétique.

pub mod context;
pub mod convergence;
pub mod environment;
pub mod evaluation;
pub mod genetics;
pub mod pipeline;
pub mod swarm;
pub mod utils;

pub use pipeline::{run, run_with_evaluator, ProblemShape, RunOutcome, RunReport};
pub use utils::{AppError, OptimizerConfig, Result};
