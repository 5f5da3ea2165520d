// FICHIER : core/src/genetics/mod.rs

//! Optimiseur génétique : sélection par troncature, croisement en un point,
//! mutation par réinitialisation uniforme.

pub mod engine;
pub mod operators;
pub mod types;

pub use engine::{GeneticConfig, GeneticEngine, GeneticOutcome};
pub use operators::selection::{SelectionStrategy, TruncationSelection};
pub use types::{ActionBounds, GlobalBest, PolicyVector, Scored};
