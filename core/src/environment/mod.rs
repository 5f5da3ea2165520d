// FICHIER : core/src/environment/mod.rs

//! Adaptateur d'environnement consommé par l'évaluateur.
//!
//! L'optimiseur ne connaît l'environnement qu'à travers [`Environment`].
//! Le générateur pseudo-aléatoire du run est passé à chaque appel : le bruit
//! de glissade est tiré dans le même flux que les tirages des optimiseurs.

pub mod frozen_lake;

pub use frozen_lake::FrozenLake;

use crate::utils::prelude::*;

/// Nature d'une case de la grille, utilisée pour le façonnage de récompense.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellType {
    Start,
    Frozen,
    Hole,
    Goal,
}

/// Résultat d'un pas de simulation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    pub next_state: usize,
    pub reward: f64,
    pub done: bool,
}

pub trait Environment {
    /// Nombre d'états `D` (une case = un état).
    fn state_count(&self) -> usize;

    /// Taille `A` de l'espace d'actions.
    fn action_count(&self) -> usize;

    /// Index de la case d'arrivée.
    fn goal_state(&self) -> usize;

    /// Remet l'épisode à zéro et retourne l'état initial.
    fn reset(&mut self, rng: &mut StdRng) -> Result<usize>;

    /// Avance d'un pas. `action` doit être dans `[0, A-1]`.
    fn step(&mut self, action: usize, rng: &mut StdRng) -> Result<Transition>;

    fn cell_type(&self, state: usize) -> CellType;

    /// Pas effectués depuis le dernier `reset`.
    fn elapsed_steps(&self) -> usize;

    /// Largeur de la grille, pour l'affichage. Une seule rangée par défaut.
    fn columns(&self) -> usize {
        self.state_count()
    }
}

/// Paramètres de la grille simulée.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvironmentConfig {
    pub layout: Vec<String>,
    pub slippery: bool,
    /// Pas maximum par épisode (> 0), au-delà l'épisode est tronqué.
    pub max_episode_steps: usize,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            layout: frozen_lake::CLASSIC_4X4.iter().map(|s| s.to_string()).collect(),
            slippery: true,
            max_episode_steps: 100,
        }
    }
}

impl EnvironmentConfig {
    pub fn build(&self) -> Result<FrozenLake> {
        FrozenLake::from_layout(&self.layout, self.slippery, self.max_episode_steps)
    }
}
