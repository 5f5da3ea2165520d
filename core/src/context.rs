// FICHIER : core/src/context.rs

use crate::convergence::{ConvergenceLog, Phase};
use crate::genetics::types::{GlobalBest, PolicyVector};
use crate::utils::prelude::*;

/// État mutable d'un run, passé explicitement à chaque phase.
/// Un seul propriétaire, muté dans l'ordre du programme : PSO puis AG.
pub struct OptimizationContext {
    pub global_best: GlobalBest,
    pub log: ConvergenceLog,
    /// Unique flux pseudo-aléatoire du run, partagé avec l'environnement.
    pub rng: StdRng,
}

impl OptimizationContext {
    pub fn new(global_best: GlobalBest, rng: StdRng) -> Self {
        Self {
            global_best,
            log: ConvergenceLog::default(),
            rng,
        }
    }

    /// Applique le cliquet du meilleur global pour la phase courante.
    pub fn offer(&mut self, phase: Phase, candidate: &PolicyVector, score: f64) -> bool {
        let previous = self.global_best.score;
        let improved = self.global_best.offer(candidate, score);
        if improved {
            info!(?phase, previous, score, "nouveau meilleur global");
        }
        improved
    }
}
