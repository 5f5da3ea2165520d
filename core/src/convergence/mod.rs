// FICHIER : core/src/convergence/mod.rs

//! Suivi de convergence : pure comptabilité, ne pilote jamais le contrôle.

use crate::evaluation::EvaluationResult;
use crate::genetics::types::PolicyVector;
use crate::utils::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Swarm,
    Genetic,
}

/// Une évaluation enregistrée : score obtenu et position évaluée.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IterationRecord {
    pub iteration: usize,
    pub best_score: f64,
    pub best_position: PolicyVector,
}

/// Journal d'un optimiseur. Ajout seul pendant le run.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PhaseLog {
    pub records: Vec<IterationRecord>,
    pub total_falls: u64,
    pub total_steps: u64,
    /// Tous les échantillons pas-jusqu'à-l'arrivée, concaténés.
    pub steps_to_goal: Vec<u64>,
}

impl PhaseLog {
    /// Enregistre une évaluation et cumule ses compteurs. Retourne l'index d'itération.
    pub fn record(&mut self, position: &PolicyVector, result: &EvaluationResult) -> usize {
        let iteration = self.records.len();
        self.records.push(IterationRecord {
            iteration,
            best_score: result.average_steps,
            best_position: position.clone(),
        });
        self.total_falls += result.total_falls;
        self.total_steps += result.total_steps;
        self.steps_to_goal.extend_from_slice(&result.steps_per_goal);
        iteration
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn scores(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.best_score).collect()
    }

    /// Meilleure itération (premier minimum ; les NaN sont ignorés).
    pub fn best(&self) -> Option<&IterationRecord> {
        self.records
            .iter()
            .filter(|r| !r.best_score.is_nan())
            .fold(None, |best: Option<&IterationRecord>, r| match best {
                Some(b) if b.best_score <= r.best_score => Some(b),
                _ => Some(r),
            })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ConvergenceLog {
    pub swarm: PhaseLog,
    pub genetic: PhaseLog,
}
