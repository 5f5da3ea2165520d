// FICHIER : core/src/evaluation/mod.rs

pub mod rollout;

pub use rollout::RolloutEvaluator;

use crate::genetics::types::PolicyVector;
use crate::utils::prelude::*;
use std::collections::BTreeSet;

/// D'où vient la politique qui agit à chaque pas de simulation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum EvaluationMode {
    /// À chaque pas, la politique est tirée uniformément dans la table
    /// des meilleures positions personnelles de l'essaim.
    #[default]
    SwarmMixture,
    /// Le candidat évalué joue seul.
    SingleCandidate,
}

impl std::str::FromStr for EvaluationMode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mixture" | "swarm_mixture" | "swarm-mixture" => Ok(Self::SwarmMixture),
            "single" | "single_candidate" | "single-candidate" => Ok(Self::SingleCandidate),
            other => Err(AppError::Config(format!("mode d'évaluation inconnu : {}", other))),
        }
    }
}

/// Candidat(s) soumis à l'évaluateur.
#[derive(Clone, Copy, Debug)]
pub enum CandidateSource<'a> {
    Single(&'a PolicyVector),
    Mixture(&'a [&'a PolicyVector]),
}

impl<'a> CandidateSource<'a> {
    /// Construit la source selon le mode ; `table` n'est lue qu'en mode mélange.
    pub fn for_mode(
        mode: EvaluationMode,
        candidate: &'a PolicyVector,
        table: &'a [&'a PolicyVector],
    ) -> Self {
        match mode {
            EvaluationMode::SingleCandidate => CandidateSource::Single(candidate),
            EvaluationMode::SwarmMixture => CandidateSource::Mixture(table),
        }
    }
}

/// Signal de fitness d'un candidat (ou d'un mélange de candidats).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    /// `total_steps / episodes` ; score principal, plus bas = meilleur.
    pub average_steps: f64,
    pub total_falls: u64,
    pub total_steps: u64,
    /// Pas écoulés à chaque arrivée. Vide si l'arrivée n'est jamais atteinte.
    pub steps_per_goal: Vec<u64>,
    pub total_reward: f64,
    /// Pas de chaque épisode ; leur somme vaut exactement `total_steps`.
    pub episode_steps: Vec<u64>,
    /// Union des trous visités par épisode.
    pub holes_hit: BTreeSet<usize>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluationConfig {
    /// Épisodes simulés par évaluation.
    pub episodes: usize,
    pub mode: EvaluationMode,
    /// Retiré de la récompense du pas à chaque chute.
    pub hole_penalty: f64,
    /// Ajouté à la récompense du pas à l'arrivée.
    pub goal_bonus: f64,
    /// Tentatives de lookup par pas avant de jouer une action au hasard.
    pub max_lookup_retries: usize,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            episodes: 1000,
            mode: EvaluationMode::SwarmMixture,
            hole_penalty: 1.0,
            goal_bonus: 20.0,
            max_lookup_retries: 64,
        }
    }
}

impl EvaluationConfig {
    pub fn validate(&self) -> Result<()> {
        if self.episodes == 0 {
            return Err(AppError::Config("episodes doit être > 0".to_string()));
        }
        if !self.hole_penalty.is_finite() || !self.goal_bonus.is_finite() {
            return Err(AppError::Config(
                "hole_penalty et goal_bonus doivent être finis".to_string(),
            ));
        }
        Ok(())
    }
}

/// Le lien entre les optimiseurs et la simulation.
pub trait Evaluator {
    fn evaluate(&mut self, source: CandidateSource<'_>, rng: &mut StdRng)
        -> Result<EvaluationResult>;
}
