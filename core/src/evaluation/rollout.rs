// FICHIER : core/src/evaluation/rollout.rs

use super::{CandidateSource, EvaluationConfig, EvaluationResult, Evaluator};
use crate::environment::{CellType, Environment};
use crate::genetics::types::PolicyVector;
use crate::utils::prelude::*;
use std::collections::BTreeSet;

/// Évaluateur par rollouts : joue `episodes` épisodes stochastiques et mesure
/// le nombre moyen de pas. Fitness bruitée par construction.
pub struct RolloutEvaluator<E: Environment> {
    env: E,
    config: EvaluationConfig,
}

impl<E: Environment> RolloutEvaluator<E> {
    pub fn new(env: E, config: EvaluationConfig) -> Result<Self> {
        config.validate()?;
        if env.state_count() == 0 || env.action_count() == 0 {
            return Err(AppError::malformed("environnement sans état ou sans action"));
        }
        Ok(Self { env, config })
    }

    pub fn environment(&self) -> &E {
        &self.env
    }

    pub fn config(&self) -> &EvaluationConfig {
        &self.config
    }

    fn check_source(&self, source: &CandidateSource<'_>) -> Result<()> {
        let dimension = self.env.state_count();
        match source {
            CandidateSource::Single(policy) => policy.ensure_dimension(dimension),
            CandidateSource::Mixture(table) => {
                if table.is_empty() {
                    return Err(AppError::malformed("table de meilleures positions vide"));
                }
                table.iter().try_for_each(|p| p.ensure_dimension(dimension))
            }
        }
    }

    /// Choisit la politique agissante puis son action dans `state`.
    /// Un lookup raté est retenté avec une nouvelle politique ; au-delà de la
    /// limite, une action valide est tirée au hasard.
    fn choose_action(
        &self,
        source: &CandidateSource<'_>,
        state: usize,
        rng: &mut StdRng,
    ) -> usize {
        let action_count = self.env.action_count();

        for _ in 0..=self.config.max_lookup_retries {
            let acting: &PolicyVector = match *source {
                CandidateSource::Single(policy) => policy,
                CandidateSource::Mixture(table) => table[rng.random_range(0..table.len())],
            };
            match acting.action_for(state, action_count) {
                Ok(action) => return action,
                Err(failure) => {
                    trace!(state = failure.state, "lookup raté, nouveau tirage");
                }
            }
        }

        warn!(
            state,
            retries = self.config.max_lookup_retries,
            "lookups épuisés, action tirée au hasard"
        );
        rng.random_range(0..action_count)
    }

    fn run_episode(
        &mut self,
        source: &CandidateSource<'_>,
        rng: &mut StdRng,
        result: &mut EvaluationResult,
    ) -> Result<()> {
        let goal = self.env.goal_state();
        let mut state = self.env.reset(rng)?;
        let mut episode_steps = 0u64;
        let mut episode_reward = 0.0;
        let mut holes = BTreeSet::new();
        let mut done = false;

        while !done {
            let action = self.choose_action(source, state, rng);
            let transition = self.env.step(action, rng)?;
            let next_state = transition.next_state;
            let mut reward = transition.reward;
            done = transition.done;

            // Chaque chute compte, même dans un trou déjà visité
            if self.env.cell_type(next_state) == CellType::Hole {
                reward -= self.config.hole_penalty;
                result.total_falls += 1;
                if holes.insert(next_state) {
                    trace!(hole = next_state, "nouveau trou visité");
                }
            }

            if next_state == goal {
                reward += self.config.goal_bonus;
                done = true;
                result.steps_per_goal.push(self.env.elapsed_steps() as u64);
            }

            episode_reward += reward;
            state = next_state;
            episode_steps += 1;
        }

        result.total_reward += episode_reward;
        result.total_steps += episode_steps;
        result.episode_steps.push(episode_steps);
        result.holes_hit.extend(holes);
        Ok(())
    }
}

impl<E: Environment> Evaluator for RolloutEvaluator<E> {
    fn evaluate(
        &mut self,
        source: CandidateSource<'_>,
        rng: &mut StdRng,
    ) -> Result<EvaluationResult> {
        self.check_source(&source)?;

        let mut result = EvaluationResult {
            episode_steps: Vec::with_capacity(self.config.episodes),
            ..Default::default()
        };
        for _ in 0..self.config.episodes {
            self.run_episode(&source, rng, &mut result)?;
        }
        result.average_steps = result.total_steps as f64 / self.config.episodes as f64;

        debug!(
            average_steps = result.average_steps,
            falls = result.total_falls,
            goals = result.steps_per_goal.len(),
            "évaluation terminée"
        );
        Ok(result)
    }
}
