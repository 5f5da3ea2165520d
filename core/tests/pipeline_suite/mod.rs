// FICHIER : core/tests/pipeline_suite/mod.rs

use lakeswarm::evaluation::{CandidateSource, EvaluationMode, EvaluationResult, Evaluator};
use lakeswarm::utils::prelude::*;
use lakeswarm::OptimizerConfig;

/// Configuration réduite pour les tests rapides.
pub fn small_config(n: usize, episodes: usize, mode: EvaluationMode) -> OptimizerConfig {
    let mut config = OptimizerConfig::default();
    config.set_population(n);
    config.evaluation.episodes = episodes;
    config.evaluation.mode = mode;
    config
}

/// Fitness bruitée sans simulation : somme des gènes + bruit tiré dans le flux du run.
pub struct NoisySumEvaluator {
    pub calls: usize,
}

impl Evaluator for NoisySumEvaluator {
    fn evaluate(
        &mut self,
        source: CandidateSource<'_>,
        rng: &mut StdRng,
    ) -> lakeswarm::Result<EvaluationResult> {
        self.calls += 1;
        let policy = match source {
            CandidateSource::Single(p) => p,
            CandidateSource::Mixture(table) => table[rng.random_range(0..table.len())],
        };
        let noise: f64 = rng.random_range(-0.5..0.5);
        Ok(EvaluationResult {
            average_steps: policy.genes.iter().sum::<f64>() + noise,
            total_steps: 1,
            episode_steps: vec![1],
            ..Default::default()
        })
    }
}
