// FICHIER : core/tests/pipeline_suite/invariants_test.rs

use crate::common::{small_config, NoisySumEvaluator};
use lakeswarm::evaluation::EvaluationMode;
use lakeswarm::{run_with_evaluator, ProblemShape};

#[test]
fn test_global_best_never_regresses() {
    for seed in [1, 2, 3, 42] {
        let mut config = small_config(12, 1, EvaluationMode::SwarmMixture);
        config.seed = seed;
        config.swarm.sweeps = 3;
        config.genetic.generations = 2;

        let mut eval = NoisySumEvaluator { calls: 0 };
        let outcome = run_with_evaluator(&config, &mut eval, ProblemShape::row(8, 4)).unwrap();
        let report = &outcome.report;

        // graine + 3 passes + 12 puis 24 individus
        assert_eq!(eval.calls, 1 + 36 + 12 + 24);

        let mut best = report.initial_score;
        for record in &report.convergence.swarm.records {
            best = best.min(record.best_score);
        }
        assert_eq!(report.score_after_swarm, best);
        assert!(report.global_best.score <= report.score_after_swarm);
    }
}

#[test]
fn test_genetic_phase_yields_twice_n() {
    let config = small_config(7, 1, EvaluationMode::SingleCandidate);
    let mut eval = NoisySumEvaluator { calls: 0 };

    let outcome = run_with_evaluator(&config, &mut eval, ProblemShape::row(4, 4)).unwrap();
    assert_eq!(outcome.final_population.len(), 14);
    assert!(outcome.final_population.iter().all(|p| p.len() == 4));
}

#[test]
fn test_degenerate_dimension_rejected() {
    let config = small_config(4, 1, EvaluationMode::SingleCandidate);
    let mut eval = NoisySumEvaluator { calls: 0 };
    assert!(run_with_evaluator(&config, &mut eval, ProblemShape::row(0, 4)).is_err());
    assert!(run_with_evaluator(&config, &mut eval, ProblemShape::row(4, 0)).is_err());
}
