// FICHIER : core/tests/pipeline_suite/end_to_end_test.rs

use lakeswarm::evaluation::EvaluationMode;
use lakeswarm::{run, OptimizerConfig};

#[test]
fn test_classic_lake_full_run_is_reproducible() {
    let config = OptimizerConfig::default();
    assert_eq!(config.swarm.particles, 100);
    assert_eq!(config.evaluation.episodes, 1000);

    let first = run(&config).expect("run 1");
    let second = run(&config).expect("run 2");

    let report = &first.report;
    assert_eq!(report.swarm.evaluations, 100);
    assert_eq!(report.genetic.evaluations, 100);
    assert_eq!(first.final_population.len(), 200);
    assert_eq!(report.greedy_policy.len(), 16);
    assert_eq!(report.grid_columns, 4);
    assert!(report.greedy_policy.iter().all(|&a| a < 4));

    // Les deux phases atteignent l'arrivée au moins une fois
    assert!(!report.convergence.swarm.steps_to_goal.is_empty());
    assert!(!report.convergence.genetic.steps_to_goal.is_empty());
    assert!(report.swarm.total_falls > 0);

    assert!(report.score_after_swarm <= report.initial_score);
    assert!(report.global_best.score <= report.score_after_swarm);
    assert!(report.global_best.score > 0.0 && report.global_best.score <= 100.0);

    // Même graine : mêmes scores, mêmes journaux, même population
    assert_eq!(report.global_best, second.report.global_best);
    assert_eq!(report.convergence, second.report.convergence);
    assert_eq!(first.final_population, second.final_population);
}

#[test]
fn test_single_candidate_mode_on_small_lake() {
    let mut config = crate::common::small_config(8, 50, EvaluationMode::SingleCandidate);
    config.seed = 3;

    let outcome = run(&config).unwrap();
    assert_eq!(outcome.report.evaluation_mode, EvaluationMode::SingleCandidate);
    assert_eq!(outcome.final_population.len(), 16);
    assert!(outcome.report.global_best.score <= outcome.report.score_after_swarm);
}
