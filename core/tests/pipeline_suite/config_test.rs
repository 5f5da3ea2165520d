// FICHIER : core/tests/pipeline_suite/config_test.rs

use lakeswarm::evaluation::EvaluationMode;
use lakeswarm::{run, AppError, OptimizerConfig};
use serial_test::serial;
use std::io::Write;

#[test]
#[serial]
fn test_run_from_json_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{
            "seed": 11,
            "environment": {{ "layout": ["SFF", "FHF", "FFG"], "slippery": false }},
            "evaluation": {{ "episodes": 5, "mode": "single_candidate" }},
            "swarm": {{ "particles": 6 }},
            "genetic": {{ "population_size": 6 }}
        }}"#
    )
    .unwrap();

    let config = OptimizerConfig::load(Some(file.path())).unwrap();
    assert_eq!(config.evaluation.mode, EvaluationMode::SingleCandidate);

    let outcome = run(&config).unwrap();
    assert_eq!(outcome.report.seed, 11);
    assert_eq!(outcome.report.greedy_policy.len(), 9);
    assert_eq!(outcome.report.grid_columns, 3);
    assert_eq!(outcome.final_population.len(), 12);
}

#[test]
#[serial]
fn test_broken_layout_is_a_config_error() {
    let mut config = OptimizerConfig::default();
    config.environment.layout = vec!["SFF".into(), "FF".into()];
    assert!(matches!(run(&config), Err(AppError::Config(_))));
}

#[test]
#[serial]
fn test_wall_bumping_policy_still_terminates() {
    // Tous les gènes à 0 : l'agent pousse contre le mur à gauche du départ
    let mut config = crate::common::small_config(4, 3, EvaluationMode::SingleCandidate);
    config.environment.layout = vec!["SFG".into()];
    config.environment.slippery = false;
    config.environment.max_episode_steps = 7;
    config.swarm.deviation = 0.0;

    let outcome = run(&config).unwrap();
    assert_eq!(outcome.report.initial_score, 7.0);
    assert_eq!(outcome.report.grid_columns, 3);
    assert!(outcome.report.global_best.score <= 7.0);
}
