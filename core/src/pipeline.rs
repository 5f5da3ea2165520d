// FICHIER : core/src/pipeline.rs

//! Orchestration d'un run : essaim particulaire, puis algorithme génétique
//! amorcé sur les positions finales de l'essaim.

use crate::context::OptimizationContext;
use crate::convergence::{ConvergenceLog, PhaseLog};
use crate::environment::Environment;
use crate::evaluation::{EvaluationMode, Evaluator, RolloutEvaluator};
use crate::genetics::{ActionBounds, GeneticEngine, GlobalBest, PolicyVector, TruncationSelection};
use crate::swarm::ParticleSwarm;
use crate::utils::prelude::*;
use crate::utils::OptimizerConfig;
use chrono::{DateTime, Utc};
use std::time::Instant;
use uuid::Uuid;

/// Dimensions du problème vues par l'optimiseur.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProblemShape {
    /// `D` : un gène par état.
    pub states: usize,
    /// `A` : taille de l'espace d'actions.
    pub actions: usize,
    /// Largeur de la grille, reprise dans le rapport.
    pub columns: usize,
}

impl ProblemShape {
    pub fn of<E: Environment>(env: &E) -> Self {
        Self {
            states: env.state_count(),
            actions: env.action_count(),
            columns: env.columns(),
        }
    }

    /// Forme sans grille : tous les états sur une rangée.
    pub fn row(states: usize, actions: usize) -> Self {
        Self {
            states,
            actions,
            columns: states,
        }
    }
}

/// Résumé d'une phase, dérivé de son journal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhaseSummary {
    pub evaluations: usize,
    pub best_score: Option<f64>,
    pub best_iteration: Option<usize>,
    pub total_falls: u64,
    pub total_steps: u64,
    pub goals_reached: usize,
}

impl From<&PhaseLog> for PhaseSummary {
    fn from(log: &PhaseLog) -> Self {
        let best = log.best();
        Self {
            evaluations: log.len(),
            best_score: best.map(|r| r.best_score),
            best_iteration: best.map(|r| r.iteration),
            total_falls: log.total_falls,
            total_steps: log.total_steps,
            goals_reached: log.steps_to_goal.len(),
        }
    }
}

/// Rapport sérialisable d'un run complet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub run_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub duration_ms: u64,
    pub seed: u64,
    pub evaluation_mode: EvaluationMode,
    pub initial_score: f64,
    pub score_after_swarm: f64,
    pub global_best: GlobalBest,
    /// Action jouée par le meilleur global dans chaque état.
    pub greedy_policy: Vec<usize>,
    /// Largeur de la grille : `greedy_policy` se lit par rangées de cette taille.
    pub grid_columns: usize,
    pub swarm: PhaseSummary,
    pub genetic: PhaseSummary,
    pub final_population_size: usize,
    pub convergence: ConvergenceLog,
}

/// Rapport + population finale de l'algorithme génétique.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub report: RunReport,
    pub final_population: Vec<PolicyVector>,
}

/// Run complet sur l'environnement décrit par la configuration.
pub fn run(config: &OptimizerConfig) -> Result<RunOutcome> {
    config.validate()?;
    let lake = config.environment.build()?;
    let shape = ProblemShape::of(&lake);
    let mut evaluator = RolloutEvaluator::new(lake, config.evaluation.clone())?;
    run_with_evaluator(config, &mut evaluator, shape)
}

/// Même séquence, avec un évaluateur quelconque.
#[instrument(skip_all, fields(seed = config.seed))]
pub fn run_with_evaluator<V: Evaluator>(
    config: &OptimizerConfig,
    evaluator: &mut V,
    shape: ProblemShape,
) -> Result<RunOutcome> {
    let started_at = Utc::now();
    let clock = Instant::now();
    let mode = config.evaluation.mode;
    let bounds = ActionBounds::for_actions(shape.actions)?;
    let mut rng = StdRng::seed_from_u64(config.seed);

    // --- Phase 1 : essaim ---
    let mut swarm = ParticleSwarm::initialize(config.swarm.clone(), shape.states, bounds, &mut rng)?;
    let seed_best = swarm.seed_scores(evaluator, mode, &mut rng)?;
    let initial_score = seed_best.score;
    let mut ctx = OptimizationContext::new(seed_best, rng);

    let score_after_swarm = swarm.run(evaluator, mode, &mut ctx)?;
    info!(score = score_after_swarm, "phase essaim terminée");

    // --- Phase 2 : génétique, amorcée sur les positions de l'essaim ---
    let engine = GeneticEngine::new(TruncationSelection, config.genetic.clone(), bounds)?;
    let mixture = swarm.personal_best_table();
    let outcome = engine.run(swarm.positions(), evaluator, mode, &mixture, &mut ctx)?;
    info!(
        score = ctx.global_best.score,
        population = outcome.population.len(),
        "phase génétique terminée"
    );

    if ctx.global_best.score > score_after_swarm {
        return Err(AppError::System(anyhow::anyhow!(
            "le meilleur global s'est dégradé ({} > {})",
            ctx.global_best.score,
            score_after_swarm
        )));
    }

    let OptimizationContext {
        global_best, log, ..
    } = ctx;

    let report = RunReport {
        run_id: Uuid::new_v4(),
        started_at,
        duration_ms: clock.elapsed().as_millis() as u64,
        seed: config.seed,
        evaluation_mode: mode,
        initial_score,
        score_after_swarm,
        greedy_policy: global_best.position.action_map(shape.actions),
        grid_columns: shape.columns,
        global_best,
        swarm: PhaseSummary::from(&log.swarm),
        genetic: PhaseSummary::from(&log.genetic),
        final_population_size: outcome.population.len(),
        convergence: log,
    };

    Ok(RunOutcome {
        report,
        final_population: outcome.population,
    })
}
