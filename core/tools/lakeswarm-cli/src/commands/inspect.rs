use anyhow::Context;
use clap::Args;
use std::fs;
use std::path::{Path, PathBuf};

use lakeswarm::{user_info, RunReport};

#[derive(Args, Clone, Debug)]
pub struct InspectArgs {
    /// Rapport JSON écrit par `evolve --output`
    pub report: PathBuf,
}

const ARROWS: [char; 4] = ['←', '↓', '→', '↑'];

/// Grille des actions gloutonnes, une ligne par rangée de la carte.
pub fn render_policy(policy: &[usize], columns: usize) -> Vec<String> {
    policy
        .chunks(columns.max(1))
        .map(|row| {
            row.iter()
                .map(|&a| ARROWS.get(a).copied().unwrap_or('?'))
                .collect()
        })
        .collect()
}

pub fn load_report(path: &Path) -> anyhow::Result<RunReport> {
    let raw =
        fs::read_to_string(path).with_context(|| format!("lecture de {}", path.display()))?;
    Ok(serde_json::from_str(&raw)?)
}

pub fn handle(args: InspectArgs) -> anyhow::Result<()> {
    let report = load_report(&args.report)?;

    user_info!("Run {} ({})", report.run_id, report.started_at);
    user_info!(
        "Graine: {} | Mode: {:?} | Durée: {} ms",
        report.seed,
        report.evaluation_mode,
        report.duration_ms
    );
    user_info!(
        "Scores : initial {:.3} -> essaim {:.3} -> final {:.3}",
        report.initial_score,
        report.score_after_swarm,
        report.global_best.score
    );
    for (name, phase) in [("essaim", &report.swarm), ("génétique", &report.genetic)] {
        user_info!(
            "[{}] évaluations: {} | meilleure itération: {:?} | chutes: {} | arrivées: {}",
            name,
            phase.evaluations,
            phase.best_iteration,
            phase.total_falls,
            phase.goals_reached
        );
    }

    for line in render_policy(&report.greedy_policy, report.grid_columns) {
        user_info!("  {}", line);
    }
    Ok(())
}
