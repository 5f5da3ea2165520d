use anyhow::Context;
use clap::Args;
use std::fs;
use std::path::PathBuf;

use lakeswarm::evaluation::EvaluationMode;
use lakeswarm::{run, user_info, user_success, OptimizerConfig};

#[derive(Args, Clone, Debug)]
pub struct EvolveArgs {
    /// Fichier de configuration JSON (valeurs par défaut sinon)
    #[arg(short, long, env = "LAKESWARM_CONFIG")]
    pub config: Option<PathBuf>,

    /// Graine du run
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Épisodes simulés par évaluation
    #[arg(short, long)]
    pub episodes: Option<usize>,

    /// Taille N de l'essaim et de la sélection
    #[arg(short, long)]
    pub particles: Option<usize>,

    /// Mode d'évaluation : `mixture` ou `single`
    #[arg(short, long)]
    pub mode: Option<EvaluationMode>,

    #[arg(long)]
    pub sweeps: Option<usize>,

    #[arg(long)]
    pub generations: Option<usize>,

    /// Écrit le rapport complet (JSON) dans ce fichier
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Affiche la configuration effective sans lancer le run
    #[arg(long)]
    pub dry_run: bool,
}

impl EvolveArgs {
    /// Priorité : arguments, puis variables d'environnement, puis fichier.
    pub fn resolve(&self) -> lakeswarm::Result<OptimizerConfig> {
        let mut config = OptimizerConfig::load(self.config.as_deref())?;
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(episodes) = self.episodes {
            config.evaluation.episodes = episodes;
        }
        if let Some(n) = self.particles {
            config.set_population(n);
        }
        if let Some(mode) = self.mode {
            config.evaluation.mode = mode;
        }
        if let Some(sweeps) = self.sweeps {
            config.swarm.sweeps = sweeps;
        }
        if let Some(generations) = self.generations {
            config.genetic.generations = generations;
        }
        config.validate()?;
        Ok(config)
    }
}

pub fn handle(args: EvolveArgs) -> anyhow::Result<()> {
    let config = args.resolve()?;
    user_info!(
        "Graine: {} | N: {} | Épisodes: {} | Mode: {:?}",
        config.seed,
        config.swarm.particles,
        config.evaluation.episodes,
        config.evaluation.mode
    );

    if args.dry_run {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    let outcome = run(&config)?;
    let report = &outcome.report;

    user_info!("Score initial       : {:.3}", report.initial_score);
    user_info!("Après essaim        : {:.3}", report.score_after_swarm);
    user_info!("Meilleur global     : {:.3}", report.global_best.score);
    user_info!("Politique gloutonne : {:?}", report.greedy_policy);

    if let Some(path) = &args.output {
        let json = serde_json::to_string_pretty(report)?;
        fs::write(path, json)
            .with_context(|| format!("écriture du rapport dans {}", path.display()))?;
        user_success!("Rapport écrit : {}", path.display());
    } else {
        user_success!("Run {} terminé en {} ms", report.run_id, report.duration_ms);
    }
    Ok(())
}
