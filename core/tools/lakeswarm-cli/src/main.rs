// FICHIER : core/tools/lakeswarm-cli/src/main.rs

use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

use lakeswarm::{user_error, user_info, utils::init_logging};

#[derive(Parser)]
#[command(name = "lakeswarm-cli")]
#[command(about = "Recherche de politiques FrozenLake (essaim particulaire + génétique)", long_about = None)]
#[command(version)]
struct Cli {
    /// Répertoire des logs JSON (rotation quotidienne). Console seule si absent.
    #[arg(long, global = true, env = "LAKESWARM_LOG_DIR")]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Clone, Debug)]
enum Commands {
    /// Lance un run complet : essaim puis algorithme génétique
    Evolve(commands::evolve::EvolveArgs),

    /// Résume un rapport JSON produit par `evolve`
    Inspect(commands::inspect::InspectArgs),
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_dir.as_deref());

    user_info!("lakeswarm-cli v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = execute_command(cli.command) {
        user_error!(error = e, component = "CLI", action = "EXECUTE");
        std::process::exit(1);
    }

    tracing::debug!("Fin de l'exécution du CLI");
}

fn execute_command(cmd: Commands) -> anyhow::Result<()> {
    match cmd {
        Commands::Evolve(args) => commands::evolve::handle(args),
        Commands::Inspect(args) => commands::inspect::handle(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_evolve_overrides() {
        let cli = Cli::try_parse_from([
            "lakeswarm-cli",
            "evolve",
            "--seed",
            "7",
            "--particles",
            "12",
            "--mode",
            "single",
        ])
        .unwrap();

        let Commands::Evolve(args) = cli.command else {
            panic!("sous-commande evolve attendue");
        };
        assert_eq!(args.seed, Some(7));
        assert_eq!(args.particles, Some(12));
        assert!(args.mode.is_some());
    }

    #[test]
    fn test_inspect_requires_report() {
        assert!(Cli::try_parse_from(["lakeswarm-cli", "inspect"]).is_err());
    }
}
