// FICHIER : core/src/utils/logger.rs

use std::path::Path;
use std::sync::Once;
use tracing_appender::rolling;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

// Sécurité pour éviter la double initialisation (crash fréquent en tests)
static INIT: Once = Once::new();

/// Installe le subscriber global. Seul le binaire l'appelle, jamais la librairie.
/// Avec `log_dir`, les événements sont aussi écrits en JSON dans un fichier journalier.
pub fn init_logging(log_dir: Option<&Path>) {
    INIT.call_once(|| {
        // =========================================================================
        // LAYER 1 : FICHIER (Optionnel, JSON pour l'analyse des runs)
        // =========================================================================
        let file_layer = log_dir.map(|dir| {
            std::fs::create_dir_all(dir).ok();
            let file_appender = rolling::daily(dir, "lakeswarm.log");

            fmt::layer()
                .json()
                .with_writer(file_appender)
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
        });

        // =========================================================================
        // LAYER 2 : CONSOLE (Pour l'Humain)
        // =========================================================================
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

        let console_layer = fmt::layer()
            .compact()
            .with_target(false)
            .with_writer(std::io::stderr)
            .with_filter(env_filter);

        let registry = tracing_subscriber::registry()
            .with(file_layer)
            .with(console_layer);

        if registry.try_init().is_err() {
            tracing::warn!("[Logger] Tentative de ré-initialisation ignorée (subscriber global déjà actif).");
            return;
        }

        match log_dir {
            Some(dir) => tracing::info!("Logger initialisé. Logs disponibles dans : {:?}", dir),
            None => tracing::info!("Logger initialisé (console uniquement)."),
        }
    });
}
