// FICHIER : core/src/utils/mod.rs

// =========================================================================
//  LAKESWARM UTILS - Fondations (erreurs, logs, configuration)
// =========================================================================

pub mod config;
pub mod env;
pub mod error;
pub mod logger;
pub mod macros;

pub use config::OptimizerConfig;
pub use error::{AppError, Result};
pub use logger::init_logging;

/// Imports communs à tous les modules de l'optimiseur.
pub mod prelude {
    pub use super::error::{AppError, Result};
    pub use rand::prelude::*;
    pub use rand::rngs::StdRng;
    pub use rand::SeedableRng;
    pub use serde::{Deserialize, Serialize};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}
