// FICHIER : core/src/utils/config.rs

use crate::environment::EnvironmentConfig;
use crate::evaluation::{EvaluationConfig, EvaluationMode};
use crate::genetics::engine::GeneticConfig;
use crate::swarm::SwarmConfig;
use crate::utils::env;
use crate::utils::prelude::*;
use std::fs;
use std::path::Path;

// Surcharges par variables d'environnement
pub const ENV_SEED: &str = "LAKESWARM_SEED";
pub const ENV_EPISODES: &str = "LAKESWARM_EPISODES";
pub const ENV_PARTICLES: &str = "LAKESWARM_PARTICLES";
pub const ENV_EVAL_MODE: &str = "LAKESWARM_EVAL_MODE";

/// Configuration complète d'un run.
/// Ordre de résolution : valeurs par défaut, fichier JSON, variables d'environnement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizerConfig {
    pub seed: u64,
    pub environment: EnvironmentConfig,
    pub evaluation: EvaluationConfig,
    pub swarm: SwarmConfig,
    pub genetic: GeneticConfig,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            environment: EnvironmentConfig::default(),
            evaluation: EvaluationConfig::default(),
            swarm: SwarmConfig::default(),
            genetic: GeneticConfig::default(),
        }
    }
}

impl OptimizerConfig {
    /// Charge, surcharge puis valide la configuration.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(p) => Self::from_file(p)?,
            None => Self::default(),
        };
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        debug!(path = %path.display(), "configuration chargée");
        Ok(config)
    }

    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Some(seed) = env::get_parsed_optional::<u64>(ENV_SEED)? {
            self.seed = seed;
        }
        if let Some(episodes) = env::get_parsed_optional::<usize>(ENV_EPISODES)? {
            self.evaluation.episodes = episodes;
        }
        if let Some(particles) = env::get_parsed_optional::<usize>(ENV_PARTICLES)? {
            self.set_population(particles);
        }
        if let Some(raw) = env::get_optional(ENV_EVAL_MODE) {
            self.evaluation.mode = raw.parse::<EvaluationMode>()?;
        }
        Ok(())
    }

    /// `N` pilote à la fois la taille de l'essaim et celle de la sélection.
    pub fn set_population(&mut self, n: usize) {
        self.swarm.particles = n;
        self.genetic.population_size = n;
    }

    pub fn validate(&self) -> Result<()> {
        if self.environment.layout.is_empty() {
            return Err(AppError::Config("carte vide".to_string()));
        }
        if self.environment.max_episode_steps == 0 {
            return Err(AppError::Config("max_episode_steps doit être > 0".to_string()));
        }
        self.evaluation.validate()?;
        self.swarm.validate()?;
        self.genetic.validate()?;
        if self.genetic.population_size != self.swarm.particles {
            return Err(AppError::Config(format!(
                "population_size ({}) doit égaler le nombre de particules ({})",
                self.genetic.population_size, self.swarm.particles
            )));
        }
        Ok(())
    }
}
