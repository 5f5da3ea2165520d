// FICHIER : core/src/swarm/mod.rs

//! Optimiseur par essaim particulaire sur des vecteurs de politique.

pub mod optimizer;
pub mod particle;

pub use optimizer::ParticleSwarm;
pub use particle::{update_velocity, Particle};

use crate::utils::prelude::*;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwarmConfig {
    pub particles: usize,
    /// Poids d'inertie `w`.
    pub inertia: f64,
    /// Coefficient cognitif `c1` (attraction vers le meilleur personnel).
    pub cognitive: f64,
    /// Coefficient social `c2` (attraction vers le meilleur global).
    pub social: f64,
    pub starting_point: f64,
    /// Amplitude du bruit uniforme autour de `starting_point`.
    pub deviation: f64,
    /// Passes complètes sur l'essaim.
    pub sweeps: usize,
}

impl Default for SwarmConfig {
    fn default() -> Self {
        Self {
            particles: 100,
            inertia: 0.8,
            cognitive: 1.5,
            social: 2.5,
            starting_point: 0.0,
            deviation: 0.5,
            sweeps: 1,
        }
    }
}

impl SwarmConfig {
    pub fn validate(&self) -> Result<()> {
        if self.particles == 0 || self.sweeps == 0 {
            return Err(AppError::Config(
                "particles et sweeps doivent être > 0".to_string(),
            ));
        }
        let coefficients = [self.inertia, self.cognitive, self.social, self.starting_point];
        if coefficients.iter().any(|c| !c.is_finite()) {
            return Err(AppError::Config("coefficient d'essaim non fini".to_string()));
        }
        if !self.deviation.is_finite() || self.deviation < 0.0 {
            return Err(AppError::Config(format!(
                "deviation invalide : {}",
                self.deviation
            )));
        }
        Ok(())
    }
}
