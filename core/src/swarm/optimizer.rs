// FICHIER : core/src/swarm/optimizer.rs

use super::particle::{update_velocity, Particle};
use super::SwarmConfig;
use crate::context::OptimizationContext;
use crate::convergence::Phase;
use crate::evaluation::{CandidateSource, EvaluationMode, Evaluator};
use crate::genetics::types::{ActionBounds, GlobalBest, PolicyVector};
use crate::utils::prelude::*;

pub struct ParticleSwarm {
    config: SwarmConfig,
    particles: Vec<Particle>,
}

impl ParticleSwarm {
    /// Positions : `starting_point` + bruit uniforme dans `[-deviation, +deviation]`.
    /// Vitesses : uniformes dans l'intervalle des actions.
    pub fn initialize(
        config: SwarmConfig,
        dimension: usize,
        bounds: ActionBounds,
        rng: &mut StdRng,
    ) -> Result<Self> {
        config.validate()?;
        if dimension == 0 {
            return Err(AppError::malformed("dimension de politique nulle"));
        }

        let dev = config.deviation;
        let particles = (0..config.particles)
            .map(|_| {
                let position: Vec<f64> = (0..dimension)
                    .map(|_| config.starting_point + rng.random_range(-dev..=dev))
                    .collect();
                let velocity: Vec<f64> = (0..dimension).map(|_| bounds.sample(rng)).collect();
                Particle::new(PolicyVector::new(position), velocity)
            })
            .collect();

        Ok(Self { config, particles })
    }

    pub fn config(&self) -> &SwarmConfig {
        &self.config
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn positions(&self) -> Vec<PolicyVector> {
        self.particles.iter().map(|p| p.position.clone()).collect()
    }

    /// Table des meilleures positions personnelles, dans l'ordre des particules.
    pub fn personal_best_table(&self) -> Vec<&PolicyVector> {
        self.particles.iter().map(|p| &p.personal_best).collect()
    }

    /// Score de référence : une seule évaluation de la position de la particule 0,
    /// partagée par tous les meilleurs personnels et le meilleur global.
    /// Une évaluation au lieu de deux : le flux aléatoire est décalé d'autant
    /// par rapport à un run qui évalue deux fois.
    pub fn seed_scores<V: Evaluator>(
        &mut self,
        evaluator: &mut V,
        mode: EvaluationMode,
        rng: &mut StdRng,
    ) -> Result<GlobalBest> {
        let Some(first) = self.particles.first() else {
            return Err(AppError::malformed("essaim vide"));
        };
        let table = self.personal_best_table();
        let result = evaluator.evaluate(CandidateSource::for_mode(mode, &first.position, &table), rng)?;
        let score = result.average_steps;
        let position = first.position.clone();

        for particle in &mut self.particles {
            particle.personal_best_score = score;
        }
        debug!(score, "score initial de l'essaim");
        Ok(GlobalBest::new(position, score))
    }

    /// Une passe complète : chaque particule bouge, est évaluée, puis les
    /// meilleurs personnel et global sont mis à jour.
    pub fn sweep<V: Evaluator>(
        &mut self,
        evaluator: &mut V,
        mode: EvaluationMode,
        ctx: &mut OptimizationContext,
    ) -> Result<()> {
        let coefficients = (self.config.inertia, self.config.cognitive, self.config.social);

        for i in 0..self.particles.len() {
            let dimension = self.particles[i].velocity.len();
            let r1: Vec<f64> = (0..dimension).map(|_| ctx.rng.random::<f64>()).collect();
            let r2: Vec<f64> = (0..dimension).map(|_| ctx.rng.random::<f64>()).collect();

            let particle = &mut self.particles[i];
            particle.velocity = update_velocity(
                &particle.velocity,
                &particle.position.genes,
                &particle.personal_best.genes,
                &ctx.global_best.position.genes,
                &r1,
                &r2,
                coefficients,
            );
            particle.advance();

            let result = {
                let table = self.personal_best_table();
                let source = CandidateSource::for_mode(mode, &self.particles[i].position, &table);
                evaluator.evaluate(source, &mut ctx.rng)?
            };
            let score = result.average_steps;

            let particle = &mut self.particles[i];
            particle.remember_if_better(score);
            ctx.offer(Phase::Swarm, &particle.position, score);
            let iteration = ctx.log.swarm.record(&particle.position, &result);
            trace!(iteration, score, "particule évaluée");
        }
        Ok(())
    }

    /// Enchaîne `sweeps` passes et retourne le meilleur score global atteint.
    pub fn run<V: Evaluator>(
        &mut self,
        evaluator: &mut V,
        mode: EvaluationMode,
        ctx: &mut OptimizationContext,
    ) -> Result<f64> {
        for sweep in 0..self.config.sweeps {
            self.sweep(evaluator, mode, ctx)?;
            info!(sweep, best = ctx.global_best.score, "passe d'essaim terminée");
        }
        Ok(ctx.global_best.score)
    }
}
