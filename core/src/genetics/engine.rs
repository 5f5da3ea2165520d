use super::operators::crossover::single_point_crossover;
use super::operators::mutation::reset_mutation;
use super::operators::selection::{pick_parents, SelectionStrategy};
use super::types::{ActionBounds, PolicyVector, Scored};
use crate::context::OptimizationContext;
use crate::convergence::Phase;
use crate::evaluation::{CandidateSource, EvaluationMode, Evaluator};
use crate::utils::prelude::*;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneticConfig {
    /// `N` : survivants retenus et tours de reproduction par génération.
    pub population_size: usize,
    pub mutation_rate: f64,
    pub generations: usize,
}

impl Default for GeneticConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            mutation_rate: 0.1,
            generations: 1,
        }
    }
}

impl GeneticConfig {
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 || self.generations == 0 {
            return Err(AppError::Config(
                "population_size et generations doivent être > 0".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(AppError::Config(format!(
                "mutation_rate hors de [0, 1] : {}",
                self.mutation_rate
            )));
        }
        Ok(())
    }
}

/// Sortie de la phase génétique.
#[derive(Debug, Clone)]
pub struct GeneticOutcome {
    /// Dernière génération produite (`2N` individus).
    pub population: Vec<PolicyVector>,
    /// Survivants de la dernière sélection, score croissant.
    pub selected: Vec<Scored>,
}

pub struct GeneticEngine<S: SelectionStrategy> {
    selection: S,
    config: GeneticConfig,
    bounds: ActionBounds,
}

impl<S: SelectionStrategy> GeneticEngine<S> {
    pub fn new(selection: S, config: GeneticConfig, bounds: ActionBounds) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            selection,
            config,
            bounds,
        })
    }

    pub fn config(&self) -> &GeneticConfig {
        &self.config
    }

    /// Phase A : évalue chaque individu, puis retient les `N` meilleurs
    /// (un seul tri après la collecte des scores).
    pub fn evaluate_and_select<V: Evaluator>(
        &self,
        population: &[PolicyVector],
        evaluator: &mut V,
        mode: EvaluationMode,
        mixture: &[&PolicyVector],
        ctx: &mut OptimizationContext,
    ) -> Result<Vec<Scored>> {
        if population.is_empty() {
            return Err(AppError::malformed("population initiale vide"));
        }

        let mut scored = Vec::with_capacity(population.len());
        for individual in population {
            let source = CandidateSource::for_mode(mode, individual, mixture);
            let result = evaluator.evaluate(source, &mut ctx.rng)?;
            ctx.log.genetic.record(individual, &result);
            scored.push(Scored::new(individual.clone(), result.average_steps));
        }

        let selected = self.selection.select(scored, self.config.population_size)?;
        if let Some(best) = selected.first() {
            ctx.offer(Phase::Genetic, &best.policy, best.score);
        }
        Ok(selected)
    }

    /// Phase B : `N` tours de croisement + mutation, deux enfants par tour.
    pub fn reproduce(&self, selected: &[Scored], rng: &mut StdRng) -> Result<Vec<PolicyVector>> {
        let mut children = Vec::with_capacity(2 * self.config.population_size);

        for _ in 0..self.config.population_size {
            let (parent1, parent2) = pick_parents(selected, rng)?;
            let (mut child1, mut child2) =
                single_point_crossover(&parent1.policy.genes, &parent2.policy.genes, rng)?;

            reset_mutation(&mut child1, self.config.mutation_rate, self.bounds, rng);
            reset_mutation(&mut child2, self.config.mutation_rate, self.bounds, rng);

            children.push(PolicyVector::new(child1));
            children.push(PolicyVector::new(child2));
        }
        Ok(children)
    }

    /// Enchaîne les générations à partir de `initial`.
    pub fn run<V: Evaluator>(
        &self,
        initial: Vec<PolicyVector>,
        evaluator: &mut V,
        mode: EvaluationMode,
        mixture: &[&PolicyVector],
        ctx: &mut OptimizationContext,
    ) -> Result<GeneticOutcome> {
        let mut population = initial;
        let mut selected = Vec::new();

        for generation in 0..self.config.generations {
            selected = self.evaluate_and_select(&population, evaluator, mode, mixture, ctx)?;
            population = self.reproduce(&selected, &mut ctx.rng)?;
            info!(
                generation,
                best = selected.first().map(|s| s.score),
                offspring = population.len(),
                "génération terminée"
            );
        }

        Ok(GeneticOutcome {
            population,
            selected,
        })
    }
}
