// FICHIER : core/src/genetics/types.rs

use crate::utils::prelude::*;
use std::cmp::Ordering;

/// Vecteur réel d'une politique : un gène par case de la grille.
/// Les valeurs ne sont pas forcément entières pendant l'optimisation ;
/// elles ne deviennent une action qu'au moment de l'évaluation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PolicyVector {
    pub genes: Vec<f64>,
}

/// Échec de lecture dans la table d'actions (état hors table ou gène non fini).
/// Toujours rattrapé par l'évaluateur.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LookupFailure {
    pub state: usize,
}

impl PolicyVector {
    pub fn new(genes: Vec<f64>) -> Self {
        Self { genes }
    }

    pub fn filled(dimension: usize, value: f64) -> Self {
        Self {
            genes: vec![value; dimension],
        }
    }

    pub fn len(&self) -> usize {
        self.genes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// Action jouée dans `state`, ramenée dans `[0, action_count - 1]`.
    pub fn action_for(
        &self,
        state: usize,
        action_count: usize,
    ) -> std::result::Result<usize, LookupFailure> {
        self.genes
            .get(state)
            .and_then(|&gene| coerce_action(gene, action_count))
            .ok_or(LookupFailure { state })
    }

    /// Politique gloutonne : l'action retenue pour chaque case.
    pub fn action_map(&self, action_count: usize) -> Vec<usize> {
        (0..self.len())
            .map(|s| self.action_for(s, action_count).unwrap_or(0))
            .collect()
    }

    pub fn ensure_dimension(&self, dimension: usize) -> Result<()> {
        if self.len() != dimension {
            return Err(AppError::malformed(format!(
                "dimension du vecteur {} différente de {} attendue",
                self.len(),
                dimension
            )));
        }
        Ok(())
    }
}

/// Troncature vers zéro (comme un cast entier) puis écrêtage dans l'espace d'actions.
pub fn coerce_action(gene: f64, action_count: usize) -> Option<usize> {
    if !gene.is_finite() || action_count == 0 {
        return None;
    }
    let upper = (action_count - 1) as f64;
    Some(gene.trunc().clamp(0.0, upper) as usize)
}

/// Bornes de l'espace d'actions, utilisées pour tirer vitesses et mutations.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActionBounds {
    pub lower: f64,
    pub upper: f64,
}

impl ActionBounds {
    /// `[0, action_count - 1]`
    pub fn for_actions(action_count: usize) -> Result<Self> {
        if action_count == 0 {
            return Err(AppError::malformed("espace d'actions vide"));
        }
        Ok(Self {
            lower: 0.0,
            upper: (action_count - 1) as f64,
        })
    }

    pub fn sample(&self, rng: &mut StdRng) -> f64 {
        rng.random_range(self.lower..=self.upper)
    }
}

/// Meilleure solution connue sur tout le run (PSO puis AG).
/// Plus le score est bas, meilleur il est.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GlobalBest {
    pub position: PolicyVector,
    pub score: f64,
}

/// Règle du cliquet : seul un score strictement meilleur remplace l'actuel.
pub fn improves(current: f64, candidate: f64) -> bool {
    candidate.is_finite() && (candidate < current || current.is_nan())
}

impl GlobalBest {
    pub fn new(position: PolicyVector, score: f64) -> Self {
        Self { position, score }
    }

    /// Propose un candidat ; retourne true s'il a remplacé le meilleur courant.
    pub fn offer(&mut self, candidate: &PolicyVector, score: f64) -> bool {
        if improves(self.score, score) {
            self.score = score;
            self.position = candidate.clone();
            true
        } else {
            false
        }
    }
}

/// Un individu évalué.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Scored {
    pub policy: PolicyVector,
    pub score: f64,
}

impl Scored {
    pub fn new(policy: PolicyVector, score: f64) -> Self {
        Self { policy, score }
    }

    /// Ordre croissant des scores ; les NaN passent en dernier.
    pub fn ascending(a: &Scored, b: &Scored) -> Ordering {
        match (a.score.is_nan(), b.score.is_nan()) {
            (false, false) => a.score.total_cmp(&b.score),
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
        }
    }
}

// --- Tests Unitaires ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coercion_clamps_out_of_range_genes() {
        assert_eq!(coerce_action(-7.3, 4), Some(0));
        assert_eq!(coerce_action(2.9, 4), Some(2));
        assert_eq!(coerce_action(-0.9, 4), Some(0));
        assert_eq!(coerce_action(41.0, 4), Some(3));
        assert_eq!(coerce_action(f64::NAN, 4), None);
        assert_eq!(coerce_action(f64::INFINITY, 4), None);
    }

    #[test]
    fn test_action_lookup_out_of_table() {
        let policy = PolicyVector::new(vec![1.0, 2.0]);
        assert_eq!(policy.action_for(1, 4), Ok(2));
        assert_eq!(policy.action_for(5, 4), Err(LookupFailure { state: 5 }));
        assert_eq!(policy.action_map(4), vec![1, 2]);
    }

    #[test]
    fn test_global_best_ratchet() {
        let mut best = GlobalBest::new(PolicyVector::filled(2, 0.0), 10.0);
        let better = PolicyVector::filled(2, 1.0);
        let worse = PolicyVector::filled(2, 3.0);

        assert!(!best.offer(&worse, 12.0));
        assert!(!best.offer(&worse, 10.0), "égalité : pas de remplacement");
        assert!(!best.offer(&worse, f64::NAN));
        assert!(best.offer(&better, 4.5));
        assert_eq!(best.score, 4.5);
        assert_eq!(best.position, better);
    }

    #[test]
    fn test_ratchet_recovers_from_nan_score() {
        assert!(improves(f64::NAN, 3.0));
        assert!(improves(f64::INFINITY, 3.0));
        assert!(!improves(3.0, f64::NEG_INFINITY));
    }

    #[test]
    fn test_dimension_check() {
        let policy = PolicyVector::filled(3, 0.0);
        assert!(policy.ensure_dimension(3).is_ok());
        assert!(matches!(
            policy.ensure_dimension(16),
            Err(AppError::MalformedInput(_))
        ));
    }
}
