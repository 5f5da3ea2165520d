use crate::genetics::types::Scored;
use crate::utils::prelude::*;

pub trait SelectionStrategy: Send + Sync {
    /// Retient `count` survivants parmi une population évaluée.
    fn select(&self, scored: Vec<Scored>, count: usize) -> Result<Vec<Scored>>;
}

/// Sélection par troncature : tri stable croissant une seule fois, puis coupe.
#[derive(Clone, Copy, Debug, Default)]
pub struct TruncationSelection;

impl SelectionStrategy for TruncationSelection {
    fn select(&self, mut scored: Vec<Scored>, count: usize) -> Result<Vec<Scored>> {
        if scored.is_empty() {
            return Err(AppError::malformed("sélection sur une population vide"));
        }
        if scored.len() < count {
            return Err(AppError::malformed(format!(
                "sélection de {} individus sur une population de {}",
                count,
                scored.len()
            )));
        }

        scored.sort_by(Scored::ascending);
        scored.truncate(count);
        Ok(scored)
    }
}

/// Tirage uniforme avec remise de deux parents.
pub fn pick_parents<'a>(pool: &'a [Scored], rng: &mut StdRng) -> Result<(&'a Scored, &'a Scored)> {
    if pool.is_empty() {
        return Err(AppError::malformed("aucun parent disponible"));
    }
    let a = rng.random_range(0..pool.len());
    let b = rng.random_range(0..pool.len());
    Ok((&pool[a], &pool[b]))
}
