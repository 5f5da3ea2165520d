use crate::genetics::types::ActionBounds;
use crate::utils::prelude::*;

/// Chaque gène est remplacé, avec probabilité `mutation_rate`, par `sampler(rng)`.
/// Retourne le nombre de gènes modifiés.
pub fn uniform_mutation<T, F>(
    genes: &mut [T],
    mutation_rate: f64,
    rng: &mut StdRng,
    mut sampler: F,
) -> usize
where
    F: FnMut(&mut StdRng) -> T,
{
    let mut mutated = 0;
    for gene in genes.iter_mut() {
        if rng.random::<f64>() < mutation_rate {
            *gene = sampler(&mut *rng);
            mutated += 1;
        }
    }
    mutated
}

/// Mutation d'une politique : nouvelle valeur uniforme dans l'espace d'actions.
pub fn reset_mutation(
    genes: &mut [f64],
    mutation_rate: f64,
    bounds: ActionBounds,
    rng: &mut StdRng,
) -> usize {
    uniform_mutation(genes, mutation_rate, rng, |r| bounds.sample(r))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_mutation() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut genes = vec![0, 0, 0, 0, 0];

        let n = uniform_mutation(&mut genes, 1.0, &mut rng, |_| 1);

        assert_eq!(n, 5);
        assert_eq!(genes, vec![1, 1, 1, 1, 1]);
    }

    #[test]
    fn test_zero_rate_is_identity() {
        let mut rng = StdRng::seed_from_u64(7);
        let original: Vec<f64> = (0..32).map(|i| i as f64 * 0.37 - 4.0).collect();
        let mut genes = original.clone();
        let bounds = ActionBounds::for_actions(4).unwrap();

        assert_eq!(reset_mutation(&mut genes, 0.0, bounds, &mut rng), 0);
        assert_eq!(genes, original);
    }

    #[test]
    fn test_only_masked_genes_change() {
        let mut rng = StdRng::seed_from_u64(3);
        // Hors bornes : toute valeur dans [0, 3] est forcément une mutation
        let mut genes = vec![-50.0; 400];
        let bounds = ActionBounds::for_actions(4).unwrap();

        let n = reset_mutation(&mut genes, 0.1, bounds, &mut rng);
        let changed = genes.iter().filter(|&&g| g != -50.0).count();

        assert_eq!(n, changed);
        assert!(genes.iter().filter(|&&g| g != -50.0).all(|&g| (0.0..=3.0).contains(&g)));
        // ~40 attendus
        assert!((10..=90).contains(&changed), "mutations : {}", changed);
    }
}
