use crate::utils::prelude::*;

/// Échange les queues des deux parents à partir de `cut`.
/// `child1 = p1[..cut] ++ p2[cut..]`, `child2 = p2[..cut] ++ p1[cut..]`.
pub fn split_at_point<T: Clone>(parent1: &[T], parent2: &[T], cut: usize) -> (Vec<T>, Vec<T>) {
    let mut child1 = Vec::with_capacity(parent1.len());
    child1.extend_from_slice(&parent1[..cut]);
    child1.extend_from_slice(&parent2[cut..]);

    let mut child2 = Vec::with_capacity(parent2.len());
    child2.extend_from_slice(&parent2[..cut]);
    child2.extend_from_slice(&parent1[cut..]);

    (child1, child2)
}

/// Croisement en un point, coupe tirée uniformément dans `[1, len-1]`.
pub fn single_point_crossover<T: Clone>(
    parent1: &[T],
    parent2: &[T],
    rng: &mut StdRng,
) -> Result<(Vec<T>, Vec<T>)> {
    if parent1.len() != parent2.len() {
        return Err(AppError::malformed(format!(
            "parents de tailles différentes ({} / {})",
            parent1.len(),
            parent2.len()
        )));
    }
    let len = parent1.len();
    if len < 2 {
        return Err(AppError::malformed(format!(
            "croisement impossible sur un génome de taille {}",
            len
        )));
    }

    let cut = rng.random_range(1..len);
    Ok(split_at_point(parent1, parent2, cut))
}

// --- Tests Unitaires ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_is_content_preserving() {
        let p1 = vec![1, 1, 1, 1];
        let p2 = vec![2, 2, 2, 2];

        let (c1, c2) = split_at_point(&p1, &p2, 1);
        assert_eq!(c1, vec![1, 2, 2, 2]);
        assert_eq!(c2, vec![2, 1, 1, 1]);

        let (c1, c2) = split_at_point(&p1, &p2, 3);
        assert_eq!(c1, vec![1, 1, 1, 2]);
        assert_eq!(c2, vec![2, 2, 2, 1]);
    }

    #[test]
    fn test_single_point() {
        let mut rng = StdRng::seed_from_u64(42);
        let p1: Vec<i32> = (0..16).collect();
        let p2: Vec<i32> = (100..116).collect();

        for _ in 0..50 {
            let (c1, c2) = single_point_crossover(&p1, &p2, &mut rng).unwrap();
            assert_eq!(c1.len(), 16);
            assert_eq!(c2.len(), 16);

            // Le début vient de p1, la fin de p2, et la coupe est dans [1, 15]
            let cut = c1.iter().position(|&g| g >= 100).unwrap();
            assert!((1..16).contains(&cut));
            assert_eq!(c1, [&p1[..cut], &p2[cut..]].concat());
            assert_eq!(c2, [&p2[..cut], &p1[cut..]].concat());
        }
    }

    #[test]
    fn test_preconditions() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            single_point_crossover(&[1, 2, 3], &[1, 2], &mut rng),
            Err(AppError::MalformedInput(_))
        ));
        assert!(matches!(
            single_point_crossover(&[1], &[2], &mut rng),
            Err(AppError::MalformedInput(_))
        ));
    }
}
