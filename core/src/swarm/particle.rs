use crate::genetics::types::PolicyVector;
use crate::utils::prelude::*;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub position: PolicyVector,
    pub velocity: Vec<f64>,
    pub personal_best: PolicyVector,
    pub personal_best_score: f64,
}

impl Particle {
    pub fn new(position: PolicyVector, velocity: Vec<f64>) -> Self {
        Self {
            personal_best: position.clone(),
            position,
            velocity,
            personal_best_score: f64::INFINITY,
        }
    }

    /// `x <- x + v`, composante par composante.
    pub fn advance(&mut self) {
        for (x, v) in self.position.genes.iter_mut().zip(&self.velocity) {
            *x += v;
        }
    }

    /// Retient la position courante si elle bat strictement le meilleur personnel.
    pub fn remember_if_better(&mut self, score: f64) -> bool {
        let better = crate::genetics::types::improves(self.personal_best_score, score);
        if better {
            self.personal_best = self.position.clone();
            self.personal_best_score = score;
        }
        better
    }
}

/// Règle de vitesse canonique :
/// `v' = w*v + c1*r1*(pbest - x) + c2*r2*(gbest - x)`.
/// `r1` et `r2` sont tirés par composante dans `[0, 1)`.
pub fn update_velocity(
    velocity: &[f64],
    position: &[f64],
    personal_best: &[f64],
    global_best: &[f64],
    r1: &[f64],
    r2: &[f64],
    (w, c1, c2): (f64, f64, f64),
) -> Vec<f64> {
    (0..velocity.len())
        .map(|i| {
            w * velocity[i]
                + c1 * r1[i] * (personal_best[i] - position[i])
                + c2 * r2[i] * (global_best[i] - position[i])
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_velocity_rule() {
        let v = update_velocity(
            &[1.0, -2.0],
            &[0.0, 1.0],
            &[2.0, 1.0],
            &[4.0, 3.0],
            &[0.5, 1.0],
            &[0.25, 0.0],
            (0.8, 1.5, 2.5),
        );
        // 0.8*1 + 1.5*0.5*2 + 2.5*0.25*4 = 0.8 + 1.5 + 2.5
        assert!((v[0] - 4.8).abs() < 1e-12);
        // 0.8*-2 + 0 + 0
        assert!((v[1] + 1.6).abs() < 1e-12);
    }

    #[test]
    fn test_at_rest_on_bests_only_inertia_remains() {
        let v = update_velocity(&[0.5], &[2.0], &[2.0], &[2.0], &[0.9], &[0.9], (0.8, 1.5, 2.5));
        assert_eq!(v, vec![0.4]);
    }

    #[test]
    fn test_advance_and_personal_best() {
        let mut p = Particle::new(PolicyVector::new(vec![0.0, 1.0]), vec![0.5, -0.5]);
        p.personal_best_score = 10.0;

        p.advance();
        assert_eq!(p.position.genes, vec![0.5, 0.5]);

        assert!(!p.remember_if_better(10.0));
        assert_eq!(p.personal_best.genes, vec![0.0, 1.0]);
        assert!(p.remember_if_better(7.0));
        assert_eq!(p.personal_best.genes, vec![0.5, 0.5]);
        assert!(!p.remember_if_better(f64::NAN));
        assert_eq!(p.personal_best_score, 7.0);
    }
}
