// FICHIER : core/src/environment/frozen_lake.rs

use super::{CellType, Environment, Transition};
use crate::utils::prelude::*;

/// Carte 4x4 classique.
pub const CLASSIC_4X4: [&str; 4] = ["SFFF", "FHFH", "FFFH", "HFFG"];

pub const ACTION_COUNT: usize = 4;

// Actions : 0 = Gauche, 1 = Bas, 2 = Droite, 3 = Haut
const LEFT: usize = 0;
const DOWN: usize = 1;
const RIGHT: usize = 2;
const UP: usize = 3;

/// Lac gelé sur grille. Les trous et l'arrivée terminent l'épisode.
/// En mode glissant, le déplacement réel est tiré uniformément entre la
/// direction voulue et ses deux perpendiculaires. Chaque épisode est tronqué
/// après `max_episode_steps` pas, si bien qu'une politique qui tourne en rond
/// (ou bute contre un mur) termine toujours.
#[derive(Clone, Debug)]
pub struct FrozenLake {
    cells: Vec<CellType>,
    rows: usize,
    cols: usize,
    start: usize,
    goal: usize,
    slippery: bool,
    max_episode_steps: usize,
    state: usize,
    elapsed: usize,
}

impl FrozenLake {
    /// Construit le lac à partir de lignes `S`/`F`/`H`/`G`.
    pub fn from_layout<S: AsRef<str>>(
        layout: &[S],
        slippery: bool,
        max_episode_steps: usize,
    ) -> Result<Self> {
        let rows = layout.len();
        if rows == 0 {
            return Err(AppError::Config("carte vide".to_string()));
        }
        let cols = layout[0].as_ref().chars().count();
        if cols == 0 {
            return Err(AppError::Config("ligne de carte vide".to_string()));
        }

        let mut cells = Vec::with_capacity(rows * cols);
        for (r, line) in layout.iter().enumerate() {
            let line = line.as_ref();
            if line.chars().count() != cols {
                return Err(AppError::Config(format!(
                    "ligne {} de longueur {} (attendu {})",
                    r,
                    line.chars().count(),
                    cols
                )));
            }
            for c in line.chars() {
                cells.push(match c {
                    'S' => CellType::Start,
                    'F' => CellType::Frozen,
                    'H' => CellType::Hole,
                    'G' => CellType::Goal,
                    other => {
                        return Err(AppError::Config(format!(
                            "case inconnue '{}' à la ligne {}",
                            other, r
                        )))
                    }
                });
            }
        }

        let starts: Vec<usize> = cells
            .iter()
            .enumerate()
            .filter(|(_, c)| **c == CellType::Start)
            .map(|(i, _)| i)
            .collect();
        if starts.len() != 1 {
            return Err(AppError::Config(format!(
                "la carte doit contenir exactement un départ (trouvé {})",
                starts.len()
            )));
        }
        let Some(goal) = cells.iter().position(|c| *c == CellType::Goal) else {
            return Err(AppError::Config("la carte ne contient pas d'arrivée".to_string()));
        };
        if max_episode_steps == 0 {
            return Err(AppError::Config("max_episode_steps doit être > 0".to_string()));
        }

        Ok(Self {
            start: starts[0],
            state: starts[0],
            goal,
            cells,
            rows,
            cols,
            slippery,
            max_episode_steps,
            elapsed: 0,
        })
    }

    /// Carte 4x4 classique, épisodes tronqués à 100 pas.
    pub fn classic(slippery: bool) -> Result<Self> {
        Self::from_layout(&CLASSIC_4X4, slippery, 100)
    }

    fn is_terminal(&self, state: usize) -> bool {
        matches!(self.cells[state], CellType::Hole | CellType::Goal)
    }

    fn move_from(&self, state: usize, direction: usize) -> usize {
        let (mut row, mut col) = (state / self.cols, state % self.cols);
        match direction {
            LEFT => col = col.saturating_sub(1),
            DOWN => row = (row + 1).min(self.rows - 1),
            RIGHT => col = (col + 1).min(self.cols - 1),
            UP => row = row.saturating_sub(1),
            _ => {}
        }
        row * self.cols + col
    }
}

impl Environment for FrozenLake {
    fn state_count(&self) -> usize {
        self.cells.len()
    }

    fn action_count(&self) -> usize {
        ACTION_COUNT
    }

    fn goal_state(&self) -> usize {
        self.goal
    }

    fn reset(&mut self, _rng: &mut StdRng) -> Result<usize> {
        self.state = self.start;
        self.elapsed = 0;
        Ok(self.state)
    }

    fn step(&mut self, action: usize, rng: &mut StdRng) -> Result<Transition> {
        if action >= ACTION_COUNT {
            return Err(AppError::Environment(format!(
                "action {} hors de l'espace [0, {}]",
                action,
                ACTION_COUNT - 1
            )));
        }

        // Épisode déjà terminé : on reste sur place
        if self.is_terminal(self.state) {
            return Ok(Transition {
                next_state: self.state,
                reward: 0.0,
                done: true,
            });
        }

        let direction = if self.slippery {
            // Voulue, ou l'une des deux perpendiculaires
            match rng.random_range(0..3) {
                0 => (action + ACTION_COUNT - 1) % ACTION_COUNT,
                1 => action,
                _ => (action + 1) % ACTION_COUNT,
            }
        } else {
            action
        };

        self.state = self.move_from(self.state, direction);
        self.elapsed += 1;

        let reward = if self.cells[self.state] == CellType::Goal {
            1.0
        } else {
            0.0
        };
        let truncated = self.elapsed >= self.max_episode_steps;

        Ok(Transition {
            next_state: self.state,
            reward,
            done: self.is_terminal(self.state) || truncated,
        })
    }

    fn cell_type(&self, state: usize) -> CellType {
        self.cells.get(state).copied().unwrap_or(CellType::Frozen)
    }

    fn elapsed_steps(&self) -> usize {
        self.elapsed
    }

    fn columns(&self) -> usize {
        self.cols
    }
}
