use crate::utils::error::{AppError, Result};
use std::env;
use std::str::FromStr;

/// Récupère une variable d'environnement (Requis).
/// Renvoie une erreur explicite si la clé est manquante.
pub fn get(key: &str) -> Result<String> {
    env::var(key)
        .map_err(|_| AppError::Config(format!("Variable d'environnement manquante : {}", key)))
}

/// Récupère une variable d'environnement (Optionnel).
pub fn get_optional(key: &str) -> Option<String> {
    env::var(key).ok()
}

/// Récupère et parse une variable (ex: LAKESWARM_SEED=7).
pub fn get_parsed<T: FromStr>(key: &str) -> Result<T> {
    let val = get(key)?;
    val.trim()
        .parse::<T>()
        .map_err(|_| AppError::Config(format!("Impossible de parser la variable : {}", key)))
}

/// Comme `get_parsed`, mais une variable absente n'est pas une erreur.
pub fn get_parsed_optional<T: FromStr>(key: &str) -> Result<Option<T>> {
    match get_optional(key) {
        Some(_) => get_parsed(key).map(Some),
        None => Ok(None),
    }
}
