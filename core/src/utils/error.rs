// FICHIER : core/src/utils/error.rs

use std::io;

/// Type de résultat standard de l'optimiseur.
pub type Result<T> = std::result::Result<T, AppError>;

/// Enumération centrale des erreurs.
/// Les échecs de lookup pendant une simulation ne remontent jamais ici :
/// ils sont rattrapés localement par l'évaluateur.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Erreur de configuration : {0}")]
    Config(String),

    /// Précondition violée (population vide, dimensions incohérentes...).
    #[error("Entrée invalide : {0}")]
    MalformedInput(String),

    /// L'adaptateur d'environnement a échoué : état inconnu, on s'arrête.
    #[error("Erreur de l'environnement : {0}")]
    Environment(String),

    #[error("Erreur d'entrée/sortie : {0}")]
    Io(#[from] io::Error),

    #[error("Erreur de sérialisation : {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Erreur Système : {0}")]
    System(#[from] anyhow::Error),
}

impl AppError {
    pub fn malformed(msg: impl Into<String>) -> Self {
        AppError::MalformedInput(msg.into())
    }
}

// Permet de faire : return Err("Mon erreur".into());
impl From<String> for AppError {
    fn from(s: String) -> Self {
        AppError::System(anyhow::anyhow!(s))
    }
}

impl From<&str> for AppError {
    fn from(s: &str) -> Self {
        AppError::System(anyhow::anyhow!(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_display_formatting() {
        let err = AppError::Config("Fichier manquant".to_string());
        assert_eq!(err.to_string(), "Erreur de configuration : Fichier manquant");

        let err = AppError::malformed("population vide");
        assert_eq!(err.to_string(), "Entrée invalide : population vide");
    }

    #[test]
    fn test_from_io_error() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "config absente");
        let app_err: AppError = io_err.into();

        match app_err {
            AppError::Io(e) => assert!(e.to_string().contains("config absente")),
            _ => panic!("Devrait être converti en AppError::Io"),
        }
    }

    #[test]
    fn test_from_string_helpers() {
        let err_string: AppError = String::from("Erreur string").into();
        match err_string {
            AppError::System(e) => assert_eq!(e.to_string(), "Erreur string"),
            _ => panic!("String devrait devenir AppError::System"),
        }

        let err_str: AppError = "Erreur str".into();
        assert!(matches!(err_str, AppError::System(_)));
    }

    #[test]
    fn test_from_serde_error() {
        let serde_err = serde_json::from_str::<serde_json::Value>("{ invalid json }").unwrap_err();
        let app_err: AppError = serde_err.into();

        match app_err {
            AppError::Serialization(e) => assert!(e.is_syntax()),
            _ => panic!("Devrait être converti en AppError::Serialization"),
        }
    }
}
