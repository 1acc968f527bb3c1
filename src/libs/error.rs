//! Typed validation errors for user input.
//!
//! Commands convert them into `anyhow::Error` with `?`; `main` prints the
//! French message prefixed with ❌.

use thiserror::Error;

/// Rejected user input. The messages are shown as-is to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("La quantité est invalide")]
    InvalidQuantity,
    #[error("La date doit être remplie")]
    MissingDate,
    #[error("L'heure doit être remplie")]
    MissingTime,
    #[error("La date est invalide")]
    InvalidDate,
    #[error("Le format doit être hh:mm")]
    InvalidTimeFormat,
    #[error("La date doit être dans le passé")]
    NotInPast,
    #[error("La description est obligatoire")]
    MissingDescription,
    #[error("La description doit faire moins de {max} caractères")]
    DescriptionTooLong { max: usize },
    #[error("La date de fin doit être après la date de début")]
    EndBeforeStart,
    #[error("Le nom est obligatoire")]
    MissingName,
    #[error("Fuseau horaire inconnu : {0}")]
    UnknownTimezone(String),
}
