//! Noyau — échecs typés d’évaluation.
//!
//! Toutes les erreurs sont récupérables : l’accumulateur les attrape et la
//! surface d’affichage ne montre que `LIBELLE_ERREUR`.

use thiserror::Error;

/// Libellé unique montré à l’utilisateur, quelle que soit la cause.
pub const LIBELLE_ERREUR: &str = "Error";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ErreurEval {
    /// Entrée vide (ou seulement des espaces).
    #[error("entrée vide")]
    ExpressionVide,

    /// Suite de jetons mal formée : opérateurs adjacents, opérateur final,
    /// opérande manquante, nombre mal écrit, caractère inconnu.
    #[error("erreur de syntaxe")]
    Syntaxe,

    /// '(' jamais fermée, ou ')' sans '(' correspondante.
    #[error("parenthèses déséquilibrées")]
    ParenthesesDesequilibrees,

    /// Diviseur exactement égal à zéro.
    #[error("division par zéro")]
    DivisionParZero,

    /// Dépassement de la double précision (±∞ ou NaN).
    #[error("résultat non fini")]
    ResultatNonFini,
}

impl ErreurEval {
    /// Texte destiné à l’écran (toujours le même libellé).
    pub fn libelle(&self) -> &'static str {
        LIBELLE_ERREUR
    }
}
