//! Noyau de la calculatrice (sans vue)
//!
//! Organisation interne :
//! - erreur.rs       : échecs typés + libellé "Error"
//! - jetons.rs       : tokenisation
//! - rpn.rs          : shunting-yard + évaluation de la RPN (f64)
//! - format.rs       : forme résultat ("7.0") et forme canonique ("7")
//! - eval.rs         : pipeline complet (fonction pure)
//! - accumulateur.rs : machine à états de la saisie
//! - controleur.rs   : touches + notifications vers la surface d’affichage

pub mod accumulateur;
pub mod controleur;
pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod rpn;

#[cfg(test)]
mod tests_scenarios;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use controleur::{Controleur, SurfaceAffichage, Touche};
pub use eval::eval_expression;
