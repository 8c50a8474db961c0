//! Noyau — évaluation (pipeline réel)
//!
//! texte -> jetons -> RPN (validation) -> pile f64 -> contrôle "fini"
//!
//! Fonction pure : aucun état conservé d’un appel à l’autre.

use super::erreur::ErreurEval;
use super::jetons::{format_tokens, tokenize};
use super::rpn::{eval_rpn, to_rpn};

/// Issue d’une évaluation : un nombre double précision ou un échec typé.
pub type Issue = Result<f64, ErreurEval>;

/// API publique : évalue une expression infixe (+ - * /, parenthèses, moins unaire).
pub fn eval_expression(expr_str: &str) -> Issue {
    let s = expr_str.trim();
    if s.is_empty() {
        return Err(ErreurEval::ExpressionVide);
    }

    // 1) Jetons
    let jetons = tokenize(s)?;

    // 2) RPN
    let rpn = to_rpn(&jetons)?;
    tracing::trace!(jetons = %format_tokens(&jetons), rpn = %format_tokens(&rpn), "RPN");

    // 3) Valeur
    let v = eval_rpn(&rpn)?;
    if !v.is_finite() {
        return Err(ErreurEval::ResultatNonFini);
    }

    Ok(v)
}
