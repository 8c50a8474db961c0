// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> valeur f64
// Objectif:
// - Convertir une suite de Tok en RPN (postfix), en validant la forme au passage
// - Puis évaluer la RPN sur une pile de f64
//
// Règles:
// - Précédence : Neg (3) > * / (2) > + - (1), gauche-associatif pour les binaires.
// - Moins/plus unaire:
//    - si '-' arrive quand on attend une valeur, il devient Tok::Neg (préfixe)
//    - un '+' dans la même position est ignoré
// - Multiplication implicite : "2(3)", "(2)(3)", "(2)3"
// - Les parenthèses sont vérifiées AVANT la syntaxe : "2*(3+4" est déséquilibrée,
//   pas une faute de syntaxe.

use super::erreur::ErreurEval;
use super::jetons::Tok;

fn precedence(t: &Tok) -> i32 {
    match t {
        Tok::Plus | Tok::Minus => 1,
        Tok::Star | Tok::Slash => 2,
        Tok::Neg => 3,
        _ => 0,
    }
}

/// Ce qui précède le jeton courant (sert au moins unaire et à la multiplication implicite).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Precedent {
    Debut,
    Operateur,
    ParOuvrante,
    Nombre,
    ParFermante,
}

impl Precedent {
    fn est_valeur(self) -> bool {
        matches!(self, Precedent::Nombre | Precedent::ParFermante)
    }
}

/// Profondeur jamais négative et nulle à la fin.
fn verifie_parentheses(tokens: &[Tok]) -> Result<(), ErreurEval> {
    let mut profondeur: usize = 0;
    for t in tokens {
        match t {
            Tok::LPar => profondeur += 1,
            Tok::RPar => {
                profondeur = profondeur
                    .checked_sub(1)
                    .ok_or(ErreurEval::ParenthesesDesequilibrees)?;
            }
            _ => {}
        }
    }
    if profondeur != 0 {
        return Err(ErreurEval::ParenthesesDesequilibrees);
    }
    Ok(())
}

/// Dépile les opérateurs de précédence >= à celle de `tok` (jusqu’à une '('),
/// puis empile `tok`.
fn pousse_binaire(tok: Tok, out: &mut Vec<Tok>, ops: &mut Vec<Tok>) {
    while let Some(top) = ops.last() {
        if matches!(top, Tok::LPar) || precedence(top) < precedence(&tok) {
            break;
        }
        if let Some(op) = ops.pop() {
            out.push(op);
        }
    }
    ops.push(tok);
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Num(2), Star, Minus, LPar, Num(3), Plus, Num(4), RPar]
///   rpn:    [Num(2), Num(3), Num(4), Plus, Neg, Star]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Tok>, ErreurEval> {
    verifie_parentheses(tokens)?;

    let mut out: Vec<Tok> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Tok> = Vec::new();
    let mut prec = Precedent::Debut;

    for &tok in tokens {
        match tok {
            Tok::Num(_) => {
                match prec {
                    Precedent::Nombre => return Err(ErreurEval::Syntaxe),
                    Precedent::ParFermante => pousse_binaire(Tok::Star, &mut out, &mut ops),
                    _ => {}
                }
                out.push(tok);
                prec = Precedent::Nombre;
            }

            Tok::LPar => {
                if prec.est_valeur() {
                    pousse_binaire(Tok::Star, &mut out, &mut ops);
                }
                ops.push(tok);
                prec = Precedent::ParOuvrante;
            }

            Tok::RPar => {
                // "()" ou "(2+)"
                if !prec.est_valeur() {
                    return Err(ErreurEval::Syntaxe);
                }
                loop {
                    match ops.pop() {
                        Some(Tok::LPar) => break,
                        Some(op) => out.push(op),
                        None => return Err(ErreurEval::ParenthesesDesequilibrees),
                    }
                }
                prec = Precedent::ParFermante;
            }

            Tok::Plus | Tok::Minus if !prec.est_valeur() => {
                // unaire
                if tok == Tok::Minus {
                    ops.push(Tok::Neg);
                }
                prec = Precedent::Operateur;
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash => {
                if !prec.est_valeur() {
                    return Err(ErreurEval::Syntaxe);
                }
                pousse_binaire(tok, &mut out, &mut ops);
                prec = Precedent::Operateur;
            }

            Tok::Neg => return Err(ErreurEval::Syntaxe),
        }
    }

    // opérateur final, ou rien que des signes
    if !prec.est_valeur() {
        return Err(ErreurEval::Syntaxe);
    }

    while let Some(op) = ops.pop() {
        if matches!(op, Tok::LPar) {
            return Err(ErreurEval::ParenthesesDesequilibrees);
        }
        out.push(op);
    }

    Ok(out)
}

/// Évalue une RPN sur une pile de f64.
///
/// Diviseur exactement nul => DivisionParZero (jamais d’infini silencieux).
pub fn eval_rpn(rpn: &[Tok]) -> Result<f64, ErreurEval> {
    let mut st: Vec<f64> = Vec::with_capacity(rpn.len());

    for &tok in rpn {
        match tok {
            Tok::Num(v) => st.push(v),

            Tok::Neg => {
                let x = st.pop().ok_or(ErreurEval::Syntaxe)?;
                st.push(-x);
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash => {
                let b = st.pop().ok_or(ErreurEval::Syntaxe)?;
                let a = st.pop().ok_or(ErreurEval::Syntaxe)?;

                let v = match tok {
                    Tok::Plus => a + b,
                    Tok::Minus => a - b,
                    Tok::Star => a * b,
                    _ => {
                        if b == 0.0 {
                            return Err(ErreurEval::DivisionParZero);
                        }
                        a / b
                    }
                };
                st.push(v);
            }

            Tok::LPar | Tok::RPar => return Err(ErreurEval::Syntaxe),
        }
    }

    match (st.pop(), st.is_empty()) {
        (Some(v), true) => Ok(v),
        _ => Err(ErreurEval::Syntaxe),
    }
}
