//! Tests de scénarios : suites de touches complètes, comme au doigt.
//!
//! Chaque scénario passe par le contrôleur (donc par l’accumulateur ET l’évaluateur)
//! et vérifie ce que la surface d’affichage a reçu.

use super::accumulateur::{Mode, Operateur};
use super::{Controleur, SurfaceAffichage, Touche};

#[derive(Default)]
struct Ecran {
    expression: String,
    resultat: String,
}

impl SurfaceAffichage for Ecran {
    fn expression_modifiee(&mut self, texte: &str) {
        self.expression = texte.to_string();
    }
    fn resultat_modifie(&mut self, texte: &str) {
        self.resultat = texte.to_string();
    }
}

fn calculatrice() -> Controleur<Ecran> {
    Controleur::new(Ecran::default())
}

fn taper(ctrl: &mut Controleur<Ecran>, touches: &str) {
    for c in touches.chars() {
        let t = Touche::depuis_caractere(c).unwrap_or_else(|| panic!("touche {c:?}"));
        ctrl.appuyer(t);
    }
}

fn ecran(ctrl: &Controleur<Ecran>) -> (&str, &str) {
    let s = ctrl.surface();
    (s.expression.as_str(), s.resultat.as_str())
}

/* ------------------------ Reprise après résultat ------------------------ */

#[test]
fn scn_operateur_continue_depuis_le_resultat() {
    let mut c = calculatrice();
    taper(&mut c, "5+5=");
    assert_eq!(ecran(&c), ("5+5", "10.0"));

    taper(&mut c, "+");
    assert_eq!(ecran(&c).0, "10+");

    taper(&mut c, "2=");
    assert_eq!(ecran(&c), ("10+2", "12.0"));
}

#[test]
fn scn_chiffre_apres_resultat_nouvelle_expression() {
    let mut c = calculatrice();
    taper(&mut c, "5+5=3");
    assert_eq!(ecran(&c).0, "3");
}

#[test]
fn scn_egal_repete_reevalue_la_meme_expression() {
    let mut c = calculatrice();
    taper(&mut c, "2*3==");
    assert_eq!(ecran(&c), ("2*3", "6.0"));
    assert_eq!(c.accumulateur().graine(), Some(6.0));
}

/* ------------------------ Garde opérateur ------------------------ */

#[test]
fn scn_operateur_repete_idempotent() {
    for op in ["+", "-", "*", "/"] {
        let mut une = calculatrice();
        taper(&mut une, &format!("8{op}"));

        let mut deux = calculatrice();
        taper(&mut deux, &format!("8{op}{op}"));

        assert_eq!(ecran(&une).0, ecran(&deux).0, "op={op}");
    }
}

#[test]
fn scn_operateur_au_demarrage_refuse() {
    let mut c = calculatrice();
    taper(&mut c, "*");
    assert_eq!(c.accumulateur().expression(), "");
    taper(&mut c, "(-2)*3=");
    assert_eq!(ecran(&c).1, "-6.0");
}

/* ------------------------ ± et % ------------------------ */

#[test]
fn scn_inversion_signe() {
    let mut c = calculatrice();
    taper(&mut c, "7");
    c.appuyer(Touche::InverserSigne);
    assert_eq!(ecran(&c).0, "-7");
    c.appuyer(Touche::InverserSigne);
    assert_eq!(ecran(&c).0, "7");
}

#[test]
fn scn_inversion_apres_operateur_sans_effet() {
    let mut c = calculatrice();
    taper(&mut c, "5+");
    c.appuyer(Touche::InverserSigne);
    assert_eq!(ecran(&c), ("5+", ""));
    assert_eq!(c.accumulateur().mode(), Mode::ApresOperateur);
}

#[test]
fn scn_inversion_puis_calcul() {
    let mut c = calculatrice();
    taper(&mut c, "3");
    c.appuyer(Touche::InverserSigne);
    taper(&mut c, "*4=");
    assert_eq!(ecran(&c), ("-3*4", "-12.0"));
}

#[test]
fn scn_pourcentage() {
    let mut c = calculatrice();
    taper(&mut c, "50%");
    assert_eq!(ecran(&c).0, "0.5");
    taper(&mut c, "*8=");
    assert_eq!(ecran(&c).1, "4.0");
}

/* ------------------------ Erreurs et reprise ------------------------ */

#[test]
fn scn_erreurs_affichent_error() {
    for expr in ["10/0=", "2*(3+4=", "3.5.2=", "5*=", ")="] {
        let mut c = calculatrice();
        taper(&mut c, expr);
        assert_eq!(ecran(&c).1, "Error", "expr={expr:?}");
    }

    let mut c = calculatrice();
    c.appuyer(Touche::Egal);
    assert_eq!(ecran(&c).1, "Error");
}

#[test]
fn scn_correction_apres_erreur() {
    let mut c = calculatrice();
    taper(&mut c, "2*(3+4=");
    assert_eq!(ecran(&c).1, "Error");

    // le tampon est intact : on complète et on recommence
    taper(&mut c, ")=");
    assert_eq!(ecran(&c), ("2*(3+4)", "14.0"));
}

#[test]
fn scn_operateur_apres_erreur_continue_le_tampon() {
    let mut c = calculatrice();
    taper(&mut c, "1/0=");
    c.appuyer(Touche::Effacer);
    taper(&mut c, "2+1=");
    assert_eq!(ecran(&c), ("1/2+1", "1.5"));
}

#[test]
fn scn_tout_effacer_remet_a_zero() {
    let mut c = calculatrice();
    taper(&mut c, "9/0=");
    c.appuyer(Touche::ToutEffacer);
    assert_eq!(ecran(&c), ("", "0"));
    assert_eq!(c.accumulateur().mode(), Mode::Saisie);

    c.appuyer(Touche::Operateur(Operateur::Plus));
    assert_eq!(ecran(&c).0, "");
}

#[test]
fn scn_effacer_dernier() {
    let mut c = calculatrice();
    taper(&mut c, "123");
    c.appuyer(Touche::Effacer);
    assert_eq!(ecran(&c).0, "12");
    c.appuyer(Touche::Effacer);
    c.appuyer(Touche::Effacer);
    c.appuyer(Touche::Effacer);
    assert_eq!(ecran(&c).0, "");
}

/* ------------------------ Précédence bout à bout ------------------------ */

#[test]
fn scn_precedence() {
    let cas = [
        ("2+3*4=", "14.0"),
        ("(2+3)*4=", "20.0"),
        ("10-4-3=", "3.0"),
        ("100/10/5=", "2.0"),
        ("2(3+1)=", "8.0"),
        ("0.1+0.2=", "0.30000000000000004"),
    ];
    for (touches, attendu) in cas {
        let mut c = calculatrice();
        taper(&mut c, touches);
        assert_eq!(ecran(&c).1, attendu, "touches={touches:?}");
    }
}
