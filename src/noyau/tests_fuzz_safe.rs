//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler accumulateur + évaluateur sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - longueur de séquence bornée
//! - budget temps global
//! - invariants clés, vérifiés après CHAQUE touche :
//!   - jamais deux opérateurs binaires consécutifs dans le tampon
//!   - une graine est toujours finie
//!   - hors résultat affiché, le mode correspond au dernier caractère utile
//!   - AC remet toujours à zéro

use std::time::{Duration, Instant};

use super::accumulateur::{Mode, Operateur};
use super::erreur::ErreurEval;
use super::{eval_expression, Controleur, SurfaceAffichage, Touche};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Surface muette ------------------------ */

#[derive(Default)]
struct Compteur {
    resultats_ok: usize,
    resultats_err: usize,
}

impl SurfaceAffichage for Compteur {
    fn expression_modifiee(&mut self, _texte: &str) {}
    fn resultat_modifie(&mut self, texte: &str) {
        if texte == "Error" {
            self.resultats_err += 1;
        } else {
            self.resultats_ok += 1;
        }
    }
}

/* ------------------------ Génération de touches ------------------------ */

fn gen_touche(rng: &mut Rng) -> Touche {
    // pondéré : beaucoup de chiffres, quelques opérateurs, rarement AC
    match rng.pick(20) {
        0..=7 => Touche::Chiffre(char::from(b'0' + rng.pick(10) as u8)),
        8 => Touche::Point,
        9 => Touche::Operateur(Operateur::Plus),
        10 => Touche::Operateur(Operateur::Moins),
        11 => Touche::Operateur(Operateur::Fois),
        12 => Touche::Operateur(Operateur::Divise),
        13 => Touche::ParentheseOuvrante,
        14 => Touche::ParentheseFermante,
        15 => Touche::InverserSigne,
        16 => Touche::Pourcentage,
        17 => Touche::Egal,
        18 => Touche::Effacer,
        _ => {
            if rng.pick(4) == 0 {
                Touche::ToutEffacer
            } else {
                Touche::Egal
            }
        }
    }
}

fn est_operateur(c: char) -> bool {
    matches!(c, '+' | '-' | '*' | '/')
}

fn check_invariants(ctrl: &Controleur<Compteur>, derniere: Touche) {
    let acc = ctrl.accumulateur();
    let texte = acc.expression();

    let chars: Vec<char> = texte.chars().collect();
    for w in chars.windows(2) {
        assert!(
            !(est_operateur(w[0]) && est_operateur(w[1])),
            "deux opérateurs consécutifs: {texte:?} (après {derniere:?})"
        );
    }

    match acc.mode() {
        Mode::ResultatAffiche { graine } => {
            assert!(graine.is_finite(), "graine non finie: {graine}");
        }
        mode => {
            let utile = texte.chars().rev().find(|&c| c != '(' && c != ')');
            let attendu = if utile.is_some_and(est_operateur) {
                Mode::ApresOperateur
            } else {
                Mode::Saisie
            };
            assert_eq!(mode, attendu, "mode incohérent pour {texte:?}");
        }
    }

    if derniere == Touche::ToutEffacer {
        assert_eq!(texte, "");
        assert_eq!(acc.mode(), Mode::Saisie);
    }
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_sequences_de_touches() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xC0FFEE_u64);
    let mut ctrl = Controleur::new(Compteur::default());

    for _ in 0..5_000 {
        budget(t0, max);

        let t = gen_touche(&mut rng);
        ctrl.appuyer(t);
        check_invariants(&ctrl, t);
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    let s = ctrl.surface();
    assert!(s.resultats_ok > 10, "trop peu de succès: {}", s.resultats_ok);
    assert!(s.resultats_err > 0, "aucune erreur vue: fuzz trop “sage”");
}

#[test]
fn fuzz_safe_determinisme() {
    fn rejouer(seed: u64) -> (String, usize, usize) {
        let mut rng = Rng::new(seed);
        let mut ctrl = Controleur::new(Compteur::default());
        for _ in 0..800 {
            ctrl.appuyer(gen_touche(&mut rng));
        }
        let s = ctrl.surface();
        (
            ctrl.accumulateur().expression().to_string(),
            s.resultats_ok,
            s.resultats_err,
        )
    }

    assert_eq!(rejouer(0xBADC0DE), rejouer(0xBADC0DE));
}

#[test]
fn fuzz_safe_evaluateur_ne_panique_pas() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    let alphabet: Vec<char> = "0123456789.+-*/() ".chars().collect();
    let mut rng = Rng::new(0x5EED_u64);

    for _ in 0..2_000 {
        budget(t0, max);

        let n = rng.pick(24) as usize;
        let s: String = (0..n)
            .map(|_| alphabet[rng.pick(alphabet.len() as u32) as usize])
            .collect();

        match eval_expression(&s) {
            Ok(v) => assert!(v.is_finite(), "expr={s:?} v={v}"),
            Err(ErreurEval::ExpressionVide) => assert!(s.trim().is_empty(), "expr={s:?}"),
            Err(_) => {}
        }
    }
}

#[test]
fn fuzz_safe_parentheses_profondes() {
    // profondeur 2000 : la RPN est itérative, pas de débordement de pile
    let n = 2_000;
    let expr = format!("{}1{}", "(".repeat(n), ")".repeat(n));
    assert_eq!(eval_expression(&expr), Ok(1.0));

    let expr = format!("{}1{}", "(".repeat(n), ")".repeat(n - 1));
    assert_eq!(
        eval_expression(&expr),
        Err(ErreurEval::ParenthesesDesequilibrees)
    );
}
