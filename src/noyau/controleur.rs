//! Noyau — contrôleur : touches -> accumulateur -> surface d’affichage.
//!
//! Le noyau ne connaît la surface qu’à travers `SurfaceAffichage` :
//! pas de rendu, pas de taille de police, pas d’alignement ici.

use super::accumulateur::{Accumulateur, Operateur, Parenthese};
use super::format::format_resultat;

/// Collaborateur externe (vue) prévenu à chaque changement d’état.
pub trait SurfaceAffichage {
    fn expression_modifiee(&mut self, texte: &str);
    fn resultat_modifie(&mut self, texte: &str);
}

/// Une touche physique ou virtuelle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Touche {
    /// '0'..='9'
    Chiffre(char),
    Point,
    Operateur(Operateur),
    ParentheseOuvrante,
    ParentheseFermante,
    InverserSigne,
    Pourcentage,
    Egal,
    /// C
    Effacer,
    /// AC
    ToutEffacer,
}

impl Touche {
    /// Correspondance clavier -> touche (None si caractère sans bouton).
    pub fn depuis_caractere(c: char) -> Option<Touche> {
        let t = match c {
            '0'..='9' => Touche::Chiffre(c),
            '.' => Touche::Point,
            '+' => Touche::Operateur(Operateur::Plus),
            '-' | '−' => Touche::Operateur(Operateur::Moins),
            '*' | '×' => Touche::Operateur(Operateur::Fois),
            '/' | '÷' => Touche::Operateur(Operateur::Divise),
            '(' => Touche::ParentheseOuvrante,
            ')' => Touche::ParentheseFermante,
            '%' => Touche::Pourcentage,
            // Entrée : egui l’envoie en Key::Enter ; '\n'/'\r' servent aux appelants hors egui
            // (texte collé, scripts de test).
            '=' | '\n' | '\r' => Touche::Egal,
            _ => return None,
        };
        Some(t)
    }
}

pub struct Controleur<S: SurfaceAffichage> {
    accu: Accumulateur,
    surface: S,
    // dernier texte envoyé : une touche refusée ne notifie rien
    expression_notifiee: String,
}

impl<S: SurfaceAffichage> Controleur<S> {
    pub fn new(surface: S) -> Self {
        Self {
            accu: Accumulateur::new(),
            surface,
            expression_notifiee: String::new(),
        }
    }

    pub fn accumulateur(&self) -> &Accumulateur {
        &self.accu
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Point d’entrée unique : une touche, une transition.
    pub fn appuyer(&mut self, touche: Touche) {
        tracing::trace!(?touche, "touche");

        match touche {
            Touche::Chiffre(c) => {
                self.accu.ajouter_chiffre(c);
            }
            Touche::Point => {
                self.accu.ajouter_chiffre('.');
            }
            Touche::Operateur(op) => {
                self.accu.ajouter_operateur(op);
            }
            Touche::ParentheseOuvrante => {
                self.accu.ajouter_parenthese(Parenthese::Ouvrante);
            }
            Touche::ParentheseFermante => {
                self.accu.ajouter_parenthese(Parenthese::Fermante);
            }
            Touche::InverserSigne => {
                if let Err(e) = self.accu.inverser_signe() {
                    self.surface.resultat_modifie(e.libelle());
                }
            }
            Touche::Pourcentage => {
                if let Err(e) = self.accu.appliquer_pourcentage() {
                    self.surface.resultat_modifie(e.libelle());
                }
            }
            Touche::Egal => {
                let texte = match self.accu.valider() {
                    Ok(v) => format_resultat(v),
                    Err(e) => e.libelle().to_string(),
                };
                self.surface.resultat_modifie(&texte);
            }
            Touche::Effacer => {
                self.accu.effacer_dernier();
            }
            Touche::ToutEffacer => {
                let zero = self.accu.tout_effacer();
                self.surface.resultat_modifie(zero);
            }
        }

        self.notifier_expression();
    }

    fn notifier_expression(&mut self) {
        let courant = self.accu.expression();
        if courant != self.expression_notifiee {
            self.expression_notifiee.clear();
            self.expression_notifiee.push_str(courant);
            self.surface.expression_modifiee(courant);
        }
    }
}
