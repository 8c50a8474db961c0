//! Noyau — accumulateur d’expression (machine à états).
//!
//! Rôle : filtrer chaque touche selon l’état courant et produire le nouveau texte.
//! Toute mutation du tampon passe par une des transitions nommées ci-dessous.
//!
//! Table des transitions (`Mode`) :
//!
//! | transition            | Saisie            | ApresOperateur     | ResultatAffiche { graine }        |
//! |-----------------------|-------------------|--------------------|-----------------------------------|
//! | ajouter_chiffre       | += c -> Saisie    | += c -> Saisie     | vide, += c -> Saisie              |
//! | ajouter_operateur     | += op -> ApresOp  | refusé (silence)   | graine, += op -> ApresOp          |
//! | ajouter_parenthese    | += p (inchangé)   | += p (inchangé)    | vide, += p -> Saisie              |
//! | inverser_signe / %    | nombre -> Saisie  | sans effet         | graine, nombre -> Saisie          |
//! | valider (ok)          | -> ResultatAffiche{v}                                                      |
//! | valider (échec)       | inchangé          | inchangé           | -> mode déduit du texte           |
//! | effacer_dernier       | pop -> mode déduit| pop -> mode déduit | pop (inchangé)                    |
//! | tout_effacer          | vide -> Saisie                                                             |
//!
//! Un opérateur est aussi refusé sur tampon vide.
//!
//! "Mode déduit" : ApresOperateur si le dernier caractère hors parenthèses est un
//! opérateur, Saisie sinon. C’est exactement le mode que la frappe aurait produit,
//! donc deux opérateurs ne se suivent jamais dans le tampon.

use super::erreur::ErreurEval;
use super::eval::{eval_expression, Issue};
use super::format::{format_canonique, lire_canonique, AFFICHAGE_ZERO};

/// Les quatre opérateurs binaires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
}

impl Operateur {
    /// Caractère écrit dans le tampon (relu par le tokenizer).
    pub fn symbole(self) -> char {
        match self {
            Operateur::Plus => '+',
            Operateur::Moins => '-',
            Operateur::Fois => '*',
            Operateur::Divise => '/',
        }
    }

    /// Libellé du bouton.
    pub fn libelle(self) -> &'static str {
        match self {
            Operateur::Plus => "+",
            Operateur::Moins => "−",
            Operateur::Fois => "×",
            Operateur::Divise => "÷",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Parenthese {
    Ouvrante,
    Fermante,
}

impl Parenthese {
    pub fn symbole(self) -> char {
        match self {
            Parenthese::Ouvrante => '(',
            Parenthese::Fermante => ')',
        }
    }
}

/// État explicite : remplace les deux booléens "dernier = opérateur" et
/// "résultat affiché", dont la combinaison (vrai, vrai) n’a pas de sens.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Mode {
    /// Saisie libre (tampon vide ou en cours d’édition).
    Saisie,
    /// Un opérateur binaire vient d’être ajouté : un second est refusé.
    ApresOperateur,
    /// Un résultat vient d’être affiché ; `graine` amorce la suite.
    ResultatAffiche { graine: f64 },
}

#[derive(Clone, Debug)]
pub struct Accumulateur {
    expression: String,
    mode: Mode,
}

impl Default for Accumulateur {
    fn default() -> Self {
        Self {
            expression: String::new(),
            mode: Mode::Saisie,
        }
    }
}

impl Accumulateur {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Valeur du dernier résultat tant qu’il est affiché.
    pub fn graine(&self) -> Option<f64> {
        match self.mode {
            Mode::ResultatAffiche { graine } => Some(graine),
            _ => None,
        }
    }

    /* ------------------------ Transitions ------------------------ */

    /// Chiffre 0-9 ou point décimal.
    ///
    /// Après un résultat, on repart d’un tampon vide (le résultat n’est PAS repris).
    /// Aucun contrôle du second point ici : l’évaluateur le refusera.
    pub fn ajouter_chiffre(&mut self, c: char) -> &str {
        if !(c.is_ascii_digit() || c == '.') {
            tracing::warn!(caractere = %c, "ajouter_chiffre: caractère ignoré");
            return &self.expression;
        }

        self.quitter_resultat_pour_nouvelle_saisie();
        self.expression.push(c);
        self.mode = Mode::Saisie;
        &self.expression
    }

    /// Opérateur binaire, avec garde anti double opérateur.
    pub fn ajouter_operateur(&mut self, op: Operateur) -> &str {
        if self.expression.is_empty() || self.mode == Mode::ApresOperateur {
            tracing::debug!(op = %op.symbole(), mode = ?self.mode, "opérateur refusé");
            return &self.expression;
        }

        if let Mode::ResultatAffiche { graine } = self.mode {
            // on continue le calcul à partir du résultat affiché
            self.expression = format_canonique(graine);
        }

        self.expression.push(op.symbole());
        self.mode = Mode::ApresOperateur;
        &self.expression
    }

    /// Parenthèse : ajout brut, la garde d’opérateur n’est ni posée ni levée.
    pub fn ajouter_parenthese(&mut self, p: Parenthese) -> &str {
        self.quitter_resultat_pour_nouvelle_saisie();
        self.expression.push(p.symbole());
        &self.expression
    }

    /// ± : le tampon entier doit être un nombre nu.
    pub fn inverser_signe(&mut self) -> Result<&str, ErreurEval> {
        self.remplacer_nombre("inverser_signe", |v| -v)
    }

    /// % : le tampon entier doit être un nombre nu, divisé par 100.
    pub fn appliquer_pourcentage(&mut self) -> Result<&str, ErreurEval> {
        self.remplacer_nombre("appliquer_pourcentage", |v| v / 100.0)
    }

    /// "=" : évalue le tampon. Le texte n’est jamais modifié ici.
    pub fn valider(&mut self) -> Issue {
        let issue = eval_expression(&self.expression);

        match issue {
            Ok(v) => {
                tracing::debug!(expression = %self.expression, resultat = v, "évaluation");
                self.mode = Mode::ResultatAffiche { graine: v };
            }
            Err(e) => {
                tracing::debug!(expression = %self.expression, erreur = %e, "évaluation échouée");
                if matches!(self.mode, Mode::ResultatAffiche { .. }) {
                    self.mode = self.mode_deduit();
                }
            }
        }

        issue
    }

    /// C : retire le dernier caractère.
    ///
    /// Un résultat affiché le reste ; sinon la garde d’opérateur suit le texte restant.
    pub fn effacer_dernier(&mut self) -> &str {
        self.expression.pop();
        if !matches!(self.mode, Mode::ResultatAffiche { .. }) {
            self.mode = self.mode_deduit();
        }
        &self.expression
    }

    /// AC : tout remettre à zéro. Renvoie le texte du zéro affiché.
    pub fn tout_effacer(&mut self) -> &'static str {
        self.expression.clear();
        self.mode = Mode::Saisie;
        AFFICHAGE_ZERO
    }

    /* ------------------------ Interne ------------------------ */

    fn mode_deduit(&self) -> Mode {
        let dernier = self
            .expression
            .chars()
            .rev()
            .find(|&c| c != '(' && c != ')');
        match dernier {
            Some('+' | '-' | '*' | '/') => Mode::ApresOperateur,
            _ => Mode::Saisie,
        }
    }

    fn quitter_resultat_pour_nouvelle_saisie(&mut self) {
        if matches!(self.mode, Mode::ResultatAffiche { .. }) {
            self.expression.clear();
            self.mode = Mode::Saisie;
        }
    }

    /// ± et % : même garde, même échec (tampon non numérique => Syntaxe,
    /// nombre hors double précision => ResultatNonFini ; tampon intact dans les deux cas).
    fn remplacer_nombre(
        &mut self,
        nom: &'static str,
        f: impl Fn(f64) -> f64,
    ) -> Result<&str, ErreurEval> {
        if self.expression.is_empty() || self.mode == Mode::ApresOperateur {
            tracing::debug!(operation = nom, mode = ?self.mode, "sans effet");
            return Ok(&self.expression);
        }

        let courant = match self.mode {
            Mode::ResultatAffiche { graine } => graine,
            _ => lire_canonique(&self.expression).ok_or_else(|| {
                tracing::debug!(operation = nom, expression = %self.expression, "pas un nombre nu");
                ErreurEval::Syntaxe
            })?,
        };

        // un nombre trop long pour un f64 se lit comme ±inf : jamais réécrit dans le tampon
        let nouveau = f(courant);
        if !courant.is_finite() || !nouveau.is_finite() {
            tracing::debug!(operation = nom, expression = %self.expression, "nombre non fini");
            return Err(ErreurEval::ResultatNonFini);
        }

        self.expression = format_canonique(nouveau);
        self.mode = Mode::Saisie;
        Ok(&self.expression)
    }
}
