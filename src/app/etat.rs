//! src/app/etat.rs
//!
//! État UI (sans rendu).
//!
//! Rôle : contenir ce que l’écran montre (expression + résultat) et brancher
//! le contrôleur du noyau dessus.
//!
//! Contrats :
//! - Aucune évaluation ici : tout passe par `Controleur::appuyer`.
//! - L’écran ne fait que recevoir les notifications (`SurfaceAffichage`).

use crate::noyau::erreur::LIBELLE_ERREUR;
use crate::noyau::format::AFFICHAGE_ZERO;
use crate::noyau::{Controleur, SurfaceAffichage, Touche};

/// Les deux lignes de l’écran.
#[derive(Clone, Debug)]
pub struct Ecran {
    pub expression: String,
    pub resultat: String,
}

impl Default for Ecran {
    fn default() -> Self {
        Self {
            expression: String::new(),
            resultat: AFFICHAGE_ZERO.to_string(), // au démarrage : "0"
        }
    }
}

impl Ecran {
    pub fn en_erreur(&self) -> bool {
        self.resultat == LIBELLE_ERREUR
    }
}

impl SurfaceAffichage for Ecran {
    fn expression_modifiee(&mut self, texte: &str) {
        self.expression.clear();
        self.expression.push_str(texte);
    }

    fn resultat_modifie(&mut self, texte: &str) {
        self.resultat.clear();
        self.resultat.push_str(texte);
    }
}

pub struct AppCalc {
    calc: Controleur<Ecran>,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            calc: Controleur::new(Ecran::default()),
        }
    }
}

impl AppCalc {
    /* ------------------------ Actions “boutons” ------------------------ */

    /// Toute touche (bouton ou clavier) arrive ici.
    pub fn appuyer(&mut self, touche: Touche) {
        self.calc.appuyer(touche);
    }

    pub fn ecran(&self) -> &Ecran {
        self.calc.surface()
    }
}
