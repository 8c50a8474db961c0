// src/app.rs
//
// Calculatrice — module App (racine)
// ----------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
// - Router le clavier vers les mêmes touches que les boutons

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

use crate::noyau::Touche;

/// Traduit un événement clavier egui en touche de calculatrice.
fn touches_depuis_evenement(ev: &egui::Event) -> Vec<Touche> {
    match ev {
        egui::Event::Text(t) => t.chars().filter_map(Touche::depuis_caractere).collect(),
        egui::Event::Key {
            key, pressed: true, ..
        } => match key {
            egui::Key::Enter => vec![Touche::Egal],
            egui::Key::Backspace => vec![Touche::Effacer],
            egui::Key::Escape => vec![Touche::ToutEffacer],
            _ => Vec::new(),
        },
        _ => Vec::new(),
    }
}

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Pas de champ texte : tout le clavier va au pavé.
        let touches: Vec<Touche> = ctx.input(|i| {
            i.events
                .iter()
                .flat_map(touches_depuis_evenement)
                .collect()
        });
        for t in touches {
            self.appuyer(t);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });
    }
}
