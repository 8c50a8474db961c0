// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Écran deux lignes : expression (petite) + résultat (grand, aligné à droite)
// - Le résultat rétrécit pour tenir sur une ligne (TAILLE_MAX -> TAILLE_MIN)
// - Pavé type téléphone, gros boutons (tactile)
//
// Note :
// - Tout le calibrage de police vit ici : le noyau n’en sait rien.

use eframe::egui;

use super::etat::AppCalc;
use crate::noyau::accumulateur::Operateur;
use crate::noyau::Touche;

/// Taille du résultat (points) : on part du max et on descend jusqu’à ce que ça tienne.
const TAILLE_MAX: f32 = 56.0;
const TAILLE_MIN: f32 = 16.0;

const TAILLE_EXPRESSION: f32 = 22.0;
const TAILLE_BOUTON: [f32; 2] = [72.0, 56.0];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        self.ui_ecran(ui);

        ui.add_space(8.0);
        ui.separator();
        ui.add_space(8.0);

        self.ui_pave(ui);
    }

    fn ui_ecran(&self, ui: &mut egui::Ui) {
        let ecran = self.ecran();

        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());

                ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                    ui.label(
                        egui::RichText::new(joli(&ecran.expression))
                            .size(TAILLE_EXPRESSION)
                            .monospace(),
                    );

                    let largeur = ui.available_width();
                    let taille = taille_qui_tient(ui, &ecran.resultat, largeur);

                    let mut texte = egui::RichText::new(&ecran.resultat).size(taille).strong();
                    if ecran.en_erreur() {
                        texte = texte.color(ui.visuals().error_fg_color);
                    }
                    ui.label(texte);
                });
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton(ui, "AC", Touche::ToutEffacer);
                self.bouton(ui, "C", Touche::Effacer);
                self.bouton(ui, "%", Touche::Pourcentage);
                self.bouton_op(ui, Operateur::Divise);
                ui.end_row();

                self.bouton(ui, "7", Touche::Chiffre('7'));
                self.bouton(ui, "8", Touche::Chiffre('8'));
                self.bouton(ui, "9", Touche::Chiffre('9'));
                self.bouton_op(ui, Operateur::Fois);
                ui.end_row();

                self.bouton(ui, "4", Touche::Chiffre('4'));
                self.bouton(ui, "5", Touche::Chiffre('5'));
                self.bouton(ui, "6", Touche::Chiffre('6'));
                self.bouton_op(ui, Operateur::Moins);
                ui.end_row();

                self.bouton(ui, "1", Touche::Chiffre('1'));
                self.bouton(ui, "2", Touche::Chiffre('2'));
                self.bouton(ui, "3", Touche::Chiffre('3'));
                self.bouton_op(ui, Operateur::Plus);
                ui.end_row();

                self.bouton(ui, "(", Touche::ParentheseOuvrante);
                self.bouton(ui, "0", Touche::Chiffre('0'));
                self.bouton(ui, ")", Touche::ParentheseFermante);
                self.bouton(ui, ".", Touche::Point);
                ui.end_row();

                self.bouton(ui, "±", Touche::InverserSigne);
                ui.label("");
                ui.label("");
                self.bouton(ui, "=", Touche::Egal);
                ui.end_row();
            });
    }

    fn bouton_op(&mut self, ui: &mut egui::Ui, op: Operateur) {
        self.bouton(ui, op.libelle(), Touche::Operateur(op));
    }

    fn bouton(&mut self, ui: &mut egui::Ui, libelle: &str, touche: Touche) {
        let resp = ui.add_sized(
            TAILLE_BOUTON,
            egui::Button::new(egui::RichText::new(libelle).size(24.0)),
        );
        if resp.clicked() {
            self.appuyer(touche);
        }
    }
}

/// Plus grande taille (pas de 1 pt) pour laquelle `texte` tient dans `largeur`.
fn taille_qui_tient(ui: &egui::Ui, texte: &str, largeur: f32) -> f32 {
    let mut taille = TAILLE_MAX;
    while taille > TAILLE_MIN {
        let galley = ui.painter().layout_no_wrap(
            texte.to_string(),
            egui::FontId::proportional(taille),
            egui::Color32::WHITE,
        );
        if galley.size().x <= largeur {
            break;
        }
        taille -= 1.0;
    }
    taille
}

/// Le tampon garde * / - ; l’écran montre × ÷ −.
fn joli(expression: &str) -> String {
    expression
        .chars()
        .map(|c| match c {
            '*' => '×',
            '/' => '÷',
            '-' => '−',
            _ => c,
        })
        .collect()
}
