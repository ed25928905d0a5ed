// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Deux lignes d’écran : expression (petite, après =) + écran principal
// - Pavé 4×5 : C ± % ÷ / 7 8 9 × / 4 5 6 - / 1 2 3 + / DEL 0 . =
// - Réglages : stratégie d’évaluation + séparateur de milliers
//
// Le clavier est traduit dans app.rs (clavier.rs) : ici, seulement les clics.

use eframe::egui;

use super::etat::AppCalc;
use crate::noyau::{Evenement, Operateur, Strategie};

/// Seuil au-delà duquel l’écran principal passe en petite police.
const ECRAN_LONG: usize = 12;

const TOUCHE: [f32; 2] = [72.0, 52.0];

/// Pavé, ligne par ligne : (libellé, événement).
const PAVE: [[(&str, Evenement); 4]; 5] = [
    [
        ("C", Evenement::Effacer),
        ("±", Evenement::ChangerSigne),
        ("%", Evenement::Pourcent),
        ("÷", Evenement::Operateur(Operateur::Divise)),
    ],
    [
        ("7", Evenement::Chiffre(7)),
        ("8", Evenement::Chiffre(8)),
        ("9", Evenement::Chiffre(9)),
        ("×", Evenement::Operateur(Operateur::Fois)),
    ],
    [
        ("4", Evenement::Chiffre(4)),
        ("5", Evenement::Chiffre(5)),
        ("6", Evenement::Chiffre(6)),
        ("-", Evenement::Operateur(Operateur::Moins)),
    ],
    [
        ("1", Evenement::Chiffre(1)),
        ("2", Evenement::Chiffre(2)),
        ("3", Evenement::Chiffre(3)),
        ("+", Evenement::Operateur(Operateur::Plus)),
    ],
    [
        ("DEL", Evenement::Retour),
        ("0", Evenement::Chiffre(0)),
        (".", Evenement::Virgule),
        ("=", Evenement::Egal),
    ],
];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        ui.vertical_centered(|ui| {
            ui.heading(crate::TITRE_APP);
        });
        ui.add_space(8.0);

        self.ui_ecran(ui);

        ui.add_space(10.0);
        self.ui_pave(ui);

        ui.add_space(10.0);
        ui.separator();
        self.ui_reglages(ui);
    }

    fn ui_ecran(&self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());

                // Ligne expression : toujours réservée (pas de saut de mise en page)
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(&self.affichage.expression)
                            .size(16.0)
                            .weak(),
                    );
                });

                let long = !self.affichage.resultat_affiche
                    && self.affichage.principal.chars().count() > ECRAN_LONG;
                let taille = if long { 22.0 } else { 32.0 };

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(&self.affichage.principal)
                            .size(taille)
                            .monospace()
                            .strong(),
                    );
                });
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for ligne in PAVE {
                    for (label, evt) in ligne {
                        self.bouton(ui, label, evt);
                    }
                    ui.end_row();
                }
            });
    }

    fn bouton(&mut self, ui: &mut egui::Ui, label: &str, evt: Evenement) {
        let texte = egui::RichText::new(label).size(22.0);
        let texte = match evt {
            Evenement::Operateur(_) | Evenement::Egal => texte.strong(),
            _ => texte,
        };
        if ui.add_sized(TOUCHE, egui::Button::new(texte)).clicked() {
            self.appliquer(evt);
        }
    }

    fn ui_reglages(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Calcul :");
            let mut strategie = self.reglages.strategie;
            ui.selectable_value(&mut strategie, Strategie::Priorite, "× ÷ prioritaires")
                .on_hover_text("2 + 3 × 4 = 14");
            ui.selectable_value(&mut strategie, Strategie::Immediate, "Immédiat")
                .on_hover_text("2 + 3 × 4 = 20");
            self.set_strategie(strategie);
        });

        ui.horizontal(|ui| {
            ui.label("Milliers :");
            let mut sep = self.reglages.separateur_milliers;
            for (c, nom) in [(',', "1,000"), ('\u{202F}', "1 000"), ('\'', "1'000")] {
                ui.selectable_value(&mut sep, c, nom);
            }
            if sep != self.reglages.separateur_milliers {
                self.set_separateur(sep);
            }
        });
    }
}
