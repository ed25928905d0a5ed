// src/app.rs
//
// Machine à calculer — module App (racine)
// ---------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + clavier.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
//
// Important:
// - Le clavier est GLOBAL (pas de champ texte à focus) : chaque frame, on traduit
//   les événements bruts puis on les applique dans l’ordre d’arrivée.
// - Les clics passent par la même porte (AppCalc::appliquer) dans vue.rs.

pub mod clavier;
pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for evt in clavier::collecter(ctx) {
            self.appliquer(evt);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui);
        });
    }
}
