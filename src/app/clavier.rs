// src/app/clavier.rs
//
// Adaptateur clavier : entrées brutes egui -> Evenement du noyau.
// - Caractères imprimables (chiffres, opérateurs, "=", "%", "c") : egui::Event::Text
// - Touches nommées (Enter, Backspace, Escape) : egui::Event::Key { pressed: true }
//
// Le noyau ne connaît ni egui ni le navigateur.

use eframe::egui;

use crate::noyau::{Evenement, Operateur};

/// Caractère tapé -> événement (None si la touche ne concerne pas la calculatrice).
pub fn evenement_depuis_caractere(c: char) -> Option<Evenement> {
    match c {
        '0'..='9' => c.to_digit(10).map(|d| Evenement::Chiffre(d as u8)),
        '.' => Some(Evenement::Virgule),
        '=' => Some(Evenement::Egal),
        '%' => Some(Evenement::Pourcent),
        'c' | 'C' => Some(Evenement::Effacer),
        _ => Operateur::depuis_symbole(c).map(Evenement::Operateur),
    }
}

/// Touche nommée -> événement.
pub fn evenement_depuis_touche(key: egui::Key) -> Option<Evenement> {
    match key {
        egui::Key::Enter => Some(Evenement::Egal),
        egui::Key::Backspace => Some(Evenement::Retour),
        egui::Key::Escape => Some(Evenement::Effacer),
        _ => None,
    }
}

/// Traduit les événements bruts d’une frame, dans l’ordre d’arrivée.
pub fn traduire(bruts: &[egui::Event]) -> Vec<Evenement> {
    let mut out = Vec::new();
    for ev in bruts {
        match ev {
            egui::Event::Text(t) => out.extend(t.chars().filter_map(evenement_depuis_caractere)),
            egui::Event::Key {
                key, pressed: true, ..
            } => out.extend(evenement_depuis_touche(*key)),
            _ => {}
        }
    }
    out
}

/// Événements clavier de la frame courante.
///
/// Les touches nommées sont consommées : sinon Enter/Space “recliquent”
/// le dernier bouton focus (double déclenchement).
pub fn collecter(ctx: &egui::Context) -> Vec<Evenement> {
    ctx.input_mut(|i| {
        let evts = traduire(&i.events);
        for key in [
            egui::Key::Enter,
            egui::Key::Space,
            egui::Key::Backspace,
            egui::Key::Escape,
        ] {
            i.count_and_consume_key(egui::Modifiers::NONE, key);
        }
        evts
    })
}
