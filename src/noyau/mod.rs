//! Noyau de la machine à calculer
//!
//! Organisation interne :
//! - jetons.rs   : opérateurs + termes (nombre, opérateur) + lecture d’opérande
//! - erreur.rs   : diagnostics internes (jamais montrés à l’utilisateur)
//! - eval.rs     : réduction binaire + évaluation deux passes (× ÷ puis + -)
//! - arrondi.rs  : arrondi décimal exact (BigRational)
//! - format.rs   : groupement des milliers, saisie / résultat / expression
//! - machine.rs  : états + transitions pures + projection écran

pub mod arrondi;
pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod machine;

#[cfg(test)]
mod tests_proprietes;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use jetons::Operateur;
pub use machine::{Affichage, EtatCalc, Evenement, Strategie};
