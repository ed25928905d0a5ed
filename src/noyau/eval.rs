//! Noyau — évaluation
//!
//! Deux briques :
//! - réduction binaire (gauche op droite), avec la politique ÷0 -> 0
//! - évaluation des jetons en deux passes : × ÷ d’abord, puis + - (gauche à droite)
//!
//! Pas de parenthèses : la priorité standard suffit.

use super::erreur::ErreurCalc;
use super::jetons::{Operateur, Terme};

/// Réduction binaire stricte : signale la division par zéro.
pub fn reduction_verifiee(gauche: f64, droite: f64, op: Operateur) -> Result<f64, ErreurCalc> {
    match op {
        Operateur::Plus => Ok(gauche + droite),
        Operateur::Moins => Ok(gauche - droite),
        Operateur::Fois => Ok(gauche * droite),
        Operateur::Divise => {
            if droite == 0.0 {
                Err(ErreurCalc::DivisionParZero)
            } else {
                Ok(gauche / droite)
            }
        }
    }
}

/// Réduction binaire silencieuse : ÷0 donne 0 (politique affichée, pas une erreur).
pub fn reduction_binaire(gauche: f64, droite: f64, op: Operateur) -> f64 {
    reduction_verifiee(gauche, droite, op).unwrap_or_else(|e| {
        tracing::debug!(erreur = %e, gauche, "repli sur 0");
        0.0
    })
}

/// Évalue les termes engagés + le dernier opérande.
///
/// Exemple : termes [(2,+), (3,×)], dernier 4  =>  2 + 3×4 = 14
pub fn evaluer_jetons(termes: &[Terme], dernier: f64) -> f64 {
    let mut nombres: Vec<f64> = termes.iter().map(|&(n, _)| n).collect();
    nombres.push(dernier);
    let ops: Vec<Operateur> = termes.iter().map(|&(_, op)| op).collect();

    reduire(nombres, ops)
}

/// Deux passes sur des listes parallèles (nombres.len() == ops.len() + 1).
/// Liste vide => 0.
fn reduire(mut nombres: Vec<f64>, mut ops: Vec<Operateur>) -> f64 {
    // 1) × ÷ : on consomme les voisins immédiats et on recolle le résultat en place
    let mut i = 0;
    while i < ops.len() && i + 1 < nombres.len() {
        if ops[i].est_prioritaire() {
            nombres[i] = reduction_binaire(nombres[i], nombres[i + 1], ops[i]);
            nombres.remove(i + 1);
            ops.remove(i);
        } else {
            i += 1;
        }
    }

    // 2) + - : pli gauche à partir du premier nombre
    let Some((&premier, reste)) = nombres.split_first() else {
        return 0.0;
    };
    ops.iter()
        .zip(reste)
        .fold(premier, |acc, (&op, &n)| reduction_binaire(acc, n, op))
}
