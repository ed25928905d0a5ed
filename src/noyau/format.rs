// src/noyau/format.rs
//
// Affichage : saisie en cours, résultat, expression.
// - groupement des milliers sur la partie entière (séparateur configurable)
// - partie décimale recopiée telle quelle, y compris un "." orphelin en cours de frappe
// - résultat : arrondi exact à DECIMALES avant groupement

use super::arrondi::{texte_arrondi, DECIMALES};
use super::jetons::Terme;

/// Séparateur de milliers par défaut.
pub const SEPARATEUR_DEFAUT: char = ',';

/// Groupe une partie entière par milliers ("-1234567" -> "-1,234,567").
pub fn grouper_milliers(entier: &str, sep: char) -> String {
    let (signe, chiffres) = match entier.strip_prefix('-') {
        Some(reste) => ("-", reste),
        None => ("", entier),
    };

    let n = chiffres.chars().count();
    let mut out = String::with_capacity(entier.len() + n / 3);
    out.push_str(signe);
    for (i, c) in chiffres.chars().enumerate() {
        if i > 0 && (n - i) % 3 == 0 {
            out.push(sep);
        }
        out.push(c);
    }
    out
}

/// Formate une saisie canonique pour l’écran ("1234.5" -> "1,234.5", "12." -> "12.").
pub fn format_saisie(saisie: &str, sep: char) -> String {
    if saisie.is_empty() || saisie == "-" {
        return saisie.to_string();
    }
    match saisie.split_once('.') {
        Some((entier, decimales)) => format!("{}.{decimales}", grouper_milliers(entier, sep)),
        None => grouper_milliers(saisie, sep),
    }
}

/// Texte canonique d’un f64 (sans exposant, sans "-0").
pub fn nombre_canonique(x: f64) -> String {
    if x.is_nan() {
        "NaN".to_string()
    } else if x.is_infinite() {
        let s = if x > 0.0 { "∞" } else { "-∞" };
        s.to_string()
    } else if x == 0.0 {
        "0".to_string()
    } else {
        format!("{x}")
    }
}

/// Résultat final : arrondi à DECIMALES puis groupé.
pub fn format_resultat(x: f64, sep: char) -> String {
    match texte_arrondi(x, DECIMALES) {
        Some(t) => format_saisie(&t, sep),
        None => nombre_canonique(x),
    }
}

/// Expression lisible : termes engagés + saisie éventuelle ("2 + 3 × 4").
pub fn format_expression(termes: &[Terme], saisie: Option<&str>, sep: char) -> String {
    let mut out = String::new();
    for &(n, op) in termes {
        out.push_str(&format_saisie(&nombre_canonique(n), sep));
        out.push(' ');
        out.push(op.symbole());
        out.push(' ');
    }
    match saisie {
        Some(s) => out.push_str(&format_saisie(s, sep)),
        None => out.truncate(out.trim_end().len()),
    }
    out
}
