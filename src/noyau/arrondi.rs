// src/noyau/arrondi.rs
//
// Arrondi décimal EXACT d’un f64.
// f64 -> BigRational (valeur binaire exacte) -> ×10^decimales -> arrondi -> texte.
// Évite les surprises de format!("{:.10}") sur les valeurs limites et
// donne un texte sans exposant, quelle que soit la taille.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Signed;

/// Précision d’affichage + de réinjection (bruit binaire supprimé).
pub const DECIMALES: usize = 10;

fn pow10(n: usize) -> BigInt {
    BigInt::from(10).pow(n as u32)
}

/// x -> entier “scalé” = round(x * 10^decimales), demi-valeurs loin de zéro.
/// None si x n’est pas fini.
fn scale_arrondi(x: f64, decimales: usize) -> Option<BigInt> {
    let r = BigRational::from_float(x)?;
    let s = r * BigRational::from_integer(pow10(decimales));
    Some(s.round().to_integer())
}

/// Convertit un entier “scalé” (×10^decimales) en texte décimal,
/// sans zéros finaux ni point orphelin ("1.5000" -> "1.5", "2.000" -> "2").
pub fn scaled_to_decimal(mut scaled: BigInt, decimales: usize) -> String {
    let neg = scaled.is_negative();
    if neg {
        scaled = -scaled;
    }

    let scale = pow10(decimales);
    let int_part = &scaled / &scale;
    let frac_part = &scaled % &scale;

    let mut frac = frac_part.to_str_radix(10);
    while frac.len() < decimales {
        frac.insert(0, '0');
    }
    let frac = frac.trim_end_matches('0');

    let signe = if neg { "-" } else { "" };
    if frac.is_empty() {
        format!("{signe}{int_part}")
    } else {
        format!("{signe}{int_part}.{frac}")
    }
}

/// Texte décimal de x arrondi à `decimales`. None si x n’est pas fini.
pub fn texte_arrondi(x: f64, decimales: usize) -> Option<String> {
    scale_arrondi(x, decimales).map(|s| scaled_to_decimal(s, decimales))
}

/// Arrondi numérique, réinjecté dans les calculs enchaînés.
/// Non fini : renvoyé tel quel.
pub fn arrondi(x: f64, decimales: usize) -> f64 {
    texte_arrondi(x, decimales)
        .and_then(|t| t.parse::<f64>().ok())
        .unwrap_or(x)
}
