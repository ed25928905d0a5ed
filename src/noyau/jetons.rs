// src/noyau/jetons.rs
//
// Jetons du mode « priorité » : opérateurs + paires (nombre, opérateur) déjà engagées.
// La liste alternée nombre/opérateur/nombre… est stockée en paires : impossible
// d’avoir deux opérateurs ou deux nombres consécutifs.

use super::erreur::ErreurCalc;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
}

impl Operateur {
    /// Symbole affiché (expression + boutons).
    pub fn symbole(self) -> char {
        match self {
            Operateur::Plus => '+',
            Operateur::Moins => '-',
            Operateur::Fois => '×',
            Operateur::Divise => '÷',
        }
    }

    /// Accepte aussi les symboles clavier `*` et `/`.
    pub fn depuis_symbole(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operateur::Plus),
            '-' => Some(Operateur::Moins),
            '×' | '*' => Some(Operateur::Fois),
            '÷' | '/' => Some(Operateur::Divise),
            _ => None,
        }
    }

    /// × et ÷ passent avant + et -.
    pub fn est_prioritaire(self) -> bool {
        matches!(self, Operateur::Fois | Operateur::Divise)
    }
}

/// Un nombre engagé suivi de l’opérateur qui attend son opérande droit.
pub type Terme = (f64, Operateur);

/// Lit une saisie canonique ("12", "-0.5", "3.") en f64.
///
/// Refuse tout ce qui n’est pas chiffres + un point + signe initial
/// (le parse f64 de Rust accepterait "inf" / "NaN").
pub fn lire_operande(saisie: &str) -> Result<f64, ErreurCalc> {
    let invalide = || ErreurCalc::OperandeInvalide(saisie.to_string());

    let corps = saisie.strip_prefix('-').unwrap_or(saisie);
    let chiffres = corps.chars().filter(|c| c.is_ascii_digit()).count();
    let points = corps.chars().filter(|&c| c == '.').count();

    if chiffres == 0 || points > 1 || chiffres + points != corps.chars().count() {
        return Err(invalide());
    }

    saisie.parse::<f64>().map_err(|_| invalide())
}
