//! Noyau — machine à états de la calculatrice
//!
//! Transitions PURES : chaque opération lit `&EtatCalc` et rend un nouvel `EtatCalc`.
//!
//! États logiques :
//! - saisie      : on tape un nombre
//! - attente     : un opérateur (ou =) vient d’être engagé, le prochain chiffre démarre un nombre
//! - résultat    : = a été pressé, l’écran montre le résultat
//!
//! Deux stratégies, jamais mélangées (la forme de `Pile` les distingue) :
//! - Priorite  : liste de jetons, évaluée en bloc à = (× ÷ avant + -)
//! - Immediate : accumulateur replié à chaque opérateur (gauche à droite)

use super::arrondi::{arrondi, DECIMALES};
use super::eval::{evaluer_jetons, reduction_binaire};
use super::format::{format_expression, format_resultat, format_saisie, nombre_canonique};
use super::jetons::{lire_operande, Operateur, Terme};

/// Garde-fou : nombre de chiffres max dans une saisie (au-delà, f64 ne suit plus).
pub const SAISIE_MAX: usize = 20;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Strategie {
    /// × ÷ avant + - (évaluation différée des jetons).
    #[default]
    Priorite,
    /// Repli immédiat gauche à droite.
    Immediate,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Pile {
    /// Priorite : paires (nombre, opérateur) engagées.
    Jetons(Vec<Terme>),
    /// Immediate : valeur précédente + opérateur en attente.
    Accumulateur(Option<Terme>),
}

/// Résultat affiché après =.
#[derive(Clone, Debug, PartialEq)]
pub struct Resultat {
    pub expression: Vec<Terme>,
    /// Dernier opérande tel que tapé (saisie brute).
    pub dernier: String,
    pub valeur: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Evenement {
    Chiffre(u8),
    Virgule,
    Operateur(Operateur),
    Egal,
    Effacer,
    Retour,
    ChangerSigne,
    Pourcent,
}

/// Projection pour la vue, recalculée après chaque transition.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Affichage {
    pub expression: String,
    pub principal: String,
    pub resultat_affiche: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EtatCalc {
    pub saisie: String,
    pub pile: Pile,
    pub attente_operande: bool,
    pub resultat: Option<Resultat>,
}

impl Default for EtatCalc {
    fn default() -> Self {
        Self::initial(Strategie::default())
    }
}

impl EtatCalc {
    pub fn initial(strategie: Strategie) -> Self {
        let pile = match strategie {
            Strategie::Priorite => Pile::Jetons(Vec::new()),
            Strategie::Immediate => Pile::Accumulateur(None),
        };
        Self {
            saisie: "0".to_string(),
            pile,
            attente_operande: false,
            resultat: None,
        }
    }

    pub fn strategie(&self) -> Strategie {
        match self.pile {
            Pile::Jetons(_) => Strategie::Priorite,
            Pile::Accumulateur(_) => Strategie::Immediate,
        }
    }

    pub fn affiche_resultat(&self) -> bool {
        self.resultat.is_some()
    }

    /// Point d’entrée unique : clavier et boutons passent par ici.
    pub fn transition(&self, evt: Evenement) -> Self {
        match evt {
            Evenement::Chiffre(d) => self.saisir_chiffre(d),
            Evenement::Virgule => self.saisir_virgule(),
            Evenement::Operateur(op) => self.appliquer_operateur(op),
            Evenement::Egal => self.egal(),
            Evenement::Effacer => self.effacer(),
            Evenement::Retour => self.retour(),
            Evenement::ChangerSigne => self.changer_signe(),
            Evenement::Pourcent => self.pourcent(),
        }
    }

    /* ------------------------ Saisie ------------------------ */

    pub fn saisir_chiffre(&self, d: u8) -> Self {
        let Some(c) = char::from_digit(u32::from(d), 10) else {
            return self.clone();
        };

        if self.affiche_resultat() {
            return self.nouvelle_expression(c.to_string());
        }

        let mut e = self.clone();
        if e.attente_operande {
            e.saisie = c.to_string();
            e.attente_operande = false;
        } else if e.saisie == "0" {
            e.saisie = c.to_string();
        } else if e.saisie == "-0" {
            e.saisie = format!("-{c}");
        } else if e.nb_chiffres() < SAISIE_MAX {
            e.saisie.push(c);
        }
        e
    }

    pub fn saisir_virgule(&self) -> Self {
        if self.affiche_resultat() {
            return self.nouvelle_expression("0.".to_string());
        }

        let mut e = self.clone();
        if e.attente_operande {
            e.saisie = "0.".to_string();
            e.attente_operande = false;
        } else if e.saisie == "-" {
            e.saisie = "-0.".to_string();
        } else if !e.saisie.contains('.') {
            e.saisie.push('.');
        }
        e
    }

    pub fn effacer(&self) -> Self {
        Self::initial(self.strategie())
    }

    pub fn retour(&self) -> Self {
        if self.affiche_resultat() {
            return self.clone();
        }

        let mut e = self.clone();

        // valeur affichée déjà engagée : rien à effacer
        if e.attente_operande && matches!(e.pile, Pile::Accumulateur(_)) {
            return e;
        }

        // "0" + terme engagé : on annule l’opérateur et on rend le nombre précédent
        if e.saisie == "0" {
            if let Pile::Jetons(termes) = &mut e.pile {
                if let Some((n, _op)) = termes.pop() {
                    e.saisie = nombre_canonique(reinjectable(n));
                    e.attente_operande = false;
                }
                return e;
            }
        }

        e.saisie.pop();
        if e.saisie.is_empty() {
            e.saisie = "0".to_string();
        }
        e
    }

    pub fn changer_signe(&self) -> Self {
        // "-" seul : rien à inverser (sinon saisie vide)
        if self.affiche_resultat() || self.saisie == "0" || self.saisie == "-" {
            return self.clone();
        }

        let mut e = self.clone();
        e.saisie = match e.saisie.strip_prefix('-') {
            Some(abs) => abs.to_string(),
            None => format!("-{}", e.saisie),
        };
        e.attente_operande = false;
        e
    }

    pub fn pourcent(&self) -> Self {
        if self.affiche_resultat() {
            return self.clone();
        }
        let Ok(v) = lire_operande(&self.saisie) else {
            return self.clone();
        };

        let mut e = self.clone();
        e.saisie = nombre_canonique(v / 100.0);
        e.attente_operande = false;
        e
    }

    /* ------------------------ Opérateurs ------------------------ */

    pub fn appliquer_operateur(&self, op: Operateur) -> Self {
        if let Some(res) = &self.resultat {
            // enchaînement : le résultat devient le premier opérande (∞/NaN repartent de 0)
            let valeur = reinjectable(res.valeur);
            let mut e = Self::initial(self.strategie());
            match &mut e.pile {
                Pile::Jetons(termes) => termes.push((valeur, op)),
                Pile::Accumulateur(acc) => {
                    *acc = Some((valeur, op));
                    e.saisie = nombre_canonique(valeur);
                }
            }
            e.attente_operande = true;
            return e;
        }

        let mut e = self.clone();
        match &mut e.pile {
            Pile::Jetons(termes) => {
                // opérateur pressé deux fois : on remplace le dernier
                if e.saisie == "0" {
                    if let Some(dernier) = termes.last_mut() {
                        dernier.1 = op;
                        return e;
                    }
                }
                let Ok(v) = lire_operande(&e.saisie) else {
                    return self.clone();
                };
                termes.push((v, op));
                e.saisie = "0".to_string();
            }

            Pile::Accumulateur(acc) => {
                let Ok(v) = lire_operande(&e.saisie) else {
                    return self.clone();
                };
                *acc = match *acc {
                    Some((prec, _)) if e.attente_operande => Some((prec, op)),
                    Some((prec, op_prec)) => {
                        let r = reinjectable(arrondi(
                            reduction_binaire(prec, v, op_prec),
                            DECIMALES,
                        ));
                        e.saisie = nombre_canonique(r);
                        Some((r, op))
                    }
                    None => Some((v, op)),
                };
            }
        }
        e.attente_operande = true;
        e
    }

    pub fn egal(&self) -> Self {
        if self.affiche_resultat() {
            return self.clone();
        }
        let Ok(v) = lire_operande(&self.saisie) else {
            return self.clone();
        };

        let (expression, brut) = match &self.pile {
            Pile::Jetons(termes) => (termes.clone(), evaluer_jetons(termes, v)),
            Pile::Accumulateur(Some((prec, op))) => {
                (vec![(*prec, *op)], reduction_binaire(*prec, v, *op))
            }
            Pile::Accumulateur(None) => (Vec::new(), v),
        };

        let mut e = Self::initial(self.strategie());
        e.attente_operande = true;
        e.resultat = Some(Resultat {
            expression,
            dernier: self.saisie.clone(),
            valeur: arrondi(brut, DECIMALES),
        });
        e
    }

    /* ------------------------ Projection ------------------------ */

    /// Textes à afficher (séparateur de milliers au choix de l’appelant).
    pub fn projeter(&self, sep: char) -> Affichage {
        if let Some(res) = &self.resultat {
            return Affichage {
                expression: format_expression(&res.expression, Some(&res.dernier), sep),
                principal: format_resultat(res.valeur, sep),
                resultat_affiche: true,
            };
        }

        match &self.pile {
            Pile::Jetons(termes) => {
                let principal = format_expression(termes, Some(&self.saisie), sep);
                Affichage {
                    expression: String::new(),
                    principal: if principal.is_empty() {
                        "0".to_string()
                    } else {
                        principal
                    },
                    resultat_affiche: false,
                }
            }
            Pile::Accumulateur(acc) => Affichage {
                expression: acc
                    .map(|t| format_expression(&[t], None, sep))
                    .unwrap_or_default(),
                principal: format_saisie(&self.saisie, sep),
                resultat_affiche: false,
            },
        }
    }

    /* ------------------------ Helpers ------------------------ */

    fn nouvelle_expression(&self, saisie: String) -> Self {
        let mut e = Self::initial(self.strategie());
        e.saisie = saisie;
        e
    }

    fn nb_chiffres(&self) -> usize {
        self.saisie.chars().filter(|c| c.is_ascii_digit()).count()
    }
}

/// Valeur réinjectée comme opérande : ∞ et NaN ne sont jamais retapables, on repart de 0.
///
/// Une valeur finie est rendue telle quelle, même au-delà de SAISIE_MAX chiffres
/// (1e25 revient en "10000000000000000000000000") : la saisie reste lisible,
/// seuls les chiffres tapés ensuite sont ignorés.
fn reinjectable(x: f64) -> f64 {
    if x.is_finite() {
        x
    } else {
        tracing::debug!(valeur = %x, "valeur non finie remplacée par 0");
        0.0
    }
}
