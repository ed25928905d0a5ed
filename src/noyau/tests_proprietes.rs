//! Tests de propriétés : scénarios de bout en bout, tels qu’un utilisateur les tape.
//!
//! Chaque scénario passe par `EtatCalc::transition` puis par la projection,
//! exactement comme la vue.

use super::jetons::Operateur;
use super::machine::{Affichage, EtatCalc, Evenement, Strategie};

fn evenements(touches: &str) -> Vec<Evenement> {
    touches
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| match c {
            '0'..='9' => Evenement::Chiffre(c as u8 - b'0'),
            '.' => Evenement::Virgule,
            '=' => Evenement::Egal,
            'C' => Evenement::Effacer,
            '<' => Evenement::Retour,
            '~' => Evenement::ChangerSigne,
            '%' => Evenement::Pourcent,
            _ => Evenement::Operateur(
                Operateur::depuis_symbole(c).unwrap_or_else(|| panic!("touche inconnue {c:?}")),
            ),
        })
        .collect()
}

fn jouer(strategie: Strategie, touches: &str) -> EtatCalc {
    evenements(touches)
        .into_iter()
        .fold(EtatCalc::initial(strategie), |e, evt| e.transition(evt))
}

fn ecran(touches: &str) -> Affichage {
    jouer(Strategie::Priorite, touches).projeter(',')
}

fn assert_resultat(touches: &str, attendu: &str) {
    let aff = ecran(touches);
    assert!(aff.resultat_affiche, "touches={touches:?}");
    assert_eq!(aff.principal, attendu, "touches={touches:?}");
}

#[test]
fn prop_precedence() {
    assert_resultat("2 + 3 × 4 =", "14");
    assert_resultat("2 × 3 + 4 =", "10");
    assert_resultat("10 - 6 ÷ 2 =", "7");
}

#[test]
fn prop_operateur_double_remplace() {
    assert_resultat("5 + × 3 =", "15");
    assert_resultat("9 × ÷ - 4 =", "5");
}

#[test]
fn prop_division_par_zero() {
    assert_resultat("5 ÷ 0 =", "0");
    assert_resultat("1 + 5 ÷ 0 =", "1");
}

#[test]
fn prop_zero_tape_puis_operateur_remplace() {
    // saisie "0" après un opérateur = opérande non tapé : l’opérateur est remplacé
    // (5 ÷ 0 + 1 se lit 5 + 1)
    assert_resultat("5 ÷ 0 + 1 =", "6");
}

#[test]
fn prop_nettoyage_flottant() {
    assert_resultat("0.1 + 0.2 =", "0.3");
    assert_resultat("1.1 × 3 =", "3.3");
}

#[test]
fn prop_enchainement_resultat() {
    let aff = ecran("2 + 2 =");
    assert_eq!(aff.principal, "4");
    assert_eq!(aff.expression, "2 + 2");

    let aff = ecran("2 + 2 = + 3 =");
    assert_eq!(aff.principal, "7");
    assert_eq!(aff.expression, "4 + 3");
}

#[test]
fn prop_retour_restaure_operande() {
    // 5 + 3, retour efface le 3, retour suivant annule le +
    let e = jouer(Strategie::Priorite, "5 + 3 < <");
    assert_eq!(e.saisie, "5");
    assert_eq!(e.projeter(',').principal, "5");
    assert_resultat("5 + 3 < < × 2 =", "10");
}

#[test]
fn prop_groupement() {
    assert_eq!(ecran("1234567").principal, "1,234,567");
    assert_eq!(ecran("12.").principal, "12.");
    assert_eq!(ecran("1234.50").principal, "1,234.50");
    assert_eq!(ecran("1500 + 2500.").principal, "1,500 + 2,500.");
}

#[test]
fn prop_effacer_revient_a_l_initial() {
    for strategie in [Strategie::Priorite, Strategie::Immediate] {
        for touches in ["", "123", "1.5 +", "2 + 3 × 4 =", "5 ~ <", "8 % ~ ÷"] {
            let e = jouer(strategie, touches).transition(Evenement::Effacer);
            assert_eq!(e, EtatCalc::initial(strategie), "touches={touches:?}");
        }
    }
}

#[test]
fn prop_immediate_sans_priorite() {
    let aff = jouer(Strategie::Immediate, "2 + 3 × 4 =").projeter(',');
    assert_eq!(aff.principal, "20");
    assert_eq!(aff.expression, "5 × 4");
}

#[test]
fn prop_ecran_initial() {
    let aff = EtatCalc::default().projeter(',');
    assert_eq!(aff.principal, "0");
    assert!(aff.expression.is_empty());
    assert!(!aff.resultat_affiche);
}
