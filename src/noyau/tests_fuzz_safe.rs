//! Tests fuzz safe : suites d’événements aléatoires (mais déterministes).
//!
//! But : marteler la machine à états sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - budget temps global
//! - invariants vérifiés après CHAQUE transition :
//!   - au plus un "." dans la saisie
//!   - Effacer ramène toujours à l’état initial
//!   - l’écran principal n’est jamais vide
//!   - même seed => mêmes écrans

use std::time::{Duration, Instant};

use super::jetons::Operateur;
use super::machine::{EtatCalc, Evenement, Strategie};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération d’événements ------------------------ */

const OPERATEURS: [Operateur; 4] = [
    Operateur::Plus,
    Operateur::Moins,
    Operateur::Fois,
    Operateur::Divise,
];

fn gen_evenement(rng: &mut Rng) -> Evenement {
    // chiffres majoritaires, sinon la saisie ne grossit jamais
    match rng.pick(20) {
        0..=9 => Evenement::Chiffre(rng.pick(10) as u8),
        10 | 11 => Evenement::Virgule,
        12..=14 => Evenement::Operateur(OPERATEURS[rng.pick(4) as usize]),
        15 => Evenement::Egal,
        16 => Evenement::Retour,
        17 => Evenement::ChangerSigne,
        18 => Evenement::Pourcent,
        _ => {
            // Effacer rare : on veut des expressions longues
            if rng.pick(4) == 0 {
                Evenement::Effacer
            } else {
                Evenement::Chiffre(0)
            }
        }
    }
}

fn check_invariants(e: &EtatCalc, strategie: Strategie) {
    let points = e.saisie.chars().filter(|&c| c == '.').count();
    assert!(points <= 1, "saisie={:?}", e.saisie);
    assert!(!e.saisie.is_empty(), "saisie vide");
    assert_eq!(e.strategie(), strategie);
    assert_eq!(e.effacer(), EtatCalc::initial(strategie));
    assert!(!e.projeter(',').principal.is_empty());
}

fn derouler(strategie: Strategie, seed: u64, n: usize) -> Vec<String> {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(seed);
    let mut e = EtatCalc::initial(strategie);
    let mut ecrans = Vec::with_capacity(n);

    for _ in 0..n {
        budget(t0, max);
        e = e.transition(gen_evenement(&mut rng));
        check_invariants(&e, strategie);
        ecrans.push(e.projeter(',').principal);
    }
    ecrans
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_invariants_priorite() {
    derouler(Strategie::Priorite, 0xC0FFEE_u64, 2000);
}

#[test]
fn fuzz_safe_invariants_immediate() {
    derouler(Strategie::Immediate, 0xBADC0DE_u64, 2000);
}

#[test]
fn fuzz_safe_determinisme() {
    let a = derouler(Strategie::Priorite, 42, 500);
    let b = derouler(Strategie::Priorite, 42, 500);
    assert_eq!(a, b);
}

#[test]
fn fuzz_safe_resultats_vus() {
    // le fuzz doit réellement passer par "=" avec un résultat affiché
    let mut rng = Rng::new(7);
    let mut e = EtatCalc::default();
    let mut vus = 0usize;
    for _ in 0..1000 {
        e = e.transition(gen_evenement(&mut rng));
        if e.affiche_resultat() {
            vus += 1;
        }
    }
    assert!(vus > 10, "trop peu de résultats: {vus}");
}
