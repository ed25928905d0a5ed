//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : porter l’état du noyau + la projection écran + les réglages,
//! et offrir UNE porte d’entrée (`appliquer`) commune au clavier et aux boutons.
//!
//! Contrats :
//! - Aucune arithmétique ici : tout passe par `EtatCalc::transition`.
//! - L’état du noyau est remplacé en bloc à chaque événement (jamais muté à moitié).
//! - La projection est recalculée après chaque changement.

use crate::noyau::format::SEPARATEUR_DEFAUT;
use crate::noyau::{Affichage, EtatCalc, Evenement, Strategie};

/// Réglages modifiables depuis la vue.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reglages {
    pub strategie: Strategie,
    pub separateur_milliers: char,
}

impl Default for Reglages {
    fn default() -> Self {
        Self {
            strategie: Strategie::default(),
            separateur_milliers: SEPARATEUR_DEFAUT,
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    pub calc: EtatCalc,
    pub affichage: Affichage,
    pub reglages: Reglages,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self::avec_reglages(Reglages::default())
    }
}

impl AppCalc {
    pub fn avec_reglages(reglages: Reglages) -> Self {
        let calc = EtatCalc::initial(reglages.strategie);
        let affichage = calc.projeter(reglages.separateur_milliers);
        Self {
            calc,
            affichage,
            reglages,
        }
    }

    /// Un événement (touche ou bouton) => une transition => une projection.
    pub fn appliquer(&mut self, evt: Evenement) {
        let suivant = self.calc.transition(evt);
        tracing::debug!(
            ?evt,
            saisie = %suivant.saisie,
            attente = suivant.attente_operande,
            resultat = suivant.affiche_resultat(),
            "transition"
        );
        self.calc = suivant;
        self.rafraichir();
    }

    /// Changer de stratégie repart d’une calculatrice vide (les piles ne se convertissent pas).
    pub fn set_strategie(&mut self, strategie: Strategie) {
        if self.reglages.strategie == strategie {
            return;
        }
        tracing::info!(?strategie, "changement de stratégie");
        self.reglages.strategie = strategie;
        self.calc = EtatCalc::initial(strategie);
        self.rafraichir();
    }

    pub fn set_separateur(&mut self, sep: char) {
        self.reglages.separateur_milliers = sep;
        self.rafraichir();
    }

    fn rafraichir(&mut self) {
        self.affichage = self.calc.projeter(self.reglages.separateur_milliers);
    }
}
