// src/noyau/erreur.rs
//
// Diagnostics internes du noyau.
// L’utilisateur ne les voit jamais : les transitions les absorbent
// (÷0 -> 0, opérande illisible -> no-op). Ils servent aux tests et aux traces.

use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ErreurCalc {
    #[error("division par zéro")]
    DivisionParZero,

    #[error("opérande invalide: {0:?}")]
    OperandeInvalide(String),
}
