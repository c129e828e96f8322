//! Noyau — évaluateur d’expressions arithmétiques (f64)
//!
//! Organisation interne :
//! - erreurs.rs   : taxonomie (lexique / syntaxe / division / domaine)
//! - jetons.rs    : tokenisation
//! - expr.rs      : arbre d’expression
//! - fonctions.rs : fonctions scientifiques + domaines
//! - analyse.rs   : parse par montée de précédence
//! - eval.rs      : pipeline complet
//! - format.rs    : présentation (arrondi 10 décimales, à la frontière UI)

pub mod analyse;
pub mod erreurs;
pub mod eval;
pub mod expr;
pub mod fonctions;
pub mod format;
pub mod jetons;

#[cfg(test)]
mod tests_proprietes;

#[cfg(test)]
mod tests_scientifiques;

// API publique minimale
pub use erreurs::ErreurCalc;
pub use eval::eval_expression;
pub use fonctions::Fonction;
pub use format::format_resultat;
