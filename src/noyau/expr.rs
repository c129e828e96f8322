// src/noyau/expr.rs
//
// Arbre d’expression arithmétique (f64)
// -------------------------------------
// Invariants :
// - chaque variante binaire a exactement deux enfants
// - Appel porte toujours une fonction reconnue (enum fermée)
// - l’arbre est immuable après construction : le parseur le bâtit,
//   l’évaluateur le consomme, puis il est jeté

use super::fonctions::Fonction;

#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Nombre(f64),

    // Moins unaire (le plus unaire est absorbé au parse, sans nœud)
    Neg(Box<Expr>),

    Add(Box<Expr>, Box<Expr>),
    Sub(Box<Expr>, Box<Expr>),
    Mul(Box<Expr>, Box<Expr>),
    Div(Box<Expr>, Box<Expr>),
    Mod(Box<Expr>, Box<Expr>),
    Pow(Box<Expr>, Box<Expr>),

    Appel(Fonction, Box<Expr>),
}
