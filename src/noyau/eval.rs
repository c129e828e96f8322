//! Noyau — évaluation (pipeline réel)
//!
//! tokenize -> parse -> evaluer
//!
//! Chaque appel est une fonction pure : aucune mémoire entre deux
//! évaluations, pas d’état partagé, durée bornée par la taille de l’entrée.
//! L’arrondi d’affichage N’EST PAS ici : voir format.rs (couche de
//! présentation, à la frontière UI).

use super::analyse::parse;
use super::erreurs::ErreurCalc;
use super::expr::Expr;
use super::jetons::tokenize;

/// API publique : évalue une expression texte et retourne un f64 brut.
///
/// Erreurs possibles : Lexique / IdentInconnu (tokenize), Syntaxe (parse),
/// DivisionParZero / Domaine (évaluation), Debordement (frontière).
///
/// Contrat de frontière : la valeur rendue est TOUJOURS finie. Un littéral
/// trop grand pour f64, un produit qui déborde vers inf ou un inf-inf
/// intermédiaire ressortent en `Debordement`, jamais en Ok(inf)/Ok(NaN).
pub fn eval_expression(expr_str: &str) -> Result<f64, ErreurCalc> {
    let jetons = tokenize(expr_str)?;
    let arbre = parse(&jetons)?;

    let v = evaluer(&arbre)?;
    if !v.is_finite() {
        return Err(ErreurCalc::Debordement);
    }
    Ok(v)
}

/// Parcours de l’arbre.
///
/// - division / modulo : le diviseur exactement nul est une erreur
///   (le modulo suit le signe du dividende, convention de `%` sur f64)
/// - puissance : un résultat NaN (ex: (-8)**0.5) est une erreur de domaine
/// - fonctions : contrôles de domaine dans fonctions.rs
///
/// Le débordement (inf) peut traverser les nœuds intermédiaires : c’est
/// `eval_expression` qui le refuse en sortie de pipeline.
pub fn evaluer(e: &Expr) -> Result<f64, ErreurCalc> {
    use Expr::*;

    let v = match e {
        Nombre(n) => *n,

        Neg(x) => -evaluer(x)?,

        Add(a, b) => evaluer(a)? + evaluer(b)?,
        Sub(a, b) => evaluer(a)? - evaluer(b)?,
        Mul(a, b) => evaluer(a)? * evaluer(b)?,

        Div(a, b) => {
            let num = evaluer(a)?;
            let den = evaluer(b)?;
            if den == 0.0 {
                return Err(ErreurCalc::DivisionParZero);
            }
            num / den
        }

        Mod(a, b) => {
            let num = evaluer(a)?;
            let den = evaluer(b)?;
            if den == 0.0 {
                return Err(ErreurCalc::DivisionParZero);
            }
            num % den
        }

        Pow(a, b) => {
            let base = evaluer(a)?;
            let exp = evaluer(b)?;
            let r = base.powf(exp);
            // base négative, exposant fractionnaire : NaN => hors domaine
            if r.is_nan() && base.is_finite() && exp.is_finite() {
                return Err(ErreurCalc::Domaine {
                    fonction: "**",
                    argument: base,
                });
            }
            r
        }

        Appel(f, x) => f.appliquer(evaluer(x)?)?,
    };

    Ok(v)
}
