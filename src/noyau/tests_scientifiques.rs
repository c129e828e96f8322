//! Tests scientifiques : fonctions nommées, constantes, domaines.
//!
//! Rappels de sémantique :
//! - sin/cos/tan prennent des DEGRÉS
//! - log = base 10, ln = base e
//! - x², x³, 1/x : touches UI (Fonction::appliquer), pas de forme textuelle

use super::erreurs::ErreurCalc;
use super::eval_expression;
use super::fonctions::Fonction;
use super::format::format_resultat;

fn ok(s: &str) -> f64 {
    eval_expression(s).unwrap_or_else(|e| panic!("eval_expression({s:?}) erreur: {e}"))
}

fn proche(a: f64, b: f64) {
    assert!((a - b).abs() < 1e-9, "attendu {b}, trouvé {a}");
}

// --- Trig en degrés ---

#[test]
fn sin_30_degres() {
    proche(ok("sin(30)"), 0.5);
}

#[test]
fn cos_60_degres() {
    proche(ok("cos(60)"), 0.5);
}

#[test]
fn tan_45_degres() {
    proche(ok("tan(45)"), 1.0);
}

#[test]
fn sin_expression_composee() {
    // l’argument est une sous-expression complète
    proche(ok("sin(15+15)"), 0.5);
}

// --- Logarithmes ---

#[test]
fn log_base_10() {
    proche(ok("log(1000)"), 3.0);
}

#[test]
fn ln_de_e() {
    proche(ok("ln(e)"), 1.0);
}

#[test]
fn log_domaine() {
    assert!(matches!(
        eval_expression("log(0)"),
        Err(ErreurCalc::Domaine { .. })
    ));
    assert!(matches!(
        eval_expression("ln(-1)"),
        Err(ErreurCalc::Domaine { .. })
    ));
}

// --- Racine ---

#[test]
fn sqrt_principale() {
    proche(ok("sqrt(16)"), 4.0);
    proche(ok("sqrt(0)"), 0.0);
}

#[test]
fn sqrt_negatif_domaine() {
    assert!(matches!(
        eval_expression("sqrt(-4)"),
        Err(ErreurCalc::Domaine { .. })
    ));
}

// --- Constantes (substituées au tokenize) ---

#[test]
fn pi_et_e() {
    proche(ok("pi"), std::f64::consts::PI);
    proche(ok("π"), std::f64::consts::PI);
    proche(ok("e"), std::f64::consts::E);
    proche(ok("2*pi"), 2.0 * std::f64::consts::PI);
}

// --- Touches UI : x², x³, 1/x ---

#[test]
fn carre_et_cube() {
    assert_eq!(Fonction::Carre.appliquer(5.0).unwrap(), 25.0);
    assert_eq!(Fonction::Cube.appliquer(-3.0).unwrap(), -27.0);
}

#[test]
fn inverse() {
    assert_eq!(Fonction::Inverse.appliquer(4.0).unwrap(), 0.25);
    assert!(matches!(
        Fonction::Inverse.appliquer(0.0),
        Err(ErreurCalc::Domaine { .. })
    ));
}

// --- Affichage des résultats scientifiques (arrondi 10 décimales) ---

#[test]
fn sin_30_affiche_sans_bruit() {
    // sin(30°) = 0.49999999999999994 en f64 ; l’arrondi rend "0.5"
    assert_eq!(format_resultat(ok("sin(30)")), "0.5");
}

#[test]
fn tan_45_affiche_1() {
    assert_eq!(format_resultat(ok("tan(45)")), "1");
}

#[test]
fn pi_affiche_10_decimales() {
    assert_eq!(format_resultat(ok("pi")), "3.1415926536");
}
