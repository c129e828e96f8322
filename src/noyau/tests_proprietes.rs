//! Tests de propriétés : précédence, erreurs, déterminisme, arrondi,
//! plus un fuzz borné (RNG déterministe, profondeur limitée).
//!
//! Invariant clé du pipeline : toute chaîne arithmétique valide termine
//! sur un f64 FINI ou sur une erreur typée — jamais de panique, jamais
//! de NaN ni d’infini rendu au code appelant.

use super::erreurs::ErreurCalc;
use super::eval_expression;
use super::format::format_resultat;

fn ok(s: &str) -> f64 {
    eval_expression(s).unwrap_or_else(|e| panic!("eval_expression({s:?}) erreur: {e}"))
}

/* ------------------------ Précédence ------------------------ */

#[test]
fn table_de_precedence() {
    assert_eq!(ok("2+3*4"), 14.0);
    assert_eq!(ok("(2+3)*4"), 20.0);
    assert_eq!(ok("2**3**2"), 512.0);
    assert_eq!(ok("10-4-3"), 3.0); // gauche-associatif
    assert_eq!(ok("100/10/5"), 2.0);
    assert_eq!(ok("2+10%3"), 3.0); // % au niveau de * et /
}

/* ------------------------ Erreurs ------------------------ */

#[test]
fn erreurs_de_syntaxe() {
    for s in ["", "2++", "(2+3", "2**", "*5", "2 3", ")", "5//2"] {
        assert!(
            matches!(eval_expression(s), Err(ErreurCalc::Syntaxe(_))),
            "attendu Syntaxe pour {s:?}"
        );
    }
}

#[test]
fn erreurs_lexicales() {
    for s in ["2$3", "2#", "&"] {
        assert!(
            matches!(eval_expression(s), Err(ErreurCalc::Lexique { .. })),
            "attendu Lexique pour {s:?}"
        );
    }
    // mot entier inconnu : rapporté tel quel
    assert_eq!(
        eval_expression("abc"),
        Err(ErreurCalc::IdentInconnu {
            ident: "abc".to_string()
        })
    );
}

#[test]
fn debordement_jamais_en_ok() {
    // littéral trop grand pour f64 : parse déjà vers inf au tokenize
    let enorme = "9".repeat(309);
    assert_eq!(eval_expression(&enorme), Err(ErreurCalc::Debordement));

    // produit qui déborde
    assert_eq!(
        eval_expression("(10**308)*10"),
        Err(ErreurCalc::Debordement)
    );

    // inverse d’un sous-normal
    assert_eq!(
        eval_expression("1/(10**(0-320))"),
        Err(ErreurCalc::Debordement)
    );

    // à l’écran : le texte générique, comme toute erreur hors division
    assert_eq!(
        eval_expression(&enorme).unwrap_err().texte_affichage(),
        "Error"
    );
}

#[test]
fn division_et_modulo_par_zero() {
    assert_eq!(eval_expression("5/0"), Err(ErreurCalc::DivisionParZero));
    assert_eq!(eval_expression("5%0"), Err(ErreurCalc::DivisionParZero));
    assert_eq!(eval_expression("1/(2-2)"), Err(ErreurCalc::DivisionParZero));
}

#[test]
fn textes_affichage_fixes() {
    // tout s’effondre en deux textes fixes, volontairement
    assert_eq!(
        eval_expression("5/0").unwrap_err().texte_affichage(),
        "Error: Div by 0"
    );
    assert_eq!(eval_expression("2++").unwrap_err().texte_affichage(), "Error");
    assert_eq!(
        eval_expression("sqrt(-4)").unwrap_err().texte_affichage(),
        "Error"
    );
}

/* ------------------------ Arrondi / affichage ------------------------ */

#[test]
fn arrondi_masque_le_bruit() {
    assert_eq!(format_resultat(ok("0.1+0.2")), "0.3");
}

#[test]
fn entiers_affiches_sans_point() {
    assert_eq!(format_resultat(ok("12+7*3")), "33");
    assert_eq!(format_resultat(ok("7/2")), "3.5");
}

#[test]
fn zero_negatif_normalise() {
    assert_eq!(format_resultat(ok("-0.0")), "0");
    assert_eq!(format_resultat(ok("0*-1")), "0");
}

/* ------------------------ Aller-retour littéraux ------------------------ */

#[test]
fn litteraux_retrouves() {
    // tokenize puis réaffichage : le numéral d’origine (zéros de tête exclus)
    for s in ["42", "3.5", "0.25", "1000000"] {
        assert_eq!(format_resultat(ok(s)), s);
    }
}

/* ------------------------ Fuzz borné ------------------------ */

// RNG minimal (LCG) : déterministe, sans dépendance.
struct Rng {
    etat: u64,
}
impl Rng {
    fn new(graine: u64) -> Self {
        Self { etat: graine }
    }
    fn suivant(&mut self) -> u32 {
        self.etat = self.etat.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.etat >> 32) as u32
    }
    fn choisir(&mut self, n: u32) -> u32 {
        self.suivant() % n
    }
}

/// Génère une expression syntaxiquement valide, profondeur bornée.
fn gen_expr(rng: &mut Rng, profondeur: u32) -> String {
    if profondeur == 0 || rng.choisir(4) == 0 {
        return match rng.choisir(6) {
            0 => "0".to_string(),
            1 => "1".to_string(),
            2 => "2".to_string(),
            3 => "7".to_string(),
            4 => "0.5".to_string(),
            _ => "3.25".to_string(),
        };
    }

    let a = gen_expr(rng, profondeur - 1);
    let b = gen_expr(rng, profondeur - 1);
    let op = match rng.choisir(6) {
        0 => "+",
        1 => "-",
        2 => "*",
        3 => "/",
        4 => "%",
        _ => "**",
    };

    match rng.choisir(3) {
        0 => format!("({a}){op}({b})"),
        1 => format!("-({a}){op}{b}"),
        _ => format!("{a}{op}{b}"),
    }
}

#[test]
fn fuzz_toujours_fini_ou_erreur_typee() {
    let mut rng = Rng::new(0xCA1C);

    for _ in 0..2000 {
        let s = gen_expr(&mut rng, 4);

        match eval_expression(&s) {
            Ok(v) => {
                assert!(v.is_finite(), "non-fini rendu pour {s:?}: {v}");
                // l’affichage ne doit jamais paniquer non plus
                let _ = format_resultat(v);
            }
            // erreurs attendues sur un domaine volontairement réduit
            Err(ErreurCalc::DivisionParZero)
            | Err(ErreurCalc::Domaine { .. })
            | Err(ErreurCalc::Debordement) => {}
            Err(autre) => panic!("erreur inattendue pour {s:?}: {autre}"),
        }
    }
}

#[test]
fn fuzz_deterministe() {
    let mut r1 = Rng::new(42);
    let mut r2 = Rng::new(42);
    for _ in 0..200 {
        let s1 = gen_expr(&mut r1, 3);
        let s2 = gen_expr(&mut r2, 3);
        assert_eq!(s1, s2);
        assert_eq!(eval_expression(&s1), eval_expression(&s2));
    }
}
