// src/noyau/jetons.rs

use super::erreurs::ErreurCalc;
use super::fonctions::Fonction;

#[derive(Clone, Debug, PartialEq)]
pub enum Jeton {
    Nombre(f64),

    // Fonctions scientifiques nommées (sin, cos, tan, log, ln, sqrt)
    Fonction(Fonction),

    Plus,
    Moins,
    Etoile,
    Barre,
    Pourcent,
    DoubleEtoile, // ** (puissance)

    ParG,
    ParD,
}

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - littéraux numériques (chiffres, au plus UN point décimal) : 12, 3.5, .5
/// - opérateurs + - * / % et ** (le plus long d’abord : ** avant *)
/// - parenthèses ( )
/// - π ou pi, e : substitués en Nombre dès ici
/// - noms de fonctions : sin cos tan log ln sqrt (minuscules forcées)
///
/// Le moins/plus unaire n’est PAS décidé ici : c’est le rôle du parseur.
pub fn tokenize(s: &str) -> Result<Vec<Jeton>, ErreurCalc> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        // Parenthèses
        if c == '(' {
            out.push(Jeton::ParG);
            i += 1;
            continue;
        }
        if c == ')' {
            out.push(Jeton::ParD);
            i += 1;
            continue;
        }

        // Opérateurs (** avant *)
        match c {
            '+' => {
                out.push(Jeton::Plus);
                i += 1;
                continue;
            }
            '-' => {
                out.push(Jeton::Moins);
                i += 1;
                continue;
            }
            '*' => {
                if i + 1 < chars.len() && chars[i + 1] == '*' {
                    out.push(Jeton::DoubleEtoile);
                    i += 2;
                } else {
                    out.push(Jeton::Etoile);
                    i += 1;
                }
                continue;
            }
            '/' => {
                out.push(Jeton::Barre);
                i += 1;
                continue;
            }
            '%' => {
                out.push(Jeton::Pourcent);
                i += 1;
                continue;
            }
            _ => {}
        }

        // Constante π : "π" seul, ou "pi" via la voie des identifiants
        if c == 'π' {
            out.push(Jeton::Nombre(std::f64::consts::PI));
            i += 1;
            continue;
        }

        // Identifiants ASCII : fonctions connues + constantes pi/e
        if c.is_ascii_alphabetic() {
            let debut = i;
            i += 1;
            while i < chars.len() && chars[i].is_ascii_alphabetic() {
                i += 1;
            }
            let mot: String = chars[debut..i].iter().collect();
            let m = mot.to_lowercase();

            match m.as_str() {
                "pi" => out.push(Jeton::Nombre(std::f64::consts::PI)),
                "e" => out.push(Jeton::Nombre(std::f64::consts::E)),
                _ => match Fonction::depuis_ident(&m) {
                    Some(f) => out.push(Jeton::Fonction(f)),
                    // on rapporte le mot entier, pas sa première lettre
                    None => return Err(ErreurCalc::IdentInconnu { ident: m }),
                },
            }
            continue;
        }

        // Littéral numérique : chiffres + au plus un point
        // (glouton : on avale le plus long littéral valide)
        if c.is_ascii_digit() || (c == '.' && i + 1 < chars.len() && chars[i + 1].is_ascii_digit())
        {
            let debut = i;
            let mut point_vu = false;

            while i < chars.len() {
                let d = chars[i];
                if d.is_ascii_digit() {
                    i += 1;
                } else if d == '.' && !point_vu {
                    point_vu = true;
                    i += 1;
                } else {
                    break;
                }
            }

            let texte: String = chars[debut..i].iter().collect();
            let n: f64 = texte
                .parse()
                .map_err(|_| ErreurCalc::Lexique { caractere: c })?;
            out.push(Jeton::Nombre(n));
            continue;
        }

        return Err(ErreurCalc::Lexique { caractere: c });
    }

    Ok(out)
}
