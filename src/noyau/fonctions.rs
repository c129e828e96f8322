// src/noyau/fonctions.rs
//
// Fonctions scientifiques (sémantique f64)
// ----------------------------------------
// - sin/cos/tan : l’argument est en DEGRÉS, converti en radians ici
// - log : base 10 ; ln : base e
// - sqrt : racine principale
// - x², x³ : puissances entières (boutons UI, pas de nom textuel)
// - 1/x : inverse
//
// Les contrôles de domaine vivent ici, pas dans l’évaluateur :
// log/ln exigent x > 0, sqrt exige x >= 0, 1/x exige x != 0.

use super::erreurs::ErreurCalc;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fonction {
    Sin,
    Cos,
    Tan,
    Log,
    Ln,
    Sqrt,
    Carre,
    Cube,
    Inverse,
}

impl Fonction {
    /// Reconnaît un identifiant textuel (issu du tokenizer).
    ///
    /// Carre/Cube/Inverse n’ont pas de forme textuelle : ce sont des
    /// touches UI qui s’appliquent au tampon entier, jamais des noms tapés.
    pub fn depuis_ident(ident: &str) -> Option<Fonction> {
        match ident {
            "sin" => Some(Fonction::Sin),
            "cos" => Some(Fonction::Cos),
            "tan" => Some(Fonction::Tan),
            "log" => Some(Fonction::Log),
            "ln" => Some(Fonction::Ln),
            "sqrt" => Some(Fonction::Sqrt),
            _ => None,
        }
    }

    pub fn nom(&self) -> &'static str {
        match self {
            Fonction::Sin => "sin",
            Fonction::Cos => "cos",
            Fonction::Tan => "tan",
            Fonction::Log => "log",
            Fonction::Ln => "ln",
            Fonction::Sqrt => "sqrt",
            Fonction::Carre => "x²",
            Fonction::Cube => "x³",
            Fonction::Inverse => "1/x",
        }
    }

    /// Applique la fonction à une valeur.
    ///
    /// Erreur `Domaine` si l’argument sort du domaine mathématique.
    pub fn appliquer(&self, x: f64) -> Result<f64, ErreurCalc> {
        let hors_domaine = || ErreurCalc::Domaine {
            fonction: self.nom(),
            argument: x,
        };

        let v = match self {
            // trig : degrés -> radians
            Fonction::Sin => x.to_radians().sin(),
            Fonction::Cos => x.to_radians().cos(),
            Fonction::Tan => x.to_radians().tan(),

            Fonction::Log => {
                if x <= 0.0 {
                    return Err(hors_domaine());
                }
                x.log10()
            }
            Fonction::Ln => {
                if x <= 0.0 {
                    return Err(hors_domaine());
                }
                x.ln()
            }
            Fonction::Sqrt => {
                if x < 0.0 {
                    return Err(hors_domaine());
                }
                x.sqrt()
            }

            Fonction::Carre => x * x,
            Fonction::Cube => x * x * x,

            Fonction::Inverse => {
                if x == 0.0 {
                    return Err(hors_domaine());
                }
                1.0 / x
            }
        };

        Ok(v)
    }
}
