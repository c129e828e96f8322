// src/noyau/analyse.rs
//
// Parse par montée de précédence (descente récursive)
// ---------------------------------------------------
// Niveaux, du plus faible au plus fort :
//   1. + -                (associatif gauche)
//   2. * / %              (associatif gauche)
//   3. **                 (associatif DROITE : 2**3**2 = 2**(3**2) = 512)
//   4. moins/plus unaire  (lie plus fort que ** : -2**2 = (-2)**2 = 4)
//   5. atomes             (littéral, fonction(...), groupe parenthésé)
//
// Le moins/plus unaire n’est légal qu’en début d’expression, après un
// opérateur ou après '(' — c’est exactement ce que donne la descente :
// chaque position d’opérande passe par `unaire`.

use super::erreurs::{erreur_syntaxe, ErreurCalc};
use super::expr::Expr;
use super::jetons::Jeton;

/// Construit l’arbre d’expression à partir des jetons.
///
/// Erreur `Syntaxe` sur : entrée vide, parenthèses non équilibrées,
/// opérande manquante, opérateurs consécutifs illégaux, jetons en trop.
pub fn parse(jetons: &[Jeton]) -> Result<Expr, ErreurCalc> {
    if jetons.is_empty() {
        return Err(erreur_syntaxe("entrée vide"));
    }

    let mut a = Analyseur { jetons, pos: 0 };
    let expr = a.additive()?;

    if a.pos != a.jetons.len() {
        return Err(erreur_syntaxe("jetons en trop après l’expression"));
    }

    Ok(expr)
}

struct Analyseur<'a> {
    jetons: &'a [Jeton],
    pos: usize,
}

impl<'a> Analyseur<'a> {
    fn regarder(&self) -> Option<&'a Jeton> {
        self.jetons.get(self.pos)
    }

    fn avancer(&mut self) -> Option<&'a Jeton> {
        let j = self.jetons.get(self.pos);
        if j.is_some() {
            self.pos += 1;
        }
        j
    }

    /// Niveau 1 : addition / soustraction.
    fn additive(&mut self) -> Result<Expr, ErreurCalc> {
        let mut gauche = self.multiplicative()?;

        while let Some(op) = self.regarder() {
            match op {
                Jeton::Plus => {
                    self.pos += 1;
                    let droite = self.multiplicative()?;
                    gauche = Expr::Add(Box::new(gauche), Box::new(droite));
                }
                Jeton::Moins => {
                    self.pos += 1;
                    let droite = self.multiplicative()?;
                    gauche = Expr::Sub(Box::new(gauche), Box::new(droite));
                }
                _ => break,
            }
        }

        Ok(gauche)
    }

    /// Niveau 2 : multiplication / division / modulo.
    fn multiplicative(&mut self) -> Result<Expr, ErreurCalc> {
        let mut gauche = self.puissance()?;

        while let Some(op) = self.regarder() {
            let ctor: fn(Box<Expr>, Box<Expr>) -> Expr = match op {
                Jeton::Etoile => Expr::Mul,
                Jeton::Barre => Expr::Div,
                Jeton::Pourcent => Expr::Mod,
                _ => break,
            };
            self.pos += 1;
            let droite = self.puissance()?;
            gauche = ctor(Box::new(gauche), Box::new(droite));
        }

        Ok(gauche)
    }

    /// Niveau 3 : puissance, associative à droite.
    fn puissance(&mut self) -> Result<Expr, ErreurCalc> {
        let base = self.unaire()?;

        if matches!(self.regarder(), Some(Jeton::DoubleEtoile)) {
            self.pos += 1;
            // droite-associatif : l’exposant relance `puissance`
            let exposant = self.puissance()?;
            return Ok(Expr::Pow(Box::new(base), Box::new(exposant)));
        }

        Ok(base)
    }

    /// Niveau 4 : signe unaire (le '+' est absorbé sans nœud).
    fn unaire(&mut self) -> Result<Expr, ErreurCalc> {
        match self.regarder() {
            Some(Jeton::Moins) => {
                self.pos += 1;
                let x = self.unaire()?;
                Ok(Expr::Neg(Box::new(x)))
            }
            Some(Jeton::Plus) => {
                self.pos += 1;
                self.unaire()
            }
            _ => self.atome(),
        }
    }

    /// Niveau 5 : littéral, appel de fonction, groupe parenthésé.
    fn atome(&mut self) -> Result<Expr, ErreurCalc> {
        match self.avancer() {
            Some(Jeton::Nombre(n)) => Ok(Expr::Nombre(*n)),

            Some(Jeton::Fonction(f)) => {
                self.attendre_par_g(f.nom())?;
                let arg = self.additive()?;
                self.attendre_par_d()?;
                Ok(Expr::Appel(*f, Box::new(arg)))
            }

            Some(Jeton::ParG) => {
                let e = self.additive()?;
                self.attendre_par_d()?;
                Ok(e)
            }

            Some(j) => Err(erreur_syntaxe(format!("opérande attendue, trouvé {j:?}"))),
            None => Err(erreur_syntaxe("opérande manquante en fin d’expression")),
        }
    }

    fn attendre_par_g(&mut self, fonction: &str) -> Result<(), ErreurCalc> {
        match self.avancer() {
            Some(Jeton::ParG) => Ok(()),
            _ => Err(erreur_syntaxe(format!("'(' attendue après {fonction}"))),
        }
    }

    fn attendre_par_d(&mut self) -> Result<(), ErreurCalc> {
        match self.avancer() {
            Some(Jeton::ParD) => Ok(()),
            _ => Err(erreur_syntaxe("parenthèse non fermée")),
        }
    }
}
