//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : contenir l’état de la calculatrice — le mode et LE tampon de
//! saisie — et offrir les actions des touches. Pas de logique d’affichage.
//!
//! Contrats :
//! - un seul tampon : le résultat COMME l’erreur remplacent la saisie
//! - pas d’historique, pas d’annulation, rien ne survit entre deux "="
//! - les touches scientifiques s’appliquent au tampon ENTIER : taper
//!   "30+5" puis sin donne sin(35), pas 30+sin(5)

use crate::noyau::{eval_expression, format_resultat, Fonction};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Basique,
    Scientifique,
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    pub mode: Mode,

    // tampon unique : saisie, puis résultat ou texte d’erreur
    pub entree: String,
}

impl AppCalc {
    pub fn nouveau(mode: Mode) -> Self {
        Self {
            mode,
            entree: String::new(),
        }
    }

    /* ------------------------ Actions “touches” ------------------------ */

    /// Touche d’insertion : ajoute le texte au tampon, tel quel.
    pub fn saisir(&mut self, texte: &str) {
        self.entree.push_str(texte);
    }

    /// C : vide le tampon.
    pub fn effacer(&mut self) {
        self.entree.clear();
    }

    /// ⌫ : retire le dernier caractère (pas le dernier jeton).
    pub fn retour_arriere(&mut self) {
        self.entree.pop();
    }

    /// = : évalue le tampon entier et le REMPLACE par le résultat,
    /// ou par un des deux textes d’erreur fixes.
    pub fn evaluer(&mut self) {
        tracing::debug!(entree = %self.entree, "évaluation");

        self.entree = match eval_expression(&self.entree) {
            Ok(v) => format_resultat(v),
            Err(e) => {
                tracing::warn!(erreur = %e, "évaluation échouée");
                e.texte_affichage().to_string()
            }
        };
    }

    /// Touche scientifique (sin, log, x², 1/x, …) : évalue le tampon
    /// ENTIER, applique la fonction à cette valeur, remplace le tampon.
    pub fn appliquer_fonction(&mut self, f: Fonction) {
        tracing::debug!(fonction = f.nom(), entree = %self.entree, "fonction sur tampon entier");

        let resultat = eval_expression(&self.entree).and_then(|x| f.appliquer(x));

        self.entree = match resultat {
            Ok(v) => format_resultat(v),
            Err(e) => {
                tracing::warn!(erreur = %e, "fonction échouée");
                e.texte_affichage().to_string()
            }
        };
    }

    /// Touche constante (π, e) : REMPLACE le tampon par le symbole,
    /// sans tenir compte de ce qui était tapé.
    pub fn inserer_constante(&mut self, symbole: &str) {
        self.entree.clear();
        self.entree.push_str(symbole);
    }
}
