// src/noyau/erreurs.rs
//
// Taxonomie d’erreurs du noyau
// ----------------------------
// Une famille par étape du pipeline :
// - Lexique / IdentInconnu : caractère ou mot inconnu (tokenize)
// - Syntaxe                : suite de jetons mal formée (parse)
// - DivisionParZero        : diviseur (/, %) exactement nul (eval)
// - Domaine                : argument hors domaine d’une fonction (eval)
// - Debordement            : résultat non représentable en f64
//                            (frontière du pipeline : jamais de NaN/inf rendu)
//
// Contrat d’affichage : à la frontière UI, TOUT
// s’effondre en deux textes fixes. Pas de message riche à l’écran.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ErreurCalc {
    #[error("caractère inattendu: '{caractere}'")]
    Lexique { caractere: char },

    #[error("identifiant inconnu: '{ident}'")]
    IdentInconnu { ident: String },

    #[error("syntaxe invalide: {0}")]
    Syntaxe(String),

    #[error("division par zéro")]
    DivisionParZero,

    #[error("{fonction}({argument}) hors domaine")]
    Domaine {
        fonction: &'static str,
        argument: f64,
    },

    #[error("résultat non fini (débordement f64)")]
    Debordement,
}

impl ErreurCalc {
    /// Texte affiché dans la zone de saisie quand l’évaluation échoue.
    ///
    /// Deux textes seulement, volontairement :
    /// - division par zéro  => "Error: Div by 0"
    /// - tout le reste      => "Error"
    pub fn texte_affichage(&self) -> &'static str {
        match self {
            ErreurCalc::DivisionParZero => "Error: Div by 0",
            _ => "Error",
        }
    }
}

/// Raccourci : erreur de syntaxe avec message.
pub fn erreur_syntaxe(msg: impl Into<String>) -> ErreurCalc {
    ErreurCalc::Syntaxe(msg.into())
}
