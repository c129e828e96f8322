// src/noyau/format.rs
//
// Couche de présentation (frontière UI)
// -------------------------------------
// L’évaluateur rend un f64 brut ; c’est ICI que vit l’arrondi à 10
// décimales (il masque le bruit de représentation :
// 0.1+0.2 s’affiche 0.3). Règles :
// - arrondi à 10 décimales (sauf si l’échelle le rend impossible en f64)
// - -0.0 normalisé en 0.0
// - entier => pas de point décimal ("14", jamais "14.0")

/// Arrondit à 10 décimales et normalise -0.0.
pub fn arrondir_resultat(v: f64) -> f64 {
    const ECHELLE: f64 = 1e10;

    let mut r = v;
    let agrandi = v * ECHELLE;
    // au-delà de 2^53 l’arrondi n’a plus de sens (tout est déjà entier)
    if agrandi.is_finite() && agrandi.abs() < 9.0e15 {
        r = agrandi.round() / ECHELLE;
    }

    if r == 0.0 {
        r = 0.0; // écrase -0.0
    }
    r
}

/// Texte affiché pour un résultat numérique.
pub fn format_resultat(v: f64) -> String {
    let r = arrondir_resultat(v);
    // Display de f64 : "14" pour 14.0, "0.3" pour 0.3
    format!("{r}")
}
