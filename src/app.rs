// src/app.rs
//
// Calculatrice Duo — module App (racine)
// --------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc et Mode (pour main.rs)
// - Fournir l’impl eframe::App
//
// Tout passe par les boutons : aucune gestion clavier.

pub mod etat;
pub mod vue;

pub use etat::{AppCalc, Mode};

use eframe::egui;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let fond = egui::Frame::central_panel(&ctx.style()).fill(vue::FOND);

        egui::CentralPanel::default().frame(fond).show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });
    }
}
