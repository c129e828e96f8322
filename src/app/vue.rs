// src/app/vue.rs
//
// Vue (UI egui)
// -------------
// Thème sombre, affichage aligné à
// droite, grille 4 colonnes, couleurs par famille de touches.
// Le survol est celui d’egui (éclaircissement intégré).
//
// Disposition basique :
//   C  ⌫  %  /
//   7  8  9  *
//   4  5  6  -
//   1  2  3  +
//   0  0  .  =        (0 en double largeur)
//
// Le mode scientifique ajoute quatre rangées AU-DESSUS du pavé basique.

use eframe::egui;

use super::etat::{AppCalc, Mode};
use crate::noyau::Fonction;

/* ------------------------ Couleurs ------------------------ */

pub const FOND: egui::Color32 = egui::Color32::from_rgb(0x2e, 0x2e, 0x2e);
const AFFICHAGE: egui::Color32 = egui::Color32::from_rgb(0x1e, 0x1e, 0x1e);
const TOUCHE: egui::Color32 = egui::Color32::from_rgb(0x3e, 0x3e, 0x3e);
const TOUCHE_C: egui::Color32 = egui::Color32::from_rgb(0xe7, 0x4c, 0x3c);
const TOUCHE_RETOUR: egui::Color32 = egui::Color32::from_rgb(0xe6, 0x7e, 0x22);
const TOUCHE_GRISE: egui::Color32 = egui::Color32::from_rgb(0x55, 0x55, 0x55);
const TOUCHE_OP: egui::Color32 = egui::Color32::from_rgb(0xf3, 0x9c, 0x12);
const TOUCHE_EGAL: egui::Color32 = egui::Color32::from_rgb(0x2e, 0xcc, 0x71);

const LARGEUR_TOUCHE: f32 = 62.0;
const HAUTEUR_TOUCHE: f32 = 44.0;

/// Ce que fait une touche quand on la presse.
#[derive(Clone, Copy, Debug)]
enum Touche {
    Inserer(&'static str),
    Effacer,
    RetourArriere,
    Egal,
    Fonction(Fonction),
    Constante(&'static str),
}

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...).
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        self.ui_affichage(ui);
        ui.add_space(8.0);

        if self.mode == Mode::Scientifique {
            self.ui_pave_scientifique(ui);
            ui.add_space(2.0);
        }

        self.ui_pave_basique(ui);
    }

    /// Zone d’affichage : tampon courant, aligné à droite, fond sombre.
    fn ui_affichage(&self, ui: &mut egui::Ui) {
        egui::Frame::new()
            .fill(AFFICHAGE)
            .inner_margin(egui::Margin::symmetric(10, 14))
            .corner_radius(4)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let texte = if self.entree.is_empty() {
                        "0"
                    } else {
                        self.entree.as_str()
                    };
                    ui.label(
                        egui::RichText::new(texte)
                            .monospace()
                            .size(24.0)
                            .color(egui::Color32::WHITE),
                    );
                });
            });
    }

    fn ui_pave_scientifique(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_scientifique")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.touche(ui, "sin", TOUCHE_GRISE, Touche::Fonction(Fonction::Sin));
                self.touche(ui, "cos", TOUCHE_GRISE, Touche::Fonction(Fonction::Cos));
                self.touche(ui, "tan", TOUCHE_GRISE, Touche::Fonction(Fonction::Tan));
                self.touche(ui, "√", TOUCHE_GRISE, Touche::Fonction(Fonction::Sqrt));
                ui.end_row();

                self.touche(ui, "log", TOUCHE_GRISE, Touche::Fonction(Fonction::Log));
                self.touche(ui, "ln", TOUCHE_GRISE, Touche::Fonction(Fonction::Ln));
                self.touche(ui, "x²", TOUCHE_GRISE, Touche::Fonction(Fonction::Carre));
                self.touche(ui, "x³", TOUCHE_GRISE, Touche::Fonction(Fonction::Cube));
                ui.end_row();

                self.touche(ui, "1/x", TOUCHE_GRISE, Touche::Fonction(Fonction::Inverse));
                self.touche(ui, "π", TOUCHE_GRISE, Touche::Constante("π"));
                self.touche(ui, "e", TOUCHE_GRISE, Touche::Constante("e"));
                self.touche(ui, "**", TOUCHE_OP, Touche::Inserer("**"));
                ui.end_row();

                self.touche(ui, "(", TOUCHE_GRISE, Touche::Inserer("("));
                self.touche(ui, ")", TOUCHE_GRISE, Touche::Inserer(")"));
                ui.label("");
                ui.label("");
                ui.end_row();
            });
    }

    fn ui_pave_basique(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_basique")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.touche(ui, "C", TOUCHE_C, Touche::Effacer);
                self.touche(ui, "⌫", TOUCHE_RETOUR, Touche::RetourArriere);
                self.touche(ui, "%", TOUCHE_GRISE, Touche::Inserer("%"));
                self.touche(ui, "/", TOUCHE_OP, Touche::Inserer("/"));
                ui.end_row();

                self.touche(ui, "7", TOUCHE, Touche::Inserer("7"));
                self.touche(ui, "8", TOUCHE, Touche::Inserer("8"));
                self.touche(ui, "9", TOUCHE, Touche::Inserer("9"));
                self.touche(ui, "*", TOUCHE_OP, Touche::Inserer("*"));
                ui.end_row();

                self.touche(ui, "4", TOUCHE, Touche::Inserer("4"));
                self.touche(ui, "5", TOUCHE, Touche::Inserer("5"));
                self.touche(ui, "6", TOUCHE, Touche::Inserer("6"));
                self.touche(ui, "-", TOUCHE_OP, Touche::Inserer("-"));
                ui.end_row();

                self.touche(ui, "1", TOUCHE, Touche::Inserer("1"));
                self.touche(ui, "2", TOUCHE, Touche::Inserer("2"));
                self.touche(ui, "3", TOUCHE, Touche::Inserer("3"));
                self.touche(ui, "+", TOUCHE_OP, Touche::Inserer("+"));
                ui.end_row();
            });

        // Dernière rangée hors grille : Grid n’a pas de colspan et le "0"
        // est en double largeur. Même espacement => colonnes
        // alignées avec la grille au-dessus.
        ui.horizontal(|ui| {
            self.touche_dim(ui, "0", TOUCHE, Touche::Inserer("0"), LARGEUR_TOUCHE * 2.0 + 6.0);
            self.touche(ui, ".", TOUCHE, Touche::Inserer("."));
            self.touche(ui, "=", TOUCHE_EGAL, Touche::Egal);
        });
    }

    /* ------------------------ Touches ------------------------ */

    fn touche(&mut self, ui: &mut egui::Ui, label: &str, couleur: egui::Color32, t: Touche) {
        self.touche_dim(ui, label, couleur, t, LARGEUR_TOUCHE);
    }

    fn touche_dim(
        &mut self,
        ui: &mut egui::Ui,
        label: &str,
        couleur: egui::Color32,
        t: Touche,
        largeur: f32,
    ) {
        let bouton = egui::Button::new(
            egui::RichText::new(label)
                .size(18.0)
                .color(egui::Color32::WHITE),
        )
        .fill(couleur)
        .corner_radius(4);

        let resp = ui.add_sized([largeur, HAUTEUR_TOUCHE], bouton);
        if !resp.clicked() {
            return;
        }

        match t {
            Touche::Inserer(texte) => self.saisir(texte),
            Touche::Effacer => self.effacer(),
            Touche::RetourArriere => self.retour_arriere(),
            Touche::Egal => self.evaluer(),
            Touche::Fonction(f) => self.appliquer_fonction(f),
            Touche::Constante(symbole) => self.inserer_constante(symbole),
        }
    }
}
