// src/main.rs
//
// Calculatrice Duo — point d’entrée
// ---------------------------------
// Une seule application, deux visages :
// - par défaut        : pavé basique (chiffres + - * / % . =)
// - --scientifique    : rangées sin/cos/tan/√, log/ln/x²/x³, 1/x/π/e/**
//
// Le calcul passe par le noyau (src/noyau/) : tokenize -> parse -> eval,
// jamais par une évaluation de code dynamique.

use clap::Parser;
use eframe::egui;

mod app;
mod noyau;

use app::{AppCalc, Mode};

/// Calculatrice de bureau, basique ou scientifique.
#[derive(Parser, Debug)]
#[command(name = "calculatrice-duo", version, about)]
struct Args {
    /// Active le pavé scientifique.
    #[arg(long)]
    scientifique: bool,
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let mode = if args.scientifique {
        Mode::Scientifique
    } else {
        Mode::Basique
    };

    let (titre, taille) = match mode {
        Mode::Basique => ("Calculatrice", [300.0, 400.0]),
        Mode::Scientifique => ("Calculatrice scientifique", [300.0, 620.0]),
    };

    tracing::info!(?mode, "démarrage");

    // Fenêtre fixe.
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(titre)
            .with_inner_size(taille)
            .with_resizable(false),
        ..Default::default()
    };

    eframe::run_native(
        titre,
        options,
        Box::new(move |_cc| Ok(Box::new(AppCalc::nouveau(mode)))),
    )
}
