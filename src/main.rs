mod app;
mod field;

use std::path::PathBuf;

use clap::Parser;
use log::info;

use crate::field::FieldTuning;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    #[arg(long)]
    preset: Option<PathBuf>,

    #[arg(long)]
    particles: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = Args::parse();

    let mut tuning = match &args.preset {
        Some(path) => field::load_preset(path)?,
        None => FieldTuning::default(),
    };
    if let Some(count) = args.particles {
        tuning.particle_count = count;
        tuning = tuning.sanitized();
    }
    info!("seeding {} particles", tuning.particle_count);

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default().with_inner_size([1440.0, 920.0]),
        ..Default::default()
    };

    eframe::run_native(
        "driftfield",
        options,
        Box::new(move |cc| {
            Ok(Box::new(app::BackdropApp::new(
                cc,
                tuning,
                args.preset.clone(),
            )))
        }),
    )
    .map_err(|error| anyhow::anyhow!("failed to run the ui: {error}"))
}
