use clap::Parser;
use digitpad::config::DrawerArgs;

#[cfg(feature = "gui")]
fn main() -> anyhow::Result<()> {
    use digitpad::config::DrawerConfig;
    use digitpad::gui::DrawerApp;
    use eframe::{egui::ViewportBuilder, NativeOptions};

    let args = DrawerArgs::parse();
    digitpad::logging::init(&args.log_level);

    let config = DrawerConfig::from(args);

    tracing::info!("Starting digitpad-drawer v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Appending samples to {}", config.output_path.display());

    let side = config.canvas_size as f32;
    let options = NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size([side + 40.0, side + 90.0])
            .with_resizable(false),
        ..Default::default()
    };

    let app = DrawerApp::new(&config);
    eframe::run_native("Draw a Digit", options, Box::new(|_cc| Ok(Box::new(app))))
        .map_err(|e| anyhow::anyhow!("GUI error: {}", e))
}

#[cfg(not(feature = "gui"))]
fn main() {
    DrawerArgs::parse();
    eprintln!("GUI feature is not enabled. Please build with --features gui");
    std::process::exit(1);
}
