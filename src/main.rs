use clap::Parser;
use digitpad::config::{RecognizerArgs, RecognizerConfig};
use digitpad::{engines, headless, DigitClassifier};

fn main() -> anyhow::Result<()> {
    let args = RecognizerArgs::parse();
    digitpad::logging::init(&args.log_level);

    let config = RecognizerConfig::from(&args);

    tracing::info!("Starting digitpad v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Loading model from {}", config.model_path.display());

    // A missing model is fatal
    let classifier = engines::create(&config)?;
    tracing::info!(
        engine = classifier.name(),
        "{}",
        classifier.description()
    );

    match &args.image {
        Some(path) => {
            let line = headless::classify_file(classifier.as_ref(), path, args.json)?;
            println!("{}", line);
            Ok(())
        }
        None => run_gui(classifier, config),
    }
}

#[cfg(feature = "gui")]
fn run_gui(classifier: Box<dyn DigitClassifier>, config: RecognizerConfig) -> anyhow::Result<()> {
    use digitpad::gui::RecognizerApp;
    use eframe::{egui::ViewportBuilder, NativeOptions};

    let side = config.canvas_size as f32;
    let options = NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size([side + 40.0, side + 160.0])
            .with_resizable(false),
        ..Default::default()
    };

    let app = RecognizerApp::new(classifier, &config);
    eframe::run_native(
        "Digit Recognizer",
        options,
        Box::new(|_cc| Ok(Box::new(app))),
    )
    .map_err(|e| anyhow::anyhow!("GUI error: {}", e))
}

#[cfg(not(feature = "gui"))]
fn run_gui(_classifier: Box<dyn DigitClassifier>, _config: RecognizerConfig) -> anyhow::Result<()> {
    anyhow::bail!("GUI feature is not enabled. Rebuild with --features gui or pass --image")
}
