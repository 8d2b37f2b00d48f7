use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Default drawing canvas size in pixels (10x the model input)
pub const DEFAULT_CANVAS_SIZE: u32 = 280;
/// Default brush width in pixels
pub const DEFAULT_BRUSH_WIDTH: f32 = 12.0;

/// Memory layout of the model's input tensor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum InputLayout {
    /// `[1, 28, 28, 1]`, as exported from Keras
    #[default]
    Nhwc,
    /// `[1, 1, 28, 28]`, as exported from PyTorch
    Nchw,
}

impl InputLayout {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Nhwc => "nhwc",
            Self::Nchw => "nchw",
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "digitpad")]
#[command(about = "Draw a digit and let a pre-trained classifier recognize it")]
#[command(version)]
pub struct RecognizerArgs {
    /// Path to the pre-trained classifier model (.rten)
    #[arg(long, env = "DIGITPAD_MODEL", default_value = "final_model.rten")]
    pub model: PathBuf,

    /// Input tensor layout expected by the model
    #[arg(long, env = "DIGITPAD_INPUT_LAYOUT", value_enum, default_value = "nhwc")]
    pub input_layout: InputLayout,

    /// Apply softmax to the model output (for models that emit raw logits)
    #[arg(long)]
    pub softmax: bool,

    /// Drawing canvas size in pixels
    #[arg(long, default_value_t = DEFAULT_CANVAS_SIZE)]
    pub canvas_size: u32,

    /// Brush width in pixels
    #[arg(long, default_value_t = DEFAULT_BRUSH_WIDTH)]
    pub brush_width: f32,

    /// Classify this image file and exit instead of opening a window
    #[arg(long)]
    pub image: Option<PathBuf>,

    /// Print the headless prediction as JSON
    #[arg(long, requires = "image")]
    pub json: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,
}

#[derive(Parser, Debug)]
#[command(name = "digitpad-drawer")]
#[command(about = "Draw digits and append them as labeled samples to a CSV file")]
#[command(version)]
pub struct DrawerArgs {
    /// CSV file that labeled samples are appended to
    #[arg(long, env = "DIGITPAD_SAMPLES", default_value = "digit_data1.csv")]
    pub output: PathBuf,

    /// Drawing canvas size in pixels
    #[arg(long, default_value_t = DEFAULT_CANVAS_SIZE)]
    pub canvas_size: u32,

    /// Brush width in pixels
    #[arg(long, default_value_t = DEFAULT_BRUSH_WIDTH)]
    pub brush_width: f32,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,
}

/// Recognizer configuration
#[derive(Debug, Clone)]
pub struct RecognizerConfig {
    pub model_path: PathBuf,
    pub input_layout: InputLayout,
    pub apply_softmax: bool,
    pub canvas_size: u32,
    pub brush_width: f32,
}

impl Default for RecognizerConfig {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from("final_model.rten"),
            input_layout: InputLayout::default(),
            apply_softmax: false,
            canvas_size: DEFAULT_CANVAS_SIZE,
            brush_width: DEFAULT_BRUSH_WIDTH,
        }
    }
}

impl From<&RecognizerArgs> for RecognizerConfig {
    fn from(args: &RecognizerArgs) -> Self {
        Self {
            model_path: args.model.clone(),
            input_layout: args.input_layout,
            apply_softmax: args.softmax,
            canvas_size: args.canvas_size,
            brush_width: args.brush_width,
        }
    }
}

/// Drawer configuration
#[derive(Debug, Clone)]
pub struct DrawerConfig {
    pub output_path: PathBuf,
    pub canvas_size: u32,
    pub brush_width: f32,
}

impl From<DrawerArgs> for DrawerConfig {
    fn from(args: DrawerArgs) -> Self {
        Self {
            output_path: args.output,
            canvas_size: args.canvas_size,
            brush_width: args.brush_width,
        }
    }
}
