use super::canvas_view::CanvasView;
use crate::config::DrawerConfig;
use crate::dataset::{Label, SampleWriter};
use crate::error::DigitError;
use crate::preprocessing::Pipeline;
use eframe::egui;

/// Draw-and-save window for collecting labeled samples
pub struct DrawerApp {
    writer: SampleWriter,
    pipeline: Pipeline,
    canvas_view: CanvasView,
    label_text: String,
    status: String,
}

impl DrawerApp {
    pub fn new(config: &DrawerConfig) -> Self {
        Self {
            writer: SampleWriter::new(&config.output_path),
            pipeline: Pipeline::new(),
            canvas_view: CanvasView::new(config.canvas_size, config.brush_width),
            label_text: String::new(),
            status: String::new(),
        }
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn set_label_text(&mut self, text: impl Into<String>) {
        self.label_text = text.into();
    }

    pub fn canvas_view_mut(&mut self) -> &mut CanvasView {
        &mut self.canvas_view
    }

    /// Validate the label, normalize the drawing and append it.
    /// The canvas is cleared only after a successful save.
    pub fn save(&mut self) -> Result<Label, DigitError> {
        match self.try_save() {
            Ok(label) => {
                tracing::info!("Saved digit '{}' to {}", label, self.writer.path().display());
                self.status = format!("Saved '{}'", label);
                self.canvas_view.clear();
                Ok(label)
            }
            Err(e) => {
                if e.is_user_error() {
                    tracing::warn!(code = e.code(), "{}", e);
                } else {
                    tracing::error!(code = e.code(), "Save failed: {}", e);
                }
                self.status = match &e {
                    DigitError::InvalidLabel(_) => "Please enter a digit label (0-9).".to_string(),
                    DigitError::EmptyCanvas => "No digit drawn.".to_string(),
                    other => format!("Save failed: {}", other),
                };
                Err(e)
            }
        }
    }

    fn try_save(&self) -> Result<Label, DigitError> {
        let label = Label::parse(&self.label_text)?;
        let sample = self.pipeline.normalize(self.canvas_view.canvas().image())?;
        self.writer.append(&sample.to_record(label))?;
        Ok(label)
    }
}

impl eframe::App for DrawerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            self.canvas_view.show(ui);

            ui.add_space(6.0);
            ui.horizontal(|ui| {
                if ui.button("Clear").clicked() {
                    self.canvas_view.clear();
                    self.status.clear();
                }
                if ui.button("Save").clicked() {
                    // Failures are already logged and shown in the status line
                    let _ = self.save();
                }
                ui.label("Enter Label:");
                ui.add(egui::TextEdit::singleline(&mut self.label_text).desired_width(30.0));
            });

            if !self.status.is_empty() {
                ui.label(egui::RichText::new(&self.status).color(egui::Color32::from_gray(150)));
            }
        });
    }
}
