use super::canvas_view::{upload_preview, CanvasView};
use crate::config::RecognizerConfig;
use crate::engine::DigitClassifier;
use crate::error::DigitError;
use crate::preprocessing::{NormalizedSample, Pipeline};
use eframe::egui;

/// Scale of the normalized-sample preview
const PREVIEW_SCALE: f32 = 3.0;

/// Draw-and-predict window. Owns the classifier for its whole lifetime.
pub struct RecognizerApp {
    classifier: Box<dyn DigitClassifier>,
    pipeline: Pipeline,
    canvas_view: CanvasView,
    result: String,
    preview: Option<NormalizedSample>,
    preview_texture: Option<egui::TextureHandle>,
    preview_dirty: bool,
}

impl RecognizerApp {
    pub fn new(classifier: Box<dyn DigitClassifier>, config: &RecognizerConfig) -> Self {
        Self {
            classifier,
            pipeline: Pipeline::new(),
            canvas_view: CanvasView::new(config.canvas_size, config.brush_width),
            result: String::new(),
            preview: None,
            preview_texture: None,
            preview_dirty: false,
        }
    }

    pub fn result(&self) -> &str {
        &self.result
    }

    pub fn canvas_view_mut(&mut self) -> &mut CanvasView {
        &mut self.canvas_view
    }

    /// Normalize the drawing and classify it
    pub fn predict(&mut self) {
        let outcome = self
            .pipeline
            .normalize(self.canvas_view.canvas().image())
            .and_then(|sample| {
                let prediction = self.classifier.classify(&sample)?;
                Ok((sample, prediction))
            });

        match outcome {
            Ok((sample, prediction)) => {
                tracing::info!(
                    digit = prediction.digit,
                    confidence = prediction.confidence,
                    engine = self.classifier.name(),
                    "Prediction"
                );
                self.result = prediction.display();
                self.preview = Some(sample);
                self.preview_dirty = true;
            }
            Err(e) => {
                if e.is_user_error() {
                    tracing::warn!(code = e.code(), "Predict skipped: {}", e);
                } else {
                    tracing::error!(code = e.code(), "Prediction failed: {}", e);
                }
                self.result = match e {
                    DigitError::EmptyCanvas => "No digit".to_string(),
                    _ => "Error".to_string(),
                };
                self.preview = None;
            }
        }
    }

    pub fn clear(&mut self) {
        self.canvas_view.clear();
        self.result.clear();
        self.preview = None;
    }
}

impl eframe::App for RecognizerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            self.canvas_view.show(ui);

            ui.add_space(6.0);
            ui.horizontal(|ui| {
                if ui.button("Predict").clicked() {
                    self.predict();
                }
                if ui.button("Clear").clicked() {
                    self.clear();
                }
                ui.label("Prediction: ");
                ui.label(egui::RichText::new(&self.result).size(16.0).strong());
            });

            if self.preview_dirty {
                if let Some(sample) = &self.preview {
                    upload_preview(ctx, &mut self.preview_texture, sample.image());
                }
                self.preview_dirty = false;
            }

            if let (Some(sample), Some(texture)) = (&self.preview, &self.preview_texture) {
                ui.add_space(6.0);
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new("Model input:").color(egui::Color32::from_gray(150)),
                    );
                    let (w, h) = sample.image().dimensions();
                    let size = egui::vec2(w as f32 * PREVIEW_SCALE, h as f32 * PREVIEW_SCALE);
                    ui.add(egui::Image::new((texture.id(), size)));
                });
            }
        });
    }
}
