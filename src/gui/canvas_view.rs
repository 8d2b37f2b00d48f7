use crate::canvas::{Brush, Canvas, Point, PointerEvent};
use eframe::egui;
use image::GrayImage;

/// Full-texture UV rectangle
fn full_uv() -> egui::Rect {
    egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0))
}

/// Upload a grayscale buffer as an egui image
pub fn to_color_image(image: &GrayImage) -> egui::ColorImage {
    let (w, h) = image.dimensions();
    egui::ColorImage::from_gray([w as usize, h as usize], image.as_raw())
}

/// egui widget that routes primary-button drags into a [`Canvas`]
pub struct CanvasView {
    canvas: Canvas,
    texture: Option<egui::TextureHandle>,
    dirty: bool,
}

impl CanvasView {
    pub fn new(size: u32, brush_width: f32) -> Self {
        Self {
            canvas: Canvas::with_brush(size, Brush::new(brush_width)),
            texture: None,
            dirty: true,
        }
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Feed a pointer event, marking the texture stale when the buffer changed
    pub fn handle(&mut self, event: PointerEvent) -> bool {
        let changed = self.canvas.handle(event);
        self.dirty |= changed;
        changed
    }

    pub fn clear(&mut self) {
        self.canvas.clear();
        self.dirty = true;
    }

    pub fn show(&mut self, ui: &mut egui::Ui) -> egui::Response {
        let side = self.canvas.size() as f32;
        let (response, painter) =
            ui.allocate_painter(egui::vec2(side, side), egui::Sense::drag());

        let to_canvas = |pos: egui::Pos2| {
            let rect = response.rect;
            let scale = side / rect.width().max(1.0);
            Point::from_f32((pos.x - rect.min.x) * scale, (pos.y - rect.min.y) * scale)
        };

        let event = if response.drag_started_by(egui::PointerButton::Primary) {
            response
                .interact_pointer_pos()
                .map(|pos| PointerEvent::Press(to_canvas(pos)))
        } else if response.dragged_by(egui::PointerButton::Primary) {
            response
                .interact_pointer_pos()
                .map(|pos| PointerEvent::Move(to_canvas(pos)))
        } else if response.drag_stopped_by(egui::PointerButton::Primary) {
            Some(PointerEvent::Release)
        } else {
            None
        };

        if let Some(event) = event {
            self.handle(event);
        }

        if self.dirty || self.texture.is_none() {
            let image = to_color_image(self.canvas.image());
            match &mut self.texture {
                Some(texture) => texture.set(image, egui::TextureOptions::NEAREST),
                None => {
                    self.texture = Some(ui.ctx().load_texture(
                        "digit-canvas",
                        image,
                        egui::TextureOptions::NEAREST,
                    ))
                }
            }
            self.dirty = false;
        }

        if let Some(texture) = &self.texture {
            painter.image(texture.id(), response.rect, full_uv(), egui::Color32::WHITE);
        }
        response
    }
}

/// Upload a normalized sample into a preview texture, replacing any previous one
pub fn upload_preview(
    ctx: &egui::Context,
    texture: &mut Option<egui::TextureHandle>,
    image: &GrayImage,
) {
    let color = to_color_image(image);
    match texture {
        Some(handle) => handle.set(color, egui::TextureOptions::NEAREST),
        None => {
            *texture = Some(ctx.load_texture(
                "digit-preview",
                color,
                egui::TextureOptions::NEAREST,
            ))
        }
    }
}
