//! Desktop front-ends built on eframe/egui

pub mod canvas_view;
pub mod drawer;
pub mod recognizer;

pub use canvas_view::CanvasView;
pub use drawer::DrawerApp;
pub use recognizer::RecognizerApp;
