//! UI-Layer mit egui: Toolbar, Status-Bar, Canvas-Input und Painter.
//!
//! Übersetzt Maus-Events in Intents und malt die fertige `RenderScene`.

pub mod canvas;
pub mod painter;
pub mod status;
pub mod toolbar;

pub use canvas::CanvasInput;
pub use painter::paint_scene;
pub use status::render_status_bar;
pub use toolbar::render_toolbar;
