use eframe::egui;
use sigchart_core::{ChartColor, ChartSession};

mod app;
mod overlay;
mod render;

pub use app::ChartApp;

#[derive(Debug, Clone)]
pub struct GuiConfig {
    pub title: String,
    pub width: f32,
    pub height: f32,
}

impl Default for GuiConfig {
    fn default() -> Self {
        Self {
            title: "sigchart".to_string(),
            width: 800.0,
            height: 800.0,
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum GuiError {
    #[error("gui error: {0}")]
    Gui(String),
}

/// Opens the chart window and drives the cooperative loop until the window
/// is closed. The session must be fully configured before any window exists;
/// nothing here can fail in a recoverable way.
pub fn run_gui(config: GuiConfig, session: ChartSession, color: ChartColor) -> Result<(), GuiError> {
    let mut options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.width, config.height])
            .with_resizable(true),
        ..Default::default()
    };
    // NOTE: Vsync generates hangs and lag on occluded windows.
    options.vsync = false;

    eframe::run_native(
        &config.title,
        options,
        Box::new(move |_cc| Box::new(ChartApp::new(session, color))),
    )
    .map_err(|err| GuiError::Gui(err.to_string()))
}
