use eframe::egui;

mod app;
mod config;
mod error;
mod style;
mod utils;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let config = config::load_config();
    eframe::run_native(
        "Action Menu Demo",
        eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default().with_inner_size([480.0, 360.0]),
            ..Default::default()
        },
        Box::new(move |cc| Ok(Box::new(app::DemoApp::new(cc, &config)))),
    )
    .map_err(|e| anyhow::anyhow!("failed to run demo: {e}"))
}
