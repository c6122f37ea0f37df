use crate::api::{ApiClient, ApiHandle};
use crate::app::ConsoleApp;
use crate::config::ConsoleCfg;
use eframe::egui;

pub fn run(cfg: ConsoleCfg) -> eframe::Result<()> {
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Telemetry Console")
            .with_inner_size([1100.0, 720.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Telemetry Console",
        native_options,
        Box::new(move |cc| {
            let api = ApiHandle::new(ApiClient::new(&cfg.api.base_url))
                .with_repaint(cc.egui_ctx.clone());
            Box::new(ConsoleApp::new(cfg, api))
        }),
    )
}
