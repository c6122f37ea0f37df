mod detail;
mod events;
mod events_bar;
mod form;

use crate::app::{BackendHealth, ConsoleApp};
use crate::model::Quality;
use eframe::egui;

pub fn render_app(ctx: &egui::Context, frame: &mut eframe::Frame, app: &mut ConsoleApp) {
    top_bar(ctx, frame, app);

    egui::SidePanel::left("form_panel")
        .resizable(true)
        .default_width(430.0)
        .show(ctx, |ui| form::form_panel(ui, app));

    egui::CentralPanel::default().show(ctx, |ui| events::events_panel(ui, app));

    detail::detail_window(ctx, app);
    about_window(ctx, app);
    status_bar(ctx, app);
}

fn top_bar(ctx: &egui::Context, frame: &mut eframe::Frame, app: &mut ConsoleApp) {
    egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
        egui::menu::bar(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Refresh events").clicked() {
                    app.refresh_events();
                    ui.close_menu();
                }
                ui.separator();
                if ui.button("Quit").clicked() {
                    let _ = frame; // keep signature stable if we later use frame APIs
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("View", |ui| {
                if ui.button("Reset zoom").clicked() {
                    ctx.set_zoom_factor(1.0);
                    ui.close_menu();
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    app.ui.show_about = true;
                    ui.close_menu();
                }
            });
        });
    });
}

fn about_window(ctx: &egui::Context, app: &mut ConsoleApp) {
    if !app.ui.show_about {
        return;
    }

    egui::Window::new("About Telemetry Console")
        .open(&mut app.ui.show_about)
        .resizable(false)
        .show(ctx, |ui| {
            ui.label("Submit telemetry events and review what the backend stored.");
            ui.label("API base comes from telemetry.toml or TELEMETRY__API__BASE_URL.");
        });
}

fn status_bar(ctx: &egui::Context, app: &mut ConsoleApp) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!("Events: {}", app.recent.len()));
            ui.separator();
            ui.label(format!("API: {}", app.cfg.api.base_url));
            ui.separator();
            match app.backend {
                BackendHealth::Unknown => ui.label("backend: ?"),
                BackendHealth::Ok => {
                    ui.colored_label(quality_color(Quality::Ok), "backend: ok")
                }
                BackendHealth::Unreachable => {
                    ui.colored_label(quality_color(Quality::Bad), "backend: unreachable")
                }
            };
            if let Some(selected) = &app.selected {
                ui.separator();
                ui.label(format!("Selected: {}", selected.id));
            }
        });
    });
}

pub fn quality_color(quality: Quality) -> egui::Color32 {
    match quality {
        Quality::Ok => egui::Color32::from_rgb(90, 200, 120),
        Quality::Suspect => egui::Color32::from_rgb(255, 170, 0),
        Quality::Bad => egui::Color32::from_rgb(255, 70, 70),
    }
}

pub use events_bar::events_bar;
