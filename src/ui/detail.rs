use crate::app::ConsoleApp;
use eframe::egui;

pub fn detail_window(ctx: &egui::Context, app: &mut ConsoleApp) {
    let Some(event) = app.selected.clone() else {
        return;
    };

    let mut open = true;
    egui::Window::new("Event Detail")
        .open(&mut open)
        .resizable(true)
        .default_width(480.0)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("ID").strong());
                ui.monospace(&event.id);
            });
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("Timestamp").strong());
                ui.monospace(&event.timestamp);
            });
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("Device").strong());
                ui.monospace(&event.device_id);
                ui.label(format!("({})", event.source_label()));
            });

            ui.add_space(10.0);
            ui.label(egui::RichText::new("Metrics").strong());
            for metric in &event.payload.metrics {
                ui.horizontal(|ui| {
                    ui.monospace(format!("{}  {} {}", metric.name, metric.value, metric.unit));
                    ui.colored_label(
                        crate::ui::quality_color(metric.quality),
                        metric.quality.label(),
                    );
                });
            }

            if !event.payload.tags.is_null() {
                ui.add_space(10.0);
                ui.label(egui::RichText::new("Tags").strong());
                let pretty = serde_json::to_string_pretty(&event.payload.tags)
                    .unwrap_or_else(|_| event.payload.tags.to_string());
                ui.monospace(pretty);
            }

            if let Some(note) = event.note_text() {
                ui.add_space(10.0);
                ui.label(egui::RichText::new("Note").strong());
                ui.label(note);
            }

            ui.add_space(12.0);
            if ui.button("Close").clicked() {
                app.selected = None;
            }
        });

    if !open {
        app.selected = None;
    }
}
