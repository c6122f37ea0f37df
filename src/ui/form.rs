use crate::app::ConsoleApp;
use crate::model::{MetricEdit, Quality};
use crate::util::time;
use eframe::egui;

pub fn form_panel(ui: &mut egui::Ui, app: &mut ConsoleApp) {
    ui.heading("New Telemetry Event");
    ui.add_space(6.0);

    egui::ScrollArea::vertical()
        .id_source("form_scroll")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            ui.label("Timestamp");
            ui.horizontal(|ui| {
                ui.add(egui::TextEdit::singleline(&mut app.draft.timestamp).desired_width(260.0));
                if ui.button("Now").clicked() {
                    app.draft.timestamp = time::now_rfc3339();
                }
            });
            if !app.draft.timestamp.is_empty() && !time::parses_as_rfc3339(&app.draft.timestamp) {
                ui.colored_label(
                    crate::ui::quality_color(Quality::Suspect),
                    "not an RFC 3339 timestamp",
                );
            }

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.label("Device ID");
                    ui.add(
                        egui::TextEdit::singleline(&mut app.draft.device_id).desired_width(170.0),
                    );
                });
                ui.vertical(|ui| {
                    ui.label("Source");
                    ui.add(egui::TextEdit::singleline(&mut app.draft.source).desired_width(170.0));
                });
            });

            ui.add_space(10.0);
            ui.label(egui::RichText::new("Metrics").strong());
            ui.add_space(4.0);
            metric_rows(ui, app);
            if ui.button("+ Add Metric").clicked() {
                app.add_metric();
            }

            ui.add_space(10.0);
            ui.label("Tags (JSON)");
            ui.add(
                egui::TextEdit::multiline(&mut app.draft.tags)
                    .desired_rows(3)
                    .desired_width(f32::INFINITY)
                    .font(egui::TextStyle::Monospace),
            );

            ui.add_space(6.0);
            ui.label("Note");
            ui.add(egui::TextEdit::singleline(&mut app.draft.note).desired_width(f32::INFINITY));

            ui.add_space(12.0);
            // Stays enabled while a request is in flight; overlapping
            // submissions are allowed.
            if ui.button("Submit Event").clicked() {
                app.submit();
            }

            status_banner(ui, app);
        });
}

fn metric_rows(ui: &mut egui::Ui, app: &mut ConsoleApp) {
    let mut edits: Vec<(usize, MetricEdit)> = Vec::new();
    let mut removed: Option<usize> = None;

    for (i, metric) in app.draft.metrics().iter().enumerate() {
        ui.horizontal(|ui| {
            let mut name = metric.name.clone();
            if ui
                .add(
                    egui::TextEdit::singleline(&mut name)
                        .hint_text("Name")
                        .desired_width(90.0),
                )
                .changed()
            {
                edits.push((i, MetricEdit::Name(name)));
            }

            if let Some(value) = app.ui.value_inputs.get_mut(i) {
                if ui
                    .add(
                        egui::TextEdit::singleline(value)
                            .hint_text("Value")
                            .desired_width(70.0),
                    )
                    .changed()
                {
                    edits.push((i, MetricEdit::Value(value.clone())));
                }
            }

            let mut unit = metric.unit.clone();
            if ui
                .add(
                    egui::TextEdit::singleline(&mut unit)
                        .hint_text("Unit")
                        .desired_width(60.0),
                )
                .changed()
            {
                edits.push((i, MetricEdit::Unit(unit)));
            }

            egui::ComboBox::from_id_source(("metric_quality", i))
                .selected_text(metric.quality.label())
                .width(86.0)
                .show_ui(ui, |ui| {
                    for quality in Quality::ALL {
                        if ui
                            .selectable_label(metric.quality == quality, quality.label())
                            .clicked()
                        {
                            edits.push((i, MetricEdit::Quality(quality)));
                        }
                    }
                });

            if ui.button("X").clicked() {
                removed = Some(i);
            }
        });
        ui.add_space(2.0);
    }

    for (index, edit) in edits {
        app.edit_metric(index, edit);
    }
    if let Some(index) = removed {
        app.remove_metric(index);
    }
}

fn status_banner(ui: &mut egui::Ui, app: &ConsoleApp) {
    let Some(status) = &app.status else {
        return;
    };

    let color = if status.is_error() {
        crate::ui::quality_color(Quality::Bad)
    } else {
        crate::ui::quality_color(Quality::Ok)
    };
    ui.add_space(8.0);
    ui.colored_label(color, status.message());
}
