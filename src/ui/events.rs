use crate::app::ConsoleApp;
use crate::model::{Quality, StoredEvent};
use eframe::egui;

pub fn events_panel(ui: &mut egui::Ui, app: &mut ConsoleApp) {
    ui.heading("Recent Events");
    ui.add_space(6.0);

    crate::ui::events_bar(ui, app);
    ui.add_space(8.0);

    let mut ok = 0usize;
    let mut suspect = 0usize;
    let mut bad = 0usize;
    for ev in app.recent.iter() {
        for metric in &ev.payload.metrics {
            match metric.quality {
                Quality::Ok => ok += 1,
                Quality::Suspect => suspect += 1,
                Quality::Bad => bad += 1,
            }
        }
    }
    ui.horizontal_wrapped(|ui| {
        ui.label(format!("Events {}", app.recent.len()));
        ui.colored_label(crate::ui::quality_color(Quality::Ok), format!("ok {ok}"));
        ui.colored_label(
            crate::ui::quality_color(Quality::Suspect),
            format!("suspect {suspect}"),
        );
        ui.colored_label(crate::ui::quality_color(Quality::Bad), format!("bad {bad}"));
    });
    ui.add_space(6.0);

    ui.horizontal(|ui| {
        ui.label("Filter:");
        ui.text_edit_singleline(&mut app.ui.filter);
        if ui.button("Clear").clicked() {
            app.ui.filter.clear();
        }
        if ui.button("Refresh").clicked() {
            app.refresh_events();
        }
    });

    ui.add_space(6.0);

    let mut clicked: Option<StoredEvent> = None;
    egui::ScrollArea::vertical()
        .id_source("recent_events_scroll")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            if app.recent.is_empty() {
                ui.label("No events fetched yet.");
                return;
            }

            for ev in app.recent.iter() {
                if !passes_filter(ev, &app.ui.filter) {
                    continue;
                }

                let selected = app.selected.as_ref().is_some_and(|s| s.id == ev.id);
                let label = format!(
                    "{}  {} ({})  {} metrics",
                    ev.timestamp,
                    ev.device_id,
                    ev.source_label(),
                    ev.payload.metrics.len()
                );
                let label = egui::RichText::new(label)
                    .monospace()
                    .color(crate::ui::quality_color(ev.payload.worst_quality()));

                let response = ui
                    .add_sized(
                        [ui.available_width(), 0.0],
                        egui::SelectableLabel::new(selected, label),
                    )
                    .on_hover_text(hover_text(ev));

                if response.clicked() {
                    clicked = Some(ev.clone());
                }

                ui.add_space(2.0);
            }
        });

    if clicked.is_some() {
        app.selected = clicked;
    }
}

fn hover_text(ev: &StoredEvent) -> String {
    format!(
        "id={}\nnote: {}",
        ev.id,
        ev.note_text().unwrap_or("(no note)")
    )
}

fn passes_filter(ev: &StoredEvent, filter: &str) -> bool {
    let f = filter.trim();
    if f.is_empty() {
        return true;
    }

    let f = f.to_ascii_lowercase();
    ev.device_id.to_ascii_lowercase().contains(&f)
        || ev.source_label().to_ascii_lowercase().contains(&f)
        || ev.id.to_ascii_lowercase().contains(&f)
        || ev
            .payload
            .metrics
            .iter()
            .any(|m| m.name.to_ascii_lowercase().contains(&f))
        || ev
            .note_text()
            .is_some_and(|n| n.to_ascii_lowercase().contains(&f))
}
