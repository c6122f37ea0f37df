use crate::app::ConsoleApp;
use eframe::egui;

pub fn events_bar(ui: &mut egui::Ui, app: &mut ConsoleApp) {
    if app.recent.is_empty() {
        return;
    }

    let w = ui.available_width().max(120.0);
    let h = 34.0;
    let (rect, response) = ui.allocate_exact_size(egui::vec2(w, h), egui::Sense::click());

    let painter = ui.painter_at(rect);
    let stroke = egui::Stroke::new(1.0, ui.visuals().widgets.inactive.fg_stroke.color);

    let mid_y = rect.center().y;
    painter.line_segment(
        [
            egui::pos2(rect.left() + 6.0, mid_y),
            egui::pos2(rect.right() - 6.0, mid_y),
        ],
        stroke,
    );

    // The list arrives most-recent-first; newest dot sits on the right.
    let span = (app.recent.len().saturating_sub(1)).max(1);

    let mut points: Vec<(egui::Pos2, usize)> = Vec::new();
    for (i, ev) in app.recent.iter().enumerate() {
        let x = rect.right() - 6.0 - (rect.width() - 12.0) * (i as f32 / span as f32);
        let p = egui::pos2(x, mid_y);
        let r = if app.selected.as_ref().is_some_and(|s| s.id == ev.id) {
            5.5
        } else {
            4.0
        };
        let fill = crate::ui::quality_color(ev.payload.worst_quality());
        painter.circle_filled(p, r, fill);
        points.push((p, i));
    }

    if response.clicked() {
        if let Some(pos) = response.interact_pointer_pos() {
            if let Some((_, index)) = nearest_point(&points, pos, 10.0) {
                let hit = app.recent.iter().nth(*index).cloned();
                if let Some(ev) = hit {
                    app.selected = Some(ev);
                }
            }
        }
    }

    if response.hovered() {
        if let Some(pos) = response.hover_pos() {
            if let Some((d, index)) = nearest_point(&points, pos, 10.0) {
                if let Some(ev) = app.recent.iter().nth(*index) {
                    egui::show_tooltip_at_pointer(ui.ctx(), egui::Id::new("events_bar_hover"), |ui| {
                        ui.label(egui::RichText::new("Recent").strong());
                        ui.monospace(&ev.timestamp);
                        ui.label(format!(
                            "{} ({})  {} metrics",
                            ev.device_id,
                            ev.source_label(),
                            ev.payload.metrics.len()
                        ));
                        let _ = d;
                    });
                }
            }
        }
    }
}

fn nearest_point<'a>(
    points: &'a [(egui::Pos2, usize)],
    pos: egui::Pos2,
    max_dist: f32,
) -> Option<(f32, &'a usize)> {
    points
        .iter()
        .map(|(p, index)| (p.distance(pos), index))
        .filter(|(d, _)| *d <= max_dist)
        .min_by(|(a, _), (b, _)| a.total_cmp(b))
}
