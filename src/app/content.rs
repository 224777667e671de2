//! Content-area rendering for `SunburstApp`.
//!
//! - `draw_content`: central panel (spinner, error, sunburst canvas)
//! - `draw_category_pane`: left legend with the "All" entry
//! - `draw_details_pane`: right panel with the focused node's record

use eframe::egui;
use sunburst_drill::render::palette::{category_color, segment_color};
use sunburst_drill::render::partition::{hit_test, partition};
use sunburst_drill::NodePath;

use crate::ui::{paint_segment, to_color32, truncate_str};
use super::SunburstApp;

impl SunburstApp {
    // ── Sunburst canvas ──────────────────────────────────────────────────────

    /// Render the central panel.
    pub fn draw_content(&mut self, ui: &mut egui::Ui) {
        if self.loading {
            ui.centered_and_justified(|ui| {
                ui.spinner();
            });
            return;
        }

        if let Some(ref error) = self.error {
            ui.colored_label(egui::Color32::RED, error);
        }

        let Some(tree) = self.nav.active_tree() else {
            ui.centered_and_justified(|ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(100.0);
                    ui.heading("Sunburst Drill");
                    ui.add_space(20.0);
                    ui.label("Enter a data source and press Load");
                });
            });
            return;
        };

        let size = self.config.canvas_size;
        let segments = self
            .segments
            .get_or_insert_with(|| partition(tree, size * 0.5));

        let (response, painter) =
            ui.allocate_painter(egui::vec2(size, size), egui::Sense::click());
        let center = response.rect.center();

        for segment in segments.iter() {
            let key = segment
                .path
                .resolve(tree)
                .and_then(|cursor| self.nav.color_key(&cursor));
            let fill = to_color32(segment_color(key.as_deref()));
            paint_segment(&painter, center, segment, fill);
        }

        painter.text(
            center,
            egui::Align2::CENTER_CENTER,
            &self.config.root_label,
            egui::FontId::proportional(14.0),
            egui::Color32::DARK_GRAY,
        );

        let mut clicked: Option<NodePath> = None;
        if let Some(pos) = response.hover_pos() {
            let offset = pos - center;
            if let Some(segment) = hit_test(segments, offset.x, offset.y) {
                if let Some(cursor) = segment.path.resolve(tree) {
                    response
                        .clone()
                        .on_hover_text_at_pointer(cursor.tooltip(self.nav.separator()));
                }
                if response.clicked() {
                    clicked = Some(segment.path.clone());
                }
            }
        }

        if let Some(path) = clicked {
            self.activate(&path, false);
        }
    }

    // ── Category pane ────────────────────────────────────────────────────────

    /// Render the category legend. Clicking an entry activates it.
    pub fn draw_category_pane(&mut self, ui: &mut egui::Ui) {
        ui.heading("Categories");
        ui.separator();

        let mut chosen = None;
        for entry in self.nav.category_entries() {
            let label = if entry.is_all {
                self.config.root_label.clone()
            } else {
                entry.label.clone()
            };
            let selected = self.nav.focused_category_name() == Some(entry.label.as_str());

            ui.horizontal(|ui| {
                let (rect, _) =
                    ui.allocate_exact_size(egui::vec2(14.0, 14.0), egui::Sense::hover());
                ui.painter()
                    .rect_filled(rect, 2.0, to_color32(category_color(&entry.label)));
                if ui
                    .selectable_label(selected, truncate_str(&label, 24))
                    .clicked()
                {
                    chosen = Some(entry.clone());
                }
            });
        }

        if let Some(entry) = chosen {
            self.activate(&entry.path, entry.is_all);
        }
    }

    // ── Details pane ─────────────────────────────────────────────────────────

    /// Render the details of the focused node.
    pub fn draw_details_pane(&self, ui: &mut egui::Ui) {
        let Some(details) = self.nav.current_details() else {
            return;
        };

        ui.heading("Details");
        ui.separator();

        egui::Grid::new("details_grid")
            .num_columns(2)
            .striped(true)
            .show(ui, |ui| {
                for (label, value) in details.display_fields() {
                    ui.strong(format!("{}:", label));
                    ui.label(value);
                    ui.end_row();
                }
            });
    }
}
