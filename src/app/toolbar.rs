//! Toolbar rendering for `SunburstApp`.
//!
//! Draws the data-source field, the load button and the focus indicator.

use eframe::egui;

use super::SunburstApp;

impl SunburstApp {
    /// Render the top toolbar strip.
    pub fn draw_toolbar(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        ui.horizontal(|ui| {
            ui.add_space(4.0);

            let response = ui.add_sized(
                [ui.available_width() - 220.0, 24.0],
                egui::TextEdit::singleline(&mut self.source_input)
                    .hint_text("Path or URL of hierarchical_data.json")
                    .font(egui::TextStyle::Monospace),
            );

            if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                self.start_load(ctx);
            }

            if ui.add_enabled(!self.loading, egui::Button::new("Load")).clicked() {
                self.start_load(ctx);
            }

            ui.separator();
            match self.nav.focused_category_name() {
                Some(category) => {
                    ui.label(format!("Focus: {}", category));
                }
                None => {
                    ui.weak("Focus: none");
                }
            }
        });
    }
}
