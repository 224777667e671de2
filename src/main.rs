mod app;
mod ui;

use eframe::egui;

use sunburst_drill::config::ViewerConfig;

use app::SunburstApp;

fn main() -> eframe::Result {
    env_logger::init();

    let config = ViewerConfig::from_process();
    log::info!("data source: {}", config.data_source);

    let side = config.canvas_size + 520.0;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([side, config.canvas_size + 120.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Sunburst Drill",
        options,
        Box::new(move |cc| {
            let mut app = SunburstApp::new(config);
            app.start_load(&cc.egui_ctx);
            Ok(Box::new(app))
        }),
    )
}
