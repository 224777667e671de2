//! `SunburstApp`, the top-level egui application state.
//!
//! This module declares the `SunburstApp` struct and its constructor.
//! Methods are split across the sibling sub-modules:
//!
//! - `navigation`: document loading and node activation
//! - `toolbar`: data-source bar and reload control
//! - `content`: sunburst canvas, category pane and details pane

pub mod navigation;
pub mod toolbar;
pub mod content;

use std::sync::mpsc;
use eframe::egui;

use sunburst_drill::config::ViewerConfig;
use sunburst_drill::render::partition::ArcSegment;
use sunburst_drill::{HierarchyError, HierarchyNode, NavigationController};

// ─── Application state ───────────────────────────────────────────────────────

pub struct SunburstApp {
    pub config: ViewerConfig,
    pub source_input: String,
    pub nav: NavigationController,
    pub error: Option<String>,
    pub loading: bool,
    pub load_rx: Option<mpsc::Receiver<Result<HierarchyNode, HierarchyError>>>,
    /// Layout of the active tree; cleared whenever the active tree changes
    pub segments: Option<Vec<ArcSegment>>,
}

impl SunburstApp {
    pub fn new(config: ViewerConfig) -> Self {
        Self {
            source_input: config.data_source.clone(),
            nav: NavigationController::with_separator(config.breadcrumb_separator.clone()),
            config,
            error: None,
            loading: false,
            load_rx: None,
            segments: None,
        }
    }
}

impl eframe::App for SunburstApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.check_load();

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            self.draw_toolbar(ui, ctx);
        });

        egui::SidePanel::left("categories")
            .default_width(180.0)
            .show(ctx, |ui| {
                self.draw_category_pane(ui);
            });

        // Details pane only exists while focused
        if self.nav.current_details().is_some() {
            egui::SidePanel::right("details")
                .default_width(260.0)
                .show(ctx, |ui| {
                    self.draw_details_pane(ui);
                });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.draw_content(ui);
        });
    }
}
