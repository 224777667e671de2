//! Loading and activation methods for `SunburstApp`.
//!
//! Covers the asynchronous document-load lifecycle (`start_load`,
//! `check_load`) and node activation.

use std::sync::mpsc;
use eframe::egui;

use sunburst_drill::source::load_document;
use sunburst_drill::{NavigationController, NodePath};

use super::SunburstApp;

impl SunburstApp {
    /// Start loading the document named in the source bar on a background thread.
    pub fn start_load(&mut self, ctx: &egui::Context) {
        if self.loading {
            return;
        }
        self.loading = true;
        self.error = None;
        self.segments = None;
        // Not ready until the new document has been indexed.
        self.nav = NavigationController::with_separator(self.config.breadcrumb_separator.clone());

        let (tx, rx) = mpsc::channel();
        self.load_rx = Some(rx);

        let source = self.source_input.trim().to_string();
        let ctx = ctx.clone();
        std::thread::spawn(move || {
            let result = load_document(&source);
            let _ = tx.send(result);
            ctx.request_repaint();
        });
    }

    /// Poll the load channel and index the document once it arrives.
    pub fn check_load(&mut self) {
        let Some(rx) = &self.load_rx else {
            return;
        };
        let Ok(result) = rx.try_recv() else {
            return;
        };

        match result.and_then(|tree| self.nav.load(tree)) {
            Ok(()) => {
                self.config.data_source = self.source_input.trim().to_string();
                self.error = None;
            }
            Err(e) => {
                log::error!("failed to load {}: {}", self.source_input, e);
                self.error = Some(e.to_string());
            }
        }
        self.segments = None;
        self.loading = false;
        self.load_rx = None;
    }

    /// Forward a node activation to the controller and invalidate the layout.
    pub fn activate(&mut self, path: &NodePath, is_all_entry: bool) {
        match self.nav.activate(path, is_all_entry) {
            Ok(()) => {
                self.error = None;
                self.segments = None;
            }
            Err(e) => {
                log::warn!("activation of {} rejected: {}", path, e);
                self.error = Some(e.to_string());
            }
        }
    }
}
