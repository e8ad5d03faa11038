use std::collections::VecDeque;
use std::path::PathBuf;

use eframe::egui::{self, Align, Context, Layout, Vec2};

use crate::field::{FieldTuning, ParticleField};

use super::super::{CursorHalo, OrbLayer, ViewModel};

impl ViewModel {
    pub(in crate::app) fn new(tuning: FieldTuning, preset_path: Option<PathBuf>) -> Self {
        Self {
            field: ParticleField::new(Vec2::ZERO, 0),
            tuning,
            field_dirty: true,
            animate: true,
            show_links: true,
            show_orbs: true,
            show_halo: true,
            show_grid: true,
            orbs: OrbLayer::new(),
            halo: CursorHalo::new(),
            link_scratch: Vec::new(),
            link_count: 0,
            preset_path,
            preset_status: None,
            show_fps_bar: true,
            fps_show_current: true,
            fps_show_average: true,
            fps_show_frame_time: true,
            fps_current: 0.0,
            fps_samples: VecDeque::new(),
        }
    }

    pub(in crate::app) fn show(&mut self, ctx: &Context) {
        self.update_fps_counter(ctx);

        egui::TopBottomPanel::top("top_bar")
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.heading("driftfield");
                    ui.separator();
                    let bounds = self.field.bounds();
                    ui.label(format!("canvas: {:.0}x{:.0}", bounds.x, bounds.y));
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        egui::global_theme_preference_switch(ui);
                        if let Some(fps_text) = self.fps_display_text() {
                            ui.label(fps_text);
                        }
                        ui.label(self.field_status_text());
                    });
                });
            });

        egui::SidePanel::left("controls")
            .resizable(true)
            .default_width(350.0)
            .show(ctx, |ui| self.draw_controls(ui));

        egui::CentralPanel::default().show(ctx, |ui| self.draw_canvas(ui));
    }
}
