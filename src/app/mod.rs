use std::collections::VecDeque;
use std::path::PathBuf;

use eframe::egui::Context;

use crate::field::{FieldTuning, Link, ParticleField};

mod canvas;
mod motion;
mod orbs;
mod render_utils;
mod ui;

use motion::CursorHalo;
use orbs::OrbLayer;

pub struct BackdropApp {
    model: ViewModel,
}

struct ViewModel {
    field: ParticleField,
    tuning: FieldTuning,
    field_dirty: bool,
    animate: bool,
    show_links: bool,
    show_orbs: bool,
    show_halo: bool,
    show_grid: bool,
    orbs: OrbLayer,
    halo: CursorHalo,
    link_scratch: Vec<Link>,
    link_count: usize,
    preset_path: Option<PathBuf>,
    preset_status: Option<String>,
    show_fps_bar: bool,
    fps_show_current: bool,
    fps_show_average: bool,
    fps_show_frame_time: bool,
    fps_current: f32,
    fps_samples: VecDeque<f32>,
}

impl BackdropApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        tuning: FieldTuning,
        preset_path: Option<PathBuf>,
    ) -> Self {
        Self {
            model: ViewModel::new(tuning, preset_path),
        }
    }
}

impl eframe::App for BackdropApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.model.show(ctx);
    }
}
