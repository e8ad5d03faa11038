use eframe::egui::{self, Ui};
use log::warn;

use crate::field::{MAX_PARTICLES, load_preset, save_preset};

use super::super::ViewModel;

impl ViewModel {
    pub(in crate::app) fn draw_controls(&mut self, ui: &mut Ui) {
        ui.heading("Field Controls");
        ui.separator();
        ui.add_space(4.0);

        ui.checkbox(&mut self.animate, "Animate")
            .on_hover_text("Pause to freeze every particle in place.");

        let particle_count_slider = ui
            .add(
                egui::Slider::new(&mut self.tuning.particle_count, 0..=MAX_PARTICLES)
                    .text("Particles")
                    .clamping(egui::SliderClamping::Always),
            )
            .on_hover_text("How many particles the field seeds across the canvas.");
        if particle_count_slider.hovered() {
            particle_count_slider.request_focus();
        }
        if particle_count_slider.changed() {
            self.field_dirty = true;
        }

        if ui.button("Reseed field").clicked() {
            self.field_dirty = true;
        }

        ui.separator();

        ui.collapsing("Motion tuning", |ui| {
            let influence_radius_slider = ui
                .add(
                    egui::Slider::new(&mut self.tuning.influence_radius, 0.0..=300.0)
                        .text("Influence radius")
                        .clamping(egui::SliderClamping::Always),
                )
                .on_hover_text("Pointer distance below which particles are pushed away.");
            if influence_radius_slider.hovered() {
                influence_radius_slider.request_focus();
            }

            let repulsion_boost_slider = ui
                .add(
                    egui::Slider::new(&mut self.tuning.repulsion_boost, 0.0..=4.0)
                        .text("Repulsion")
                        .clamping(egui::SliderClamping::Always),
                )
                .on_hover_text("Scales how hard the pointer pushes particles outward.");
            if repulsion_boost_slider.hovered() {
                repulsion_boost_slider.request_focus();
            }

            let return_rate_slider = ui
                .add(
                    egui::Slider::new(&mut self.tuning.return_rate, 0.0..=0.5)
                        .text("Return rate")
                        .clamping(egui::SliderClamping::Always),
                )
                .on_hover_text("Fraction of the way back to its anchor a particle moves per frame.");
            if return_rate_slider.hovered() {
                return_rate_slider.request_focus();
            }

            let drift_scale_slider = ui
                .add(
                    egui::Slider::new(&mut self.tuning.drift_scale, 0.0..=4.0)
                        .text("Drift")
                        .clamping(egui::SliderClamping::Always),
                )
                .on_hover_text("Scales how fast anchors wander between the canvas edges.");
            if drift_scale_slider.hovered() {
                drift_scale_slider.request_focus();
            }
        });

        ui.collapsing("Link tuning", |ui| {
            let link_distance_slider = ui
                .add(
                    egui::Slider::new(&mut self.tuning.link_distance, 0.0..=240.0)
                        .text("Link distance")
                        .clamping(egui::SliderClamping::Always),
                )
                .on_hover_text("Particle spacing below which a connecting line is drawn.");
            if link_distance_slider.hovered() {
                link_distance_slider.request_focus();
            }

            let link_alpha_slider = ui
                .add(
                    egui::Slider::new(&mut self.tuning.link_alpha, 0.0..=1.0)
                        .text("Link opacity")
                        .clamping(egui::SliderClamping::Always),
                )
                .on_hover_text("Opacity of a connecting line as the spacing approaches zero.");
            if link_alpha_slider.hovered() {
                link_alpha_slider.request_focus();
            }
        });

        ui.separator();

        ui.checkbox(&mut self.show_links, "Connection lines")
            .on_hover_text("Draw lines between particles that drift close together.");
        ui.checkbox(&mut self.show_orbs, "Gradient orbs")
            .on_hover_text("Soft color fields that lean toward the pointer.");
        ui.checkbox(&mut self.show_halo, "Cursor halo")
            .on_hover_text("Replace the cursor with a trailing ring inside the canvas.");
        ui.checkbox(&mut self.show_grid, "Grid lines")
            .on_hover_text("Faint layout grid behind the field.");
        ui.checkbox(&mut self.show_fps_bar, "FPS Display")
            .on_hover_text("Show frame statistics in the top bar.");

        ui.collapsing("FPS Display tuning", |ui| {
            ui.checkbox(&mut self.fps_show_current, "Show current FPS");
            ui.checkbox(&mut self.fps_show_average, "Show average FPS");
            ui.checkbox(&mut self.fps_show_frame_time, "Show frame time");
        });

        ui.separator();
        self.draw_preset_controls(ui);
    }

    fn draw_preset_controls(&mut self, ui: &mut Ui) {
        ui.label("Preset");
        match &self.preset_path {
            Some(path) => {
                ui.small(path.display().to_string());
            }
            None => {
                ui.small("no preset path (launch with --preset)");
            }
        }

        let has_path = self.preset_path.is_some();
        ui.horizontal(|ui| {
            if ui.add_enabled(has_path, egui::Button::new("Load")).clicked() {
                self.load_preset_clicked();
            }
            if ui.add_enabled(has_path, egui::Button::new("Save")).clicked() {
                self.save_preset_clicked();
            }
        });

        if let Some(status) = &self.preset_status {
            ui.small(status.clone());
        }
    }

    fn load_preset_clicked(&mut self) {
        let Some(path) = self.preset_path.clone() else {
            return;
        };
        match load_preset(&path) {
            Ok(tuning) => {
                self.tuning = tuning;
                self.field_dirty = true;
                self.preset_status = Some(format!("loaded {}", path.display()));
            }
            Err(error) => {
                warn!("failed to load preset: {error:#}");
                self.preset_status = Some(format!("load failed: {error:#}"));
            }
        }
    }

    fn save_preset_clicked(&mut self) {
        let Some(path) = self.preset_path.clone() else {
            return;
        };
        match save_preset(&path, &self.tuning) {
            Ok(()) => {
                self.preset_status = Some(format!("saved {}", path.display()));
            }
            Err(error) => {
                warn!("failed to save preset: {error:#}");
                self.preset_status = Some(format!("save failed: {error:#}"));
            }
        }
    }
}
