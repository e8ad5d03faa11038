use eframe::egui::{CursorIcon, Sense, Stroke, Ui};

use super::input;
use crate::app::{ViewModel, render_utils};

const LINK_WIDTH: f32 = 0.5;

impl ViewModel {
    pub(in crate::app) fn draw_canvas(&mut self, ui: &mut Ui) {
        let (rect, _response) = ui.allocate_exact_size(ui.available_size(), Sense::hover());
        let painter = ui.painter_at(rect);
        let palette = render_utils::palette(ui.visuals().dark_mode);

        let size = rect.size();
        if self.field_dirty || size != self.field.bounds() {
            self.field.reseed(size, self.tuning.particle_count);
            self.field_dirty = false;
        }

        let dt = ui
            .ctx()
            .input(|input| input.stable_dt)
            .clamp(1.0 / 240.0, 1.0 / 20.0);
        let window_pointer = ui.ctx().input(|input| input.pointer.hover_pos());
        let pressed = ui.ctx().input(|input| input.pointer.primary_down());
        let pointer = input::to_local(window_pointer, rect);

        self.field.set_pointer(pointer);
        if self.animate {
            self.field.step(&self.tuning);
        }

        render_utils::draw_background(&painter, rect, &palette, self.show_grid);

        if self.show_orbs {
            let normalized = pointer.map(|position| input::normalized_in_rect(position, size));
            self.orbs.update(normalized, window_pointer, dt);
            self.orbs.draw(&painter, rect, &palette);
        }

        for particle in self.field.particles() {
            painter.circle_filled(
                rect.min + particle.position.to_vec2(),
                particle.radius,
                palette.particle,
            );
        }

        if self.show_links {
            self.field
                .collect_links(self.tuning.link_distance, &mut self.link_scratch);
            for link in &self.link_scratch {
                let opacity =
                    render_utils::link_opacity(link.distance, self.tuning.link_distance, self.tuning.link_alpha)
                        * palette.link_alpha_scale;
                painter.line_segment(
                    [rect.min + link.from.to_vec2(), rect.min + link.to.to_vec2()],
                    Stroke::new(LINK_WIDTH, render_utils::with_opacity(palette.link, opacity)),
                );
            }
            self.link_count = self.link_scratch.len();
        } else {
            self.link_scratch.clear();
            self.link_count = 0;
        }

        if self.show_halo {
            if window_pointer.is_some_and(|position| rect.contains(position)) {
                ui.ctx().set_cursor_icon(CursorIcon::None);
            }
            self.halo.update(window_pointer, pressed, dt);
            self.halo.draw(&painter, &palette);
        }

        if self.animate || self.show_orbs || (self.show_halo && !self.halo.settled()) {
            ui.ctx().request_repaint();
        }
    }
}
