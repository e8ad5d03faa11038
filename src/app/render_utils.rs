use eframe::egui::{Color32, Painter, Pos2, Rect, Stroke};

pub(super) struct Palette {
    pub background: Color32,
    pub grid_line: Color32,
    pub particle: Color32,
    pub link: Color32,
    pub link_alpha_scale: f32,
    pub orb_accent: Color32,
    pub orb_violet: Color32,
    pub orb_green: Color32,
    pub pointer_glow: Color32,
    pub halo_ring: Color32,
    pub halo_dot: Color32,
}

pub(super) fn palette(dark: bool) -> Palette {
    if dark {
        Palette {
            background: Color32::from_rgb(10, 10, 10),
            grid_line: Color32::from_rgba_unmultiplied(255, 255, 255, 8),
            particle: Color32::from_rgba_unmultiplied(96, 165, 250, 153),
            link: Color32::from_rgb(96, 165, 250),
            link_alpha_scale: 1.0,
            orb_accent: Color32::from_rgba_unmultiplied(96, 165, 250, 26),
            orb_violet: Color32::from_rgba_unmultiplied(168, 85, 247, 26),
            orb_green: Color32::from_rgba_unmultiplied(34, 197, 94, 13),
            pointer_glow: Color32::from_rgba_unmultiplied(96, 165, 250, 13),
            halo_ring: Color32::from_rgba_unmultiplied(255, 255, 255, 170),
            halo_dot: Color32::from_rgba_unmultiplied(96, 165, 250, 230),
        }
    } else {
        Palette {
            background: Color32::from_rgb(248, 250, 252),
            grid_line: Color32::from_rgba_unmultiplied(15, 23, 42, 10),
            particle: Color32::from_rgba_unmultiplied(59, 130, 246, 128),
            link: Color32::from_rgb(59, 130, 246),
            link_alpha_scale: 0.8,
            orb_accent: Color32::from_rgba_unmultiplied(59, 130, 246, 20),
            orb_violet: Color32::from_rgba_unmultiplied(168, 85, 247, 18),
            orb_green: Color32::from_rgba_unmultiplied(34, 197, 94, 10),
            pointer_glow: Color32::from_rgba_unmultiplied(59, 130, 246, 10),
            halo_ring: Color32::from_rgba_unmultiplied(17, 24, 39, 170),
            halo_dot: Color32::from_rgba_unmultiplied(59, 130, 246, 230),
        }
    }
}

pub(super) fn link_opacity(distance: f32, link_distance: f32, peak: f32) -> f32 {
    if link_distance <= 0.0 {
        return 0.0;
    }
    (1.0 - (distance / link_distance)).max(0.0) * peak
}

pub(super) fn with_opacity(color: Color32, opacity: f32) -> Color32 {
    Color32::from_rgba_unmultiplied(
        color.r(),
        color.g(),
        color.b(),
        (opacity.clamp(0.0, 1.0) * 255.0) as u8,
    )
}

pub(super) fn soft_circle(painter: &Painter, center: Pos2, radius: f32, color: Color32) {
    const LAYERS: [(f32, f32); 4] = [(1.0, 0.25), (0.8, 0.5), (0.55, 0.8), (0.3, 1.0)];

    for (scale, strength) in LAYERS {
        let alpha = (color.a() as f32 * strength) as u8;
        painter.circle_filled(
            center,
            radius * scale,
            Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha),
        );
    }
}

pub(super) fn draw_background(painter: &Painter, rect: Rect, palette: &Palette, show_grid: bool) {
    painter.rect_filled(rect, 0.0, palette.background);

    if !show_grid {
        return;
    }

    const GRID_STEP: f32 = 80.0;
    let stroke = Stroke::new(1.0, palette.grid_line);

    let mut x = rect.left() + GRID_STEP;
    while x < rect.right() {
        painter.line_segment([Pos2::new(x, rect.top()), Pos2::new(x, rect.bottom())], stroke);
        x += GRID_STEP;
    }

    let mut y = rect.top() + GRID_STEP;
    while y < rect.bottom() {
        painter.line_segment([Pos2::new(rect.left(), y), Pos2::new(rect.right(), y)], stroke);
        y += GRID_STEP;
    }
}
