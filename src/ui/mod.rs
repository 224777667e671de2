//! Stateless egui helpers for painting sunburst segments.
//!
//! Geometry comes from `sunburst_drill::render::partition`; this module only
//! translates it into egui shapes, plus small text utilities for the panes.

use egui::{vec2, Color32, Mesh, Painter, Pos2, Shape, Stroke};
use sunburst_drill::render::palette::Rgb;
use sunburst_drill::render::partition::{arc_points, ArcSegment};
use sunburst_drill::render::ARC_STEP;

// ─── Segment painting ─────────────────────────────────────────────────────────

pub fn to_color32(rgb: Rgb) -> Color32 {
    Color32::from_rgb(rgb.r, rgb.g, rgb.b)
}

/// Paint one annular sector with a white outline.
pub fn paint_segment(
    painter: &Painter,
    center: Pos2,
    segment: &ArcSegment,
    fill: Color32,
) {
    if segment.span() <= 0.0 || segment.outer_radius <= segment.inner_radius {
        return;
    }

    let to_pos = |(x, y): (f32, f32)| center + vec2(x, y);
    let outer: Vec<Pos2> =
        arc_points(segment.x0, segment.x1, segment.outer_radius, ARC_STEP)
            .into_iter()
            .map(to_pos)
            .collect();
    let inner: Vec<Pos2> =
        arc_points(segment.x0, segment.x1, segment.inner_radius, ARC_STEP)
            .into_iter()
            .map(to_pos)
            .collect();

    // Triangle strip between the inner and outer arcs
    let mut mesh = Mesh::default();
    for (o, i) in outer.iter().zip(&inner) {
        mesh.colored_vertex(*o, fill);
        mesh.colored_vertex(*i, fill);
    }
    for k in 0..outer.len().saturating_sub(1) as u32 {
        let (o0, i0, o1, i1) = (2 * k, 2 * k + 1, 2 * k + 2, 2 * k + 3);
        mesh.add_triangle(o0, i0, o1);
        mesh.add_triangle(i0, i1, o1);
    }
    painter.add(Shape::mesh(mesh));

    let mut outline = outer;
    outline.extend(inner.into_iter().rev());
    painter.add(Shape::closed_line(
        outline,
        Stroke::new(1.0, Color32::WHITE),
    ));
}

// ─── Text utilities ───────────────────────────────────────────────────────────

/// Truncate `s` to at most `max_chars` Unicode scalar values, appending `"..."` if truncated.
pub fn truncate_str(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let t: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", t)
    }
}
