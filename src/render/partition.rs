//! Sunburst partition layout.
//!
//! Angles follow the usual chart convention: 0 at twelve o'clock, growing
//! clockwise. Rings split the squared radius evenly, so every ring covers
//! the same area per radian.

use std::f32::consts::TAU;

use crate::hierarchy::{HierarchyNode, NodeCursor, NodePath};

/// One laid-out segment of the chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ArcSegment {
    pub path: NodePath,
    pub name: String,
    pub depth: usize,
    pub value: f64,
    /// Start angle in radians
    pub x0: f32,
    /// End angle in radians
    pub x1: f32,
    pub inner_radius: f32,
    pub outer_radius: f32,
}

impl ArcSegment {
    pub fn span(&self) -> f32 {
        self.x1 - self.x0
    }

    fn contains(&self, angle: f32, radius: f32) -> bool {
        radius >= self.inner_radius
            && radius < self.outer_radius
            && (self.depth == 0 || (angle >= self.x0 && angle < self.x1))
    }
}

/// Lay out `tree` inside a disc of `radius`, root first, parents before children.
///
/// Siblings are ordered by descending value.
pub fn partition(tree: &HierarchyNode, radius: f32) -> Vec<ArcSegment> {
    let ring_area = radius * radius / tree.height() as f32;
    let mut out = Vec::with_capacity(tree.node_count());
    layout_node(NodeCursor::root(tree), 0.0, TAU, ring_area, &mut out);
    out
}

fn layout_node(
    cursor: NodeCursor<'_>,
    x0: f32,
    x1: f32,
    ring_area: f32,
    out: &mut Vec<ArcSegment>,
) {
    let depth = cursor.depth();
    out.push(ArcSegment {
        path: cursor.path(),
        name: cursor.name().to_string(),
        depth,
        value: cursor.value(),
        x0,
        x1,
        inner_radius: (depth as f32 * ring_area).sqrt(),
        outer_radius: ((depth + 1) as f32 * ring_area).sqrt(),
    });

    let mut children: Vec<NodeCursor<'_>> = cursor.children().collect();
    children.sort_by(|a, b| b.value().total_cmp(&a.value()));

    let total = cursor.value();
    let span = x1 - x0;
    let mut start = x0;
    for child in children {
        let share = if total > 0.0 {
            (child.value() / total) as f32
        } else {
            0.0
        };
        let end = (start + span * share).min(x1);
        layout_node(child, start, end, ring_area, out);
        start = end;
    }
}

/// Find the segment under a point given relative to the chart centre,
/// in screen coordinates (y grows downward).
pub fn hit_test(segments: &[ArcSegment], dx: f32, dy: f32) -> Option<&ArcSegment> {
    let radius = (dx * dx + dy * dy).sqrt();
    let mut angle = dx.atan2(-dy);
    if angle < 0.0 {
        angle += TAU;
    }
    segments.iter().find(|s| s.contains(angle, radius))
}

/// Point on the circle of `radius` at chart `angle`, relative to the centre.
pub fn polar(angle: f32, radius: f32) -> (f32, f32) {
    (radius * angle.sin(), -radius * angle.cos())
}

/// Points along the arc of `radius` from `x0` to `x1`, at most `max_step` radians apart.
pub fn arc_points(x0: f32, x1: f32, radius: f32, max_step: f32) -> Vec<(f32, f32)> {
    let span = x1 - x0;
    let steps = (span / max_step).ceil().max(1.0) as usize;
    (0..=steps)
        .map(|i| polar(x0 + span * i as f32 / steps as f32, radius))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hierarchy::fixtures::sample;

    #[test]
    fn root_covers_full_circle() {
        let arcs = partition(&sample(), 300.0);
        assert_eq!(arcs.len(), 10);
        let root = &arcs[0];
        assert!(root.path.is_root());
        assert_eq!(root.inner_radius, 0.0);
        assert!((root.outer_radius - 150.0).abs() < 1e-3);
        assert!((root.span() - TAU).abs() < 1e-6);
    }

    #[test]
    fn angles_are_proportional_and_sorted() {
        let arcs = partition(&sample(), 300.0);
        let top = arcs.iter().find(|a| a.name == "Top").unwrap();
        let bottom = arcs.iter().find(|a| a.name == "Bottom").unwrap();
        assert_eq!(top.x0, 0.0);
        assert!((top.span() - TAU * 0.8).abs() < 1e-5);
        assert!((bottom.x0 - top.x1).abs() < 1e-6);

        let kano_children: Vec<&str> = arcs
            .iter()
            .filter(|a| a.depth == 3 && a.path.names()[1] == "Kano")
            .map(|a| a.name.as_str())
            .collect();
        assert_eq!(kano_children, ["Fagge", "Sabon Gari"]);
    }

    #[test]
    fn outer_ring_reaches_radius() {
        let arcs = partition(&sample(), 300.0);
        let max = arcs.iter().map(|a| a.outer_radius).fold(0.0, f32::max);
        assert!((max - 300.0).abs() < 1e-3);
    }

    #[test]
    fn hit_testing_maps_points_to_paths() {
        let arcs = partition(&sample(), 300.0);
        assert!(hit_test(&arcs, 0.0, 0.0).unwrap().path.is_root());

        // Just right of twelve o'clock in the first ring.
        let top = hit_test(&arcs, 5.0, -180.0).unwrap();
        assert_eq!(top.path, NodePath::from_names(["Top"]));

        // Just left of twelve o'clock in the outer ring: last category's last leaf.
        let leaf = hit_test(&arcs, -5.0, -280.0).unwrap();
        assert_eq!(leaf.path, NodePath::from_names(["Bottom", "Kano", "Sabon Gari"]));

        assert!(hit_test(&arcs, 0.0, -301.0).is_none());
    }

    #[test]
    fn polar_points_clockwise_from_top() {
        let (x, y) = polar(0.0, 10.0);
        assert!(x.abs() < 1e-6 && (y + 10.0).abs() < 1e-6);
        let (x, y) = polar(TAU / 4.0, 10.0);
        assert!((x - 10.0).abs() < 1e-5 && y.abs() < 1e-5);
    }

    #[test]
    fn arc_points_span_the_segment() {
        let points = arc_points(0.0, TAU / 2.0, 10.0, 0.1);
        assert_eq!(points.len(), 33);
        let (x, y) = points[points.len() - 1];
        assert!(x.abs() < 1e-4 && (y - 10.0).abs() < 1e-4);

        assert_eq!(arc_points(1.0, 1.0, 5.0, 0.1).len(), 2);
    }
}
