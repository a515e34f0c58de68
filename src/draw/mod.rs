// src/draw/mod.rs
// Layout of the chain on the surface and the wedge drawing routines.
// Geometry is computed in canvas space (origin top-left, y down) and
// converted to nannou's centered, y-up space as the last step.

pub mod wedge_draw;

pub use wedge_draw::{draw_node_wedges, sector_points, wedge_sweep, WedgeStyle};

use nannou::prelude::*;

/// Surface dimensions and node placement, fixed at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub width: f32,
    pub height: f32,
    pub gap: f32,
    pub radius: f32,
}

impl Layout {
    pub fn new(width: f32, height: f32, node_count: usize) -> Self {
        let gap = height / (node_count as f32 + 1.0);
        Self {
            width,
            height,
            gap,
            radius: gap / 3.0,
        }
    }

    /// Canvas-space center of the node at `index`.
    pub fn node_center(&self, index: usize) -> Vec2 {
        vec2(self.width / 2.0, self.gap * index as f32 + self.gap)
    }

    // Canvas (top-left origin, y down) to nannou (center origin, y up)
    pub fn to_world(&self, canvas: Vec2) -> Point2 {
        pt2(canvas.x - self.width / 2.0, self.height / 2.0 - canvas.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_spacing() {
        let layout = Layout::new(600.0, 600.0, 5);
        assert_eq!(layout.gap, 100.0);
        assert!((layout.radius - 100.0 / 3.0).abs() < 1e-4);

        assert_eq!(layout.node_center(0), vec2(300.0, 100.0));
        assert_eq!(layout.node_center(4), vec2(300.0, 500.0));
    }

    #[test]
    fn test_to_world() {
        let layout = Layout::new(200.0, 100.0, 1);

        // Canvas (0,0) is the top-left corner
        assert_eq!(layout.to_world(vec2(0.0, 0.0)), pt2(-100.0, 50.0));
        assert_eq!(layout.to_world(vec2(200.0, 100.0)), pt2(100.0, -50.0));
        assert_eq!(layout.to_world(vec2(100.0, 50.0)), pt2(0.0, 0.0));
    }
}
