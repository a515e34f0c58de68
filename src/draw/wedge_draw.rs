// src/draw/wedge_draw.rs
// Quarter-circle wedges for a single node.

use nannou::prelude::*;
use std::f32::consts::PI;

use super::Layout;

#[derive(Debug, Clone)]
pub struct WedgeStyle {
    pub color: Rgb,
    pub wedge_count: usize,
    pub arc_step_degrees: f32,
}

/// Local sweep fraction (0..=1) of wedge `index` out of `wedge_count` for a
/// node at overall `scale`. Wedges fill one after another as scale rises.
pub fn wedge_sweep(scale: f32, index: usize, wedge_count: usize) -> f32 {
    let k = wedge_count as f32;
    let factor = 1.0 / k;
    factor.min((scale - factor * index as f32).max(0.0)) * k
}

/// Outline of a filled circular sector in canvas space: the center, then arc
/// vertices every `arc_step` degrees up to `90 * sweep`, rotated by `rotation`
/// radians about the center.
pub fn sector_points(
    center: Vec2,
    radius: f32,
    rotation: f32,
    sweep: f32,
    arc_step: f32,
) -> Vec<Vec2> {
    // a non-positive step would never leave the first vertex
    if !(arc_step > 0.0) {
        return vec![center];
    }

    let limit = 90.0 * sweep;
    let (sin_rot, cos_rot) = rotation.sin_cos();

    let mut points = vec![center];
    let mut step = 0;
    loop {
        let t = step as f32 * arc_step;
        // small slack so a full quarter still reaches 90 degrees
        if t > limit + 1e-3 {
            break;
        }
        let (sin_t, cos_t) = t.to_radians().sin_cos();
        let x = radius * cos_t;
        let y = radius * sin_t;
        points.push(vec2(
            center.x + x * cos_rot - y * sin_rot,
            center.y + x * sin_rot + y * cos_rot,
        ));
        step += 1;
    }
    points
}

pub fn draw_node_wedges(
    draw: &Draw,
    layout: &Layout,
    index: usize,
    scale: f32,
    style: &WedgeStyle,
) {
    let center = layout.node_center(index);
    let slot = 2.0 * PI / style.wedge_count as f32;

    for j in 0..style.wedge_count {
        let sweep = wedge_sweep(scale, j, style.wedge_count);
        let outline = sector_points(
            center,
            layout.radius,
            slot * j as f32,
            sweep,
            style.arc_step_degrees,
        );

        // center plus a single arc vertex has no area
        if outline.len() < 3 {
            continue;
        }

        let points: Vec<Point2> = outline.into_iter().map(|p| layout.to_world(p)).collect();
        draw.polygon().color(style.color).points(points);
    }
}
