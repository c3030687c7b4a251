use std::fmt;

use glam::DVec2;
use web_sys::CanvasRenderingContext2d;

use crate::simulation::Simulation;

const TAU: f64 = std::f64::consts::TAU;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Color {
    Rgba { r: u8, g: u8, b: u8, a: f64 },
    /// Hue in degrees, saturation and lightness in percent.
    Hsla { h: f64, s: f64, l: f64, a: f64 },
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Color::Rgba { r, g, b, a } => write!(f, "rgba({r}, {g}, {b}, {a})"),
            Color::Hsla { h, s, l, a } => write!(f, "hsla({h}, {s}%, {l}%, {a})"),
        }
    }
}

const TRAIL: Color = Color::Rgba {
    r: 0,
    g: 0,
    b: 0,
    a: 0.3,
};
const TARGET: Color = Color::Rgba {
    r: 255,
    g: 255,
    b: 255,
    a: 0.1,
};

pub fn particle_color(index: usize) -> Color {
    Color::Hsla {
        h: 200. + index as f64 * 4.,
        s: 90.,
        l: 50.,
        a: 0.7,
    }
}

pub fn stick_color(index: usize) -> Color {
    Color::Hsla {
        h: 180. + index as f64 * 4.,
        s: 80.,
        l: 50.,
        a: 0.7,
    }
}

/// Radius shrinks linearly towards the tail.
pub fn particle_radius(index: usize, chain_length: usize) -> f64 {
    0.3 * (chain_length - index) as f64
}

/// Write-only 2D raster the renderer draws on.
pub trait Surface {
    fn set_fill_color(&mut self, color: Color);
    fn set_stroke_color(&mut self, color: Color);
    fn set_line_width(&mut self, width: f64);
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
    fn fill_circle(&mut self, center: DVec2, radius: f64);
    fn stroke_circle(&mut self, center: DVec2, radius: f64);
    fn stroke_line(&mut self, from: DVec2, to: DVec2);
}

impl Surface for CanvasRenderingContext2d {
    fn set_fill_color(&mut self, color: Color) {
        self.set_fill_style_str(&color.to_string());
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.set_stroke_style_str(&color.to_string());
    }

    fn set_line_width(&mut self, width: f64) {
        CanvasRenderingContext2d::set_line_width(self, width);
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        CanvasRenderingContext2d::fill_rect(self, x, y, width, height);
    }

    fn fill_circle(&mut self, center: DVec2, radius: f64) {
        self.begin_path();
        self.arc(center.x, center.y, radius, 0.0, TAU).ok();
        self.fill();
    }

    fn stroke_circle(&mut self, center: DVec2, radius: f64) {
        self.begin_path();
        self.arc(center.x, center.y, radius, 0.0, TAU).ok();
        self.stroke();
    }

    fn stroke_line(&mut self, from: DVec2, to: DVec2) {
        self.begin_path();
        self.move_to(from.x, from.y);
        self.line_to(to.x, to.y);
        self.stroke();
    }
}

/// Paints one frame: fading overlay, target, then every arm head to tail.
pub fn draw(surface: &mut impl Surface, sim: &Simulation) {
    surface.set_fill_color(TRAIL);
    surface.fill_rect(0., 0., sim.width(), sim.height());

    let target = sim.target();
    surface.set_fill_color(TARGET);
    surface.fill_circle(target.position, sim.config().target_draw_radius);

    surface.set_line_width(1.);
    for (arm_index, arm) in sim.arms().iter().enumerate() {
        let sub_target = sim.sub_target(arm_index);
        for (i, particle) in arm.particles().iter().enumerate() {
            surface.set_stroke_color(particle_color(i));
            surface.stroke_circle(particle.position, particle_radius(i, arm.len()));

            surface.set_stroke_color(stick_color(i));
            surface.stroke_line(arm.lead_point(i, sub_target), particle.position);
        }
    }
}
