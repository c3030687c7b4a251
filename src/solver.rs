use glam::DVec2;

use crate::arm::{Arm, Particle};
use crate::config::Config;
use crate::geometry::{directional_angle, distance};

const PI: f64 = std::f64::consts::PI;

/// Pulls one particle towards its stick length from `lead`, then integrates
/// spring, viscosity and gravity.
///
/// Angles come from the y-up geometry convention, so every vertical update
/// is subtracted to land back in canvas coordinates.
pub fn relax_particle(p: &mut Particle, lead: DVec2, config: &Config) {
    let mut angle = directional_angle(p.position, lead, false);
    let dist = distance(p.position, lead);
    let mut translation = dist - p.stick_length;
    if translation < 0. {
        angle += PI;
        translation = translation.abs();
    }

    // kinetic binding
    let dx = translation * angle.cos();
    let dy = translation * angle.sin();
    if !config.is_elastic {
        p.position.x += dx;
        p.position.y -= dy;
    }

    // forces
    let x_acc = config.spring_stiffness * dx - config.viscosity * p.velocity.x;
    let y_acc = config.spring_stiffness * dy + config.gravity - config.viscosity * p.velocity.y;
    p.velocity.x += x_acc;
    p.velocity.y += y_acc;

    p.position.x += config.integration_scale * p.velocity.x;
    p.position.y -= config.integration_scale * p.velocity.y;
}

/// Single head-to-tail pass. Each particle leads from its predecessor's
/// already updated position.
pub fn relax_arm(arm: &mut Arm, sub_target: DVec2, config: &Config) {
    let mut lead = sub_target;
    for p in arm.particles_mut() {
        relax_particle(p, lead, config);
        lead = p.position;
    }
}
