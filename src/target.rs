use std::cell::Cell;

use glam::DVec2;

use crate::config::Config;

const TAU: f64 = std::f64::consts::TAU;

/// Global pursuit point and the radius of the circle the sub-targets sit on.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Target {
    pub position: DVec2,
    pub radius: f64,
}

/// Latest pointer position and the click toggle, written by input handlers
/// and read once at the start of every step.
#[derive(Debug, Default, PartialEq)]
pub struct InputMailbox {
    pointer: Cell<Option<DVec2>>,
    has_user_clicked: Cell<bool>,
}

impl InputMailbox {
    pub fn set_pointer(&self, x: f64, y: f64) {
        self.pointer.set(Some(DVec2::new(x, y)));
    }

    pub fn toggle_click(&self) {
        self.has_user_clicked.set(!self.has_user_clicked.get());
    }

    /// `None` until the first pointer move arrives.
    pub fn pointer(&self) -> Option<DVec2> {
        self.pointer.get()
    }

    pub fn has_user_clicked(&self) -> bool {
        self.has_user_clicked.get()
    }
}

pub fn cosmetic_radius(step: u64, config: &Config) -> f64 {
    config.radius_base + config.radius_swing * (step as f64 / config.radius_period).sin()
}

/// Lissajous-like orbit around `center`.
pub fn autonomous_position(step: u64, center: DVec2, config: &Config) -> DVec2 {
    let t = step as f64;
    DVec2::new(
        center.x + config.orbit_amplitude * (t / config.orbit_period_x).cos(),
        center.y + config.orbit_amplitude * (t / config.orbit_period_y).sin(),
    )
}

/// Moves the target for this step, following the pointer once the user
/// has clicked. A click before any pointer move leaves the target in place.
pub fn update_position(
    target: &mut Target,
    step: u64,
    center: DVec2,
    inputs: &InputMailbox,
    config: &Config,
) {
    if !inputs.has_user_clicked() {
        target.position = autonomous_position(step, center, config);
    } else if let Some(pointer) = inputs.pointer() {
        target.position = pointer;
    }
}

pub fn sub_target_angle(arm_index: usize, arm_count: usize) -> f64 {
    TAU * arm_index as f64 / arm_count as f64
}

pub fn sub_target(target: &Target, arm_index: usize, arm_count: usize) -> DVec2 {
    let angle = sub_target_angle(arm_index, arm_count);
    DVec2::new(
        target.position.x + target.radius * angle.cos(),
        target.position.y + target.radius * angle.sin(),
    )
}
