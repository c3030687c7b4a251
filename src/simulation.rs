use std::rc::Rc;

use glam::DVec2;
use rand::Rng;

use crate::arm::Arm;
use crate::config::Config;
use crate::error::{Result, SetupError};
use crate::solver::relax_arm;
use crate::target::{self, InputMailbox, Target};

/// Everything one running scene owns: arms, target, step counter and the
/// input mailbox shared with the event handlers.
#[derive(Clone, Debug, PartialEq)]
pub struct Simulation {
    arms: Vec<Arm>,
    target: Target,
    inputs: Rc<InputMailbox>,
    config: Config,

    step_count: u64,
    width: f64,
    height: f64,
    center: DVec2,
}

impl Simulation {
    /// Seeds `config.arm_count` arms with randomly scattered particles.
    pub fn new(width: f64, height: f64, config: Config, rng: &mut impl Rng) -> Result<Self> {
        check_surface(width, height)?;

        let arms = (0..config.arm_count)
            .map(|_| {
                let count = config.min_particles_per_arm
                    + rng.gen_range(0..=config.extra_particles_per_arm);
                Arm::seeded(rng, count, width, height, config.stick_length)
            })
            .collect();
        Self::with_arms(width, height, config, arms)
    }

    pub fn with_arms(width: f64, height: f64, config: Config, arms: Vec<Arm>) -> Result<Self> {
        check_surface(width, height)?;

        let center = DVec2::new(width / 2., height / 2.);
        Ok(Self {
            arms,
            target: Target {
                position: center,
                radius: config.initial_radius,
            },
            inputs: Rc::new(InputMailbox::default()),
            config,

            step_count: 0,
            width,
            height,
            center,
        })
    }

    /// One simulated step. Drawing is left to the caller, after this returns.
    pub fn step(&mut self) {
        self.evolve();
        self.move_arms();
    }

    pub fn evolve(&mut self) {
        self.step_count += 1;
        self.target.radius = target::cosmetic_radius(self.step_count, &self.config);
    }

    /// Moves the target, then relaxes every arm towards its sub-target.
    pub fn move_arms(&mut self) {
        target::update_position(
            &mut self.target,
            self.step_count,
            self.center,
            &self.inputs,
            &self.config,
        );

        let arm_count = self.arms.len();
        for (i, arm) in self.arms.iter_mut().enumerate() {
            let sub_target = target::sub_target(&self.target, i, arm_count);
            relax_arm(arm, sub_target, &self.config);
        }
    }

    pub fn sub_target(&self, arm_index: usize) -> DVec2 {
        target::sub_target(&self.target, arm_index, self.arms.len())
    }

    pub fn arms(&self) -> &[Arm] {
        &self.arms
    }

    pub fn target(&self) -> &Target {
        &self.target
    }

    pub fn inputs(&self) -> Rc<InputMailbox> {
        self.inputs.clone()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    pub fn step_count(&self) -> u64 {
        self.step_count
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn particles_count(&self) -> usize {
        self.arms.iter().map(Arm::len).sum()
    }

    /// Writes `[x, y, x, y, ...]` for every particle, arm by arm.
    pub fn fill_positions(&self, buffer: &mut Vec<f32>) {
        buffer.clear();
        for p in self.arms.iter().flat_map(|arm| arm.particles()) {
            buffer.push(p.position.x as f32);
            buffer.push(p.position.y as f32);
        }
    }
}

fn check_surface(width: f64, height: f64) -> Result<()> {
    if width >= 1. && height >= 1. {
        Ok(())
    } else {
        Err(SetupError::EmptySurface { width, height })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn seeded(width: f64, height: f64) -> Simulation {
        let _ = env_logger::builder().is_test(true).try_init();
        let mut rng = StdRng::seed_from_u64(0x1c);
        Simulation::new(width, height, Config::default(), &mut rng).unwrap()
    }

    #[test]
    fn setup_matches_reference_scene() {
        let sim = seeded(800., 600.);
        assert_eq!(sim.step_count(), 0);
        assert_eq!(sim.arms().len(), 20);
        assert_eq!(sim.target().position, DVec2::new(400., 300.));
        assert_eq!(sim.target().radius, 20.);
        assert!(!sim.inputs().has_user_clicked());
        for arm in sim.arms() {
            assert!((20..=40).contains(&arm.len()), "{}", arm.len());
        }
    }

    #[test]
    fn zero_sized_surface_is_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        for (w, h) in [(0., 600.), (800., 0.), (0., 0.), (f64::NAN, 10.)] {
            let err = Simulation::new(w, h, Config::default(), &mut rng).unwrap_err();
            assert!(matches!(err, SetupError::EmptySurface { .. }));
        }
    }

    #[test]
    fn steps_count_up_from_zero() {
        let mut sim = seeded(320., 240.);
        for expected in 1..=300 {
            sim.step();
            assert_eq!(sim.step_count(), expected);
        }
    }

    #[test]
    fn chain_lengths_never_change() {
        let mut sim = seeded(320., 240.);
        let lengths: Vec<usize> = sim.arms().iter().map(Arm::len).collect();
        let total = sim.particles_count();

        sim.inputs().toggle_click();
        for i in 0..1_000 {
            sim.inputs().set_pointer(i as f64 % 320., 120.);
            sim.step();
        }

        let after: Vec<usize> = sim.arms().iter().map(Arm::len).collect();
        assert_eq!(lengths, after);
        assert_eq!(sim.particles_count(), total);
    }

    #[test]
    fn autonomous_target_follows_orbit() {
        let mut sim = seeded(800., 600.);
        let center = DVec2::new(400., 300.);
        for _ in 0..120 {
            sim.step();
            let expected = target::autonomous_position(sim.step_count(), center, sim.config());
            assert_eq!(sim.target().position, expected);
            assert_eq!(
                sim.target().radius,
                target::cosmetic_radius(sim.step_count(), sim.config())
            );
        }
    }

    #[test]
    fn pointer_mode_tracks_last_pointer() {
        let mut sim = seeded(800., 600.);
        let inputs = sim.inputs();
        inputs.set_pointer(5., 6.);
        inputs.toggle_click();

        for _ in 0..50 {
            sim.step();
            assert_eq!(sim.target().position, DVec2::new(5., 6.));
        }
        // radius keeps oscillating in pointer mode
        assert_eq!(sim.target().radius, target::cosmetic_radius(50, sim.config()));
    }

    #[test]
    fn click_before_any_pointer_move_parks_target() {
        let mut sim = seeded(800., 600.);
        for _ in 0..10 {
            sim.step();
        }
        let parked = sim.target().position;

        sim.inputs().toggle_click();
        sim.step();
        assert_eq!(sim.target().position, parked);
        assert_ne!(sim.target().position, DVec2::ZERO);
    }

    #[test]
    fn heads_chase_their_sub_targets() {
        let mut sim = seeded(800., 600.);
        sim.inputs().set_pointer(400., 300.);
        sim.inputs().toggle_click();
        for _ in 0..400 {
            sim.step();
        }
        for (i, arm) in sim.arms().iter().enumerate() {
            let head = arm.particles()[0].position;
            let gap = crate::geometry::distance(head, sim.sub_target(i));
            assert!(gap < 60., "arm {i} head is {gap} away");
        }
    }

    #[test]
    fn position_buffer_layout() {
        let sim = seeded(100., 100.);
        let mut buffer = vec![1.; 3];
        sim.fill_positions(&mut buffer);

        assert_eq!(buffer.len(), sim.particles_count() * 2);
        let first = sim.arms()[0].particles()[0].position;
        assert_eq!(buffer[0], first.x as f32);
        assert_eq!(buffer[1], first.y as f32);
    }
}
