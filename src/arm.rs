use glam::DVec2;
use rand::Rng;

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub position: DVec2,
    /// Seeded to the birth position and never read afterwards.
    pub last_position: DVec2,
    pub velocity: DVec2,
    pub stick_length: f64,
    pub name: String,
}

impl Particle {
    pub fn new(x: f64, y: f64, stick_length: f64, name: String) -> Self {
        Self {
            position: DVec2::new(x, y),
            last_position: DVec2::new(x, y),
            velocity: DVec2::ZERO,
            stick_length,
            name,
        }
    }
}

/// Tag carried by every particle born at setup, before the first step.
pub const SEED_NAME: &str = "seed0";

/// One kinematic chain, head (index 0) to tail.
///
/// The chain length is fixed when the arm is built.
#[derive(Clone, Debug, PartialEq)]
pub struct Arm {
    particles: Vec<Particle>,
}

impl Arm {
    pub fn from_particles(particles: Vec<Particle>) -> Self {
        Self { particles }
    }

    /// Scatters `count` particles uniformly over a `width` x `height` surface.
    pub fn seeded(
        rng: &mut impl Rng,
        count: usize,
        width: f64,
        height: f64,
        stick_length: f64,
    ) -> Self {
        let particles = (0..count)
            .map(|_| {
                let x = width * rng.gen::<f64>();
                let y = height * rng.gen::<f64>();
                Particle::new(x, y, stick_length, SEED_NAME.to_owned())
            })
            .collect();
        Self { particles }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub(crate) fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    /// The point particle `i` is pulled towards.
    pub fn lead_point(&self, i: usize, sub_target: DVec2) -> DVec2 {
        if i == 0 {
            sub_target
        } else {
            self.particles[i - 1].position
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn seeded_particles_stay_on_surface() {
        let mut rng = StdRng::seed_from_u64(7);
        let arm = Arm::seeded(&mut rng, 25, 640., 480., 10.);

        assert_eq!(arm.len(), 25);
        for p in arm.particles() {
            assert!((0. ..640.).contains(&p.position.x));
            assert!((0. ..480.).contains(&p.position.y));
            assert_eq!(p.last_position, p.position);
            assert_eq!(p.velocity, DVec2::ZERO);
            assert_eq!(p.stick_length, 10.);
            assert_eq!(p.name, SEED_NAME);
        }
    }

    #[test]
    fn head_leads_from_sub_target() {
        let arm = Arm::from_particles(vec![
            Particle::new(1., 1., 10., "a".into()),
            Particle::new(2., 2., 10., "b".into()),
        ]);
        let sub_target = DVec2::new(-5., 5.);

        assert_eq!(arm.lead_point(0, sub_target), sub_target);
        assert_eq!(arm.lead_point(1, sub_target), DVec2::new(1., 1.));
    }
}
