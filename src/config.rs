/// Sentinel returned by [`Config::get_constant`] for names it does not know.
pub const UNKNOWN_CONSTANT: f32 = -100500.;

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    // Forces
    pub gravity: f64,
    pub spring_stiffness: f64,
    pub viscosity: f64,
    /// Skip the positional correction and let only forces move particles.
    pub is_elastic: bool,
    /// Fraction of the velocity applied to the position each step.
    pub integration_scale: f64,

    // Autonomous target orbit, in steps
    pub orbit_amplitude: f64,
    pub orbit_period_x: f64,
    pub orbit_period_y: f64,

    // Cosmetic target radius
    pub radius_base: f64,
    pub radius_swing: f64,
    pub radius_period: f64,
    pub initial_radius: f64,
    pub target_draw_radius: f64,

    // Seeding, only read at construction
    pub arm_count: usize,
    pub min_particles_per_arm: usize,
    pub extra_particles_per_arm: usize,
    pub stick_length: f64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            gravity: -1.,
            spring_stiffness: 0.5,
            viscosity: 0.1,
            is_elastic: false,
            integration_scale: 0.1,

            orbit_amplitude: 150.,
            orbit_period_x: 50.,
            orbit_period_y: 20.,

            radius_base: 50.,
            radius_swing: 30.,
            radius_period: 10.,
            initial_radius: 20.,
            target_draw_radius: 15.,

            arm_count: 20,
            min_particles_per_arm: 20,
            extra_particles_per_arm: 20,
            stick_length: 10.,
        }
    }
}

impl Config {
    pub fn get_constant(&self, name: &str) -> f32 {
        match name {
            "gravity" => self.gravity as f32,
            "springStiffness" => self.spring_stiffness as f32,
            "viscosity" => self.viscosity as f32,
            "isElastic" => self.is_elastic as u32 as f32,
            "integrationScale" => self.integration_scale as f32,

            "orbitAmplitude" => self.orbit_amplitude as f32,
            "orbitPeriodX" => self.orbit_period_x as f32,
            "orbitPeriodY" => self.orbit_period_y as f32,

            "radiusBase" => self.radius_base as f32,
            "radiusSwing" => self.radius_swing as f32,
            "radiusPeriod" => self.radius_period as f32,
            "targetDrawRadius" => self.target_draw_radius as f32,

            "armCount" => self.arm_count as f32,
            "minParticlesPerArm" => self.min_particles_per_arm as f32,
            "extraParticlesPerArm" => self.extra_particles_per_arm as f32,
            "stickLength" => self.stick_length as f32,

            _ => UNKNOWN_CONSTANT,
        }
    }

    /// Returns false when `name` is not a runtime tunable. Forces and
    /// seeding constants are fixed once the simulation is built.
    pub fn set_constant(&mut self, name: &str, value: f32) -> bool {
        match name {
            "orbitAmplitude" => self.orbit_amplitude = value as f64,
            "orbitPeriodX" => self.orbit_period_x = value as f64,
            "orbitPeriodY" => self.orbit_period_y = value as f64,

            "radiusBase" => self.radius_base = value as f64,
            "radiusSwing" => self.radius_swing = value as f64,
            "radiusPeriod" => self.radius_period = value as f64,
            "targetDrawRadius" => self.target_draw_radius = value as f64,

            _ => return false,
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_reference_scene() {
        let config = Config::default();
        assert_eq!(config.gravity, -1.);
        assert_eq!(config.spring_stiffness, 0.5);
        assert_eq!(config.viscosity, 0.1);
        assert!(!config.is_elastic);
        assert_eq!(config.arm_count, 20);
        assert_eq!(config.stick_length, 10.);
    }

    #[test]
    fn named_constants_round_trip() {
        let mut config = Config::default();
        assert!(config.set_constant("orbitAmplitude", 75.));
        assert_eq!(config.get_constant("orbitAmplitude"), 75.);

        assert!(config.set_constant("targetDrawRadius", 2.5));
        assert_eq!(config.target_draw_radius, 2.5);
    }

    #[test]
    fn unknown_and_seeding_names() {
        let mut config = Config::default();
        assert_eq!(config.get_constant("warpFactor"), UNKNOWN_CONSTANT);
        assert!(!config.set_constant("warpFactor", 9.));

        // readable, but fixed after construction
        assert_eq!(config.get_constant("armCount"), 20.);
        assert!(!config.set_constant("armCount", 3.));

        assert_eq!(config.get_constant("gravity"), -1.);
        assert_eq!(config.get_constant("isElastic"), 0.);
        for name in [
            "gravity",
            "springStiffness",
            "viscosity",
            "isElastic",
            "integrationScale",
        ] {
            assert!(!config.set_constant(name, 5.), "{name}");
        }
        assert_eq!(config, Config::default());
    }
}
