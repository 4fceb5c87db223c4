use glam::DVec2;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tiny_core::Particle;

/// Random source of the heat bath.
///
/// Owns its own seeded stream, so two simulations with the same seed see the
/// same noise. Gaussian samples come in pairs; the second one is kept for the
/// next call.
#[derive(Debug, Clone)]
pub struct Thermostat {
    rng: ChaCha8Rng,
    spare: Option<f64>,
}

impl Thermostat {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            spare: None,
        }
    }

    /// Restart the stream, dropping any cached sample
    pub fn reseed(&mut self, seed: u64) {
        *self = Self::new(seed);
    }

    /// Standard normal sample (Marsaglia polar method)
    pub fn gaussian(&mut self) -> f64 {
        if let Some(value) = self.spare.take() {
            return value;
        }

        loop {
            let u = self.rng.gen_range(-1.0..1.0f64);
            let v = self.rng.gen_range(-1.0..1.0f64);
            let s = u * u + v * v;
            if s > 0.0 && s < 1.0 {
                let factor = (-2.0 * s.ln() / s).sqrt();
                self.spare = Some(v * factor);
                return u * factor;
            }
        }
    }

    /// Two independent standard normal components
    pub fn gaussian_2d(&mut self) -> DVec2 {
        let x = self.gaussian();
        let y = self.gaussian();
        DVec2::new(x, y)
    }
}

/// Half-step Ornstein-Uhlenbeck velocity update of a Langevin thermostat.
///
/// Factors depend only on the step size and bath parameters, so one kick is
/// built per `advance` and applied to every particle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LangevinKick {
    pub temperature: f64,
    /// `exp(-viscosity * dt / 2)`
    pub viscosity_factor: f64,
    /// `sqrt(1 - viscosity_factor^2)`
    pub noise_factor: f64,
}

impl LangevinKick {
    pub fn new(temperature: f64, viscosity: f64, dt: f64) -> Self {
        let viscosity_factor = (-0.5 * viscosity * dt).exp();
        let noise_factor = (1.0 - viscosity_factor * viscosity_factor).max(0.0).sqrt();
        Self {
            temperature,
            viscosity_factor,
            noise_factor,
        }
    }

    pub fn apply(&self, velocity: &mut DVec2, mass: f64, thermostat: &mut Thermostat) {
        let thermal_velocity = (self.temperature / mass).sqrt();
        let noise = thermostat.gaussian_2d();
        *velocity *= self.viscosity_factor;
        *velocity += thermal_velocity * self.noise_factor * noise;
    }
}

/// Energy bookkeeping over a particle set
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EnergyReport {
    pub kinetic: f64,
    pub potential: f64,
    pub total: f64,
    /// Kinetic temperature (mean kinetic energy per particle, two degrees of freedom)
    pub temperature: f64,
}

/// Sum the per-particle diagnostics from the latest sub-step
pub fn energy_report(particles: &[Particle]) -> EnergyReport {
    if particles.is_empty() {
        return EnergyReport::default();
    }

    let kinetic: f64 = particles.iter().map(|p| p.kinetic_energy).sum();
    let potential: f64 = particles.iter().map(|p| p.potential_energy).sum();

    EnergyReport {
        kinetic,
        potential,
        total: kinetic + potential,
        temperature: kinetic / particles.len() as f64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_stream() {
        let mut a = Thermostat::new(7);
        let mut b = Thermostat::new(7);
        for _ in 0..100 {
            assert_eq!(a.gaussian().to_bits(), b.gaussian().to_bits());
        }

        let mut c = Thermostat::new(8);
        let differs = (0..10).any(|_| a.gaussian() != c.gaussian());
        assert!(differs);
    }

    #[test]
    fn test_reseed_drops_cached_sample() {
        let mut a = Thermostat::new(3);
        let first = a.gaussian();
        a.reseed(3);
        assert_eq!(a.gaussian(), first);
    }

    #[test]
    fn test_gaussian_moments() {
        let mut t = Thermostat::new(42);
        let n = 50_000;
        let samples: Vec<f64> = (0..n).map(|_| t.gaussian()).collect();
        let mean = samples.iter().sum::<f64>() / n as f64;
        let var = samples.iter().map(|x| (x - mean) * (x - mean)).sum::<f64>() / n as f64;
        assert!(mean.abs() < 0.03, "mean {mean}");
        assert!((var - 1.0).abs() < 0.05, "variance {var}");
    }

    #[test]
    fn test_cold_bath_only_damps() {
        let kick = LangevinKick::new(0.0, 2.0, 0.1);
        let mut t = Thermostat::new(1);
        let mut v = DVec2::new(3.0, -4.0);
        kick.apply(&mut v, 1.0, &mut t);
        let expected = (-0.1f64).exp();
        assert!((v - DVec2::new(3.0, -4.0) * expected).length() < 1e-12);
    }

    #[test]
    fn test_no_coupling_is_identity() {
        let kick = LangevinKick::new(10.0, 0.0, 0.005);
        assert_eq!(kick.viscosity_factor, 1.0);
        assert_eq!(kick.noise_factor, 0.0);

        let mut t = Thermostat::new(1);
        let mut v = DVec2::new(0.25, 0.5);
        kick.apply(&mut v, 1.0, &mut t);
        assert_eq!(v, DVec2::new(0.25, 0.5));
    }

    #[test]
    fn test_bath_equilibrates_to_temperature() {
        let temperature = 2.0;
        let kick = LangevinKick::new(temperature, 1.0, 0.05);
        let mut t = Thermostat::new(99);
        let mut particles: Vec<Particle> = (0..2000).map(|_| Particle::default()).collect();

        for _ in 0..600 {
            for p in particles.iter_mut() {
                kick.apply(&mut p.velocity, p.mass, &mut t);
            }
        }
        for p in particles.iter_mut() {
            p.kinetic_energy = 0.5 * p.mass * p.velocity.length_squared();
        }

        let report = energy_report(&particles);
        assert!(
            (report.temperature - temperature).abs() < 0.2,
            "kinetic temperature {}",
            report.temperature
        );
    }

    #[test]
    fn test_energy_report_sums() {
        let mut a = Particle::default();
        a.kinetic_energy = 1.5;
        a.potential_energy = -4.0;
        let mut b = Particle::default();
        b.kinetic_energy = 0.5;
        b.potential_energy = -4.0;

        let report = energy_report(&[a, b]);
        assert_eq!(report.kinetic, 2.0);
        assert_eq!(report.potential, -8.0);
        assert_eq!(report.total, -6.0);
        assert_eq!(report.temperature, 1.0);
        assert_eq!(energy_report(&[]), EnergyReport::default());
    }
}
