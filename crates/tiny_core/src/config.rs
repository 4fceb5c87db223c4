use serde::{Deserialize, Serialize};

use crate::constants::{MAX_FRAME_TIME, SIMULATED_TIME_PER_SECOND};
use crate::error::{Result, SimError};

/// Scalar simulation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Fixed integration step (simulated time units)
    pub dt: f64,
    /// Equilibrium distance of the 12-6 potential
    pub separation: f64,
    /// Depth of the 12-6 potential well
    pub bond_energy: f64,
    /// Interaction range as a multiple of `separation`
    pub cutoff_factor: f64,
    /// Downward acceleration applied to every particle
    pub gravity_strength: f64,
    /// Heat bath temperature of the Langevin thermostat
    pub temperature: f64,
    /// Heat bath coupling (damping rate)
    pub viscosity: f64,
    /// Spring constant pulling the drag target toward the pointer
    pub drag_strength: f64,
    pub box_width: f64,
    pub box_height: f64,
    /// Simulated time per second of real time
    pub time_scale: f64,
    /// Upper bound on real elapsed time accepted by one `advance` call
    pub max_frame_time: f64,
    /// Random seed for the thermostat and lattice jitter
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            dt: 0.005,
            separation: 2.0,
            bond_energy: 50.0,
            cutoff_factor: 2.0,
            gravity_strength: 0.0,
            temperature: 10.0,
            viscosity: 0.1,
            drag_strength: 10.0,
            box_width: 100.0,
            box_height: 100.0,
            time_scale: SIMULATED_TIME_PER_SECOND,
            max_frame_time: MAX_FRAME_TIME,
            seed: 42,
        }
    }
}

impl SimConfig {
    /// Interaction cutoff distance
    pub fn cutoff_range(&self) -> f64 {
        self.cutoff_factor * self.separation
    }

    /// Reject configurations that would push NaN or Inf through the integrator.
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("dt", self.dt),
            ("box_width", self.box_width),
            ("box_height", self.box_height),
            ("time_scale", self.time_scale),
            ("max_frame_time", self.max_frame_time),
            ("separation", self.separation),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(SimError::InvalidConfig(format!(
                    "{name} must be finite and > 0 (got {value})"
                )));
            }
        }

        let non_negative = [
            ("bond_energy", self.bond_energy),
            ("cutoff_factor", self.cutoff_factor),
            ("temperature", self.temperature),
            ("viscosity", self.viscosity),
            ("drag_strength", self.drag_strength),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(SimError::InvalidConfig(format!(
                    "{name} must be finite and >= 0 (got {value})"
                )));
            }
        }

        if !self.gravity_strength.is_finite() {
            return Err(SimError::InvalidConfig(
                "gravity_strength must be finite".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(SimConfig::default().validate().is_ok());
        assert!((SimConfig::default().cutoff_range() - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_rejects_non_positive_box_and_step() {
        let config = SimConfig { box_width: 0.0, ..SimConfig::default() };
        assert!(matches!(config.validate(), Err(SimError::InvalidConfig(_))));

        let config = SimConfig { dt: -0.01, ..SimConfig::default() };
        assert!(matches!(config.validate(), Err(SimError::InvalidConfig(_))));

        let config = SimConfig { box_height: f64::NAN, ..SimConfig::default() };
        assert!(config.validate().is_err());
    }
}
