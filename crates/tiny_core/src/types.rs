use glam::DVec2;
use serde::{Deserialize, Serialize};

/// RGBA color, opaque to the simulation
pub type Color4 = [f32; 4];

pub const BLACK: Color4 = [0.0, 0.0, 0.0, 1.0];
pub const ORANGE: Color4 = [0.8, 0.3, 0.0, 1.0];

/// A single disc in the simulation.
///
/// Particles have no stable id: a particle is whatever lives at its index in
/// the particle array, and removing one shifts every later particle down.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub position: DVec2,
    pub velocity: DVec2,
    pub acceleration: DVec2,
    pub mass: f64,
    pub radius: f64,
    pub color: Color4,
    /// Grid column from the most recent sub-step
    pub grid_col: usize,
    /// Grid row from the most recent sub-step
    pub grid_row: usize,
    /// Half of the last pair potential this particle took part in
    pub potential_energy: f64,
    pub kinetic_energy: f64,
}

impl Default for Particle {
    fn default() -> Self {
        Self {
            position: DVec2::ZERO,
            velocity: DVec2::ZERO,
            acceleration: DVec2::ZERO,
            mass: 1.0,
            radius: 1.0,
            color: BLACK,
            grid_col: 0,
            grid_row: 0,
            potential_energy: 0.0,
            kinetic_energy: 0.0,
        }
    }
}

impl Particle {
    pub fn at(position: DVec2) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    /// Whether `point` lies strictly inside this particle's disc
    pub fn contains(&self, point: DVec2) -> bool {
        (point - self.position).length_squared() < self.radius * self.radius
    }
}

/// Static line segment particles bounce off
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Wall {
    pub start: DVec2,
    pub end: DVec2,
}

impl Wall {
    pub fn new(start: DVec2, end: DVec2) -> Self {
        Self { start, end }
    }
}

/// Preset scenes the shell can switch between
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Scene {
    /// Closed box holding a hexagonal crystal
    #[default]
    Crystal,
    /// Open container under gravity, initially empty
    Evaporation,
}

impl Scene {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Crystal => "Crystal",
            Self::Evaporation => "Evaporation",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_particle_defaults() {
        let p = Particle::default();
        assert_eq!(p.mass, 1.0);
        assert_eq!(p.radius, 1.0);
        assert_eq!(p.color, BLACK);
    }

    #[test]
    fn test_contains_is_strict() {
        let p = Particle::at(DVec2::new(1.0, 1.0));
        assert!(p.contains(DVec2::new(1.5, 1.0)));
        assert!(!p.contains(DVec2::new(2.0, 1.0)));
    }
}
