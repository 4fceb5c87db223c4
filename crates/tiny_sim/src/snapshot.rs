use glam::DVec2;
use tiny_core::{Color4, Wall};
use tiny_physics::EnergyReport;

use super::simulation::Simulation;

/// What the renderer needs of one particle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleView {
    pub position: DVec2,
    pub radius: f64,
    pub color: Color4,
}

/// Read-only copy of the world taken between sub-steps
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SimSnapshot {
    pub particles: Vec<ParticleView>,
    pub walls: Vec<Wall>,
    pub box_width: f64,
    pub box_height: f64,
    pub energy: EnergyReport,
}

impl Simulation {
    pub fn snapshot(&self) -> SimSnapshot {
        SimSnapshot {
            particles: self
                .particles
                .iter()
                .map(|p| ParticleView {
                    position: p.position,
                    radius: p.radius,
                    color: p.color,
                })
                .collect(),
            walls: self.walls.clone(),
            box_width: self.config.box_width,
            box_height: self.config.box_height,
            energy: self.energy(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tiny_core::{Scene, SimConfig};

    #[test]
    fn test_snapshot_mirrors_store_order() {
        let sim = Simulation::with_scene(SimConfig::default(), Scene::Crystal).unwrap();
        let snapshot = sim.snapshot();
        assert_eq!(snapshot.particles.len(), sim.particle_count());
        assert_eq!(snapshot.walls, sim.walls());
        assert_eq!(snapshot.box_width, 100.0);
        for (view, p) in snapshot.particles.iter().zip(sim.particles()) {
            assert_eq!(view.position, p.position);
            assert_eq!(view.radius, p.radius);
        }
    }
}
