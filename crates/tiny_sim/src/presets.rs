use bevy::prelude::info;
use glam::DVec2;
use tiny_core::{
    DEFAULT_LATTICE_RINGS, EVAPORATION_GRAVITY, EVAPORATION_TEMPERATURE, LATTICE_JITTER, ORANGE,
    Particle, Result, Scene, Wall,
};
use tiny_physics::lattice::{hexagon_lattice_position, hexagon_number};

use super::simulation::Simulation;

impl Simulation {
    /// Restore every scalar setting to the base configuration and rebuild the grid.
    ///
    /// Particles and walls are left as they are. Fails, changing nothing, if
    /// the restored box cannot hold the current particles.
    pub fn init_defaults(&mut self) -> Result<()> {
        let base = self.base_config.clone();
        self.set_config(base)?;
        self.leftover_time = 0.0;
        self.end_drag();
        Ok(())
    }

    /// Fill the store with a jittered hexagonal crystal centered on the origin
    pub fn default_particles(&mut self) -> Result<()> {
        let count = hexagon_number(DEFAULT_LATTICE_RINGS);
        self.set_count(count)?;

        let separation = self.config.separation;
        for (index, particle) in self.particles.iter_mut().enumerate() {
            let jitter = LATTICE_JITTER * self.thermostat.gaussian_2d();
            *particle = Particle {
                position: separation * hexagon_lattice_position(index) + jitter,
                color: ORANGE,
                ..Particle::default()
            };
        }

        info!("Initialized simulation with {} particles", count);
        Ok(())
    }

    /// Closed box along the edges of the periodic domain
    pub fn default_walls(&mut self) {
        let half_width = 0.5 * self.config.box_width;
        let half_height = 0.5 * self.config.box_height;
        let corners = [
            DVec2::new(-half_width, -half_height),
            DVec2::new(half_width, -half_height),
            DVec2::new(half_width, half_height),
            DVec2::new(-half_width, half_height),
        ];

        let walls = (0..corners.len())
            .map(|i| Wall::new(corners[i], corners[(i + 1) % corners.len()]))
            .collect();
        self.set_walls(walls);
    }

    /// Open-topped container in the lower middle of the box, with gravity
    /// on and a hotter bath so particles can boil off
    pub fn evaporation_setup(&mut self) {
        let half_width = 0.25 * self.config.box_width;
        let half_height = 0.25 * self.config.box_height;
        let corners = [
            DVec2::new(-half_width, 0.0),
            DVec2::new(-half_width, -half_height),
            DVec2::new(half_width, -half_height),
            DVec2::new(half_width, 0.0),
        ];

        let walls = corners.windows(2).map(|w| Wall::new(w[0], w[1])).collect();
        self.set_walls(walls);

        self.config.gravity_strength = EVAPORATION_GRAVITY;
        self.config.temperature = EVAPORATION_TEMPERATURE;
    }

    /// Rebuild the world from scratch as `scene`, restarting the random stream
    pub fn load_scene(&mut self, scene: Scene) -> Result<()> {
        self.set_count(0)?;
        self.init_defaults()?;
        self.thermostat.reseed(self.config.seed);

        match scene {
            Scene::Crystal => {
                self.default_walls();
                self.default_particles()?;
            }
            Scene::Evaporation => {
                self.evaporation_setup();
            }
        }

        self.scene = scene;
        self.log_scene();
        Ok(())
    }

    /// Reload the current scene
    pub fn reset(&mut self) -> Result<()> {
        self.load_scene(self.scene)
    }
}
