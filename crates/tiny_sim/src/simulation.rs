use bevy::prelude::{Resource, debug, info};
use glam::DVec2;
use tiny_core::{Particle, Result, Scene, SimConfig, SimError, Wall};
use tiny_physics::forces::{
    drag_acceleration, lennard_jones, resolve_wall_contact, shortest_vector_from_segment,
};
use tiny_physics::thermodynamics::{self, EnergyReport, LangevinKick, Thermostat};
use tiny_physics::{SpatialGrid, periodize};

/// Pointer spring state
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragState {
    pub active: bool,
    /// Index of the particle being pulled
    pub target: usize,
    /// Pointer position in world coordinates
    pub pointer: DVec2,
}

/// The whole simulated world, tracked as a Bevy Resource.
///
/// Owns the particles and walls, the scalar configuration, the spatial grid
/// and the thermostat's random stream. Everything that changes it goes
/// through `&mut self`, so a sub-step is never observed half done.
#[derive(Resource, Debug, Clone)]
pub struct Simulation {
    pub(crate) particles: Vec<Particle>,
    pub(crate) walls: Vec<Wall>,
    /// Current scalar configuration
    pub(crate) config: SimConfig,
    /// Configuration `init_defaults` returns to
    pub(crate) base_config: SimConfig,
    pub(crate) grid: SpatialGrid,
    pub(crate) thermostat: Thermostat,
    /// Simulated time not yet consumed by a sub-step
    pub(crate) leftover_time: f64,
    pub(crate) drag: DragState,
    pub(crate) scene: Scene,
}

impl Simulation {
    /// Empty simulation (no particles, no walls) for a validated configuration
    pub fn new(config: SimConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            particles: Vec::new(),
            walls: Vec::new(),
            grid: SpatialGrid::new(config.box_width, config.box_height)?,
            thermostat: Thermostat::new(config.seed),
            base_config: config.clone(),
            config,
            leftover_time: 0.0,
            drag: DragState::default(),
            scene: Scene::default(),
        })
    }

    /// Simulation with `scene` already loaded
    pub fn with_scene(config: SimConfig, scene: Scene) -> Result<Self> {
        let mut simulation = Self::new(config)?;
        simulation.load_scene(scene)?;
        Ok(simulation)
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Replace the scalar configuration and rebuild the grid for its box.
    ///
    /// Nothing changes if the configuration is invalid or its box cannot hold
    /// the current particles.
    pub fn set_config(&mut self, config: SimConfig) -> Result<()> {
        config.validate()?;
        let grid = Self::grid_for(&config, self.particles.len())?;
        self.config = config;
        self.grid = grid;
        Ok(())
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Mutable view of the particles; the count cannot change through it
    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    pub fn walls(&self) -> &[Wall] {
        &self.walls
    }

    /// Replace the whole wall set
    pub fn set_walls(&mut self, walls: Vec<Wall>) {
        self.walls = walls;
    }

    pub fn grid(&self) -> &SpatialGrid {
        &self.grid
    }

    pub fn drag(&self) -> &DragState {
        &self.drag
    }

    pub fn leftover_time(&self) -> f64 {
        self.leftover_time
    }

    pub fn scene(&self) -> Scene {
        self.scene
    }

    /// Totals over the per-particle diagnostics of the latest sub-step
    pub fn energy(&self) -> EnergyReport {
        thermodynamics::energy_report(&self.particles)
    }

    // --- Spatial grid ---

    fn grid_for(config: &SimConfig, particle_count: usize) -> Result<SpatialGrid> {
        let grid = SpatialGrid::new(config.box_width, config.box_height)?;
        ensure_capacity(particle_count, grid.capacity())?;
        Ok(grid)
    }

    /// Recompute grid dimensions from the box size and reallocate the cells
    pub fn update_grid(&mut self) -> Result<()> {
        self.grid = Self::grid_for(&self.config, self.particles.len())?;
        Ok(())
    }

    // --- Entity store ---

    /// Grow or shrink the particle array to exactly `count`.
    ///
    /// Existing particles keep their slots; new slots get default particles.
    /// Fails without touching the array if the grid cannot hold `count`
    /// particles or the allocation fails.
    pub fn set_count(&mut self, count: usize) -> Result<()> {
        ensure_capacity(count, self.grid.capacity())?;

        let len = self.particles.len();
        if count > len {
            self.particles.try_reserve(count - len)?;
            self.particles.resize_with(count, Particle::default);
        } else {
            self.particles.truncate(count);
            if self.drag.active && self.drag.target >= count {
                self.drag.active = false;
            }
        }
        Ok(())
    }

    /// Append a default particle and return it for the caller to place
    pub fn add_particle(&mut self) -> Result<&mut Particle> {
        let index = self.particles.len();
        self.set_count(index + 1)?;
        Ok(&mut self.particles[index])
    }

    /// Remove the particle at `index`, shifting every later particle down a slot.
    ///
    /// Indices held elsewhere that point past `index` are stale afterwards.
    /// The drag target is the exception: it keeps following its particle.
    pub fn remove_particle(&mut self, index: usize) -> Result<Particle> {
        let len = self.particles.len();
        if index >= len {
            return Err(SimError::ParticleIndexOutOfRange { index, len });
        }

        let removed = self.particles.remove(index);
        if self.drag.active {
            if self.drag.target == index {
                self.drag.active = false;
            } else if self.drag.target > index {
                self.drag.target -= 1;
            }
        }
        Ok(removed)
    }

    /// Add a particle at `point` unless it would overlap a particle or wall.
    ///
    /// Returns the new index, or `None` when the spawn was rolled back.
    pub fn spawn_at(&mut self, point: DVec2) -> Result<Option<usize>> {
        let particle = self.add_particle()?;
        particle.position = point;

        let index = self.particles.len() - 1;
        if self.is_overlapping(index) {
            self.remove_particle(index)?;
            debug!("Spawn at ({:.2}, {:.2}) rejected: overlap", point.x, point.y);
            return Ok(None);
        }
        Ok(Some(index))
    }

    // --- Queries ---

    /// Lowest index whose disc contains `point`
    pub fn pick_particle(&self, point: DVec2) -> Option<usize> {
        self.particles.iter().position(|p| p.contains(point))
    }

    /// Whether particle `index` overlaps another particle's disc or comes
    /// within its radius of a wall. Out-of-range indices never overlap.
    pub fn is_overlapping(&self, index: usize) -> bool {
        let Some(candidate) = self.particles.get(index) else {
            return false;
        };

        let hits_particle = self.particles.iter().enumerate().any(|(i, other)| {
            if i == index {
                return false;
            }
            let limit = candidate.radius + other.radius;
            (candidate.position - other.position).length_squared() < limit * limit
        });
        if hits_particle {
            return true;
        }

        let radius_squared = candidate.radius * candidate.radius;
        self.walls.iter().any(|wall| {
            shortest_vector_from_segment(candidate.position, wall.start, wall.end).length_squared()
                < radius_squared
        })
    }

    // --- Drag ---

    pub fn begin_drag(&mut self, index: usize, pointer: DVec2) -> Result<()> {
        let len = self.particles.len();
        if index >= len {
            return Err(SimError::ParticleIndexOutOfRange { index, len });
        }
        self.drag = DragState {
            active: true,
            target: index,
            pointer,
        };
        Ok(())
    }

    pub fn end_drag(&mut self) {
        self.drag.active = false;
    }

    pub fn set_pointer(&mut self, pointer: DVec2) {
        self.drag.pointer = pointer;
    }

    // --- Integration ---

    /// Advance by `elapsed_real` seconds of wall-clock time.
    ///
    /// Real time is clamped to `max_frame_time` and scaled to simulated time,
    /// which is consumed in fixed `dt` sub-steps; the remainder carries over to
    /// the next call. Returns the number of sub-steps run. If the particle
    /// count outgrows the grid the call stops before the offending sub-step.
    pub fn advance(&mut self, elapsed_real: f64) -> Result<usize> {
        let real = if elapsed_real.is_finite() {
            elapsed_real.clamp(0.0, self.config.max_frame_time)
        } else {
            0.0
        };
        self.leftover_time += real * self.config.time_scale;

        let dt = self.config.dt;
        let kick = LangevinKick::new(self.config.temperature, self.config.viscosity, dt);

        let mut steps = 0;
        while self.leftover_time > dt {
            ensure_capacity(self.particles.len(), self.grid.capacity())?;
            self.leftover_time -= dt;
            self.substep(dt, &kick);
            steps += 1;
        }
        Ok(steps)
    }

    /// One fixed step: thermostat and drift, forces, closing kick
    fn substep(&mut self, dt: f64, kick: &LangevinKick) {
        self.drift(dt, kick);
        self.accumulate_forces();
        self.close_step(dt, kick);
    }

    /// Half kick with the previous acceleration, full drift, grid rebuild
    fn drift(&mut self, dt: f64, kick: &LangevinKick) {
        let (width, height) = (self.config.box_width, self.config.box_height);
        let gravity = DVec2::new(0.0, -self.config.gravity_strength);

        self.grid.clear();
        for (index, p) in self.particles.iter_mut().enumerate() {
            kick.apply(&mut p.velocity, p.mass, &mut self.thermostat);
            p.velocity += 0.5 * dt * p.acceleration;
            p.position += p.velocity * dt;
            p.position = periodize(p.position, width, height);

            p.acceleration = gravity;
            p.potential_energy = 0.0;

            let (col, row) = self.grid.cell_of(p.position);
            p.grid_col = col;
            p.grid_row = row;
            self.grid.publish(col, row, index);
        }
    }

    /// Drag spring, wall bounces and pair forces
    fn accumulate_forces(&mut self) {
        let Self {
            particles,
            walls,
            config,
            grid,
            drag,
            ..
        } = self;

        let (width, height) = (config.box_width, config.box_height);
        let range = config.cutoff_range();
        let range_squared = range * range;
        let cell_radius = grid.search_radius(range);

        for i in 0..particles.len() {
            let (before, rest) = particles.split_at_mut(i);
            let particle = &mut rest[0];

            if drag.active && drag.target == i {
                particle.acceleration += drag_acceleration(
                    particle.position,
                    particle.velocity,
                    particle.mass,
                    drag.pointer,
                    config.drag_strength,
                );
            }

            for wall in walls.iter() {
                resolve_wall_contact(
                    &mut particle.position,
                    &mut particle.velocity,
                    particle.radius,
                    wall,
                );
            }

            // Lower indices only: each pair once, never a particle with itself
            for j in grid.neighbors(particle.grid_col, particle.grid_row, cell_radius) {
                if j >= i {
                    continue;
                }
                let other = &mut before[j];

                let displacement = periodize(other.position - particle.position, width, height);
                let quadrance = displacement.length_squared();
                if quadrance == 0.0 || quadrance > range_squared {
                    continue;
                }

                let pair = lennard_jones(quadrance, config.separation, config.bond_energy);
                particle.acceleration += pair.force_factor / particle.mass * displacement;
                other.acceleration -= pair.force_factor / other.mass * displacement;

                let half_potential = 0.5 * pair.potential;
                particle.potential_energy = half_potential;
                other.potential_energy = half_potential;
            }
        }
    }

    /// Second half kick, thermostat, kinetic energy
    fn close_step(&mut self, dt: f64, kick: &LangevinKick) {
        for p in self.particles.iter_mut() {
            p.velocity += 0.5 * dt * p.acceleration;
            kick.apply(&mut p.velocity, p.mass, &mut self.thermostat);
            p.kinetic_energy = 0.5 * p.mass * p.velocity.length_squared();
        }
    }

    pub(crate) fn log_scene(&self) {
        info!(
            "Loaded scene {}: {} particles, {} walls, box {}x{}",
            self.scene.name(),
            self.particles.len(),
            self.walls.len(),
            self.config.box_width,
            self.config.box_height
        );
    }
}

fn ensure_capacity(requested: usize, capacity: usize) -> Result<()> {
    if requested > capacity {
        return Err(SimError::GridCapacityExceeded {
            requested,
            capacity,
        });
    }
    Ok(())
}
