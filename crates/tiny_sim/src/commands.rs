use bevy::prelude::{Event, Resource, debug, info};
use glam::DVec2;
use tiny_core::{Result, Scene};

use super::simulation::Simulation;

/// Discrete request from the application shell, applied before integration
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub enum SimCommand {
    /// Pick the particle under `point` and start dragging it
    PickAt(DVec2),
    /// Drag a particle by index toward the current pointer
    BeginDrag(usize),
    EndDrag,
    /// Pointer moved; spawns here too while continuous spawn is on
    MovePointer(DVec2),
    /// Add a particle at `point` unless it would overlap something
    SpawnAt(DVec2),
    Reset,
    LoadScene(Scene),
    ToggleContinuousSpawn,
    /// Turn continuous spawn on or off outright, e.g. while a key is held
    SetContinuousSpawn(bool),
    TogglePause,
}

/// Shell-side flags that are not part of the simulated world
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct ShellState {
    pub continuous_spawn: bool,
    pub paused: bool,
    /// Result of the most recent pick
    pub last_pick: Option<usize>,
}

/// Apply one command to the world and shell state
pub fn apply_command(
    simulation: &mut Simulation,
    shell: &mut ShellState,
    command: SimCommand,
) -> Result<()> {
    match command {
        SimCommand::PickAt(point) => {
            shell.last_pick = simulation.pick_particle(point);
            if let Some(index) = shell.last_pick {
                simulation.begin_drag(index, point)?;
            }
        }
        SimCommand::BeginDrag(index) => {
            let pointer = simulation.drag().pointer;
            simulation.begin_drag(index, pointer)?;
        }
        SimCommand::EndDrag => simulation.end_drag(),
        SimCommand::MovePointer(point) => {
            simulation.set_pointer(point);
            if shell.continuous_spawn && simulation.pick_particle(point).is_none() {
                simulation.spawn_at(point)?;
            }
        }
        SimCommand::SpawnAt(point) => {
            if simulation.spawn_at(point)?.is_none() {
                debug!("Spawn rejected at ({:.2}, {:.2})", point.x, point.y);
            }
        }
        SimCommand::Reset => simulation.reset()?,
        SimCommand::LoadScene(scene) => simulation.load_scene(scene)?,
        SimCommand::ToggleContinuousSpawn => {
            shell.continuous_spawn = !shell.continuous_spawn;
        }
        SimCommand::SetContinuousSpawn(on) => shell.continuous_spawn = on,
        SimCommand::TogglePause => {
            shell.paused = !shell.paused;
            info!("Simulation {}", if shell.paused { "paused" } else { "resumed" });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tiny_core::SimConfig;

    fn evaporation() -> Simulation {
        Simulation::with_scene(SimConfig::default(), Scene::Evaporation).unwrap()
    }

    #[test]
    fn test_pick_starts_drag_on_hit_only() {
        let mut sim = evaporation();
        let mut shell = ShellState::default();
        sim.spawn_at(DVec2::new(0.0, -10.0)).unwrap();

        apply_command(&mut sim, &mut shell, SimCommand::PickAt(DVec2::new(5.0, 5.0))).unwrap();
        assert_eq!(shell.last_pick, None);
        assert!(!sim.drag().active);

        let point = DVec2::new(0.3, -10.2);
        apply_command(&mut sim, &mut shell, SimCommand::PickAt(point)).unwrap();
        assert_eq!(shell.last_pick, Some(0));
        assert!(sim.drag().active);
        assert_eq!(sim.drag().pointer, point);

        apply_command(&mut sim, &mut shell, SimCommand::EndDrag).unwrap();
        assert!(!sim.drag().active);
    }

    #[test]
    fn test_begin_drag_rejects_stale_index() {
        let mut sim = evaporation();
        let mut shell = ShellState::default();
        assert!(apply_command(&mut sim, &mut shell, SimCommand::BeginDrag(0)).is_err());
    }

    #[test]
    fn test_continuous_spawn_follows_pointer() {
        let mut sim = evaporation();
        let mut shell = ShellState::default();

        apply_command(&mut sim, &mut shell, SimCommand::MovePointer(DVec2::new(0.0, -10.0))).unwrap();
        assert_eq!(sim.particle_count(), 0);

        apply_command(&mut sim, &mut shell, SimCommand::ToggleContinuousSpawn).unwrap();
        for x in [0.0, 0.5, 3.0, 6.0] {
            apply_command(&mut sim, &mut shell, SimCommand::MovePointer(DVec2::new(x, -10.0))).unwrap();
        }
        // 0.5 lands inside the first disc; nothing spawns there
        assert_eq!(sim.particle_count(), 3);
        assert_eq!(sim.drag().pointer, DVec2::new(6.0, -10.0));
    }

    #[test]
    fn test_set_continuous_spawn_is_absolute() {
        let mut sim = evaporation();
        let mut shell = ShellState::default();

        // A release without a matching press still leaves spawning off
        apply_command(&mut sim, &mut shell, SimCommand::SetContinuousSpawn(false)).unwrap();
        assert!(!shell.continuous_spawn);

        apply_command(&mut sim, &mut shell, SimCommand::SetContinuousSpawn(true)).unwrap();
        apply_command(&mut sim, &mut shell, SimCommand::SetContinuousSpawn(true)).unwrap();
        assert!(shell.continuous_spawn);

        apply_command(&mut sim, &mut shell, SimCommand::ToggleContinuousSpawn).unwrap();
        apply_command(&mut sim, &mut shell, SimCommand::SetContinuousSpawn(false)).unwrap();
        assert!(!shell.continuous_spawn);
    }

    #[test]
    fn test_spawn_and_reset() {
        let mut sim = evaporation();
        let mut shell = ShellState::default();
        apply_command(&mut sim, &mut shell, SimCommand::SpawnAt(DVec2::new(0.0, -10.0))).unwrap();
        apply_command(&mut sim, &mut shell, SimCommand::SpawnAt(DVec2::new(1.0, -10.0))).unwrap();
        assert_eq!(sim.particle_count(), 1);

        apply_command(&mut sim, &mut shell, SimCommand::Reset).unwrap();
        assert_eq!(sim.particle_count(), 0);

        apply_command(&mut sim, &mut shell, SimCommand::LoadScene(Scene::Crystal)).unwrap();
        assert_eq!(sim.scene(), Scene::Crystal);
        assert_eq!(sim.particle_count(), 469);
    }

    #[test]
    fn test_toggle_pause() {
        let mut sim = evaporation();
        let mut shell = ShellState::default();
        apply_command(&mut sim, &mut shell, SimCommand::TogglePause).unwrap();
        assert!(shell.paused);
        apply_command(&mut sim, &mut shell, SimCommand::TogglePause).unwrap();
        assert!(!shell.paused);
    }
}
