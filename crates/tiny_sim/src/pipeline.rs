use bevy::prelude::*;

use super::commands::{ShellState, SimCommand, apply_command};
use super::simulation::Simulation;

/// Commands, then integration. Input systems run before this set and
/// drawing after it, so nothing observes a half-applied tick.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct SimulationSet;

/// Bevy plugin for the simulation pipeline
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<SimCommand>()
            .init_resource::<ShellState>()
            .add_systems(
                Update,
                (apply_commands, simulation_tick)
                    .chain()
                    .in_set(SimulationSet),
            );
    }
}

fn apply_commands(
    mut commands: EventReader<SimCommand>,
    mut simulation: ResMut<Simulation>,
    mut shell: ResMut<ShellState>,
) {
    for &command in commands.read() {
        if let Err(e) = apply_command(&mut simulation, &mut shell, command) {
            warn!("Command {:?} failed: {}", command, e);
        }
    }
}

/// Main simulation tick: hand the frame's real time to the integrator
fn simulation_tick(
    mut simulation: ResMut<Simulation>,
    shell: Res<ShellState>,
    time: Res<Time>,
) {
    if shell.paused {
        return;
    }

    let dt = time.delta_secs_f64();
    if let Err(e) = simulation.advance(dt) {
        warn!("Advance aborted: {}", e);
    }
}
