use bevy::prelude::*;
use tiny_sim::SimulationSet;

use super::camera;
use super::draw;
use super::input;
use super::ui;

/// Window-side plugin: reads input before the simulation set and draws after it
pub struct TinyRenderPlugin;

impl Plugin for TinyRenderPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ui::HudThrottle>()
            .add_systems(
                Startup,
                (camera::spawn_camera, ui::spawn_hud, draw::spawn_particle_mesh),
            )
            .add_systems(
                Update,
                (input::pointer_input_system, input::keyboard_input_system)
                    .before(SimulationSet),
            )
            .add_systems(
                Update,
                (
                    camera::fit_camera_system,
                    draw::update_particle_mesh,
                    draw::draw_walls,
                    draw::draw_drag,
                    ui::update_hud,
                )
                    .after(SimulationSet),
            );
    }
}
