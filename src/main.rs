use bevy::prelude::*;
use tiny_core::{Scene, SimConfig};
use tiny_render::TinyRenderPlugin;
use tiny_sim::{Simulation, SimulationPlugin};

fn main() -> AppExit {
    let simulation = match Simulation::with_scene(SimConfig::default(), Scene::Crystal) {
        Ok(simulation) => simulation,
        Err(e) => {
            eprintln!("Failed to build the simulation: {e}");
            return AppExit::error();
        }
    };

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Many Tiny Things".into(),
                resolution: (1000.0, 1000.0).into(),
                ..default()
            }),
            ..default()
        }))
        .insert_resource(ClearColor(Color::WHITE))
        .insert_resource(simulation)
        .add_plugins(SimulationPlugin)
        .add_plugins(TinyRenderPlugin)
        .run()
}
