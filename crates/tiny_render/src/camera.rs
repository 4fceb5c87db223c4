use bevy::prelude::*;
use bevy::render::camera::ScalingMode;
use tiny_sim::Simulation;

/// Marker for the camera looking at the periodic box
#[derive(Component)]
pub struct BoxCamera;

/// Spawn a 2D camera whose view is exactly the simulation box
pub fn spawn_camera(mut commands: Commands, simulation: Res<Simulation>) {
    let config = simulation.config();
    commands.spawn((
        Camera2d,
        box_projection(config.box_width, config.box_height),
        BoxCamera,
    ));
}

/// Keep the view fitted if the box size changes
pub fn fit_camera_system(
    simulation: Res<Simulation>,
    mut query: Query<&mut OrthographicProjection, With<BoxCamera>>,
) {
    let config = simulation.config();
    for mut projection in &mut query {
        // Any write marks the projection changed, so only write on a real resize
        if needs_refit(&projection.scaling_mode, config.box_width, config.box_height) {
            projection.scaling_mode = box_projection(config.box_width, config.box_height).scaling_mode;
        }
    }
}

/// Whether `mode` shows something other than the whole `width` x `height` box
fn needs_refit(mode: &ScalingMode, width: f64, height: f64) -> bool {
    match *mode {
        ScalingMode::Fixed {
            width: fitted_width,
            height: fitted_height,
        } => fitted_width != width as f32 || fitted_height != height as f32,
        _ => true,
    }
}

fn box_projection(width: f64, height: f64) -> OrthographicProjection {
    OrthographicProjection {
        scaling_mode: ScalingMode::Fixed {
            width: width as f32,
            height: height as f32,
        },
        ..OrthographicProjection::default_2d()
    }
}
