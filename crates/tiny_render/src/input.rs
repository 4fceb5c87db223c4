use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use glam::DVec2;
use tiny_core::Scene;
use tiny_sim::SimCommand;

use super::camera::BoxCamera;

/// Translate mouse buttons and motion into world-space commands
pub fn pointer_input_system(
    mouse: Res<ButtonInput<MouseButton>>,
    mut cursor_moved: EventReader<CursorMoved>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform), With<BoxCamera>>,
    mut commands: EventWriter<SimCommand>,
) {
    let moved = cursor_moved.read().last().is_some();
    let pointer = cursor_world_position(&windows, &cameras);

    if mouse.just_pressed(MouseButton::Left) {
        if let Some(point) = pointer {
            commands.send(SimCommand::PickAt(point));
        }
    }
    if mouse.just_released(MouseButton::Left) {
        commands.send(SimCommand::EndDrag);
    }
    if moved {
        if let Some(point) = pointer {
            commands.send(SimCommand::MovePointer(point));
        }
    }
}

/// Scene, reset, pause and spawn keys
pub fn keyboard_input_system(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut commands: EventWriter<SimCommand>,
) {
    if keyboard.just_pressed(KeyCode::Space) {
        commands.send(SimCommand::TogglePause);
    }
    if keyboard.just_pressed(KeyCode::KeyR) {
        commands.send(SimCommand::Reset);
    }
    if keyboard.just_pressed(KeyCode::Digit1) {
        commands.send(SimCommand::LoadScene(Scene::Crystal));
    }
    if keyboard.just_pressed(KeyCode::Digit2) {
        commands.send(SimCommand::LoadScene(Scene::Evaporation));
    }
    // Spawning lasts as long as the key is held
    if let Some(on) = hold_transition(
        keyboard.just_pressed(KeyCode::KeyC),
        keyboard.just_released(KeyCode::KeyC),
    ) {
        commands.send(SimCommand::SetContinuousSpawn(on));
    }
}

/// New state for a hold-to-activate key, if it changed this frame
fn hold_transition(just_pressed: bool, just_released: bool) -> Option<bool> {
    match (just_pressed, just_released) {
        (true, false) => Some(true),
        (_, true) => Some(false),
        (false, false) => None,
    }
}

fn cursor_world_position(
    windows: &Query<&Window, With<PrimaryWindow>>,
    cameras: &Query<(&Camera, &GlobalTransform), With<BoxCamera>>,
) -> Option<DVec2> {
    let window = windows.get_single().ok()?;
    let cursor = window.cursor_position()?;
    let (camera, transform) = cameras.get_single().ok()?;
    let world = camera.viewport_to_world_2d(transform, cursor).ok()?;
    Some(world.as_dvec2())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hold_transition() {
        assert_eq!(hold_transition(true, false), Some(true));
        assert_eq!(hold_transition(false, true), Some(false));
        assert_eq!(hold_transition(false, false), None);
        // Pressed and released within one frame ends up off
        assert_eq!(hold_transition(true, true), Some(false));
    }
}
