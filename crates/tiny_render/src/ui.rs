use bevy::prelude::*;
use tiny_sim::{ShellState, Simulation};

/// Marker for the HUD text
#[derive(Component)]
pub struct HudText;

/// Spawn the HUD overlay
pub fn spawn_hud(mut commands: Commands) {
    commands.spawn((
        Text::new("Many Tiny Things"),
        TextFont {
            font_size: 16.0,
            ..default()
        },
        TextColor(Color::srgba(0.1, 0.1, 0.1, 0.9)),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(10.0),
            left: Val::Px(10.0),
            ..default()
        },
        HudText,
    ));
}

/// HUD frame counter for throttling
#[derive(Resource, Default)]
pub struct HudThrottle {
    pub frame: u32,
}

/// Update HUD text every 10th frame
pub fn update_hud(
    simulation: Res<Simulation>,
    shell: Res<ShellState>,
    mut throttle: ResMut<HudThrottle>,
    mut hud_query: Query<&mut Text, With<HudText>>,
) {
    throttle.frame = throttle.frame.wrapping_add(1);
    if throttle.frame % 10 != 0 {
        return;
    }
    let Ok(mut text) = hud_query.get_single_mut() else {
        return;
    };

    let energy = simulation.energy();
    let config = simulation.config();
    let paused = if shell.paused { " [PAUSED]" } else { "" };
    let spawning = if shell.continuous_spawn { " [SPAWNING]" } else { "" };

    **text = format!(
        "{} | Particles: {}{}{}\n\
         KE: {:.1} | PE: {:.1} | Total: {:.1}\n\
         T: {:.2} (bath {:.1}) | g: {:.1}\n\
         \n\
         [LMB] Drag  [C] Spawn  [R] Reset\n\
         [1] Crystal  [2] Evaporation  [Space] Pause",
        simulation.scene().name(),
        simulation.particle_count(),
        paused,
        spawning,
        energy.kinetic,
        energy.potential,
        energy.total,
        energy.temperature,
        config.temperature,
        config.gravity_strength,
    );
}
