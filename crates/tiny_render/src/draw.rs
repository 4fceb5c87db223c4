use bevy::prelude::*;
use bevy::render::mesh::PrimitiveTopology;
use bevy::render::render_asset::RenderAssetUsages;
use bevy::render::view::NoFrustumCulling;
use tiny_sim::Simulation;

use super::geometry::disc_batch;

/// Marker for the entity holding every particle disc in one mesh
#[derive(Component)]
pub struct ParticleMesh;

const WALL_COLOR: Color = Color::BLACK;

/// Spawn the shared particle mesh. Vertex colors carry each particle's color.
pub fn spawn_particle_mesh(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    let mesh = meshes.add(empty_mesh());
    let material = materials.add(ColorMaterial::from(Color::WHITE));

    // The mesh is rewritten every frame, so its first bounds mean nothing
    commands.spawn((
        Mesh2d(mesh),
        MeshMaterial2d(material),
        Transform::default(),
        NoFrustumCulling,
        ParticleMesh,
    ));
}

/// Rebuild the particle mesh from the current snapshot
pub fn update_particle_mesh(
    simulation: Res<Simulation>,
    mut meshes: ResMut<Assets<Mesh>>,
    query: Query<&Mesh2d, With<ParticleMesh>>,
) {
    let Ok(handle) = query.get_single() else {
        return;
    };
    let Some(mesh) = meshes.get_mut(&handle.0) else {
        return;
    };

    let snapshot = simulation.snapshot();
    let batch = disc_batch(&snapshot.particles, linear_vertex_color);
    if batch.vertex_count() == 0 {
        *mesh = empty_mesh();
        return;
    }

    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, batch.positions);
    mesh.insert_attribute(Mesh::ATTRIBUTE_COLOR, batch.colors);
}

/// Walls as plain line segments
pub fn draw_walls(simulation: Res<Simulation>, mut gizmos: Gizmos) {
    for wall in simulation.walls() {
        gizmos.line_2d(wall.start.as_vec2(), wall.end.as_vec2(), WALL_COLOR);
    }
}

/// Line from the dragged particle to the pointer
pub fn draw_drag(simulation: Res<Simulation>, mut gizmos: Gizmos) {
    let drag = simulation.drag();
    if !drag.active {
        return;
    }
    if let Some(target) = simulation.particles().get(drag.target) {
        gizmos.line_2d(
            target.position.as_vec2(),
            drag.pointer.as_vec2(),
            Color::srgba(0.2, 0.2, 0.2, 0.6),
        );
    }
}

/// Mesh colors are read as linear; particle colors are sRGB
fn linear_vertex_color(c: [f32; 4]) -> [f32; 4] {
    let linear = LinearRgba::from(Color::srgba(c[0], c[1], c[2], c[3]));
    [linear.red, linear.green, linear.blue, linear.alpha]
}

/// One invisible triangle, so the GPU never sees an empty vertex buffer
fn empty_mesh() -> Mesh {
    Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::default(),
    )
    .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, vec![[0.0f32; 3]; 3])
    .with_inserted_attribute(Mesh::ATTRIBUTE_COLOR, vec![[0.0f32; 4]; 3])
}
