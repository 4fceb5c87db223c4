use tiny_sim::ParticleView;

/// Points around the rim of each disc, the first and last coinciding
pub const DISC_RIM_POINTS: usize = 20;

/// Triangles in one disc fan
pub const DISC_TRIANGLES: usize = DISC_RIM_POINTS - 2;

/// Flat triangle-list geometry for a batch of discs
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DiscBatch {
    pub positions: Vec<[f32; 3]>,
    pub colors: Vec<[f32; 4]>,
}

impl DiscBatch {
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }
}

/// Fan every particle into `DISC_TRIANGLES` triangles sharing its first rim point.
///
/// Colors are converted with `to_vertex_color` so the caller picks the color space.
pub fn disc_batch(particles: &[ParticleView], to_vertex_color: impl Fn([f32; 4]) -> [f32; 4]) -> DiscBatch {
    let mut batch = DiscBatch {
        positions: Vec::with_capacity(particles.len() * DISC_TRIANGLES * 3),
        colors: Vec::with_capacity(particles.len() * DISC_TRIANGLES * 3),
    };
    let step = std::f64::consts::TAU / (DISC_RIM_POINTS - 1) as f64;

    for particle in particles {
        let rim = |k: usize| {
            let (sin, cos) = (k as f64 * step).sin_cos();
            let p = particle.position + particle.radius * glam::DVec2::new(cos, sin);
            [p.x as f32, p.y as f32, 0.0]
        };
        let color = to_vertex_color(particle.color);

        let first = rim(0);
        for k in 1..=DISC_TRIANGLES {
            batch.positions.extend_from_slice(&[first, rim(k), rim(k + 1)]);
            batch.colors.extend_from_slice(&[color; 3]);
        }
    }

    batch
}
