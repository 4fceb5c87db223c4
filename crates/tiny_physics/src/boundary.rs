use glam::DVec2;

/// Wrap a single coordinate into `[-size/2, size/2)`
pub fn wrap_coordinate(x: f64, size: f64) -> f64 {
    let half = 0.5 * size;
    let mut wrapped = x - size * (x / size + 0.5).floor();
    if wrapped >= half {
        wrapped -= size;
    }
    if wrapped < -half {
        wrapped += size;
    }
    // `wrapped + size` can round up onto the open end
    if wrapped >= half {
        wrapped = -half;
    }
    wrapped
}

/// Map a position (or a displacement) onto the periodic box centered at the origin.
///
/// For displacements this yields the minimum-image vector between two points.
pub fn periodize(p: DVec2, width: f64, height: f64) -> DVec2 {
    DVec2::new(wrap_coordinate(p.x, width), wrap_coordinate(p.y, height))
}
