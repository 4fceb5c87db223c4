use glam::DVec2;
use tiny_core::constants::DRAG_DAMPING;
use tiny_core::Wall;

/// Result of evaluating the 12-6 potential for one pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairInteraction {
    /// Pair potential energy
    pub potential: f64,
    /// Multiply by the displacement `x_j - x_i` to get the force on `i`
    pub force_factor: f64,
}

/// 12-6 potential with its minimum `-bond_energy` at distance `separation`.
///
/// `quadrance` is the squared pair distance. A positive `force_factor` pulls
/// the pair together, a negative one pushes it apart.
pub fn lennard_jones(quadrance: f64, separation: f64, bond_energy: f64) -> PairInteraction {
    let inv_quadrance = 1.0 / quadrance;
    let r_inv2 = separation * separation * inv_quadrance;
    let r_inv6 = r_inv2 * r_inv2 * r_inv2;
    let r_inv12 = r_inv6 * r_inv6;

    let potential = bond_energy * (r_inv12 - 2.0 * r_inv6);
    let virial = 12.0 * bond_energy * (r_inv6 - r_inv12);

    PairInteraction {
        potential,
        force_factor: virial * inv_quadrance,
    }
}

/// Vector from the closest point of segment `start..end` to `point`.
///
/// The projection is clamped to the segment, so past either end the vector
/// points from that endpoint.
pub fn shortest_vector_from_segment(point: DVec2, start: DVec2, end: DVec2) -> DVec2 {
    let line = end - start;
    let from_start = point - start;
    let length_squared = line.length_squared();
    if length_squared == 0.0 {
        return from_start;
    }

    let t = from_start.dot(line) / length_squared;
    if t <= 0.0 {
        from_start
    } else if t >= 1.0 {
        from_start - line
    } else {
        from_start - t * line
    }
}

/// Push a disc out of `wall` and reflect its velocity along the contact normal.
///
/// Returns whether a contact was resolved. A center lying exactly on the
/// segment has no defined normal and is left alone.
pub fn resolve_wall_contact(
    position: &mut DVec2,
    velocity: &mut DVec2,
    radius: f64,
    wall: &Wall,
) -> bool {
    let from_wall = shortest_vector_from_segment(*position, wall.start, wall.end);
    let distance_squared = from_wall.length_squared();
    if distance_squared >= radius * radius || distance_squared == 0.0 {
        return false;
    }

    let distance = distance_squared.sqrt();
    let normal = from_wall / distance;
    let overlap = radius - distance;

    *position += overlap * normal;
    *velocity -= 2.0 * velocity.dot(normal) * normal;
    true
}

/// Spring toward the pointer plus velocity damping, as an acceleration
pub fn drag_acceleration(
    position: DVec2,
    velocity: DVec2,
    mass: f64,
    pointer: DVec2,
    strength: f64,
) -> DVec2 {
    strength / mass * (pointer - position) - DRAG_DAMPING * velocity / mass
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_potential_minimum_at_separation() {
        let at_min = lennard_jones(4.0, 2.0, 50.0);
        assert!((at_min.potential + 50.0).abs() < 1e-9);
        assert!(at_min.force_factor.abs() < 1e-9);

        let closer = lennard_jones(1.8 * 1.8, 2.0, 50.0);
        let farther = lennard_jones(2.4 * 2.4, 2.0, 50.0);
        assert!(closer.potential > at_min.potential);
        assert!(farther.potential > at_min.potential);
        // Repulsive inside, attractive outside
        assert!(closer.force_factor < 0.0);
        assert!(farther.force_factor > 0.0);
    }

    #[test]
    fn test_force_is_negative_gradient() {
        let (s, e) = (2.0, 50.0);
        let r: f64 = 2.3;
        let h = 1e-6;
        let du_dr = (lennard_jones((r + h) * (r + h), s, e).potential
            - lennard_jones((r - h) * (r - h), s, e).potential)
            / (2.0 * h);
        // Force on i along +d (toward j) equals force_factor * r; equals dU/dr
        let along = lennard_jones(r * r, s, e).force_factor * r;
        assert!((along - du_dr).abs() < 1e-4, "{along} vs {du_dr}");
    }

    #[test]
    fn test_segment_projection_and_clamping() {
        let start = DVec2::new(-1.0, 0.0);
        let end = DVec2::new(1.0, 0.0);

        let inside = shortest_vector_from_segment(DVec2::new(0.5, 2.0), start, end);
        assert!((inside - DVec2::new(0.0, 2.0)).length() < 1e-12);

        let past_end = shortest_vector_from_segment(DVec2::new(3.0, 1.0), start, end);
        assert!((past_end - DVec2::new(2.0, 1.0)).length() < 1e-12);

        let before_start = shortest_vector_from_segment(DVec2::new(-2.0, -1.0), start, end);
        assert!((before_start - DVec2::new(-1.0, -1.0)).length() < 1e-12);

        let degenerate = shortest_vector_from_segment(DVec2::new(1.0, 1.0), start, start);
        assert!((degenerate - DVec2::new(2.0, 1.0)).length() < 1e-12);
    }

    #[test]
    fn test_wall_contact_pushes_out_and_reflects() {
        let wall = Wall::new(DVec2::new(-10.0, 0.0), DVec2::new(10.0, 0.0));
        let mut position = DVec2::new(0.0, 0.4);
        let mut velocity = DVec2::new(1.0, -3.0);

        assert!(resolve_wall_contact(&mut position, &mut velocity, 1.0, &wall));
        assert!((position.y - 1.0).abs() < 1e-12);
        assert!((velocity - DVec2::new(1.0, 3.0)).length() < 1e-12);

        // Clear of the wall: no contact
        position.y = 1.5;
        assert!(!resolve_wall_contact(&mut position, &mut velocity, 1.0, &wall));
        assert!((velocity - DVec2::new(1.0, 3.0)).length() < 1e-12);
    }

    #[test]
    fn test_drag_pulls_toward_pointer() {
        let a = drag_acceleration(DVec2::ZERO, DVec2::ZERO, 2.0, DVec2::new(4.0, 0.0), 10.0);
        assert!((a - DVec2::new(20.0, 0.0)).length() < 1e-12);

        let damped = drag_acceleration(DVec2::ZERO, DVec2::new(0.0, 2.0), 2.0, DVec2::ZERO, 10.0);
        assert!(damped.y < 0.0);
    }
}
