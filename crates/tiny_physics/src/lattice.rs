use std::f64::consts::TAU;

use glam::DVec2;

/// Points in the first `rings` rings of a hexagonal lattice (centered
/// hexagonal number `1 + 3k(k-1)`). `hexagon_number(0)` is 1 as well.
pub fn hexagon_number(rings: u32) -> usize {
    let k = rings as usize;
    1 + 3 * k * k.saturating_sub(1)
}

/// Ring and position within the ring of lattice point `index`.
///
/// Ring 0 is the origin alone; ring `k > 0` holds `6k` points.
pub fn ring_of(index: usize) -> (usize, usize) {
    if index == 0 {
        return (0, 0);
    }

    let k = index - 1;
    let mut ring = 1;
    while 3 * ring * (ring + 1) <= k {
        ring += 1;
    }
    (ring, k - 3 * ring * (ring - 1))
}

/// Unit-spaced hexagonal lattice position of point `index`, spiralling out
/// from the origin ring by ring.
pub fn hexagon_lattice_position(index: usize) -> DVec2 {
    let (ring, rest) = ring_of(index);
    if ring == 0 {
        return DVec2::ZERO;
    }

    let side = rest / ring;
    let step = rest % ring;
    let angle = side as f64 * TAU / 6.0;
    let corner = DVec2::from_angle(angle);
    let along = DVec2::from_angle(angle + TAU / 3.0);
    ring as f64 * corner + step as f64 * along
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hexagon_numbers() {
        let counts: Vec<usize> = (0..=3).map(hexagon_number).collect();
        assert_eq!(counts, vec![1, 1, 7, 19]);
        assert_eq!(hexagon_number(13), 469);
    }

    #[test]
    fn test_ring_sizes() {
        assert_eq!(hexagon_lattice_position(0), DVec2::ZERO);
        assert_eq!(ring_of(0), (0, 0));

        let mut per_ring = vec![0usize; 6];
        for index in 0..hexagon_number(6) {
            per_ring[ring_of(index).0] += 1;
        }
        assert_eq!(per_ring[0], 1);
        for k in 1..6 {
            assert_eq!(per_ring[k], 6 * k, "ring {k}");
        }
    }

    #[test]
    fn test_first_ring_is_unit_hexagon() {
        for index in 1..7 {
            let p = hexagon_lattice_position(index);
            assert!((p.length() - 1.0).abs() < 1e-12, "{index}: {p:?}");
        }
    }

    #[test]
    fn test_lattice_points_are_distinct_and_unit_spaced() {
        let points: Vec<DVec2> = (0..hexagon_number(5)).map(hexagon_lattice_position).collect();
        let mut min_distance = f64::MAX;
        for i in 0..points.len() {
            for j in 0..i {
                min_distance = min_distance.min(points[i].distance(points[j]));
            }
        }
        assert!((min_distance - 1.0).abs() < 1e-9, "min distance {min_distance}");
    }
}
