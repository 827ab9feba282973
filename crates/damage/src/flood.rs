//! Flood depth to damage ratio curves.

use crate::building::BuildingType;

/// Control points `(depth_m, damage_ratio)` per occupancy class.
const RESIDENTIAL_POINTS: [(f64, f64); 7] = [
    (0.0, 0.00),
    (0.3, 0.10),
    (1.0, 0.20),
    (2.0, 0.40),
    (3.0, 0.60),
    (4.0, 0.75),
    (5.0, 0.85),
];

const COMMERCIAL_POINTS: [(f64, f64); 7] = [
    (0.0, 0.00),
    (0.3, 0.15),
    (1.0, 0.35),
    (2.0, 0.55),
    (3.0, 0.70),
    (4.0, 0.80),
    (5.0, 0.90),
];

const INDUSTRIAL_POINTS: [(f64, f64); 7] = [
    (0.0, 0.00),
    (0.3, 0.08),
    (1.0, 0.18),
    (2.0, 0.35),
    (3.0, 0.50),
    (4.0, 0.65),
    (5.0, 0.75),
];

/// Maps an inundation depth in metres to a damage ratio for the given
/// building type.
///
/// Piecewise-linear interpolation between the HAZUS control points. Depths
/// at or beyond the last point clamp to its damage ratio; depths below the
/// first point (and non-finite inputs) return 0.0. Construction classes
/// without a native flood curve alias to residential.
pub fn flood_damage_ratio(depth_m: f64, building: BuildingType) -> f64 {
    let points: &[(f64, f64)] = match building {
        BuildingType::Commercial => &COMMERCIAL_POINTS,
        BuildingType::Industrial => &INDUSTRIAL_POINTS,
        _ => &RESIDENTIAL_POINTS,
    };

    if depth_m.is_nan() || depth_m < points[0].0 {
        return 0.0;
    }

    for pair in points.windows(2) {
        let (d1, r1) = pair[0];
        let (d2, r2) = pair[1];
        if depth_m <= d2 {
            let frac = (depth_m - d1) / (d2 - d1);
            return r1 + frac * (r2 - r1);
        }
    }

    points[points.len() - 1].1
}
