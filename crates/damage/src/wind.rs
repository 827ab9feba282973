//! Wind speed to damage ratio curves.

use crate::building::BuildingType;

/// Sustained wind speed below which no structural damage occurs (mph).
pub const WIND_DAMAGE_THRESHOLD_MPH: f64 = 74.0;

/// Control points `(wind_mph, damage_ratio)` for wood-frame construction,
/// linearly interpolated between points. Beyond the last point the curve
/// continues at `WOOD_FRAME_TAIL_SLOPE` up to a cap of 1.0.
const WOOD_FRAME_POINTS: [(f64, f64); 5] = [
    (74.0, 0.05),
    (95.0, 0.15),
    (110.0, 0.30),
    (130.0, 0.50),
    (157.0, 0.80),
];
const WOOD_FRAME_TAIL_SLOPE: f64 = 0.0050;
const WOOD_FRAME_CAP: f64 = 1.0;

/// Control points for reinforced-concrete construction. Tail slope applies
/// beyond the last point up to a cap of 0.70.
const CONCRETE_POINTS: [(f64, f64); 5] = [
    (74.0, 0.02),
    (95.0, 0.05),
    (110.0, 0.10),
    (130.0, 0.20),
    (157.0, 0.40),
];
const CONCRETE_TAIL_SLOPE: f64 = 0.0075;
const CONCRETE_CAP: f64 = 0.70;

/// Maps a sustained wind speed in mph to a damage ratio for the given
/// building type.
///
/// Returns exactly 0.0 below [`WIND_DAMAGE_THRESHOLD_MPH`]. Above it the
/// curve is piecewise linear through the HAZUS breakpoints (95, 110, 130,
/// 157 mph) and capped at 1.0 for wood frame or 0.70 for concrete. Building
/// types without a native wind curve alias to wood frame.
pub fn wind_damage_ratio(wind_mph: f64, building: BuildingType) -> f64 {
    let (points, tail_slope, cap) = match building {
        BuildingType::Concrete => (&CONCRETE_POINTS, CONCRETE_TAIL_SLOPE, CONCRETE_CAP),
        _ => (&WOOD_FRAME_POINTS, WOOD_FRAME_TAIL_SLOPE, WOOD_FRAME_CAP),
    };

    if wind_mph.is_nan() || wind_mph < WIND_DAMAGE_THRESHOLD_MPH {
        return 0.0;
    }

    for pair in points.windows(2) {
        let (w1, d1) = pair[0];
        let (w2, d2) = pair[1];
        if wind_mph < w2 {
            let frac = (wind_mph - w1) / (w2 - w1);
            return d1 + frac * (d2 - d1);
        }
    }

    let (w_last, d_last) = points[points.len() - 1];
    (d_last + (wind_mph - w_last) * tail_slope).min(cap)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn zero_below_threshold() {
        for &w in &[0.0, 30.0, 73.0, 73.999] {
            assert_eq!(wind_damage_ratio(w, BuildingType::WoodFrame), 0.0);
            assert_eq!(wind_damage_ratio(w, BuildingType::Concrete), 0.0);
        }
    }

    #[test]
    fn breakpoint_values_wood_frame() {
        assert_abs_diff_eq!(
            wind_damage_ratio(74.0, BuildingType::WoodFrame),
            0.05,
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(
            wind_damage_ratio(95.0, BuildingType::WoodFrame),
            0.15,
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(
            wind_damage_ratio(110.0, BuildingType::WoodFrame),
            0.30,
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(
            wind_damage_ratio(130.0, BuildingType::WoodFrame),
            0.50,
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(
            wind_damage_ratio(157.0, BuildingType::WoodFrame),
            0.80,
            epsilon = 1e-12
        );
    }

    #[test]
    fn breakpoint_values_concrete() {
        assert_abs_diff_eq!(
            wind_damage_ratio(74.0, BuildingType::Concrete),
            0.02,
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(
            wind_damage_ratio(157.0, BuildingType::Concrete),
            0.40,
            epsilon = 1e-12
        );
    }

    #[test]
    fn continuous_at_interior_breakpoints() {
        for bt in [BuildingType::WoodFrame, BuildingType::Concrete] {
            for &w in &[95.0, 110.0, 130.0, 157.0] {
                let below = wind_damage_ratio(w - 1e-9, bt);
                let at = wind_damage_ratio(w, bt);
                assert_abs_diff_eq!(below, at, epsilon = 1e-6);
            }
        }
    }

    #[test]
    fn non_decreasing_over_full_range() {
        for bt in [BuildingType::WoodFrame, BuildingType::Concrete] {
            let mut prev = 0.0;
            let mut w = 0.0;
            while w <= 400.0 {
                let d = wind_damage_ratio(w, bt);
                assert!(d >= prev, "curve decreased at {w} mph for {bt}");
                prev = d;
                w += 0.25;
            }
        }
    }

    #[test]
    fn capped_at_building_type_maximum() {
        assert_eq!(wind_damage_ratio(500.0, BuildingType::WoodFrame), 1.0);
        assert_eq!(wind_damage_ratio(1e6, BuildingType::WoodFrame), 1.0);
        assert_eq!(wind_damage_ratio(500.0, BuildingType::Concrete), 0.70);
        assert_eq!(wind_damage_ratio(1e6, BuildingType::Concrete), 0.70);
    }

    #[test]
    fn wood_frame_cap_reached_at_197_mph() {
        // 0.80 + (197 - 157) * 0.0050 = 1.0
        assert_abs_diff_eq!(
            wind_damage_ratio(197.0, BuildingType::WoodFrame),
            1.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn occupancy_classes_alias_to_wood_frame() {
        for bt in [
            BuildingType::Residential,
            BuildingType::Commercial,
            BuildingType::Industrial,
        ] {
            for &w in &[80.0, 120.0, 200.0] {
                assert_eq!(
                    wind_damage_ratio(w, bt),
                    wind_damage_ratio(w, BuildingType::WoodFrame)
                );
            }
        }
    }

    #[test]
    fn extreme_inputs_stay_bounded() {
        assert_eq!(wind_damage_ratio(f64::NAN, BuildingType::WoodFrame), 0.0);
        assert_eq!(
            wind_damage_ratio(f64::NEG_INFINITY, BuildingType::Concrete),
            0.0
        );
        assert_eq!(
            wind_damage_ratio(f64::INFINITY, BuildingType::WoodFrame),
            1.0
        );
        assert_eq!(wind_damage_ratio(f64::INFINITY, BuildingType::Concrete), 0.70);
    }
}
