//! Great-circle distance.

/// Mean Earth radius in kilometres.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine great-circle distance between two coordinates, in kilometres.
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn zero_distance_for_identical_points() {
        assert_abs_diff_eq!(haversine_km(25.76, -80.19, 25.76, -80.19), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn one_degree_latitude_is_about_111_km() {
        let d = haversine_km(0.0, 0.0, 1.0, 0.0);
        assert_abs_diff_eq!(d, 111.2, epsilon = 0.3);
    }

    #[test]
    fn longitude_distance_shrinks_with_latitude() {
        let at_equator = haversine_km(0.0, 0.0, 0.0, 1.0);
        let at_60n = haversine_km(60.0, 0.0, 60.0, 1.0);
        assert!(at_60n < at_equator * 0.55);
        assert!(at_60n > at_equator * 0.45);
    }

    #[test]
    fn miami_to_new_york() {
        // Great-circle distance is roughly 1760 km.
        let d = haversine_km(25.76, -80.19, 40.71, -74.01);
        assert!(d > 1700.0 && d < 1820.0, "got {d}");
    }

    #[test]
    fn symmetric_in_arguments() {
        let a = haversine_km(10.0, 20.0, 30.0, 40.0);
        let b = haversine_km(30.0, 40.0, 10.0, 20.0);
        assert_abs_diff_eq!(a, b, epsilon = 1e-9);
    }
}
