//! Great-circle distance.

use bloodshare_entity::hospital::GeoPoint;

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance between two points, in kilometres.
pub fn haversine_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let dlat = (b.lat - a.lat).to_radians();
    let dlon = (b.lon - a.lon).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * h.sqrt().asin()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_point_is_zero() {
        let p = GeoPoint { lat: 18.52, lon: 73.85 };
        assert!(haversine_km(p, p).abs() < 1e-9);
    }

    #[test]
    fn test_mumbai_to_pune() {
        let mumbai = GeoPoint { lat: 19.0760, lon: 72.8777 };
        let pune = GeoPoint { lat: 18.5204, lon: 73.8567 };
        let d = haversine_km(mumbai, pune);
        assert!((115.0..125.0).contains(&d), "got {d}");
    }

    #[test]
    fn test_one_degree_of_latitude() {
        let a = GeoPoint { lat: 0.0, lon: 0.0 };
        let b = GeoPoint { lat: 1.0, lon: 0.0 };
        let d = haversine_km(a, b);
        assert!((d - 111.19).abs() < 0.01, "got {d}");
    }
}
