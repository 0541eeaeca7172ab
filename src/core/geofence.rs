//! Great-circle distance and geofence admission.

use crate::model::geo::{GeoPoint, OfficeGeofence};

const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Haversine distance in meters. Symmetric; NaN coordinates propagate, the
/// caller validates GPS reads upstream.
pub fn haversine_distance_meters(a: GeoPoint, b: GeoPoint) -> f64 {
    let phi1 = a.lat.to_radians();
    let phi2 = b.lat.to_radians();
    let d_phi = (b.lat - a.lat).to_radians();
    let d_lambda = (b.lng - a.lng).to_radians();

    let h = (d_phi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_M * c
}

/// Admission is inclusive at the boundary: exactly on the radius is inside.
pub fn is_within_geofence(point: GeoPoint, fence: &OfficeGeofence) -> bool {
    haversine_distance_meters(point, fence.center) <= fence.radius_meters
}

#[cfg(test)]
mod tests {
    use super::*;

    const OFFICE: GeoPoint = GeoPoint { lat: -6.2000, lng: 106.8166 };

    /// Point roughly `meters` due north of `origin`.
    fn offset_north(origin: GeoPoint, meters: f64) -> GeoPoint {
        GeoPoint { lat: origin.lat + (meters / EARTH_RADIUS_M).to_degrees(), lng: origin.lng }
    }

    #[test]
    fn distance_to_self_is_zero() {
        assert_eq!(haversine_distance_meters(OFFICE, OFFICE), 0.0);
        let p = GeoPoint { lat: 51.5007, lng: -0.1246 };
        assert_eq!(haversine_distance_meters(p, p), 0.0);
    }

    #[test]
    fn distance_is_symmetric() {
        let monas = GeoPoint { lat: -6.1754, lng: 106.8272 };
        let d1 = haversine_distance_meters(OFFICE, monas);
        let d2 = haversine_distance_meters(monas, OFFICE);
        assert_eq!(d1, d2);
        assert!(d1 > 0.0);
    }

    #[test]
    fn known_distance_jakarta_to_surabaya() {
        // ~663 km great-circle
        let jakarta = GeoPoint { lat: -6.2088, lng: 106.8456 };
        let surabaya = GeoPoint { lat: -7.2575, lng: 112.7521 };
        let d = haversine_distance_meters(jakarta, surabaya);
        assert!((650_000.0..680_000.0).contains(&d), "got {d}");
    }

    #[test]
    fn boundary_is_inclusive() {
        let point = offset_north(OFFICE, 500.0);
        let exact = haversine_distance_meters(point, OFFICE);
        // a point exactly on the radius is admitted
        let fence = OfficeGeofence { center: OFFICE, radius_meters: exact };
        assert!(is_within_geofence(point, &fence));
    }

    #[test]
    fn admits_inside_rejects_outside_500m_fence() {
        let fence = OfficeGeofence { center: OFFICE, radius_meters: 500.0 };
        assert!(is_within_geofence(offset_north(OFFICE, 499.0), &fence));
        assert!(!is_within_geofence(offset_north(OFFICE, 501.0), &fence));
    }

    #[test]
    fn nan_coordinates_are_never_admitted() {
        let fence = OfficeGeofence { center: OFFICE, radius_meters: 500.0 };
        let bad = GeoPoint { lat: f64::NAN, lng: 106.8166 };
        assert!(haversine_distance_meters(bad, OFFICE).is_nan());
        assert!(!is_within_geofence(bad, &fence));
    }
}
