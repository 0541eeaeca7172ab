use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// WGS84 coordinate in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GeoPoint {
    #[schema(example = -6.2000)]
    pub lat: f64,
    #[schema(example = 106.8166)]
    pub lng: f64,
}

/// Circular admission zone around the office reference point.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
pub struct OfficeGeofence {
    pub center: GeoPoint,
    #[schema(example = 500.0)]
    pub radius_meters: f64,
}
