use dotenvy::dotenv;
use std::env;

use crate::model::geo::{GeoPoint, OfficeGeofence};

#[derive(Clone)]
pub struct Config {
    pub server_addr: String,
    pub api_prefix: String,

    // Default office geofence, seeds the settings store
    pub office_lat: f64,
    pub office_lng: f64,
    pub office_radius_meters: f64,

    // Rate limiting
    pub rate_attendance_per_min: u32,

    /// Seed the demo employee directory on startup
    pub seed_demo_data: bool,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        Self {
            server_addr: env::var("SERVER_ADDR").expect("SERVER_ADDR must be set"),
            api_prefix: env::var("API_PREFIX").unwrap_or_else(|_| "/api/v1".to_string()),

            office_lat: env::var("OFFICE_LAT")
                .unwrap_or_else(|_| "-6.2000".to_string())
                .parse()
                .unwrap(),
            office_lng: env::var("OFFICE_LNG")
                .unwrap_or_else(|_| "106.8166".to_string())
                .parse()
                .unwrap(),
            office_radius_meters: env::var("OFFICE_RADIUS_METERS")
                .unwrap_or_else(|_| "500".to_string())
                .parse()
                .unwrap(),

            rate_attendance_per_min: env::var("RATE_ATTENDANCE_PER_MIN")
                .unwrap_or_else(|_| "60".to_string())
                .parse()
                .unwrap(),

            seed_demo_data: env::var("SEED_DEMO_DATA")
                .unwrap_or_else(|_| "false".to_string())
                .parse()
                .unwrap(),
        }
    }

    pub fn office_geofence(&self) -> OfficeGeofence {
        OfficeGeofence {
            center: GeoPoint { lat: self.office_lat, lng: self.office_lng },
            radius_meters: self.office_radius_meters,
        }
    }
}
