use actix_web::{HttpResponse, Responder, web};
use serde::Deserialize;
use tracing::info;
use utoipa::ToSchema;

use crate::model::geo::{GeoPoint, OfficeGeofence};
use crate::state::AppState;

#[derive(Deserialize, ToSchema)]
pub struct UpdateGeofence {
    #[schema(example = -6.2000)]
    pub lat: f64,
    #[schema(example = 106.8166)]
    pub lng: f64,
    #[schema(example = 500.0)]
    pub radius_meters: f64,
}

/// Office geofence settings
#[utoipa::path(
    get,
    path = "/api/v1/settings/geofence",
    responses(
        (status = 200, description = "Current office geofence", body = OfficeGeofence)
    ),
    tag = "Settings"
)]
pub async fn get_geofence(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.settings.geofence())
}

/// Update office geofence (admin)
#[utoipa::path(
    put,
    path = "/api/v1/settings/geofence",
    request_body = UpdateGeofence,
    responses(
        (status = 200, description = "Geofence updated", body = OfficeGeofence),
        (status = 400, description = "Invalid coordinates or radius")
    ),
    tag = "Settings"
)]
pub async fn update_geofence(
    state: web::Data<AppState>,
    payload: web::Json<UpdateGeofence>,
) -> impl Responder {
    let valid = payload.lat.is_finite()
        && payload.lng.is_finite()
        && (-90.0..=90.0).contains(&payload.lat)
        && (-180.0..=180.0).contains(&payload.lng)
        && payload.radius_meters.is_finite()
        && payload.radius_meters > 0.0;
    if !valid {
        return HttpResponse::BadRequest().json(serde_json::json!({
            "message": "Invalid coordinates or radius"
        }));
    }

    let fence = OfficeGeofence {
        center: GeoPoint { lat: payload.lat, lng: payload.lng },
        radius_meters: payload.radius_meters,
    };
    state.settings.set_geofence(fence);
    info!(lat = payload.lat, lng = payload.lng, radius = payload.radius_meters, "geofence updated");
    HttpResponse::Ok().json(fence)
}
