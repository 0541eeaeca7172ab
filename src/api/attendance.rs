use actix_web::{HttpResponse, Responder, web};
use chrono::{Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::core::error::AttendanceError;
use crate::model::attendance::AttendanceRecord;
use crate::model::geo::GeoPoint;
use crate::state::AppState;

#[derive(Deserialize, ToSchema)]
pub struct CheckInRequest {
    #[schema(example = "f7c3e9a0-0000-0000-0000-000000000000")]
    pub employee_id: String,
    #[schema(example = -6.2001)]
    pub lat: f64,
    #[schema(example = 106.8170)]
    pub lng: f64,
    /// Wall-clock event time; defaults to the server's local time.
    #[schema(example = "2024-06-03T08:01:00", value_type = Option<String>, format = "date-time")]
    pub timestamp: Option<NaiveDateTime>,
    pub selfie_ref: Option<String>,
}

#[derive(Deserialize, ToSchema)]
pub struct CheckOutRequest {
    pub employee_id: String,
    pub lat: f64,
    pub lng: f64,
    #[schema(value_type = Option<String>, format = "date-time")]
    pub timestamp: Option<NaiveDateTime>,
}

#[derive(Deserialize, IntoParams, ToSchema)]
pub struct AttendanceQuery {
    /// Filter by employee ID
    pub employee_id: Option<String>,
    /// Filter by calendar date
    #[param(value_type = Option<String>)]
    #[schema(value_type = Option<String>, format = "date")]
    pub date: Option<NaiveDate>,
    /// Pagination page number (start with 1)
    pub page: Option<u64>,
    /// Pagination per page number
    pub per_page: Option<u64>,
}

#[derive(Serialize, ToSchema)]
pub struct AttendanceListResponse {
    pub data: Vec<AttendanceRecord>,
    pub page: u32,
    pub per_page: u32,
    pub total: i64,
}

/// Map engine rejections to HTTP responses. The out-of-fence body carries the
/// measured distance and configured radius for the kiosk message.
fn reject(err: AttendanceError) -> HttpResponse {
    match err {
        AttendanceError::OutsideGeofence { distance_meters, radius_meters } => {
            HttpResponse::BadRequest().json(serde_json::json!({
                "message": format!(
                    "You are {:.0}m from the office center (max radius {:.0}m)",
                    distance_meters, radius_meters
                ),
                "distance_meters": distance_meters,
                "radius_meters": radius_meters,
            }))
        }
        AttendanceError::DuplicateCheckIn => HttpResponse::BadRequest().json(serde_json::json!({
            "message": "Already checked in today"
        })),
        AttendanceError::NoOpenRecord => HttpResponse::BadRequest().json(serde_json::json!({
            "message": "No active check-in found for today"
        })),
        AttendanceError::UnknownEmployee(id) => HttpResponse::NotFound().json(serde_json::json!({
            "message": format!("Unknown employee {id}")
        })),
        AttendanceError::UnresolvableShift { .. } => {
            HttpResponse::BadRequest().json(serde_json::json!({
                "message": "No shift assignment for this day"
            }))
        }
    }
}

/// Check-in endpoint
#[utoipa::path(
    post,
    path = "/api/v1/attendance",
    request_body = CheckInRequest,
    responses(
        (status = 200, description = "Checked in successfully", body = AttendanceRecord),
        (status = 400, description = "Outside geofence or already checked in today", body = Object, example = json!({
            "message": "Already checked in today"
        })),
        (status = 404, description = "Unknown employee"),
        (status = 429, description = "Rate limit exceeded")
    ),
    tag = "Attendance"
)]
pub async fn check_in(
    state: web::Data<AppState>,
    payload: web::Json<CheckInRequest>,
) -> actix_web::Result<impl Responder> {
    let payload = payload.into_inner();
    let timestamp = payload.timestamp.unwrap_or_else(|| Local::now().naive_local());
    let location = GeoPoint { lat: payload.lat, lng: payload.lng };

    match state.evaluator().evaluate_check_in(
        &payload.employee_id,
        timestamp,
        location,
        payload.selfie_ref,
    ) {
        Ok(record) => Ok(HttpResponse::Ok().json(serde_json::json!({
            "message": "Checked in successfully",
            "record": record
        }))),
        Err(e) => Ok(reject(e)),
    }
}

/// Check-out endpoint
#[utoipa::path(
    put,
    path = "/api/v1/attendance",
    request_body = CheckOutRequest,
    responses(
        (status = 200, description = "Checked out successfully", body = AttendanceRecord),
        (status = 400, description = "Outside geofence or no active check-in", body = Object, example = json!({
            "message": "No active check-in found for today"
        })),
        (status = 404, description = "Unknown employee"),
        (status = 429, description = "Rate limit exceeded")
    ),
    tag = "Attendance"
)]
pub async fn check_out(
    state: web::Data<AppState>,
    payload: web::Json<CheckOutRequest>,
) -> actix_web::Result<impl Responder> {
    let payload = payload.into_inner();
    let timestamp = payload.timestamp.unwrap_or_else(|| Local::now().naive_local());
    let location = GeoPoint { lat: payload.lat, lng: payload.lng };

    match state.evaluator().evaluate_check_out(&payload.employee_id, timestamp, location) {
        Ok(record) => Ok(HttpResponse::Ok().json(serde_json::json!({
            "message": "Checked out successfully",
            "record": record
        }))),
        Err(e) => Ok(reject(e)),
    }
}

/// Attendance record listing
#[utoipa::path(
    get,
    path = "/api/v1/attendance",
    params(AttendanceQuery),
    responses(
        (status = 200, description = "Paginated attendance records", body = AttendanceListResponse)
    ),
    tag = "Attendance"
)]
pub async fn list_attendance(
    state: web::Data<AppState>,
    query: web::Query<AttendanceQuery>,
) -> actix_web::Result<impl Responder> {
    let per_page = query.per_page.unwrap_or(10).min(100);
    let page = query.page.unwrap_or(1).max(1);

    let records = state.attendance.list(query.employee_id.as_deref(), query.date);
    let total = records.len() as i64;
    let data: Vec<AttendanceRecord> = records
        .into_iter()
        .skip(((page - 1) * per_page) as usize)
        .take(per_page as usize)
        .collect();

    Ok(HttpResponse::Ok().json(AttendanceListResponse {
        data,
        page: page as u32,
        per_page: per_page as u32,
        total,
    }))
}
