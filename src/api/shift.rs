use actix_web::{HttpResponse, Responder};
use chrono::NaiveTime;
use serde::Serialize;
use utoipa::ToSchema;

use crate::core::catalog;
use crate::model::shift::ShiftType;

#[derive(Serialize, ToSchema)]
pub struct ShiftResponse {
    pub shift_type: ShiftType,
    #[schema(example = "Shift Malam")]
    pub name: String,
    #[schema(example = "23:30", value_type = String)]
    pub start_time: NaiveTime,
    #[schema(example = "07:30", value_type = String)]
    pub end_time: NaiveTime,
    pub crosses_midnight: bool,
}

/// Shift catalog listing
#[utoipa::path(
    get,
    path = "/api/v1/shifts",
    responses(
        (status = 200, description = "The six canonical shift definitions", body = [ShiftResponse])
    ),
    tag = "Shift"
)]
pub async fn list_shifts() -> impl Responder {
    let shifts: Vec<ShiftResponse> = catalog::all()
        .iter()
        .map(|d| ShiftResponse {
            shift_type: d.shift_type,
            name: d.name.clone(),
            start_time: d.start_time,
            end_time: d.end_time,
            crosses_midnight: d.crosses_midnight(),
        })
        .collect();
    HttpResponse::Ok().json(shifts)
}
