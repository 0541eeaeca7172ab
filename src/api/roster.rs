use actix_web::{HttpResponse, Responder, web};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::{IntoParams, ToSchema};

use crate::core::roster::{ROTATION_SLOTS, slot_of};
use crate::model::shift::{Group, ShiftType};
use crate::state::AppState;

#[derive(Deserialize, IntoParams, ToSchema)]
pub struct RosterQuery {
    #[schema(example = 2024)]
    pub year: i32,
    /// Calendar month, 1-12
    #[schema(example = 6)]
    pub month: u32,
}

#[derive(Serialize, ToSchema)]
pub struct RosterRow {
    pub shift_type: ShiftType,
    /// Group letter per day of month, index 0 = day 1
    pub groups: Vec<Group>,
}

#[derive(Serialize, ToSchema)]
pub struct RosterMatrixResponse {
    pub year: i32,
    pub month: u32,
    pub days_in_month: u32,
    pub rows: Vec<RosterRow>,
}

#[derive(Deserialize, ToSchema)]
pub struct OverrideRequest {
    #[schema(example = 2024)]
    pub year: i32,
    /// Calendar month, 1-12
    #[schema(example = 6)]
    pub month: u32,
    #[schema(example = 15)]
    pub day: u32,
    /// Must be one of the rotating slot types (PAGI, MALAM, SORE, LIBUR)
    pub shift_type: ShiftType,
    pub group: Group,
}

fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    Some(next.signed_duration_since(first).num_days() as u32)
}

/// Month roster matrix
#[utoipa::path(
    get,
    path = "/api/v1/roster",
    params(RosterQuery),
    responses(
        (status = 200, description = "Resolved roster matrix for the month", body = RosterMatrixResponse),
        (status = 400, description = "Invalid year/month")
    ),
    tag = "Roster"
)]
pub async fn get_roster(
    state: web::Data<AppState>,
    query: web::Query<RosterQuery>,
) -> actix_web::Result<impl Responder> {
    let Some(days) = days_in_month(query.year, query.month) else {
        return Ok(HttpResponse::BadRequest().json(serde_json::json!({
            "message": "Invalid year/month"
        })));
    };

    let resolver = state.resolver();
    let month0 = query.month - 1;
    let rows = ROTATION_SLOTS
        .iter()
        .enumerate()
        .map(|(slot, shift_type)| RosterRow {
            shift_type: *shift_type,
            groups: (1..=days)
                .map(|day| resolver.resolve_group(query.year, month0, day, slot))
                .collect(),
        })
        .collect();

    Ok(HttpResponse::Ok().json(RosterMatrixResponse {
        year: query.year,
        month: query.month,
        days_in_month: days,
        rows,
    }))
}

/// Roster override upsert (admin)
#[utoipa::path(
    put,
    path = "/api/v1/roster/override",
    request_body = OverrideRequest,
    responses(
        (status = 200, description = "Override stored", body = Object, example = json!({
            "message": "Roster override saved"
        })),
        (status = 400, description = "Invalid day or non-rotating shift type")
    ),
    tag = "Roster"
)]
pub async fn set_override(
    state: web::Data<AppState>,
    payload: web::Json<OverrideRequest>,
) -> actix_web::Result<impl Responder> {
    let Some(days) = days_in_month(payload.year, payload.month) else {
        return Ok(HttpResponse::BadRequest().json(serde_json::json!({
            "message": "Invalid year/month"
        })));
    };
    if payload.day < 1 || payload.day > days {
        return Ok(HttpResponse::BadRequest().json(serde_json::json!({
            "message": format!("Day must be within 1..={days}")
        })));
    }
    let Some(slot) = slot_of(payload.shift_type) else {
        return Ok(HttpResponse::BadRequest().json(serde_json::json!({
            "message": "Only rotating shift types (PAGI, MALAM, SORE, LIBUR) can be overridden"
        })));
    };

    state.resolver().set_override(payload.year, payload.month - 1, payload.day, slot, payload.group);
    info!(
        year = payload.year,
        month = payload.month,
        day = payload.day,
        shift = %payload.shift_type,
        group = %payload.group,
        "roster override saved"
    );

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Roster override saved"
    })))
}
