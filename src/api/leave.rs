use actix_web::{HttpResponse, Responder, web};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::core::leave_rules;
use crate::model::leave::{LeaveCategory, LeaveKind, LeaveRequest, RequestStatus};
use crate::state::AppState;

#[derive(Deserialize, ToSchema)]
pub struct CreateLeave {
    pub employee_id: String,
    #[schema(example = "ANNUAL")]
    pub kind: LeaveKind,
    /// Required for SPECIAL requests; one of the accrual-rule category ids.
    #[schema(example = "a")]
    pub category_id: Option<String>,
    #[schema(example = "2024-10-25", format = "date", value_type = String)]
    pub start_date: chrono::NaiveDate,
    #[schema(example = "2024-10-27", format = "date", value_type = String)]
    pub end_date: chrono::NaiveDate,
    #[schema(example = "Acara Keluarga")]
    pub reason: String,
}

#[derive(Deserialize, IntoParams, ToSchema)]
pub struct LeaveFilter {
    /// Filter by employee ID
    pub employee_id: Option<String>,
    /// Filter by leave status
    pub status: Option<RequestStatus>,
    /// Pagination page number (start with 1)
    pub page: Option<u64>,
    /// Pagination per page number
    pub per_page: Option<u64>,
}

#[derive(Serialize, ToSchema)]
pub struct LeaveListResponse {
    pub data: Vec<LeaveRequest>,
    pub page: u32,
    pub per_page: u32,
    pub total: i64,
}

/* =========================
Create leave request
========================= */
#[utoipa::path(
    post,
    path = "/api/v1/leave",
    request_body(
        content = CreateLeave,
        description = "Leave request payload",
        content_type = "application/json"
    ),
    responses(
        (status = 200, description = "Leave request submitted successfully", body = Object, example = json!({
            "message": "Leave request submitted",
            "status": "PENDING"
        })),
        (status = 400, description = "Bad request"),
        (status = 404, description = "Unknown employee")
    ),
    tag = "Leave"
)]
pub async fn create_leave(
    state: web::Data<AppState>,
    payload: web::Json<CreateLeave>,
) -> actix_web::Result<impl Responder> {
    let payload = payload.into_inner();

    if payload.start_date > payload.end_date {
        return Ok(HttpResponse::BadRequest().json(serde_json::json!({
            "message": "start_date cannot be after end_date"
        })));
    }

    if state.employees.get(&payload.employee_id).is_none() {
        return Ok(HttpResponse::NotFound().json(serde_json::json!({
            "message": format!("Unknown employee {}", payload.employee_id)
        })));
    }

    let requested_days = (payload.end_date - payload.start_date).num_days() + 1;

    // SPECIAL leave is bound to a policy category and its day count
    let entitled_days = if payload.kind == LeaveKind::Special {
        let Some(entitled) =
            payload.category_id.as_deref().and_then(leave_rules::entitlement_for)
        else {
            return Ok(HttpResponse::BadRequest().json(serde_json::json!({
                "message": "SPECIAL leave requires a valid category_id (a-g)"
            })));
        };
        if requested_days > entitled as i64 {
            return Ok(HttpResponse::BadRequest().json(serde_json::json!({
                "message": format!(
                    "Requested {requested_days} days exceeds the {entitled}-day entitlement for this category"
                )
            })));
        }
        Some(entitled)
    } else {
        None
    };

    let request = LeaveRequest {
        id: Uuid::new_v4().to_string(),
        employee_id: payload.employee_id,
        kind: payload.kind,
        category_id: payload.category_id,
        start_date: payload.start_date,
        end_date: payload.end_date,
        reason: payload.reason,
        status: RequestStatus::Pending,
        created_at: Utc::now(),
    };
    state.leaves.insert(request.clone());
    info!(leave_id = %request.id, employee_id = %request.employee_id, "leave request submitted");

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Leave request submitted",
        "status": RequestStatus::Pending,
        "requested_days": requested_days,
        "entitled_days": entitled_days,
        "id": request.id,
    })))
}

fn decide(state: &AppState, leave_id: &str, status: RequestStatus) -> HttpResponse {
    let Some(mut request) = state.leaves.get(leave_id) else {
        return HttpResponse::BadRequest().json(serde_json::json!({
            "message": "Leave request not found or already processed"
        }));
    };
    // terminal once decided
    if request.status != RequestStatus::Pending {
        return HttpResponse::BadRequest().json(serde_json::json!({
            "message": "Leave request not found or already processed"
        }));
    }
    request.status = status;
    state.leaves.update(request);
    info!(leave_id, status = %status, "leave request decided");
    HttpResponse::Ok().json(serde_json::json!({
        "message": match status {
            RequestStatus::Approved => "Leave approved",
            _ => "Leave rejected",
        }
    }))
}

/* =========================
Approve leave (admin/manager)
========================= */
#[utoipa::path(
    put,
    path = "/api/v1/leave/{leave_id}/approve",
    params(
        ("leave_id" = String, Path, description = "ID of the leave request to approve")
    ),
    responses(
        (status = 200, description = "Leave approved successfully", body = Object, example = json!({
            "message": "Leave approved"
        })),
        (status = 400, description = "Leave request not found or already processed")
    ),
    tag = "Leave"
)]
pub async fn approve_leave(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> actix_web::Result<impl Responder> {
    Ok(decide(&state, &path.into_inner(), RequestStatus::Approved))
}

/* =========================
Reject leave (admin/manager)
========================= */
#[utoipa::path(
    put,
    path = "/api/v1/leave/{leave_id}/reject",
    params(
        ("leave_id" = String, Path, description = "ID of the leave request to reject")
    ),
    responses(
        (status = 200, description = "Leave rejected successfully", body = Object, example = json!({
            "message": "Leave rejected"
        })),
        (status = 400, description = "Leave request not found or already processed")
    ),
    tag = "Leave"
)]
pub async fn reject_leave(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> actix_web::Result<impl Responder> {
    Ok(decide(&state, &path.into_inner(), RequestStatus::Rejected))
}

/// for getting a leave application details endpoint
#[utoipa::path(
    get,
    path = "/api/v1/leave/{leave_id}",
    params(
        ("leave_id" = String, Path, description = "ID of the leave request to fetch")
    ),
    responses(
        (status = 200, description = "Leave request found", body = LeaveRequest),
        (status = 404, description = "Leave request not found", body = Object, example = json!({
            "message": "Leave request not found"
        }))
    ),
    tag = "Leave"
)]
pub async fn get_leave(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> actix_web::Result<impl Responder> {
    match state.leaves.get(&path.into_inner()) {
        Some(request) => Ok(HttpResponse::Ok().json(request)),
        None => Ok(HttpResponse::NotFound().json(serde_json::json!({
            "message": "Leave request not found"
        }))),
    }
}

/// for getting leave applications endpoint
#[utoipa::path(
    get,
    path = "/api/v1/leave",
    params(LeaveFilter),
    responses(
        (status = 200, description = "Paginated leave list", body = LeaveListResponse)
    ),
    tag = "Leave"
)]
pub async fn leave_list(
    state: web::Data<AppState>,
    query: web::Query<LeaveFilter>,
) -> actix_web::Result<impl Responder> {
    let per_page = query.per_page.unwrap_or(10).min(100);
    let page = query.page.unwrap_or(1).max(1);

    let requests = state.leaves.list(query.employee_id.as_deref(), query.status);
    let total = requests.len() as i64;
    let data: Vec<LeaveRequest> = requests
        .into_iter()
        .skip(((page - 1) * per_page) as usize)
        .take(per_page as usize)
        .collect();

    Ok(HttpResponse::Ok().json(LeaveListResponse {
        data,
        page: page as u32,
        per_page: per_page as u32,
        total,
    }))
}

/// Leave accrual categories
#[utoipa::path(
    get,
    path = "/api/v1/leave/categories",
    responses(
        (status = 200, description = "Company-policy leave categories", body = [LeaveCategory])
    ),
    tag = "Leave"
)]
pub async fn leave_categories() -> impl Responder {
    HttpResponse::Ok().json(leave_rules::all())
}
