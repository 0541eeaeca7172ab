use actix_web::{HttpResponse, Responder, web};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::model::employee::Employee;
use crate::model::shift::ShiftGroup;
use crate::state::AppState;

#[derive(Deserialize, Serialize, ToSchema)]
pub struct CreateEmployee {
    #[schema(example = "STF090", value_type = String)]
    pub nid: String,
    #[schema(example = "Budi Santoso", value_type = String)]
    pub name: String,
    #[schema(example = "budi@presensi.com", format = "email", value_type = String)]
    pub email: String,
    #[schema(example = "Sales")]
    pub division: String,
    #[schema(example = "Sales Officer")]
    pub position: String,
    #[schema(example = "SHIFT_B")]
    pub shift_group: ShiftGroup,
    #[schema(example = "2024-01-01", format = "date", value_type = String)]
    pub join_date: NaiveDate,
}

#[derive(Serialize, ToSchema)]
pub struct EmployeeListResponse {
    pub data: Vec<Employee>,
    pub total: i64,
}

/// Create Employee
#[utoipa::path(
    post,
    path = "/api/v1/employee",
    request_body = CreateEmployee,
    responses(
        (status = 200, description = "Employee created successfully", body = Employee)
    ),
    tag = "Employee"
)]
pub async fn create_employee(
    state: web::Data<AppState>,
    payload: web::Json<CreateEmployee>,
) -> impl Responder {
    let payload = payload.into_inner();
    let employee = Employee {
        id: Uuid::new_v4().to_string(),
        nid: payload.nid,
        name: payload.name,
        email: payload.email,
        division: payload.division,
        position: payload.position,
        shift_group: payload.shift_group,
        join_date: payload.join_date,
    };
    state.employees.insert(employee.clone());
    info!(employee_id = %employee.id, nid = %employee.nid, "employee created");
    HttpResponse::Ok().json(employee)
}

/// List Employees
#[utoipa::path(
    get,
    path = "/api/v1/employee",
    responses(
        (status = 200, description = "Employee directory", body = EmployeeListResponse)
    ),
    tag = "Employee"
)]
pub async fn list_employees(state: web::Data<AppState>) -> impl Responder {
    let data = state.employees.list();
    let total = data.len() as i64;
    HttpResponse::Ok().json(EmployeeListResponse { data, total })
}

/// Get Employee by id
#[utoipa::path(
    get,
    path = "/api/v1/employee/{id}",
    params(
        ("id" = String, Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Employee found", body = Employee),
        (status = 404, description = "Employee not found")
    ),
    tag = "Employee"
)]
pub async fn get_employee(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    match state.employees.get(&path.into_inner()) {
        Some(employee) => HttpResponse::Ok().json(employee),
        None => HttpResponse::NotFound().json(serde_json::json!({
            "message": "Employee not found"
        })),
    }
}

/// Delete Employee
#[utoipa::path(
    delete,
    path = "/api/v1/employee/{id}",
    params(
        ("id" = String, Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Employee deleted"),
        (status = 404, description = "Employee not found")
    ),
    tag = "Employee"
)]
pub async fn delete_employee(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let id = path.into_inner();
    if state.employees.remove(&id) {
        info!(employee_id = %id, "employee deleted");
        HttpResponse::Ok().json(serde_json::json!({
            "message": "Employee deleted"
        }))
    } else {
        HttpResponse::NotFound().json(serde_json::json!({
            "message": "Employee not found"
        }))
    }
}
