use crate::api::attendance::{
    AttendanceListResponse, AttendanceQuery, CheckInRequest, CheckOutRequest,
};
use crate::api::employee::{CreateEmployee, EmployeeListResponse};
use crate::api::leave::{CreateLeave, LeaveFilter, LeaveListResponse};
use crate::api::roster::{OverrideRequest, RosterMatrixResponse, RosterQuery, RosterRow};
use crate::api::settings::UpdateGeofence;
use crate::api::shift::ShiftResponse;
use crate::model::attendance::{AttendanceRecord, AttendanceStatus};
use crate::model::employee::Employee;
use crate::model::geo::{GeoPoint, OfficeGeofence};
use crate::model::leave::{LeaveCategory, LeaveKind, LeaveRequest, RequestStatus};
use crate::model::shift::{Group, ShiftGroup, ShiftType};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Presensi API",
        version = "1.0.0",
        description = r#"
## Presensi — Attendance & Workforce Scheduling

This API powers geolocation-gated employee attendance over a rotating
four-group shift roster.

### 🔹 Key Features
- **Attendance**
  - Geofenced check-in/check-out with automatic lateness classification
- **Roster**
  - Deterministic PAGI/MALAM/SORE/LIBUR group rotation with admin overrides
- **Leave Management**
  - Apply for leave, approve/reject requests, company-policy entitlements
- **Employee Directory**
  - Cohort placement feeding the roster resolution

### 📦 Response Format
- JSON-based RESTful responses
- Pagination supported for list endpoints

---
Built with **Rust**, **Actix Web**, and **Utoipa**.
"#,
    ),
    paths(
        crate::api::attendance::check_in,
        crate::api::attendance::check_out,
        crate::api::attendance::list_attendance,

        crate::api::roster::get_roster,
        crate::api::roster::set_override,

        crate::api::shift::list_shifts,

        crate::api::leave::leave_list,
        crate::api::leave::get_leave,
        crate::api::leave::create_leave,
        crate::api::leave::approve_leave,
        crate::api::leave::reject_leave,
        crate::api::leave::leave_categories,

        crate::api::employee::create_employee,
        crate::api::employee::get_employee,
        crate::api::employee::list_employees,
        crate::api::employee::delete_employee,

        crate::api::settings::get_geofence,
        crate::api::settings::update_geofence
    ),
    components(
        schemas(
            CheckInRequest,
            CheckOutRequest,
            AttendanceQuery,
            AttendanceListResponse,
            AttendanceRecord,
            AttendanceStatus,
            RosterQuery,
            RosterRow,
            RosterMatrixResponse,
            OverrideRequest,
            ShiftResponse,
            ShiftType,
            ShiftGroup,
            Group,
            CreateLeave,
            LeaveFilter,
            LeaveListResponse,
            LeaveRequest,
            LeaveCategory,
            LeaveKind,
            RequestStatus,
            CreateEmployee,
            EmployeeListResponse,
            Employee,
            UpdateGeofence,
            GeoPoint,
            OfficeGeofence
        )
    ),
    tags(
        (name = "Attendance", description = "Geofenced check-in/check-out APIs"),
        (name = "Roster", description = "Shift rotation and override APIs"),
        (name = "Shift", description = "Shift catalog APIs"),
        (name = "Leave", description = "Leave management APIs"),
        (name = "Employee", description = "Employee directory APIs"),
        (name = "Settings", description = "Office settings APIs"),
    )
)]
pub struct ApiDoc;
