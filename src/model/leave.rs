use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum RequestStatus {
    Pending,
    Approved,
    Rejected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum LeaveKind {
    Annual,
    Sick,
    BusinessTrip,
    /// Company-policy special leave; requires a category from the accrual
    /// rules table.
    Special,
}

/// Static company-policy leave category.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LeaveCategory {
    #[schema(example = "a")]
    pub id: &'static str,
    #[schema(example = "Karyawan menikah")]
    pub label: &'static str,
    #[schema(example = 3)]
    pub entitled_days: u32,
}

/// Employee-created leave request. Status is mutated only by an
/// admin/manager decision and is terminal once APPROVED or REJECTED.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LeaveRequest {
    pub id: String,
    pub employee_id: String,
    pub kind: LeaveKind,
    /// Accrual-rules category id, present only for SPECIAL requests.
    pub category_id: Option<String>,
    #[schema(value_type = String, format = "date")]
    pub start_date: NaiveDate,
    #[schema(value_type = String, format = "date")]
    pub end_date: NaiveDate,
    pub reason: String,
    pub status: RequestStatus,
    #[schema(value_type = String, format = "date-time")]
    pub created_at: DateTime<Utc>,
}
