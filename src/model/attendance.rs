use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::ToSchema;

use super::geo::GeoPoint;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum AttendanceStatus {
    Present,
    Late,
    Absent,
    Leave,
    Sick,
    BusinessTrip,
}

/// Daily attendance record. Created on the first admitted check-in, closed
/// when `check_out` is set, immutable once both sides exist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AttendanceRecord {
    pub id: String,
    pub employee_id: String,
    #[schema(value_type = String, format = "date")]
    pub date: NaiveDate,
    #[schema(value_type = Option<String>)]
    pub check_in: Option<NaiveTime>,
    #[schema(value_type = Option<String>)]
    pub check_out: Option<NaiveTime>,
    pub status: AttendanceStatus,
    pub late_minutes: u32,
    pub location: GeoPoint,
    pub selfie_ref: Option<String>,
    /// Set when the employee checked in on a day the roster mapped to LIBUR
    /// (or to no slot of their cohort at all).
    #[serde(default)]
    pub rest_day: bool,
}

impl AttendanceRecord {
    /// Open means checked in but not yet checked out.
    pub fn is_open(&self) -> bool {
        self.check_in.is_some() && self.check_out.is_none()
    }
}
