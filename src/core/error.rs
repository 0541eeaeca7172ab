use chrono::NaiveDate;
use thiserror::Error;

/// Typed attendance failures. All are recoverable and surfaced to the caller
/// for user-facing messaging; the engine never retries.
#[derive(Debug, Error, PartialEq)]
pub enum AttendanceError {
    /// The reported coordinate is outside the office fence. Carries the
    /// measured distance and the configured radius so the caller can show
    /// the exact overage.
    #[error("outside geofence: {distance_meters:.0}m from center (radius {radius_meters:.0}m)")]
    OutsideGeofence { distance_meters: f64, radius_meters: f64 },

    /// A record for this employee and day already exists. Idempotent
    /// rejection, nothing is mutated.
    #[error("already checked in today")]
    DuplicateCheckIn,

    /// Check-out without an open check-in.
    #[error("no open attendance record to check out")]
    NoOpenRecord,

    /// No slot of the day's roster maps to the employee's cohort.
    #[error("no shift assignment for employee {employee_id} on {date}")]
    UnresolvableShift { employee_id: String, date: NaiveDate },

    #[error("unknown employee {0}")]
    UnknownEmployee(String),
}
