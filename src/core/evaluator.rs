//! Attendance state machine: NO_RECORD -> CHECKED_IN -> CLOSED.
//!
//! Both transitions are geofence-gated. Classification happens once at
//! check-in and is never revised by the check-out.

use std::sync::Arc;

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use tracing::{info, warn};
use uuid::Uuid;

use crate::core::catalog;
use crate::core::error::AttendanceError;
use crate::core::geofence::haversine_distance_meters;
use crate::core::roster::{ROTATION_SLOTS, RosterResolver};
use crate::model::attendance::{AttendanceRecord, AttendanceStatus};
use crate::model::employee::Employee;
use crate::model::geo::GeoPoint;
use crate::model::shift::{ShiftAssignment, ShiftType};
use crate::store::{AttendanceStore, EmployeeStore, SettingsStore};

pub struct AttendanceEvaluator {
    resolver: RosterResolver,
    employees: Arc<dyn EmployeeStore>,
    attendance: Arc<dyn AttendanceStore>,
    settings: Arc<dyn SettingsStore>,
}

impl AttendanceEvaluator {
    pub fn new(
        resolver: RosterResolver,
        employees: Arc<dyn EmployeeStore>,
        attendance: Arc<dyn AttendanceStore>,
        settings: Arc<dyn SettingsStore>,
    ) -> Self {
        Self { resolver, employees, attendance, settings }
    }

    /// Geofence gate shared by both transitions. Inclusive boundary.
    fn admit(&self, location: GeoPoint) -> Result<(), AttendanceError> {
        let fence = self.settings.geofence();
        let distance_meters = haversine_distance_meters(location, fence.center);
        if distance_meters <= fence.radius_meters {
            Ok(())
        } else {
            Err(AttendanceError::OutsideGeofence {
                distance_meters,
                radius_meters: fence.radius_meters,
            })
        }
    }

    /// Which shift the employee's cohort works on `date`. Fixed cohorts map
    /// straight to their definition; rotating cohorts are matched against the
    /// day's resolved slots. Overrides can leave a cohort with no slot at
    /// all, which is the unresolvable case.
    pub fn assignment_for(
        &self,
        employee: &Employee,
        date: NaiveDate,
    ) -> Result<ShiftAssignment, AttendanceError> {
        if let Some(shift_type) = employee.shift_group.fixed_shift() {
            return Ok(ShiftAssignment { date, shift_type, group: None });
        }
        let group = employee.shift_group.rotating_group().ok_or_else(|| {
            AttendanceError::UnresolvableShift { employee_id: employee.id.clone(), date }
        })?;
        for (slot, shift_type) in ROTATION_SLOTS.iter().enumerate() {
            if self.resolver.resolve_group(date.year(), date.month0(), date.day(), slot) == group {
                return Ok(ShiftAssignment { date, shift_type: *shift_type, group: Some(group) });
            }
        }
        Err(AttendanceError::UnresolvableShift { employee_id: employee.id.clone(), date })
    }

    /// NO_RECORD -> CHECKED_IN. Rejects out-of-fence and duplicate events,
    /// classifies lateness against the assigned shift's start anchored to the
    /// check-in's own calendar date (so MALAM 23:30 compares against today's
    /// 23:30, not tomorrow's).
    pub fn evaluate_check_in(
        &self,
        employee_id: &str,
        timestamp: NaiveDateTime,
        location: GeoPoint,
        selfie_ref: Option<String>,
    ) -> Result<AttendanceRecord, AttendanceError> {
        self.admit(location)?;

        let employee = self
            .employees
            .get(employee_id)
            .ok_or_else(|| AttendanceError::UnknownEmployee(employee_id.to_string()))?;

        let date = timestamp.date();
        if self.attendance.find_by_employee_and_date(employee_id, date).is_some() {
            return Err(AttendanceError::DuplicateCheckIn);
        }
        if let Some(stale) = self.attendance.find_open(employee_id) {
            warn!(employee_id, stale_date = %stale.date, "previous attendance record left open");
        }

        let (status, late_minutes, rest_day) = match self.assignment_for(&employee, date) {
            Ok(assignment) if assignment.shift_type != ShiftType::LIBUR => {
                match catalog::lookup(assignment.shift_type) {
                    Some(def) => {
                        let scheduled_start = date.and_time(def.start_time);
                        let late = if timestamp > scheduled_start {
                            (timestamp - scheduled_start).num_minutes() as u32
                        } else {
                            0
                        };
                        if late > 0 {
                            (AttendanceStatus::Late, late, false)
                        } else {
                            (AttendanceStatus::Present, 0, false)
                        }
                    }
                    None => {
                        warn!(employee_id, %date, shift = %assignment.shift_type,
                            "no shift definition, flagging check-in");
                        (AttendanceStatus::Present, 0, true)
                    }
                }
            }
            Ok(_) | Err(AttendanceError::UnresolvableShift { .. }) => {
                // Rest day or roster hole: admit the event but flag it
                // instead of treating it as ordinary presence.
                warn!(employee_id, %date, "check-in on a rest day, flagging record");
                (AttendanceStatus::Present, 0, true)
            }
            Err(e) => return Err(e),
        };

        let record = AttendanceRecord {
            id: Uuid::new_v4().to_string(),
            employee_id: employee.id.clone(),
            date,
            check_in: Some(timestamp.time()),
            check_out: None,
            status,
            late_minutes,
            location,
            selfie_ref,
            rest_day,
        };
        self.attendance.insert(record.clone());
        info!(employee_id, %date, status = %record.status, late_minutes, "check-in recorded");
        Ok(record)
    }

    /// CHECKED_IN -> CLOSED. Re-validates the fence, closes the one open
    /// record (MALAM closes after midnight through the same path), and keeps
    /// the check-in classification untouched.
    pub fn evaluate_check_out(
        &self,
        employee_id: &str,
        timestamp: NaiveDateTime,
        location: GeoPoint,
    ) -> Result<AttendanceRecord, AttendanceError> {
        self.admit(location)?;

        if self.employees.get(employee_id).is_none() {
            return Err(AttendanceError::UnknownEmployee(employee_id.to_string()));
        }

        let mut record =
            self.attendance.find_open(employee_id).ok_or(AttendanceError::NoOpenRecord)?;
        record.check_out = Some(timestamp.time());
        self.attendance.update(record.clone());
        info!(employee_id, date = %record.date, "check-out recorded");
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::geo::OfficeGeofence;
    use crate::model::shift::ShiftGroup;
    use crate::store::MemoryStore;
    use chrono::NaiveTime;

    const OFFICE: GeoPoint = GeoPoint { lat: -6.2000, lng: 106.8166 };

    fn setup(shift_group: ShiftGroup) -> (Arc<MemoryStore>, AttendanceEvaluator) {
        let store = Arc::new(MemoryStore::new(OfficeGeofence {
            center: OFFICE,
            radius_meters: 500.0,
        }));
        let evaluator = AttendanceEvaluator::new(
            RosterResolver::new(store.clone()),
            store.clone(),
            store.clone(),
            store.clone(),
        );
        let employees: Arc<dyn EmployeeStore> = store.clone();
        employees.insert(Employee {
            id: "emp-1".to_string(),
            nid: "STF089".to_string(),
            name: "Siti Karyawan".to_string(),
            email: "siti@presensi.com".to_string(),
            division: "Marketing".to_string(),
            position: "Sales Officer".to_string(),
            shift_group,
            join_date: NaiveDate::from_ymd_opt(2022, 3, 22).unwrap(),
        });
        (store, evaluator)
    }

    fn at(date: NaiveDate, hour: u32, min: u32) -> NaiveDateTime {
        date.and_time(NaiveTime::from_hms_opt(hour, min, 0).unwrap())
    }

    fn far_away() -> GeoPoint {
        GeoPoint { lat: -6.2500, lng: 106.8166 }
    }

    #[test]
    fn check_in_at_scheduled_start_is_present() {
        // REGULER starts 08:00
        let (_, evaluator) = setup(ShiftGroup::Reguler);
        let date = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();
        let record = evaluator.evaluate_check_in("emp-1", at(date, 8, 0), OFFICE, None).unwrap();
        assert_eq!(record.status, AttendanceStatus::Present);
        assert_eq!(record.late_minutes, 0);
        assert!(!record.rest_day);
    }

    #[test]
    fn check_in_one_minute_late() {
        let (_, evaluator) = setup(ShiftGroup::Reguler);
        let date = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();
        let record = evaluator.evaluate_check_in("emp-1", at(date, 8, 1), OFFICE, None).unwrap();
        assert_eq!(record.status, AttendanceStatus::Late);
        assert_eq!(record.late_minutes, 1);
    }

    #[test]
    fn malam_lateness_anchors_to_same_day() {
        // Group A works MALAM (slot 1) when (day - 1 + 1) % 4 == 0, e.g. day 4.
        let (_, evaluator) = setup(ShiftGroup::ShiftA);
        let date = NaiveDate::from_ymd_opt(2024, 6, 4).unwrap();
        let record = evaluator.evaluate_check_in("emp-1", at(date, 23, 45), OFFICE, None).unwrap();
        assert_eq!(record.status, AttendanceStatus::Late);
        assert_eq!(record.late_minutes, 15);
    }

    #[test]
    fn outside_geofence_creates_no_record() {
        let (store, evaluator) = setup(ShiftGroup::Reguler);
        let date = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();
        let err = evaluator.evaluate_check_in("emp-1", at(date, 8, 0), far_away(), None);
        match err {
            Err(AttendanceError::OutsideGeofence { distance_meters, radius_meters }) => {
                assert!(distance_meters > 500.0);
                assert_eq!(radius_meters, 500.0);
            }
            other => panic!("expected OutsideGeofence, got {other:?}"),
        }
        assert!(store.find_by_employee_and_date("emp-1", date).is_none());
    }

    #[test]
    fn duplicate_check_in_leaves_first_record_unchanged() {
        let (store, evaluator) = setup(ShiftGroup::Reguler);
        let date = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();
        let first = evaluator.evaluate_check_in("emp-1", at(date, 8, 0), OFFICE, None).unwrap();
        let second = evaluator.evaluate_check_in("emp-1", at(date, 9, 0), OFFICE, None);
        assert_eq!(second, Err(AttendanceError::DuplicateCheckIn));
        let stored = store.find_by_employee_and_date("emp-1", date).unwrap();
        assert_eq!(stored.check_in, first.check_in);
        assert_eq!(stored.status, AttendanceStatus::Present);
    }

    #[test]
    fn check_out_without_check_in_is_rejected() {
        let (_, evaluator) = setup(ShiftGroup::Reguler);
        let date = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();
        let err = evaluator.evaluate_check_out("emp-1", at(date, 17, 0), OFFICE);
        assert_eq!(err, Err(AttendanceError::NoOpenRecord));
    }

    #[test]
    fn check_out_closes_without_revising_status() {
        let (_, evaluator) = setup(ShiftGroup::Reguler);
        let date = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();
        evaluator.evaluate_check_in("emp-1", at(date, 8, 20), OFFICE, None).unwrap();
        let closed = evaluator.evaluate_check_out("emp-1", at(date, 17, 0), OFFICE).unwrap();
        assert_eq!(closed.status, AttendanceStatus::Late);
        assert_eq!(closed.late_minutes, 20);
        assert_eq!(closed.check_out, Some(NaiveTime::from_hms_opt(17, 0, 0).unwrap()));
    }

    #[test]
    fn check_out_is_geofence_gated() {
        let (store, evaluator) = setup(ShiftGroup::Reguler);
        let date = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();
        evaluator.evaluate_check_in("emp-1", at(date, 8, 0), OFFICE, None).unwrap();
        let err = evaluator.evaluate_check_out("emp-1", at(date, 17, 0), far_away());
        assert!(matches!(err, Err(AttendanceError::OutsideGeofence { .. })));
        assert!(store.find_open("emp-1").is_some(), "record must stay open");
    }

    #[test]
    fn malam_shift_closes_after_midnight() {
        let (store, evaluator) = setup(ShiftGroup::ShiftA);
        let date = NaiveDate::from_ymd_opt(2024, 6, 4).unwrap();
        evaluator.evaluate_check_in("emp-1", at(date, 23, 30), OFFICE, None).unwrap();
        let next_morning = at(NaiveDate::from_ymd_opt(2024, 6, 5).unwrap(), 7, 35);
        let closed = evaluator.evaluate_check_out("emp-1", next_morning, OFFICE).unwrap();
        assert_eq!(closed.date, date, "record keeps the check-in day");
        assert!(store.find_open("emp-1").is_none());
    }

    #[test]
    fn check_out_closes_most_recent_open_record() {
        // MALAM on June 4, never checked out; PAGI check-in on June 5.
        let (store, evaluator) = setup(ShiftGroup::ShiftA);
        let malam_day = NaiveDate::from_ymd_opt(2024, 6, 4).unwrap();
        let pagi_day = NaiveDate::from_ymd_opt(2024, 6, 5).unwrap();
        evaluator.evaluate_check_in("emp-1", at(malam_day, 23, 30), OFFICE, None).unwrap();
        evaluator.evaluate_check_in("emp-1", at(pagi_day, 7, 30), OFFICE, None).unwrap();
        let closed = evaluator.evaluate_check_out("emp-1", at(pagi_day, 15, 30), OFFICE).unwrap();
        assert_eq!(closed.date, pagi_day);
        // the stale MALAM record stays open
        assert_eq!(store.find_open("emp-1").unwrap().date, malam_day);
    }

    #[test]
    fn rest_day_check_in_is_flagged() {
        // Group D sits in the LIBUR slot (3) when (day - 1 + 3) % 4 == 3, e.g. day 1.
        let (_, evaluator) = setup(ShiftGroup::ShiftD);
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let record = evaluator.evaluate_check_in("emp-1", at(date, 8, 0), OFFICE, None).unwrap();
        assert!(record.rest_day);
        assert_eq!(record.status, AttendanceStatus::Present);
        assert_eq!(record.late_minutes, 0);
    }

    #[test]
    fn override_hole_makes_assignment_unresolvable() {
        let (store, evaluator) = setup(ShiftGroup::ShiftA);
        let date = NaiveDate::from_ymd_opt(2024, 6, 2).unwrap();
        // Day 2 formula: slots map to B, C, D, A. Overriding slot 3 to B
        // leaves group A with no slot at all.
        RosterResolver::new(store.clone()).set_override(2024, 5, 2, 3, crate::model::shift::Group::B);
        let employees: Arc<dyn EmployeeStore> = store.clone();
        let employee = employees.get("emp-1").unwrap();
        let err = evaluator.assignment_for(&employee, date);
        assert!(matches!(err, Err(AttendanceError::UnresolvableShift { .. })));
        // the public check-in still admits and flags it
        let record = evaluator.evaluate_check_in("emp-1", at(date, 8, 0), OFFICE, None).unwrap();
        assert!(record.rest_day);
    }

    #[test]
    fn unknown_employee_is_rejected() {
        let (_, evaluator) = setup(ShiftGroup::Reguler);
        let date = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();
        let err = evaluator.evaluate_check_in("ghost", at(date, 8, 0), OFFICE, None);
        assert_eq!(err, Err(AttendanceError::UnknownEmployee("ghost".to_string())));
    }
}
