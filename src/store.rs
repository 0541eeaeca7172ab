//! Injected storage interfaces and the in-memory implementation.
//!
//! The engine never talks to a database directly; it is handed these traits
//! so the persistence backend stays swappable. `MemoryStore` backs the
//! binary and the tests.

use std::collections::HashMap;
use std::sync::RwLock;

use chrono::NaiveDate;

use crate::model::attendance::AttendanceRecord;
use crate::model::employee::Employee;
use crate::model::geo::OfficeGeofence;
use crate::model::leave::{LeaveRequest, RequestStatus};
use crate::model::shift::Group;

/// Sparse roster override map, keyed by the composite
/// `"{year}-{month0}-{day}-{slot}"` key. Absent entries fall back to the
/// default rotation. Last write wins; concurrent admin edits to the same key
/// are an accepted race.
pub trait OverrideStore: Send + Sync {
    fn get(&self, key: &str) -> Option<Group>;
    fn set(&self, key: &str, group: Group);
}

/// Attendance record persistence: create, read-open, update.
pub trait AttendanceStore: Send + Sync {
    fn insert(&self, record: AttendanceRecord);
    fn find_by_employee_and_date(&self, employee_id: &str, date: NaiveDate)
    -> Option<AttendanceRecord>;
    /// The most recent record with a check-in but no check-out. Normally
    /// there is at most one; a forgotten check-out can leave a stale one
    /// behind, and the newest wins.
    fn find_open(&self, employee_id: &str) -> Option<AttendanceRecord>;
    /// Replaces the record with the same id. Returns false when absent.
    fn update(&self, record: AttendanceRecord) -> bool;
    fn list(&self, employee_id: Option<&str>, date: Option<NaiveDate>) -> Vec<AttendanceRecord>;
}

pub trait EmployeeStore: Send + Sync {
    fn insert(&self, employee: Employee);
    fn get(&self, id: &str) -> Option<Employee>;
    fn list(&self) -> Vec<Employee>;
    fn remove(&self, id: &str) -> bool;
}

pub trait LeaveStore: Send + Sync {
    fn insert(&self, request: LeaveRequest);
    fn get(&self, id: &str) -> Option<LeaveRequest>;
    fn update(&self, request: LeaveRequest) -> bool;
    fn list(&self, employee_id: Option<&str>, status: Option<RequestStatus>) -> Vec<LeaveRequest>;
}

/// Mutable office settings, written only by the settings flow.
pub trait SettingsStore: Send + Sync {
    fn geofence(&self) -> OfficeGeofence;
    fn set_geofence(&self, fence: OfficeGeofence);
}

/// `RwLock<HashMap>`-backed store. Callers serialize attendance events per
/// employee; the evaluator's read-then-write is not atomic on its own.
pub struct MemoryStore {
    overrides: RwLock<HashMap<String, Group>>,
    attendance: RwLock<HashMap<String, AttendanceRecord>>,
    employees: RwLock<HashMap<String, Employee>>,
    leaves: RwLock<HashMap<String, LeaveRequest>>,
    geofence: RwLock<OfficeGeofence>,
}

impl MemoryStore {
    pub fn new(default_geofence: OfficeGeofence) -> Self {
        Self {
            overrides: RwLock::new(HashMap::new()),
            attendance: RwLock::new(HashMap::new()),
            employees: RwLock::new(HashMap::new()),
            leaves: RwLock::new(HashMap::new()),
            geofence: RwLock::new(default_geofence),
        }
    }
}

impl OverrideStore for MemoryStore {
    fn get(&self, key: &str) -> Option<Group> {
        self.overrides.read().unwrap().get(key).copied()
    }

    fn set(&self, key: &str, group: Group) {
        self.overrides.write().unwrap().insert(key.to_string(), group);
    }
}

impl AttendanceStore for MemoryStore {
    fn insert(&self, record: AttendanceRecord) {
        self.attendance.write().unwrap().insert(record.id.clone(), record);
    }

    fn find_by_employee_and_date(
        &self,
        employee_id: &str,
        date: NaiveDate,
    ) -> Option<AttendanceRecord> {
        self.attendance
            .read()
            .unwrap()
            .values()
            .find(|r| r.employee_id == employee_id && r.date == date)
            .cloned()
    }

    fn find_open(&self, employee_id: &str) -> Option<AttendanceRecord> {
        self.attendance
            .read()
            .unwrap()
            .values()
            .filter(|r| r.employee_id == employee_id && r.is_open())
            .max_by_key(|r| r.date)
            .cloned()
    }

    fn update(&self, record: AttendanceRecord) -> bool {
        let mut map = self.attendance.write().unwrap();
        match map.get_mut(&record.id) {
            Some(slot) => {
                *slot = record;
                true
            }
            None => false,
        }
    }

    fn list(&self, employee_id: Option<&str>, date: Option<NaiveDate>) -> Vec<AttendanceRecord> {
        let mut records: Vec<AttendanceRecord> = self
            .attendance
            .read()
            .unwrap()
            .values()
            .filter(|r| employee_id.is_none_or(|id| r.employee_id == id))
            .filter(|r| date.is_none_or(|d| r.date == d))
            .cloned()
            .collect();
        records.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.employee_id.cmp(&b.employee_id)));
        records
    }
}

impl EmployeeStore for MemoryStore {
    fn insert(&self, employee: Employee) {
        self.employees.write().unwrap().insert(employee.id.clone(), employee);
    }

    fn get(&self, id: &str) -> Option<Employee> {
        self.employees.read().unwrap().get(id).cloned()
    }

    fn list(&self) -> Vec<Employee> {
        let mut employees: Vec<Employee> =
            self.employees.read().unwrap().values().cloned().collect();
        employees.sort_by(|a, b| a.nid.cmp(&b.nid));
        employees
    }

    fn remove(&self, id: &str) -> bool {
        self.employees.write().unwrap().remove(id).is_some()
    }
}

impl LeaveStore for MemoryStore {
    fn insert(&self, request: LeaveRequest) {
        self.leaves.write().unwrap().insert(request.id.clone(), request);
    }

    fn get(&self, id: &str) -> Option<LeaveRequest> {
        self.leaves.read().unwrap().get(id).cloned()
    }

    fn update(&self, request: LeaveRequest) -> bool {
        let mut map = self.leaves.write().unwrap();
        match map.get_mut(&request.id) {
            Some(slot) => {
                *slot = request;
                true
            }
            None => false,
        }
    }

    fn list(&self, employee_id: Option<&str>, status: Option<RequestStatus>) -> Vec<LeaveRequest> {
        let mut requests: Vec<LeaveRequest> = self
            .leaves
            .read()
            .unwrap()
            .values()
            .filter(|r| employee_id.is_none_or(|id| r.employee_id == id))
            .filter(|r| status.is_none_or(|s| r.status == s))
            .cloned()
            .collect();
        requests.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        requests
    }
}

impl SettingsStore for MemoryStore {
    fn geofence(&self) -> OfficeGeofence {
        *self.geofence.read().unwrap()
    }

    fn set_geofence(&self, fence: OfficeGeofence) {
        *self.geofence.write().unwrap() = fence;
    }
}
