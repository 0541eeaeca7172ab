use std::sync::Arc;

use crate::core::evaluator::AttendanceEvaluator;
use crate::core::roster::RosterResolver;
use crate::store::{AttendanceStore, EmployeeStore, LeaveStore, OverrideStore, SettingsStore};

/// Shared handler state: the injected stores. The engine pieces are cheap
/// wrappers and get rebuilt per call.
#[derive(Clone)]
pub struct AppState {
    pub overrides: Arc<dyn OverrideStore>,
    pub attendance: Arc<dyn AttendanceStore>,
    pub employees: Arc<dyn EmployeeStore>,
    pub leaves: Arc<dyn LeaveStore>,
    pub settings: Arc<dyn SettingsStore>,
}

impl AppState {
    pub fn resolver(&self) -> RosterResolver {
        RosterResolver::new(self.overrides.clone())
    }

    pub fn evaluator(&self) -> AttendanceEvaluator {
        AttendanceEvaluator::new(
            self.resolver(),
            self.employees.clone(),
            self.attendance.clone(),
            self.settings.clone(),
        )
    }
}
