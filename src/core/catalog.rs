//! Static shift reference table.

use chrono::NaiveTime;
use once_cell::sync::Lazy;

use crate::model::shift::{ShiftDefinition, ShiftType};

fn hm(hour: u32, min: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, min, 0).unwrap()
}

static SHIFT_DEFINITIONS: Lazy<Vec<ShiftDefinition>> = Lazy::new(|| {
    vec![
        ShiftDefinition {
            shift_type: ShiftType::PAGI,
            name: "Shift Pagi".to_string(),
            start_time: hm(7, 30),
            end_time: hm(15, 30),
        },
        ShiftDefinition {
            shift_type: ShiftType::SORE,
            name: "Shift Sore".to_string(),
            start_time: hm(15, 30),
            end_time: hm(23, 30),
        },
        ShiftDefinition {
            shift_type: ShiftType::MALAM,
            name: "Shift Malam".to_string(),
            start_time: hm(23, 30),
            end_time: hm(7, 30),
        },
        ShiftDefinition {
            shift_type: ShiftType::REGULER,
            name: "Reguler".to_string(),
            start_time: hm(8, 0),
            end_time: hm(17, 0),
        },
        ShiftDefinition {
            shift_type: ShiftType::DAYTIME,
            name: "Daytime".to_string(),
            start_time: hm(9, 0),
            end_time: hm(18, 0),
        },
        ShiftDefinition {
            shift_type: ShiftType::LIBUR,
            name: "Libur".to_string(),
            start_time: hm(0, 0),
            end_time: hm(0, 0),
        },
    ]
});

pub fn lookup(shift_type: ShiftType) -> Option<&'static ShiftDefinition> {
    SHIFT_DEFINITIONS.iter().find(|d| d.shift_type == shift_type)
}

pub fn all() -> &'static [ShiftDefinition] {
    &SHIFT_DEFINITIONS
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn every_shift_type_is_defined() {
        for shift_type in ShiftType::iter() {
            assert!(lookup(shift_type).is_some(), "missing definition for {shift_type}");
        }
        assert_eq!(all().len(), 6);
    }

    #[test]
    fn malam_crosses_midnight() {
        assert!(lookup(ShiftType::MALAM).unwrap().crosses_midnight());
        assert!(!lookup(ShiftType::PAGI).unwrap().crosses_midnight());
        assert!(!lookup(ShiftType::SORE).unwrap().crosses_midnight());
    }

    #[test]
    fn libur_has_zero_duration() {
        let libur = lookup(ShiftType::LIBUR).unwrap();
        assert_eq!(libur.start_time, libur.end_time);
        assert!(!libur.crosses_midnight());
    }
}
