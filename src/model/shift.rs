use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};
use utoipa::ToSchema;

/// The six canonical shift types. PAGI/SORE/MALAM form the three-shift
/// rotating cycle, REGULER and DAYTIME are fixed day shifts, LIBUR is the
/// rest-day slot of the rotation.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
    ToSchema,
)]
pub enum ShiftType {
    PAGI,
    SORE,
    MALAM,
    REGULER,
    DAYTIME,
    LIBUR,
}

/// One of the four rotated employee cohorts.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, ToSchema,
)]
pub enum Group {
    A,
    B,
    C,
    D,
}

impl Group {
    /// Rotation cycle, in order. Day 1 of every month lands slot 0 on A.
    pub const CYCLE: [Group; 4] = [Group::A, Group::B, Group::C, Group::D];
}

/// Cohort an employee belongs to. SHIFT_A..SHIFT_D rotate through the roster
/// slots; DAYTIME and REGULER always work their fixed shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ShiftGroup {
    ShiftA,
    ShiftB,
    ShiftC,
    ShiftD,
    Daytime,
    Reguler,
}

impl ShiftGroup {
    /// The rotation letter for rotating cohorts, `None` for fixed ones.
    pub fn rotating_group(&self) -> Option<Group> {
        match self {
            ShiftGroup::ShiftA => Some(Group::A),
            ShiftGroup::ShiftB => Some(Group::B),
            ShiftGroup::ShiftC => Some(Group::C),
            ShiftGroup::ShiftD => Some(Group::D),
            ShiftGroup::Daytime | ShiftGroup::Reguler => None,
        }
    }

    /// Fixed shift type for non-rotating cohorts.
    pub fn fixed_shift(&self) -> Option<ShiftType> {
        match self {
            ShiftGroup::Daytime => Some(ShiftType::DAYTIME),
            ShiftGroup::Reguler => Some(ShiftType::REGULER),
            _ => None,
        }
    }
}

/// Immutable shift reference data.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ShiftDefinition {
    pub shift_type: ShiftType,
    #[schema(example = "Shift Pagi")]
    pub name: String,
    #[schema(example = "07:30", value_type = String)]
    pub start_time: NaiveTime,
    #[schema(example = "15:30", value_type = String)]
    pub end_time: NaiveTime,
}

impl ShiftDefinition {
    /// A shift whose end clock time precedes its start runs past midnight
    /// (MALAM 23:30 -> 07:30). LIBUR's 00:00 -> 00:00 is zero duration, not
    /// overnight.
    pub fn crosses_midnight(&self) -> bool {
        self.end_time < self.start_time
    }
}

/// Resolved roster outcome for one employee-relevant slot on one day.
/// Derived, never stored. `group` is `None` for fixed cohorts.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ShiftAssignment {
    #[schema(value_type = String, format = "date")]
    pub date: NaiveDate,
    pub shift_type: ShiftType,
    pub group: Option<Group>,
}
