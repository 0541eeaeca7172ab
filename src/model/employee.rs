use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::shift::ShiftGroup;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(
    example = json!({
        "id": "f7c3e9a0-0000-0000-0000-000000000000",
        "nid": "STF089",
        "name": "Siti Karyawan",
        "email": "siti@presensi.com",
        "division": "Marketing",
        "position": "Sales Officer",
        "shift_group": "SHIFT_A",
        "join_date": "2022-03-22"
    })
)]
pub struct Employee {
    pub id: String,

    #[schema(example = "STF089")]
    pub nid: String,

    #[schema(example = "Siti Karyawan")]
    pub name: String,

    #[schema(example = "siti@presensi.com")]
    pub email: String,

    #[schema(example = "Marketing")]
    pub division: String,

    #[schema(example = "Sales Officer")]
    pub position: String,

    pub shift_group: ShiftGroup,

    #[schema(example = "2022-03-22", value_type = String, format = "date")]
    pub join_date: NaiveDate,
}
