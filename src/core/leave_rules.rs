//! Company-policy leave entitlement table. Lookup only; running balances are
//! tracked outside this engine.

use crate::model::leave::LeaveCategory;

pub const CATEGORIES: [LeaveCategory; 7] = [
    LeaveCategory { id: "a", label: "Karyawan menikah", entitled_days: 3 },
    LeaveCategory { id: "b", label: "Anak Karyawan menikah", entitled_days: 2 },
    LeaveCategory { id: "c", label: "Istri sah melahirkan atau keguguran", entitled_days: 2 },
    LeaveCategory {
        id: "d",
        label: "Suami/Istri/Anak/Menantu/Ortu/Mertua meninggal dunia",
        entitled_days: 2,
    },
    LeaveCategory { id: "e", label: "Anak Karyawan dikhitan/dibaptis", entitled_days: 2 },
    LeaveCategory {
        id: "f",
        label: "Anggota keluarga dalam satu rumah meninggal dunia",
        entitled_days: 1,
    },
    LeaveCategory {
        id: "g",
        label: "Musibah/Bencana alam yang tidak mungkin dihindari",
        entitled_days: 2,
    },
];

pub fn entitlement_for(category_id: &str) -> Option<u32> {
    CATEGORIES.iter().find(|c| c.id == category_id).map(|c| c.entitled_days)
}

pub fn all() -> &'static [LeaveCategory] {
    &CATEGORIES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_categories_resolve() {
        assert_eq!(entitlement_for("a"), Some(3));
        assert_eq!(entitlement_for("f"), Some(1));
        assert_eq!(entitlement_for("g"), Some(2));
    }

    #[test]
    fn unknown_category_is_none() {
        assert_eq!(entitlement_for("z"), None);
        assert_eq!(entitlement_for(""), None);
    }

    #[test]
    fn ids_are_unique() {
        for (i, c) in CATEGORIES.iter().enumerate() {
            assert!(CATEGORIES.iter().skip(i + 1).all(|other| other.id != c.id));
        }
    }
}
