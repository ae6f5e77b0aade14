//! The module contains the `laundries` table entity and the per-use price
//! table.

use sea_orm::entity::prelude::*;

use crate::MoneyCents;

/// Per-use cost of a washing machine, in cents.
pub const WASHER_COST: MoneyCents = MoneyCents::new(175);
/// Per-use cost of a dryer, in cents.
pub const DRYER_COST: MoneyCents = MoneyCents::new(130);

/// Returns the fixed per-use cost for a machine type.
///
/// Only the exact literal `"washer"` gets the washer price; every other
/// string, including case variants such as `"Washer"`, is priced as a dryer.
/// The check is intentionally literal and must not be made case-insensitive.
#[must_use]
pub fn price_for(laundry_type: &str) -> MoneyCents {
    if laundry_type == "washer" {
        WASHER_COST
    } else {
        DRYER_COST
    }
}

/// A single washer or dryer machine.
///
/// `cost` is derived once from [`price_for`] at creation and never
/// recomputed.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "laundries")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub dorm_id: i32,
    pub laundry_number: i32,
    pub laundry_type: String,
    pub cost: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::laundry_times::Entity")]
    LaundryTimes,
    #[sea_orm(
        belongs_to = "super::dorms::Entity",
        from = "Column::DormId",
        to = "super::dorms::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Dorms,
}

impl Related<super::laundry_times::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LaundryTimes.def()
    }
}

impl Related<super::dorms::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Dorms.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
