//! The module contains the `users` table entity.

use sea_orm::entity::prelude::*;

/// A laundry-service account holder.
///
/// `balance` is stored as integer cents (see [`MoneyCents`]) and is mutated
/// only by the reservation debit and the transaction adjustment operations.
///
/// [`MoneyCents`]: crate::MoneyCents
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub netid: String,
    pub balance: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::laundry_times::Entity")]
    LaundryTimes,
}

impl Related<super::laundry_times::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LaundryTimes.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
