//! The module contains the `laundry_times` table entity.

use sea_orm::entity::prelude::*;

/// A recorded usage session of a machine by a user.
///
/// Rows are created only by the reservation operation, are immutable
/// afterwards, and are never deleted by any endpoint. `duration` is in
/// minutes and carries no bound checks.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "laundry_times")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub laundry_id: i32,
    pub user_id: i32,
    pub duration: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::laundries::Entity",
        from = "Column::LaundryId",
        to = "super::laundries::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Laundries,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Users,
}

impl Related<super::laundries::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Laundries.def()
    }
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
