//! The module contains the `dorms` table entity.

use sea_orm::entity::prelude::*;

/// A residential building grouping laundry machines.
///
/// Deleting a dorm does not cascade: its machines stay queryable by id.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "dorms")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::laundries::Entity")]
    Laundries,
}

impl Related<super::laundries::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Laundries.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
