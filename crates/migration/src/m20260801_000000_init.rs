//! Initial schema migration - creates all tables from scratch.
//!
//! It creates the complete schema for washday:
//!
//! - `users`: account holders with a stored balance (integer cents)
//! - `dorms`: residential buildings grouping machines
//! - `laundries`: washer/dryer machines with a fixed per-use cost
//! - `laundry_times`: recorded usage sessions
//!
//! Referential integrity is enforced by existence checks in the engine, not
//! by database constraints: deleting a dorm or a user intentionally leaves
//! its child rows in place, still queryable by id.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(Iden)]
enum Users {
    Table,
    Id,
    Name,
    Netid,
    Balance,
}

#[derive(Iden)]
enum Dorms {
    Table,
    Id,
    Name,
}

#[derive(Iden)]
enum Laundries {
    Table,
    Id,
    DormId,
    LaundryNumber,
    LaundryType,
    Cost,
}

#[derive(Iden)]
enum LaundryTimes {
    Table,
    Id,
    LaundryId,
    UserId,
    Duration,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Users::Name).string().not_null())
                    .col(ColumnDef::new(Users::Netid).string().not_null())
                    .col(
                        ColumnDef::new(Users::Balance)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Dorms::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Dorms::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Dorms::Name).string().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Laundries::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Laundries::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Laundries::DormId).integer().not_null())
                    .col(
                        ColumnDef::new(Laundries::LaundryNumber)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Laundries::LaundryType).string().not_null())
                    .col(ColumnDef::new(Laundries::Cost).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-laundries-dorm_id")
                    .table(Laundries::Table)
                    .col(Laundries::DormId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(LaundryTimes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(LaundryTimes::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(LaundryTimes::LaundryId).integer().not_null())
                    .col(ColumnDef::new(LaundryTimes::UserId).integer().not_null())
                    .col(ColumnDef::new(LaundryTimes::Duration).integer().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-laundry_times-laundry_id")
                    .table(LaundryTimes::Table)
                    .col(LaundryTimes::LaundryId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-laundry_times-user_id")
                    .table(LaundryTimes::Table)
                    .col(LaundryTimes::UserId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop in reverse order of creation.
        manager
            .drop_table(Table::drop().table(LaundryTimes::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Laundries::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Dorms::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;
        Ok(())
    }
}
