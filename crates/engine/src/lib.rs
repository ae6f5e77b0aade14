//! Domain core of the laundry-payment service.
//!
//! [`Engine`] owns the database connection and exposes every operation the
//! HTTP layer needs: user/dorm/machine CRUD, the unconditional balance
//! transaction, and the reservation debit. The reservation is the only place
//! with a business rule: a user's balance must never go negative through it,
//! and the debit plus the usage-session insert commit as one transaction.
pub use error::EngineError;
pub use money::MoneyCents;

use sea_orm::{
    ActiveValue, DatabaseConnection, QueryFilter, TransactionTrait, prelude::*, sea_query::Expr,
};

pub mod dorms;
pub mod laundries;
pub mod laundry_times;
pub mod users;

mod error;
mod money;

type ResultEngine<T> = Result<T, EngineError>;

/// Result of a machine read: the bare machine, or its first recorded usage
/// session when one exists.
#[derive(Debug)]
pub enum LaundryLookup {
    Machine(laundries::Model),
    Session(laundry_times::Model),
}

#[derive(Debug)]
pub struct Engine {
    database: DatabaseConnection,
}

impl Engine {
    pub fn new(database: DatabaseConnection) -> Self {
        Self { database }
    }

    /// Return all users.
    pub async fn users(&self) -> ResultEngine<Vec<users::Model>> {
        Ok(users::Entity::find().all(&self.database).await?)
    }

    /// Add a new user. The balance defaults to zero when the request omits
    /// it.
    pub async fn create_user(
        &self,
        name: Option<String>,
        netid: Option<String>,
        balance: MoneyCents,
    ) -> ResultEngine<users::Model> {
        let name = name.ok_or(EngineError::MissingField("User's name"))?;
        let netid = netid.ok_or(EngineError::MissingField("User's netid"))?;

        let user = users::ActiveModel {
            name: ActiveValue::Set(name),
            netid: ActiveValue::Set(netid),
            balance: ActiveValue::Set(balance.cents()),
            ..Default::default()
        };
        Ok(user.insert(&self.database).await?)
    }

    /// Return a user.
    pub async fn user(&self, user_id: i32) -> ResultEngine<users::Model> {
        users::Entity::find_by_id(user_id)
            .one(&self.database)
            .await?
            .ok_or(EngineError::NotFound {
                entity: "User",
                id: user_id,
            })
    }

    /// Delete a user, returning the removed row.
    ///
    /// No cascade: the user's recorded usage sessions stay in place.
    pub async fn delete_user(&self, user_id: i32) -> ResultEngine<users::Model> {
        let user = self.user(user_id).await?;
        users::Entity::delete_by_id(user_id)
            .exec(&self.database)
            .await?;
        Ok(user)
    }

    /// Return all dorms.
    pub async fn dorms(&self) -> ResultEngine<Vec<dorms::Model>> {
        Ok(dorms::Entity::find().all(&self.database).await?)
    }

    /// Add a new dorm.
    pub async fn create_dorm(&self, name: Option<String>) -> ResultEngine<dorms::Model> {
        let name = name.ok_or(EngineError::MissingField("Dorm's name"))?;

        let dorm = dorms::ActiveModel {
            name: ActiveValue::Set(name),
            ..Default::default()
        };
        Ok(dorm.insert(&self.database).await?)
    }

    /// Return a dorm.
    pub async fn dorm(&self, dorm_id: i32) -> ResultEngine<dorms::Model> {
        dorms::Entity::find_by_id(dorm_id)
            .one(&self.database)
            .await?
            .ok_or(EngineError::NotFound {
                entity: "Dorm",
                id: dorm_id,
            })
    }

    /// Delete a dorm, returning the removed row.
    ///
    /// No cascade: machines under the dorm stay queryable by id.
    pub async fn delete_dorm(&self, dorm_id: i32) -> ResultEngine<dorms::Model> {
        let dorm = self.dorm(dorm_id).await?;
        dorms::Entity::delete_by_id(dorm_id)
            .exec(&self.database)
            .await?;
        Ok(dorm)
    }

    /// Add a new machine under a dorm.
    ///
    /// Checks, in order: dorm exists, number provided, type provided. The
    /// cost is fixed here from the price table and never recomputed.
    pub async fn create_laundry(
        &self,
        dorm_id: i32,
        laundry_number: Option<i32>,
        laundry_type: Option<String>,
    ) -> ResultEngine<laundries::Model> {
        self.dorm(dorm_id).await?;
        let laundry_number =
            laundry_number.ok_or(EngineError::MissingField("Laundry's number"))?;
        let laundry_type = laundry_type.ok_or(EngineError::MissingField("Laundry's type"))?;
        let cost = laundries::price_for(&laundry_type);

        let laundry = laundries::ActiveModel {
            dorm_id: ActiveValue::Set(dorm_id),
            laundry_number: ActiveValue::Set(laundry_number),
            laundry_type: ActiveValue::Set(laundry_type),
            cost: ActiveValue::Set(cost.cents()),
            ..Default::default()
        };
        Ok(laundry.insert(&self.database).await?)
    }

    /// Return a machine, or its first recorded usage session when one
    /// exists.
    ///
    /// A machine with multiple sessions still yields a single session (the
    /// first match), not a list.
    pub async fn laundry(&self, laundry_id: i32) -> ResultEngine<LaundryLookup> {
        let machine = laundries::Entity::find_by_id(laundry_id)
            .one(&self.database)
            .await?
            .ok_or(EngineError::NotFound {
                entity: "Laundry",
                id: laundry_id,
            })?;

        let session = laundry_times::Entity::find()
            .filter(laundry_times::Column::LaundryId.eq(laundry_id))
            .one(&self.database)
            .await?;

        Ok(match session {
            Some(session) => LaundryLookup::Session(session),
            None => LaundryLookup::Machine(machine),
        })
    }

    /// Debit a user for one machine use and record the usage session, as one
    /// database transaction.
    ///
    /// Checks, in order, each short-circuiting with its own error: user
    /// exists, machine exists, duration provided, sufficient funds. The funds
    /// check and the debit are a single conditional update (`balance =
    /// balance - cost` where `balance >= cost`) so that two concurrent
    /// reservations against the same user cannot both pass the check. If the
    /// session insert fails the whole transaction is discarded and the debit
    /// does not persist.
    pub async fn reserve_machine(
        &self,
        user_id: i32,
        laundry_id: i32,
        duration: Option<i32>,
    ) -> ResultEngine<laundry_times::Model> {
        let user = self.user(user_id).await?;
        let laundry = laundries::Entity::find_by_id(laundry_id)
            .one(&self.database)
            .await?
            .ok_or(EngineError::NotFound {
                entity: "Laundry",
                id: laundry_id,
            })?;
        let duration = duration.ok_or(EngineError::MissingField("Laundry's duration"))?;

        let cost = MoneyCents::new(laundry.cost);

        let db_tx = self.database.begin().await?;

        // Zero affected rows means the balance check failed and nothing may
        // be written; dropping the transaction rolls it back.
        let debit = users::Entity::update_many()
            .col_expr(
                users::Column::Balance,
                Expr::col(users::Column::Balance).sub(cost.cents()),
            )
            .filter(users::Column::Id.eq(user_id))
            .filter(users::Column::Balance.gte(cost.cents()))
            .exec(&db_tx)
            .await?;
        if debit.rows_affected == 0 {
            return Err(EngineError::InsufficientFunds {
                required: cost,
                available: MoneyCents::new(user.balance),
            });
        }

        let session = laundry_times::ActiveModel {
            laundry_id: ActiveValue::Set(laundry_id),
            user_id: ActiveValue::Set(user_id),
            duration: ActiveValue::Set(duration),
            ..Default::default()
        }
        .insert(&db_tx)
        .await?;

        db_tx.commit().await?;
        Ok(session)
    }

    /// Add a signed amount to a user's balance and return the updated user.
    ///
    /// Positive = deposit, negative = withdrawal. Unlike the reservation
    /// debit there is no floor check: a transaction may drive the balance
    /// negative.
    pub async fn apply_transaction(
        &self,
        user_id: i32,
        amount: Option<MoneyCents>,
    ) -> ResultEngine<users::Model> {
        let user = self.user(user_id).await?;
        let amount = amount.ok_or(EngineError::MissingField("Amount"))?;

        let balance = MoneyCents::new(user.balance) + amount;
        let mut user: users::ActiveModel = user.into();
        user.balance = ActiveValue::Set(balance.cents());
        Ok(user.update(&self.database).await?)
    }
}
