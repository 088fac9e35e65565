//! Data access layer for the expense/salary tracker.
//!
//! [`Ledger`] is a thin repository over the two tables: create, list
//! (optionally bounded by creation time) and point lookup. Every operation
//! is a single statement against the pooled connection; there is no
//! in-process state to keep consistent.
use chrono::{DateTime, Utc};

pub use error::LedgerError;
pub use expenses::Expense;
pub use salaries::Salary;
use sea_orm::{ActiveValue, DatabaseConnection, QueryFilter, QueryOrder, prelude::*};

mod error;
mod expenses;
mod salaries;

type ResultLedger<T> = Result<T, LedgerError>;

#[derive(Debug)]
pub struct Ledger {
    database: DatabaseConnection,
}

impl Ledger {
    /// Return a builder for `Ledger`. Help to build the struct.
    pub fn builder() -> LedgerBuilder {
        LedgerBuilder::default()
    }

    /// Insert a new expense and return the stored row.
    ///
    /// `id` is assigned by the storage layer as the next value of the
    /// auto-increment key; `created_at` is stamped here, at insertion time.
    /// The caller supplies neither. Nothing is validated beyond the types:
    /// an empty `name` or a negative `amount` goes in as-is.
    pub async fn new_expense(
        &self,
        name: &str,
        amount: i64,
        category: &str,
    ) -> ResultLedger<Expense> {
        let model = expenses::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(name.to_string()),
            amount: ActiveValue::Set(amount),
            category: ActiveValue::Set(category.to_string()),
            created_at: ActiveValue::Set(Utc::now()),
        };
        let model = model.insert(&self.database).await?;

        Ok(Expense::from(model))
    }

    /// List expenses ordered by `id`, the insertion order.
    ///
    /// `from` and `to` are inclusive bounds on `created_at`; either or both
    /// may be omitted to widen the range up to the full table.
    pub async fn list_expenses(
        &self,
        from: Option<DateTime<Utc>>,
        to: Option<DateTime<Utc>>,
    ) -> ResultLedger<Vec<Expense>> {
        let mut query = expenses::Entity::find().order_by_asc(expenses::Column::Id);
        if let Some(from) = from {
            query = query.filter(expenses::Column::CreatedAt.gte(from));
        }
        if let Some(to) = to {
            query = query.filter(expenses::Column::CreatedAt.lte(to));
        }

        let models = query.all(&self.database).await?;
        Ok(models.into_iter().map(Expense::from).collect())
    }

    /// Return the expense with the given id.
    pub async fn expense(&self, id: i32) -> ResultLedger<Expense> {
        let model = expenses::Entity::find_by_id(id)
            .one(&self.database)
            .await?
            .ok_or(LedgerError::ExpenseNotFound(id))?;

        Ok(Expense::from(model))
    }

    /// Insert a new salary entry and return the stored row.
    pub async fn new_salary(&self, amount: i64) -> ResultLedger<Salary> {
        let model = salaries::ActiveModel {
            id: ActiveValue::NotSet,
            amount: ActiveValue::Set(amount),
        };
        let model = model.insert(&self.database).await?;

        Ok(Salary::from(model))
    }

    /// List every salary entry ordered by `id`, the insertion order.
    pub async fn list_salaries(&self) -> ResultLedger<Vec<Salary>> {
        let models = salaries::Entity::find()
            .order_by_asc(salaries::Column::Id)
            .all(&self.database)
            .await?;

        Ok(models.into_iter().map(Salary::from).collect())
    }

    /// Return the salary entry with the given id.
    pub async fn salary(&self, id: i32) -> ResultLedger<Salary> {
        let model = salaries::Entity::find_by_id(id)
            .one(&self.database)
            .await?
            .ok_or(LedgerError::SalaryNotFound(id))?;

        Ok(Salary::from(model))
    }
}

/// The builder for `Ledger`
#[derive(Default)]
pub struct LedgerBuilder {
    database: DatabaseConnection,
}

impl LedgerBuilder {
    /// Pass the required database
    pub fn database(mut self, db: DatabaseConnection) -> LedgerBuilder {
        self.database = db;
        self
    }

    /// Construct `Ledger`, failing fast when the database is unreachable.
    pub async fn build(self) -> ResultLedger<Ledger> {
        self.database.ping().await?;

        Ok(Ledger {
            database: self.database,
        })
    }
}
