//! The module contains the expense record and its storage entity.
//!
//! An expense is an outflow: a label, a signed amount, a free-text category
//! and the instant it was recorded. Rows are written once and never updated
//! or deleted; `id` and `created_at` are immutable after the insert.
use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A recorded outflow.
///
/// Amounts are stored as signed integer currency units (`i64`). Nothing
/// caps or floors them; a negative expense is accepted and simply counts
/// against the total with its sign.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: i32,
    pub name: String,
    pub amount: i64,
    pub category: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "expenses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub amount: i64,
    pub category: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Expense {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            amount: model.amount,
            category: model.category,
            created_at: model.created_at,
        }
    }
}
