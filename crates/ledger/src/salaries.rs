//! The module contains the salary record and its storage entity.
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A recorded inflow: only an amount, nothing else.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Salary {
    pub id: i32,
    pub amount: i64,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "salary")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub amount: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Salary {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            amount: model.amount,
        }
    }
}
