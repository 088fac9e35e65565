//! The module contains the errors the ledger can raise.
//!
//! Point lookups report which resource was missing; everything the storage
//! layer refuses is wrapped unchanged in [`Database`].
//!
//!  [`Database`]: LedgerError::Database
use sea_orm::DbErr;
use thiserror::Error;

/// Ledger custom errors.
#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("expense {0} not found")]
    ExpenseNotFound(i32),
    #[error("salary {0} not found")]
    SalaryNotFound(i32),
    #[error(transparent)]
    Database(#[from] DbErr),
}

impl PartialEq for LedgerError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::ExpenseNotFound(a), Self::ExpenseNotFound(b)) => a == b,
            (Self::SalaryNotFound(a), Self::SalaryNotFound(b)) => a == b,
            (Self::Database(a), Self::Database(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}
