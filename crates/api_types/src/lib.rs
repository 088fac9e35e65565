use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

pub mod health {
    use super::*;

    /// Response body for the root health endpoint.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct Health {
        pub status: String,
    }
}

pub mod expense {
    use super::*;

    /// Request body for recording a new expense.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct ExpenseNew {
        pub name: String,
        /// Signed amount. Refunds and corrections may be negative.
        pub amount: i64,
        pub category: String,
    }

    /// Query parameters for the filtered expense listing.
    ///
    /// Both bounds are inclusive; a missing bound leaves that side open.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct ExpenseListParams {
        /// RFC3339 timestamp, including timezone offset.
        pub start_date: Option<DateTime<FixedOffset>>,
        /// RFC3339 timestamp, including timezone offset.
        pub end_date: Option<DateTime<FixedOffset>>,
    }

    /// A stored expense as returned by the server.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct Expense {
        pub id: i32,
        pub name: String,
        pub amount: i64,
        pub category: String,
        /// RFC3339 timestamp, including timezone offset (UTC).
        pub created_at: DateTime<FixedOffset>,
    }
}

pub mod salary {
    use super::*;

    /// Request body for recording a salary payment.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct SalaryNew {
        pub amount: i64,
    }

    /// A stored salary payment as returned by the server.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct Salary {
        pub id: i32,
        pub amount: i64,
    }
}

pub mod overview {
    use super::*;

    /// Aggregate view over everything recorded so far.
    ///
    /// Histories keep insertion order. `remaining` is
    /// `total_salary - total_expense` and may be negative.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct Overview {
        pub expense_history: Vec<i64>,
        pub salary_history: Vec<i64>,
        pub total_expense: i64,
        pub total_salary: i64,
        pub remaining: i64,
    }
}
