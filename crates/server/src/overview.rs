//! Overview API endpoint

use api_types::overview::Overview;
use axum::{Json, extract::State};

use crate::{ServerError, server::ServerState};

/// Handle requests for the aggregate financial picture
pub async fn get_overview(State(state): State<ServerState>) -> Result<Json<Overview>, ServerError> {
    let expenses = state.ledger.list_expenses(None, None).await?;
    let salaries = state.ledger.list_salaries().await?;

    let expense_history: Vec<i64> = expenses.into_iter().map(|expense| expense.amount).collect();
    let salary_history: Vec<i64> = salaries.into_iter().map(|salary| salary.amount).collect();

    let total_expense: i64 = expense_history.iter().sum();
    let total_salary: i64 = salary_history.iter().sum();

    Ok(Json(Overview {
        expense_history,
        salary_history,
        total_expense,
        total_salary,
        remaining: total_salary - total_expense,
    }))
}
