//! Expense API endpoints

use api_types::expense::{Expense, ExpenseListParams, ExpenseNew};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use chrono::{FixedOffset, Utc};

use crate::{ServerError, server::ServerState};

fn utc_offset() -> Result<FixedOffset, ServerError> {
    FixedOffset::east_opt(0).ok_or_else(|| ServerError::Generic("invalid UTC offset".to_string()))
}

fn view(expense: ledger::Expense, utc: FixedOffset) -> Expense {
    Expense {
        id: expense.id,
        name: expense.name,
        amount: expense.amount,
        category: expense.category,
        created_at: expense.created_at.with_timezone(&utc),
    }
}

pub async fn expense_new(
    State(state): State<ServerState>,
    Json(payload): Json<ExpenseNew>,
) -> Result<(StatusCode, Json<Expense>), ServerError> {
    let expense = state
        .ledger
        .new_expense(&payload.name, payload.amount, &payload.category)
        .await?;

    let utc = utc_offset()?;
    Ok((StatusCode::CREATED, Json(view(expense, utc))))
}

pub async fn list_all(State(state): State<ServerState>) -> Result<Json<Vec<Expense>>, ServerError> {
    let expenses = state.ledger.list_expenses(None, None).await?;

    let utc = utc_offset()?;
    Ok(Json(
        expenses
            .into_iter()
            .map(|expense| view(expense, utc))
            .collect(),
    ))
}

pub async fn list_filtered(
    State(state): State<ServerState>,
    Query(params): Query<ExpenseListParams>,
) -> Result<Json<Vec<Expense>>, ServerError> {
    let from = params.start_date.map(|dt| dt.with_timezone(&Utc));
    let to = params.end_date.map(|dt| dt.with_timezone(&Utc));

    let expenses = state.ledger.list_expenses(from, to).await?;

    let utc = utc_offset()?;
    Ok(Json(
        expenses
            .into_iter()
            .map(|expense| view(expense, utc))
            .collect(),
    ))
}

pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(expense_id): Path<i32>,
) -> Result<Json<Expense>, ServerError> {
    let expense = state.ledger.expense(expense_id).await?;

    let utc = utc_offset()?;
    Ok(Json(view(expense, utc)))
}
