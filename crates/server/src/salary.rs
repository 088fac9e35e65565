//! Salary API endpoints

use api_types::salary::{Salary, SalaryNew};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{ServerError, server::ServerState};

fn view(salary: ledger::Salary) -> Salary {
    Salary {
        id: salary.id,
        amount: salary.amount,
    }
}

pub async fn salary_new(
    State(state): State<ServerState>,
    Json(payload): Json<SalaryNew>,
) -> Result<(StatusCode, Json<Salary>), ServerError> {
    let salary = state.ledger.new_salary(payload.amount).await?;

    Ok((StatusCode::CREATED, Json(view(salary))))
}

pub async fn list_all(State(state): State<ServerState>) -> Result<Json<Vec<Salary>>, ServerError> {
    let salaries = state.ledger.list_salaries().await?;

    Ok(Json(salaries.into_iter().map(view).collect()))
}

pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<Json<Salary>, ServerError> {
    let salary = state.ledger.salary(id).await?;

    Ok(Json(view(salary)))
}
