use axum::{
    Json, Router,
    routing::{get, post},
};

use std::sync::Arc;

use crate::{expense, overview, salary};
use api_types::health::Health;
use ledger::Ledger;

#[derive(Clone)]
pub struct ServerState {
    pub ledger: Arc<Ledger>,
}

/// Handle liveness checks
async fn health() -> Json<Health> {
    Json(Health {
        status: "ok".to_string(),
    })
}

fn router(state: ServerState) -> Router {
    Router::new()
        .route("/", get(health))
        .route("/create-expense", post(expense::expense_new))
        .route("/list-all-expense", get(expense::list_all))
        .route("/list-expense", get(expense::list_filtered))
        .route("/expense/{expense_id}", get(expense::get_by_id))
        .route("/create-salary", post(salary::salary_new))
        .route("/list-salary", get(salary::list_all))
        .route("/salary/{id}", get(salary::get_by_id))
        .route("/overview", get(overview::get_overview))
        .with_state(state)
}

pub async fn run(ledger: Ledger) {
    let listener = match tokio::net::TcpListener::bind("127.0.0.1:3000").await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!("failed to bind server listener: {err}");
            return;
        }
    };
    if let Err(err) = run_with_listener(ledger, listener).await {
        tracing::error!("server failed: {err}");
    }
}

pub async fn run_with_listener(
    ledger: Ledger,
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    let state = ServerState {
        ledger: Arc::new(ledger),
    };

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for a shutdown signal: {err}");
        // Without a signal handler the server can only be stopped by
        // killing the process; keep serving rather than exit early.
        std::future::pending::<()>().await;
    }
}

pub fn spawn_with_listener(
    ledger: Ledger,
    listener: tokio::net::TcpListener,
) -> Result<std::net::SocketAddr, std::io::Error> {
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        if let Err(err) = run_with_listener(ledger, listener).await {
            tracing::error!("server failed: {err}");
        }
    });

    Ok(addr)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::time::Duration;

    use axum::{
        body::Body,
        http::{Request, StatusCode, header},
        response::Response,
    };
    use http_body_util::BodyExt;
    use migration::MigratorTrait;
    use sea_orm::Database;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use crate::types::{expense::Expense, overview::Overview};

    async fn app() -> Router {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        migration::Migrator::up(&db, None).await.unwrap();
        let ledger = Ledger::builder().database(db).build().await.unwrap();

        router(ServerState {
            ledger: Arc::new(ledger),
        })
    }

    fn get_req(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn json_body(res: Response) -> Value {
        let bytes = res.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn create_expense(app: &Router, name: &str, amount: i64) -> Expense {
        let res = app
            .clone()
            .oneshot(post_json(
                "/create-expense",
                json!({"name": name, "amount": amount, "category": "misc"}),
            ))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::CREATED);

        serde_json::from_value(json_body(res).await).unwrap()
    }

    #[tokio::test]
    async fn health_returns_ok() {
        let app = app().await;

        let res = app.oneshot(get_req("/")).await.unwrap();

        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(json_body(res).await, json!({"status": "ok"}));
    }

    #[tokio::test]
    async fn create_expense_returns_the_stored_row() {
        let app = app().await;

        let res = app
            .clone()
            .oneshot(post_json(
                "/create-expense",
                json!({"name": "coffee", "amount": 995, "category": "food"}),
            ))
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::CREATED);
        let created = json_body(res).await;
        assert_eq!(created["name"], "coffee");
        assert_eq!(created["amount"], 995);
        assert_eq!(created["category"], "food");
        assert!(created["id"].as_i64().unwrap() >= 1);
        assert!(created["created_at"].is_string());

        let id = created["id"].as_i64().unwrap();
        let res = app.oneshot(get_req(&format!("/expense/{id}"))).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(json_body(res).await, created);
    }

    #[tokio::test]
    async fn create_expense_rejects_malformed_payloads() {
        let app = app().await;

        // Missing field.
        let res = app
            .clone()
            .oneshot(post_json("/create-expense", json!({"name": "coffee"})))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);

        // Not JSON at all.
        let res = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/create-expense")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from("not json"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn list_all_expense_keeps_insertion_order() {
        let app = app().await;

        create_expense(&app, "rent", 700).await;
        create_expense(&app, "coffee", 5).await;

        let res = app.oneshot(get_req("/list-all-expense")).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);

        let body = json_body(res).await;
        let names: Vec<&str> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|e| e["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["rent", "coffee"]);
    }

    #[tokio::test]
    async fn list_expense_filters_on_an_inclusive_range() {
        let app = app().await;

        let first = create_expense(&app, "rent", 700).await;
        tokio::time::sleep(Duration::from_millis(10)).await;
        let second = create_expense(&app, "coffee", 5).await;
        tokio::time::sleep(Duration::from_millis(10)).await;
        let third = create_expense(&app, "book", 20).await;

        // '+' is reserved in query strings, so bounds use the Z suffix.
        let stamp = |e: &Expense| e.created_at.format("%Y-%m-%dT%H:%M:%S%.fZ").to_string();
        let ids = |body: Value| -> Vec<i64> {
            body.as_array()
                .unwrap()
                .iter()
                .map(|e| e["id"].as_i64().unwrap())
                .collect()
        };

        let uri = format!(
            "/list-expense?start_date={}&end_date={}",
            stamp(&second),
            stamp(&second)
        );
        let res = app.clone().oneshot(get_req(&uri)).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(ids(json_body(res).await), vec![second.id as i64]);

        let uri = format!("/list-expense?start_date={}", stamp(&second));
        let res = app.clone().oneshot(get_req(&uri)).await.unwrap();
        assert_eq!(
            ids(json_body(res).await),
            vec![second.id as i64, third.id as i64]
        );

        let uri = format!("/list-expense?end_date={}", stamp(&second));
        let res = app.clone().oneshot(get_req(&uri)).await.unwrap();
        assert_eq!(
            ids(json_body(res).await),
            vec![first.id as i64, second.id as i64]
        );

        // No bounds behaves like the full listing.
        let res = app.oneshot(get_req("/list-expense")).await.unwrap();
        assert_eq!(
            ids(json_body(res).await),
            vec![first.id as i64, second.id as i64, third.id as i64]
        );
    }

    #[tokio::test]
    async fn list_expense_rejects_invalid_timestamps() {
        let app = app().await;

        let res = app
            .oneshot(get_req("/list-expense?start_date=notatime"))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn missing_rows_return_404() {
        let app = app().await;

        let res = app.clone().oneshot(get_req("/expense/999")).await.unwrap();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            json_body(res).await,
            json!({"error": "expense 999 not found"})
        );

        let res = app.oneshot(get_req("/salary/999")).await.unwrap();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            json_body(res).await,
            json!({"error": "salary 999 not found"})
        );
    }

    #[tokio::test]
    async fn non_numeric_ids_are_rejected() {
        let app = app().await;

        let res = app.oneshot(get_req("/expense/coffee")).await.unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn create_salary_then_fetch_it() {
        let app = app().await;

        let res = app
            .clone()
            .oneshot(post_json("/create-salary", json!({"amount": 1000})))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::CREATED);
        let created = json_body(res).await;
        assert_eq!(created["amount"], 1000);

        let id = created["id"].as_i64().unwrap();
        let res = app.oneshot(get_req(&format!("/salary/{id}"))).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(json_body(res).await, created);
    }

    #[tokio::test]
    async fn list_salary_is_idempotent_between_reads() {
        let app = app().await;

        for amount in [1000, 1200] {
            let res = app
                .clone()
                .oneshot(post_json("/create-salary", json!({"amount": amount})))
                .await
                .unwrap();
            assert_eq!(res.status(), StatusCode::CREATED);
        }

        let first = json_body(app.clone().oneshot(get_req("/list-salary")).await.unwrap()).await;
        let second = json_body(app.oneshot(get_req("/list-salary")).await.unwrap()).await;

        assert_eq!(first, second);
        assert_eq!(first.as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn overview_starts_empty() {
        let app = app().await;

        let res = app.oneshot(get_req("/overview")).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);

        let overview: Overview = serde_json::from_value(json_body(res).await).unwrap();
        assert!(overview.expense_history.is_empty());
        assert!(overview.salary_history.is_empty());
        assert_eq!(overview.total_expense, 0);
        assert_eq!(overview.total_salary, 0);
        assert_eq!(overview.remaining, 0);
    }

    #[tokio::test]
    async fn overview_reflects_one_expense_and_one_salary() {
        let app = app().await;

        let res = app
            .clone()
            .oneshot(post_json(
                "/create-expense",
                json!({"name": "coffee", "amount": 5, "category": "food"}),
            ))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::CREATED);

        let res = app
            .clone()
            .oneshot(post_json("/create-salary", json!({"amount": 1000})))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::CREATED);

        let res = app.oneshot(get_req("/overview")).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(
            json_body(res).await,
            json!({
                "expense_history": [5],
                "salary_history": [1000],
                "total_expense": 5,
                "total_salary": 1000,
                "remaining": 995
            })
        );
    }

    #[tokio::test]
    async fn overview_aggregates_both_histories() {
        let app = app().await;

        create_expense(&app, "coffee", 995).await;
        create_expense(&app, "refund", -200).await;
        for amount in [1000, 1200] {
            let res = app
                .clone()
                .oneshot(post_json("/create-salary", json!({"amount": amount})))
                .await
                .unwrap();
            assert_eq!(res.status(), StatusCode::CREATED);
        }

        let res = app.oneshot(get_req("/overview")).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);

        let overview: Overview = serde_json::from_value(json_body(res).await).unwrap();
        assert_eq!(overview.expense_history, vec![995, -200]);
        assert_eq!(overview.salary_history, vec![1000, 1200]);
        assert_eq!(overview.total_expense, 795);
        assert_eq!(overview.total_salary, 2200);
        assert_eq!(overview.remaining, 1405);
    }
}
