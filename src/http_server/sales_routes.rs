//! Sales query and load routes
//!
//! - `GET /api/sales` - filtered, sorted, paginated search
//! - `GET /api/load-data` - copy the row source into the store

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};

use crate::executor::SearchPage;
use crate::search::{LoadReport, SearchError, SearchService};

use super::errors::{RestError, RestResult};

pub fn sales_routes(service: SearchService) -> Router {
    Router::new()
        .route("/sales", get(search_sales))
        .route("/load-data", get(load_data))
        .with_state(service)
}

/// Multi-select parameters repeat (`?gender=Male&gender=Female`)
async fn search_sales(
    State(service): State<SearchService>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> RestResult<Json<SearchPage>> {
    let criteria = service.prepare_pairs(&pairs)?;

    let page = run_blocking(move || service.search(&criteria)).await?;
    Ok(Json(page))
}

async fn load_data(State(service): State<SearchService>) -> RestResult<Json<LoadReport>> {
    let report = run_blocking(move || service.load_from_source()).await?;
    Ok(Json(report))
}

/// Store reads and source scans block; keep them off the async workers
async fn run_blocking<T, F>(task: F) -> RestResult<T>
where
    F: FnOnce() -> Result<T, SearchError> + Send + 'static,
    T: Send + 'static,
{
    let result = tokio::task::spawn_blocking(task)
        .await
        .map_err(|e| RestError::Internal(e.to_string()))?;
    Ok(result?)
}
