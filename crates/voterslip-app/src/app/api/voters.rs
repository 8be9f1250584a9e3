//! Roll listing and exact keyed lookup.

use salvo::http::StatusCode;
use salvo::writing::Json;
use salvo::{Depot, Request, Response, Router, handler};

use voterslip_core::constants::VOTERS_ROUTE_COMPONENT;
use voterslip_service::search::{self, Page};

use crate::error::{AppResult, ErrorResponse};
use crate::store_handler::get_store_from_depot;

use super::{search as search_api, slip};

/// GET /api/voters?limit=&start_after= - sorted roll listing with an
/// optional in-memory slice
#[handler]
async fn list_voters(req: &mut Request, depot: &mut Depot, res: &mut Response) -> AppResult<()> {
    let store = get_store_from_depot(depot)?;
    let page = Page {
        limit: req.query::<usize>("limit"),
        start_after: req.query::<String>("start_after"),
    };

    let results = search::list_voters(store.as_ref(), &page).await?;
    res.render(Json(results));
    Ok(())
}

/// GET /api/voters/{key} - exact lookup by phone key; 404 when absent
#[handler]
async fn get_voter(req: &mut Request, depot: &mut Depot, res: &mut Response) -> AppResult<()> {
    let store = get_store_from_depot(depot)?;
    let key = req.param::<String>("key").unwrap_or_default();

    match search::voter_by_phone(store.as_ref(), &key).await? {
        Some(voter) => res.render(Json(voter)),
        None => {
            res.status_code(StatusCode::NOT_FOUND);
            res.render(Json(ErrorResponse {
                error: "Voter not found".to_owned(),
            }));
        }
    }
    Ok(())
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path(VOTERS_ROUTE_COMPONENT)
        .get(list_voters)
        .push(search_api::routes())
        .push(
            Router::with_path("{key}")
                .get(get_voter)
                .push(slip::routes()),
        )
}
