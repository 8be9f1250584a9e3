//! Search endpoints: the combined dispatcher plus the phone-only and
//! name-only paths.
//!
//! A missing or blank `q` renders an empty JSON list without touching the
//! store, so the UI's empty search box never costs a remote read.

use salvo::writing::Json;
use salvo::{Depot, Request, Response, Router, handler};

use voterslip_service::search;
use voterslip_store::record::Voter;

use crate::error::AppResult;
use crate::store_handler::get_store_from_depot;

fn query_term(req: &Request) -> String {
    req.query::<String>("q").unwrap_or_default()
}

/// GET /api/voters/search?q= - combined phone-or-name search
#[handler]
async fn search_combined(req: &mut Request, depot: &mut Depot, res: &mut Response) -> AppResult<()> {
    let term = query_term(req);
    if term.trim().is_empty() {
        res.render(Json(Vec::<Voter>::new()));
        return Ok(());
    }

    let store = get_store_from_depot(depot)?;
    let results = search::search_voters(store.as_ref(), &term).await?;
    res.render(Json(results));
    Ok(())
}

/// GET /api/voters/search/phone?q= - phone path only
#[handler]
async fn search_phone(req: &mut Request, depot: &mut Depot, res: &mut Response) -> AppResult<()> {
    let term = query_term(req);
    if term.trim().is_empty() {
        res.render(Json(Vec::<Voter>::new()));
        return Ok(());
    }

    let store = get_store_from_depot(depot)?;
    let results = search::search_voter_by_phone(store.as_ref(), &term).await?;
    res.render(Json(results));
    Ok(())
}

/// GET /api/voters/search/name?q= - name-index path only
#[handler]
async fn search_name(req: &mut Request, depot: &mut Depot, res: &mut Response) -> AppResult<()> {
    let term = query_term(req);
    if term.trim().is_empty() {
        res.render(Json(Vec::<Voter>::new()));
        return Ok(());
    }

    let store = get_store_from_depot(depot)?;
    let results = search::search_voter_by_name(store.as_ref(), &term).await?;
    res.render(Json(results));
    Ok(())
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path("search")
        .get(search_combined)
        .push(Router::with_path("phone").get(search_phone))
        .push(Router::with_path("name").get(search_name))
}
