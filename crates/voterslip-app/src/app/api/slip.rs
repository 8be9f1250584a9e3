//! Slip artifacts for one voter: the downloadable HTML slip, the copy
//! blurb, the vCard, and the WhatsApp share payload.

use salvo::http::StatusCode;
use salvo::writing::{Json, Text};
use salvo::{Depot, Request, Response, Router, handler};
use serde::Serialize;

use voterslip_service::{search, slip};
use voterslip_store::record::Voter;

use crate::config::get_config_from_depot;
use crate::error::{AppResult, ErrorResponse};
use crate::store_handler::get_store_from_depot;

/// ## Summary
/// WhatsApp share payload
#[derive(Debug, Serialize)]
pub struct ShareResponse {
    pub message: String,
    pub url: String,
}

async fn require_voter(req: &mut Request, depot: &Depot) -> AppResult<Option<Voter>> {
    let store = get_store_from_depot(depot)?;
    let key = req.param::<String>("key").unwrap_or_default();
    Ok(search::voter_by_phone(store.as_ref(), &key).await?)
}

fn render_not_found(res: &mut Response) {
    res.status_code(StatusCode::NOT_FOUND);
    res.render(Json(ErrorResponse {
        error: "Voter not found".to_owned(),
    }));
}

/// GET /api/voters/{key}/slip - HTML slip as attachment download
#[handler]
async fn download_slip(req: &mut Request, depot: &mut Depot, res: &mut Response) -> AppResult<()> {
    let Some(voter) = require_voter(req, depot).await? else {
        render_not_found(res);
        return Ok(());
    };
    let config = get_config_from_depot(depot)?;

    let file_name = slip::slip_file_name(&voter);
    let _ = res.add_header(
        "Content-Disposition",
        format!("attachment; filename=\"{file_name}\""),
        true,
    );
    res.render(Text::Html(slip::slip_html(&voter, &config.campaign)));
    Ok(())
}

/// GET /api/voters/{key}/slip/text - plain-text copy blurb
#[handler]
async fn slip_text(req: &mut Request, depot: &mut Depot, res: &mut Response) -> AppResult<()> {
    let Some(voter) = require_voter(req, depot).await? else {
        render_not_found(res);
        return Ok(());
    };
    let config = get_config_from_depot(depot)?;

    res.render(Text::Plain(slip::copy_text(&voter, &config.campaign)));
    Ok(())
}

/// GET /api/voters/{key}/vcard - contact card as attachment download
#[handler]
async fn download_vcard(req: &mut Request, depot: &mut Depot, res: &mut Response) -> AppResult<()> {
    let Some(voter) = require_voter(req, depot).await? else {
        render_not_found(res);
        return Ok(());
    };

    let file_name = slip::vcard_file_name(&voter);
    let _ = res.add_header("Content-Type", "text/vcard; charset=utf-8", true);
    let _ = res.add_header(
        "Content-Disposition",
        format!("attachment; filename=\"{file_name}\""),
        true,
    );
    if let Err(e) = res.write_body(slip::vcard(&voter).into_bytes()) {
        tracing::error!(error = ?e, "Failed to write vCard body");
    }
    Ok(())
}

/// GET /api/voters/{key}/share/whatsapp - share message and `wa.me` link
#[handler]
async fn share_whatsapp(req: &mut Request, depot: &mut Depot, res: &mut Response) -> AppResult<()> {
    let Some(voter) = require_voter(req, depot).await? else {
        render_not_found(res);
        return Ok(());
    };
    let config = get_config_from_depot(depot)?;

    let fallback_origin = config.server.origin();
    let message = slip::whatsapp_message(&voter, &config.campaign, &fallback_origin);
    let url = slip::whatsapp_share_url(&voter, &config.campaign, &fallback_origin)?;

    res.render(Json(ShareResponse { message, url }));
    Ok(())
}

#[must_use]
pub fn routes() -> Router {
    Router::new()
        .push(
            Router::with_path("slip")
                .get(download_slip)
                .push(Router::with_path("text").get(slip_text)),
        )
        .push(Router::with_path("vcard").get(download_vcard))
        .push(Router::with_path("share/whatsapp").get(share_whatsapp))
}
