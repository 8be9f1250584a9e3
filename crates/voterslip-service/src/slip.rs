//! Slip and share formatting.
//!
//! Pure formatters from a [`Voter`] and the campaign identity to the
//! artifacts the portal hands out: the printable HTML slip, the clipboard
//! blurb, the WhatsApp share message and link, and a minimal vCard.

use voterslip_core::config::CampaignConfig;
use voterslip_core::util::filename::sanitize_file_stem;
use voterslip_store::record::Voter;

use crate::error::{ServiceError, ServiceResult};

const WHATSAPP_SHARE_BASE: &str = "https://wa.me/";

/// Fallback file-name stem when a voter record has no usable name.
const FALLBACK_STEM: &str = "voter";

fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Escapes a vCard text value per RFC 2426: backslash first, then the
/// separators, with newlines folded to the literal `\n` sequence.
fn escape_vcard(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace(',', "\\,")
        .replace(';', "\\;")
        .replace('\r', "")
        .replace('\n', "\\n")
}

/// ## Summary
/// Renders the standalone printable voting-slip HTML document: campaign
/// header (photo when configured, candidate name, ballot number), then
/// the voter details block. Voter fields are entity-escaped.
#[must_use]
pub fn slip_html(voter: &Voter, campaign: &CampaignConfig) -> String {
    let photo = campaign.photo_url.as_deref().map_or_else(String::new, |url| {
        format!("<img src=\"{}\" />\n", escape_html(url))
    });

    format!(
        r#"<html>
<head>
<title>Voting Slip</title>
<style>
body {{ font-family: Arial; padding: 20px; }}
.card {{ border: 2px solid #1e3a8a; padding: 20px; border-radius: 10px; }}
.header {{ display: flex; align-items: center; gap: 15px; }}
.header img {{ width: 100px; height: 120px; border-radius: 8px; border: 3px solid gold; }}
.name {{ font-size: 22px; font-weight: bold; }}
</style>
</head>
<body>
<div class="card">
<div class="header">
{photo}<div>
<div class="name">{candidate}</div>
<div>Ballot No: {ballot}</div>
</div>
</div>
<hr>
<h3>Voter Details</h3>
<p>Name: {name}</p>
<p>Voter ID: {voter_id}</p>
<p>Mobile: {mobile}</p>
<p>Address: {address}</p>
</div>
</body>
</html>
"#,
        candidate = escape_html(&campaign.candidate_name),
        ballot = escape_html(&campaign.ballot_number),
        name = escape_html(&voter.name),
        voter_id = escape_html(&voter.voter_id),
        mobile = escape_html(&voter.mobile),
        address = escape_html(&voter.address),
    )
}

/// `<name>_VotingSlip.html`, with the name reduced to an ASCII-safe stem.
#[must_use]
pub fn slip_file_name(voter: &Voter) -> String {
    format!(
        "{}_VotingSlip.html",
        sanitize_file_stem(&voter.name, FALLBACK_STEM)
    )
}

/// ## Summary
/// The clipboard blurb shown by the slip modal's copy action.
#[must_use]
pub fn copy_text(voter: &Voter, campaign: &CampaignConfig) -> String {
    format!(
        "{label} Voting Slip\nName: {name}\nSerial No: {sr_no}\nVoter ID: {voter_id}\nCandidate: {candidate}\nBallot No: {ballot}",
        label = campaign.election_label,
        name = voter.name,
        sr_no = voter.sr_no,
        voter_id = voter.voter_id,
        candidate = campaign.candidate_name,
        ballot = campaign.ballot_number,
    )
}

/// ## Summary
/// The WhatsApp share message. `fallback_origin` is used as the portal
/// link when the campaign does not configure a share origin.
#[must_use]
pub fn whatsapp_message(voter: &Voter, campaign: &CampaignConfig, fallback_origin: &str) -> String {
    let origin = campaign.share_origin.as_deref().unwrap_or(fallback_origin);
    format!(
        "\u{1f5f3}\u{fe0f} Voting Slip\nName: {name}\nBallot No: {ballot}\nCandidate: {candidate}\nView Slip:\n{origin}",
        name = voter.name,
        ballot = campaign.ballot_number,
        candidate = campaign.candidate_name,
    )
}

/// ## Summary
/// The `https://wa.me/?text=…` link carrying the percent-encoded share
/// message.
///
/// ## Errors
/// Returns an error if the share base URL fails to parse.
pub fn whatsapp_share_url(
    voter: &Voter,
    campaign: &CampaignConfig,
    fallback_origin: &str,
) -> ServiceResult<String> {
    let message = whatsapp_message(voter, campaign, fallback_origin);
    let mut url = reqwest::Url::parse(WHATSAPP_SHARE_BASE)
        .map_err(|e| ServiceError::ShareLink(e.to_string()))?;
    url.query_pairs_mut().append_pair("text", &message);
    Ok(url.as_str().to_owned())
}

/// ## Summary
/// A minimal vCard 3.0 contact card (FN + TEL), CRLF line endings per
/// RFC 2426, text values escaped.
#[must_use]
pub fn vcard(voter: &Voter) -> String {
    format!(
        "BEGIN:VCARD\r\nVERSION:3.0\r\nFN:{name}\r\nTEL:{tel}\r\nEND:VCARD\r\n",
        name = escape_vcard(&voter.name),
        tel = escape_vcard(&voter.mobile),
    )
}

/// `<name>.vcf`, same stem sanitization as the slip download.
#[must_use]
pub fn vcard_file_name(voter: &Voter) -> String {
    format!("{}.vcf", sanitize_file_stem(&voter.name, FALLBACK_STEM))
}
