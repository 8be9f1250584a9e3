//! Voter lookup: combined dispatcher, phone path, name-index path, exact
//! lookups, and the sorted roll listing.
//!
//! ## Summary
//! The phone path tries an exact keyed read first and only then scans the
//! full primary collection with a bidirectional digit-containment test.
//! The name path filters the pre-lowercased secondary index by substring
//! and hydrates every matched phone key concurrently.
//!
//! Both fallback reads fetch the entire collection or index in one
//! request. That is acceptable for a roll small enough to transfer
//! wholesale; at production scale these must become server-side queries.
//! Note that a range or prefix query cannot replace the phone scan
//! as-is: callers rely on the bidirectional partial match (a stored
//! number with a country-code prefix still matches the bare query, and
//! vice versa), which no key-range read reproduces.

use futures::future::try_join_all;

use voterslip_core::constants::PLACEHOLDER_KEY;
use voterslip_core::util::digits::{contains_digit, digits_only};
use voterslip_store::error::StoreError;
use voterslip_store::record::{RawVoter, Voter};
use voterslip_store::store::VoterStore;

use crate::error::{ServiceError, ServiceResult};

use icu::collator::options::CollatorOptions;
use icu::collator::{Collator, CollatorBorrowed, CollatorPreferences};

/// Optional in-memory slice over the sorted roll listing.
#[derive(Debug, Clone, Default)]
pub struct Page {
    /// Maximum number of entries to return; `None` means the full listing.
    pub limit: Option<usize>,
    /// Voter `id` to resume after; the slice starts just past its position
    /// in the sorted listing. Unknown ids start from the beginning.
    pub start_after: Option<String>,
}

fn collator() -> ServiceResult<CollatorBorrowed<'static>> {
    Collator::try_new(CollatorPreferences::default(), CollatorOptions::default())
        .map_err(|e| ServiceError::Collation(e.to_string()))
}

/// Sorts ascending by display name under the ICU root collation, the
/// locale-aware ordering the portal presents names in.
fn sort_by_name(voters: &mut [Voter]) -> ServiceResult<()> {
    let collator = collator()?;
    voters.sort_by(|a, b| collator.compare(&a.name, &b.name));
    Ok(())
}

/// ## Summary
/// Combined search over the roll. Terms carrying at least one digit lean
/// phone-number: the phone path runs first and its results are returned
/// when non-empty. Everything else, including digit-bearing terms the
/// phone path found nothing for, goes to the name path.
///
/// Empty and whitespace-only terms resolve to an empty list without any
/// store read.
///
/// ## Errors
/// Propagates store failures unmodified; no retry, no suppression.
#[tracing::instrument(skip(store))]
pub async fn search_voters(store: &dyn VoterStore, term: &str) -> ServiceResult<Vec<Voter>> {
    let trimmed = term.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    if contains_digit(trimmed) {
        let phone_results = search_voter_by_phone(store, trimmed).await?;
        if !phone_results.is_empty() {
            return Ok(phone_results);
        }
    }

    search_voter_by_name(store, trimmed).await
}

/// ## Summary
/// Phone-path lookup. The term is reduced to its digits; an exact keyed
/// read short-circuits before any scan, otherwise the full collection is
/// scanned with a bidirectional containment test on digit strings, so a
/// stored `919876543210` matches query `9876543210` and the other way
/// round. Scan results keep the collection's key order.
///
/// The `"Contact"` placeholder row never surfaces: the exact read
/// addresses a digits-only key space it cannot occupy, and the scan skips
/// it by key.
///
/// ## Errors
/// Propagates store failures unmodified.
#[tracing::instrument(skip(store))]
pub async fn search_voter_by_phone(
    store: &dyn VoterStore,
    phone: &str,
) -> ServiceResult<Vec<Voter>> {
    let digits = digits_only(phone);
    if digits.is_empty() {
        // An empty digit string would containment-match every record and
        // the keyed read would address the collection root.
        return Ok(Vec::new());
    }

    if let Some(raw) = store.voter(&digits).await? {
        return Ok(vec![Voter::from_raw(&digits, raw)]);
    }

    let all = store.voters().await?;
    let mut results = Vec::new();
    for (key, raw) in all {
        if key == PLACEHOLDER_KEY {
            continue;
        }
        let record_digits = digits_only(raw.mobile.as_deref().unwrap_or_default());
        if record_digits.is_empty() {
            // A record with no usable mobile digits is not a phone match.
            continue;
        }
        if record_digits.contains(&digits) || digits.contains(&record_digits) {
            results.push(Voter::from_raw(&key, raw));
        }
    }

    Ok(results)
}

/// ## Summary
/// Name-path lookup over the secondary index. The query is trimmed and
/// lowercased, matched by substring against the pre-lowercased index
/// names, and every phone key under a matching name is hydrated from the
/// primary collection. A missing index node yields an empty list; there
/// is deliberately no primary-collection scan fallback for names.
///
/// Output is sorted ascending by display name.
///
/// ## Errors
/// Propagates store failures, including any single failed hydration read.
#[tracing::instrument(skip(store))]
pub async fn search_voter_by_name(
    store: &dyn VoterStore,
    name: &str,
) -> ServiceResult<Vec<Voter>> {
    let needle = name.trim().to_lowercase();
    if needle.is_empty() {
        return Ok(Vec::new());
    }

    let Some(index) = store.name_index().await? else {
        return Ok(Vec::new());
    };

    let mut phone_keys = Vec::new();
    for (indexed_name, entry) in &index {
        if indexed_name.contains(&needle) {
            phone_keys.extend(entry.keys().map(String::as_str));
        }
    }

    let mut voters = hydrate(store, &phone_keys).await?;
    sort_by_name(&mut voters)?;
    Ok(voters)
}

/// Hydrates `phone_keys` from the primary collection, launching all reads
/// together and joining them, so latency is one round-trip rather than N.
/// Keys absent from the primary collection are skipped: the index may lag
/// behind the roll, and a dangling reference is "no such record", not an
/// error. One failed read fails the whole join.
async fn hydrate(store: &dyn VoterStore, phone_keys: &[&str]) -> ServiceResult<Vec<Voter>> {
    let reads = phone_keys.iter().map(|&phone| async move {
        let raw = store.voter(phone).await?;
        Ok::<(&str, Option<RawVoter>), StoreError>((phone, raw))
    });

    Ok(try_join_all(reads)
        .await?
        .into_iter()
        .filter_map(|(phone, raw)| raw.map(|raw| Voter::from_raw(phone, raw)))
        .collect())
}

/// ## Summary
/// Exact keyed lookup by phone number; no fallback scan. Terms with no
/// digits at all resolve to `None` without a store read.
///
/// ## Errors
/// Propagates store failures unmodified.
#[tracing::instrument(skip(store))]
pub async fn voter_by_phone(store: &dyn VoterStore, phone: &str) -> ServiceResult<Option<Voter>> {
    let digits = digits_only(phone);
    if digits.is_empty() {
        return Ok(None);
    }

    Ok(store
        .voter(&digits)
        .await?
        .map(|raw| Voter::from_raw(&digits, raw)))
}

/// ## Summary
/// Exact-name lookup: one keyed read of the index at the lowercased,
/// trimmed name, then concurrent hydration of its phone keys. A missing
/// entry yields an empty list. Sorted ascending by display name.
///
/// ## Errors
/// Propagates store failures, including any single failed hydration read.
#[tracing::instrument(skip(store))]
pub async fn voters_by_exact_name(
    store: &dyn VoterStore,
    name: &str,
) -> ServiceResult<Vec<Voter>> {
    let needle = name.trim().to_lowercase();
    if needle.is_empty() {
        return Ok(Vec::new());
    }

    let Some(entry) = store.name_index_entry(&needle).await? else {
        return Ok(Vec::new());
    };

    let phone_keys: Vec<&str> = entry.keys().map(String::as_str).collect();
    let mut voters = hydrate(store, &phone_keys).await?;
    sort_by_name(&mut voters)?;
    Ok(voters)
}

/// ## Summary
/// Full roll listing, placeholder excluded, sorted ascending by display
/// name, with an optional in-memory [`Page`] slice applied after sorting.
///
/// ## Errors
/// Propagates store failures unmodified.
#[tracing::instrument(skip(store))]
pub async fn list_voters(store: &dyn VoterStore, page: &Page) -> ServiceResult<Vec<Voter>> {
    let all = store.voters().await?;

    let mut voters: Vec<Voter> = all
        .into_iter()
        .filter(|(key, _)| key.as_str() != PLACEHOLDER_KEY)
        .map(|(key, raw)| Voter::from_raw(&key, raw))
        .collect();
    sort_by_name(&mut voters)?;

    let Some(limit) = page.limit else {
        return Ok(voters);
    };

    let start = page
        .start_after
        .as_deref()
        .and_then(|id| voters.iter().position(|voter| voter.id == id))
        .map_or(0, |position| position + 1);

    Ok(voters.into_iter().skip(start).take(limit).collect())
}
