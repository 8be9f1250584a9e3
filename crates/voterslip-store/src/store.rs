use std::future::Future;
use std::pin::Pin;

use crate::error::StoreResult;
use crate::record::{NameIndex, PhoneKeySet, RawVoter, VoterMap};

pub type StoreFuture<'a, T> = Pin<Box<dyn Future<Output = StoreResult<T>> + Send + 'a>>;

/// Read contract over the remote voter roll. Dyn-compatible so one trait
/// object can be shared through the router depot; this system issues no
/// writes through it.
pub trait VoterStore: Send + Sync {
    /// Keyed read of the primary collection. `None` when no record exists
    /// at `key`.
    fn voter<'a>(&'a self, key: &'a str) -> StoreFuture<'a, Option<RawVoter>>;

    /// Full primary-collection read, key-ordered.
    fn voters(&self) -> StoreFuture<'_, VoterMap>;

    /// Full secondary-index read. `None` when the index node does not
    /// exist at all.
    fn name_index(&self) -> StoreFuture<'_, Option<NameIndex>>;

    /// Keyed read of one secondary-index entry; `name` must already be
    /// lowercased (the stored index is pre-lowercased).
    fn name_index_entry<'a>(&'a self, name: &'a str) -> StoreFuture<'a, Option<PhoneKeySet>>;
}
